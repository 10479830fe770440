use super::{default_literal, quoted_options};
use crate::config::Config;
use crate::ir::{IrNode, PropKind, Tag, BASE_CLASS};

const CLICK_HANDLER: &str = "onClick";

fn escape_markup(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('{', "&#123;")
        .replace('}', "&#125;")
}

fn class_ref(class_name: &str) -> String {
    format!("styles.{}", class_name)
}

/// The root `className` expression. Variant props index the style module by
/// their current value, boolean props toggle a class of their own name.
fn class_name_expr(ir: &IrNode) -> String {
    let mut parts = vec![class_ref(BASE_CLASS)];
    for prop in &ir.component_props {
        let name = prop.prop_name();
        match prop.kind {
            PropKind::Variant => parts.push(format!("styles[{}]", name)),
            PropKind::Boolean => parts.push(format!("{} ? {} : ''", name, class_ref(&name))),
            PropKind::Text => {}
        }
    }
    if parts.len() == 1 {
        parts.remove(0)
    } else {
        format!("[{}].filter(Boolean).join(' ')", parts.join(", "))
    }
}

/// Literal text, or the first text prop when the component declares one.
fn text_content(ir: &IrNode, text: &str) -> String {
    match ir.text_prop() {
        Some(prop) => format!("{{{}}}", prop.prop_name()),
        None => escape_markup(text),
    }
}

fn render_children(lines: &mut Vec<String>, root: &IrNode, node: &IrNode, depth: usize) {
    let pad = "  ".repeat(depth);
    for child in &node.children {
        let class = class_ref(&child.class_name);
        let element = child.tag.element();
        match child.text.as_deref() {
            Some(text) if !text.is_empty() => {
                lines.push(format!(
                    "{}<{} className={{{}}}>{}</{}>",
                    pad,
                    element,
                    class,
                    text_content(root, text),
                    element
                ));
            }
            _ if !child.children.is_empty() => {
                lines.push(format!("{}<{} className={{{}}}>", pad, element, class));
                render_children(lines, root, child, depth + 1);
                lines.push(format!("{}</{}>", pad, element));
            }
            _ => lines.push(format!("{}<{} className={{{}}} />", pad, Tag::Block.element(), class)),
        }
    }
}

/// Renders the React component (`<Name>.tsx`).
pub fn emit_component(name: &str, ir: &IrNode, config: &Config) -> String {
    let props = &ir.component_props;
    let mut lines: Vec<String> = Vec::new();

    lines.push("import React from 'react';".to_string());
    lines.push(format!(
        "import styles from './{}.{}';",
        name, config.stylesheet_ext
    ));
    lines.push(String::new());

    // Props interface
    lines.push(format!("export interface {}Props {{", name));
    for prop in props {
        lines.push(format!("  /** {} */", prop.name));
        let ts_type = match prop.kind {
            PropKind::Variant if prop.options.as_ref().is_some_and(|o| !o.is_empty()) => {
                quoted_options(prop, " | ")
            }
            PropKind::Boolean => "boolean".to_string(),
            PropKind::Variant | PropKind::Text => "string".to_string(),
        };
        lines.push(format!("  {}?: {};", prop.prop_name(), ts_type));
    }
    lines.push("  /** Optional click handler */".to_string());
    lines.push(format!("  {}?: () => void;", CLICK_HANDLER));
    lines.push("}".to_string());
    lines.push(String::new());

    // Component function
    lines.push(format!("export const {} = ({{", name));
    for prop in props {
        lines.push(format!("  {} = {},", prop.prop_name(), default_literal(prop)));
    }
    lines.push(format!("  {},", CLICK_HANDLER));
    lines.push("  ...props".to_string());
    lines.push(format!("}}: {}Props) => {{", name));

    lines.push("  return (".to_string());
    lines.push(format!(
        "    <div className={{{}}} {}={{{}}} {{...props}}>",
        class_name_expr(ir),
        CLICK_HANDLER,
        CLICK_HANDLER
    ));
    if let Some(text) = ir.text.as_deref().filter(|t| !t.is_empty()) {
        lines.push(format!("      {}", text_content(ir, text)));
    }
    render_children(&mut lines, ir, ir, 3);
    lines.push("    </div>".to_string());
    lines.push("  );".to_string());
    lines.push("};".to_string());
    lines.push(String::new());

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::{ComponentProp, PropValue, StyleMap, Tag};

    fn leaf(class_name: &str, text: Option<&str>) -> IrNode {
        IrNode {
            tag: if text.is_some() { Tag::Inline } else { Tag::Block },
            class_name: class_name.to_string(),
            styles: StyleMap::new(),
            text: text.map(|t| t.to_string()),
            children: Vec::new(),
            component_props: Vec::new(),
            variants: Vec::new(),
            source_name: class_name.to_string(),
        }
    }

    fn with_children(class_name: &str, children: Vec<IrNode>) -> IrNode {
        IrNode {
            children,
            ..leaf(class_name, None)
        }
    }

    fn prop(name: &str, kind: PropKind, default: PropValue, options: Option<&[&str]>) -> ComponentProp {
        ComponentProp {
            name: name.to_string(),
            kind,
            default_value: default,
            options: options.map(|o| o.iter().map(|s| s.to_string()).collect()),
        }
    }

    #[test]
    fn test_plain_component() {
        let ir = with_children(
            "card",
            vec![
                leaf("title", Some("Hello <World>")),
                with_children("body", vec![leaf("divider", None)]),
            ],
        );
        let code = emit_component("Card", &ir, &Config::default());
        assert!(code.contains("import styles from './Card.module.css';"));
        assert!(code.contains("export interface CardProps {\n  /** Optional click handler */\n  onClick?: () => void;\n}"));
        assert!(code.contains("export const Card = ({\n  onClick,\n  ...props\n}: CardProps) => {"));
        assert!(code.contains("    <div className={styles.base} onClick={onClick} {...props}>"));
        assert!(code.contains("      <span className={styles.title}>Hello &lt;World&gt;</span>"));
        assert!(code.contains("      <div className={styles.body}>\n        <div className={styles.divider} />\n      </div>"));
    }

    #[test]
    fn test_props_and_class_expression() {
        let mut ir = with_children("button", vec![leaf("label", Some("Click Me"))]);
        ir.component_props = vec![
            prop("Size", PropKind::Variant, PropValue::Text("Large".into()), Some(&["Large", "Small"])),
            prop("Is Disabled", PropKind::Boolean, PropValue::Bool(false), None),
        ];
        let code = emit_component("Button", &ir, &Config::default());
        assert!(code.contains("  size?: 'large' | 'small';"));
        assert!(code.contains("  isDisabled?: boolean;"));
        assert!(code.contains("  size = 'large',\n  isDisabled = false,\n  onClick,"));
        assert!(code.contains(
            "className={[styles.base, styles[size], isDisabled ? styles.isDisabled : ''].filter(Boolean).join(' ')}"
        ));
        assert!(code.contains("<span className={styles.label}>Click Me</span>"));
    }

    #[test]
    fn test_text_prop_replaces_literal() {
        let mut ir = with_children("button", vec![leaf("label", Some("Click Me")), leaf("hint", Some("Hint"))]);
        ir.component_props = vec![
            prop("Label", PropKind::Text, PropValue::Text("Click Me".into()), None),
            prop("Caption", PropKind::Text, PropValue::Text("x".into()), None),
        ];
        let code = emit_component("Button", &ir, &Config::default());
        assert!(code.contains("<span className={styles.label}>{label}</span>"));
        assert!(code.contains("<span className={styles.hint}>{label}</span>"));
        assert!(code.contains("  label?: string;"));
        assert!(code.contains("  label = 'click me',"));
        assert!(!code.contains("{caption}"));
    }

    #[test]
    fn test_empty_text_is_self_closing_container() {
        let ir = with_children("root", vec![leaf("blank", Some(""))]);
        let code = emit_component("Root", &ir, &Config::default());
        assert!(code.contains("<div className={styles.blank} />"));
        assert!(!code.contains("<span className={styles.blank}"));
    }

    #[test]
    fn test_escape_markup() {
        assert_eq!(escape_markup("a & {b} < c >"), "a &amp; &#123;b&#125; &lt; c &gt;");
    }

    #[test]
    fn test_stylesheet_extension_follows_config() {
        let mut config = Config::default();
        config.stylesheet_ext = "css".to_string();
        let code = emit_component("Card", &leaf("card", None), &config);
        assert!(code.contains("import styles from './Card.css';"));
    }

    #[test]
    fn test_deterministic() {
        let ir = with_children("card", vec![leaf("title", Some("x"))]);
        let config = Config::default();
        assert_eq!(emit_component("Card", &ir, &config), emit_component("Card", &ir, &config));
    }
}
