use crate::ir::{IrNode, StyleMap, BASE_CLASS};
use std::collections::HashSet;

fn write_rule(lines: &mut Vec<String>, class_name: &str, styles: &StyleMap) {
    lines.push(format!(".{} {{", class_name));
    for (key, value) in styles.iter() {
        lines.push(format!("  {}: {};", key, value));
    }
    lines.push("}".to_string());
}

/// One rule per distinct descendant class name; rule-less nodes are still walked.
fn write_child_rules(lines: &mut Vec<String>, node: &IrNode, seen: &mut HashSet<String>) {
    for child in &node.children {
        if !child.styles.is_empty() && seen.insert(child.class_name.clone()) {
            lines.push(String::new());
            write_rule(lines, &child.class_name, &child.styles);
        }
        write_child_rules(lines, child, seen);
    }
}

/// Renders the CSS module (`<Name>.module.css`): the `.base` rule, one rule
/// per variant value whose variant differs from the base, then the element
/// classes of the base tree and every variant tree.
pub fn emit_stylesheet(ir: &IrNode) -> String {
    let mut lines: Vec<String> = Vec::new();

    write_rule(&mut lines, BASE_CLASS, &ir.styles);

    let mut written_variants: HashSet<String> = HashSet::new();
    for variant in &ir.variants {
        let delta = ir.styles.diff(&variant.node.styles);
        if delta.is_empty() {
            continue;
        }
        for value in variant.property_values.values() {
            let class_name = value.to_lowercase();
            if class_name == BASE_CLASS {
                tracing::debug!("variant value {:?} clashes with the base class, skipping", value);
                continue;
            }
            if !written_variants.insert(class_name.clone()) {
                continue;
            }
            lines.push(String::new());
            write_rule(&mut lines, &class_name, &delta);
        }
    }

    let mut seen: HashSet<String> = HashSet::new();
    write_child_rules(&mut lines, ir, &mut seen);
    for variant in &ir.variants {
        write_child_rules(&mut lines, &variant.node, &mut seen);
    }

    lines.push(String::new());
    lines.join("\n")
}
