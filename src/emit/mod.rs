//! Text emitters. Each one is a pure function of the IR; they never see the
//! raw Figma tree and never talk to each other, so class names, prop names
//! and default values agree only because they are all derived here.

pub mod catalog;
pub mod component;
pub mod stylesheet;

pub use catalog::emit_catalog;
pub use component::emit_component;
pub use stylesheet::emit_stylesheet;

use crate::ir::{ComponentProp, PropKind};

/// Single-quoted JS string literal.
pub(crate) fn js_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('\'');
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            _ => out.push(c),
        }
    }
    out.push('\'');
    out
}

/// The declared default as a literal: booleans bare, everything else lower-cased and quoted.
pub(crate) fn default_literal(prop: &ComponentProp) -> String {
    match prop.kind {
        PropKind::Boolean => prop.default_value.as_bool().to_string(),
        PropKind::Variant | PropKind::Text => js_string(&prop.default_value.to_lowercase()),
    }
}

/// `'a' | 'b'` style list of lower-cased variant options.
pub(crate) fn quoted_options(prop: &ComponentProp, sep: &str) -> String {
    prop.lowercase_options()
        .iter()
        .map(|o| js_string(o))
        .collect::<Vec<_>>()
        .join(sep)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::PropValue;

    #[test]
    fn test_js_string_escapes() {
        assert_eq!(js_string("plain"), "'plain'");
        assert_eq!(js_string("it's"), "'it\\'s'");
        assert_eq!(js_string("a\\b"), "'a\\\\b'");
    }

    #[test]
    fn test_default_literal() {
        let variant = ComponentProp {
            name: "Size".into(),
            kind: PropKind::Variant,
            default_value: PropValue::Text("Large".into()),
            options: Some(vec!["Large".into(), "Small".into()]),
        };
        assert_eq!(default_literal(&variant), "'large'");
        assert_eq!(quoted_options(&variant, " | "), "'large' | 'small'");

        let flag = ComponentProp {
            name: "Disabled".into(),
            kind: PropKind::Boolean,
            default_value: PropValue::Text("true".into()),
            options: None,
        };
        assert_eq!(default_literal(&flag), "true");
    }
}
