use crate::naming::to_camel_case;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Class of the root element; every variant class is layered on top of it.
pub const BASE_CLASS: &str = "base";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum StyleValue {
    Text(String),
    Number(f64),
}

impl fmt::Display for StyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleValue::Text(s) => f.write_str(s),
            StyleValue::Number(n) => write!(f, "{}", n),
        }
    }
}

impl From<String> for StyleValue {
    fn from(s: String) -> Self {
        StyleValue::Text(s)
    }
}

impl From<&str> for StyleValue {
    fn from(s: &str) -> Self {
        StyleValue::Text(s.to_string())
    }
}

impl From<f64> for StyleValue {
    fn from(n: f64) -> Self {
        StyleValue::Number(n)
    }
}

/// CSS property name -> value, in generation order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StyleMap(IndexMap<&'static str, StyleValue>);

impl StyleMap {
    pub fn new() -> Self {
        StyleMap(IndexMap::new())
    }

    /// Overwrites an existing key in place, keeping its original position.
    pub fn insert(&mut self, key: &'static str, value: impl Into<StyleValue>) {
        self.0.insert(key, value.into());
    }

    pub fn get(&self, key: &str) -> Option<&StyleValue> {
        self.0.get(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &StyleValue)> + '_ {
        self.0.iter().map(|(k, v)| (*k, v))
    }

    pub fn merge(&mut self, other: StyleMap) {
        for (k, v) in other.0 {
            self.0.insert(k, v);
        }
    }

    /// Entries of `other` that are missing from `self` or carry a different value.
    pub fn diff(&self, other: &StyleMap) -> StyleMap {
        let mut out = StyleMap::new();
        for (k, v) in other.iter() {
            if self.get(k) != Some(v) {
                out.insert(k, v.clone());
            }
        }
        out
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tag {
    Block,
    Inline,
}

impl Tag {
    pub fn element(self) -> &'static str {
        match self {
            Tag::Block => "div",
            Tag::Inline => "span",
        }
    }
}

/// A Figma property default or value: either a real boolean or a string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropValue {
    Bool(bool),
    Text(String),
}

impl Default for PropValue {
    fn default() -> Self {
        PropValue::Text(String::new())
    }
}

impl PropValue {
    /// Booleans pass through; strings count as true only when spelled `true`.
    pub fn as_bool(&self) -> bool {
        match self {
            PropValue::Bool(b) => *b,
            PropValue::Text(s) => s.trim().eq_ignore_ascii_case("true"),
        }
    }

    pub fn to_lowercase(&self) -> String {
        self.to_string().to_lowercase()
    }
}

impl fmt::Display for PropValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropValue::Bool(b) => write!(f, "{}", b),
            PropValue::Text(s) => f.write_str(s),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PropKind {
    Variant,
    Boolean,
    Text,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentProp {
    /// Declared name with the `#hash` suffix stripped.
    pub name: String,
    pub kind: PropKind,
    pub default_value: PropValue,
    /// Allowed values, variant props only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
}

impl ComponentProp {
    /// Identifier used for the prop in generated code.
    pub fn prop_name(&self) -> String {
        to_camel_case(&self.name)
    }

    /// Lower-cased options, the casing both the props type and the catalog use.
    pub fn lowercase_options(&self) -> Vec<String> {
        self.options
            .iter()
            .flatten()
            .map(|o| o.to_lowercase())
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantInfo {
    pub display_name: String,
    pub property_values: IndexMap<String, String>,
    pub node: IrNode,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IrNode {
    pub tag: Tag,
    pub class_name: String,
    pub styles: StyleMap,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    pub children: Vec<IrNode>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub component_props: Vec<ComponentProp>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub variants: Vec<VariantInfo>,
    pub source_name: String,
}

impl IrNode {
    /// The first text-kind component prop, which stands in for literal text.
    pub fn text_prop(&self) -> Option<&ComponentProp> {
        self.component_props
            .iter()
            .find(|p| p.kind == PropKind::Text)
    }

    pub fn find_prop(&self, prop_name: &str) -> Option<&ComponentProp> {
        self.component_props
            .iter()
            .find(|p| p.prop_name() == prop_name)
    }
}
