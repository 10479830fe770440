//! Serde model of the Figma REST node tree.
//!
//! Only the attributes the style mapper and parser read are modelled; every
//! other field in the export is ignored on deserialization. Enumerated style
//! attributes (alignment, sizing, text alignment) stay as strings so that an
//! unknown value maps to nothing instead of failing the whole document.

use crate::ir::PropValue;
use indexmap::IndexMap;
use serde::Deserialize;

/// The node `type` tag as exported by Figma.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NodeType {
    Document,
    Canvas,
    Frame,
    Group,
    Section,
    Component,
    ComponentSet,
    Instance,
    Rectangle,
    Ellipse,
    Line,
    RegularPolygon,
    Star,
    Vector,
    BooleanOperation,
    Slice,
    Text,
    #[default]
    #[serde(other)]
    Other,
}

/// Node types elided from the IR together with their whole subtree.
pub const SKIPPED_TYPES: &[NodeType] = &[
    NodeType::Vector,
    NodeType::BooleanOperation,
    NodeType::Slice,
    NodeType::Group,
];

/// How the parser treats a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// Text leaf.
    Text,
    /// Anything that renders as a block and may hold children.
    Container,
    /// Variant-bearing component set.
    ComponentSet,
    /// A component, usually one variant member of a set.
    ComponentMember,
    /// Elided along with its descendants.
    Skipped,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawNode {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default)]
    pub node_type: NodeType,
    #[serde(default = "default_visible")]
    pub visible: bool,
    #[serde(default)]
    pub children: Vec<RawNode>,

    // Auto layout
    pub layout_mode: Option<String>,
    pub layout_wrap: Option<String>,
    pub primary_axis_align_items: Option<String>,
    pub counter_axis_align_items: Option<String>,
    pub layout_sizing_horizontal: Option<String>,
    pub layout_sizing_vertical: Option<String>,
    pub item_spacing: Option<f64>,
    pub padding_left: Option<f64>,
    pub padding_right: Option<f64>,
    pub padding_top: Option<f64>,
    pub padding_bottom: Option<f64>,
    pub absolute_bounding_box: Option<BoundingBox>,

    // Visuals
    #[serde(default)]
    pub fills: Vec<Paint>,
    #[serde(default)]
    pub strokes: Vec<Paint>,
    pub stroke_weight: Option<f64>,
    pub corner_radius: Option<f64>,
    pub rectangle_corner_radii: Option<Vec<f64>>,
    pub opacity: Option<f64>,
    #[serde(default)]
    pub effects: Vec<Effect>,

    // Text
    pub characters: Option<String>,
    pub style: Option<TypeStyle>,

    // Component sets
    #[serde(default)]
    pub component_property_definitions: IndexMap<String, PropertyDefinition>,
}

fn default_visible() -> bool {
    true
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct BoundingBox {
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// RGBA with channels in the 0..=1 range.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Paint {
    #[serde(rename = "type")]
    pub paint_type: String,
    #[serde(default = "default_visible")]
    pub visible: bool,
    pub opacity: Option<f64>,
    pub color: Option<Color>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Offset {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Effect {
    #[serde(rename = "type")]
    pub effect_type: String,
    #[serde(default = "default_visible")]
    pub visible: bool,
    pub color: Option<Color>,
    pub offset: Option<Offset>,
    pub radius: Option<f64>,
    pub spread: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeStyle {
    pub font_family: Option<String>,
    pub font_size: Option<f64>,
    pub font_weight: Option<f64>,
    pub line_height_px: Option<f64>,
    pub letter_spacing: Option<f64>,
    pub text_align_horizontal: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PropertyType {
    Variant,
    Boolean,
    Text,
    InstanceSwap,
    #[serde(other)]
    Other,
}

/// One entry of a component set's `componentPropertyDefinitions`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyDefinition {
    #[serde(rename = "type")]
    pub property_type: PropertyType,
    #[serde(default)]
    pub default_value: PropValue,
    pub variant_options: Option<Vec<String>>,
}

impl RawNode {
    pub fn kind(&self) -> NodeKind {
        if SKIPPED_TYPES.contains(&self.node_type) {
            return NodeKind::Skipped;
        }
        match self.node_type {
            NodeType::Text => NodeKind::Text,
            NodeType::ComponentSet => NodeKind::ComponentSet,
            NodeType::Component => NodeKind::ComponentMember,
            _ => NodeKind::Container,
        }
    }

    pub fn from_json(text: &str) -> serde_json::Result<RawNode> {
        serde_json::from_str(text)
    }
}
