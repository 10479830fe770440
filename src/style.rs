//! Maps the visual attributes of a Figma node onto CSS declarations.
//!
//! Each sub-mapper owns a disjoint set of CSS properties and returns its own
//! [`StyleMap`]; [`map_styles`] merges them in a fixed order. Attributes that
//! are absent or carry an enum value with no CSS equivalent contribute
//! nothing.

use crate::ir::StyleMap;
use crate::raw::{Color, Effect, Paint, RawNode};

const PRIMARY_AXIS_ALIGN: &[(&str, &str)] = &[
    ("MIN", "flex-start"),
    ("CENTER", "center"),
    ("MAX", "flex-end"),
    ("SPACE_BETWEEN", "space-between"),
];

const COUNTER_AXIS_ALIGN: &[(&str, &str)] = &[
    ("MIN", "flex-start"),
    ("CENTER", "center"),
    ("MAX", "flex-end"),
    ("BASELINE", "baseline"),
];

const TEXT_ALIGN: &[(&str, &str)] = &[
    ("LEFT", "left"),
    ("CENTER", "center"),
    ("RIGHT", "right"),
    ("JUSTIFIED", "justify"),
];

fn lookup(table: &[(&str, &'static str)], key: Option<&str>) -> Option<&'static str> {
    let key = key?;
    table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

/// Pixel values come from the source unrounded.
pub fn px(value: f64) -> String {
    format!("{}px", value)
}

/// Rounds half up to two decimals, normalizing `-0` to `0`.
pub fn round2(value: f64) -> f64 {
    (value * 100.0 + 0.5).floor() / 100.0 + 0.0
}

fn channel(value: f64) -> u8 {
    (value * 255.0 + 0.5).floor().clamp(0.0, 255.0) as u8
}

/// `#rrggbb` when opaque, `rgba(r, g, b, a)` otherwise.
pub fn css_color(color: &Color, alpha: f64) -> String {
    let (r, g, b) = (channel(color.r), channel(color.g), channel(color.b));
    let a = round2(alpha);
    if a == 1.0 {
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    } else {
        format!("rgba({}, {}, {}, {})", r, g, b, a)
    }
}

/// First visible solid paint that carries a color.
fn first_solid(paints: &[Paint]) -> Option<(&Paint, &Color)> {
    paints
        .iter()
        .find(|p| p.visible && p.paint_type == "SOLID" && p.color.is_some())
        .and_then(|p| Some((p, p.color.as_ref()?)))
}

pub fn map_layout(node: &RawNode) -> StyleMap {
    let mut css = StyleMap::new();
    let direction = match node.layout_mode.as_deref() {
        None | Some("NONE") => return css,
        Some("VERTICAL") => "column",
        Some(_) => "row",
    };
    css.insert("display", "flex");
    css.insert("flex-direction", direction);
    if node.layout_wrap.as_deref() == Some("WRAP") {
        css.insert("flex-wrap", "wrap");
    }
    css
}

pub fn map_alignment(node: &RawNode) -> StyleMap {
    let mut css = StyleMap::new();
    if let Some(v) = lookup(PRIMARY_AXIS_ALIGN, node.primary_axis_align_items.as_deref()) {
        css.insert("justify-content", v);
    }
    if let Some(v) = lookup(COUNTER_AXIS_ALIGN, node.counter_axis_align_items.as_deref()) {
        css.insert("align-items", v);
    }
    css
}

pub fn map_spacing(node: &RawNode) -> StyleMap {
    let mut css = StyleMap::new();

    if let Some(gap) = node.item_spacing.filter(|g| *g > 0.0) {
        css.insert("gap", px(gap));
    }

    let top = node.padding_top.unwrap_or(0.0);
    let right = node.padding_right.unwrap_or(0.0);
    let bottom = node.padding_bottom.unwrap_or(0.0);
    let left = node.padding_left.unwrap_or(0.0);

    if top != 0.0 || right != 0.0 || bottom != 0.0 || left != 0.0 {
        let padding = if top == right && right == bottom && bottom == left {
            px(top)
        } else if top == bottom && left == right {
            format!("{} {}", px(top), px(right))
        } else {
            format!("{} {} {} {}", px(top), px(right), px(bottom), px(left))
        };
        css.insert("padding", padding);
    }
    css
}

pub fn map_size(node: &RawNode) -> StyleMap {
    let mut css = StyleMap::new();
    let bbox = node.absolute_bounding_box;

    match (node.layout_sizing_horizontal.as_deref(), bbox) {
        (Some("FIXED"), Some(b)) => css.insert("width", px(b.width)),
        (Some("FILL"), _) => css.insert("width", "100%"),
        _ => {}
    }
    match (node.layout_sizing_vertical.as_deref(), bbox) {
        (Some("FIXED"), Some(b)) => css.insert("height", px(b.height)),
        (Some("FILL"), _) => css.insert("height", "100%"),
        _ => {}
    }
    css
}

/// Fill color goes to `color` on text and `background-color` everywhere else.
pub fn map_fill(node: &RawNode, is_text: bool) -> StyleMap {
    let mut css = StyleMap::new();
    if let Some((paint, color)) = first_solid(&node.fills) {
        let key = if is_text { "color" } else { "background-color" };
        let alpha = paint.opacity.or(color.a).unwrap_or(1.0);
        css.insert(key, css_color(color, alpha));
    }
    css
}

pub fn map_border(node: &RawNode) -> StyleMap {
    let mut css = StyleMap::new();
    let Some(weight) = node.stroke_weight.filter(|w| *w > 0.0) else {
        return css;
    };
    // stroke paint opacity is not part of the border color
    if let Some((_, color)) = first_solid(&node.strokes) {
        css.insert(
            "border",
            format!("{} solid {}", px(weight), css_color(color, color.a.unwrap_or(1.0))),
        );
    }
    css
}

pub fn map_corner_radius(node: &RawNode) -> StyleMap {
    let mut css = StyleMap::new();

    if let Some([tl, tr, br, bl]) = node
        .rectangle_corner_radii
        .as_deref()
        .and_then(|r| <[f64; 4]>::try_from(r).ok())
    {
        if tl == tr && tr == br && br == bl {
            if tl > 0.0 {
                css.insert("border-radius", px(tl));
            }
        } else {
            css.insert(
                "border-radius",
                format!("{} {} {} {}", px(tl), px(tr), px(br), px(bl)),
            );
        }
    } else if let Some(r) = node.corner_radius.filter(|r| *r > 0.0) {
        css.insert("border-radius", px(r));
    }
    css
}

pub fn map_text_style(node: &RawNode) -> StyleMap {
    let mut css = StyleMap::new();
    let Some(style) = &node.style else {
        return css;
    };

    if let Some(family) = style.font_family.as_deref().filter(|f| !f.is_empty()) {
        css.insert("font-family", format!("'{}', sans-serif", family));
    }
    let font_size = style.font_size.filter(|s| *s != 0.0);
    if let Some(size) = font_size {
        css.insert("font-size", px(size));
    }
    if let Some(weight) = style.font_weight.filter(|w| *w != 0.0) {
        css.insert("font-weight", weight);
    }
    if let (Some(line_height), Some(size)) = (style.line_height_px.filter(|l| *l != 0.0), font_size) {
        css.insert("line-height", round2(line_height / size).to_string());
    }
    if let Some(spacing) = style.letter_spacing.filter(|s| *s != 0.0) {
        css.insert("letter-spacing", px(round2(spacing)));
    }
    if let Some(align) = lookup(TEXT_ALIGN, style.text_align_horizontal.as_deref()) {
        css.insert("text-align", align);
    }
    css
}

fn drop_shadow(effect: &Effect) -> Option<String> {
    if !effect.visible || effect.effect_type != "DROP_SHADOW" {
        return None;
    }
    let color = effect.color.as_ref()?;
    let (x, y) = effect.offset.map_or((0.0, 0.0), |o| (o.x, o.y));
    Some(format!(
        "{} {} {} {} {}",
        px(x),
        px(y),
        px(effect.radius.unwrap_or(0.0)),
        px(effect.spread.unwrap_or(0.0)),
        css_color(color, color.a.unwrap_or(1.0))
    ))
}

pub fn map_effects(node: &RawNode) -> StyleMap {
    let mut css = StyleMap::new();
    let shadows: Vec<String> = node.effects.iter().filter_map(drop_shadow).collect();
    if !shadows.is_empty() {
        css.insert("box-shadow", shadows.join(", "));
    }
    css
}

pub fn map_opacity(node: &RawNode) -> StyleMap {
    let mut css = StyleMap::new();
    if let Some(opacity) = node.opacity.filter(|o| *o < 1.0) {
        css.insert("opacity", round2(opacity));
    }
    css
}

/// All CSS declarations for one node. Text nodes route their fill to `color`
/// and additionally get font properties.
pub fn map_styles(node: &RawNode, is_text: bool) -> StyleMap {
    let mut css = map_layout(node);
    css.merge(map_alignment(node));
    css.merge(map_spacing(node));
    css.merge(map_size(node));
    css.merge(map_fill(node, is_text));
    css.merge(map_border(node));
    css.merge(map_corner_radius(node));
    if is_text {
        css.merge(map_text_style(node));
    }
    css.merge(map_effects(node));
    css.merge(map_opacity(node));
    css
}
