use crate::ir::{ComponentProp, IrNode, PropKind, PropValue, Tag, VariantInfo, BASE_CLASS};
use crate::naming::{to_pascal_case, ClassNameScope};
use crate::raw::{NodeKind, PropertyType, RawNode};
use crate::style::map_styles;
use indexmap::IndexMap;
use std::collections::HashSet;

/// Builds the IR for a Figma node tree.
///
/// A component set yields the IR of its first visible variant member, with
/// the set's declared props and every variant attached. A set without any
/// visible member is parsed as a plain container.
pub fn parse(root: &RawNode) -> IrNode {
    match root.kind() {
        NodeKind::ComponentSet => parse_component_set(root),
        NodeKind::Text | NodeKind::Container | NodeKind::ComponentMember | NodeKind::Skipped => {
            parse_node(root, &mut class_scope(&[]))
        }
    }
}

fn class_scope(reserved: &[String]) -> ClassNameScope {
    let mut scope = ClassNameScope::new();
    scope.reserve(BASE_CLASS);
    for name in reserved {
        scope.reserve(name);
    }
    scope
}

fn parse_component_set(node: &RawNode) -> IrNode {
    let component_props = extract_component_props(node);

    let members: Vec<(&RawNode, IndexMap<String, String>)> = node
        .children
        .iter()
        .filter(|c| c.visible && c.kind() == NodeKind::ComponentMember)
        .map(|c| (c, parse_variant_name(&c.name)))
        .collect();

    // Variant value classes and boolean toggles share the stylesheet with element classes.
    let reserved: Vec<String> = members
        .iter()
        .flat_map(|(_, values)| values.values().map(|v| v.to_lowercase()))
        .chain(
            component_props
                .iter()
                .filter(|p| p.kind == PropKind::Boolean)
                .map(|p| p.prop_name()),
        )
        .collect();

    let variants: Vec<VariantInfo> = members
        .into_iter()
        .map(|(member, property_values)| VariantInfo {
            display_name: variant_display_name(&property_values),
            node: parse_node(member, &mut class_scope(&reserved)),
            property_values,
        })
        .collect();

    let base = match variants.first() {
        Some(first) => first.node.clone(),
        None => {
            tracing::warn!(
                "component set {:?} has no visible variants, parsing it as a container",
                node.name
            );
            parse_node(node, &mut class_scope(&reserved))
        }
    };

    tracing::debug!(
        "component set {:?}: {} props, {} variants",
        node.name,
        component_props.len(),
        variants.len()
    );

    IrNode {
        component_props,
        variants,
        source_name: node.name.clone(),
        ..base
    }
}

fn parse_node(node: &RawNode, scope: &mut ClassNameScope) -> IrNode {
    let class_name = scope.claim(&node.name);

    match node.kind() {
        NodeKind::Text => IrNode {
            tag: Tag::Inline,
            class_name,
            styles: map_styles(node, true),
            text: Some(node.characters.clone().unwrap_or_default()),
            children: Vec::new(),
            component_props: Vec::new(),
            variants: Vec::new(),
            source_name: node.name.clone(),
        },
        NodeKind::Container
        | NodeKind::ComponentSet
        | NodeKind::ComponentMember
        | NodeKind::Skipped => {
            let mut children = Vec::new();
            for child in &node.children {
                if !child.visible {
                    tracing::debug!("eliding hidden node {:?} ({})", child.name, child.id);
                    continue;
                }
                if child.kind() == NodeKind::Skipped {
                    tracing::debug!(
                        "eliding {:?} node {:?} ({})",
                        child.node_type,
                        child.name,
                        child.id
                    );
                    continue;
                }
                children.push(parse_node(child, scope));
            }
            IrNode {
                tag: Tag::Block,
                class_name,
                styles: map_styles(node, false),
                text: None,
                children,
                component_props: Vec::new(),
                variants: Vec::new(),
                source_name: node.name.clone(),
            }
        }
    }
}

/// Declared props of a component set, `#hash` suffixes stripped.
fn extract_component_props(node: &RawNode) -> Vec<ComponentProp> {
    let mut props = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();

    for (key, def) in &node.component_property_definitions {
        let name = key.split('#').next().unwrap_or(key).to_string();
        let prop = match def.property_type {
            PropertyType::Variant => ComponentProp {
                name,
                kind: PropKind::Variant,
                default_value: PropValue::Text(def.default_value.to_string()),
                options: def.variant_options.clone(),
            },
            PropertyType::Boolean => ComponentProp {
                name,
                kind: PropKind::Boolean,
                default_value: PropValue::Bool(def.default_value.as_bool()),
                options: None,
            },
            PropertyType::Text => ComponentProp {
                name,
                kind: PropKind::Text,
                default_value: PropValue::Text(def.default_value.to_string()),
                options: None,
            },
            PropertyType::InstanceSwap | PropertyType::Other => {
                tracing::debug!("skipping unsupported component property {:?}", key);
                continue;
            }
        };
        if !seen.insert(prop.prop_name()) {
            tracing::debug!("duplicate component property {:?}, keeping the first", key);
            continue;
        }
        props.push(prop);
    }
    props
}

/// `"Size=Large, Kind=Primary"` -> `{Size: Large, Kind: Primary}`.
/// Segments without a key or value are dropped.
pub fn parse_variant_name(name: &str) -> IndexMap<String, String> {
    let mut values = IndexMap::new();
    for part in name.split(',') {
        let mut kv = part.split('=').map(str::trim);
        match (kv.next(), kv.next()) {
            (Some(key), Some(value)) if !key.is_empty() && !value.is_empty() => {
                values.insert(key.to_string(), value.to_string());
            }
            _ => tracing::debug!("dropping variant segment {:?} of {:?}", part, name),
        }
    }
    values
}

/// `{Size: Large, Kind: Primary}` -> `"LargePrimary"`.
pub fn variant_display_name(values: &IndexMap<String, String>) -> String {
    values.values().map(|v| to_pascal_case(v)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn raw(value: Value) -> RawNode {
        serde_json::from_value(value).unwrap()
    }

    fn text(name: &str, characters: &str) -> Value {
        json!({"id": name, "name": name, "type": "TEXT", "characters": characters})
    }

    fn member(name: &str, r: f64) -> Value {
        json!({
            "id": name,
            "name": name,
            "type": "COMPONENT",
            "fills": [{"type": "SOLID", "color": {"r": r, "g": 0, "b": 0, "a": 1}}],
            "children": [text("Label", "Click Me")]
        })
    }

    fn button_set() -> RawNode {
        raw(json!({
            "id": "1:1",
            "name": "Button",
            "type": "COMPONENT_SET",
            "componentPropertyDefinitions": {
                "Size": {"type": "VARIANT", "defaultValue": "Large", "variantOptions": ["Large", "Small"]},
                "Kind": {"type": "VARIANT", "defaultValue": "Primary", "variantOptions": ["Primary"]}
            },
            "children": [
                member("Size=Large, Kind=Primary", 1.0),
                member("Size=Small, Kind=Primary", 0.0)
            ]
        }))
    }

    fn collect_sources(node: &IrNode, out: &mut Vec<String>) {
        out.push(node.source_name.clone());
        for c in &node.children {
            collect_sources(c, out);
        }
    }

    #[test]
    fn test_parse_is_idempotent() {
        let root = raw(json!({
            "name": "Card",
            "type": "FRAME",
            "layoutMode": "VERTICAL",
            "children": [text("Title", "Hello"), {"name": "Body", "type": "FRAME"}]
        }));
        assert_eq!(parse(&root), parse(&root));
    }

    #[test]
    fn test_text_is_leaf_with_text() {
        let root = raw(json!({
            "name": "Root",
            "type": "FRAME",
            "children": [
                {"name": "Empty", "type": "TEXT", "children": [{"name": "x", "type": "FRAME"}]},
                text("Greeting", "Hi")
            ]
        }));
        let ir = parse(&root);
        assert_eq!(ir.children[0].tag, Tag::Inline);
        assert_eq!(ir.children[0].text.as_deref(), Some(""));
        assert!(ir.children[0].children.is_empty());
        assert_eq!(ir.children[1].text.as_deref(), Some("Hi"));
    }

    #[test]
    fn test_skipped_subtrees_disappear() {
        let root = raw(json!({
            "name": "Root",
            "type": "FRAME",
            "children": [
                {"name": "Group", "type": "GROUP", "children": [text("Inside Group", "lost")]},
                {"name": "Icon", "type": "VECTOR"},
                {"name": "Ops", "type": "BOOLEAN_OPERATION", "children": [{"name": "Part", "type": "RECTANGLE"}]},
                {"name": "Slice", "type": "SLICE"},
                text("Kept", "ok")
            ]
        }));
        let mut sources = Vec::new();
        collect_sources(&parse(&root), &mut sources);
        assert_eq!(sources, vec!["Root", "Kept"]);
    }

    #[test]
    fn test_hidden_nodes_elided() {
        let root = raw(json!({
            "name": "Root",
            "type": "FRAME",
            "children": [
                {"name": "Hidden", "type": "FRAME", "visible": false, "children": [text("Deep", "x")]},
                {"name": "Shown", "type": "RECTANGLE"}
            ]
        }));
        let ir = parse(&root);
        assert_eq!(ir.children.len(), 1);
        assert_eq!(ir.children[0].source_name, "Shown");
    }

    #[test]
    fn test_children_keep_input_order() {
        let root = raw(json!({
            "name": "Root",
            "type": "FRAME",
            "children": [text("C", "3"), text("A", "1"), text("B", "2")]
        }));
        let ir = parse(&root);
        let names: Vec<&str> = ir.children.iter().map(|c| c.class_name.as_str()).collect();
        assert_eq!(names, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_boolean_prop_names_are_reserved_for_toggles() {
        let root = raw(json!({
            "name": "Button",
            "type": "COMPONENT_SET",
            "componentPropertyDefinitions": {
                "Disabled#1:0": {"type": "BOOLEAN", "defaultValue": false}
            },
            "children": [{
                "name": "State=Default",
                "type": "COMPONENT",
                "children": [{"name": "Disabled", "type": "RECTANGLE"}, text("Label", "Go")]
            }]
        }));
        let ir = parse(&root);
        let names: Vec<&str> = ir.children.iter().map(|c| c.class_name.as_str()).collect();
        assert_eq!(names, vec!["disabled2", "label"]);
        assert_eq!(ir.variants[0].node.children[0].class_name, "disabled2");
    }

    #[test]
    fn test_component_set() {
        let ir = parse(&button_set());
        assert_eq!(ir.source_name, "Button");
        assert_eq!(ir.component_props.len(), 2);
        assert_eq!(ir.component_props[0].name, "Size");
        assert_eq!(ir.component_props[0].kind, PropKind::Variant);
        assert_eq!(
            ir.component_props[0].options,
            Some(vec!["Large".to_string(), "Small".to_string()])
        );
        assert_eq!(ir.component_props[1].name, "Kind");

        let names: Vec<&str> = ir.variants.iter().map(|v| v.display_name.as_str()).collect();
        assert_eq!(names, vec!["LargePrimary", "SmallPrimary"]);
        assert_eq!(ir.variants[1].property_values["Size"], "Small");

        // the first variant is the base
        assert_eq!(ir.styles, ir.variants[0].node.styles);
        assert_eq!(ir.children, ir.variants[0].node.children);
    }

    #[test]
    fn test_variant_trees_share_class_names() {
        let ir = parse(&button_set());
        assert_eq!(
            ir.variants[0].node.children[0].class_name,
            ir.variants[1].node.children[0].class_name
        );
        assert_eq!(ir.variants[0].node.children[0].class_name, "label");
    }

    #[test]
    fn test_class_names_avoid_variant_values() {
        let set = raw(json!({
            "name": "Chip",
            "type": "COMPONENT_SET",
            "children": [{
                "name": "Kind=Primary",
                "type": "COMPONENT",
                "children": [text("Primary", "a"), text("Base", "b")]
            }]
        }));
        let ir = parse(&set);
        assert_eq!(ir.children[0].class_name, "primary2");
        assert_eq!(ir.children[1].class_name, "base2");
    }

    #[test]
    fn test_empty_component_set_degrades_to_container() {
        let set = raw(json!({
            "name": "Empty Set",
            "type": "COMPONENT_SET",
            "children": [
                {"name": "Size=Large", "type": "COMPONENT", "visible": false},
                {"name": "Note", "type": "FRAME"}
            ]
        }));
        let ir = parse(&set);
        assert!(ir.variants.is_empty());
        assert_eq!(ir.tag, Tag::Block);
        assert_eq!(ir.children.len(), 1);
        assert_eq!(ir.children[0].source_name, "Note");
    }

    #[test]
    fn test_component_props_kinds_and_hash_suffix() {
        let set = raw(json!({
            "name": "Toggle",
            "type": "COMPONENT_SET",
            "componentPropertyDefinitions": {
                "Disabled#4:2": {"type": "BOOLEAN", "defaultValue": false},
                "Label#9:1": {"type": "TEXT", "defaultValue": "Toggle"},
                "Icon#3:3": {"type": "INSTANCE_SWAP", "defaultValue": "5:5"},
                "Label#9:2": {"type": "TEXT", "defaultValue": "Second"}
            },
            "children": [{"name": "State=On", "type": "COMPONENT"}]
        }));
        let props = parse(&set).component_props;
        assert_eq!(props.len(), 2);
        assert_eq!(props[0].name, "Disabled");
        assert_eq!(props[0].kind, PropKind::Boolean);
        assert_eq!(props[0].default_value, PropValue::Bool(false));
        assert_eq!(props[1].name, "Label");
        assert_eq!(props[1].default_value, PropValue::Text("Toggle".into()));
        assert!(props[1].options.is_none());
    }

    #[test]
    fn test_parse_variant_name() {
        let v = parse_variant_name("Size=Large, Kind = Primary");
        assert_eq!(v.len(), 2);
        assert_eq!(v["Kind"], "Primary");

        let v = parse_variant_name("Size=Large, broken, =Orphan, Empty=");
        assert_eq!(v.keys().collect::<Vec<_>>(), vec!["Size"]);
    }

    #[test]
    fn test_variant_display_name() {
        let v = parse_variant_name("Size=extra large, State=hover");
        assert_eq!(variant_display_name(&v), "ExtraLargeHover");
    }
}
