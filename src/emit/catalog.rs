use super::{default_literal, js_string, quoted_options};
use crate::config::Config;
use crate::ir::{IrNode, PropKind, PropValue};
use crate::naming::to_camel_case;
use std::collections::HashSet;

const DEFAULT_STORY: &str = "Default";

fn write_arg_types(lines: &mut Vec<String>, ir: &IrNode) {
    lines.push("  argTypes: {".to_string());
    for prop in &ir.component_props {
        let name = prop.prop_name();
        match prop.kind {
            PropKind::Variant if prop.options.as_ref().is_some_and(|o| !o.is_empty()) => {
                lines.push(format!("    {}: {{", name));
                lines.push("      control: 'select',".to_string());
                lines.push(format!("      options: [{}],", quoted_options(prop, ", ")));
                lines.push("    },".to_string());
            }
            PropKind::Boolean => lines.push(format!("    {}: {{ control: 'boolean' }},", name)),
            PropKind::Variant | PropKind::Text => {
                lines.push(format!("    {}: {{ control: 'text' }},", name))
            }
        }
    }
    lines.push("  },".to_string());
}

/// One story arg from a variant's property value.
fn variant_arg(ir: &IrNode, key: &str, value: &str) -> String {
    let name = to_camel_case(key);
    let is_boolean = ir
        .find_prop(&name)
        .is_some_and(|p| p.kind == PropKind::Boolean);
    let literal = if is_boolean {
        PropValue::Text(value.to_string()).as_bool().to_string()
    } else {
        js_string(&value.to_lowercase())
    };
    format!("    {}: {},", name, literal)
}

/// Renders the Storybook module (`<Name>.stories.ts`): the meta entry, then
/// one story per distinct variant display name, or a single default story.
pub fn emit_catalog(name: &str, ir: &IrNode, source_url: &str, config: &Config) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push("import type { Meta, StoryObj } from '@storybook/react-vite';".to_string());
    lines.push("import { fn } from 'storybook/test';".to_string());
    lines.push(format!("import {{ {} }} from './{}';", name, name));
    lines.push(String::new());

    // Meta
    lines.push("const meta = {".to_string());
    lines.push(format!(
        "  title: {},",
        js_string(&format!("{}/{}", config.catalog_group, name))
    ));
    lines.push(format!("  component: {},", name));
    lines.push("  parameters: {".to_string());
    lines.push(format!("    layout: {},", js_string(&config.catalog_layout)));
    lines.push("    design: {".to_string());
    lines.push("      type: 'figma',".to_string());
    lines.push(format!("      url: {},", js_string(source_url)));
    lines.push("    },".to_string());
    lines.push("  },".to_string());
    if config.autodocs {
        lines.push("  tags: ['autodocs'],".to_string());
    }
    if !ir.component_props.is_empty() {
        write_arg_types(&mut lines, ir);
    }
    lines.push("  args: {".to_string());
    lines.push("    onClick: fn(),".to_string());
    for prop in &ir.component_props {
        lines.push(format!("    {}: {},", prop.prop_name(), default_literal(prop)));
    }
    lines.push("  },".to_string());
    lines.push(format!("}} satisfies Meta<typeof {}>;", name));
    lines.push(String::new());
    lines.push("export default meta;".to_string());
    lines.push("type Story = StoryObj<typeof meta>;".to_string());
    lines.push(String::new());

    // Stories
    if ir.variants.is_empty() {
        lines.push(format!("export const {}: Story = {{}};", DEFAULT_STORY));
        lines.push(String::new());
    } else {
        let mut generated: HashSet<&str> = HashSet::new();
        for variant in &ir.variants {
            let story_name = if variant.display_name.is_empty() {
                DEFAULT_STORY
            } else {
                variant.display_name.as_str()
            };
            if !generated.insert(story_name) {
                tracing::debug!("duplicate story name {:?}, keeping the first", story_name);
                continue;
            }
            lines.push(format!("export const {}: Story = {{", story_name));
            lines.push("  args: {".to_string());
            for (key, value) in &variant.property_values {
                lines.push(variant_arg(ir, key, value));
            }
            lines.push("  },".to_string());
            lines.push("};".to_string());
            lines.push(String::new());
        }
    }

    lines.join("\n")
}
