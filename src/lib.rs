//! Figma node tree -> React component, CSS module and Storybook stories.
//!
//! The pipeline runs one way: [`parse::parse`] turns a raw node tree into the
//! IR, and three independent emitters render it. Every run is a full,
//! stateless transform.

pub mod config;
pub mod emit;
pub mod error;
pub mod ir;
pub mod naming;
pub mod parse;
pub mod raw;
pub mod source;
pub mod style;
pub mod url;

use config::Config;
use error::{CodegenError, Result};
use raw::RawNode;
use source::ApiResponse;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub filename: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedComponent {
    pub component_name: String,
    pub component: GeneratedFile,
    pub stylesheet: GeneratedFile,
    pub catalog: GeneratedFile,
}

impl GeneratedComponent {
    pub fn files(&self) -> [&GeneratedFile; 3] {
        [&self.component, &self.stylesheet, &self.catalog]
    }
}

/// Parses `document` and renders all three artifacts.
pub fn generate(document: &RawNode, source_url: &str, config: &Config) -> GeneratedComponent {
    let name = naming::component_name(&document.name);
    tracing::info!("generating {} from {:?} ({})", name, document.name, document.id);

    let ir = parse::parse(document);
    tracing::info!(
        "parsed IR: {} children, {} props, {} variants",
        ir.children.len(),
        ir.component_props.len(),
        ir.variants.len()
    );

    let component = emit::emit_component(&name, &ir, config);
    let stylesheet = emit::emit_stylesheet(&ir);
    let catalog = emit::emit_catalog(&name, &ir, source_url, config);
    tracing::info!(
        "emitted component ({} bytes), stylesheet ({} bytes), catalog ({} bytes)",
        component.len(),
        stylesheet.len(),
        catalog.len()
    );

    GeneratedComponent {
        component: GeneratedFile {
            filename: format!("{}.{}", name, config.component_ext),
            content: component,
        },
        stylesheet: GeneratedFile {
            filename: format!("{}.{}", name, config.stylesheet_ext),
            content: stylesheet,
        },
        catalog: GeneratedFile {
            filename: format!("{}.{}", name, config.catalog_ext),
            content: catalog,
        },
        component_name: name,
    }
}

/// Validates the design URL, locates the response's document and generates.
/// Fails before producing anything when either input is unusable.
pub fn compile(source_url: &str, response: &ApiResponse, config: &Config) -> Result<GeneratedComponent> {
    if url::parse_design_url(source_url).is_none() {
        return Err(CodegenError::InvalidUrl(source_url.to_string()));
    }
    let (_, document) = response.first_document()?;
    Ok(generate(document, source_url, config))
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"))
}

pub fn list_files(inputs: &[PathBuf]) -> io::Result<Vec<PathBuf>> {
    let mut out: Vec<PathBuf> = Vec::new();

    for p in inputs {
        if p.is_dir() {
            for entry in std::fs::read_dir(p)? {
                let sub_path = entry?.path();
                if sub_path.is_dir() {
                    out.extend(list_files(&[sub_path])?);
                } else if sub_path.is_file() && is_json(&sub_path) {
                    out.push(sub_path);
                }
            }
        } else if p.is_file() && is_json(p) {
            out.push(p.clone());
        }
    }

    out.sort();
    Ok(out)
}
