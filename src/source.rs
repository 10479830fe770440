//! The `GET /v1/files/:key/nodes` response envelope.
//!
//! Fetching is left to the caller; this module only locates the node
//! document inside a response that has already been read.

use crate::error::{CodegenError, Result};
use crate::raw::RawNode;
use indexmap::IndexMap;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse {
    #[serde(default)]
    pub name: String,
    /// Keyed by requested node id; Figma sends `null` for unknown ids.
    #[serde(default)]
    pub nodes: IndexMap<String, Option<NodeEntry>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NodeEntry {
    pub document: RawNode,
}

impl ApiResponse {
    pub fn from_json(text: &str) -> Result<ApiResponse> {
        Ok(serde_json::from_str(text)?)
    }

    /// The first node key and its document.
    pub fn first_document(&self) -> Result<(&str, &RawNode)> {
        match self.nodes.first() {
            Some((key, Some(entry))) => Ok((key.as_str(), &entry.document)),
            _ => Err(CodegenError::EmptyResponse),
        }
    }
}

/// Input accepted by the CLI: a full API response or a bare node document.
#[derive(Debug, Clone)]
pub enum DesignInput {
    Response(ApiResponse),
    Document(RawNode),
}

impl DesignInput {
    pub fn from_json(text: &str) -> Result<DesignInput> {
        let value: serde_json::Value = serde_json::from_str(text)?;
        if value.get("nodes").is_some() {
            Ok(DesignInput::Response(serde_json::from_value(value)?))
        } else {
            Ok(DesignInput::Document(serde_json::from_value(value)?))
        }
    }

    /// The node id the document came from, when the input carries one.
    pub fn node_id(&self) -> Option<&str> {
        match self {
            DesignInput::Response(r) => r.nodes.keys().next().map(|k| k.as_str()),
            DesignInput::Document(d) if !d.id.is_empty() => Some(d.id.as_str()),
            DesignInput::Document(_) => None,
        }
    }

    pub fn document(&self) -> Result<&RawNode> {
        match self {
            DesignInput::Response(r) => r.first_document().map(|(_, doc)| doc),
            DesignInput::Document(d) => Ok(d),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_document() {
        let r = ApiResponse::from_json(
            r#"{"name": "Kit", "nodes": {"11:4": {"document": {"id": "11:4", "name": "Button", "type": "FRAME"}}}}"#,
        )
        .unwrap();
        let (key, doc) = r.first_document().unwrap();
        assert_eq!(key, "11:4");
        assert_eq!(doc.name, "Button");
    }

    #[test]
    fn test_empty_response() {
        let r = ApiResponse::from_json(r#"{"nodes": {}}"#).unwrap();
        assert!(matches!(r.first_document(), Err(CodegenError::EmptyResponse)));

        let r = ApiResponse::from_json(r#"{"nodes": {"1:2": null}}"#).unwrap();
        assert!(matches!(r.first_document(), Err(CodegenError::EmptyResponse)));
    }

    #[test]
    fn test_design_input_detection() {
        let input = DesignInput::from_json(r#"{"nodes": {"3:1": {"document": {"name": "A", "type": "FRAME"}}}}"#).unwrap();
        assert!(matches!(input, DesignInput::Response(_)));
        assert_eq!(input.node_id(), Some("3:1"));
        assert_eq!(input.document().unwrap().name, "A");

        let input = DesignInput::from_json(r#"{"id": "7:7", "name": "B", "type": "FRAME"}"#).unwrap();
        assert!(matches!(input, DesignInput::Document(_)));
        assert_eq!(input.node_id(), Some("7:7"));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(DesignInput::from_json("{"), Err(CodegenError::Json(_))));
    }
}
