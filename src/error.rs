//! Error types for the codegen pipeline.

use thiserror::Error;

/// Result type alias for codegen operations.
pub type Result<T> = std::result::Result<T, CodegenError>;

/// Input errors. Mapping gaps are never errors; they are omitted from the output.
#[derive(Error, Debug)]
pub enum CodegenError {
    /// The design URL does not have the `/design/` or `/file/` shape, or lacks `node-id`.
    #[error(
        "Invalid Figma URL: {0}. Expected format: https://www.figma.com/design/<file-key>/...?node-id=<node-id>"
    )]
    InvalidUrl(String),

    /// The API response contained no node documents.
    #[error("No nodes returned from Figma API.")]
    EmptyResponse,

    /// No source URL was given and none could be derived.
    #[error("no design URL for {0} (pass --url or --file-key)")]
    MissingUrl(String),

    /// JSON error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
