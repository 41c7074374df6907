//! Model loading functionality
//!
//! Turns a packaged template (or an extracted model document) into the typed
//! [`crate::models::DataModel`] the audit runs over.

pub mod document;
pub mod loader;

pub use document::{decode_document_text, parse_model_document, parse_model_text};
pub use loader::{ModelLoadResult, ModelLoader};

/// Error while obtaining the model document.
///
/// Any of these stops the audit: there are no partial results.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Not a template archive: {0}")]
    NotAnArchive(String),
    #[error("Archive entry not found: {entry}")]
    EntryNotFound { entry: String },
    #[error("Archive entry '{entry}' is too large: {size} bytes (limit: {limit} bytes)")]
    EntryTooLarge { entry: String, size: u64, limit: u64 },
    #[error("Encoding error: {0}")]
    Encoding(String),
    #[error("JSON parsing error: {0}")]
    JsonParse(String),
}

impl From<serde_json::Error> for LoadError {
    fn from(e: serde_json::Error) -> Self {
        LoadError::JsonParse(e.to_string())
    }
}
