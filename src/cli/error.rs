//! CLI error types

use crate::config::ConfigError;
use crate::export::ExportError;
use crate::model::LoadError;
use std::path::PathBuf;

/// Errors surfaced by CLI commands
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("Failed to read {0:?}: {1}")]
    FileReadError(PathBuf, String),
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("Failed to load model: {0}")]
    Load(#[from] LoadError),
    #[error("Export failed: {0}")]
    Export(#[from] ExportError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}
