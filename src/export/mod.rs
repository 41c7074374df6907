//! Export functionality
//!
//! Provides report sinks for audit results:
//! - JSON
//! - CSV (one file per finding table)
//! - XLSX workbook (one sheet per finding table, plus a summary chart)

pub mod csv;
pub mod json;
#[cfg(feature = "xlsx-export")]
pub mod xlsx;

use crate::audit::AuditReport;

/// Result of an export operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportResult {
    /// Exported content; binary for workbook output
    pub content: Vec<u8>,
    /// Format identifier
    pub format: String,
}

impl ExportResult {
    pub fn new(content: Vec<u8>, format: impl Into<String>) -> Self {
        Self {
            content,
            format: format.into(),
        }
    }

    /// Write the content to a file
    pub fn write_to(&self, path: &std::path::Path) -> Result<(), ExportError> {
        std::fs::write(path, &self.content)
            .map_err(|e| ExportError::IoError(format!("{}: {}", path.display(), e)))
    }
}

/// Error during export
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Serialization error: {0}")]
    SerializationError(String),
    #[error("IO error: {0}")]
    IoError(String),
    #[error("Unknown finding table: {0}")]
    UnknownTable(String),
    #[cfg(feature = "xlsx-export")]
    #[error("XLSX error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),
}

impl From<::csv::Error> for ExportError {
    fn from(err: ::csv::Error) -> Self {
        ExportError::SerializationError(err.to_string())
    }
}

impl From<serde_json::Error> for ExportError {
    fn from(err: serde_json::Error) -> Self {
        ExportError::SerializationError(err.to_string())
    }
}

/// A sink that renders an audit report into one output document
pub trait ReportExporter {
    /// Format identifier carried on the [`ExportResult`]
    fn format(&self) -> &'static str;

    fn export(&self, report: &AuditReport) -> Result<ExportResult, ExportError>;
}

// Re-export for convenience
pub use self::csv::CsvExporter;
pub use self::json::JsonExporter;
#[cfg(feature = "xlsx-export")]
pub use self::xlsx::XlsxExporter;
