//! Model Audit SDK - Hygiene checks for tabular BI data models
//!
//! Provides unified interfaces for:
//! - Model loading (template archives and extracted model documents)
//! - Measure formula reference extraction
//! - Audit passes (unused columns, duplicate measures, missing descriptions, orphan tables)
//! - Result aggregation (per-table ranking, category totals)
//! - Report export (JSON, CSV, XLSX)

pub mod audit;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod export;
pub mod model;
pub mod models;

use std::path::Path;

// Re-export commonly used types
pub use audit::{
    AuditReport, AuditSummary, DuplicateMeasure, FormulaText, ItemKind, MissingDescription,
    ModelAuditor, OrphanTable, PatternReferenceExtractor, RankingRow, ReferenceExtractor,
    SymbolicReference, UnusedColumn, audit_model, extract_references,
};
pub use config::{AuditConfig, BlankExpressionPolicy};
pub use export::{CsvExporter, ExportError, ExportResult, JsonExporter, ReportExporter};
#[cfg(feature = "xlsx-export")]
pub use export::XlsxExporter;
pub use model::{LoadError, ModelLoadResult, ModelLoader};

// Re-export models
pub use models::{Column, DataModel, Measure, MeasureRef, Relationship, Table};

/// Load a model from disk and audit it.
///
/// Load failures abort; there are no partial results.
pub fn audit_path(
    path: &Path,
    config: &AuditConfig,
) -> Result<(ModelLoadResult, AuditReport), LoadError> {
    let loaded = ModelLoader::new(config.clone()).load_path(path)?;
    let report = ModelAuditor::new(config.clone()).audit(&loaded.model);
    Ok((loaded, report))
}
