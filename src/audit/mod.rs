//! Model audit passes
//!
//! Provides the hygiene checks run over a loaded model:
//! - Unused columns (no measure reference, no relationship endpoint)
//! - Duplicate measures (same normalized expression)
//! - Missing descriptions (columns and measures)
//! - Orphan tables (not part of any relationship)
//!
//! Measure references are extracted once up front and passed into the unused
//! column check; the four checks are otherwise independent and read-only.

pub mod descriptions;
pub mod duplicates;
pub mod findings;
pub mod orphans;
pub mod ranking;
pub mod references;
pub mod report;
pub mod usage;

pub use descriptions::find_missing_descriptions;
pub use duplicates::{find_duplicate_measures, normalize_expression};
pub use findings::{DuplicateMeasure, ItemKind, MissingDescription, OrphanTable, UnusedColumn};
pub use orphans::find_orphan_tables;
pub use ranking::{AuditSummary, RankingRow, build_ranking};
pub use references::{
    FormulaText, PatternReferenceExtractor, ReferenceExtractor, SymbolicReference,
    extract_references,
};
pub use report::{AuditReport, Cell, FindingTable};
pub use usage::{UsedReferences, collect_used_references, find_unused_columns};

use crate::config::AuditConfig;
use crate::models::DataModel;
use tracing::info;

/// Runs every audit pass over a model
///
/// # Example
///
/// ```rust
/// use model_audit_sdk::audit::ModelAuditor;
/// use model_audit_sdk::config::AuditConfig;
/// use model_audit_sdk::models::{Column, DataModel, Measure, Table};
///
/// let model = DataModel::new(
///     vec![Table::new("T1")
///         .with_column(Column::new("A"))
///         .with_measure(Measure::new("M1", "T1[A]"))],
///     Vec::new(),
/// );
///
/// let report = ModelAuditor::new(AuditConfig::default()).audit(&model);
/// assert!(report.unused_columns.is_empty());
/// assert_eq!(report.orphan_tables.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct ModelAuditor<E: ReferenceExtractor = PatternReferenceExtractor> {
    config: AuditConfig,
    extractor: E,
}

impl ModelAuditor<PatternReferenceExtractor> {
    /// Create an auditor using the pattern extractor
    pub fn new(config: AuditConfig) -> Self {
        Self {
            config,
            extractor: PatternReferenceExtractor,
        }
    }
}

impl Default for ModelAuditor<PatternReferenceExtractor> {
    fn default() -> Self {
        Self::new(AuditConfig::default())
    }
}

impl<E: ReferenceExtractor> ModelAuditor<E> {
    /// Create an auditor with a custom reference extractor
    pub fn with_extractor(config: AuditConfig, extractor: E) -> Self {
        Self { config, extractor }
    }

    /// Audit a model. The result depends only on the model and config.
    pub fn audit(&self, model: &DataModel) -> AuditReport {
        info!(
            tables = model.tables.len(),
            columns = model.column_count(),
            measures = model.measure_count(),
            relationships = model.relationships.len(),
            "Starting model audit"
        );

        let used = collect_used_references(model, &self.extractor);

        let unused_columns = find_unused_columns(&model.tables, &model.relationships, &used);
        let duplicate_measures =
            find_duplicate_measures(model.measures(), self.config.blank_expressions);
        let missing_descriptions =
            find_missing_descriptions(&model.tables, self.config.blank_descriptions_missing);
        let orphan_tables = find_orphan_tables(&model.tables, &model.relationships);

        let ranking = build_ranking(
            &model.tables,
            &unused_columns,
            &missing_descriptions,
            &duplicate_measures,
        );
        let summary = AuditSummary::from_findings(
            &unused_columns,
            &duplicate_measures,
            &missing_descriptions,
            &orphan_tables,
        );

        info!(
            unused_columns = summary.unused_columns,
            duplicate_measures = summary.duplicate_measures,
            missing_descriptions = summary.missing_descriptions,
            orphan_tables = summary.orphan_tables,
            "Model audit complete"
        );

        AuditReport {
            unused_columns,
            duplicate_measures,
            missing_descriptions,
            orphan_tables,
            ranking,
            summary,
        }
    }
}

/// Audit a model with the default configuration
pub fn audit_model(model: &DataModel) -> AuditReport {
    ModelAuditor::new(AuditConfig::default()).audit(model)
}
