//! Output formatting for CLI

use crate::audit::{AuditReport, SymbolicReference};
use crate::model::ModelLoadResult;
use crate::model::loader::endpoint;

/// Format an audit in compact text mode
pub fn format_audit_output(loaded: &ModelLoadResult, report: &AuditReport) -> String {
    let mut output = String::new();
    let model = &loaded.model;

    output.push_str(&format!(
        "\n✅ Loaded {} table(s), {} column(s), {} measure(s), {} relationship(s)\n",
        model.tables.len(),
        model.column_count(),
        model.measure_count(),
        model.relationships.len()
    ));

    if !loaded.dangling_relationships.is_empty() {
        output.push_str("\n⚠️  Dangling Relationships:\n");
        for rel in &loaded.dangling_relationships {
            output.push_str(&format!(
                "  - {} -> {}\n",
                endpoint(rel.from_key()),
                endpoint(rel.to_key())
            ));
        }
    }

    if !report.unused_columns.is_empty() {
        output.push_str(&format!(
            "\n⚠️  Unused Columns ({}):\n",
            report.unused_columns.len()
        ));
        for unused in &report.unused_columns {
            output.push_str(&format!("  - {}[{}]\n", unused.table, unused.column));
        }
    }

    if !report.duplicate_measures.is_empty() {
        output.push_str(&format!(
            "\n⚠️  Duplicate Measures ({}):\n",
            report.duplicate_measures.len()
        ));
        for dup in &report.duplicate_measures {
            output.push_str(&format!(
                "  - {}[{}] = {}[{}]\n",
                dup.table1, dup.measure1, dup.table2, dup.measure2
            ));
        }
    }

    if !report.missing_descriptions.is_empty() {
        output.push_str(&format!(
            "\n⚠️  Missing Descriptions ({}):\n",
            report.missing_descriptions.len()
        ));
        for missing in &report.missing_descriptions {
            output.push_str(&format!(
                "  - {}[{}] ({})\n",
                missing.table, missing.name, missing.kind
            ));
        }
    }

    if !report.orphan_tables.is_empty() {
        output.push_str(&format!(
            "\n⚠️  Orphan Tables ({}):\n",
            report.orphan_tables.len()
        ));
        for orphan in &report.orphan_tables {
            output.push_str(&format!("  - {}\n", orphan.table));
        }
    }

    if !report.ranking.is_empty() {
        output.push_str("\nTable Ranking (unused / missing descriptions / duplicates):\n");
        for row in &report.ranking {
            output.push_str(&format!(
                "  {:>4}  {} ({} / {} / {})\n",
                row.total(),
                row.table,
                row.unused_columns,
                row.missing_descriptions,
                row.duplicate_measures
            ));
        }
    }

    if report.summary.is_clean() {
        output.push_str("\n✅ All checks passed!\n");
    } else {
        output.push_str(&format!(
            "\nSummary: {} unused column(s), {} duplicate measure(s), {} missing description(s), {} orphan table(s)\n",
            report.summary.unused_columns,
            report.summary.duplicate_measures,
            report.summary.missing_descriptions,
            report.summary.orphan_tables
        ));
    }

    output
}

/// Format extracted references, one `table[column]` per line
pub fn format_references(refs: &[&SymbolicReference]) -> String {
    if refs.is_empty() {
        return "No references found\n".to_string();
    }
    refs.iter()
        .map(|r| format!("{}[{}]\n", r.table, r.column))
        .collect()
}
