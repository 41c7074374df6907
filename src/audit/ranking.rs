//! Per-table ranking and category totals

use super::findings::{DuplicateMeasure, MissingDescription, OrphanTable, UnusedColumn};
use crate::models::Table;
use serde::{Deserialize, Serialize};

/// Finding counts for one table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankingRow {
    pub table: String,
    pub unused_columns: usize,
    pub missing_descriptions: usize,
    /// Duplicate pairs whose representative measure lives in this table
    pub duplicate_measures: usize,
}

impl RankingRow {
    pub fn total(&self) -> usize {
        self.unused_columns + self.missing_descriptions + self.duplicate_measures
    }
}

/// One row per table, in table order.
///
/// Counts use exact table-name equality. A duplicate pair counts only for
/// the table of its first measure, never the second.
pub fn build_ranking(
    tables: &[Table],
    unused: &[UnusedColumn],
    missing: &[MissingDescription],
    duplicates: &[DuplicateMeasure],
) -> Vec<RankingRow> {
    tables
        .iter()
        .map(|table| {
            let name = table.name.as_str();
            RankingRow {
                table: table.name.clone(),
                unused_columns: unused.iter().filter(|u| u.table == name).count(),
                missing_descriptions: missing.iter().filter(|m| m.table == name).count(),
                duplicate_measures: duplicates.iter().filter(|d| d.table1 == name).count(),
            }
        })
        .collect()
}

/// Total findings per category
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditSummary {
    pub unused_columns: usize,
    pub duplicate_measures: usize,
    pub missing_descriptions: usize,
    pub orphan_tables: usize,
}

impl AuditSummary {
    pub fn from_findings(
        unused: &[UnusedColumn],
        duplicates: &[DuplicateMeasure],
        missing: &[MissingDescription],
        orphans: &[OrphanTable],
    ) -> Self {
        Self {
            unused_columns: unused.len(),
            duplicate_measures: duplicates.len(),
            missing_descriptions: missing.len(),
            orphan_tables: orphans.len(),
        }
    }

    /// `(category, count)` pairs in report order, for bar charts
    pub fn bars(&self) -> [(&'static str, usize); 4] {
        [
            ("unused_columns", self.unused_columns),
            ("duplicate_measures", self.duplicate_measures),
            ("missing_descriptions", self.missing_descriptions),
            ("orphan_tables", self.orphan_tables),
        ]
    }

    pub fn total(&self) -> usize {
        self.bars().iter().map(|(_, count)| count).sum()
    }

    pub fn is_clean(&self) -> bool {
        self.total() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::findings::ItemKind;

    #[test]
    fn test_duplicates_attributed_to_first_table() {
        let tables = vec![Table::new("A"), Table::new("B"), Table::new("Empty")];
        let duplicates = vec![DuplicateMeasure {
            table1: "A".to_string(),
            measure1: "m1".to_string(),
            table2: "B".to_string(),
            measure2: "m2".to_string(),
            expression: "1".to_string(),
        }];
        let unused = vec![UnusedColumn {
            table: "B".to_string(),
            column: "c".to_string(),
        }];
        let missing = vec![MissingDescription {
            table: "B".to_string(),
            name: "m2".to_string(),
            kind: ItemKind::Measure,
        }];

        let ranking = build_ranking(&tables, &unused, &missing, &duplicates);
        assert_eq!(ranking.len(), 3);
        assert_eq!((ranking[0].duplicate_measures, ranking[0].total()), (1, 1));
        assert_eq!(ranking[1].duplicate_measures, 0);
        assert_eq!(ranking[1].unused_columns, 1);
        assert_eq!(ranking[1].missing_descriptions, 1);
        assert_eq!(ranking[2].total(), 0);
    }

    #[test]
    fn test_summary_bars() {
        let summary = AuditSummary {
            unused_columns: 3,
            duplicate_measures: 1,
            missing_descriptions: 0,
            orphan_tables: 2,
        };
        assert_eq!(summary.total(), 6);
        assert_eq!(summary.bars()[3], ("orphan_tables", 2));
        assert!(AuditSummary::default().is_clean());
    }
}
