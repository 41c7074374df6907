//! Audit report and its tabular view

use super::findings::{DuplicateMeasure, MissingDescription, OrphanTable, UnusedColumn};
use super::ranking::{AuditSummary, RankingRow};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Everything one audit run produces
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditReport {
    pub unused_columns: Vec<UnusedColumn>,
    pub duplicate_measures: Vec<DuplicateMeasure>,
    pub missing_descriptions: Vec<MissingDescription>,
    pub orphan_tables: Vec<OrphanTable>,
    pub ranking: Vec<RankingRow>,
    pub summary: AuditSummary,
}

/// A single cell of a finding table
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    Text(String),
    Count(usize),
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Text(text) => write!(f, "{}", text),
            Cell::Count(count) => write!(f, "{}", count),
        }
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::Text(value.to_string())
    }
}

impl From<&String> for Cell {
    fn from(value: &String) -> Self {
        Cell::Text(value.clone())
    }
}

impl From<usize> for Cell {
    fn from(value: usize) -> Self {
        Cell::Count(value)
    }
}

/// A named table of findings, the shape handed to report sinks
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindingTable {
    pub name: &'static str,
    pub headers: &'static [&'static str],
    pub rows: Vec<Vec<Cell>>,
}

impl FindingTable {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

pub const UNUSED_COLUMNS: &str = "unused_columns";
pub const DUPLICATE_MEASURES: &str = "duplicate_measures";
pub const MISSING_DESCRIPTIONS: &str = "missing_descriptions";
pub const ORPHAN_TABLES: &str = "orphan_tables";
pub const RANKING: &str = "ranking";

impl AuditReport {
    /// The four finding tables followed by the ranking
    pub fn tables(&self) -> Vec<FindingTable> {
        vec![
            FindingTable {
                name: UNUSED_COLUMNS,
                headers: &["table", "column"],
                rows: self
                    .unused_columns
                    .iter()
                    .map(|u| vec![(&u.table).into(), (&u.column).into()])
                    .collect(),
            },
            FindingTable {
                name: DUPLICATE_MEASURES,
                headers: &["table1", "measure1", "table2", "measure2", "expression"],
                rows: self
                    .duplicate_measures
                    .iter()
                    .map(|d| {
                        vec![
                            (&d.table1).into(),
                            (&d.measure1).into(),
                            (&d.table2).into(),
                            (&d.measure2).into(),
                            (&d.expression).into(),
                        ]
                    })
                    .collect(),
            },
            FindingTable {
                name: MISSING_DESCRIPTIONS,
                headers: &["table", "name"],
                rows: self
                    .missing_descriptions
                    .iter()
                    .map(|m| vec![(&m.table).into(), (&m.name).into()])
                    .collect(),
            },
            FindingTable {
                name: ORPHAN_TABLES,
                headers: &["table"],
                rows: self
                    .orphan_tables
                    .iter()
                    .map(|o| vec![(&o.table).into()])
                    .collect(),
            },
            FindingTable {
                name: RANKING,
                headers: &[
                    "table",
                    "unused_columns",
                    "missing_descriptions",
                    "duplicate_measures",
                ],
                rows: self
                    .ranking
                    .iter()
                    .map(|r| {
                        vec![
                            (&r.table).into(),
                            r.unused_columns.into(),
                            r.missing_descriptions.into(),
                            r.duplicate_measures.into(),
                        ]
                    })
                    .collect(),
            },
        ]
    }

    /// Look up one table by name
    pub fn table(&self, name: &str) -> Option<FindingTable> {
        self.tables().into_iter().find(|t| t.name == name)
    }
}
