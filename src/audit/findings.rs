//! Finding rows produced by the audit passes

use serde::{Deserialize, Serialize};
use std::fmt;

/// A column not referenced by any measure and not part of any relationship
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnusedColumn {
    pub table: String,
    pub column: String,
}

/// A measure whose normalized expression matches an earlier one.
///
/// `table1`/`measure1` is the representative (first occurrence), `expression`
/// is the representative's original text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DuplicateMeasure {
    pub table1: String,
    pub measure1: String,
    pub table2: String,
    pub measure2: String,
    pub expression: String,
}

/// Kind of undocumented item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Column,
    Measure,
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemKind::Column => write!(f, "column"),
            ItemKind::Measure => write!(f, "measure"),
        }
    }
}

/// A column or measure without a description
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissingDescription {
    pub table: String,
    pub name: String,
    pub kind: ItemKind,
}

/// A table that appears on neither side of any relationship
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrphanTable {
    pub table: String,
}
