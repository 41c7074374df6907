//! Table model for the SDK

use super::column::Column;
use super::measure::Measure;
use serde::{Deserialize, Serialize};

/// A model table owning its columns and measures.
///
/// Tables form a strict tree: every column and measure belongs to exactly one
/// table. Insertion order of `columns` and `measures` is the traversal order
/// used by every audit pass.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Table {
    pub name: String,
    #[serde(default)]
    pub columns: Vec<Column>,
    #[serde(default)]
    pub measures: Vec<Measure>,
}

impl Table {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            columns: Vec::new(),
            measures: Vec::new(),
        }
    }

    pub fn with_column(mut self, column: Column) -> Self {
        self.columns.push(column);
        self
    }

    pub fn with_measure(mut self, measure: Measure) -> Self {
        self.measures.push(measure);
        self
    }

    /// Look up a column by its exact (case-sensitive, untrimmed) name
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }
}
