//! Unused column detection
//!
//! A column counts as used when a measure formula references it or when it is
//! an endpoint of a relationship. Names are compared exactly as stored: the
//! extractor trims the names it finds, but table and column names from the
//! model are not trimmed or case-folded here.

use super::findings::UnusedColumn;
use super::references::{ReferenceExtractor, SymbolicReference};
use crate::models::{DataModel, Relationship, Table};
use std::collections::HashSet;
use tracing::debug;

/// References found across every measure formula of a model.
///
/// Built once per audit and read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UsedReferences {
    refs: HashSet<SymbolicReference>,
}

impl UsedReferences {
    pub fn new(refs: HashSet<SymbolicReference>) -> Self {
        Self { refs }
    }

    pub fn contains(&self, table: &str, column: &str) -> bool {
        self.refs.contains(&SymbolicReference::new(table, column))
    }

    pub fn len(&self) -> usize {
        self.refs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.refs.is_empty()
    }

    /// References in sorted order
    pub fn sorted(&self) -> Vec<&SymbolicReference> {
        let mut refs: Vec<_> = self.refs.iter().collect();
        refs.sort();
        refs
    }
}

impl FromIterator<SymbolicReference> for UsedReferences {
    fn from_iter<I: IntoIterator<Item = SymbolicReference>>(iter: I) -> Self {
        Self {
            refs: iter.into_iter().collect(),
        }
    }
}

/// Union of the references of every measure expression in the model
pub fn collect_used_references<E: ReferenceExtractor + ?Sized>(
    model: &DataModel,
    extractor: &E,
) -> UsedReferences {
    let used: UsedReferences = model
        .measures()
        .flat_map(|m| extractor.extract_from_str(&m.measure.expression))
        .collect();
    debug!(references = used.len(), "Collected measure references");
    used
}

/// Columns that are neither referenced nor a relationship endpoint, in table
/// then column order
pub fn find_unused_columns(
    tables: &[Table],
    relationships: &[Relationship],
    used: &UsedReferences,
) -> Vec<UnusedColumn> {
    let endpoints: HashSet<(&str, &str)> = relationships
        .iter()
        .flat_map(|r| [r.from_key(), r.to_key()])
        .flatten()
        .collect();

    let mut unused = Vec::new();
    for table in tables {
        for column in &table.columns {
            let key = (table.name.as_str(), column.name.as_str());
            if used.contains(key.0, key.1) || endpoints.contains(&key) {
                continue;
            }
            unused.push(UnusedColumn {
                table: table.name.clone(),
                column: column.name.clone(),
            });
        }
    }

    debug!(unused = unused.len(), "Unused column scan complete");
    unused
}
