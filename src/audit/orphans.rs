//! Orphan table detection

use super::findings::OrphanTable;
use crate::models::{Relationship, Table};
use std::collections::HashSet;
use tracing::debug;

/// Tables whose name is neither a `fromTable` nor a `toTable` of any
/// relationship, in table order.
///
/// Only table names matter: a relationship from `T` to a table that does not
/// exist still connects `T`. An absent endpoint connects nothing.
pub fn find_orphan_tables(tables: &[Table], relationships: &[Relationship]) -> Vec<OrphanTable> {
    let related: HashSet<&str> = relationships
        .iter()
        .flat_map(|r| [r.from_table(), r.to_table()])
        .flatten()
        .collect();

    let orphans: Vec<OrphanTable> = tables
        .iter()
        .filter(|t| !related.contains(t.name.as_str()))
        .map(|t| OrphanTable {
            table: t.name.clone(),
        })
        .collect();

    debug!(orphans = orphans.len(), "Orphan table scan complete");
    orphans
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_side_only_is_not_orphan() {
        let tables = vec![Table::new("T1"), Table::new("T2"), Table::new("T3")];
        let relationships = vec![Relationship::new("T2", "Key", "Missing", "Key")];

        let orphans = find_orphan_tables(&tables, &relationships);
        let names: Vec<&str> = orphans.iter().map(|o| o.table.as_str()).collect();
        assert_eq!(names, vec!["T1", "T3"]);
    }

    #[test]
    fn test_absent_endpoint_does_not_match_nameless_table() {
        let tables = vec![Table::new("Sales"), Table::new("")];
        let relationships = vec![Relationship {
            from_table: Some("Sales".to_string()),
            from_column: Some("Amount".to_string()),
            to_table: None,
            to_column: None,
        }];

        let orphans = find_orphan_tables(&tables, &relationships);
        let names: Vec<&str> = orphans.iter().map(|o| o.table.as_str()).collect();
        assert_eq!(names, vec![""]);
    }

    #[test]
    fn test_no_relationships_all_orphans() {
        let tables = vec![Table::new("A"), Table::new("B")];
        assert_eq!(find_orphan_tables(&tables, &[]).len(), 2);
    }
}
