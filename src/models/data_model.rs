//! Data model container

use super::measure::MeasureRef;
use super::relationship::Relationship;
use super::table::Table;
use serde::{Deserialize, Serialize};

/// In-memory model: tables in document order plus the relationship list.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DataModel {
    #[serde(default)]
    pub tables: Vec<Table>,
    #[serde(default)]
    pub relationships: Vec<Relationship>,
}

impl DataModel {
    pub fn new(tables: Vec<Table>, relationships: Vec<Relationship>) -> Self {
        Self {
            tables,
            relationships,
        }
    }

    /// Every measure in table order, then measure order within each table
    pub fn measures(&self) -> impl Iterator<Item = MeasureRef<'_>> {
        self.tables.iter().flat_map(|table| {
            table.measures.iter().map(move |measure| MeasureRef {
                table: &table.name,
                measure,
            })
        })
    }

    pub fn table(&self, name: &str) -> Option<&Table> {
        self.tables.iter().find(|t| t.name == name)
    }

    /// Exact `(table, column)` lookup
    pub fn has_column(&self, table: &str, column: &str) -> bool {
        self.table(table).is_some_and(|t| t.column(column).is_some())
    }

    pub fn column_count(&self) -> usize {
        self.tables.iter().map(|t| t.columns.len()).sum()
    }

    pub fn measure_count(&self) -> usize {
        self.tables.iter().map(|t| t.measures.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Column, Measure};

    #[test]
    fn test_measures_follow_table_order() {
        let model = DataModel::new(
            vec![
                Table::new("B").with_measure(Measure::new("m1", "1")),
                Table::new("A")
                    .with_measure(Measure::new("m2", "2"))
                    .with_measure(Measure::new("m3", "3")),
            ],
            Vec::new(),
        );

        let order: Vec<(&str, &str)> = model
            .measures()
            .map(|m| (m.table, m.measure.name.as_str()))
            .collect();
        assert_eq!(order, vec![("B", "m1"), ("A", "m2"), ("A", "m3")]);
        assert_eq!(model.measure_count(), 3);
    }

    #[test]
    fn test_has_column_is_exact() {
        let model = DataModel::new(
            vec![Table::new("Sales").with_column(Column::new("Amount"))],
            Vec::new(),
        );
        assert!(model.has_column("Sales", "Amount"));
        assert!(!model.has_column("sales", "Amount"));
        assert!(!model.has_column("Sales ", "Amount"));
    }
}
