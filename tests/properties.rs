use proptest::prelude::*;

use model_audit_sdk::audit::{FormulaText, audit_model, extract_references};
use model_audit_sdk::models::{Column, DataModel, Measure, Relationship, Table};
use std::collections::HashSet;

const NAMES: &[&str] = &["Sales", "Customer", "Dates", "Fact Sales", "A", "b"];

fn name() -> impl Strategy<Value = String> {
    prop::sample::select(NAMES).prop_map(str::to_string)
}

fn expression() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        (name(), name()).prop_map(|(t, c)| format!("SUM('{}'[{}])", t, c)),
        (name(), name()).prop_map(|(t, c)| format!("sum( {}[{}] )", t, c)),
        "[ a-zA-Z()\\[\\]']{0,16}",
    ]
}

fn table(table_name: String) -> impl Strategy<Value = Table> {
    (
        prop::collection::vec((name(), any::<bool>()), 0..4),
        prop::collection::vec((name(), expression()), 0..4),
    )
        .prop_map(move |(columns, measures)| {
            let mut table = Table::new(table_name.clone());
            let mut taken = HashSet::new();
            for (column, documented) in columns {
                if !taken.insert(column.clone()) {
                    continue;
                }
                let column = Column::new(column);
                table.columns.push(if documented {
                    column.with_description("doc")
                } else {
                    column
                });
            }
            let mut taken = HashSet::new();
            for (measure, expression) in measures {
                if !taken.insert(measure.clone()) {
                    continue;
                }
                table.measures.push(Measure::new(measure, expression));
            }
            table
        })
}

fn model() -> impl Strategy<Value = DataModel> {
    let tables = prop::sample::subsequence(NAMES, 0..=NAMES.len()).prop_flat_map(|names| {
        names
            .into_iter()
            .map(|n| table(n.to_string()))
            .collect::<Vec<_>>()
    });
    let relationships = prop::collection::vec(
        (name(), name(), name(), name()).prop_map(|(ft, fc, tt, tc)| Relationship::new(ft, fc, tt, tc)),
        0..4,
    );
    (tables, relationships).prop_map(|(tables, relationships)| DataModel::new(tables, relationships))
}

#[cfg(test)]
mod tests {
    use super::*;

    proptest! {
        #[test]
        fn test_relationship_columns_never_unused(model in model()) {
            let report = audit_model(&model);
            for rel in &model.relationships {
                for (table, column) in [rel.from_key(), rel.to_key()].into_iter().flatten() {
                    prop_assert!(!report
                        .unused_columns
                        .iter()
                        .any(|u| u.table == table && u.column == column));
                }
            }
        }

        #[test]
        fn test_duplicate_pairs_are_distinct(model in model()) {
            let report = audit_model(&model);
            let mut seen = HashSet::new();
            for dup in &report.duplicate_measures {
                let first = (dup.table1.as_str(), dup.measure1.as_str());
                let second = (dup.table2.as_str(), dup.measure2.as_str());
                prop_assert_ne!(first, second);
                prop_assert!(seen.insert((first, second)));
                prop_assert!(!seen.contains(&(second, first)));
            }
        }

        #[test]
        fn test_audit_is_idempotent(model in model()) {
            let first = serde_json::to_vec(&audit_model(&model)).unwrap();
            let second = serde_json::to_vec(&audit_model(&model)).unwrap();
            prop_assert_eq!(first, second);
        }

        #[test]
        fn test_one_ranking_row_per_table(model in model()) {
            let report = audit_model(&model);
            prop_assert_eq!(report.ranking.len(), model.tables.len());
            let duplicates: usize = report.ranking.iter().map(|r| r.duplicate_measures).sum();
            prop_assert_eq!(duplicates, report.duplicate_measures.len());
        }

        #[test]
        fn test_extract_never_panics(text in "\\PC*") {
            let _ = extract_references(&FormulaText::from(text.as_str()));
        }

        #[test]
        fn test_extracted_names_are_trimmed(text in "[ a-zA-Z0-9_'\\[\\]+]{0,40}") {
            for found in extract_references(&FormulaText::from(text.as_str())) {
                prop_assert_eq!(found.table.trim(), found.table.as_str());
                prop_assert_eq!(found.column.trim(), found.column.as_str());
            }
        }
    }
}
