//! Duplicate measure detection

use super::findings::DuplicateMeasure;
use crate::config::BlankExpressionPolicy;
use crate::models::MeasureRef;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use tracing::debug;

/// Comparison key for a measure expression: every whitespace character
/// removed, lowercased.
///
/// ```rust
/// use model_audit_sdk::audit::duplicates::normalize_expression;
///
/// assert_eq!(normalize_expression(" sum( Sales[Amt] )\n"), "sum(sales[amt])");
/// ```
pub fn normalize_expression(expression: &str) -> String {
    expression
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_lowercase()
}

/// Pair every measure with the first earlier measure sharing its normalized
/// expression.
///
/// The first measure seen for a key is its representative; each later one
/// yields `(representative, later)`. Three measures with one key give two
/// pairs, both anchored on the representative.
pub fn find_duplicate_measures<'a, I>(
    measures: I,
    policy: BlankExpressionPolicy,
) -> Vec<DuplicateMeasure>
where
    I: IntoIterator<Item = MeasureRef<'a>>,
{
    let mut representatives: HashMap<String, MeasureRef<'a>> = HashMap::new();
    let mut duplicates = Vec::new();

    for current in measures {
        let key = normalize_expression(&current.measure.expression);
        if key.is_empty() && policy == BlankExpressionPolicy::Skip {
            continue;
        }

        match representatives.entry(key) {
            Entry::Occupied(entry) => {
                let first = entry.get();
                duplicates.push(DuplicateMeasure {
                    table1: first.table.to_string(),
                    measure1: first.measure.name.clone(),
                    table2: current.table.to_string(),
                    measure2: current.measure.name.clone(),
                    expression: first.measure.expression.clone(),
                });
            }
            Entry::Vacant(entry) => {
                entry.insert(current);
            }
        }
    }

    debug!(
        duplicates = duplicates.len(),
        distinct = representatives.len(),
        "Duplicate measure scan complete"
    );
    duplicates
}
