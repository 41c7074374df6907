//! Missing description detection

use super::findings::{ItemKind, MissingDescription};
use crate::models::Table;
use tracing::debug;

/// Undocumented columns and measures, in table order. Within a table all
/// columns come before all measures.
pub fn find_missing_descriptions(
    tables: &[Table],
    blank_is_missing: bool,
) -> Vec<MissingDescription> {
    let mut missing = Vec::new();

    for table in tables {
        let columns = table
            .columns
            .iter()
            .filter(|c| !c.has_description(blank_is_missing))
            .map(|c| (c.name.as_str(), ItemKind::Column));
        let measures = table
            .measures
            .iter()
            .filter(|m| !m.has_description(blank_is_missing))
            .map(|m| (m.name.as_str(), ItemKind::Measure));

        missing.extend(columns.chain(measures).map(|(name, kind)| MissingDescription {
            table: table.name.clone(),
            name: name.to_string(),
            kind,
        }));
    }

    debug!(missing = missing.len(), "Description scan complete");
    missing
}
