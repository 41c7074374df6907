//! Measure model for the SDK

use super::column::is_documented;
use serde::{Deserialize, Serialize};

/// A named formula-derived calculation owned by a table.
///
/// `expression` holds the formula text. Documents may store it as several
/// text segments; those are joined with `\n` by the loader before the
/// measure is built, so every consumer sees a single string.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Measure {
    pub name: String,
    #[serde(default)]
    pub expression: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Measure {
    pub fn new(name: impl Into<String>, expression: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            expression: expression.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Same rules as [`super::Column::has_description`]
    pub fn has_description(&self, blank_is_missing: bool) -> bool {
        is_documented(self.description.as_deref(), blank_is_missing)
    }
}

/// A measure together with the name of the table that owns it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeasureRef<'a> {
    pub table: &'a str,
    pub measure: &'a Measure,
}
