//! Relationship model for the SDK

use serde::{Deserialize, Serialize};

/// A directed join declaration linking a column in one table to a column in
/// another.
///
/// Endpoints are plain name pairs, not references into the model. A
/// relationship naming a table or column that does not exist simply matches
/// nothing, and neither does an endpoint field absent from the document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct Relationship {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_table: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_column: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_table: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_column: Option<String>,
}

impl Relationship {
    pub fn new(
        from_table: impl Into<String>,
        from_column: impl Into<String>,
        to_table: impl Into<String>,
        to_column: impl Into<String>,
    ) -> Self {
        Self {
            from_table: Some(from_table.into()),
            from_column: Some(from_column.into()),
            to_table: Some(to_table.into()),
            to_column: Some(to_column.into()),
        }
    }

    pub fn from_table(&self) -> Option<&str> {
        self.from_table.as_deref()
    }

    pub fn to_table(&self) -> Option<&str> {
        self.to_table.as_deref()
    }

    /// `(fromTable, fromColumn)`, when both are present
    pub fn from_key(&self) -> Option<(&str, &str)> {
        Some((self.from_table.as_deref()?, self.from_column.as_deref()?))
    }

    /// `(toTable, toColumn)`, when both are present
    pub fn to_key(&self) -> Option<(&str, &str)> {
        Some((self.to_table.as_deref()?, self.to_column.as_deref()?))
    }
}
