//! Column model for the SDK

use serde::{Deserialize, Serialize};

/// Column model representing a field owned by a table
///
/// Columns are immutable once loaded. The name is unique within the owning
/// table; the description is optional documentation text.
///
/// # Example
///
/// ```rust
/// use model_audit_sdk::models::Column;
///
/// let column = Column::new("CustomerKey").with_description("Surrogate key");
/// assert!(column.has_description(false));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Column {
    /// Column name
    pub name: String,
    /// Column description/documentation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Column {
    /// Create an undocumented column with the given name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
        }
    }

    /// Attach a description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Whether the column carries documentation.
    ///
    /// An absent or empty description is missing. With `blank_is_missing`,
    /// a whitespace-only description is missing too.
    pub fn has_description(&self, blank_is_missing: bool) -> bool {
        is_documented(self.description.as_deref(), blank_is_missing)
    }
}

pub(crate) fn is_documented(description: Option<&str>, blank_is_missing: bool) -> bool {
    match description {
        None => false,
        Some(text) if blank_is_missing => !text.trim().is_empty(),
        Some(text) => !text.is_empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_description_is_missing() {
        let column = Column::new("A").with_description("");
        assert!(!column.has_description(false));
        assert!(!Column::new("A").has_description(false));
    }

    #[test]
    fn test_blank_description_policy() {
        let column = Column::new("A").with_description("   ");
        assert!(column.has_description(false));
        assert!(!column.has_description(true));
    }
}
