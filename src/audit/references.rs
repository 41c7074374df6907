//! Symbolic `table[column]` reference extraction from formula text
//!
//! Formulas are treated as opaque text: only the reference pattern is
//! recognised, nothing is parsed or evaluated. References produced by other
//! means (dynamic construction, unqualified `[column]` syntax inside a row
//! context, non-ASCII names) are not seen, so a column used only that way is
//! reported as unused.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::HashSet;

/// An optional single-quoted table name directly followed by `[column]`
static REFERENCE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"'?([A-Za-z0-9_ ]+)'?\[([A-Za-z0-9_ ]+)\]").expect("reference pattern is valid")
});

/// A `(table, column)` name pair found in formula text.
///
/// Purely a lookup key: it says nothing about whether the named table or
/// column exists.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SymbolicReference {
    pub table: String,
    pub column: String,
}

impl SymbolicReference {
    pub fn new(table: impl Into<String>, column: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            column: column.into(),
        }
    }
}

/// Formula text as it appears in a model document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormulaText {
    /// No expression at all
    Absent,
    /// A single string
    Text(String),
    /// Multiple text segments, joined with `\n` before scanning
    Segments(Vec<String>),
    /// Any other shape (number, object, ...)
    Unsupported,
}

impl FormulaText {
    /// The scannable text, or `None` when there is nothing to scan
    pub fn joined(&self) -> Option<Cow<'_, str>> {
        match self {
            FormulaText::Text(text) if !text.is_empty() => Some(Cow::Borrowed(text)),
            FormulaText::Segments(segments) if !segments.is_empty() => {
                Some(Cow::Owned(segments.join("\n")))
            }
            _ => None,
        }
    }

    /// Joined text, empty when absent or unsupported
    pub fn into_expression(self) -> String {
        match self {
            FormulaText::Text(text) => text,
            FormulaText::Segments(segments) => segments.join("\n"),
            FormulaText::Absent | FormulaText::Unsupported => String::new(),
        }
    }
}

impl From<&serde_json::Value> for FormulaText {
    fn from(value: &serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => FormulaText::Absent,
            serde_json::Value::String(text) => FormulaText::Text(text.clone()),
            serde_json::Value::Array(items) => FormulaText::Segments(
                items
                    .iter()
                    .filter_map(|item| item.as_str().map(str::to_string))
                    .collect(),
            ),
            _ => FormulaText::Unsupported,
        }
    }
}

impl From<Option<&serde_json::Value>> for FormulaText {
    fn from(value: Option<&serde_json::Value>) -> Self {
        value.map_or(FormulaText::Absent, FormulaText::from)
    }
}

impl From<Option<&str>> for FormulaText {
    fn from(value: Option<&str>) -> Self {
        value.map_or(FormulaText::Absent, |text| FormulaText::Text(text.to_string()))
    }
}

impl From<&str> for FormulaText {
    fn from(value: &str) -> Self {
        FormulaText::Text(value.to_string())
    }
}

impl From<Vec<String>> for FormulaText {
    fn from(value: Vec<String>) -> Self {
        FormulaText::Segments(value)
    }
}

/// Finds symbolic references in formula text.
///
/// The audit only depends on this trait, so a real formula parser can be
/// dropped in without changing any detector.
pub trait ReferenceExtractor {
    /// Scan a single string
    fn extract_from_str(&self, text: &str) -> HashSet<SymbolicReference>;

    /// Scan formula text of any shape. Absent, empty and unsupported input
    /// yields an empty set; segments are joined with `\n` first.
    fn extract(&self, text: &FormulaText) -> HashSet<SymbolicReference> {
        match text.joined() {
            Some(joined) => self.extract_from_str(&joined),
            None => HashSet::new(),
        }
    }
}

/// Regex-based extractor for `'Table'[Column]` and `Table[Column]`
#[derive(Debug, Clone, Copy, Default)]
pub struct PatternReferenceExtractor;

impl PatternReferenceExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl ReferenceExtractor for PatternReferenceExtractor {
    fn extract_from_str(&self, text: &str) -> HashSet<SymbolicReference> {
        REFERENCE_REGEX
            .captures_iter(text)
            .filter_map(|caps| {
                let table = caps.get(1)?.as_str().trim();
                let column = caps.get(2)?.as_str().trim();
                Some(SymbolicReference::new(table, column))
            })
            .collect()
    }
}

/// Extract references with the default pattern extractor
pub fn extract_references(text: &FormulaText) -> HashSet<SymbolicReference> {
    PatternReferenceExtractor.extract(text)
}
