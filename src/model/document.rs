//! Model document decoding and coercion into [`DataModel`]
//!
//! Every field is read leniently: wrong types collapse to empty values and
//! never abort a load.

use super::LoadError;
use crate::audit::references::FormulaText;
use crate::models::{Column, DataModel, Measure, Relationship, Table};
use serde_json::Value;
use tracing::warn;

/// Decode document bytes into text.
///
/// Template archives store the schema as UTF-16LE with a BOM; extracted
/// copies are usually UTF-8. Without a BOM, a NUL second byte is taken as
/// UTF-16LE.
pub fn decode_document_text(bytes: &[u8]) -> Result<String, LoadError> {
    match bytes {
        [0xEF, 0xBB, 0xBF, rest @ ..] => decode_utf8(rest),
        [0xFF, 0xFE, rest @ ..] => decode_utf16(rest, u16::from_le_bytes),
        [0xFE, 0xFF, rest @ ..] => decode_utf16(rest, u16::from_be_bytes),
        [_, 0x00, ..] => decode_utf16(bytes, u16::from_le_bytes),
        _ => decode_utf8(bytes),
    }
}

fn decode_utf8(bytes: &[u8]) -> Result<String, LoadError> {
    String::from_utf8(bytes.to_vec())
        .map_err(|e| LoadError::Encoding(format!("Invalid UTF-8: {}", e)))
}

fn decode_utf16(bytes: &[u8], unit: fn([u8; 2]) -> u16) -> Result<String, LoadError> {
    if bytes.len() % 2 != 0 {
        return Err(LoadError::Encoding(format!(
            "UTF-16 document has odd length ({} bytes)",
            bytes.len()
        )));
    }
    let units: Vec<u16> = bytes
        .chunks_exact(2)
        .map(|pair| unit([pair[0], pair[1]]))
        .collect();
    String::from_utf16(&units).map_err(|e| LoadError::Encoding(format!("Invalid UTF-16: {}", e)))
}

/// Parse document text as JSON and build the model
pub fn parse_model_text(text: &str) -> Result<DataModel, LoadError> {
    let value: Value = serde_json::from_str(text)?;
    Ok(parse_model_document(&value))
}

/// Build a model from a parsed document.
///
/// Expected shape:
/// `model.tables[]: {name, columns[]: {name, description?}, measures[]: {name, expression, description?}}`
/// and `model.relationships[]: {fromTable, fromColumn, toTable, toColumn}`.
/// Missing keys give empty collections.
pub fn parse_model_document(value: &Value) -> DataModel {
    let model = value.get("model");

    let tables = objects(model.and_then(|m| m.get("tables")), "table")
        .map(parse_table)
        .collect();

    let relationships = objects(model.and_then(|m| m.get("relationships")), "relationship")
        .map(parse_relationship)
        .collect();

    DataModel {
        tables,
        relationships,
    }
}

fn parse_table(value: &Value) -> Table {
    let columns = objects(value.get("columns"), "column")
        .map(|c| Column {
            name: string_field(c, "name"),
            description: optional_string_field(c, "description"),
        })
        .collect();

    let measures = objects(value.get("measures"), "measure")
        .map(|m| Measure {
            name: string_field(m, "name"),
            expression: FormulaText::from(m.get("expression")).into_expression(),
            description: optional_string_field(m, "description"),
        })
        .collect();

    Table {
        name: string_field(value, "name"),
        columns,
        measures,
    }
}

fn parse_relationship(value: &Value) -> Relationship {
    Relationship {
        from_table: optional_string_field(value, "fromTable"),
        from_column: optional_string_field(value, "fromColumn"),
        to_table: optional_string_field(value, "toTable"),
        to_column: optional_string_field(value, "toColumn"),
    }
}

/// Object entries of an optional array; other shapes yield nothing
fn objects<'a>(value: Option<&'a Value>, kind: &'static str) -> impl Iterator<Item = &'a Value> {
    let items: &'a [Value] = match value {
        Some(Value::Array(items)) => items,
        Some(Value::Null) | None => &[],
        Some(other) => {
            warn!("Expected an array of {} entries, found {}", kind, type_name(other));
            &[]
        }
    };
    items.iter().filter(move |item| {
        let is_object = item.is_object();
        if !is_object {
            warn!("Skipping non-object {} entry: {}", kind, type_name(item));
        }
        is_object
    })
}

fn string_field(value: &Value, key: &str) -> String {
    value
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn optional_string_field(value: &Value, key: &str) -> Option<String> {
    value.get(key).and_then(Value::as_str).map(str::to_string)
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
