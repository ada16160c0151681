//! JSON reader.
//!
//! Scraped exports come in two shapes: a plain JSON array of row objects,
//! or the same array serialized twice so the top-level value is a string
//! containing JSON text. Both shapes must load to the same record set.

use std::fs;
use std::path::Path;

use serde_json::Value as JsonValue;

use listings_model::{Record, RecordSet, Value};

use crate::error::{IngestError, Result};

/// Reads a JSON listing file into a record set.
///
/// A `municipality` column, if present, is dropped here. This drop is
/// specific to the JSON path; CSV and Avro sources keep the column.
pub fn read_json_records(path: &Path) -> Result<RecordSet> {
    let content = fs::read_to_string(path).map_err(|source| IngestError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let rows = decode_rows(&content)?;
    let mut records = rows_to_record_set(rows)?;
    records.drop_column("municipality");
    Ok(records)
}

/// Decodes the document into a list of row values, unwrapping one layer
/// of double encoding when the top-level value is itself a JSON string.
fn decode_rows(content: &str) -> Result<Vec<JsonValue>> {
    let parsed: JsonValue =
        serde_json::from_str(content).map_err(|err| IngestError::JsonParse {
            message: err.to_string(),
        })?;
    let parsed = match parsed {
        JsonValue::String(inner) => {
            serde_json::from_str(&inner).map_err(|err| IngestError::JsonParse {
                message: err.to_string(),
            })?
        }
        other => other,
    };
    match parsed {
        JsonValue::Array(rows) => Ok(rows),
        _ => Err(IngestError::JsonNotAList),
    }
}

/// Builds the record set; columns appear in first-seen key order.
fn rows_to_record_set(rows: Vec<JsonValue>) -> Result<RecordSet> {
    let mut records = RecordSet::default();
    for (index, row) in rows.into_iter().enumerate() {
        let JsonValue::Object(fields) = row else {
            return Err(IngestError::JsonRowNotObject { index });
        };
        let mut record = Record::default();
        for (name, value) in fields {
            records.ensure_column(&name);
            record.set(&name, convert_value(value));
        }
        records.push_row(record);
    }
    Ok(records)
}

fn convert_value(value: JsonValue) -> Value {
    match value {
        JsonValue::Null => Value::Missing,
        JsonValue::Number(n) => n.as_f64().map(Value::Number).unwrap_or(Value::Missing),
        JsonValue::String(s) => Value::Text(s),
        JsonValue::Bool(b) => Value::Text(b.to_string()),
        // Nested structures are out of scope for the fixed field list;
        // keep their serialized form so nothing is silently lost.
        other => Value::Text(other.to_string()),
    }
}
