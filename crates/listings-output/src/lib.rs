//! Writes the cleaned record set as a JSON array of row objects.

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value as JsonValue};
use thiserror::Error;
use tracing::debug;

use listings_model::{RecordSet, Value};

/// Errors that can occur while writing the cleaned record set.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("failed to create output directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write output {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, OutputError>;

/// Serializes `records` to `path` as one JSON array of field-name-keyed
/// row objects, creating any missing destination directory first. Field
/// order follows the record set's column order.
pub fn write_records(records: &RecordSet, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|source| OutputError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    let rows: Vec<JsonValue> = records.rows.iter().map(|row| row_object(records, row)).collect();
    let file = File::create(path).map_err(|source| OutputError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::to_writer(BufWriter::new(file), &rows).map_err(|err| OutputError::Write {
        path: path.to_path_buf(),
        source: std::io::Error::other(err),
    })?;
    debug!(path = %path.display(), rows = records.len(), "wrote cleaned records");
    Ok(())
}

fn row_object(records: &RecordSet, row: &listings_model::Record) -> JsonValue {
    let mut object = Map::with_capacity(records.columns.len());
    for column in &records.columns {
        let value = match row.get(column) {
            Value::Missing => JsonValue::Null,
            other => serde_json::to_value(other).unwrap_or(JsonValue::Null),
        };
        object.insert(column.clone(), value);
    }
    JsonValue::Object(object)
}
