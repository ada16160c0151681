//! CSV reader.
//!
//! The first row is the header. Cells are typed on load: values that parse
//! as numbers become numeric, empty cells become missing, everything else
//! stays text.

use std::path::Path;

use ::csv::ReaderBuilder;

use listings_model::{Record, RecordSet, Value};

use crate::error::{IngestError, Result};

/// Reads a CSV listing file into a record set.
pub fn read_csv_records(path: &Path) -> Result<RecordSet> {
    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .map_err(|err| csv_error(path, &err))?;
    let headers: Vec<String> = reader
        .headers()
        .map_err(|err| csv_error(path, &err))?
        .iter()
        .map(normalize_header)
        .collect();
    let mut records = RecordSet::new(headers.clone());
    for result in reader.records() {
        let raw = result.map_err(|err| csv_error(path, &err))?;
        let mut record = Record::default();
        for (idx, header) in headers.iter().enumerate() {
            let cell = raw.get(idx).unwrap_or("");
            record.set(header, parse_cell(cell));
        }
        records.push_row(record);
    }
    Ok(records)
}

fn csv_error(path: &Path, err: &::csv::Error) -> IngestError {
    IngestError::CsvParse {
        path: path.to_path_buf(),
        message: err.to_string(),
    }
}

fn normalize_header(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Types a single CSV cell.
fn parse_cell(raw: &str) -> Value {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Value::Missing;
    }
    match trimmed.parse::<f64>() {
        Ok(number) => Value::Number(number),
        Err(_) => Value::Text(trimmed.to_string()),
    }
}
