//! Entry point dispatching a path to the format-specific reader.

use std::path::Path;

use tracing::debug;

use listings_model::RecordSet;

use crate::avro::read_avro_records;
use crate::csv::read_csv_records;
use crate::error::{IngestError, Result};
use crate::format::SourceFormat;
use crate::json::read_json_records;

/// Loads a listing file into a record set.
///
/// The file must exist before any parsing is attempted; the format is
/// chosen from the file-name suffix alone.
pub fn load_records(path: &Path) -> Result<RecordSet> {
    if !path.exists() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let format = SourceFormat::detect(path)?;
    debug!(path = %path.display(), ?format, "loading records");
    let records = match format {
        SourceFormat::Json => read_json_records(path)?,
        SourceFormat::Csv => read_csv_records(path)?,
        SourceFormat::Avro => read_avro_records(path)?,
    };
    debug!(rows = records.len(), columns = records.columns.len(), "loaded records");
    Ok(records)
}
