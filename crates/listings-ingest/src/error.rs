//! Error types for listing data ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a listing file.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Input file not found or not readable.
    #[error("the provided file path does not exist: {path}")]
    FileNotFound { path: PathBuf },

    /// File-name suffix does not name a supported format.
    #[error("unsupported file format: .{extension}")]
    UnsupportedFormat { extension: String },

    /// Failed to read file contents.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Neither a direct nor a double-encoded JSON decode produced a value.
    #[error("unable to parse the provided JSON data: {message}")]
    JsonParse { message: String },

    /// The decoded JSON is not an array of rows.
    #[error("JSON content does not represent a list structure")]
    JsonNotAList,

    /// An element of the JSON array is not a row object.
    #[error("JSON row {index} is not an object")]
    JsonRowNotObject { index: usize },

    /// Failed to parse a CSV file.
    #[error("failed to parse CSV {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    /// Failed to parse an Avro container file.
    #[error("failed to parse Avro {path}: {message}")]
    AvroParse { path: PathBuf, message: String },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = IngestError::FileNotFound {
            path: PathBuf::from("/data/raw/sample.json"),
        };
        assert_eq!(
            err.to_string(),
            "the provided file path does not exist: /data/raw/sample.json"
        );
        let err = IngestError::UnsupportedFormat {
            extension: "xml".to_string(),
        };
        assert_eq!(err.to_string(), "unsupported file format: .xml");
    }
}
