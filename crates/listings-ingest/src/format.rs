//! Source format detection from file-name suffixes.

use std::path::Path;

use crate::error::{IngestError, Result};

/// Supported input encodings, selected solely by file-name suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Json,
    Csv,
    Avro,
}

impl SourceFormat {
    /// Detects the format from the path's suffix, case-insensitively.
    pub fn detect(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .map(|ext| ext.to_string_lossy().to_lowercase())
            .unwrap_or_default();
        match extension.as_str() {
            "json" => Ok(SourceFormat::Json),
            "csv" => Ok(SourceFormat::Csv),
            "avro" => Ok(SourceFormat::Avro),
            _ => Err(IngestError::UnsupportedFormat { extension }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_supported_suffixes() {
        assert_eq!(
            SourceFormat::detect(Path::new("data/sample.json")).unwrap(),
            SourceFormat::Json
        );
        assert_eq!(
            SourceFormat::detect(Path::new("SAMPLE.CSV")).unwrap(),
            SourceFormat::Csv
        );
        assert_eq!(
            SourceFormat::detect(Path::new("listings.Avro")).unwrap(),
            SourceFormat::Avro
        );
    }

    #[test]
    fn rejects_unknown_suffixes() {
        let err = SourceFormat::detect(Path::new("sample.parquet")).unwrap_err();
        assert!(matches!(
            err,
            IngestError::UnsupportedFormat { extension } if extension == "parquet"
        ));
        assert!(SourceFormat::detect(Path::new("no_extension")).is_err());
    }
}
