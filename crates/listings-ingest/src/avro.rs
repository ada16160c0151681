//! Avro reader.
//!
//! Reads an Avro object-container file using its embedded schema. Every
//! datum must be a record; scalar fields map onto cell values and unions
//! are unwrapped to their carried value.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use apache_avro::Reader;
use apache_avro::types::Value as AvroValue;

use listings_model::{Record, RecordSet, Value};

use crate::error::{IngestError, Result};

/// Reads an Avro listing file into a record set.
pub fn read_avro_records(path: &Path) -> Result<RecordSet> {
    let file = File::open(path).map_err(|source| IngestError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = Reader::new(BufReader::new(file)).map_err(|err| avro_error(path, &err))?;
    let mut records = RecordSet::default();
    for datum in reader {
        let datum = datum.map_err(|err| avro_error(path, &err))?;
        let AvroValue::Record(fields) = datum else {
            return Err(IngestError::AvroParse {
                path: path.to_path_buf(),
                message: "expected record datum at top level".to_string(),
            });
        };
        let mut record = Record::default();
        for (name, value) in fields {
            records.ensure_column(&name);
            record.set(&name, convert_value(value, path)?);
        }
        records.push_row(record);
    }
    Ok(records)
}

fn avro_error(path: &Path, err: &apache_avro::Error) -> IngestError {
    IngestError::AvroParse {
        path: path.to_path_buf(),
        message: err.to_string(),
    }
}

fn convert_value(value: AvroValue, path: &Path) -> Result<Value> {
    let converted = match value {
        AvroValue::Null => Value::Missing,
        AvroValue::Boolean(b) => Value::Text(b.to_string()),
        AvroValue::Int(i) => Value::Number(f64::from(i)),
        AvroValue::Long(l) => Value::Number(l as f64),
        AvroValue::Float(f) => Value::Number(f64::from(f)),
        AvroValue::Double(d) => Value::Number(d),
        AvroValue::String(s) => Value::Text(s),
        AvroValue::Bytes(b) => Value::Text(String::from_utf8_lossy(&b).into_owned()),
        AvroValue::Enum(_, symbol) => Value::Text(symbol),
        AvroValue::Union(_, inner) => convert_value(*inner, path)?,
        other => {
            return Err(IngestError::AvroParse {
                path: path.to_path_buf(),
                message: format!("unsupported Avro value: {other:?}"),
            });
        }
    };
    Ok(converted)
}
