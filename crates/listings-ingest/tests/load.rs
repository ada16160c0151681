//! Integration tests for format-dispatched record loading.

use std::fs;
use std::path::PathBuf;

use apache_avro::types::Record as AvroRecord;
use apache_avro::{Schema, Writer};
use tempfile::TempDir;

use listings_ingest::{IngestError, load_records};
use listings_model::Value;

fn write_fixture(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("write fixture");
    path
}

const SAMPLE_JSON: &str = r#"[
    {"id": "1", "price": 200000, "living_area": 100, "municipality": "Ghent",
     "property_type": "apartment", "scraping_date": "2023-01-01"},
    {"id": "2", "price": 350000, "living_area": 140, "municipality": "Bruges",
     "property_type": "house", "scraping_date": "2023-01-02"}
]"#;

#[test]
fn plain_and_double_encoded_json_load_identically() {
    let dir = TempDir::new().unwrap();
    let plain = write_fixture(&dir, "plain.json", SAMPLE_JSON);
    let double = write_fixture(
        &dir,
        "double.json",
        &serde_json::to_string(SAMPLE_JSON).unwrap(),
    );

    let from_plain = load_records(&plain).unwrap();
    let from_double = load_records(&double).unwrap();
    assert_eq!(from_plain, from_double);
    assert_eq!(from_plain.len(), 2);
}

#[test]
fn json_load_drops_municipality() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir, "sample.json", SAMPLE_JSON);
    let records = load_records(&path).unwrap();
    assert!(!records.has_column("municipality"));
    assert!(records.rows.iter().all(|r| !r.cells.contains_key("municipality")));
    assert!(records.has_column("price"));
}

#[test]
fn csv_load_keeps_municipality_and_types_cells() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(
        &dir,
        "sample.csv",
        "id,price,living_area,municipality,property_type,scraping_date\n\
         1,200000,100,Ghent,apartment,2023-01-01\n\
         2,,140,Bruges,house,2023-01-02\n",
    );
    let records = load_records(&path).unwrap();
    assert!(records.has_column("municipality"));
    assert_eq!(
        records.columns,
        vec![
            "id",
            "price",
            "living_area",
            "municipality",
            "property_type",
            "scraping_date"
        ]
    );
    assert_eq!(records.rows[0].get("price"), &Value::Number(200_000.0));
    assert_eq!(records.rows[0].get("property_type"), &Value::Text("apartment".into()));
    assert_eq!(records.rows[1].get("price"), &Value::Missing);
}

#[test]
fn avro_load_reads_container_records() {
    let schema = Schema::parse_str(
        r#"{
            "type": "record",
            "name": "listing",
            "fields": [
                {"name": "id", "type": "long"},
                {"name": "price", "type": "double"},
                {"name": "living_area", "type": "double"},
                {"name": "property_type", "type": "string"},
                {"name": "scraping_date", "type": "string"}
            ]
        }"#,
    )
    .expect("parse schema");
    let mut writer = Writer::new(&schema, Vec::new());
    let mut row = AvroRecord::new(writer.schema()).expect("record builder");
    row.put("id", 1i64);
    row.put("price", 200_000.0f64);
    row.put("living_area", 100.0f64);
    row.put("property_type", "apartment");
    row.put("scraping_date", "2023-01-01");
    writer.append(row).expect("append row");
    let encoded = writer.into_inner().expect("finish container");

    let dir = TempDir::new().unwrap();
    let path = dir.path().join("sample.avro");
    fs::write(&path, encoded).unwrap();

    let records = load_records(&path).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records.rows[0].get("id"), &Value::Number(1.0));
    assert_eq!(records.rows[0].get("price"), &Value::Number(200_000.0));
    assert_eq!(
        records.rows[0].get("property_type"),
        &Value::Text("apartment".into())
    );
}

#[test]
fn missing_file_fails_before_parsing() {
    let err = load_records(&PathBuf::from("/nonexistent/sample.json")).unwrap_err();
    assert!(matches!(err, IngestError::FileNotFound { .. }));
}

#[test]
fn unsupported_suffix_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir, "sample.xml", "<listings/>");
    let err = load_records(&path).unwrap_err();
    assert!(matches!(err, IngestError::UnsupportedFormat { .. }));
}

#[test]
fn non_list_json_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir, "object.json", r#"{"id": "1"}"#);
    let err = load_records(&path).unwrap_err();
    assert!(matches!(err, IngestError::JsonNotAList));
}
