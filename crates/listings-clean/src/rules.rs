//! The six cleaning rules.
//!
//! Each rule consumes a record set and returns a new one plus the log
//! entries it produced, so every rule is testable in isolation. Only the
//! price-per-area filter and the living-area validation remove rows; the
//! id, property-type, and scraping-date rules log without removing.

use std::sync::LazyLock;

use regex::Regex;

use listings_model::{RecordSet, Value};

use crate::log::LogEntry;

pub const VALID_PROPERTY_TYPES: [&str; 2] = ["apartment", "house"];

pub const PRICE_PER_AREA_MIN: f64 = 500.0;
pub const PRICE_PER_AREA_MAX: f64 = 15_000.0;
pub const LIVING_AREA_MIN: f64 = 10.0;
pub const LIVING_AREA_MAX: f64 = 500.0;

static PRICE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+\.?\d*").expect("price pattern compiles"));
static DATE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("date pattern compiles"));

/// Result of one rule: the record set it leaves behind, the log entries
/// it produced, and how many rows it removed.
#[derive(Debug)]
pub struct StageOutcome {
    pub records: RecordSet,
    pub entries: Vec<LogEntry>,
    pub removed: usize,
}

impl StageOutcome {
    fn log_only(records: RecordSet, entries: Vec<LogEntry>) -> Self {
        Self {
            records,
            entries,
            removed: 0,
        }
    }
}

/// Extracts the first run of digits, optionally followed by a decimal
/// fraction, from a free-text price. `None` when the text has no digits.
pub fn extract_price(raw: &str) -> Option<f64> {
    let matched = PRICE_PATTERN.find(raw)?;
    matched.as_str().parse::<f64>().ok()
}

/// Rule 1: log null ids and ids whose textual form is not all digits.
/// No rows are removed.
pub fn check_ids(records: RecordSet) -> StageOutcome {
    let mut null_ids = Vec::new();
    let mut non_numeric = Vec::new();
    for (idx, row) in records.rows.iter().enumerate() {
        let id = row.get("id");
        if id.is_missing() {
            null_ids.push(idx);
        }
        let text = id.to_text();
        if text.is_empty() || !text.chars().all(|ch| ch.is_ascii_digit()) {
            non_numeric.push(idx);
        }
    }
    StageOutcome::log_only(
        records,
        vec![
            LogEntry::Rule {
                message: "Null IDs found.",
                indices: null_ids,
            },
            LogEntry::Rule {
                message: "ID is not a string or numeric.",
                indices: non_numeric,
            },
        ],
    )
}

/// Rule 2: derive a numeric `price` from `raw_price`, then drop
/// `raw_price`. Rows without an extractable price get a missing `price`
/// and are logged, not removed. Without a `raw_price` column the rule
/// only writes a notice.
pub fn clean_prices(mut records: RecordSet) -> StageOutcome {
    if !records.has_column("raw_price") {
        return StageOutcome::log_only(
            records,
            vec![LogEntry::Note {
                message: "raw_price column missing.",
            }],
        );
    }
    records.ensure_column("price");
    let mut invalid = Vec::new();
    for (idx, row) in records.rows.iter_mut().enumerate() {
        let extracted = row.get("raw_price").as_text().and_then(extract_price);
        match extracted {
            Some(price) => row.set("price", Value::Number(price)),
            None => {
                row.set("price", Value::Missing);
                invalid.push(idx);
            }
        }
    }
    records.drop_column("raw_price");
    StageOutcome::log_only(
        records,
        vec![LogEntry::Rule {
            message: "Invalid or null prices found.",
            indices: invalid,
        }],
    )
}

/// Rule 3: keep rows whose price per square meter lies in
/// `[PRICE_PER_AREA_MIN, PRICE_PER_AREA_MAX]`. Rows outside the interval,
/// including any with a missing price or area, are dropped silently.
pub fn filter_price_per_area(mut records: RecordSet) -> StageOutcome {
    let keep: Vec<bool> = records
        .rows
        .iter()
        .map(|row| {
            match (row.get("price").as_f64(), row.get("living_area").as_f64()) {
                (Some(price), Some(area)) => {
                    let ratio = price / area;
                    (PRICE_PER_AREA_MIN..=PRICE_PER_AREA_MAX).contains(&ratio)
                }
                _ => false,
            }
        })
        .collect();
    let removed = keep.iter().filter(|kept| !**kept).count();
    records.retain_rows(&keep);
    StageOutcome {
        records,
        entries: Vec::new(),
        removed,
    }
}

/// Rule 4: log rows whose living area is outside
/// `[LIVING_AREA_MIN, LIVING_AREA_MAX]`, then remove exactly those rows.
pub fn validate_living_area(mut records: RecordSet) -> StageOutcome {
    let mut invalid = Vec::new();
    let keep: Vec<bool> = records
        .rows
        .iter()
        .enumerate()
        .map(|(idx, row)| {
            let valid = row
                .get("living_area")
                .as_f64()
                .is_some_and(|area| (LIVING_AREA_MIN..=LIVING_AREA_MAX).contains(&area));
            if !valid {
                invalid.push(idx);
            }
            valid
        })
        .collect();
    let removed = invalid.len();
    records.retain_rows(&keep);
    StageOutcome {
        records,
        entries: vec![LogEntry::Rule {
            message: "Invalid living_area values.",
            indices: invalid,
        }],
        removed,
    }
}

/// Rule 5: log rows whose property type is not `apartment` or `house`.
/// No rows are removed.
pub fn check_property_types(records: RecordSet) -> StageOutcome {
    let invalid: Vec<usize> = records
        .rows
        .iter()
        .enumerate()
        .filter(|(_, row)| {
            !row.get("property_type")
                .as_text()
                .is_some_and(|kind| VALID_PROPERTY_TYPES.contains(&kind))
        })
        .map(|(idx, _)| idx)
        .collect();
    StageOutcome::log_only(
        records,
        vec![LogEntry::Rule {
            message: "Invalid property types. Only 'apartment' or 'house' are allowed.",
            indices: invalid,
        }],
    )
}

/// Rule 6: log rows whose scraping date does not read `YYYY-MM-DD`.
/// No rows are removed.
pub fn check_scraping_dates(records: RecordSet) -> StageOutcome {
    let invalid: Vec<usize> = records
        .rows
        .iter()
        .enumerate()
        .filter(|(_, row)| !DATE_PATTERN.is_match(&row.get("scraping_date").to_text()))
        .map(|(idx, _)| idx)
        .collect();
    StageOutcome::log_only(
        records,
        vec![LogEntry::Rule {
            message: "Invalid date formats in scraping_date. Expected format 'YYYY-MM-DD'.",
            indices: invalid,
        }],
    )
}
