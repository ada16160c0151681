//! The cleaning pipeline: six rules in fixed order.
//!
//! Rules run in sequence, each consuming the record set the previous rule
//! left behind. Logged row positions are relative to the record set at the
//! time the rule runs, so they shift as earlier rules remove rows.

use std::io::{self, Write};

use tracing::debug;

use listings_model::RecordSet;

use crate::log::ViolationLog;
use crate::rules::{
    StageOutcome, check_ids, check_property_types, check_scraping_dates, clean_prices,
    filter_price_per_area, validate_living_area,
};

/// Row accounting for one full pipeline run.
#[derive(Debug, Clone, Copy, Default)]
pub struct PipelineSummary {
    pub rows_loaded: usize,
    pub removed_by_price_per_area: usize,
    pub removed_by_living_area: usize,
    pub rows_remaining: usize,
    pub violations_logged: usize,
}

/// Runs the six cleaning rules over `records`, writing violations to
/// `log` as each rule completes.
pub fn run_pipeline<W: Write>(
    records: RecordSet,
    log: &mut ViolationLog<W>,
) -> io::Result<(RecordSet, PipelineSummary)> {
    let mut summary = PipelineSummary {
        rows_loaded: records.len(),
        ..PipelineSummary::default()
    };
    let lines_before = log.lines();

    let records = commit(log, "id check", check_ids(records))?;
    let records = commit(log, "price cleaning", clean_prices(records))?;

    let outcome = filter_price_per_area(records);
    summary.removed_by_price_per_area = outcome.removed;
    let records = commit(log, "price-per-area filter", outcome)?;

    let outcome = validate_living_area(records);
    summary.removed_by_living_area = outcome.removed;
    let records = commit(log, "living-area validation", outcome)?;

    let records = commit(log, "property-type check", check_property_types(records))?;
    let records = commit(log, "scraping-date check", check_scraping_dates(records))?;
    log.flush()?;

    summary.rows_remaining = records.len();
    summary.violations_logged = log.lines() - lines_before;
    Ok((records, summary))
}

/// Writes a rule's log entries and hands its record set to the next rule.
fn commit<W: Write>(
    log: &mut ViolationLog<W>,
    stage: &str,
    outcome: StageOutcome,
) -> io::Result<RecordSet> {
    for entry in &outcome.entries {
        log.write_entry(entry)?;
    }
    debug!(
        stage,
        removed = outcome.removed,
        remaining = outcome.records.len(),
        "rule applied"
    );
    Ok(outcome.records)
}
