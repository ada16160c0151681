//! End-to-end clean run with explicit stages.
//!
//! The run follows these stages in order:
//! 1. **Load**: read the input file into a record set
//! 2. **Clean**: run the six validation rules, logging violations
//! 3. **Write**: serialize the surviving records
//!
//! The input is loaded before the violation log is opened, so a missing
//! input path fails before any log entry (or log file) exists.

use std::fs::OpenOptions;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use listings_clean::{PipelineSummary, ViolationLog, run_pipeline};
use listings_ingest::load_records;
use listings_output::write_records;

/// Resolved paths for one clean run.
#[derive(Debug, Clone)]
pub struct CleanConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub log: PathBuf,
}

/// Result of a successful clean run.
#[derive(Debug)]
pub struct CleanResult {
    pub output: PathBuf,
    pub log: PathBuf,
    pub summary: PipelineSummary,
}

/// Loads, cleans, and writes a listing file.
pub fn run_clean(config: &CleanConfig) -> Result<CleanResult> {
    let span = info_span!("clean", input = %config.input.display());
    let _guard = span.enter();

    let records = load_records(&config.input).context("load input records")?;
    info!(rows = records.len(), "loaded input");

    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.log)
        .with_context(|| format!("open violation log {}", config.log.display()))?;
    let mut log = ViolationLog::new(log_file);

    let (cleaned, summary) = run_pipeline(records, &mut log).context("write violation log")?;
    info!(
        rows = summary.rows_remaining,
        violations = summary.violations_logged,
        "cleaning finished"
    );

    write_records(&cleaned, &config.output).context("write cleaned records")?;
    info!(path = %config.output.display(), "wrote cleaned records");

    Ok(CleanResult {
        output: config.output.clone(),
        log: config.log.clone(),
        summary,
    })
}
