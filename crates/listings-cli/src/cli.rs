//! CLI argument definitions for the listing cleaner.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "listings",
    version,
    about = "Listing cleaner - validate and filter scraped real-estate listings",
    long_about = "Clean scraped real-estate listing files.\n\n\
                  Reads JSON, CSV, or Avro input, validates the business fields,\n\
                  filters listings outside the admissible price-per-square-meter\n\
                  and living-area ranges, and writes the survivors as JSON along\n\
                  with a violation log."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,
}

#[derive(Subcommand)]
pub enum Command {
    /// Clean a listing file and write the surviving records.
    Clean(CleanArgs),
}

#[derive(Parser)]
pub struct CleanArgs {
    /// Path to the input listing file (.json, .csv, or .avro).
    #[arg(long = "input", value_name = "PATH", env = "INPUT_PATH")]
    pub input: PathBuf,

    /// Destination for the cleaned records (JSON array).
    #[arg(long = "output", value_name = "PATH", env = "OUTPUT_PATH")]
    pub output: PathBuf,

    /// Destination for the violation log (plain text, appended).
    #[arg(long = "log", value_name = "PATH", env = "LOG_PATH")]
    pub log: PathBuf,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
