pub mod engine;
pub mod log;
pub mod rules;

pub use engine::{PipelineSummary, run_pipeline};
pub use log::{LogEntry, ViolationLog};
pub use rules::{StageOutcome, extract_price};
