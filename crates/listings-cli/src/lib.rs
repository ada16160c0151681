//! CLI library components for the listing cleaner.

pub mod logging;
pub mod pipeline;
