pub mod avro;
pub mod csv;
pub mod error;
pub mod format;
pub mod json;
pub mod load;

pub use error::{IngestError, Result};
pub use format::SourceFormat;
pub use load::load_records;
