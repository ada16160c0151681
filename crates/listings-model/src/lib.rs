pub mod record;
pub mod value;

pub use record::{Record, RecordSet};
pub use value::Value;
