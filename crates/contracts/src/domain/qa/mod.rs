pub mod counts;
pub mod record;

pub use counts::parse_type_counts;
pub use record::{QaRecord, RecordId};
