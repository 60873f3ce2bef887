pub mod record;

pub use record::{Record, parse_records};
