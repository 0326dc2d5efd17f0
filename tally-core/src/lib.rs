//! tally-core: shared types for the statement pipeline

pub mod period;
pub mod time;
pub mod transaction;

pub use period::Period;
pub use time::{parse_amount, parse_day, parse_timestamp, DAY_FORMAT, MAX_AMOUNT, TIMESTAMP_FORMAT};
pub use transaction::{CategoryEntry, Transaction};
