//! tally-ingest: delimited bank-statement exports -> typed transactions.

pub mod error;
pub mod parsers;
pub mod types;

pub use error::IngestError;
pub use parsers::delimited::{load_transactions, parse_reader};
pub use types::{ColumnMap, StatementLayout};
