//! Entry points that read a statement file and hand back transactions.

use std::path::Path;

use chrono::NaiveDate;
use tally_core::Transaction;
use tally_ingest::{IngestError, StatementLayout};

use crate::period::filter_by_period;

/// Load every transaction in the statement.
pub fn load_transactions(
    path: impl AsRef<Path>,
    layout: &StatementLayout,
) -> Result<Vec<Transaction>, IngestError> {
    tally_ingest::load_transactions(path, layout)
}

/// Load the statement and keep transactions between `start` and `end`, inclusive.
///
/// The whole file is parsed first, so a malformed row outside the window
/// still fails the load.
pub fn load_transactions_in_period(
    path: impl AsRef<Path>,
    layout: &StatementLayout,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<Vec<Transaction>, IngestError> {
    let txns = load_transactions(path, layout)?;
    Ok(filter_by_period(&txns, start, end))
}
