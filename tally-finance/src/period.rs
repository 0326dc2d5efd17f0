//! Date-range filtering over parsed transactions.

use chrono::NaiveDate;
use tally_core::{Period, Transaction};
use tracing::debug;

/// Transactions whose timestamp lies in `[start 00:00:00, end 23:59:59]`.
///
/// Input order is preserved. An inverted range yields an empty vector.
pub fn filter_by_period(txns: &[Transaction], start: NaiveDate, end: NaiveDate) -> Vec<Transaction> {
    filter_in(txns, &Period::new(start, end))
}

/// Same as [`filter_by_period`] with a prebuilt window.
pub fn filter_in(txns: &[Transaction], period: &Period) -> Vec<Transaction> {
    if period.is_empty() {
        debug!(start = %period.start, end = %period.end, "inverted period, nothing to keep");
        return Vec::new();
    }

    let kept: Vec<Transaction> = txns
        .iter()
        .filter(|t| period.contains(t.timestamp))
        .cloned()
        .collect();

    debug!(total = txns.len(), kept = kept.len(), "filtered by period");
    kept
}
