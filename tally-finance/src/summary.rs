//! Per-category sums and the overall spending total.

use std::collections::{BTreeMap, BTreeSet};

use rust_decimal::{Decimal, RoundingStrategy};
use tally_core::Transaction;

use crate::grouping::group_by_category;

/// Categories left out of [`total`] unless configured otherwise.
///
/// The empty label covers uncategorized lines.
pub const DEFAULT_EXCLUDED_CATEGORIES: [&str; 4] = ["Hotels", "Transfers", "Top-ups", ""];

pub fn default_exclusions() -> BTreeSet<String> {
    DEFAULT_EXCLUDED_CATEGORIES
        .iter()
        .map(|c| c.to_string())
        .collect()
}

/// Sum of amounts per category, keyed and ordered by label.
pub fn summary_by_category(txns: &[Transaction]) -> BTreeMap<String, Decimal> {
    group_by_category(txns)
        .into_iter()
        .map(|(category, entries)| {
            let sum: Decimal = entries.iter().map(|e| e.amount).sum();
            (category, sum)
        })
        .collect()
}

/// Total spending: negative amounts outside `excluded`, rounded to cents.
pub fn total(txns: &[Transaction], excluded: &BTreeSet<String>) -> Decimal {
    let sum: Decimal = txns
        .iter()
        .filter(|t| t.is_expense() && !excluded.contains(&t.category))
        .map(|t| t.amount)
        .sum();
    round_cents(sum)
}

pub(crate) fn round_cents(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
