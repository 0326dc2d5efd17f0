//! Report models for the console views: per-category breakdown and the
//! span of dates a statement covers.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use tally_core::{CategoryEntry, Transaction};

use crate::grouping::group_by_category;
use crate::summary::round_cents;

/// Days per month used when describing a span as "N months and M days".
const DAYS_PER_MONTH: i64 = 30;

/// One category with its entries and their sum
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryReport {
    pub category: String,
    pub entries: Vec<CategoryEntry>,
    /// Sum of entry amounts, rounded to cents
    pub total: Decimal,
}

/// Build a report per category, ordered by label.
pub fn group_reports(txns: &[Transaction]) -> Vec<CategoryReport> {
    group_by_category(txns)
        .into_iter()
        .map(|(category, entries)| {
            let total = round_cents(entries.iter().map(|e| e.amount).sum());
            CategoryReport {
                category,
                entries,
                total,
            }
        })
        .collect()
}

/// First and last calendar day present in a set of transactions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PeriodInfo {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl PeriodInfo {
    /// `None` for an empty input.
    pub fn from_transactions(txns: &[Transaction]) -> Option<Self> {
        let start = txns.iter().map(|t| t.date()).min()?;
        let end = txns.iter().map(|t| t.date()).max()?;
        Some(Self { start, end })
    }

    /// Whole days between the first and last day.
    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days()
    }

    /// Span as `(months, days)` with 30-day months.
    pub fn months_and_days(&self) -> (i64, i64) {
        let days = self.days();
        (days / DAYS_PER_MONTH, days % DAYS_PER_MONTH)
    }
}
