//! Field coercion: statement timestamps, period dates and amounts.

use std::str::FromStr;

use anyhow::{anyhow, Result};
use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;

/// Operation timestamp as exported by the bank, e.g. "28.11.2022 14:30".
pub const TIMESTAMP_FORMAT: &str = "%d.%m.%Y %H:%M";

/// Calendar date used for period bounds, e.g. "28.11.2022".
pub const DAY_FORMAT: &str = "%d.%m.%Y";

/// Parse an operation timestamp with the given chrono format string.
pub fn parse_timestamp(s: &str, format: &str) -> Result<NaiveDateTime> {
    let s = s.trim();
    NaiveDateTime::parse_from_str(s, format)
        .map_err(|e| anyhow!("invalid timestamp '{s}' (expected {format}): {e}"))
}

/// Parse a `dd.mm.yyyy` calendar date.
pub fn parse_day(s: &str) -> Result<NaiveDate> {
    let s = s.trim();
    NaiveDate::parse_from_str(s, DAY_FORMAT)
        .map_err(|e| anyhow!("invalid date '{s}' (expected dd.mm.yyyy): {e}"))
}

/// Largest accepted magnitude of a single amount (10^18). Sums over any
/// realistic number of rows stay far below `Decimal::MAX`.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(0xA764_0000, 0x0DE0_B6B3, 0, false, 0);

/// Parse an amount that uses a comma as the fractional separator.
///
/// Group separators (plain, no-break and narrow no-break spaces) are dropped,
/// so "-1 234,56" and "-1234,56" both parse to -1234.56. Magnitudes above
/// [`MAX_AMOUNT`] are rejected.
pub fn parse_amount(s: &str) -> Result<Decimal> {
    let cleaned: String = s
        .trim()
        .chars()
        .filter(|c| !matches!(c, ' ' | '\u{a0}' | '\u{202f}'))
        .map(|c| if c == ',' { '.' } else { c })
        .collect();

    if cleaned.is_empty() {
        return Err(anyhow!("empty amount"));
    }

    let amount =
        Decimal::from_str(&cleaned).map_err(|e| anyhow!("invalid amount '{}': {e}", s.trim()))?;
    if amount.abs() > MAX_AMOUNT {
        return Err(anyhow!("amount '{}' exceeds {MAX_AMOUNT}", s.trim()));
    }
    Ok(amount)
}
