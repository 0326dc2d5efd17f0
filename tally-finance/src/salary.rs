//! Salary extraction: payments in one category with one exact description.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use tally_core::Transaction;

use crate::grouping::group_by_category;

/// `(timestamp, amount)` of a matched payment
pub type SalaryPayment = (NaiveDateTime, Decimal);

/// Payments in `category` whose description equals `description` exactly.
///
/// Order follows the input. A category that does not occur yields nothing.
pub fn extract_salary(txns: &[Transaction], category: &str, description: &str) -> Vec<SalaryPayment> {
    let mut groups = group_by_category(txns);
    let Some(entries) = groups.remove(category) else {
        return Vec::new();
    };

    entries
        .into_iter()
        .filter(|e| e.description == description)
        .map(|e| (e.timestamp, e.amount))
        .collect()
}

/// Sum of the extracted payments.
pub fn salary_total(payments: &[SalaryPayment]) -> Decimal {
    payments.iter().map(|(_, amount)| *amount).sum()
}
