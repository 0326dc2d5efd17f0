//! Transaction types produced by the ingest layer

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One parsed bank-statement line
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Transaction {
    /// Operation date and time
    pub timestamp: NaiveDateTime,
    /// Positive = income/credit, negative = expense
    pub amount: Decimal,
    /// Category label as exported by the bank (may be empty)
    pub category: String,
    /// Free-text description
    pub description: String,
}

impl Transaction {
    /// Create a new Transaction
    pub fn new(
        timestamp: NaiveDateTime,
        amount: Decimal,
        category: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            timestamp,
            amount,
            category: category.into(),
            description: description.into(),
        }
    }

    /// Returns true if this is an expense (negative amount)
    pub fn is_expense(&self) -> bool {
        self.amount.is_sign_negative() && !self.amount.is_zero()
    }

    /// Calendar date of the operation
    pub fn date(&self) -> NaiveDate {
        self.timestamp.date()
    }
}

/// A transaction inside a category group. The category is the group key,
/// so it is not repeated here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategoryEntry {
    pub timestamp: NaiveDateTime,
    pub amount: Decimal,
    pub description: String,
}

impl From<&Transaction> for CategoryEntry {
    fn from(txn: &Transaction) -> Self {
        Self {
            timestamp: txn.timestamp,
            amount: txn.amount,
            description: txn.description.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2023, 1, d)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_transaction_creation() {
        let txn = Transaction::new(at(2, 10), Decimal::new(-5000, 2), "Food", "y");
        assert!(txn.is_expense());
        assert_eq!(txn.date(), NaiveDate::from_ymd_opt(2023, 1, 2).unwrap());
    }

    #[test]
    fn test_zero_amount_is_not_expense() {
        let txn = Transaction::new(at(1, 0), Decimal::ZERO, "", "");
        assert!(!txn.is_expense());
    }

    #[test]
    fn test_entry_drops_category() {
        let txn = Transaction::new(at(1, 10), Decimal::new(10050, 2), "Food", "x");
        let entry = CategoryEntry::from(&txn);
        assert_eq!(entry.timestamp, txn.timestamp);
        assert_eq!(entry.amount, txn.amount);
        assert_eq!(entry.description, "x");

        let json = serde_json::to_value(&entry).unwrap();
        assert!(json.get("category").is_none());
    }
}
