//! Partition transactions by their category label.

use std::collections::{BTreeMap, BTreeSet};

use tally_core::{CategoryEntry, Transaction};

/// Distinct category labels, sorted. The empty label is included when present.
pub fn list_categories(txns: &[Transaction]) -> BTreeSet<String> {
    txns.iter().map(|t| t.category.clone()).collect()
}

/// Group transactions by exact category label.
///
/// Labels are not normalized, so "Food" and "food " are distinct groups.
/// Within a group entries keep their input order.
pub fn group_by_category(txns: &[Transaction]) -> BTreeMap<String, Vec<CategoryEntry>> {
    let mut groups: BTreeMap<String, Vec<CategoryEntry>> = BTreeMap::new();
    for txn in txns {
        groups
            .entry(txn.category.clone())
            .or_default()
            .push(CategoryEntry::from(txn));
    }
    groups
}
