//! Plain-text views of the finance pipeline output.

use std::collections::{BTreeMap, BTreeSet};

use rust_decimal::Decimal;
use tally_finance::{CategoryReport, PeriodInfo, SalaryPayment};

const NO_CATEGORY: &str = "(none)";

fn label(category: &str) -> &str {
    if category.is_empty() { NO_CATEGORY } else { category }
}

fn money(amount: Decimal) -> String {
    format!("{:.2}", amount)
}

pub fn categories(cats: &BTreeSet<String>) -> String {
    let mut s = String::new();
    for c in cats {
        s.push_str(label(c));
        s.push('\n');
    }
    s
}

pub fn breakdown(reports: &[CategoryReport]) -> String {
    let mut s = String::new();
    for r in reports {
        s.push_str(&format!("CATEGORY: {}\n", label(&r.category)));
        for e in &r.entries {
            s.push_str(&format!(
                "  {}  {:>12}  {}\n",
                e.timestamp.format("%d.%m.%Y"),
                money(e.amount),
                e.description
            ));
        }
        s.push_str(&format!("TOTAL: {}\n\n", money(r.total)));
    }
    s
}

pub fn summary(summary: &BTreeMap<String, Decimal>) -> String {
    let width = summary
        .keys()
        .map(|k| label(k).chars().count())
        .max()
        .unwrap_or(0);

    let mut s = String::new();
    for (category, sum) in summary {
        s.push_str(&format!("{:<width$}  {:>12}\n", label(category), money(*sum)));
    }
    s
}

pub fn total(total: Decimal, excluded: &BTreeSet<String>) -> String {
    let excluded: Vec<&str> = excluded.iter().map(|c| label(c)).collect();
    if excluded.is_empty() {
        format!("TOTAL: {}\n", money(total))
    } else {
        format!("TOTAL: {} (excluding {})\n", money(total), excluded.join(", "))
    }
}

/// Payments oldest first; statements list the newest operation first.
pub fn salaries(payments: &[SalaryPayment], sum: Decimal) -> String {
    let mut s = String::new();
    for (ts, amount) in payments.iter().rev() {
        s.push_str(&format!("{} --- {}\n", ts.format("%d.%m.%y"), money(*amount)));
    }
    s.push_str(&format!("\n{}\n", money(sum)));
    s
}

pub fn period(info: Option<PeriodInfo>) -> String {
    let Some(info) = info else {
        return "No transactions in range\n".to_string();
    };
    let (months, days) = info.months_and_days();
    format!(
        "Start period: {}\nEnd period: {}\nPeriod: {} months and {} days\n",
        info.start.format("%d.%m.%y"),
        info.end.format("%d.%m.%y"),
        months,
        days
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tally_core::Transaction;
    use tally_finance::{group_reports, summary_by_category};

    fn txn(d: u32, cents: i64, category: &str, description: &str) -> Transaction {
        let ts = NaiveDate::from_ymd_opt(2023, 1, d)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap();
        Transaction::new(ts, Decimal::new(cents, 2), category, description)
    }

    #[test]
    fn test_empty_category_label() {
        let cats: BTreeSet<String> = ["".to_string(), "Food".to_string()].into();
        assert_eq!(categories(&cats), "(none)\nFood\n");
    }

    #[test]
    fn test_breakdown_lists_entries_and_total() {
        let txns = vec![txn(1, 10050, "Food", "x"), txn(2, -5000, "Food", "y")];
        let out = breakdown(&group_reports(&txns));
        assert_eq!(
            out,
            "CATEGORY: Food\n  01.01.2023        100.50  x\n  02.01.2023        -50.00  y\nTOTAL: 50.50\n\n"
        );
    }

    #[test]
    fn test_summary_alignment() {
        let txns = vec![txn(1, -250, "Cafe", ""), txn(2, -100000, "Supermarkets", "")];
        let out = summary(&summary_by_category(&txns));
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines[0], "Cafe                 -2.50");
        assert_eq!(lines[1], "Supermarkets      -1000.00");
    }

    #[test]
    fn test_total_line() {
        let excluded: BTreeSet<String> = ["".to_string(), "Hotels".to_string()].into();
        assert_eq!(
            total(Decimal::new(-5000, 2), &excluded),
            "TOTAL: -50.00 (excluding (none), Hotels)\n"
        );
        assert_eq!(total(Decimal::ZERO, &BTreeSet::new()), "TOTAL: 0.00\n");
    }

    #[test]
    fn test_salaries_oldest_first() {
        let payments = vec![
            (txn(25, 0, "", "").timestamp, Decimal::new(850000, 2)),
            (txn(10, 0, "", "").timestamp, Decimal::new(800000, 2)),
        ];
        let out = salaries(&payments, Decimal::new(1650000, 2));
        assert_eq!(out, "10.01.23 --- 8000.00\n25.01.23 --- 8500.00\n\n16500.00\n");
    }

    #[test]
    fn test_period_view() {
        let txns = vec![txn(1, 0, "", ""), txn(31, 0, "", "")];
        assert_eq!(
            period(PeriodInfo::from_transactions(&txns)),
            "Start period: 01.01.23\nEnd period: 31.01.23\nPeriod: 1 months and 0 days\n"
        );
        assert_eq!(period(None), "No transactions in range\n");
    }
}
