//! tally-finance: period filtering, category grouping, totals and salary extraction

pub mod grouping;
pub mod loader;
pub mod period;
pub mod report;
pub mod salary;
pub mod summary;

pub use grouping::{group_by_category, list_categories};
pub use loader::{load_transactions, load_transactions_in_period};
pub use period::{filter_by_period, filter_in};
pub use report::{group_reports, CategoryReport, PeriodInfo};
pub use salary::{extract_salary, salary_total, SalaryPayment};
pub use summary::{default_exclusions, summary_by_category, total, DEFAULT_EXCLUDED_CATEGORIES};
