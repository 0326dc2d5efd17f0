//! Inclusive calendar-day windows over transaction timestamps.

use anyhow::Result;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::time::parse_day;

/// `[start 00:00:00, end 23:59:59]`, both bounds inclusive.
///
/// A window whose start day is after its end day is valid and matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Period {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl Period {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start: start.and_time(NaiveTime::default()),
            end: end.and_time(end_of_day()),
        }
    }

    /// Build a window from two `dd.mm.yyyy` strings.
    pub fn parse(start: &str, end: &str) -> Result<Self> {
        Ok(Self::new(parse_day(start)?, parse_day(end)?))
    }

    pub fn contains(&self, ts: NaiveDateTime) -> bool {
        self.start <= ts && ts <= self.end
    }

    /// True when no timestamp can fall inside the window.
    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }
}

fn end_of_day() -> NaiveTime {
    NaiveTime::from_hms_opt(23, 59, 59).unwrap_or_default()
}
