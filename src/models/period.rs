use chrono::{Duration, NaiveDate};
use serde::Serialize;
use std::fmt;

/// Inclusive range of calendar days selected for a report.
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Period {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl Period {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    pub fn day(d: NaiveDate) -> Self {
        Self { start: d, end: d }
    }

    /// Lower timestamp bound, inclusive.
    pub fn start_ts(&self) -> String {
        format!("{} 00:00:00", self.start.format("%Y-%m-%d"))
    }

    /// Upper timestamp bound, exclusive: midnight after the last day.
    pub fn end_ts(&self) -> String {
        let next = self.end + Duration::days(1);
        format!("{} 00:00:00", next.format("%Y-%m-%d"))
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start == self.end {
            write!(f, "{}", self.start)
        } else {
            write!(f, "{} → {}", self.start, self.end)
        }
    }
}
