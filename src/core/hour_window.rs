//! Busiest and quietest 2-hour windows of a day.
//!
//! Hourly counts are kept for hours 6..=19; a window pairs hour `h` with
//! `h + 1`, so windows start at 6..=18. Missing hours count as zero. Ties go
//! to the earliest window for both the peak and the trough.

use crate::models::daily::{DailyQueueRecord, HourWindow};
use crate::models::hourly::HourlyCount;
use crate::ui::messages::warning;
use chrono::NaiveDate;
use std::collections::BTreeMap;
use std::fmt;

pub const FIRST_HOUR: u32 = 6;
pub const LAST_HOUR: u32 = 19;

/// Hour of day → calls.
pub type HourMap = BTreeMap<u32, i64>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeakTrough {
    pub peak: HourWindow,
    pub trough: HourWindow,
}

impl PeakTrough {
    pub fn none() -> Self {
        Self {
            peak: HourWindow::none(),
            trough: HourWindow::none(),
        }
    }
}

/// The hourly breakdown of a day does not add up to its recorded total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataInconsistency {
    pub date: NaiveDate,
    pub hourly_sum: i64,
    pub daily_total: i64,
}

impl fmt::Display for DataInconsistency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: hourly sum {} != total calls {}",
            self.date, self.hourly_sum, self.daily_total
        )
    }
}

/// Peak and trough over the standard 06h..19h range.
pub fn analyze(hourly: &HourMap) -> PeakTrough {
    analyze_range(hourly, FIRST_HOUR, LAST_HOUR)
}

/// Peak and trough over windows starting at `first..last` (the window at
/// `last - 1` still reads `last`).
pub fn analyze_range(hourly: &HourMap, first: u32, last: u32) -> PeakTrough {
    if hourly.is_empty() || first >= last {
        return PeakTrough::none();
    }

    let count = |h: u32| hourly.get(&h).copied().unwrap_or(0);
    let windows: Vec<(u32, i64)> = (first..last).map(|h| (h, count(h) + count(h + 1))).collect();

    let mut peak = windows[0];
    let mut trough = windows[0];
    for &(h, c) in &windows[1..] {
        if c > peak.1 {
            peak = (h, c);
        }
        if c < trough.1 {
            trough = (h, c);
        }
    }

    PeakTrough {
        peak: HourWindow::starting_at(peak.0, peak.1),
        trough: HourWindow::starting_at(trough.0, trough.1),
    }
}

/// Compare the hourly sum of a day against its total calls.
pub fn check_consistency(date: NaiveDate, hourly: &HourMap, daily_total: i64) -> Option<DataInconsistency> {
    let hourly_sum: i64 = hourly.values().sum();
    (hourly_sum != daily_total).then_some(DataInconsistency {
        date,
        hourly_sum,
        daily_total,
    })
}

/// Group hourly rows by day, dropping hours outside 6..=19.
pub fn group_by_date(rows: &[HourlyCount]) -> BTreeMap<NaiveDate, HourMap> {
    let mut out: BTreeMap<NaiveDate, HourMap> = BTreeMap::new();
    for r in rows.iter().filter(|r| (FIRST_HOUR..=LAST_HOUR).contains(&r.hour)) {
        *out.entry(r.date).or_default().entry(r.hour).or_insert(0) += r.count;
    }
    out
}

/// Attach peak/trough windows to every record and report the days whose
/// hourly breakdown disagrees with the daily total. Mismatches are warned
/// about and returned; they never stop the report.
pub fn enrich(records: &mut [DailyQueueRecord], hourly: &[HourlyCount]) -> Vec<DataInconsistency> {
    let by_date = group_by_date(hourly);
    let mut issues = Vec::new();

    for (date, hours) in &by_date {
        let Some(rec) = records.iter().find(|r| r.date == *date) else {
            continue;
        };
        if let Some(issue) = check_consistency(*date, hours, rec.total) {
            warning(format!("Data inconsistency on {issue}"));
            issues.push(issue);
        }
    }

    for rec in records.iter_mut() {
        let pt = by_date.get(&rec.date).map(analyze).unwrap_or_else(PeakTrough::none);
        rec.set_windows(pt.peak, pt.trough);
    }

    issues
}
