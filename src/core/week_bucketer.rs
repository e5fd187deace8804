//! Groups daily records into Saturday-ending weeks.
//!
//! Sundays are dropped, the remaining records are sorted by date (stable, so
//! same-day rows keep their order) and folded into buckets. A bucket closes
//! at the Saturday on or after its first record; the next record past that
//! date opens a new bucket with its own Saturday. Gaps in the data never
//! produce empty buckets.

use crate::models::daily::{DailyQueueRecord, QueueDaySummary};
use crate::utils::date::{is_sunday, saturday_on_or_after};
use chrono::NaiveDate;

/// Anything carrying a calendar date can be bucketed.
pub trait Dated {
    fn date(&self) -> NaiveDate;
}

impl Dated for DailyQueueRecord {
    fn date(&self) -> NaiveDate {
        self.date
    }
}

impl Dated for QueueDaySummary {
    fn date(&self) -> NaiveDate {
        self.date
    }
}

impl Dated for NaiveDate {
    fn date(&self) -> NaiveDate {
        *self
    }
}

/// A non-empty, chronologically ordered run of records within one week.
#[derive(Debug, Clone, PartialEq)]
pub struct WeekBucket<T> {
    /// Saturday closing the week.
    pub end: NaiveDate,
    pub records: Vec<T>,
}

impl<T: Dated> WeekBucket<T> {
    fn open(first: T) -> Self {
        Self {
            end: saturday_on_or_after(first.date()),
            records: vec![first],
        }
    }

    /// Date of the earliest record.
    pub fn first_date(&self) -> NaiveDate {
        self.records[0].date()
    }

    /// Date of the latest record.
    pub fn last_date(&self) -> NaiveDate {
        self.records[self.records.len() - 1].date()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct dates in the bucket, ascending.
    pub fn dates(&self) -> Vec<NaiveDate> {
        let mut out: Vec<NaiveDate> = self.records.iter().map(|r| r.date()).collect();
        out.dedup();
        out
    }
}

/// Partition `records` into Saturday-ending weeks.
pub fn bucket<T: Dated>(records: Vec<T>) -> Vec<WeekBucket<T>> {
    let mut kept: Vec<T> = records.into_iter().filter(|r| !is_sunday(r.date())).collect();
    kept.sort_by_key(|r| r.date());

    let (current, mut done) = kept.into_iter().fold(
        (None::<WeekBucket<T>>, Vec::new()),
        |(current, mut done), rec| match current {
            Some(mut week) if rec.date() <= week.end => {
                week.records.push(rec);
                (Some(week), done)
            }
            Some(week) => {
                done.push(week);
                (Some(WeekBucket::open(rec)), done)
            }
            None => (Some(WeekBucket::open(rec)), done),
        },
    );

    if let Some(week) = current {
        done.push(week);
    }
    done
}
