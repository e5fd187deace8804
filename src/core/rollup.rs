//! Totals, percentages and traffic-light levels over weeks and queues.
//!
//! Rollups are additive: counters are summed first and percentages are
//! derived once from the sums, never averaged from per-day percentages.

use crate::core::week_bucketer::WeekBucket;
use crate::models::daily::{DailyQueueRecord, QueueDaySummary, share};
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// Traffic-light classification of a percentage.
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Good,
    Medium,
    High,
    Critical,
}

impl Level {
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Good => "good",
            Level::Medium => "medium",
            Level::High => "high",
            Level::Critical => "critical",
        }
    }
}

/// Abandonment: `>20` critical, `>15` high, `>10` medium, else good.
pub fn abandonment_level(pct: f64) -> Level {
    if pct > 20.0 {
        Level::Critical
    } else if pct > 15.0 {
        Level::High
    } else if pct > 10.0 {
        Level::Medium
    } else {
        Level::Good
    }
}

/// Answered calls: `>=90` good, `>=80` medium, `>=70` high, else critical.
pub fn success_level(pct: f64) -> Level {
    if pct >= 90.0 {
        Level::Good
    } else if pct >= 80.0 {
        Level::Medium
    } else if pct >= 70.0 {
        Level::High
    } else {
        Level::Critical
    }
}

/// Summed counters with their derived percentages.
#[derive(Serialize, Clone, Copy, Debug, Default, PartialEq)]
pub struct Rollup {
    #[serde(rename = "llamadas_totales")]
    pub total: i64,
    #[serde(rename = "respondidas")]
    pub answered: i64,
    #[serde(rename = "abandonadas")]
    pub abandoned: i64,
    #[serde(rename = "pct_respondidas")]
    pub answered_pct: f64,
    #[serde(rename = "pct_abandonadas")]
    pub abandoned_pct: f64,
}

impl Rollup {
    pub fn from_counts(total: i64, answered: i64, abandoned: i64) -> Self {
        Self {
            total,
            answered,
            abandoned,
            answered_pct: share(answered, total, 1),
            abandoned_pct: share(abandoned, total, 1),
        }
    }

    pub fn from_records<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a DailyQueueRecord>,
    {
        let (t, a, b) = records.into_iter().fold((0, 0, 0), |(t, a, b), r| {
            (t + r.total, a + r.answered, b + r.abandoned)
        });
        Self::from_counts(t, a, b)
    }

    pub fn from_summaries<'a, I>(rows: I) -> Self
    where
        I: IntoIterator<Item = &'a QueueDaySummary>,
    {
        let (t, a, b) = rows.into_iter().fold((0, 0, 0), |(t, a, b), r| {
            (t + r.total, a + r.answered, b + r.abandoned)
        });
        Self::from_counts(t, a, b)
    }

    pub fn answered_level(&self) -> Level {
        success_level(self.answered_pct)
    }

    pub fn abandoned_level(&self) -> Level {
        abandonment_level(self.abandoned_pct)
    }
}

/// One week of a single queue, with its totals.
#[derive(Debug, Clone)]
pub struct QueueWeek {
    pub number: usize,
    pub bucket: WeekBucket<DailyQueueRecord>,
    pub totals: Rollup,
}

impl QueueWeek {
    pub fn from_buckets(buckets: Vec<WeekBucket<DailyQueueRecord>>) -> Vec<Self> {
        buckets
            .into_iter()
            .enumerate()
            .map(|(i, bucket)| {
                let totals = Rollup::from_records(&bucket.records);
                Self {
                    number: i + 1,
                    bucket,
                    totals,
                }
            })
            .collect()
    }
}

/// One week of the cross-queue summary: a (queue × date) grid plus a grand
/// total per date.
#[derive(Debug, Clone)]
pub struct CrossQueueWeek {
    pub number: usize,
    pub first: NaiveDate,
    pub last: NaiveDate,
    pub dates: Vec<NaiveDate>,
    pub queues: Vec<String>,
    cells: HashMap<(String, NaiveDate), Rollup>,
    pub totals: BTreeMap<NaiveDate, Rollup>,
}

impl CrossQueueWeek {
    /// `queues` lists every queue to show as a row, even when absent this
    /// week; when empty, the queues found in the bucket are used.
    pub fn build(number: usize, bucket: &WeekBucket<QueueDaySummary>, queues: &[String]) -> Self {
        let dates = bucket.dates();

        let mut cells: HashMap<(String, NaiveDate), Rollup> = HashMap::new();
        for r in &bucket.records {
            let cell = cells.entry((r.queue.clone(), r.date)).or_default();
            *cell = Rollup::from_counts(
                cell.total + r.total,
                cell.answered + r.answered,
                cell.abandoned + r.abandoned,
            );
        }

        let totals = dates
            .iter()
            .map(|d| {
                let day = bucket.records.iter().filter(|r| r.date == *d);
                (*d, Rollup::from_summaries(day))
            })
            .collect();

        let queues = if queues.is_empty() {
            let found: BTreeSet<&str> = bucket.records.iter().map(|r| r.queue.as_str()).collect();
            sort_queue_codes(found.into_iter().map(str::to_string).collect())
        } else {
            sort_queue_codes(queues.to_vec())
        };

        Self {
            number,
            first: bucket.first_date(),
            last: bucket.last_date(),
            dates,
            queues,
            cells,
            totals,
        }
    }

    /// The (queue, date) cell; an all-zero rollup when the queue had no calls.
    pub fn cell(&self, queue: &str, date: NaiveDate) -> Rollup {
        self.cells
            .get(&(queue.to_string(), date))
            .copied()
            .unwrap_or_default()
    }

    pub fn total(&self, date: NaiveDate) -> Rollup {
        self.totals.get(&date).copied().unwrap_or_default()
    }
}

/// Queue codes ascending: numerically when every code is a number,
/// lexicographically otherwise.
pub fn sort_queue_codes(mut codes: Vec<String>) -> Vec<String> {
    if codes.iter().all(|c| c.parse::<u64>().is_ok()) {
        codes.sort_by_key(|c| c.parse::<u64>().unwrap_or(0));
    } else {
        codes.sort();
    }
    codes.dedup();
    codes
}

/// Queues by descending call volume over all rows; ties by code.
pub fn queues_by_volume(rows: &[QueueDaySummary]) -> Vec<String> {
    let mut volume: BTreeMap<&str, i64> = BTreeMap::new();
    for r in rows {
        *volume.entry(r.queue.as_str()).or_insert(0) += r.total;
    }
    let mut out: Vec<(&str, i64)> = volume.into_iter().collect();
    out.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    out.into_iter().map(|(q, _)| q.to_string()).collect()
}

/// One queue on the dashboard: its counters plus 1-decimal percentages.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct DashboardQueue {
    #[serde(flatten)]
    pub summary: QueueDaySummary,
    #[serde(rename = "pct_exito")]
    pub answered_pct: f64,
    #[serde(rename = "pct_abandonadas")]
    pub abandoned_pct: f64,
}

impl From<QueueDaySummary> for DashboardQueue {
    fn from(summary: QueueDaySummary) -> Self {
        Self {
            answered_pct: share(summary.answered, summary.total, 1),
            abandoned_pct: share(summary.abandoned, summary.total, 1),
            summary,
        }
    }
}

/// Today's totals across every queue.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct Dashboard {
    #[serde(rename = "fecha")]
    pub date: NaiveDate,
    #[serde(rename = "colas")]
    pub queues: Vec<DashboardQueue>,
    #[serde(rename = "totales")]
    pub totals: Rollup,
}

impl Dashboard {
    pub fn build(date: NaiveDate, rows: Vec<QueueDaySummary>) -> Self {
        let totals = Rollup::from_summaries(&rows);
        Self {
            date,
            queues: rows.into_iter().map(DashboardQueue::from).collect(),
            totals,
        }
    }
}
