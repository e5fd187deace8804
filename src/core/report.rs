//! Report assembly: load, enrich, bucket and roll up.

use crate::core::compliance::{BreakLimits, ComplianceSummary};
use crate::core::hour_window::{DataInconsistency, enrich};
use crate::core::rollup::{CrossQueueWeek, Dashboard, QueueWeek, queues_by_volume};
use crate::core::week_bucketer::bucket;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::AppResult;
use crate::models::agent::AgentActivity;
use crate::models::daily::{DailyQueueRecord, QueueDaySummary};
use crate::models::period::Period;
use chrono::NaiveDate;
use std::collections::HashMap;

/// Enriched daily rows of a single queue.
#[derive(Debug, Clone)]
pub struct QueueReport {
    pub queue: String,
    pub records: Vec<DailyQueueRecord>,
    pub issues: Vec<DataInconsistency>,
}

/// Daily rows of `queue` with peak/trough windows attached.
pub fn queue_report(pool: &mut DbPool, queue: &str, period: &Period) -> AppResult<QueueReport> {
    let mut records = queries::load_queue_daily(pool, queue, period)?;
    let hourly = queries::load_queue_hourly(pool, queue, period)?;
    let issues = enrich(&mut records, &hourly);

    Ok(QueueReport {
        queue: queue.to_string(),
        records,
        issues,
    })
}

/// Weekly breakdown of one queue.
#[derive(Debug, Clone)]
pub struct QueueSheet {
    pub queue: String,
    pub weeks: Vec<QueueWeek>,
}

impl QueueSheet {
    pub fn is_empty(&self) -> bool {
        self.weeks.is_empty()
    }

    /// Widest week, in days.
    pub fn max_days(&self) -> usize {
        self.weeks.iter().map(|w| w.bucket.len()).max().unwrap_or(0)
    }
}

/// Everything the call-center workbook shows.
#[derive(Debug, Clone)]
pub struct CallCenterReport {
    pub period: Period,
    /// Sheets by descending call volume.
    pub sheets: Vec<QueueSheet>,
    pub summary: Vec<CrossQueueWeek>,
}

impl CallCenterReport {
    /// Build the report from already loaded rows. `details` maps a queue code
    /// to its enriched daily rows; queues without an entry get an empty sheet.
    pub fn assemble(
        period: Period,
        summaries: Vec<QueueDaySummary>,
        mut details: HashMap<String, Vec<DailyQueueRecord>>,
    ) -> Self {
        let ordered = queues_by_volume(&summaries);

        let sheets = ordered
            .iter()
            .map(|q| QueueSheet {
                queue: q.clone(),
                weeks: QueueWeek::from_buckets(bucket(details.remove(q).unwrap_or_default())),
            })
            .collect();

        let summary = bucket(summaries)
            .iter()
            .enumerate()
            .map(|(i, week)| CrossQueueWeek::build(i + 1, week, &ordered))
            .collect();

        Self {
            period,
            sheets,
            summary,
        }
    }
}

/// Load every queue with calls in `period` and build the report.
pub fn callcenter_report(pool: &mut DbPool, period: &Period) -> AppResult<CallCenterReport> {
    let summaries = queries::load_queue_day_summaries(pool, period)?;

    let mut details = HashMap::new();
    for queue in queues_by_volume(&summaries) {
        let report = queue_report(pool, &queue, period)?;
        details.insert(queue, report.records);
    }

    Ok(CallCenterReport::assemble(*period, summaries, details))
}

/// Per-queue counters and totals for one day.
pub fn dashboard(pool: &mut DbPool, date: NaiveDate) -> AppResult<Dashboard> {
    let rows = queries::load_queue_day_summaries(pool, &Period::day(date))?;
    Ok(Dashboard::build(date, rows))
}

/// Agent rows with compliance status, plus status counts.
#[derive(Debug, Clone)]
pub struct AgentReport {
    pub period: Period,
    pub rows: Vec<AgentActivity>,
    pub summary: ComplianceSummary,
}

pub fn agent_report(pool: &mut DbPool, period: &Period, limits: &BreakLimits) -> AppResult<AgentReport> {
    let rows = queries::load_agent_activity(pool, period, limits)?;
    let summary = ComplianceSummary::from_rows(&rows);
    Ok(AgentReport {
        period: *period,
        rows,
        summary,
    })
}
