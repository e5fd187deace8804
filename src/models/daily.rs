//! Per-day call aggregates as delivered by the store.

use chrono::NaiveDate;
use serde::Serialize;

/// Sentinel label for a day without hourly data.
pub const NO_WINDOW: &str = "-";

/// A contiguous 2-hour window and the calls it carried.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct HourWindow {
    pub label: String,
    pub count: i64,
}

impl HourWindow {
    pub fn none() -> Self {
        Self {
            label: NO_WINDOW.to_string(),
            count: 0,
        }
    }

    /// Window starting at `hour`: `"14h+15h"`.
    pub fn starting_at(hour: u32, count: i64) -> Self {
        Self {
            label: format!("{:02}h+{:02}h", hour, hour + 1),
            count,
        }
    }

    pub fn is_none(&self) -> bool {
        self.label == NO_WINDOW
    }
}

impl Default for HourWindow {
    fn default() -> Self {
        Self::none()
    }
}

/// One row per (date, queue), or per date when the query is not queue-scoped.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct DailyQueueRecord {
    #[serde(rename = "fecha")]
    pub date: NaiveDate,
    #[serde(rename = "cola", skip_serializing_if = "Option::is_none")]
    pub queue: Option<String>,
    #[serde(rename = "llamadas_totales")]
    pub total: i64,
    #[serde(rename = "respondidas")]
    pub answered: i64,
    #[serde(rename = "pct_respondidas")]
    pub answered_pct: f64,
    #[serde(rename = "abandonadas")]
    pub abandoned: i64,
    #[serde(rename = "pct_abandonadas")]
    pub abandoned_pct: f64,
    #[serde(rename = "promedio_espera")]
    pub avg_wait: i64,
    #[serde(rename = "espera_mas_larga")]
    pub max_wait: i64,
    #[serde(rename = "promedio_duracion_llamada")]
    pub avg_duration: i64,
    #[serde(rename = "duracion_mas_larga")]
    pub max_duration: i64,
    #[serde(rename = "hora_pico")]
    pub peak_hour: String,
    #[serde(rename = "cantidad_hora_pico")]
    pub peak_count: i64,
    #[serde(rename = "hora_menos_pico")]
    pub trough_hour: String,
    #[serde(rename = "cantidad_hora_menos_pico")]
    pub trough_count: i64,
}

impl DailyQueueRecord {
    /// Record with counters only; durations and windows left empty.
    pub fn new(date: NaiveDate, queue: Option<&str>, total: i64, answered: i64, abandoned: i64) -> Self {
        Self {
            date,
            queue: queue.map(str::to_string),
            total,
            answered,
            answered_pct: share(answered, total, 2),
            abandoned,
            abandoned_pct: share(abandoned, total, 2),
            avg_wait: 0,
            max_wait: 0,
            avg_duration: 0,
            max_duration: 0,
            peak_hour: NO_WINDOW.to_string(),
            peak_count: 0,
            trough_hour: NO_WINDOW.to_string(),
            trough_count: 0,
        }
    }

    pub fn set_windows(&mut self, peak: HourWindow, trough: HourWindow) {
        self.peak_hour = peak.label;
        self.peak_count = peak.count;
        self.trough_hour = trough.label;
        self.trough_count = trough.count;
    }

    pub fn peak(&self) -> HourWindow {
        HourWindow {
            label: self.peak_hour.clone(),
            count: self.peak_count,
        }
    }

    pub fn trough(&self) -> HourWindow {
        HourWindow {
            label: self.trough_hour.clone(),
            count: self.trough_count,
        }
    }
}

/// Cross-queue row: the counters of one queue on one day.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct QueueDaySummary {
    #[serde(rename = "fecha")]
    pub date: NaiveDate,
    #[serde(rename = "cola")]
    pub queue: String,
    #[serde(rename = "llamadas_totales")]
    pub total: i64,
    #[serde(rename = "respondidas")]
    pub answered: i64,
    #[serde(rename = "abandonadas")]
    pub abandoned: i64,
}

/// `part / total * 100` rounded to `decimals`, 0 when `total` is 0.
pub fn share(part: i64, total: i64, decimals: i32) -> f64 {
    if total <= 0 {
        return 0.0;
    }
    let factor = 10f64.powi(decimals);
    (part as f64 / total as f64 * 100.0 * factor).round() / factor
}
