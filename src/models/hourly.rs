use chrono::NaiveDate;
use serde::Serialize;

/// Calls that started within one clock hour of one day.
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct HourlyCount {
    #[serde(rename = "fecha")]
    pub date: NaiveDate,
    #[serde(rename = "hora")]
    pub hour: u32,
    #[serde(rename = "cantidad")]
    pub count: i64,
}

impl HourlyCount {
    pub fn new(date: NaiveDate, hour: u32, count: i64) -> Self {
        Self { date, hour, count }
    }
}
