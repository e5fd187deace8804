// src/export/range.rs

use crate::errors::{AppError, AppResult};
use crate::models::period::Period;
use crate::utils::date::month_last_day;
use chrono::{Datelike, NaiveDate};

/// Parse --range (year / month / day / interval) into an inclusive period.
///
/// Supports:
/// - YYYY
/// - YYYY-MM
/// - YYYY-MM-DD
/// - YYYY:YYYY
/// - YYYY-MM:YYYY-MM
/// - YYYY-MM-DD:YYYY-MM-DD
pub fn parse_range(r: &str) -> AppResult<Period> {
    let (start_raw, end_raw) = match r.split_once(':') {
        Some((s, e)) => (s.trim(), e.trim()),
        None => (r.trim(), r.trim()),
    };

    if start_raw.len() != end_raw.len() {
        return Err(invalid(r, "start and end must have the same format"));
    }

    let start = first_day(start_raw).ok_or_else(|| invalid(r, "invalid start"))?;
    let end = last_day(end_raw).ok_or_else(|| invalid(r, "invalid end"))?;

    if end < start {
        return Err(invalid(r, "end is before start"));
    }

    Ok(Period::new(start, end))
}

fn invalid(r: &str, why: &str) -> AppError {
    AppError::InvalidRange(format!("{r} ({why})"))
}

/// Split `YYYY`, `YYYY-MM` or `YYYY-MM-DD` into its numeric parts.
fn parts(s: &str) -> Option<(i32, Option<u32>, Option<u32>)> {
    if !s.is_ascii() {
        return None;
    }
    match s.len() {
        4 => Some((s.parse().ok()?, None, None)),
        7 if s.as_bytes()[4] == b'-' => Some((s[0..4].parse().ok()?, Some(s[5..7].parse().ok()?), None)),
        10 => {
            let d = NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()?;
            Some((d.year(), Some(d.month()), Some(d.day())))
        }
        _ => None,
    }
}

fn first_day(s: &str) -> Option<NaiveDate> {
    let (y, m, d) = parts(s)?;
    NaiveDate::from_ymd_opt(y, m.unwrap_or(1), d.unwrap_or(1))
}

fn last_day(s: &str) -> Option<NaiveDate> {
    let (y, m, d) = parts(s)?;
    let m = m.unwrap_or(12);
    let d = match d {
        Some(d) => d,
        None => month_last_day(y, m)?,
    };
    NaiveDate::from_ymd_opt(y, m, d)
}
