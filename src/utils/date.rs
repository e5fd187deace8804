//! Calendar helpers shared by the data-access layer and the report core.
//! Dates enter the program as `YYYY-MM-DD` strings exactly once, here.

use crate::errors::{AppError, AppResult};
use chrono::{Datelike, Duration, NaiveDate};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Parse a `YYYY-MM-DD` string into a calendar date.
pub fn parse_date(s: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| AppError::InvalidDate(s.to_string()))
}

/// Monday = 0 .. Sunday = 6.
pub fn weekday_index(d: NaiveDate) -> u32 {
    d.weekday().num_days_from_monday()
}

pub fn is_sunday(d: NaiveDate) -> bool {
    weekday_index(d) == 6
}

/// The Saturday on or after `d` (`d` itself when it is a Saturday).
/// A Sunday rolls forward six days to the following Saturday.
pub fn saturday_on_or_after(d: NaiveDate) -> NaiveDate {
    let days = (5 + 7 - weekday_index(d) as i64) % 7;
    d + Duration::days(days)
}

pub fn month_last_day(y: i32, m: u32) -> Option<u32> {
    match m {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => Some(31),
        4 | 6 | 9 | 11 => Some(30),
        2 => {
            let leap = (y % 4 == 0 && y % 100 != 0) || (y % 400 == 0);
            Some(if leap { 29 } else { 28 })
        }
        _ => None,
    }
}

/// Spanish weekday name, upper case (`LUNES`, `SÁBADO`, ...).
pub fn weekday_upper_es(d: NaiveDate) -> &'static str {
    match weekday_index(d) {
        0 => "LUNES",
        1 => "MARTES",
        2 => "MIÉRCOLES",
        3 => "JUEVES",
        4 => "VIERNES",
        5 => "SÁBADO",
        _ => "DOMINGO",
    }
}

/// Spanish weekday name, capitalized (`Lunes`, `Sábado`, ...).
pub fn weekday_es(d: NaiveDate) -> &'static str {
    match weekday_index(d) {
        0 => "Lunes",
        1 => "Martes",
        2 => "Miércoles",
        3 => "Jueves",
        4 => "Viernes",
        5 => "Sábado",
        _ => "Domingo",
    }
}

/// Short Spanish month name (`Ene`, `Feb`, ... `Dic`).
pub fn month_short_es(d: NaiveDate) -> &'static str {
    const MONTHS: [&str; 12] = [
        "Ene", "Feb", "Mar", "Abr", "May", "Jun", "Jul", "Ago", "Sep", "Oct", "Nov", "Dic",
    ];
    MONTHS[d.month0() as usize]
}

/// `05-Ene-2025`
pub fn format_long(d: NaiveDate) -> String {
    format!("{:02}-{}-{}", d.day(), month_short_es(d), d.year())
}

/// `5-Ene`
pub fn format_short(d: NaiveDate) -> String {
    format!("{}-{}", d.day(), month_short_es(d))
}
