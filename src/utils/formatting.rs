//! Formatting utilities used for CLI and export outputs.

/// `3725` → `1:02:05`
pub fn secs2hms(secs: i64) -> String {
    let s = secs.max(0);
    format!("{}:{:02}:{:02}", s / 3600, (s % 3600) / 60, s % 60)
}

/// Seconds rounded to whole minutes, as shown next to wait times.
pub fn secs2mins(secs: i64) -> i64 {
    (secs as f64 / 60.0).round() as i64
}

/// Percentage with one decimal, the way the sheets print it (`12.5%`).
pub fn pct(value: f64) -> String {
    format!("{value:.1}%")
}

pub fn pad_right(s: &str, width: usize) -> String {
    format!("{:<width$}", s, width = width)
}

pub fn pad_left(s: &str, width: usize) -> String {
    format!("{:>width$}", s, width = width)
}
