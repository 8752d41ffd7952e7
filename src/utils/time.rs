//! Time utilities: parsing HH:MM, formatting elapsed spans.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Duration, NaiveTime, TimeZone, Timelike};

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    let t = t.trim();
    NaiveTime::parse_from_str(t, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(t, "%H:%M"))
        .ok()
}

pub fn parse_required_time(t: &str) -> AppResult<NaiveTime> {
    parse_time(t).ok_or_else(|| AppError::InvalidTime(t.to_string()))
}

/// "H:MM:SS", prefixed with "N day(s), " past 24 hours.
pub fn format_elapsed(d: Duration) -> String {
    let secs = d.num_seconds();
    let sign = if secs < 0 { "-" } else { "" };
    let s = secs.abs();

    let days = s / 86_400;
    let rem = s % 86_400;
    let clock = format!("{}:{:02}:{:02}", rem / 3600, (rem % 3600) / 60, rem % 60);

    match days {
        0 => format!("{sign}{clock}"),
        1 => format!("{sign}1 day, {clock}"),
        n => format!("{sign}{n} days, {clock}"),
    }
}

/// "HH:MM", hours not wrapped at 24.
pub fn format_hhmm(d: Duration) -> String {
    let mins = d.num_minutes().abs();
    let sign = if d.num_seconds() < 0 { "-" } else { "" };
    format!("{}{:02}:{:02}", sign, mins / 60, mins % 60)
}

pub fn day_period(hour: u32) -> &'static str {
    match hour {
        6..=11 => "Morning",
        12..=16 => "Afternoon",
        17..=21 => "Evening",
        _ => "Night",
    }
}

/// "YYYY-MM-DD / Afternoon / 03:43 PM"
pub fn format_with_day_period<Tz: TimeZone>(t: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    format!(
        "{} / {} / {}",
        t.format("%Y-%m-%d"),
        day_period(t.hour()),
        t.format("%I:%M %p")
    )
}
