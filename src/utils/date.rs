//! Calendar helpers bound to the reference zone.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Duration, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;

pub fn today(zone: Tz, now: &DateTime<Utc>) -> NaiveDate {
    now.with_timezone(&zone).date_naive()
}

/// First day of a calendar window that looks back `days` days from today.
pub fn window_start(zone: Tz, now: &DateTime<Utc>, days: u32) -> NaiveDate {
    today(zone, now) - Duration::days(i64::from(days))
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Instant at which `date` begins in `zone`, if that wall-clock time exists.
pub fn local_midnight(date: NaiveDate, zone: Tz) -> Option<DateTime<Tz>> {
    zone.from_local_datetime(&date.and_time(NaiveTime::MIN))
        .earliest()
}

/// Combine a wall-clock date and time in `zone` into one instant.
///
/// A time that falls in a DST gap does not exist and is rejected. A time
/// repeated by the autumn shift resolves to its standard-time occurrence,
/// the later of the two.
pub fn combine(date: NaiveDate, time: NaiveTime, zone: Tz) -> AppResult<DateTime<Tz>> {
    let naive = date.and_time(time);
    match zone.from_local_datetime(&naive) {
        LocalResult::Single(t) => Ok(t),
        LocalResult::Ambiguous(_, standard) => Ok(standard),
        LocalResult::None => Err(AppError::Validation(format!(
            "{} does not exist in {}",
            naive.format("%Y-%m-%d %H:%M:%S"),
            zone
        ))),
    }
}

/// Parse "YYYY-MM-DD HH:MM[:SS]" as reference-zone wall-clock time.
pub fn parse_local_datetime(s: &str, zone: Tz) -> AppResult<DateTime<Tz>> {
    let s = s.trim();
    let naive = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M"))
        .map_err(|_| AppError::Validation(format!("invalid date/time '{s}'")))?;
    combine(naive.date(), naive.time(), zone)
}
