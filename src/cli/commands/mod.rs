pub mod add;
pub mod config;
pub mod edit;
pub mod feed;
pub mod init;
pub mod list;
pub mod log;
pub mod report;
pub mod status;

use crate::errors::{AppError, AppResult};
use crate::models::decoded::DecodedEvent;
use crate::models::side::Side;
use crate::utils::date;
use chrono::NaiveDate;

/// Parse an optional `--since` flag, defaulting to the configured window.
pub(crate) fn since_or_default(since: &Option<String>, fallback: NaiveDate) -> AppResult<NaiveDate> {
    match since {
        Some(s) => date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone())),
        None => Ok(fallback),
    }
}

pub(crate) fn apply_sides(mut ev: DecodedEvent, left: bool, right: bool) -> DecodedEvent {
    if left {
        ev = ev.with_side(Side::Left);
    }
    if right {
        ev = ev.with_side(Side::Right);
    }
    ev
}
