//! Values produced by the metrics engine. None of them is persisted.

use super::side::Side;
use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

/// Elapsed time since the most recent event of a kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Since {
    pub last: DateTime<Utc>,
    pub elapsed: Duration,
    /// Only filled for feeding events.
    pub sides: Vec<Side>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FeedingBalance {
    pub left: usize,
    pub right: usize,
}

/// A closed Sleep → (Diaper | Breastfeeding) span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SleepSession {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub duration: Duration,
}
