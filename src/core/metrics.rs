//! Metrics Engine: derived numbers over a Log View snapshot.
//!
//! "now" is an explicit input so every computation is reproducible.
//! A metric with no qualifying data returns `None`, never zero.

use crate::core::view::{LogEntry, LogView, SortOrder};
use crate::models::event_kind::EventKind;
use crate::models::metrics::{FeedingBalance, Since, SleepSession};
use crate::models::side::Side;
use chrono::{DateTime, Duration, NaiveDate, Utc};

/// Kinds that end a pending sleep, matched by label prefix.
const SLEEP_CLOSERS: [&str; 2] = ["Diaper", "Breastfeeding"];

pub struct Metrics<'a> {
    view: &'a LogView,
    now: DateTime<Utc>,
}

impl<'a> Metrics<'a> {
    pub fn new(view: &'a LogView, now: DateTime<Utc>) -> Self {
        Self { view, now }
    }

    /// Most recent entry of `kind` (prefix match) dated on/after `not_before`.
    /// Ties on the timestamp go to the record inserted last.
    pub fn last_event(&self, kind: &EventKind, not_before: NaiveDate) -> Option<&'a LogEntry> {
        self.view
            .since_date(not_before)
            .filter(|e| e.event.kind.matches(kind))
            .max_by_key(|e| (e.at(), e.id()))
    }

    pub fn time_since_last(&self, kind: &EventKind, not_before: NaiveDate) -> Option<Since> {
        let last = self.last_event(kind, not_before)?;

        let sides = if kind.is_feeding() {
            [Side::Right, Side::Left]
                .into_iter()
                .filter(|s| last.event.has_side(*s))
                .collect()
        } else {
            Vec::new()
        };

        Some(Since {
            last: last.at(),
            elapsed: self.now - last.at(),
            sides,
        })
    }

    /// Rolling-window count: events of `kind` at or after a fixed instant.
    pub fn count(&self, kind: &EventKind, window_start: DateTime<Utc>) -> usize {
        self.view
            .iter(SortOrder::Ascending)
            .filter(|e| e.at() >= window_start && e.event.kind.matches(kind))
            .count()
    }

    /// Count over the last 24 hours before "now".
    pub fn count_last_24h(&self, kind: &EventKind) -> usize {
        self.count(kind, self.now - Duration::hours(24))
    }

    /// Left/right tallies over feeding events. One event may bump both.
    pub fn feeding_balance(&self, not_before: NaiveDate) -> FeedingBalance {
        let mut balance = FeedingBalance::default();

        for e in self.view.since_date(not_before) {
            if !e.event.kind.is_feeding() {
                continue;
            }
            if e.event.has_side(Side::Left) {
                balance.left += 1;
            }
            if e.event.has_side(Side::Right) {
                balance.right += 1;
            }
        }

        balance
    }

    /// Rebuild sleep spans: Sleep opens (a later Sleep replaces a pending
    /// start), a diaper change or feeding closes. Open spans are dropped.
    pub fn sleep_sessions(&self, not_before: NaiveDate) -> Vec<SleepSession> {
        let mut sessions = Vec::new();
        let mut asleep_since: Option<DateTime<Utc>> = None;

        for e in self.view.since_date(not_before) {
            let label = e.event.kind.label();

            if e.event.kind.matches(&EventKind::Sleep) {
                asleep_since = Some(e.at());
            } else if SLEEP_CLOSERS.iter().any(|p| label.starts_with(p))
                && let Some(start) = asleep_since.take()
            {
                sessions.push(SleepSession {
                    start,
                    end: e.at(),
                    duration: e.at() - start,
                });
            }
        }

        sessions
    }
}

fn sorted_durations(sessions: &[SleepSession]) -> Vec<i64> {
    let mut secs: Vec<i64> = sessions.iter().map(|s| s.duration.num_seconds()).collect();
    secs.sort_unstable();
    secs
}

/// Statistical median; the mean of the two middle values on even counts.
pub fn median_duration(sessions: &[SleepSession]) -> Option<Duration> {
    let secs = sorted_durations(sessions);
    let n = secs.len();
    if n == 0 {
        return None;
    }

    let mid = n / 2;
    let median = if n % 2 == 1 {
        secs[mid]
    } else {
        (secs[mid - 1] + secs[mid]) / 2
    };
    Some(Duration::seconds(median))
}

pub fn max_duration(sessions: &[SleepSession]) -> Option<Duration> {
    sessions.iter().map(|s| s.duration).max()
}

pub fn mean_duration(sessions: &[SleepSession]) -> Option<Duration> {
    if sessions.is_empty() {
        return None;
    }
    let total: i64 = sessions.iter().map(|s| s.duration.num_seconds()).sum();
    Some(Duration::seconds(total / sessions.len() as i64))
}

/// Longest sessions first, at most `n` of them.
pub fn longest_sessions(sessions: &[SleepSession], n: usize) -> Vec<SleepSession> {
    let mut sorted = sessions.to_vec();
    sorted.sort_by(|a, b| b.duration.cmp(&a.duration).then(a.start.cmp(&b.start)));
    sorted.truncate(n);
    sorted
}
