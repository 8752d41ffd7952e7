//! Dashboard summary: the handful of numbers a caregiver looks at first.
//! Shared by `babylog status` and the PDF report.

use crate::core::metrics::{self, Metrics};
use crate::core::view::LogView;
use crate::models::event_kind::EventKind;
use crate::models::metrics::{FeedingBalance, Since, SleepSession};
use crate::utils::time::{format_elapsed, format_hhmm};
use chrono::{DateTime, Duration, NaiveDate, Utc};
use chrono_tz::Tz;

#[derive(Debug, Clone)]
pub struct SleepStats {
    pub sessions: Vec<SleepSession>,
    pub median: Option<Duration>,
    pub max: Option<Duration>,
    pub mean: Option<Duration>,
}

#[derive(Debug, Clone)]
pub struct Dashboard {
    pub now: DateTime<Tz>,
    pub start_date: NaiveDate,
    pub diaper: Option<Since>,
    pub feeding: Option<Since>,
    /// `None` as soon as a feeding or diaper change happened after the last sleep.
    pub sleep: Option<Since>,
    pub pain_meds: Option<Since>,
    pub vitamin_d: Option<Since>,
    pub prenatal: Option<Since>,
    pub pee_24h: usize,
    pub poop_24h: usize,
    pub balance: FeedingBalance,
    pub sleep_stats: SleepStats,
}

fn elapsed_of(s: &Option<Since>) -> Option<Duration> {
    s.as_ref().map(|s| s.elapsed)
}

fn show(s: &Option<Since>) -> String {
    match s {
        None => "N/A".to_string(),
        Some(s) if s.sides.is_empty() => format_elapsed(s.elapsed),
        Some(s) => {
            let sides: Vec<&str> = s.sides.iter().map(|side| side.arrow()).collect();
            format!("{} ({})", format_elapsed(s.elapsed), sides.join(" "))
        }
    }
}

fn show_duration(d: Option<Duration>) -> String {
    d.map(format_hhmm).unwrap_or_else(|| "N/A".to_string())
}

impl Dashboard {
    pub fn build(view: &LogView, now: DateTime<Utc>, start_date: NaiveDate) -> Self {
        let m = Metrics::new(view, now);
        let since = |kind: EventKind| m.time_since_last(&kind, start_date);

        let diaper = since(EventKind::DiaperChange);
        let feeding = since(EventKind::Breastfeeding);
        let mut sleep = since(EventKind::Sleep);

        if let Some(slept) = elapsed_of(&sleep) {
            let woke = [elapsed_of(&feeding), elapsed_of(&diaper)]
                .into_iter()
                .flatten()
                .any(|e| slept > e);
            if woke {
                sleep = None;
            }
        }

        let sessions = m.sleep_sessions(start_date);
        let sleep_stats = SleepStats {
            median: metrics::median_duration(&sessions),
            max: metrics::max_duration(&sessions),
            mean: metrics::mean_duration(&sessions),
            sessions,
        };

        Self {
            now: now.with_timezone(&view.zone()),
            start_date,
            diaper,
            feeding,
            sleep,
            pain_meds: since(EventKind::PainMeds),
            vitamin_d: since(EventKind::VitaminD),
            prenatal: since(EventKind::PrenatalVitamins),
            pee_24h: m.count_last_24h(&EventKind::Pee),
            poop_24h: m.count_last_24h(&EventKind::Poop),
            balance: m.feeding_balance(start_date),
            sleep_stats,
        }
    }

    /// Label/value pairs in display order.
    pub fn rows(&self) -> Vec<(String, String)> {
        vec![
            (
                "Current time".into(),
                self.now.format("%Y-%m-%d %H:%M:%S %Z").to_string(),
            ),
            ("Time since last diaper change".into(), show(&self.diaper)),
            ("Time since last feeding".into(), show(&self.feeding)),
            ("Time since sleep".into(), show(&self.sleep)),
            ("Time since last pain med".into(), show(&self.pain_meds)),
            ("Time since last Vitamin D".into(), show(&self.vitamin_d)),
            (
                "Time since last Prenatal vitamins".into(),
                show(&self.prenatal),
            ),
            ("Pee count (24h)".into(), self.pee_24h.to_string()),
            ("Poop count (24h)".into(), self.poop_24h.to_string()),
            (
                "Feeding balance".into(),
                format!("L {} / R {}", self.balance.left, self.balance.right),
            ),
        ]
    }

    pub fn sleep_rows(&self) -> Vec<(String, String)> {
        vec![
            (
                "Median sleep duration".into(),
                show_duration(self.sleep_stats.median),
            ),
            (
                "Max sleep duration".into(),
                show_duration(self.sleep_stats.max),
            ),
            (
                "Average sleep duration".into(),
                show_duration(self.sleep_stats.mean),
            ),
        ]
    }
}
