//! Static PDF summary of the log.

mod pdf;

pub use pdf::ReportPdf;

use crate::core::metrics::longest_sessions;
use crate::core::status::Dashboard;
use crate::core::view::{LogView, SortOrder};
use crate::errors::{AppError, AppResult};
use crate::models::event_kind::EventKind;
use crate::models::side::Side;
use crate::utils::time::{format_elapsed, format_with_day_period};
use chrono::{DateTime, Duration, NaiveDate, Utc};
use std::path::Path;

pub const REPORT_TITLE: &str = "Baby Tracking System Report";

/// Kinds plotted in the daily activity table.
fn activity_kinds() -> [EventKind; 3] {
    [EventKind::Breastfeeding, EventKind::Pee, EventKind::Poop]
}

/// Rows for feeding / pee / poop events of the last 24 hours, oldest first.
pub fn activity_rows(view: &LogView, now: DateTime<Utc>) -> Vec<Vec<String>> {
    let from = now - Duration::hours(24);
    let kinds = activity_kinds();

    view.iter(SortOrder::Ascending)
        .filter(|e| e.at() >= from && kinds.iter().any(|k| e.event.kind.matches(k)))
        .map(|e| {
            let sides: String = e.event.modifiers.iter().map(Side::code).collect();
            vec![
                e.local.format("%H:%M").to_string(),
                e.event.title(),
                sides,
                e.event.comment.clone().unwrap_or_default(),
            ]
        })
        .collect()
}

pub struct ReportLogic;

impl ReportLogic {
    /// Render the whole report into PDF bytes.
    pub fn render(view: &LogView, now: DateTime<Utc>, start_date: NaiveDate) -> Vec<u8> {
        let dash = Dashboard::build(view, now, start_date);
        let mut pdf = ReportPdf::new();

        pdf.title(REPORT_TITLE);
        pdf.key_values(&dash.rows());

        pdf.heading("Sleep Data");
        let sessions = &dash.sleep_stats.sessions;
        if sessions.is_empty() {
            pdf.line("No Sleep data available");
        } else {
            for (label, value) in dash.sleep_rows() {
                pdf.line(&format!("{label}: {value}"));
            }
            for s in longest_sessions(sessions, 5) {
                let start = s.start.with_timezone(&view.zone());
                pdf.line(&format!(
                    "Start: {},  Duration: {}",
                    format_with_day_period(&start),
                    format_elapsed(s.duration)
                ));
            }
        }

        pdf.heading("Last 24 Hours");
        let rows = activity_rows(view, now);
        if rows.is_empty() {
            pdf.line("No activity in the last 24 hours");
        } else {
            pdf.table(&["Time", "Event", "Side", "Comment"], &rows);
        }

        pdf.finish()
    }

    pub fn write(
        view: &LogView,
        now: DateTime<Utc>,
        start_date: NaiveDate,
        path: &Path,
    ) -> AppResult<()> {
        let bytes = Self::render(view, now, start_date);
        std::fs::write(path, bytes)
            .map_err(|e| AppError::Export(format!("cannot write {}: {e}", path.display())))
    }
}
