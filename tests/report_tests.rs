mod common;
use babylog::core::status::Dashboard;
use babylog::core::view::LogView;
use babylog::models::decoded::DecodedEvent;
use babylog::models::event_kind::EventKind;
use babylog::models::side::Side;
use babylog::report::{ReportLogic, activity_rows};
use common::{ZONE, day, log_event, log_kind, memory_store, pt, temp_out};
use std::path::Path;

fn row<'a>(rows: &'a [(String, String)], label: &str) -> &'a str {
    rows.iter()
        .find(|(k, _)| k == label)
        .map(|(_, v)| v.as_str())
        .unwrap_or_else(|| panic!("missing row {label}"))
}

#[test]
fn test_dashboard_rows() {
    let store = memory_store();
    log_kind(&store, EventKind::Sleep, pt(2025, 6, 10, 5, 0));
    log_event(
        &store,
        &DecodedEvent::new(EventKind::Breastfeeding).with_side(Side::Left),
        pt(2025, 6, 10, 7, 0),
    );
    log_kind(&store, EventKind::Pee, pt(2025, 6, 10, 7, 30));
    log_kind(&store, EventKind::Pee, pt(2025, 6, 10, 8, 0));

    let view = LogView::load(&store, day(2025, 6, 9), ZONE).unwrap();
    let dash = Dashboard::build(&view, pt(2025, 6, 10, 9, 0), day(2025, 6, 9));
    let rows = dash.rows();

    assert_eq!(row(&rows, "Time since last feeding"), "2:00:00 (<- left)");
    assert_eq!(row(&rows, "Time since last diaper change"), "N/A");
    // fed after the last sleep: awake
    assert_eq!(row(&rows, "Time since sleep"), "N/A");
    assert_eq!(row(&rows, "Pee count (24h)"), "2");
    assert_eq!(row(&rows, "Poop count (24h)"), "0");
    assert_eq!(row(&rows, "Feeding balance"), "L 1 / R 0");

    assert_eq!(dash.sleep_stats.sessions.len(), 1);
    assert_eq!(row(&dash.sleep_rows(), "Max sleep duration"), "02:00");
}

#[test]
fn test_dashboard_keeps_sleep_while_still_asleep() {
    let store = memory_store();
    log_kind(&store, EventKind::Breastfeeding, pt(2025, 6, 10, 5, 0));
    log_kind(&store, EventKind::Sleep, pt(2025, 6, 10, 5, 40));

    let view = LogView::load(&store, day(2025, 6, 10), ZONE).unwrap();
    let dash = Dashboard::build(&view, pt(2025, 6, 10, 6, 0), day(2025, 6, 10));

    assert_eq!(row(&dash.rows(), "Time since sleep"), "0:20:00");
    assert!(dash.sleep_stats.sessions.is_empty());
    assert_eq!(row(&dash.sleep_rows(), "Median sleep duration"), "N/A");
}

#[test]
fn test_activity_rows_cover_last_24_hours() {
    let store = memory_store();
    log_kind(&store, EventKind::Pee, pt(2025, 6, 9, 6, 0));
    log_event(
        &store,
        &DecodedEvent::new(EventKind::Poop).with_suffix("brown").with_comment("big"),
        pt(2025, 6, 10, 7, 0),
    );
    log_kind(&store, EventKind::Sleep, pt(2025, 6, 10, 8, 0));

    let view = LogView::load(&store, day(2025, 6, 9), ZONE).unwrap();
    let rows = activity_rows(&view, pt(2025, 6, 10, 9, 0));

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0], vec!["07:00", "Poop, brown", "", "big"]);
}

#[test]
fn test_report_is_a_pdf() {
    let store = memory_store();
    log_kind(&store, EventKind::Sleep, pt(2025, 6, 10, 1, 0));
    log_kind(&store, EventKind::DiaperChange, pt(2025, 6, 10, 3, 0));
    for m in 0..60 {
        log_event(
            &store,
            &DecodedEvent::new(EventKind::Pee).with_comment(format!("note {m}")),
            pt(2025, 6, 10, 4, m),
        );
    }

    let view = LogView::load(&store, day(2025, 6, 10), ZONE).unwrap();
    let now = pt(2025, 6, 10, 12, 0);

    let bytes = ReportLogic::render(&view, now, day(2025, 6, 10));
    assert!(bytes.starts_with(b"%PDF"));

    let out = temp_out("report_is_a_pdf", "pdf");
    ReportLogic::write(&view, now, day(2025, 6, 10), Path::new(&out)).unwrap();
    assert!(std::fs::read(&out).unwrap().starts_with(b"%PDF"));
}

#[test]
fn test_report_on_empty_log() {
    let store = memory_store();
    let view = LogView::load(&store, day(2025, 6, 10), ZONE).unwrap();
    let bytes = ReportLogic::render(&view, pt(2025, 6, 10, 12, 0), day(2025, 6, 10));
    assert!(bytes.starts_with(b"%PDF"));
}
