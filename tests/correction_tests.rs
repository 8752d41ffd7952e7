mod common;
use babylog::core::codec::decode;
use babylog::core::correction::CorrectionWriter;
use babylog::errors::AppError;
use babylog::models::decoded::DecodedEvent;
use babylog::models::event_kind::EventKind;
use babylog::models::side::Side;
use chrono::NaiveTime;
use common::{ZONE, day, log_kind, memory_store, pt};

fn hm(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

#[test]
fn test_apply_rewrites_time_and_content_in_reference_zone() {
    let store = memory_store();
    let id = log_kind(&store, EventKind::Pee, pt(2025, 6, 10, 9, 0));

    let fixed = DecodedEvent::new(EventKind::Breastfeeding)
        .with_side(Side::Left)
        .with_comment("fell asleep");
    let rec = CorrectionWriter::new(&store, ZONE)
        .apply(id, day(2025, 6, 10), hm(8, 40), &fixed)
        .unwrap();

    assert_eq!(rec.id, id);
    assert_eq!(rec.timestamp_str(), "2025-06-10 15:40:00");
    assert_eq!(rec.raw_event, "Breastfeeding,L+fell asleep");
    assert_eq!(decode(&rec.raw_event), fixed);
}

#[test]
fn test_apply_twice_is_idempotent() {
    let store = memory_store();
    let id = log_kind(&store, EventKind::Sleep, pt(2025, 6, 10, 9, 0));
    let writer = CorrectionWriter::new(&store, ZONE);
    let ev = DecodedEvent::new(EventKind::Sleep).with_comment("crib");

    let first = writer.apply(id, day(2025, 6, 10), hm(9, 5), &ev).unwrap();
    let second = writer.apply(id, day(2025, 6, 10), hm(9, 5), &ev).unwrap();

    assert_eq!(first, second);
    assert_eq!(store.scan(None).unwrap().len(), 1);
}

#[test]
fn test_apply_unknown_id_is_not_found_and_creates_nothing() {
    let store = memory_store();
    let ev = DecodedEvent::new(EventKind::Pee);

    let err = CorrectionWriter::new(&store, ZONE)
        .apply(7, day(2025, 6, 10), hm(9, 0), &ev)
        .unwrap_err();

    assert!(matches!(err, AppError::NotFound(7)));
    assert!(store.scan(None).unwrap().is_empty());
}

#[test]
fn test_apply_rejects_nonexistent_local_time_and_leaves_record() {
    let store = memory_store();
    let id = log_kind(&store, EventKind::Pee, pt(2025, 3, 8, 9, 0));

    // 02:30 on 2025-03-09 is skipped by the spring DST shift
    let err = CorrectionWriter::new(&store, ZONE)
        .apply(id, day(2025, 3, 9), hm(2, 30), &DecodedEvent::new(EventKind::Poop))
        .unwrap_err();

    assert!(matches!(err, AppError::Validation(_)));
    let rec = store.get(id).unwrap();
    assert_eq!(rec.raw_event, "Pee");
    assert_eq!(rec.timestamp, pt(2025, 3, 8, 9, 0));
}

#[test]
fn test_apply_rejects_invalid_kind_and_leaves_record() {
    let store = memory_store();
    let id = log_kind(&store, EventKind::Pee, pt(2025, 6, 10, 9, 0));

    let bad = DecodedEvent::new(EventKind::Custom("Bath+Soap".into()));
    let err = CorrectionWriter::new(&store, ZONE)
        .apply(id, day(2025, 6, 11), hm(9, 0), &bad)
        .unwrap_err();

    assert!(matches!(err, AppError::Validation(_)));
    assert_eq!(store.get(id).unwrap().timestamp, pt(2025, 6, 10, 9, 0));
}

#[test]
fn test_set_comment_keeps_time_and_tags() {
    let store = memory_store();
    let raw = "Breastfeeding,R+old";
    let id = store.append(raw, &pt(2025, 6, 10, 9, 0)).unwrap();

    let rec = CorrectionWriter::new(&store, ZONE)
        .set_comment(id, "Lasted 0:25:00")
        .unwrap();

    assert_eq!(rec.raw_event, "Breastfeeding,R+Lasted 0:25:00");
    assert_eq!(rec.timestamp, pt(2025, 6, 10, 9, 0));
}

#[test]
fn test_time_only_apply_on_multi_segment_legacy_row() {
    let store = memory_store();
    let raw = "Poop, brown, runny";
    let id = store.append(raw, &pt(2025, 6, 10, 9, 0)).unwrap();

    let rec = CorrectionWriter::new(&store, ZONE)
        .apply(id, day(2025, 6, 10), hm(9, 30), &decode(raw))
        .unwrap();

    assert_eq!(rec.raw_event, raw);
    assert_eq!(rec.timestamp, pt(2025, 6, 10, 9, 30));
}

#[test]
fn test_set_comment_on_multi_segment_legacy_row() {
    let store = memory_store();
    let id = store
        .append("Poop, brown, runny", &pt(2025, 6, 10, 9, 0))
        .unwrap();

    let rec = CorrectionWriter::new(&store, ZONE)
        .set_comment(id, "call doctor")
        .unwrap();

    assert_eq!(rec.raw_event, "Poop, brown, runny+call doctor");
}

#[test]
fn test_apply_repeated_autumn_time_uses_standard_time() {
    let store = memory_store();
    let id = log_kind(&store, EventKind::Pee, pt(2025, 11, 1, 9, 0));

    // 01:30 on 2025-11-02 happens twice; the second one is PST (UTC-8)
    let rec = CorrectionWriter::new(&store, ZONE)
        .apply(id, day(2025, 11, 2), hm(1, 30), &DecodedEvent::new(EventKind::Pee))
        .unwrap();

    assert_eq!(rec.timestamp_str(), "2025-11-02 09:30:00");
}
