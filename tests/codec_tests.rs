use babylog::core::codec::{decode, encode};
use babylog::errors::AppError;
use babylog::models::decoded::DecodedEvent;
use babylog::models::event_kind::EventKind;
use babylog::models::side::Side;

#[test]
fn test_encode_kind_only_has_no_separator() {
    let raw = encode(&DecodedEvent::new(EventKind::Pee)).unwrap();
    assert_eq!(raw, "Pee");
}

#[test]
fn test_encode_full_event_matches_legacy_grammar() {
    let ev = DecodedEvent::new(EventKind::Breastfeeding)
        .with_side(Side::Left)
        .with_side(Side::Right)
        .with_comment("Lasted 0:20:00");
    assert_eq!(encode(&ev).unwrap(), "Breastfeeding,L,R+Lasted 0:20:00");

    let poop = DecodedEvent::new(EventKind::Poop).with_suffix("brown");
    assert_eq!(encode(&poop).unwrap(), "Poop, brown");
}

#[test]
fn test_round_trip_preserves_every_field() {
    let samples = vec![
        DecodedEvent::new(EventKind::Sleep),
        DecodedEvent::new(EventKind::DiaperChange).with_comment("rash, applied cream"),
        DecodedEvent::new(EventKind::Poop)
            .with_suffix("green")
            .with_comment("a lot + smelly"),
        DecodedEvent::new(EventKind::Breastfeeding).with_side(Side::Right),
        DecodedEvent::new(EventKind::Custom("Bath".into())).with_comment("warm"),
        // a suffix that looks like a side tag stays a suffix
        DecodedEvent::new(EventKind::Custom("Shoe".into())).with_suffix("L"),
    ];

    for ev in samples {
        let raw = encode(&ev).unwrap();
        assert_eq!(decode(&raw), ev, "round trip failed for {raw:?}");
    }
}

#[test]
fn test_decode_legacy_strings() {
    let ev = decode("Diaper Change");
    assert_eq!(ev.kind, EventKind::DiaperChange);
    assert!(ev.comment.is_none());
    assert!(ev.modifiers.is_empty());

    let ev = decode("Breastfeeding,R+Lasted 0:12:03");
    assert_eq!(ev.kind, EventKind::Breastfeeding);
    assert_eq!(ev.modifiers, vec![Side::Right]);
    assert_eq!(ev.comment.as_deref(), Some("Lasted 0:12:03"));

    let ev = decode("Mom Painmeds");
    assert_eq!(ev.kind, EventKind::PainMeds);
}

#[test]
fn test_decode_splits_on_first_comment_separator_only() {
    let ev = decode("Pee+one+two");
    assert_eq!(ev.kind, EventKind::Pee);
    assert_eq!(ev.comment.as_deref(), Some("one+two"));
}

#[test]
fn test_decode_never_fails_on_odd_input() {
    let ev = decode("+only a comment");
    assert_eq!(ev.kind, EventKind::Custom(String::new()));
    assert_eq!(ev.comment.as_deref(), Some("only a comment"));

    let ev = decode("Poop,weird,L");
    assert_eq!(ev.kind, EventKind::Poop);
    assert_eq!(ev.suffix.as_deref(), Some("weird"));
    assert_eq!(ev.modifiers, vec![Side::Left]);

    let ev = decode("Sleep+");
    assert_eq!(ev.kind, EventKind::Sleep);
    assert!(ev.comment.is_none());
}

#[test]
fn test_encode_rejects_reserved_characters_in_kind_and_suffix() {
    let bad_kind = DecodedEvent::new(EventKind::Custom("Bath+Soap".into()));
    assert!(matches!(encode(&bad_kind), Err(AppError::Validation(_))));

    let bad_suffix = DecodedEvent::new(EventKind::Poop).with_suffix("brown,L");
    assert!(matches!(encode(&bad_suffix), Err(AppError::Validation(_))));

    let bad_suffix = DecodedEvent::new(EventKind::Poop).with_suffix("brown+runny");
    assert!(matches!(encode(&bad_suffix), Err(AppError::Validation(_))));

    let blank = DecodedEvent::new(EventKind::Custom("  ".into()));
    assert!(matches!(encode(&blank), Err(AppError::Validation(_))));
}

#[test]
fn test_every_decoded_legacy_row_encodes_back() {
    let rows = [
        "Poop, brown, runny",
        "Breastfeeding, long, L",
        "Poop, brown,",
        "Poop,,L+note",
        "Pee, , x",
    ];

    for raw in rows {
        let ev = decode(raw);
        let again = encode(&ev).unwrap_or_else(|e| panic!("{raw:?} failed to encode: {e}"));
        assert_eq!(decode(&again), ev, "{raw:?} changed meaning");
    }

    let ev = decode("Poop, brown, runny");
    assert_eq!(ev.suffix.as_deref(), Some("brown, runny"));
    assert_eq!(encode(&ev).unwrap(), "Poop, brown, runny");

    // " L" carries a space so it is suffix text, not a side tag
    let ev = decode("Breastfeeding, long, L");
    assert_eq!(ev.suffix.as_deref(), Some("long, L"));
    assert!(ev.modifiers.is_empty());
}

#[test]
fn test_custom_kind_with_known_label_is_the_known_kind() {
    assert_eq!(EventKind::custom("Sleep"), EventKind::Sleep);
    assert_eq!(EventKind::Custom("Sleep".into()), EventKind::Sleep);

    let ev = DecodedEvent::new(EventKind::Custom("Sleep".into()));
    assert_eq!(decode(&encode(&ev).unwrap()), ev);
}

#[test]
fn test_empty_comment_is_no_comment() {
    let ev = DecodedEvent::new(EventKind::Pee).with_comment("");
    assert_eq!(encode(&ev).unwrap(), "Pee");
}
