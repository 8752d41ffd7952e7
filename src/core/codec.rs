//! Translation between `DecodedEvent` and the single text column persisted in
//! `baby_events.event`.
//!
//! Grammar: `<Kind>[, <suffix>][,<ModifierChar>]*[+<Comment>]`
//!
//! The comment separator (`+`) and the field separator (`,`) are different
//! characters. The suffix segment is written with a leading space, modifier
//! segments without, so a suffix can never be mistaken for a side tag. For
//! the same reason a suffix may hold ", " (as in "Poop, brown, runny") but
//! never a bare ','.

use crate::errors::{AppError, AppResult};
use crate::models::decoded::DecodedEvent;
use crate::models::event_kind::EventKind;
use crate::models::side::Side;

pub const COMMENT_SEP: char = '+';
pub const FIELD_SEP: char = ',';

fn check_segment(what: &str, s: &str) -> AppResult<()> {
    if s.contains(COMMENT_SEP) || s.contains(FIELD_SEP) {
        return Err(AppError::Validation(format!(
            "{what} '{s}' must not contain '{COMMENT_SEP}' or '{FIELD_SEP}'"
        )));
    }
    Ok(())
}

fn check_suffix(s: &str) -> AppResult<()> {
    let bare_comma = s
        .match_indices(FIELD_SEP)
        .any(|(i, _)| !s[i + 1..].starts_with(' '));
    if s.contains(COMMENT_SEP) || bare_comma {
        return Err(AppError::Validation(format!(
            "suffix '{s}' must not contain '{COMMENT_SEP}' or a '{FIELD_SEP}' without a following space"
        )));
    }
    Ok(())
}

/// Encode an event into its stored representation.
///
/// Fails when the kind is blank or contains a reserved separator, or when
/// the suffix would split differently on decode; the comment is free text.
pub fn encode(ev: &DecodedEvent) -> AppResult<String> {
    let kind = ev.kind.label();
    if kind.trim().is_empty() || kind.trim() != kind {
        return Err(AppError::Validation(format!("invalid event kind '{kind}'")));
    }
    check_segment("kind", kind)?;

    let mut out = String::from(kind);

    if let Some(suffix) = &ev.suffix {
        check_suffix(suffix)?;
        if suffix.trim().is_empty() {
            return Err(AppError::Validation("empty suffix".into()));
        }
        out.push(FIELD_SEP);
        out.push(' ');
        out.push_str(suffix);
    }

    for side in &ev.modifiers {
        out.push(FIELD_SEP);
        out.push(side.code());
    }

    if let Some(comment) = ev.comment.as_deref().filter(|c| !c.is_empty()) {
        out.push(COMMENT_SEP);
        out.push_str(comment);
    }

    Ok(out)
}

/// Decode a stored event string. Never fails: anything unexpected ends up
/// in the kind or suffix text.
pub fn decode(raw: &str) -> DecodedEvent {
    let (head, comment) = match raw.split_once(COMMENT_SEP) {
        Some((h, c)) => (h, Some(c)),
        None => (raw, None),
    };

    let mut segments = head.split(FIELD_SEP);
    let kind = EventKind::from_label(segments.next().unwrap_or_default().trim());

    let mut modifiers = Vec::new();
    let mut suffix_parts: Vec<&str> = Vec::new();

    for seg in segments {
        match Side::from_segment(seg) {
            Some(side) => {
                if !modifiers.contains(&side) {
                    modifiers.push(side);
                }
            }
            None if seg.trim().is_empty() => {}
            None => suffix_parts.push(seg.strip_prefix(' ').unwrap_or(seg)),
        }
    }

    let suffix = if suffix_parts.is_empty() {
        None
    } else {
        Some(suffix_parts.join(", "))
    };

    DecodedEvent {
        kind,
        suffix,
        modifiers,
        comment: comment.filter(|c| !c.is_empty()).map(str::to_string),
    }
}
