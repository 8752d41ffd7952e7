use super::{event_kind::EventKind, side::Side};
use serde::Serialize;

/// Typed view of one `raw_event` string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecodedEvent {
    pub kind: EventKind,
    pub suffix: Option<String>, // e.g. the color in "Poop, brown"
    pub modifiers: Vec<Side>,
    pub comment: Option<String>,
}

impl DecodedEvent {
    pub fn new(kind: EventKind) -> Self {
        Self {
            kind,
            suffix: None,
            modifiers: Vec::new(),
            comment: None,
        }
    }

    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = Some(suffix.into());
        self
    }

    pub fn with_side(mut self, side: Side) -> Self {
        if !self.modifiers.contains(&side) {
            self.modifiers.push(side);
        }
        self
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        let c = comment.into();
        self.comment = if c.is_empty() { None } else { Some(c) };
        self
    }

    pub fn has_side(&self, side: Side) -> bool {
        self.modifiers.contains(&side)
    }

    /// Left segment without the comment, as a caregiver would read it.
    pub fn title(&self) -> String {
        match &self.suffix {
            Some(s) => format!("{}, {}", self.kind, s),
            None => self.kind.to_string(),
        }
    }
}
