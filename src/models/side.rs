use serde::Serialize;

/// Single-character modifier tag. Today only the feeding side uses it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Side {
    Left,  // L
    Right, // R
}

impl Side {
    pub fn code(&self) -> char {
        match self {
            Side::Left => 'L',
            Side::Right => 'R',
        }
    }

    /// Convert a modifier segment → enum. Only an exact one-char segment counts.
    pub fn from_segment(s: &str) -> Option<Self> {
        match s {
            "L" => Some(Side::Left),
            "R" => Some(Side::Right),
            _ => None,
        }
    }

    pub fn arrow(&self) -> &'static str {
        match self {
            Side::Left => "<- left",
            Side::Right => "right ->",
        }
    }
}
