use serde::Serialize;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Primary category of a logged event.
///
/// The known variants carry the exact labels found in existing logs, so a
/// record written years ago still decodes to the same kind. Anything else is
/// kept verbatim in `Custom`. Equality goes by label, so `Custom("Sleep")`
/// and `Sleep` are the same kind.
#[derive(Debug, Clone, Serialize)]
pub enum EventKind {
    Breastfeeding,
    DiaperChange,
    Pee,
    Poop,
    Sleep,
    PainMeds,
    VitaminD,
    PrenatalVitamins,
    Custom(String),
}

impl EventKind {
    /// Label as persisted in the `event` column.
    pub fn label(&self) -> &str {
        match self {
            EventKind::Breastfeeding => "Breastfeeding",
            EventKind::DiaperChange => "Diaper Change",
            EventKind::Pee => "Pee",
            EventKind::Poop => "Poop",
            EventKind::Sleep => "Sleep",
            EventKind::PainMeds => "Mom Painmeds",
            EventKind::VitaminD => "Vitamin D",
            EventKind::PrenatalVitamins => "Prenatal vitamins",
            EventKind::Custom(s) => s,
        }
    }

    /// Convert stored label → enum. Never fails: unknown labels become `Custom`.
    pub fn from_label(s: &str) -> Self {
        match s {
            "Breastfeeding" => EventKind::Breastfeeding,
            "Diaper Change" => EventKind::DiaperChange,
            "Pee" => EventKind::Pee,
            "Poop" => EventKind::Poop,
            "Sleep" => EventKind::Sleep,
            "Mom Painmeds" => EventKind::PainMeds,
            "Vitamin D" => EventKind::VitaminD,
            "Prenatal vitamins" => EventKind::PrenatalVitamins,
            other => EventKind::Custom(other.to_string()),
        }
    }

    /// Build a free-form kind; a known label still yields its variant.
    pub fn custom(label: impl Into<String>) -> Self {
        let label = label.into();
        match Self::from_label(&label) {
            EventKind::Custom(_) => EventKind::Custom(label),
            known => known,
        }
    }

    /// Helper: convert a CLI alias (any case) into a kind.
    pub fn from_code(code: &str) -> Self {
        match code.trim().to_lowercase().as_str() {
            "breastfeeding" | "feeding" | "feed" | "bf" => EventKind::Breastfeeding,
            "diaper change" | "diaper" | "diaperchange" => EventKind::DiaperChange,
            "pee" => EventKind::Pee,
            "poop" => EventKind::Poop,
            "sleep" => EventKind::Sleep,
            "mom painmeds" | "painmeds" | "meds" => EventKind::PainMeds,
            "vitamin d" | "vitd" => EventKind::VitaminD,
            "prenatal vitamins" | "prenatal" => EventKind::PrenatalVitamins,
            _ => EventKind::custom(code.trim()),
        }
    }

    /// Prefix match used by every metric: `Poop, brown` matches `Poop`.
    pub fn matches(&self, query: &EventKind) -> bool {
        self.label().starts_with(query.label())
    }

    pub fn is_feeding(&self) -> bool {
        self.matches(&EventKind::Breastfeeding)
    }
}

impl PartialEq for EventKind {
    fn eq(&self, other: &Self) -> bool {
        self.label() == other.label()
    }
}

impl Eq for EventKind {}

impl Hash for EventKind {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.label().hash(state);
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
