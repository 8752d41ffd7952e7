//! Persisted row of the `baby_events` table.

use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventRecord {
    pub id: i64,                  // ⇔ baby_events.rowid
    pub timestamp: DateTime<Utc>, // ⇔ baby_events.timestamp (TEXT "YYYY-MM-DD HH:MM:SS", UTC)
    pub raw_event: String,        // ⇔ baby_events.event
}

impl EventRecord {
    pub fn timestamp_str(&self) -> String {
        self.timestamp.format(crate::db::STORAGE_FORMAT).to_string()
    }
}
