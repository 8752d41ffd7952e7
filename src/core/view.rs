//! Log View: a decoded, time-sorted snapshot of the store for one window.

use crate::core::codec;
use crate::db::EventStore;
use crate::errors::AppResult;
use crate::models::decoded::DecodedEvent;
use crate::models::record::EventRecord;
use crate::utils::date::local_midnight;
use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

#[derive(Debug, Clone)]
pub struct LogEntry {
    pub record: EventRecord,
    pub event: DecodedEvent,
    /// Record timestamp in the reference zone.
    pub local: DateTime<Tz>,
}

impl LogEntry {
    pub fn from_record(record: EventRecord, zone: Tz) -> Self {
        let event = codec::decode(&record.raw_event);
        let local = record.timestamp.with_timezone(&zone);
        Self {
            record,
            event,
            local,
        }
    }

    pub fn id(&self) -> i64 {
        self.record.id
    }

    pub fn at(&self) -> DateTime<Utc> {
        self.record.timestamp
    }

    /// Calendar day in the reference zone.
    pub fn local_date(&self) -> NaiveDate {
        self.local.date_naive()
    }
}

/// Entries are held once, oldest first; callers pick the order when iterating.
#[derive(Debug, Clone)]
pub struct LogView {
    zone: Tz,
    start_date: Option<NaiveDate>,
    entries: Vec<LogEntry>,
}

impl LogView {
    /// Load every record on or after the reference-zone midnight that starts
    /// `start_date`. The day boundary is never UTC midnight.
    pub fn load(store: &EventStore, start_date: NaiveDate, zone: Tz) -> AppResult<Self> {
        let since = local_midnight(start_date, zone).map(|t| t.with_timezone(&Utc));
        let records = store.scan(since.as_ref())?;

        Ok(Self::from_records(records, Some(start_date), zone))
    }

    /// Load the whole table.
    pub fn load_all(store: &EventStore, zone: Tz) -> AppResult<Self> {
        let records = store.scan(None)?;
        Ok(Self::from_records(records, None, zone))
    }

    pub fn from_records(
        records: Vec<EventRecord>,
        start_date: Option<NaiveDate>,
        zone: Tz,
    ) -> Self {
        let mut entries: Vec<LogEntry> = records
            .into_iter()
            .map(|r| LogEntry::from_record(r, zone))
            .filter(|e| start_date.is_none_or(|d| e.local_date() >= d))
            .collect();

        // stable: equal timestamps keep insertion (rowid) order
        entries.sort_by_key(|e| e.at());

        Self {
            zone,
            start_date,
            entries,
        }
    }

    pub fn zone(&self) -> Tz {
        self.zone
    }

    pub fn start_date(&self) -> Option<NaiveDate> {
        self.start_date
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self, order: SortOrder) -> Box<dyn Iterator<Item = &LogEntry> + '_> {
        match order {
            SortOrder::Ascending => Box::new(self.entries.iter()),
            SortOrder::Descending => Box::new(self.entries.iter().rev()),
        }
    }

    /// Entries whose reference-zone date is on or after `not_before`, oldest first.
    pub fn since_date(&self, not_before: NaiveDate) -> impl Iterator<Item = &LogEntry> {
        self.entries
            .iter()
            .filter(move |e| e.local_date() >= not_before)
    }
}
