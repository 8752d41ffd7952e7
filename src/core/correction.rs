//! Correction Writer: the only path that rewrites an existing record.

use crate::core::codec;
use crate::db::EventStore;
use crate::errors::AppResult;
use crate::models::decoded::DecodedEvent;
use crate::models::record::EventRecord;
use crate::utils::date::combine;
use chrono::{NaiveDate, NaiveTime};
use chrono_tz::Tz;

pub struct CorrectionWriter<'a> {
    store: &'a EventStore,
    zone: Tz,
}

impl<'a> CorrectionWriter<'a> {
    pub fn new(store: &'a EventStore, zone: Tz) -> Self {
        Self { store, zone }
    }

    /// Replace time and content of record `id`.
    ///
    /// `date` and `time` are wall-clock values in the reference zone. All
    /// validation happens before the write, so a rejected correction leaves
    /// the record untouched.
    pub fn apply(
        &self,
        id: i64,
        date: NaiveDate,
        time: NaiveTime,
        event: &DecodedEvent,
    ) -> AppResult<EventRecord> {
        let at = combine(date, time, self.zone)?;
        let raw = codec::encode(event)?;

        self.store.update(id, &at, &raw)?;
        self.store.get(id)
    }

    /// Replace the comment of record `id`, keeping its instant and tags.
    pub fn set_comment(&self, id: i64, comment: &str) -> AppResult<EventRecord> {
        let current = self.store.get(id)?;
        let event = codec::decode(&current.raw_event).with_comment(comment);
        let raw = codec::encode(&event)?;

        self.store.update(id, &current.timestamp, &raw)?;
        self.store.get(id)
    }
}
