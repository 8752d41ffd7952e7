//! Event Store: owner of the `baby_events` table.
//!
//! Every write runs as a single autocommit statement, so it is durable once
//! the call returns. No locking beyond SQLite's own is attempted.

use crate::db::initialize::init_db;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::models::record::EventRecord;
use chrono::{DateTime, TimeZone, Utc};
use rusqlite::Connection;
use std::path::Path;

pub struct EventStore {
    pub conn: Connection,
}

impl EventStore {
    /// Open (or create) the SQLite file and make sure the schema exists.
    pub fn open(path: impl AsRef<Path>) -> AppResult<Self> {
        let conn = Connection::open(path.as_ref())?;
        init_db(&conn)?;
        Ok(Self { conn })
    }

    pub fn open_in_memory() -> AppResult<Self> {
        let conn = Connection::open_in_memory()?;
        init_db(&conn)?;
        Ok(Self { conn })
    }

    /// Insert a new record and return its id. The instant is normalized to
    /// UTC and truncated to whole seconds.
    pub fn append<Tz: TimeZone>(&self, raw_event: &str, at: &DateTime<Tz>) -> AppResult<i64> {
        if raw_event.is_empty() {
            return Err(AppError::Validation("event text must not be empty".into()));
        }
        let utc = at.with_timezone(&Utc);
        Ok(queries::insert_event(&self.conn, &utc, raw_event)?)
    }

    /// Overwrite timestamp and event text of an existing record.
    pub fn update<Tz: TimeZone>(
        &self,
        id: i64,
        new_timestamp: &DateTime<Tz>,
        new_raw_event: &str,
    ) -> AppResult<()> {
        if new_raw_event.is_empty() {
            return Err(AppError::Validation("event text must not be empty".into()));
        }
        let utc = new_timestamp.with_timezone(&Utc);
        match queries::update_event(&self.conn, id, &utc, new_raw_event)? {
            0 => Err(AppError::NotFound(id)),
            _ => Ok(()),
        }
    }

    pub fn get(&self, id: i64) -> AppResult<EventRecord> {
        queries::load_event(&self.conn, id)?.ok_or(AppError::NotFound(id))
    }

    /// All records with `timestamp >= since` (or all of them), oldest first.
    pub fn scan(&self, since: Option<&DateTime<Utc>>) -> AppResult<Vec<EventRecord>> {
        Ok(queries::scan_events(&self.conn, since)?)
    }
}
