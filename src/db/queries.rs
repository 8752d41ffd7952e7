use crate::db::STORAGE_FORMAT;
use crate::errors::AppError;
use crate::models::record::EventRecord;
use chrono::{DateTime, NaiveDateTime, Utc};
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

const SELECT_EVENTS: &str = "SELECT rowid AS id, timestamp, event FROM baby_events";

pub fn parse_storage_ts(s: &str) -> Option<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(s, STORAGE_FORMAT)
        .ok()
        .map(|naive| naive.and_utc())
}

pub fn map_row(row: &Row) -> Result<EventRecord> {
    let ts_str: String = row.get("timestamp")?;

    let timestamp = parse_storage_ts(&ts_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            1,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidTime(ts_str.clone())),
        )
    })?;

    Ok(EventRecord {
        id: row.get("id")?,
        timestamp,
        raw_event: row.get::<_, Option<String>>("event")?.unwrap_or_default(),
    })
}

pub fn insert_event(conn: &Connection, at: &DateTime<Utc>, raw_event: &str) -> Result<i64> {
    conn.execute(
        "INSERT INTO baby_events (timestamp, event) VALUES (?1, ?2)",
        params![at.format(STORAGE_FORMAT).to_string(), raw_event],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Overwrite timestamp and event of one row. Returns the number of rows touched.
pub fn update_event(
    conn: &Connection,
    id: i64,
    at: &DateTime<Utc>,
    raw_event: &str,
) -> Result<usize> {
    conn.execute(
        "UPDATE baby_events SET timestamp = ?1, event = ?2 WHERE rowid = ?3",
        params![at.format(STORAGE_FORMAT).to_string(), raw_event, id],
    )
}

pub fn load_event(conn: &Connection, id: i64) -> Result<Option<EventRecord>> {
    conn.query_row(
        &format!("{SELECT_EVENTS} WHERE rowid = ?1"),
        [id],
        map_row,
    )
    .optional()
}

/// Full scan, ascending by time. The text layout sorts lexicographically in
/// chronological order, so the comparison runs inside SQLite.
pub fn scan_events(conn: &Connection, since: Option<&DateTime<Utc>>) -> Result<Vec<EventRecord>> {
    let mut out = Vec::new();

    match since {
        Some(t) => {
            let mut stmt = conn.prepare_cached(&format!(
                "{SELECT_EVENTS} WHERE timestamp >= ?1 ORDER BY timestamp ASC, rowid ASC"
            ))?;
            let rows = stmt.query_map([t.format(STORAGE_FORMAT).to_string()], map_row)?;
            for r in rows {
                out.push(r?);
            }
        }
        None => {
            let mut stmt = conn.prepare_cached(&format!(
                "{SELECT_EVENTS} ORDER BY timestamp ASC, rowid ASC"
            ))?;
            let rows = stmt.query_map([], map_row)?;
            for r in rows {
                out.push(r?);
            }
        }
    }

    Ok(out)
}
