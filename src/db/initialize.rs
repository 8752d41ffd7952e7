use crate::errors::AppResult;
use rusqlite::Connection;

/// Create the event table and the internal audit table if they are missing.
///
/// `baby_events` keeps the legacy two-column shape; row identity is the
/// SQLite `rowid`, so logs written by older tools open unchanged.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS baby_events (
            timestamp TEXT,
            event     TEXT
        );

        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}
