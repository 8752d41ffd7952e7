#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use babylog::core::codec;
use babylog::db::EventStore;
use babylog::models::decoded::DecodedEvent;
use babylog::models::event_kind::EventKind;
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use chrono_tz::Tz;
use std::env;
use std::fs;
use std::path::PathBuf;

pub const ZONE: Tz = chrono_tz::US::Pacific;

pub fn bl() -> Command {
    cargo_bin_cmd!("babylog")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_babylog.db", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize a DB through the CLI
pub fn init_db(db_path: &str) {
    bl().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

pub fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

/// Reference-zone wall clock → UTC instant
pub fn pt(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
    ZONE.with_ymd_and_hms(y, m, d, h, min, 0)
        .single()
        .expect("unambiguous local time")
        .with_timezone(&Utc)
}

/// Append an event made of a kind label only
pub fn log_kind(store: &EventStore, kind: EventKind, at: DateTime<Utc>) -> i64 {
    log_event(store, &DecodedEvent::new(kind), at)
}

pub fn log_event(store: &EventStore, ev: &DecodedEvent, at: DateTime<Utc>) -> i64 {
    let raw = codec::encode(ev).expect("encode");
    store.append(&raw, &at).expect("append")
}

pub fn memory_store() -> EventStore {
    EventStore::open_in_memory().expect("in-memory store")
}
