pub mod initialize;
pub mod log;
pub mod queries;
pub mod store;

/// Layout of `baby_events.timestamp`: always UTC, second precision.
pub const STORAGE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub use store::EventStore;
