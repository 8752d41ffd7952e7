pub mod decoded;
pub mod event_kind;
pub mod metrics;
pub mod record;
pub mod side;
