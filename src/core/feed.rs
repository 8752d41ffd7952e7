//! Inbound feed vocabulary: short remote commands mapped onto store writes.
//!
//! Transport is not handled here; the caller hands over one decoded payload
//! per message.

use crate::core::codec;
use crate::core::correction::CorrectionWriter;
use crate::core::metrics::Metrics;
use crate::core::view::LogView;
use crate::db::EventStore;
use crate::db::log::audit;
use crate::errors::AppResult;
use crate::models::decoded::DecodedEvent;
use crate::models::event_kind::EventKind;
use crate::utils::date::window_start;
use crate::utils::time::format_elapsed;
use chrono::{DateTime, Duration, Utc};
use chrono_tz::Tz;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedCommand {
    Feeding,
    Diaper,
    StopFeeding,
}

impl FeedCommand {
    pub fn parse(payload: &str) -> Option<Self> {
        match payload.trim() {
            "Feeding" => Some(FeedCommand::Feeding),
            "Diaper" => Some(FeedCommand::Diaper),
            "Stop Feeding" => Some(FeedCommand::StopFeeding),
            _ => None,
        }
    }

    /// Kinds appended for this command, in write order.
    pub fn appends(&self) -> Vec<EventKind> {
        match self {
            FeedCommand::Feeding => vec![EventKind::Breastfeeding],
            FeedCommand::Diaper => vec![EventKind::DiaperChange, EventKind::Pee],
            FeedCommand::StopFeeding => Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedOutcome {
    Logged(Vec<i64>),
    Annotated { id: i64, lasted: Duration },
    NothingToStop,
    Ignored(String),
}

pub struct FeedHandler<'a> {
    store: &'a EventStore,
    zone: Tz,
    lookback_days: u32,
}

impl<'a> FeedHandler<'a> {
    pub fn new(store: &'a EventStore, zone: Tz, lookback_days: u32) -> Self {
        Self {
            store,
            zone,
            lookback_days,
        }
    }

    pub fn handle_message(&self, payload: &str, now: DateTime<Utc>) -> AppResult<FeedOutcome> {
        let Some(cmd) = FeedCommand::parse(payload) else {
            return Ok(FeedOutcome::Ignored(payload.trim().to_string()));
        };

        let outcome = match cmd {
            FeedCommand::StopFeeding => self.stop_feeding(now)?,
            _ => {
                let mut ids = Vec::new();
                for kind in cmd.appends() {
                    let raw = codec::encode(&DecodedEvent::new(kind))?;
                    ids.push(self.store.append(&raw, &now)?);
                }
                FeedOutcome::Logged(ids)
            }
        };

        audit(
            &self.store.conn,
            "feed",
            payload.trim(),
            &format!("{:?}", outcome),
        );

        Ok(outcome)
    }

    /// Stamp the running feeding with how long it has lasted so far.
    fn stop_feeding(&self, now: DateTime<Utc>) -> AppResult<FeedOutcome> {
        let start_date = window_start(self.zone, &now, self.lookback_days);
        let view = LogView::load(self.store, start_date, self.zone)?;
        let metrics = Metrics::new(&view, now);

        let Some(last) = metrics.last_event(&EventKind::Breastfeeding, start_date) else {
            return Ok(FeedOutcome::NothingToStop);
        };

        let lasted = now - last.at();
        CorrectionWriter::new(self.store, self.zone)
            .set_comment(last.id(), &format!("Lasted {}", format_elapsed(lasted)))?;

        Ok(FeedOutcome::Annotated {
            id: last.id(),
            lasted,
        })
    }
}
