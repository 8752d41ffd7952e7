use super::apply_sides;
use crate::Context;
use crate::cli::parser::Commands;
use crate::core::codec;
use crate::db::log::audit;
use crate::errors::AppResult;
use crate::models::decoded::DecodedEvent;
use crate::models::event_kind::EventKind;
use crate::ui::messages::success;
use crate::utils::date::parse_local_datetime;

/// Append one event.
pub fn handle(cmd: &Commands, ctx: &Context) -> AppResult<()> {
    if let Commands::Add {
        kind,
        suffix,
        left,
        right,
        comment,
        at,
    } = cmd
    {
        let mut ev = DecodedEvent::new(EventKind::from_code(kind));
        if let Some(s) = suffix {
            ev = ev.with_suffix(s.clone());
        }
        ev = apply_sides(ev, *left, *right);
        if let Some(c) = comment {
            ev = ev.with_comment(c.clone());
        }

        let raw = codec::encode(&ev)?;
        let when = match at {
            Some(s) => parse_local_datetime(s, ctx.zone)?,
            None => ctx.now.with_timezone(&ctx.zone),
        };

        let store = ctx.open_store()?;
        let id = store.append(&raw, &when)?;

        audit(&store.conn, "add", &id.to_string(), &raw);
        success(format!(
            "Logged: {} at {} (id {})",
            raw,
            when.format("%Y-%m-%d %H:%M:%S %Z"),
            id
        ));
    }
    Ok(())
}
