use crate::Context;
use crate::cli::parser::Commands;
use crate::core::codec;
use crate::core::correction::CorrectionWriter;
use crate::db::log::audit;
use crate::errors::{AppError, AppResult};
use crate::models::event_kind::EventKind;
use crate::models::side::Side;
use crate::ui::messages::success;
use crate::utils::{date, time};

/// Correct an existing event. Flags that are not given keep the stored value.
pub fn handle(cmd: &Commands, ctx: &Context) -> AppResult<()> {
    if let Commands::Edit {
        id,
        date: new_date,
        time: new_time,
        kind,
        suffix,
        left,
        right,
        no_side,
        comment,
        clear_comment,
    } = cmd
    {
        let store = ctx.open_store()?;
        let current = store.get(*id)?;
        let local = current.timestamp.with_timezone(&ctx.zone);

        let d = match new_date {
            Some(s) => date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?,
            None => local.date_naive(),
        };
        let t = match new_time {
            Some(s) => time::parse_required_time(s)?,
            None => local.time(),
        };

        let mut ev = codec::decode(&current.raw_event);
        if let Some(k) = kind {
            ev.kind = EventKind::from_code(k);
        }
        if let Some(s) = suffix {
            ev.suffix = Some(s.clone());
        }
        if *no_side || *left || *right {
            ev.modifiers.clear();
            ev = super::apply_sides(ev, *left, *right);
        }
        if *clear_comment {
            ev.comment = None;
        } else if let Some(c) = comment {
            ev = ev.with_comment(c.clone());
        }

        let updated = CorrectionWriter::new(&store, ctx.zone).apply(*id, d, t, &ev)?;

        audit(
            &store.conn,
            "edit",
            &id.to_string(),
            &format!(
                "{} {} -> {} {}",
                current.timestamp_str(),
                current.raw_event,
                updated.timestamp_str(),
                updated.raw_event
            ),
        );

        let sides: String = ev.modifiers.iter().map(Side::code).collect();
        success(format!(
            "Updated event {}: {} {} {}",
            id,
            updated.timestamp.with_timezone(&ctx.zone).format("%Y-%m-%d %H:%M:%S"),
            ev.title(),
            sides
        ));
    }
    Ok(())
}
