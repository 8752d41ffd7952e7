use crate::Context;
use crate::cli::parser::Commands;
use crate::core::feed::{FeedHandler, FeedOutcome};
use crate::errors::AppResult;
use crate::ui::messages::{error, success, warning};
use crate::utils::time::format_elapsed;
use std::io::{self, BufRead};

pub fn handle(cmd: &Commands, ctx: &Context) -> AppResult<()> {
    if let Commands::Feed { payload, stdin } = cmd {
        let store = ctx.open_store()?;
        let handler = FeedHandler::new(&store, ctx.zone, ctx.cfg.lookback_days);

        if *stdin {
            // one bad message must not stop the listener
            for line in io::stdin().lock().lines() {
                let line = line?;
                if line.trim().is_empty() {
                    continue;
                }
                match handler.handle_message(&line, ctx.now) {
                    Ok(outcome) => report(&line, &outcome),
                    Err(e) => error(format!("Error processing message '{}': {}", line, e)),
                }
            }
        } else if let Some(p) = payload {
            let outcome = handler.handle_message(p, ctx.now)?;
            report(p, &outcome);
        }
    }
    Ok(())
}

fn report(payload: &str, outcome: &FeedOutcome) {
    match outcome {
        FeedOutcome::Logged(ids) => success(format!(
            "Logged: {} ({} event(s), ids {:?})",
            payload.trim(),
            ids.len(),
            ids
        )),
        FeedOutcome::Annotated { id, lasted } => success(format!(
            "Feeding {} lasted {}",
            id,
            format_elapsed(*lasted)
        )),
        FeedOutcome::NothingToStop => warning("No feeding to stop."),
        FeedOutcome::Ignored(p) => warning(format!("Unknown feed command '{}', ignored.", p)),
    }
}
