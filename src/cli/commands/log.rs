use crate::Context;
use crate::cli::parser::Commands;
use crate::db::log::load_log;
use crate::errors::AppResult;
use ansi_term::Colour;

/// Colour per audit operation
fn color_for_operation(op: &str) -> Colour {
    match op {
        "add" => Colour::Green,
        "edit" => Colour::Yellow,
        "feed" => Colour::Cyan,
        "report" => Colour::Blue,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

pub fn handle(cmd: &Commands, ctx: &Context) -> AppResult<()> {
    if matches!(cmd, Commands::Log { print: true }) {
        let store = ctx.open_store()?;
        let entries = load_log(&store.conn)?;

        if entries.is_empty() {
            println!("Internal log is empty.");
            return Ok(());
        }

        println!("📜 Internal log:\n");

        let op_w = entries
            .iter()
            .map(|e| e.operation.len() + e.target.len() + 3)
            .max()
            .unwrap_or(10)
            .min(60);

        for e in &entries {
            let op_target = if e.target.is_empty() {
                e.operation.clone()
            } else {
                format!("{} ({})", e.operation, e.target)
            };
            let padded = format!("{:<w$}", op_target, w = op_w);
            println!(
                "{:>4}  {}  {}  {}",
                e.id,
                e.date,
                color_for_operation(&e.operation).paint(padded),
                e.message
            );
        }
    }
    Ok(())
}
