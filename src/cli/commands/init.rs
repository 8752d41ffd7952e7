use crate::Context;
use crate::config::Config;
use crate::db::log::audit;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the `init` command
///
/// Writes the configuration file (skipped in test mode) and creates the
/// SQLite schema.
pub fn handle(ctx: &Context) -> AppResult<()> {
    if !ctx.test {
        let path = Config::config_file();
        ctx.cfg.save_to(&path)?;
        info(format!("Config file : {}", path.display()));
    }

    let store = ctx.open_store()?;
    info(format!("Database    : {}", ctx.cfg.database));

    audit(
        &store.conn,
        "init",
        "database",
        &format!("Database initialized at {}", ctx.cfg.database),
    );

    success("babylog initialization completed!");
    Ok(())
}
