use super::since_or_default;
use crate::Context;
use crate::cli::parser::Commands;
use crate::core::view::LogView;
use crate::db::log::audit;
use crate::errors::AppResult;
use crate::report::ReportLogic;
use crate::ui::messages::{info, success};
use std::path::PathBuf;

pub fn handle(cmd: &Commands, ctx: &Context) -> AppResult<()> {
    if let Commands::Report { file, since } = cmd {
        let start = since_or_default(since, ctx.default_start_date())?;
        let path = PathBuf::from(file.clone().unwrap_or_else(|| ctx.cfg.report_file.clone()));

        let store = ctx.open_store()?;
        let view = LogView::load(&store, start, ctx.zone)?;

        info(format!("Writing report: {}", path.display()));
        ReportLogic::write(&view, ctx.now, start, &path)?;

        audit(
            &store.conn,
            "report",
            &path.display().to_string(),
            &format!("{} events since {}", view.len(), start),
        );
        success(format!("PDF report completed: {}", path.display()));
    }
    Ok(())
}
