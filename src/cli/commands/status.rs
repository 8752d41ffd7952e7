use super::since_or_default;
use crate::Context;
use crate::cli::parser::Commands;
use crate::core::status::Dashboard;
use crate::core::view::LogView;
use crate::errors::AppResult;
use crate::ui::messages::header;
use unicode_width::UnicodeWidthStr;

pub fn handle(cmd: &Commands, ctx: &Context) -> AppResult<()> {
    if let Commands::Status { since } = cmd {
        let start = since_or_default(since, ctx.default_start_date())?;
        let store = ctx.open_store()?;
        let view = LogView::load(&store, start, ctx.zone)?;

        let dash = Dashboard::build(&view, ctx.now, start);

        header(format!("Since {}", start));
        print_rows(&dash.rows());

        println!();
        header("Sleep");
        if dash.sleep_stats.sessions.is_empty() {
            println!("No Sleep data available");
        } else {
            println!("Sessions: {}", dash.sleep_stats.sessions.len());
            print_rows(&dash.sleep_rows());
        }
    }
    Ok(())
}

fn print_rows(rows: &[(String, String)]) {
    let w = rows.iter().map(|(k, _)| k.width()).max().unwrap_or(0);
    for (k, v) in rows {
        println!("{}{} : {}", k, " ".repeat(w - k.width()), v);
    }
}
