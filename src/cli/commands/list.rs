use super::since_or_default;
use crate::Context;
use crate::cli::parser::Commands;
use crate::core::view::{LogEntry, LogView, SortOrder};
use crate::errors::{AppError, AppResult};
use crate::utils::table::Table;
use serde::Serialize;

pub fn handle(cmd: &Commands, ctx: &Context) -> AppResult<()> {
    if let Commands::List {
        since,
        all,
        asc,
        json,
    } = cmd
    {
        let store = ctx.open_store()?;

        let view = if *all {
            LogView::load_all(&store, ctx.zone)?
        } else {
            let start = since_or_default(since, ctx.default_start_date())?;
            LogView::load(&store, start, ctx.zone)?
        };

        if view.is_empty() {
            println!("No events logged.");
            return Ok(());
        }

        let order = if *asc {
            SortOrder::Ascending
        } else {
            SortOrder::Descending
        };

        if *json {
            let rows: Vec<JsonRow> = view.iter(order).map(JsonRow::from).collect();
            let out = serde_json::to_string_pretty(&rows)
                .map_err(|e| AppError::Export(e.to_string()))?;
            println!("{out}");
        } else {
            print!("{}", render(&view, order));
        }
    }
    Ok(())
}

#[derive(Serialize)]
struct JsonRow {
    id: i64,
    timestamp: String,
    kind: String,
    suffix: Option<String>,
    sides: String,
    comment: Option<String>,
}

impl From<&LogEntry> for JsonRow {
    fn from(e: &LogEntry) -> Self {
        Self {
            id: e.id(),
            timestamp: e.local.to_rfc3339(),
            kind: e.event.kind.label().to_string(),
            suffix: e.event.suffix.clone(),
            sides: e.event.modifiers.iter().map(|s| s.code()).collect(),
            comment: e.event.comment.clone(),
        }
    }
}

fn render(view: &LogView, order: SortOrder) -> String {
    let mut table = Table::new(&["ID", "DATE", "TIME", "EVENT", "SIDE", "COMMENT"]);

    for e in view.iter(order) {
        let sides: String = e.event.modifiers.iter().map(|s| s.code()).collect();
        table.add_row(vec![
            e.id().to_string(),
            e.local.format("%Y-%m-%d").to_string(),
            e.local.format("%H:%M:%S").to_string(),
            e.event.title(),
            sides,
            e.event.comment.clone().unwrap_or_default(),
        ]);
    }

    table.render()
}
