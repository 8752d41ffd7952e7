//! babylog library root.
//! Exposes the CLI parser, the high-level run() function and the event-log
//! core (codec, store, view, metrics, corrections).

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod models;
pub mod report;
pub mod ui;
pub mod utils;

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Everything a command handler needs besides its own arguments.
pub struct Context {
    pub cfg: Config,
    pub zone: Tz,
    pub now: DateTime<Utc>,
    pub test: bool,
}

impl Context {
    pub fn new(cfg: Config, now: Option<&str>, test: bool) -> AppResult<Self> {
        let zone = cfg.zone()?;
        let now = match now {
            Some(s) => utils::date::parse_local_datetime(s, zone)?.with_timezone(&Utc),
            None => Utc::now(),
        };
        Ok(Self {
            cfg,
            zone,
            now,
            test,
        })
    }

    pub fn open_store(&self) -> AppResult<db::EventStore> {
        db::EventStore::open(&self.cfg.database)
    }

    /// Default calendar window start (today minus `lookback_days`).
    pub fn default_start_date(&self) -> chrono::NaiveDate {
        utils::date::window_start(self.zone, &self.now, self.cfg.lookback_days)
    }
}

/// Central command dispatcher
pub fn dispatch(cli: &Cli, ctx: &Context) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(ctx),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, ctx),
        Commands::Add { .. } => cli::commands::add::handle(&cli.command, ctx),
        Commands::List { .. } => cli::commands::list::handle(&cli.command, ctx),
        Commands::Edit { .. } => cli::commands::edit::handle(&cli.command, ctx),
        Commands::Status { .. } => cli::commands::status::handle(&cli.command, ctx),
        Commands::Feed { .. } => cli::commands::feed::handle(&cli.command, ctx),
        Commands::Report { .. } => cli::commands::report::handle(&cli.command, ctx),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, ctx),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let mut cfg = Config::load()?;
    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }

    let ctx = Context::new(cfg, cli.now.as_deref(), cli.test)?;
    dispatch(&cli, &ctx)
}
