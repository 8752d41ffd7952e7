use clap::{Parser, Subcommand};

/// Command-line interface definition for babylog
#[derive(Parser)]
#[command(
    name = "babylog",
    version = env!("CARGO_PKG_VERSION"),
    about = "Log feedings, diaper changes, sleep and medication; see time-since metrics and print a PDF summary",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or a second log)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Pretend the current time is this reference-zone time (YYYY-MM-DD HH:MM[:SS])
    #[arg(global = true, long = "now", hide = true)]
    pub now: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Show the effective configuration
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,
    },

    /// Log a new event
    Add {
        /// Event kind (feeding, diaper, pee, poop, sleep, meds, vitd, prenatal or free text)
        kind: String,

        #[arg(long, help = "Extra detail kept with the kind, e.g. a color")]
        suffix: Option<String>,

        #[arg(long, short = 'l', help = "Left side (feeding)")]
        left: bool,

        #[arg(long, short = 'r', help = "Right side (feeding)")]
        right: bool,

        #[arg(long, short = 'c', help = "Free-text comment")]
        comment: Option<String>,

        #[arg(long, value_name = "DATETIME", help = "Event time (YYYY-MM-DD HH:MM[:SS]), default now")]
        at: Option<String>,
    },

    /// List logged events
    List {
        #[arg(long, value_name = "DATE", help = "First day to show (YYYY-MM-DD)")]
        since: Option<String>,

        #[arg(long, help = "Show every event ever logged")]
        all: bool,

        #[arg(long, help = "Oldest first")]
        asc: bool,

        #[arg(long, help = "Print JSON instead of a table")]
        json: bool,
    },

    /// Correct the time or content of an existing event
    Edit {
        /// Event id as shown by `list`
        id: i64,

        #[arg(long, help = "New date (YYYY-MM-DD)")]
        date: Option<String>,

        #[arg(long, help = "New time (HH:MM[:SS])")]
        time: Option<String>,

        #[arg(long, help = "New kind")]
        kind: Option<String>,

        #[arg(long, help = "New suffix")]
        suffix: Option<String>,

        #[arg(long, short = 'l', help = "Set left side")]
        left: bool,

        #[arg(long, short = 'r', help = "Set right side")]
        right: bool,

        #[arg(long = "no-side", conflicts_with_all = ["left", "right"], help = "Remove side tags")]
        no_side: bool,

        #[arg(long, short = 'c', help = "New comment")]
        comment: Option<String>,

        #[arg(long = "clear-comment", conflicts_with = "comment", help = "Remove the comment")]
        clear_comment: bool,
    },

    /// Show time-since and count metrics
    Status {
        #[arg(long, value_name = "DATE", help = "First day of the window (YYYY-MM-DD)")]
        since: Option<String>,
    },

    /// Process remote feed commands ("Feeding", "Diaper", "Stop Feeding")
    Feed {
        /// One message payload
        #[arg(required_unless_present = "stdin")]
        payload: Option<String>,

        #[arg(long, conflicts_with = "payload", help = "Read one payload per line from stdin")]
        stdin: bool,
    },

    /// Write the PDF summary report
    Report {
        #[arg(long, value_name = "FILE")]
        file: Option<String>,

        #[arg(long, value_name = "DATE", help = "First day of the window (YYYY-MM-DD)")]
        since: Option<String>,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}
