use crate::export::ExportFormat;
use crate::models::ListOrder;
use clap::{Parser, Subcommand};

/// Command-line interface definition for kajilog
#[derive(Parser, Debug)]
#[command(
    name = "kajilog",
    version = env!("CARGO_PKG_VERSION"),
    about = "Household chores log: who did which chore, when, and for how long (SQLite)",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or a shared DB file)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Show or edit the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Editor to use (vim, nano, or custom path)")]
        editor: Option<String>,
    },

    /// Database maintenance
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Record a chore
    Add {
        /// Task: code (cooking, dishes, ...) or label (料理, 🍳料理, ...)
        task: String,

        #[arg(long, short = 'p', help = "Who did it: A, B, or a member name")]
        person: Option<String>,

        #[arg(long, short = 'd', help = "Date (YYYY-MM-DD, default: today)")]
        date: Option<String>,

        #[arg(
            long = "duration",
            visible_alias = "time",
            short = 't',
            help = "Time spent, e.g. 15分 or 30"
        )]
        duration: Option<String>,
    },

    /// List recorded chores
    List {
        #[arg(long, value_enum, help = "Sort by id (default from config)")]
        order: Option<ListOrder>,

        #[arg(long = "today", help = "Only today's chores")]
        today: bool,

        #[arg(long, short = 'p', help = "Only chores done by this person")]
        person: Option<String>,

        #[arg(long, help = "Only chores of this task")]
        task: Option<String>,
    },

    /// Delete a chore by id
    Del {
        /// Record id
        id: String,

        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Export all chores
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE", help = "Output file (default: kaji.csv / kaji.json)")]
        file: Option<String>,

        #[arg(long, short = 'f', help = "Overwrite an existing file")]
        force: bool,
    },

    /// Show the task categories and household members
    Tasks,

    /// Interactive view: list, add and delete in one session
    Shell,

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,

        #[arg(long, short = 'f', help = "Overwrite an existing backup")]
        force: bool,
    },
}
