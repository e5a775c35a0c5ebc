use crate::cli::parser::Cli;
use crate::cli::commands::{open_store, print_notices};
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::utils::path::expand_tilde;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (skipped in test mode)
///  - the SQLite database
///  - all pending DB migrations
pub fn handle(cli: &Cli) -> AppResult<()> {
    let custom = cli
        .db
        .as_deref()
        .map(|p| expand_tilde(p).to_string_lossy().to_string());
    let db_path = Config::init_all(custom.as_deref(), cli.test)?;

    info("Initializing kajilog…");
    if !cli.test {
        info(format!("Config file : {}", Config::config_file().display()));
    }
    info(format!("Database    : {}", db_path.display()));

    let store = open_store(&db_path)?;

    store.audit(
        "init",
        "Database initialized",
        &format!("Database initialized at {}", db_path.display()),
    );
    print_notices(&store);

    success(format!("Database initialized at {}", db_path.display()));
    Ok(())
}
