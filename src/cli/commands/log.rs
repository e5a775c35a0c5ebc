use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::log::LogLogic;
use crate::errors::AppResult;
use crate::ui::messages::info;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Log { print: true }) {
        let store = open_store(&cfg.database)?;
        LogLogic::print_log(&store)?;
    } else {
        info("Nothing to do: use `kajilog log --print`.");
    }

    Ok(())
}
