use crate::cli::commands::{open_store, print_notices};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::ExportLogic;
use crate::errors::AppResult;
use crate::export::notify_export_success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        force,
    } = cmd
    {
        let store = open_store(&cfg.database)?;
        let report = ExportLogic::export(&store, *format, file.as_deref(), *force)?;
        print_notices(&store);
        notify_export_success(format.label(), &report.path, report.rows);
    }
    Ok(())
}
