use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::migrate::{SCHEMA_VERSION, run_pending_migrations, schema_version};
use crate::db::stats;
use crate::errors::AppResult;
use crate::ui::messages::{error, info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Db {
        migrate,
        check,
        vacuum,
        info: show_info,
    } = cmd
    {
        // Opening the store already runs pending migrations.
        let store = open_store(&cfg.database)?;

        //
        // 1) MIGRATE
        //
        if *migrate {
            info("Running migrations…");
            for applied in run_pending_migrations(store.conn())? {
                success(applied);
            }
            success(format!(
                "Schema is at version {} (current: {}).",
                schema_version(store.conn())?,
                SCHEMA_VERSION
            ));
        }

        //
        // 2) INFO
        //
        if *show_info {
            stats::print_db_info(&store, &cfg.database, &cfg.members)?;
        }

        //
        // 3) CHECK
        //
        if *check {
            info("Running integrity check…");

            let integrity: String =
                store
                    .conn()
                    .query_row("PRAGMA integrity_check;", [], |row| row.get(0))?;

            if integrity == "ok" {
                success("Integrity check passed.");
            } else {
                error(format!("Integrity check failed: {}", integrity));
            }
        }

        //
        // 4) VACUUM
        //
        if *vacuum {
            info("Running VACUUM…");
            store.conn().execute_batch("VACUUM;")?;
            success("Vacuum completed.");
        }
    }

    Ok(())
}
