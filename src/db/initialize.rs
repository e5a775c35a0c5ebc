use crate::db::migrate::run_pending_migrations;
use crate::errors::AppResult;
use rusqlite::Connection;

/// Initialize the database.
/// Schema creation and upgrades are owned by the migration engine.
/// Returns one message per migration that was applied.
pub fn init_db(conn: &Connection) -> AppResult<Vec<String>> {
    run_pending_migrations(conn)
}
