use crate::db::log::ttlog;
use crate::errors::{AppError, AppResult};
use rusqlite::{Connection, OptionalExtension};

/// Schema version stored in `PRAGMA user_version` once every migration ran.
///
/// - 0: fresh file, or a database written by the first releases
///   (`kaji` table without the `time` column)
/// - 1: `kaji(id, date, task, person, time)` + `log`
pub const SCHEMA_VERSION: i64 = 1;

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

pub fn schema_version(conn: &Connection) -> AppResult<i64> {
    Ok(conn.query_row("PRAGMA user_version", [], |row| row.get(0))?)
}

fn set_schema_version(conn: &Connection, version: i64) -> AppResult<()> {
    // PRAGMA does not accept bound parameters.
    conn.execute_batch(&format!("PRAGMA user_version = {version};"))?;
    Ok(())
}

/// Check if the `kaji` table exists.
fn kaji_table_exists(conn: &Connection) -> AppResult<bool> {
    let exists: Option<String> = conn
        .query_row(
            "SELECT name FROM sqlite_master WHERE type='table' AND name='kaji'",
            [],
            |row| row.get(0),
        )
        .optional()?;
    Ok(exists.is_some())
}

/// Check if the `kaji` table has the given column.
pub fn kaji_has_column(conn: &Connection, column: &str) -> AppResult<bool> {
    let mut stmt = conn.prepare("PRAGMA table_info('kaji')")?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == column {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Create the `kaji` table with the current schema.
fn create_kaji_table(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS kaji (
            id     INTEGER PRIMARY KEY AUTOINCREMENT,
            date   TEXT NOT NULL,
            task   TEXT NOT NULL,
            person TEXT NOT NULL,
            time   TEXT
        );

        CREATE INDEX IF NOT EXISTS idx_kaji_date ON kaji(date);
        "#,
    )?;
    Ok(())
}

/// Add the `time` (duration) column to a table written by the first releases.
fn migrate_add_time_column(conn: &Connection) -> AppResult<String> {
    conn.execute("ALTER TABLE kaji ADD COLUMN time TEXT", [])
        .map_err(|e| AppError::Migration(format!("failed to add 'time' column: {}", e)))?;

    conn.execute_batch("CREATE INDEX IF NOT EXISTS idx_kaji_date ON kaji(date);")?;

    ttlog(
        conn,
        "migration_applied",
        "kaji.time",
        "Added time (duration) column to kaji",
    )?;

    Ok("Migration applied: added 'time' column to kaji table".to_string())
}

/// Public entry point: run all pending migrations.
///
/// Called by `db::initialize::init_db()`. Nothing is printed here: the
/// returned messages describe each applied migration for the caller.
pub fn run_pending_migrations(conn: &Connection) -> AppResult<Vec<String>> {
    ensure_log_table(conn)?;

    let mut applied = Vec::new();
    let version = schema_version(conn)?;
    if version >= SCHEMA_VERSION {
        return Ok(applied);
    }

    if !kaji_table_exists(conn)? {
        create_kaji_table(conn)?;
    } else if !kaji_has_column(conn, "time")? {
        applied.push(migrate_add_time_column(conn)?);
    }

    set_schema_version(conn, SCHEMA_VERSION)?;
    Ok(applied)
}
