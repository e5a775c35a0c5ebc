use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::{ChoreId, ChoreRecord, ListOrder, NewChore, Person, Task};
use chrono::NaiveDate;
use rusqlite::types::Type;
use rusqlite::{OptionalExtension, Result, Row, params};

const SELECT_CHORES: &str = "SELECT id, date, task, person, time FROM kaji";

fn conversion_error(idx: usize, err: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(err))
}

pub fn map_row(row: &Row) -> Result<ChoreRecord> {
    let date_str: String = row.get::<_, Option<String>>("date")?.unwrap_or_default();
    let date = NaiveDate::parse_from_str(date_str.trim(), "%Y-%m-%d")
        .map_err(|_| conversion_error(1, AppError::InvalidDate(date_str.clone())))?;

    // Legacy tables allow NULL and free text here; unknown values are kept as-is.
    let task_str: Option<String> = row.get("task")?;
    let task = Task::from_db_lossless(task_str.as_deref().unwrap_or_default());

    let person_str: Option<String> = row.get("person")?;
    let person = Person::from_db_lossless(person_str.as_deref().unwrap_or_default());

    Ok(ChoreRecord {
        id: row.get("id")?,
        date,
        task,
        person,
        duration: row.get("time")?,
    })
}

pub fn insert_chore(pool: &DbPool, chore: &NewChore) -> AppResult<ChoreId> {
    let mut stmt = pool.conn.prepare_cached(
        "INSERT INTO kaji (date, task, person, time)
         VALUES (?1, ?2, ?3, ?4)",
    )?;

    stmt.execute(params![
        chore.date.format("%Y-%m-%d").to_string(),
        chore.task.to_db_str(),
        chore.person.to_db_str(),
        chore.duration,
    ])?;

    Ok(pool.conn.last_insert_rowid())
}

pub fn load_chores(pool: &DbPool, order: ListOrder) -> AppResult<Vec<ChoreRecord>> {
    let sql = format!("{SELECT_CHORES} ORDER BY id {}", order.sql());
    let mut stmt = pool.conn.prepare(&sql)?;

    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn load_chore_by_id(pool: &DbPool, id: ChoreId) -> AppResult<Option<ChoreRecord>> {
    let mut stmt = pool
        .conn
        .prepare_cached(&format!("{SELECT_CHORES} WHERE id = ?1"))?;
    Ok(stmt.query_row([id], map_row).optional()?)
}

pub fn chore_exists(pool: &DbPool, id: ChoreId) -> AppResult<bool> {
    let found: Option<i64> = pool
        .conn
        .query_row("SELECT 1 FROM kaji WHERE id = ?1", [id], |row| row.get(0))
        .optional()?;
    Ok(found.is_some())
}

/// Delete a chore by id. Returns the number of removed rows (0 or 1).
pub fn delete_chore(pool: &DbPool, id: ChoreId) -> AppResult<usize> {
    Ok(pool.conn.execute("DELETE FROM kaji WHERE id = ?1", [id])?)
}

pub fn count_chores(pool: &DbPool) -> AppResult<i64> {
    Ok(pool
        .conn
        .query_row("SELECT COUNT(*) FROM kaji", [], |row| row.get(0))?)
}

/// One row of the internal log table.
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub id: i64,
    pub date: String,
    pub operation: String,
    pub target: String,
    pub message: String,
}

pub fn load_log(pool: &DbPool) -> AppResult<Vec<LogEntry>> {
    let mut stmt = pool
        .conn
        .prepare_cached("SELECT id, date, operation, target, message FROM log ORDER BY id ASC")?;

    let rows = stmt.query_map([], |row| {
        Ok(LogEntry {
            id: row.get(0)?,
            date: row.get(1)?,
            operation: row.get(2)?,
            target: row.get::<_, Option<String>>(3)?.unwrap_or_default(),
            message: row.get(4)?,
        })
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
