//! Record store: the single `kaji` table behind create / list / delete / export.

use crate::db::initialize::init_db;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::{
    chore_exists, count_chores, delete_chore, insert_chore, load_chore_by_id, load_chores,
};
use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::models::{ChoreId, ChoreRecord, ListOrder, NewChore, parse_chore_id};
use rusqlite::Connection;
use std::cell::RefCell;
use std::fs;
use std::path::Path;

pub struct ChoreStore {
    pool: DbPool,
    /// Non-fatal messages (applied migrations, failed audit writes) waiting
    /// to be shown by whoever owns the output.
    notices: RefCell<Vec<String>>,
}

impl ChoreStore {
    /// Open (or create) the store file and bring its schema up to date.
    pub fn open<P: AsRef<Path>>(path: P) -> AppResult<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        Self::from_pool(DbPool::new(path)?)
    }

    pub fn in_memory() -> AppResult<Self> {
        Self::from_pool(DbPool::in_memory()?)
    }

    fn from_pool(pool: DbPool) -> AppResult<Self> {
        let applied = init_db(&pool.conn)?;
        Ok(Self {
            pool,
            notices: RefCell::new(applied),
        })
    }

    pub fn conn(&self) -> &Connection {
        &self.pool.conn
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    /// Drain the pending notices, oldest first.
    pub fn take_notices(&self) -> Vec<String> {
        self.notices.take()
    }

    /// Write an audit line; a failure is queued as a notice instead of
    /// failing the operation that was already committed.
    pub fn audit(&self, operation: &str, target: &str, message: &str) {
        if let Err(e) = ttlog(self.conn(), operation, target, message) {
            self.notices
                .borrow_mut()
                .push(format!("Failed to write internal log: {}", e));
        }
    }

    /// Insert one record and return its freshly assigned id.
    pub fn create(&self, chore: &NewChore) -> AppResult<ChoreId> {
        insert_chore(&self.pool, chore)
    }

    pub fn get(&self, id: ChoreId) -> AppResult<Option<ChoreRecord>> {
        load_chore_by_id(&self.pool, id)
    }

    /// Snapshot of every stored record.
    pub fn list(&self, order: ListOrder) -> AppResult<Vec<ChoreRecord>> {
        load_chores(&self.pool, order)
    }

    /// Existence check that does not decode the row.
    pub fn exists(&self, id: ChoreId) -> AppResult<bool> {
        chore_exists(&self.pool, id)
    }

    pub fn count(&self) -> AppResult<i64> {
        count_chores(&self.pool)
    }

    /// Remove the record with `id`. Returns `false` when nothing matched.
    pub fn delete(&self, id: ChoreId) -> AppResult<bool> {
        Ok(delete_chore(&self.pool, id)? > 0)
    }

    /// Delete by an identifier received as text.
    /// Unparsable input is an `InvalidId` error and touches nothing.
    pub fn delete_raw(&self, raw: &str) -> AppResult<bool> {
        let id = parse_chore_id(raw)?;
        self.delete(id)
    }

    /// Serialize all records (ascending id, no filtering).
    pub fn export(&self, format: ExportFormat) -> AppResult<Vec<u8>> {
        let records = self.list(ListOrder::Asc)?;
        format.render(&records)
    }
}
