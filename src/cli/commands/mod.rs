pub mod add;
pub mod backup;
pub mod config;
pub mod db;
pub mod del;
pub mod export;
pub mod init;
pub mod list;
pub mod log;
pub mod shell;
pub mod tasks;

use crate::db::store::ChoreStore;
use crate::errors::AppResult;
use crate::ui::messages::warning;
use std::path::Path;

/// Open the store for a one-shot command and report applied migrations.
pub(crate) fn open_store<P: AsRef<Path>>(path: P) -> AppResult<ChoreStore> {
    let store = ChoreStore::open(path)?;
    print_notices(&store);
    Ok(store)
}

pub(crate) fn print_notices(store: &ChoreStore) {
    for notice in store.take_notices() {
        warning(notice);
    }
}
