use crate::db::store::ChoreStore;
use crate::errors::AppResult;
use crate::models::ChoreId;

pub struct DeleteLogic;

impl DeleteLogic {
    /// Delete one record. A missing id is not an error: returns `false`.
    pub fn apply(store: &ChoreStore, id: ChoreId) -> AppResult<bool> {
        let removed = store.delete(id)?;

        if removed {
            store.audit("del", &format!("#{id}"), "Record deleted");
        }

        Ok(removed)
    }
}
