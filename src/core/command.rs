//! Explicit command objects. Every mutating path (CLI subcommands and the
//! interactive view) goes through `ChoreCommand::execute`.

use crate::core::add::AddLogic;
use crate::core::del::DeleteLogic;
use crate::db::store::ChoreStore;
use crate::errors::AppResult;
use crate::models::{ChoreId, ChoreRecord, NewChore};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChoreCommand {
    Create(NewChore),
    Delete(ChoreId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Created(ChoreRecord),
    Deleted(ChoreId),
    /// Delete of an id that is not (or no longer) stored.
    NotFound(ChoreId),
}

impl Outcome {
    /// Whether the view has to be refreshed.
    pub fn mutated(&self) -> bool {
        !matches!(self, Outcome::NotFound(_))
    }
}

impl ChoreCommand {
    pub fn execute(self, store: &ChoreStore) -> AppResult<Outcome> {
        match self {
            ChoreCommand::Create(chore) => AddLogic::apply(store, chore).map(Outcome::Created),
            ChoreCommand::Delete(id) => Ok(if DeleteLogic::apply(store, id)? {
                Outcome::Deleted(id)
            } else {
                Outcome::NotFound(id)
            }),
        }
    }
}
