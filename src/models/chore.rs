use crate::errors::{AppError, AppResult};
use crate::models::person::Person;
use crate::models::task::Task;
use chrono::NaiveDate;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Store-assigned identifier of a chore record.
pub type ChoreId = i64;

/// Parse an identifier that arrived as text (CLI argument, shell line).
pub fn parse_chore_id(raw: &str) -> AppResult<ChoreId> {
    raw.trim()
        .parse::<ChoreId>()
        .map_err(|_| AppError::InvalidId(raw.to_string()))
}

/// One logged chore. Immutable once stored; only deletion is possible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoreRecord {
    pub id: ChoreId,
    pub date: NaiveDate,
    pub task: Task,
    pub person: Person,
    /// Free-form label ("15分", "30"). `None` for rows written before the
    /// column existed.
    pub duration: Option<String>,
}

/// Payload for a new record; the id is assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewChore {
    pub date: NaiveDate,
    pub task: Task,
    pub person: Person,
    pub duration: Option<String>,
}

impl NewChore {
    pub fn new(date: NaiveDate, task: Task, person: Person, duration: Option<String>) -> Self {
        Self {
            date,
            task,
            person,
            duration,
        }
    }

    pub fn into_record(self, id: ChoreId) -> ChoreRecord {
        ChoreRecord {
            id,
            date: self.date,
            task: self.task,
            person: self.person,
            duration: self.duration,
        }
    }
}

/// Presentation order of `list`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ListOrder {
    /// Ascending id (insertion order)
    #[default]
    Asc,
    /// Descending id (newest first)
    Desc,
}

impl ListOrder {
    pub fn sql(&self) -> &'static str {
        match self {
            ListOrder::Asc => "ASC",
            ListOrder::Desc => "DESC",
        }
    }
}
