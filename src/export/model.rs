// src/export/model.rs

use crate::models::ChoreRecord;
use serde::{Deserialize, Serialize};

/// Flat row used by every export format.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ChoreExport {
    pub id: i64,
    pub date: String,
    pub task: String,
    pub person: String,
    /// Duration label; the column keeps its historical name.
    pub time: Option<String>,
}

impl From<&ChoreRecord> for ChoreExport {
    fn from(r: &ChoreRecord) -> Self {
        Self {
            id: r.id,
            date: r.date.format("%Y-%m-%d").to_string(),
            task: r.task.code().to_string(),
            person: r.person.code().to_string(),
            time: r.duration.clone(),
        }
    }
}

/// CSV header, in column order.
pub const HEADERS: [&str; 5] = ["id", "date", "task", "person", "time"];

pub(crate) fn chore_to_row(e: &ChoreExport) -> [String; 5] {
    [
        e.id.to_string(),
        e.date.clone(),
        e.task.clone(),
        e.person.clone(),
        e.time.clone().unwrap_or_default(),
    ]
}
