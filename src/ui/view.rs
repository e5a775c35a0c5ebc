//! Renders the chore list. Called again after every mutation so the view
//! always reflects the latest stored state.

use crate::config::Members;
use crate::models::ChoreRecord;
use crate::utils::table::{Column, Table};

pub fn chore_table(records: &[ChoreRecord], members: &Members) -> Table {
    let mut table = Table::new(vec![
        Column::new("ID", 3),
        Column::new("DATE", 10),
        Column::new("TASK", 8),
        Column::new("PERSON", 6),
        Column::new("TIME", 4),
    ]);

    for r in records {
        table.add_row(vec![
            r.id.to_string(),
            r.date.format("%Y-%m-%d").to_string(),
            r.task.display(),
            r.person.name(members).to_string(),
            r.duration.clone().unwrap_or_else(|| "-".to_string()),
        ]);
    }

    table
}

/// Full list view: table or an empty-state line.
pub fn render_list(records: &[ChoreRecord], members: &Members) -> String {
    if records.is_empty() {
        return "No chores recorded yet.\n".to_string();
    }

    let mut out = chore_table(records, members).render('-');
    out.push_str(&format!("{} record(s)\n", records.len()));
    out
}
