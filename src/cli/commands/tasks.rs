use crate::config::Config;
use crate::errors::AppResult;
use crate::models::{Person, Task};
use crate::ui::messages::header;
use crate::utils::table::{Column, Table};

/// Print the task catalogue and the household members.
pub fn handle(cfg: &Config) -> AppResult<()> {
    header("Tasks");
    let mut tasks = Table::new(vec![Column::new("CODE", 4), Column::new("LABEL", 5)]);
    for t in Task::ALL {
        tasks.add_row(vec![t.code().to_string(), t.display()]);
    }
    print!("{}", tasks.render('-'));

    println!();
    header("Members");
    let mut people = Table::new(vec![Column::new("CODE", 4), Column::new("NAME", 4)]);
    for p in Person::ALL {
        people.add_row(vec![p.code().to_string(), p.name(&cfg.members).to_string()]);
    }
    print!("{}", people.render('-'));

    Ok(())
}
