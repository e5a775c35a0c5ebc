use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::{Person, Task};
use crate::ui::view::render_list;
use crate::utils::date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        order,
        today,
        person,
        task,
    } = cmd
    {
        let person_filter = person
            .as_deref()
            .map(|p| {
                Person::from_input(p, &cfg.members).ok_or_else(|| AppError::InvalidPerson(p.into()))
            })
            .transpose()?;
        let task_filter = task
            .as_deref()
            .map(|t| Task::from_input(t).ok_or_else(|| AppError::InvalidTask(t.into())))
            .transpose()?;

        let store = open_store(&cfg.database)?;
        let order = order.unwrap_or(cfg.list_order);

        let today_date = date::today();
        let records: Vec<_> = store
            .list(order)?
            .into_iter()
            .filter(|r| !*today || r.date == today_date)
            .filter(|r| person_filter.as_ref().is_none_or(|p| r.person == *p))
            .filter(|r| task_filter.as_ref().is_none_or(|t| r.task == *t))
            .collect();

        print!("{}", render_list(&records, &cfg.members));
    }
    Ok(())
}
