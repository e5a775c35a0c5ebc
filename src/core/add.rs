use crate::config::Config;
use crate::db::store::ChoreStore;
use crate::errors::{AppError, AppResult};
use crate::models::{ChoreRecord, NewChore, Person, Task};
use crate::utils::date;

/// Form input for a new chore, as typed by the user.
#[derive(Debug, Default, Clone)]
pub struct AddRequest<'a> {
    pub task: &'a str,
    pub person: Option<&'a str>,
    pub date: Option<&'a str>,
    pub duration: Option<&'a str>,
}

/// High-level business logic for the `add` command.
pub struct AddLogic;

impl AddLogic {
    /// Validate the form and turn it into a `NewChore`.
    /// Only presence and membership checks are done here.
    pub fn build(req: &AddRequest<'_>, cfg: &Config) -> AppResult<NewChore> {
        //
        // 1. Task (mandatory)
        //
        if req.task.trim().is_empty() {
            return Err(AppError::MissingSelection("task"));
        }
        let task =
            Task::from_input(req.task).ok_or_else(|| AppError::InvalidTask(req.task.to_string()))?;

        //
        // 2. Person (flag, then configured default)
        //
        let person_raw = req
            .person
            .or(cfg.default_person.as_deref())
            .filter(|p| !p.trim().is_empty())
            .ok_or(AppError::MissingSelection("person"))?;
        let person = Person::from_input(person_raw, &cfg.members)
            .ok_or_else(|| AppError::InvalidPerson(person_raw.to_string()))?;

        //
        // 3. Date (defaults to today)
        //
        let date = match req.date {
            Some(s) => date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))?,
            None => date::today(),
        };

        //
        // 4. Duration
        //
        let duration = req
            .duration
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .map(str::to_string);
        if duration.is_none() && cfg.require_duration {
            return Err(AppError::MissingSelection("duration"));
        }

        Ok(NewChore::new(date, task, person, duration))
    }

    /// Store the chore and write an audit line.
    pub fn apply(store: &ChoreStore, chore: NewChore) -> AppResult<ChoreRecord> {
        let id = store.create(&chore)?;

        store.audit(
            "add",
            &format!("#{id}"),
            &format!(
                "{} {} {} {}",
                chore.date,
                chore.task.code(),
                chore.person.code(),
                chore.duration.as_deref().unwrap_or("-")
            ),
        );

        Ok(chore.into_record(id))
    }
}
