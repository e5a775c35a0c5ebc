use crate::cli::commands::{open_store, print_notices};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::{AddLogic, AddRequest, ChoreCommand, Outcome};
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Record a chore.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        task,
        person,
        date,
        duration,
    } = cmd
    {
        //
        // 1. Validate the form (nothing is opened if a selection is missing)
        //
        let req = AddRequest {
            task: task.as_str(),
            person: person.as_deref(),
            date: date.as_deref(),
            duration: duration.as_deref(),
        };
        let chore = AddLogic::build(&req, cfg)?;

        //
        // 2. Store
        //
        let store = open_store(&cfg.database)?;

        if let Outcome::Created(rec) = ChoreCommand::Create(chore).execute(&store)? {
            success(format!(
                "Recorded #{}: {} {} by {}{}",
                rec.id,
                rec.date,
                rec.task.display(),
                rec.person.name(&cfg.members),
                rec.duration
                    .as_deref()
                    .map(|d| format!(" ({d})"))
                    .unwrap_or_default()
            ));
        }
        print_notices(&store);
    }

    Ok(())
}
