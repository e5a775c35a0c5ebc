use crate::cli::commands::{open_store, print_notices};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::{ChoreCommand, Outcome};
use crate::errors::AppResult;
use crate::models::parse_chore_id;
use crate::ui::messages::{info, success, warning};

use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id, yes } = cmd {
        let id = parse_chore_id(id)?;

        let store = open_store(&cfg.database)?;

        if !store.exists(id)? {
            warning(format!("No record with id #{id}; nothing deleted."));
            return Ok(());
        }

        if !*yes {
            // A row that cannot be decoded can still be deleted by id.
            let what = match store.get(id) {
                Ok(Some(rec)) => format!(
                    " ({} {} by {})",
                    rec.date,
                    rec.task.display(),
                    rec.person.name(&cfg.members)
                ),
                _ => String::new(),
            };
            let prompt = format!("Delete #{id}{what}? This action is irreversible.");
            if !ask_confirmation(&prompt) {
                info("Operation cancelled.");
                return Ok(());
            }
        }

        match ChoreCommand::Delete(id).execute(&store)? {
            Outcome::Deleted(id) => success(format!("Record #{id} has been deleted.")),
            _ => warning(format!("No record with id #{id}; nothing deleted.")),
        }
        print_notices(&store);
    }

    Ok(())
}
