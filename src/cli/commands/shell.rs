//! Interactive view: shows the chore list and reads one command per line.
//!
//! Every line becomes an explicit `ChoreCommand`; after a mutation the list
//! is re-rendered from the store.

use crate::config::Config;
use crate::core::{AddLogic, AddRequest, ChoreCommand, ExportLogic, Outcome};
use crate::db::store::ChoreStore;
use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::models::{ListOrder, parse_chore_id};
use crate::ui::view::render_list;
use clap::{Parser, Subcommand};
use std::io::{self, BufRead, Write};

const PROMPT: &str = "kaji> ";

#[derive(Parser, Debug)]
#[command(no_binary_name = true, disable_version_flag = true)]
struct ShellLine {
    #[command(subcommand)]
    command: ShellCommand,
}

#[derive(Subcommand, Debug)]
enum ShellCommand {
    /// add TASK [PERSON] [DURATION] [--date YYYY-MM-DD]
    Add {
        task: String,
        person: Option<String>,
        duration: Option<String>,
        #[arg(long, short = 'd')]
        date: Option<String>,
    },
    /// del ID
    #[command(visible_alias = "rm")]
    Del { id: String },
    /// Show the list again
    #[command(visible_alias = "ls")]
    List {
        #[arg(long, value_enum)]
        order: Option<ListOrder>,
    },
    /// Export all records (overwrites the file)
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,
        file: Option<String>,
    },
    /// Leave the view
    #[command(visible_alias = "exit")]
    Quit,
}

/// What the loop should do after a line.
enum Step {
    Continue,
    Refresh,
    Quit,
}

pub fn handle(cfg: &Config) -> AppResult<()> {
    let store = ChoreStore::open(&cfg.database)?;
    let stdin = io::stdin();
    run_session(&store, cfg, stdin.lock(), io::stdout())
}

/// Drive the view from any line source. Returns on `quit` or end of input.
pub fn run_session<R: BufRead, W: Write>(
    store: &ChoreStore,
    cfg: &Config,
    input: R,
    mut out: W,
) -> AppResult<()> {
    let mut order = cfg.list_order;
    write_notices(store, &mut out)?;
    show(store, cfg, order, &mut out)?;
    writeln!(out, "Type `help` for commands, `quit` to leave.")?;

    let mut lines = input.lines();
    loop {
        write!(out, "{PROMPT}")?;
        out.flush()?;

        let Some(line) = lines.next() else {
            writeln!(out)?;
            break;
        };
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let parsed = match ShellLine::try_parse_from(line.split_whitespace()) {
            Ok(p) => p,
            Err(e) => {
                write!(out, "{}", e.render())?;
                continue;
            }
        };

        if let ShellCommand::List { order: Some(o) } = &parsed.command {
            order = *o;
        }

        let step = execute_line(store, cfg, parsed.command, &mut out);
        write_notices(store, &mut out)?;
        match step {
            Ok(Step::Continue) => {}
            Ok(Step::Refresh) => show(store, cfg, order, &mut out)?,
            Ok(Step::Quit) => break,
            // Failures only produce a message; the view stays as it was.
            Err(e) => writeln!(out, "❌ {e}")?,
        }
    }

    Ok(())
}

/// Re-render the list. A store failure becomes a message; only a broken
/// `out` ends the session.
fn show<W: Write>(
    store: &ChoreStore,
    cfg: &Config,
    order: ListOrder,
    out: &mut W,
) -> io::Result<()> {
    match store.list(order) {
        Ok(records) => {
            writeln!(out)?;
            write!(out, "{}", render_list(&records, &cfg.members))
        }
        Err(e) => writeln!(out, "❌ {e}"),
    }
}

fn write_notices<W: Write>(store: &ChoreStore, out: &mut W) -> io::Result<()> {
    for notice in store.take_notices() {
        writeln!(out, "⚠️ {notice}")?;
    }
    Ok(())
}

fn execute_line<W: Write>(
    store: &ChoreStore,
    cfg: &Config,
    command: ShellCommand,
    out: &mut W,
) -> AppResult<Step> {
    let cmd = match command {
        ShellCommand::Add {
            task,
            person,
            duration,
            date,
        } => {
            let req = AddRequest {
                task: &task,
                person: person.as_deref(),
                date: date.as_deref(),
                duration: duration.as_deref(),
            };
            ChoreCommand::Create(AddLogic::build(&req, cfg)?)
        }
        ShellCommand::Del { id } => ChoreCommand::Delete(parse_chore_id(&id)?),
        ShellCommand::List { .. } => return Ok(Step::Refresh),
        ShellCommand::Export { format, file } => {
            let report = ExportLogic::export(store, format, file.as_deref(), true)?;
            writeln!(
                out,
                "✅ Exported {} record(s) to {}",
                report.rows,
                report.path.display()
            )?;
            return Ok(Step::Continue);
        }
        ShellCommand::Quit => return Ok(Step::Quit),
    };

    let outcome = cmd.execute(store)?;
    match &outcome {
        Outcome::Created(rec) => writeln!(out, "✅ Recorded #{}", rec.id)?,
        Outcome::Deleted(id) => writeln!(out, "✅ Deleted #{id}")?,
        Outcome::NotFound(id) => writeln!(out, "⚠️ No record with id #{id}")?,
    }

    Ok(if outcome.mutated() {
        Step::Refresh
    } else {
        Step::Continue
    })
}
