use crate::db::queries::{LogEntry, load_log};
use crate::db::store::ChoreStore;
use crate::errors::AppResult;
use crate::ui::messages::info;
use ansi_term::Colour;
use regex::Regex;
use std::sync::OnceLock;

const MAX_OP_WIDTH: usize = 48;

fn strip_ansi(s: &str) -> String {
    static ANSI: OnceLock<Regex> = OnceLock::new();
    let re = ANSI.get_or_init(|| Regex::new(r"\x1B\[[0-9;]*[mK]").expect("static regex"));
    re.replace_all(s, "").into_owned()
}

/// ANSI colour per operation
fn color_for_operation(op: &str) -> Colour {
    match op {
        "add" => Colour::Green,
        "del" => Colour::Red,
        "export" => Colour::Cyan,
        "migration_applied" => Colour::Purple,
        "backup" => Colour::Blue,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

fn format_entry(entry: &LogEntry, id_w: usize, date_w: usize, op_w: usize) -> String {
    let date = chrono::DateTime::parse_from_rfc3339(&entry.date)
        .map(|dt| dt.format("%F %T").to_string())
        .unwrap_or_else(|_| entry.date.clone());

    let mut op_target = color_for_operation(&entry.operation)
        .paint(entry.operation.as_str())
        .to_string();
    if !entry.target.is_empty() {
        op_target.push_str(&format!(" ({})", entry.target));
    }

    let padding = " ".repeat(op_w.saturating_sub(strip_ansi(&op_target).chars().count()));

    format!(
        "{:>id_w$}: {:<date_w$} | {}{} => {}",
        entry.id,
        date,
        op_target,
        padding,
        entry.message,
        id_w = id_w,
        date_w = date_w
    )
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(store: &ChoreStore) -> AppResult<()> {
        let entries = load_log(store.pool())?;

        if entries.is_empty() {
            info("The internal log is empty.");
            return Ok(());
        }

        let id_w = entries
            .iter()
            .map(|e| e.id.to_string().len())
            .max()
            .unwrap_or(1);
        let date_w = 19;
        let op_w = entries
            .iter()
            .map(|e| e.operation.chars().count() + e.target.chars().count() + 3)
            .max()
            .unwrap_or(10)
            .min(MAX_OP_WIDTH);

        println!("📜 Internal log:\n");
        for entry in &entries {
            println!("{}", format_entry(entry, id_w, date_w, op_w));
        }

        Ok(())
    }
}
