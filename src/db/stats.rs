use crate::config::Members;
use crate::db::migrate::schema_version;
use crate::db::store::ChoreStore;
use crate::errors::AppResult;
use crate::models::{ListOrder, Person, Task};
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use std::fs;

pub fn print_db_info(store: &ChoreStore, db_path: &str, members: &Members) -> AppResult<()> {
    println!();

    //
    // 1) FILE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.1} KB", CYAN, RESET, file_kb);
    println!(
        "{}• Schema version:{} {}",
        CYAN,
        RESET,
        schema_version(store.conn())?
    );

    //
    // 2) TOTAL RECORDS
    //
    let records = store.list(ListOrder::Asc)?;
    println!(
        "{}• Total records:{} {}{}{}",
        CYAN,
        RESET,
        GREEN,
        records.len(),
        RESET
    );

    //
    // 3) DATE RANGE
    //
    let first = records.iter().map(|r| r.date).min();
    let last = records.iter().map(|r| r.date).max();
    let fmt = |d: Option<chrono::NaiveDate>| {
        d.map(|d| d.to_string())
            .unwrap_or_else(|| format!("{GREY}--{RESET}"))
    };

    println!("{}• Date range:{}", CYAN, RESET);
    println!("    from: {}", fmt(first));
    println!("    to:   {}", fmt(last));

    //
    // 4) PER PERSON / PER TASK
    //
    println!("{}• By person:{}", CYAN, RESET);
    for p in Person::ALL {
        let n = records.iter().filter(|r| r.person == p).count();
        println!("    {}: {}", p.name(members), n);
    }

    println!("{}• By task:{}", CYAN, RESET);
    for t in Task::ALL {
        let n = records.iter().filter(|r| r.task == t).count();
        if n > 0 {
            println!("    {}: {}", t.display(), n);
        }
    }
    let unrecognised = records.iter().filter(|r| !r.task.is_known()).count();
    if unrecognised > 0 {
        println!("    {GREY}(unrecognised){RESET}: {}", unrecognised);
    }

    println!();
    Ok(())
}
