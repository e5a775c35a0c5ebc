use kajilog::cli::commands::shell::run_session;
use kajilog::config::Config;
use kajilog::db::ChoreStore;
use kajilog::db::migrate::{SCHEMA_VERSION, kaji_has_column, schema_version};
use kajilog::export::ExportFormat;
use kajilog::export::csv::read_csv;
use kajilog::models::{ListOrder, Person, Task};
use rusqlite::Connection;
use std::io::Cursor;

/// Write a database the way the first releases did: no `time` column,
/// emoji labels and member names stored verbatim.
fn write_legacy_db(path: &std::path::Path) {
    let conn = Connection::open(path).unwrap();
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS kaji (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            date TEXT,
            task TEXT,
            person TEXT
        );
        INSERT INTO kaji (date, task, person) VALUES ('2026-02-07', '🍳料理', 'ぴちゃん');
        INSERT INTO kaji (date, task, person) VALUES ('2026-02-08', '💧水回り', 'みちゃん');
        "#,
    )
    .unwrap();
}

/// Rows older versions could leave behind: a spaced label, free text and a
/// missing person.
fn add_irregular_legacy_rows(path: &std::path::Path) {
    let conn = Connection::open(path).unwrap();
    conn.execute_batch(
        r#"
        INSERT INTO kaji (date, task, person) VALUES ('2026-02-09', '🍳 料理', 'ぴちゃん');
        INSERT INTO kaji (date, task, person) VALUES ('2026-02-10', '庭仕事', 'みちゃん');
        INSERT INTO kaji (date, task, person) VALUES ('2026-02-11', '洗濯', NULL);
        "#,
    )
    .unwrap();
}

#[test]
fn legacy_schema_gets_time_column() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("legacy.sqlite");
    write_legacy_db(&path);

    let store = ChoreStore::open(&path).unwrap();

    assert!(kaji_has_column(store.conn(), "time").unwrap());
    assert_eq!(schema_version(store.conn()).unwrap(), SCHEMA_VERSION);

    let all = store.list(ListOrder::Asc).unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].task, Task::Cooking);
    assert_eq!(all[0].person, Person::A);
    assert_eq!(all[0].duration, None);
    assert_eq!(all[1].task, Task::WaterAreaCleaning);
    assert_eq!(all[1].person, Person::B);
}

#[test]
fn legacy_ids_continue_after_migration() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("legacy_ids.sqlite");
    write_legacy_db(&path);

    let store = ChoreStore::open(&path).unwrap();
    let id = store
        .create(&kajilog::models::NewChore::new(
            chrono::NaiveDate::from_ymd_opt(2026, 2, 9).unwrap(),
            Task::Shopping,
            Person::A,
            Some("40分".into()),
        ))
        .unwrap();
    assert_eq!(id, 3);
}

#[test]
fn migration_runs_once_and_is_logged() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("legacy_once.sqlite");
    write_legacy_db(&path);

    drop(ChoreStore::open(&path).unwrap());
    let store = ChoreStore::open(&path).unwrap();

    let applied: i64 = store
        .conn()
        .query_row(
            "SELECT COUNT(*) FROM log WHERE operation = 'migration_applied'",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(applied, 1);
}

#[test]
fn fresh_database_is_at_current_version() {
    let store = ChoreStore::in_memory().unwrap();
    assert_eq!(schema_version(store.conn()).unwrap(), SCHEMA_VERSION);
    assert!(kaji_has_column(store.conn(), "time").unwrap());
}

#[test]
fn irregular_legacy_rows_are_listed_exported_and_deletable() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("legacy_irregular.sqlite");
    write_legacy_db(&path);
    add_irregular_legacy_rows(&path);

    let store = ChoreStore::open(&path).unwrap();

    let all = store.list(ListOrder::Asc).unwrap();
    assert_eq!(all.len(), 5);
    assert_eq!(all[2].task, Task::Cooking);
    assert_eq!(all[3].task, Task::Other("庭仕事".into()));
    assert_eq!(all[3].person, Person::B);
    assert_eq!(all[4].task, Task::Laundry);
    assert_eq!(all[4].person, Person::Other(String::new()));

    let rows = read_csv(&store.export(ExportFormat::Csv).unwrap()).unwrap();
    assert_eq!(rows.len(), 5);
    assert_eq!(rows[2].task, "cooking");
    assert_eq!(rows[3].task, "庭仕事");
    assert_eq!(rows[4].person, "");

    assert!(store.delete(4).unwrap());
    assert!(store.delete(5).unwrap());
    assert_eq!(store.count().unwrap(), 3);
}

#[test]
fn migration_notice_goes_to_the_session_output() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("legacy_session.sqlite");
    write_legacy_db(&path);
    add_irregular_legacy_rows(&path);

    let store = ChoreStore::open(&path).unwrap();
    let mut out = Vec::new();
    run_session(
        &store,
        &Config::default(),
        Cursor::new("del 4\nquit\n".as_bytes()),
        &mut out,
    )
    .unwrap();
    let out = String::from_utf8(out).unwrap();

    assert!(out.contains("⚠️ Migration applied: added 'time' column"));
    assert!(out.contains("庭仕事"));
    assert!(out.contains("5 record(s)"));
    assert!(out.contains("✅ Deleted #4"));
    assert!(out.contains("4 record(s)"));
    assert!(store.take_notices().is_empty());
}
