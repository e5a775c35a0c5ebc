use chrono::NaiveDate;
use kajilog::db::ChoreStore;
use kajilog::errors::AppError;
use kajilog::export::ExportFormat;
use kajilog::export::csv::read_csv;
use kajilog::models::{ListOrder, NewChore, Person, Task};

fn day(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid date")
}

fn chore(date: &str, task: Task, person: Person, duration: Option<&str>) -> NewChore {
    NewChore::new(day(date), task, person, duration.map(str::to_string))
}

#[test]
fn create_increases_count_and_is_retrievable() {
    let store = ChoreStore::in_memory().expect("open store");
    assert_eq!(store.count().unwrap(), 0);

    let new = chore("2026-02-07", Task::Cooking, Person::A, Some("15分"));
    let id = store.create(&new).unwrap();

    assert_eq!(id, 1);
    assert_eq!(store.count().unwrap(), 1);

    let rec = store.get(id).unwrap().expect("record stored");
    assert_eq!(rec, new.into_record(id));
}

#[test]
fn delete_removes_exactly_one_record() {
    let store = ChoreStore::in_memory().unwrap();
    let a = store
        .create(&chore("2026-02-07", Task::Cooking, Person::A, Some("15分")))
        .unwrap();
    let b = store
        .create(&chore("2026-02-07", Task::Dishes, Person::B, Some("10分")))
        .unwrap();
    let c = store
        .create(&chore("2026-02-08", Task::Trash, Person::A, None))
        .unwrap();

    assert!(store.delete(b).unwrap());

    let ids: Vec<i64> = store
        .list(ListOrder::Asc)
        .unwrap()
        .iter()
        .map(|r| r.id)
        .collect();
    assert_eq!(ids, vec![a, c]);
}

#[test]
fn delete_missing_id_is_noop() {
    let store = ChoreStore::in_memory().unwrap();
    store
        .create(&chore("2026-02-07", Task::Laundry, Person::B, Some("20分")))
        .unwrap();

    assert!(!store.delete(42).unwrap());
    assert_eq!(store.count().unwrap(), 1);
}

#[test]
fn delete_raw_parses_text_ids() {
    let store = ChoreStore::in_memory().unwrap();
    let id = store
        .create(&chore("2026-02-07", Task::Laundry, Person::B, Some("20分")))
        .unwrap();

    let err = store.delete_raw("abc").unwrap_err();
    assert!(matches!(err, AppError::InvalidId(ref s) if s == "abc"));
    assert_eq!(store.count().unwrap(), 1);

    assert!(store.delete_raw(&format!(" {id} ")).unwrap());
    assert_eq!(store.count().unwrap(), 0);
}

#[test]
fn ids_are_never_reused() {
    let store = ChoreStore::in_memory().unwrap();
    let mut last = 0;
    for _ in 0..3 {
        let id = store
            .create(&chore("2026-02-07", Task::Cleaning, Person::A, Some("5分")))
            .unwrap();
        assert!(id > last);
        last = id;
    }

    assert!(store.delete(last).unwrap());
    let next = store
        .create(&chore("2026-02-07", Task::Cleaning, Person::A, Some("5分")))
        .unwrap();
    assert_eq!(next, last + 1);
}

#[test]
fn list_orders_by_id() {
    let store = ChoreStore::in_memory().unwrap();
    for t in [Task::Cooking, Task::Dishes, Task::Shopping] {
        store
            .create(&chore("2026-02-07", t, Person::A, Some("5分")))
            .unwrap();
    }

    let asc: Vec<i64> = store
        .list(ListOrder::Asc)
        .unwrap()
        .iter()
        .map(|r| r.id)
        .collect();
    let desc: Vec<i64> = store
        .list(ListOrder::Desc)
        .unwrap()
        .iter()
        .map(|r| r.id)
        .collect();

    assert_eq!(asc, vec![1, 2, 3]);
    assert_eq!(desc, vec![3, 2, 1]);
}

#[test]
fn export_round_trips_every_field() {
    let store = ChoreStore::in_memory().unwrap();
    let inputs = [
        chore("2026-02-07", Task::Cooking, Person::A, Some("15分")),
        chore("2026-02-08", Task::WaterAreaCleaning, Person::B, Some("1時間, 半")),
        chore("2026-02-09", Task::BathCleaning, Person::A, None),
    ];
    let ids: Vec<_> = inputs.iter().map(|c| store.create(c).unwrap()).collect();

    let bytes = store.export(ExportFormat::Csv).unwrap();
    let text = String::from_utf8(bytes.clone()).expect("utf-8 export");
    assert_eq!(text.lines().count(), inputs.len() + 1);
    assert_eq!(text.lines().next(), Some("id,date,task,person,time"));

    let rows = read_csv(&bytes).unwrap();
    assert_eq!(rows.len(), inputs.len());
    for ((row, input), id) in rows.iter().zip(&inputs).zip(&ids) {
        assert_eq!(row.id, *id);
        assert_eq!(row.date, input.date.format("%Y-%m-%d").to_string());
        assert_eq!(row.task, input.task.code());
        assert_eq!(row.person, input.person.code());
        assert_eq!(row.time, input.duration);
    }
}

#[test]
fn export_of_empty_store_has_header_only() {
    let store = ChoreStore::in_memory().unwrap();
    let text = String::from_utf8(store.export(ExportFormat::Csv).unwrap()).unwrap();
    assert_eq!(text.trim_end(), "id,date,task,person,time");
}

#[test]
fn json_export_lists_records() {
    let store = ChoreStore::in_memory().unwrap();
    store
        .create(&chore("2026-02-07", Task::Trash, Person::B, Some("3分")))
        .unwrap();

    let value: serde_json::Value =
        serde_json::from_slice(&store.export(ExportFormat::Json).unwrap()).unwrap();
    assert_eq!(value[0]["id"], 1);
    assert_eq!(value[0]["task"], "trash");
    assert_eq!(value[0]["person"], "B");
    assert_eq!(value[0]["time"], "3分");
}

#[test]
fn records_persist_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("kaji.sqlite");

    {
        let store = ChoreStore::open(&path).unwrap();
        store
            .create(&chore("2026-02-07", Task::Dishes, Person::A, Some("10分")))
            .unwrap();
    }

    let store = ChoreStore::open(&path).unwrap();
    let all = store.list(ListOrder::Asc).unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].task, Task::Dishes);
    assert_eq!(all[0].duration.as_deref(), Some("10分"));
}
