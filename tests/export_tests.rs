mod common;
use common::{init_db_with_data, kj, setup_test_db, temp_out};
use predicates::str::contains;
use std::fs;

#[test]
fn test_export_csv_all_rows() {
    let db_path = setup_test_db("export_csv_all_rows");
    init_db_with_data(&db_path);

    let out = temp_out("export_csv_all_rows", "csv");

    kj(&db_path)
        .args(["export", "--format", "csv", "--file", &out])
        .assert()
        .success()
        .stdout(contains("CSV export completed"))
        .stdout(contains("2 rows"));

    let content = fs::read_to_string(&out).expect("read exported csv");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(
        lines,
        vec![
            "id,date,task,person,time",
            "1,2026-02-07,cooking,A,15分",
            "2,2026-02-08,laundry,B,30",
        ]
    );
}

#[test]
fn test_export_json() {
    let db_path = setup_test_db("export_json");
    init_db_with_data(&db_path);

    let out = temp_out("export_json", "json");

    kj(&db_path)
        .args(["export", "--format", "json", "--file", &out])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    assert!(content.contains("\"task\": \"cooking\""));
    assert!(content.contains("\"time\": \"30\""));
}

#[test]
fn test_export_refuses_overwrite_without_confirmation() {
    let db_path = setup_test_db("export_refuses_overwrite");
    init_db_with_data(&db_path);

    let out = temp_out("export_refuses_overwrite", "csv");
    fs::write(&out, "keep me").unwrap();

    kj(&db_path)
        .args(["export", "--file", &out])
        .write_stdin("n\n")
        .assert()
        .failure()
        .stderr(contains("export cancelled"));
    assert_eq!(fs::read_to_string(&out).unwrap(), "keep me");

    kj(&db_path)
        .args(["export", "--file", &out, "--force"])
        .assert()
        .success();
    assert!(fs::read_to_string(&out).unwrap().starts_with("id,date,task,person,time"));
}
