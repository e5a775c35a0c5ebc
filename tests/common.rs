#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

/// `kajilog` binary pointed at `db_path`, with the config file redirected
/// so the user's real configuration is never read.
pub fn kj(db_path: &str) -> Command {
    kj_with_config(db_path, &missing_config())
}

pub fn kj_with_config(db_path: &str, config_path: &str) -> Command {
    let mut cmd = cargo_bin_cmd!("kajilog");
    cmd.env(kajilog::config::CONFIG_ENV, config_path)
        .args(["--db", db_path]);
    cmd
}

/// A config path that is never created: defaults apply.
fn missing_config() -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push("kajilog_tests_no_such_config.conf");
    path.to_string_lossy().to_string()
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_kajilog.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Temporary output file path, removed if it exists
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_kajilog_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Write a YAML config file for a test and return its path
pub fn write_config(name: &str, yaml: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_kajilog.conf", name));
    fs::write(&path, yaml).expect("write test config");
    path.to_string_lossy().to_string()
}

/// Initialize the DB and add two chores on different days
pub fn init_db_with_data(db_path: &str) {
    kj(db_path).args(["--test", "init"]).assert().success();

    kj(db_path)
        .args(["add", "cooking", "-p", "A", "-d", "2026-02-07", "-t", "15分"])
        .assert()
        .success();

    kj(db_path)
        .args(["add", "laundry", "-p", "B", "-d", "2026-02-08", "-t", "30"])
        .assert()
        .success();
}
