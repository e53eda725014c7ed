#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rfl() -> Command {
    cargo_bin_cmd!("rfitlogger")
}

/// Create a unique, empty data directory inside the system temp dir
pub fn setup_data_dir(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rfitlogger_data", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create test data dir");
    path.to_string_lossy().to_string()
}

/// Create a temporary output file path and ensure it does not exist yet
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Log a small dataset useful for many tests:
/// two strength sets and one cardio session, all stamped "now".
pub fn seed_workouts(data_dir: &str) {
    add(data_dir, "squat", "10", "80", "strength");
    add(data_dir, "squat", "8", "85", "strength");
    add(data_dir, "run", "1", "0", "cardio");
}

pub fn add(data_dir: &str, exercise: &str, reps: &str, weight: &str, kind: &str) {
    rfl()
        .args([
            "--data", data_dir, "add", exercise, "--reps", reps, "--weight", weight, "--type",
            kind,
        ])
        .assert()
        .success();
}

/// Run `list` and return the ids printed, newest first.
pub fn listed_ids(data_dir: &str) -> Vec<i64> {
    let out = rfl()
        .args(["--data", data_dir, "list"])
        .output()
        .expect("run list");
    let stdout = String::from_utf8_lossy(&out.stdout);
    stdout
        .lines()
        .filter_map(|line| {
            let start = line.find('[')? + 1;
            let end = line.find(']')?;
            line[start..end].parse().ok()
        })
        .collect()
}
