mod common;
use common::{add, listed_ids, rfl, seed_workouts, setup_data_dir, temp_out};
use predicates::prelude::*;
use std::fs;

#[test]
fn test_export_csv_all() {
    let data = setup_data_dir("export_csv_all");
    seed_workouts(&data);

    let out = temp_out("export_csv_all", "csv");

    rfl()
        .args(["--data", &data, "export", "--format", "csv", "--file", &out])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    let mut lines = content.lines();
    assert_eq!(
        lines.next().unwrap(),
        "\"Exercise\",\"Reps\",\"Weight\",\"Type\",\"Date\""
    );
    assert!(content.contains("\"squat\""));
    assert!(content.contains("\"cardio\""));
    assert_eq!(content.lines().count(), 4); // header + 3 records
}

#[test]
fn test_export_json_all() {
    let data = setup_data_dir("export_json_all");
    seed_workouts(&data);

    let out = temp_out("export_json_all", "json");

    rfl()
        .args(["--data", &data, "export", "--format", "json", "--file", &out])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    assert!(content.contains("\"exercise\": \"squat\""));
    assert!(content.contains("\"createdAt\""));
}

#[test]
fn test_export_empty_store_is_a_notice() {
    let data = setup_data_dir("export_empty");
    let out = temp_out("export_empty", "csv");

    rfl()
        .args(["--data", &data, "export", "--file", &out])
        .assert()
        .success()
        .stdout(predicate::str::contains("No workouts to export."));

    assert!(!std::path::Path::new(&out).exists());
}

#[test]
fn test_export_refuses_overwrite_without_force() {
    let data = setup_data_dir("export_no_overwrite");
    seed_workouts(&data);

    let out = temp_out("export_no_overwrite", "csv");
    fs::write(&out, "already here").unwrap();

    // "n" to the overwrite prompt → export cancelled
    rfl()
        .args(["--data", &data, "export", "--file", &out])
        .write_stdin("n\n")
        .assert()
        .failure();
    assert_eq!(fs::read_to_string(&out).unwrap(), "already here");

    rfl()
        .args(["--data", &data, "export", "--file", &out, "--force"])
        .assert()
        .success();
    assert!(fs::read_to_string(&out).unwrap().starts_with("\"Exercise\""));
}

#[test]
fn test_csv_round_trip_via_import() {
    let data = setup_data_dir("round_trip_src");
    add(&data, "clean, jerk", "3", "70.5", "strength");
    add(&data, "run", "1", "0", "cardio");

    let out = temp_out("round_trip", "csv");
    rfl()
        .args(["--data", &data, "export", "--file", &out, "--force"])
        .assert()
        .success();

    let fresh = setup_data_dir("round_trip_dst");
    rfl()
        .args(["--data", &fresh, "import", "--file", &out])
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported 2 workout(s)."));

    rfl()
        .args(["--data", &fresh, "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("clean, jerk"))
        .stdout(predicate::str::contains("@ 70.5kg"))
        .stdout(predicate::str::contains("run"));

    // ids are newly assigned on import
    let old_ids = listed_ids(&data);
    let new_ids = listed_ids(&fresh);
    assert_eq!(new_ids.len(), 2);
    assert!(new_ids.iter().all(|id| !old_ids.contains(id)));
}

#[test]
fn test_import_skips_malformed_rows() {
    let data = setup_data_dir("import_skips");
    let csv = temp_out("import_skips", "csv");
    fs::write(
        &csv,
        "\"Exercise\",\"Reps\",\"Weight\",\"Type\",\"Date\"\n\
         \"squat\",\"10\",\"80\",\"strength\",\"2025-04-07 10:00:00\"\n\
         \"\",\"10\",\"80\",\"strength\",\"2025-04-07 10:00:00\"\n\
         \"bench\",\"10\",\"50\",\"strength\",\"someday\"\n",
    )
    .unwrap();

    rfl()
        .args(["--data", &data, "import", "--file", &csv])
        .assert()
        .success()
        .stdout(predicate::str::contains("Skipped 2 malformed row(s)."))
        .stdout(predicate::str::contains("Imported 1 workout(s)."));
}

#[test]
fn test_import_missing_file_fails() {
    let data = setup_data_dir("import_missing");

    rfl()
        .args(["--data", &data, "import", "--file", "/definitely/not/here.csv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("file not found"));
}

#[test]
fn test_import_prepends_to_existing_history() {
    let data = setup_data_dir("import_prepends");
    add(&data, "existing", "5", "0", "cardio");

    let csv = temp_out("import_prepends", "csv");
    fs::write(
        &csv,
        "\"Exercise\",\"Reps\",\"Weight\",\"Type\",\"Date\"\n\
         \"imported\",\"8\",\"40\",\"strength\",\"2025-04-01 09:00:00\"\n",
    )
    .unwrap();

    rfl()
        .args(["--data", &data, "import", "--file", &csv])
        .assert()
        .success();

    // oldest-first puts the imported 2025 record before today's
    rfl()
        .args(["--data", &data, "list", "--sort", "name"])
        .assert()
        .success()
        .stdout(predicate::str::contains("existing"))
        .stdout(predicate::str::contains("imported"));
}
