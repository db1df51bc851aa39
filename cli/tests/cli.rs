use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;
use test_utils::inputs::{read_json, report_entry, write_file, write_report_file};

fn converter_command() -> Command {
    let mut command = Command::cargo_bin("hbbtv-converter").unwrap();
    command.env("NO_COLOR", "1").env_remove("HBBTV_CONVERTER_LOG");
    command
}

#[test]
fn converts_input_dir_argument() {
    let temp_dir = tempdir().unwrap();
    write_report_file(
        &temp_dir,
        "stb-1",
        &[report_entry("TC1", "Successful"), report_entry("TC2", "Failed")],
    );

    let assert = converter_command()
        .arg(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("reports-stb-1.json - CONVERTED - 2 test results"))
        .stdout(predicate::str::contains(
            "Conversion complete. Successfully converted 1 out of 1 file.",
        ))
        .stderr(predicate::str::contains("Found 1 HbbTV report JSON files"));

    println!("{assert}");

    let output = read_json(temp_dir.path().join("converted").join("converted-stb-1.json")).unwrap();
    assert_eq!(output["test_case_results"].as_array().unwrap().len(), 2);
    assert_eq!(output["test_run"]["name"], "Converted HbbTV Run: reports-stb-1");
}

#[test]
fn uses_default_input_dir() {
    let temp_dir = tempdir().unwrap();
    let mock_data = temp_dir.path().join("mock_data");
    fs::create_dir(&mock_data).unwrap();
    write_report_file(&mock_data, "default", &[report_entry("TC1", "Successful")]);

    converter_command()
        .current_dir(&temp_dir)
        .assert()
        .success();

    assert!(mock_data
        .join("converted")
        .join("converted-default.json")
        .is_file());
}

#[test]
fn writes_to_output_dir_override() {
    let input_dir = tempdir().unwrap();
    let output_dir = tempdir().unwrap();
    write_report_file(&input_dir, "override", &[report_entry("TC1", "Failed")]);

    converter_command()
        .arg(input_dir.path())
        .arg("--output-dir")
        .arg(output_dir.path().join("results"))
        .assert()
        .success();

    assert!(output_dir
        .path()
        .join("results")
        .join("converted-override.json")
        .is_file());
    assert!(!input_dir.path().join("converted").exists());
}

#[test]
fn succeeds_with_failing_files() {
    let temp_dir = tempdir().unwrap();
    write_report_file(&temp_dir, "good", &[report_entry("TC1", "Successful")]);
    write_file(&temp_dir, "reports-bad.json", "not json");

    let assert = converter_command()
        .arg(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("reports-bad.json - FAILED - failed to parse reports-bad.json"))
        .stdout(predicate::str::contains(
            "Conversion complete. Successfully converted 1 out of 2 files.",
        ))
        .stderr(predicate::str::contains("[ERROR]"));

    println!("{assert}");
}

#[test]
fn warns_when_no_reports_found() {
    let temp_dir = tempdir().unwrap();

    converter_command()
        .arg(temp_dir.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("No HbbTV report files found"))
        .stdout(predicate::str::contains("converted 0 out of 0 files"));
}

#[test]
fn missing_input_dir_exits_noinput() {
    let temp_dir = tempdir().unwrap();

    converter_command()
        .arg(temp_dir.path().join("absent"))
        .assert()
        .code(exitcode::NOINPUT)
        .stderr(predicate::str::contains("failed to list input directory"));
}

#[test]
fn uncreatable_output_dir_exits_cantcreat() {
    let temp_dir = tempdir().unwrap();
    write_report_file(&temp_dir, "1", &[report_entry("TC1", "Successful")]);
    let blocker = write_file(&temp_dir, "blocker", "");

    converter_command()
        .arg(temp_dir.path())
        .arg("--output-dir")
        .arg(blocker.join("out"))
        .assert()
        .code(exitcode::CANTCREAT)
        .stderr(predicate::str::contains("failed to create output directory"));
}

#[test]
fn quiet_hides_progress_logs() {
    let temp_dir = tempdir().unwrap();
    write_report_file(&temp_dir, "quiet", &[report_entry("TC1", "Successful")]);

    converter_command()
        .arg(temp_dir.path())
        .arg("-q")
        .assert()
        .success()
        .stderr(predicate::str::contains("Processing").not());
}

#[test]
fn log_env_var_enables_debug() {
    let temp_dir = tempdir().unwrap();
    write_report_file(
        &temp_dir,
        "sparse",
        &[report_entry("TC1", "Successful"), serde_json::json!({"title": "no id"})],
    );

    converter_command()
        .env("HBBTV_CONVERTER_LOG", "debug")
        .arg(temp_dir.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("Skipping entry 2: entry has no test_case_id"));
}
