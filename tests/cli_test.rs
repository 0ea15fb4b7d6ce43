//! Integration tests for the gradetally CLI

use std::path::PathBuf;

use assert_cmd::cargo;
use predicates::prelude::*;
use tempfile::TempDir;

fn gradetally() -> assert_cmd::Command {
    assert_cmd::Command::new(cargo::cargo_bin!("gradetally"))
}

fn grade_file(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("grades.txt");
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_version() {
    gradetally()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("gradetally"))
        .stdout(predicate::str::contains(gradetally::VERSION));
}

#[test]
fn test_help() {
    gradetally()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Values of at least 1 are added"));
}

#[test]
fn test_totals_file() {
    let temp = TempDir::new().unwrap();
    let path = grade_file(&temp, "3\n15\n22\n-10\n");

    gradetally().arg(&path).assert().success().stdout("37\n");
}

#[test]
fn test_total_equal_to_baseline_prints_empty() {
    let temp = TempDir::new().unwrap();
    let path = grade_file(&temp, "5\n-999\n");

    gradetally().arg(&path).assert().success().stdout("Empty\n");
}

#[test]
fn test_empty_file_prints_empty() {
    let temp = TempDir::new().unwrap();
    let path = grade_file(&temp, "");

    gradetally().arg(&path).assert().success().stdout("Empty\n");
}

#[test]
fn test_sentinel_ends_input() {
    let temp = TempDir::new().unwrap();
    let path = grade_file(&temp, "1\n2\n-999\n50\n50\n");

    gradetally().arg(&path).assert().success().stdout("2\n");
}

#[test]
fn test_prompts_for_filename_on_stdin() {
    let temp = TempDir::new().unwrap();
    let path = grade_file(&temp, "2\n2\n3\n");

    gradetally()
        .write_stdin(format!("{}\n", path.display()))
        .assert()
        .success()
        .stdout("5\n");
}

#[test]
fn test_no_filename_fails() {
    gradetally()
        .write_stdin("\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no filename given"));
}

#[test]
fn test_json_output() {
    let temp = TempDir::new().unwrap();
    let path = grade_file(&temp, "3\n15\n22\n-10\n");

    gradetally()
        .arg(&path)
        .arg("--json")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"result\": 37"))
        .stdout(predicate::str::contains("\"lines\": 4"))
        .stdout(predicate::str::contains("\"total\": 40"))
        .stdout(predicate::str::contains("\"baseline\": 3"));
}

#[test]
fn test_json_empty_marker() {
    let temp = TempDir::new().unwrap();
    let path = grade_file(&temp, "5\n-999\n");

    gradetally()
        .arg(&path)
        .arg("--json")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"result\": \"Empty\""))
        .stdout(predicate::str::contains("\"total\": 5"))
        .stdout(predicate::str::contains("\"baseline\": 5"));
}

#[test]
fn test_json_empty_file_has_no_baseline() {
    let temp = TempDir::new().unwrap();
    let path = grade_file(&temp, "");

    gradetally()
        .arg(&path)
        .arg("--json")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"total\": null"))
        .stdout(predicate::str::contains("\"baseline\": null"))
        .stdout(predicate::str::contains("\"result\": \"Empty\""));
}

#[test]
fn test_missing_file_fails() {
    let temp = TempDir::new().unwrap();

    gradetally()
        .arg(temp.path().join("nope.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}

#[test]
fn test_bad_line_fails_with_line_number() {
    let temp = TempDir::new().unwrap();
    let path = grade_file(&temp, "2\ntwo\n3\n");

    gradetally()
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("line 2: not an integer"));
}

#[test]
fn test_garbage_after_sentinel_is_ignored() {
    let temp = TempDir::new().unwrap();
    let path = grade_file(&temp, "7\n3\n-999\nnot a number\n");

    gradetally().arg(&path).assert().success().stdout("3\n");
}
