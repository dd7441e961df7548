use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn advisor() -> Command {
    Command::cargo_bin("course-advisor").unwrap()
}

#[test]
fn courses_finds_dance_course() {
    advisor()
        .args(["courses", "dance courses"])
        .assert()
        .success()
        .stdout(predicate::str::contains("DANCE 101"))
        .stdout(predicate::str::contains("Introduction to Dance"));
}

#[test]
fn courses_reports_no_match() {
    advisor()
        .args(["courses", "quantum basket weaving"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No matching courses"));
}

#[test]
fn courses_json_output_is_parseable() {
    let output = advisor()
        .args(["courses", "intro computer science class", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let top = &parsed.as_array().unwrap()[0];
    assert_eq!(top["id"], "cs101");
}

#[test]
fn ask_answers_course_queries_from_catalog() {
    advisor()
        .args(["ask", "tell me about the dance course"])
        .assert()
        .success()
        .stdout(predicate::str::contains("**DANCE 101: Introduction to Dance**"))
        .stdout(predicate::str::contains("Department: Dance"));
}

#[test]
fn ask_reports_unmatched_course_query() {
    advisor()
        .args(["ask", "which class should I take for philosophy"])
        .assert()
        .success()
        .stdout(predicate::str::contains("I couldn't find any specific courses"));
}

#[test]
fn status_on_missing_store() {
    let dir = TempDir::new().unwrap();
    advisor()
        .args(["status", "--store-dir"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No vector store found"));
}

#[test]
fn clear_on_missing_store_succeeds() {
    let dir = TempDir::new().unwrap();
    advisor()
        .args(["clear", "--store-dir"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("cleared"));
}

#[test]
fn search_without_store_fails_with_hint() {
    let dir = TempDir::new().unwrap();
    advisor()
        .args(["search", "anything", "--store-dir"])
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("no vector store found"));
}
