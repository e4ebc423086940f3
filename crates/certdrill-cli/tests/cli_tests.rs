//! CLI integration tests using assert_cmd.

use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn certdrill() -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("certdrill").unwrap();
    cmd.env_remove("CERTDRILL_DATA_DIR").env_remove("RUST_LOG");
    cmd
}

/// A data dir with one topic of `count` questions whose first answer is
/// always the only correct one.
fn first_answer_topic(count: usize) -> TempDir {
    let dir = TempDir::new().unwrap();
    let topic = dir.path().join("Drills");
    std::fs::create_dir(&topic).unwrap();

    let mut yaml = String::from("questions:\n");
    for i in 0..count {
        yaml.push_str(&format!(
            "  - uuid: drill-{i}\n    question: Drill question {i}?\n    answers:\n      - {{ value: right {i}, correct: true }}\n      - {{ value: wrong {i}, correct: false }}\n"
        ));
    }
    std::fs::write(topic.join("drills.yaml"), yaml).unwrap();
    dir
}

fn run_with(data: &Path, stdin: &str) -> assert_cmd::assert::Assert {
    certdrill()
        .arg("--data-dir")
        .arg(data)
        .arg("--seed")
        .arg("7")
        .write_stdin(stdin.to_string())
        .assert()
}

#[test]
fn all_correct_answers_score_full_marks() {
    let data = first_answer_topic(8);
    run_with(data.path(), "1\n5\n1\n1\n1\n1\n1\n")
        .success()
        .stdout(predicate::str::contains("-- CERTIFICATE PRACTICE --"))
        .stdout(predicate::str::contains("1. drills"))
        .stdout(predicate::str::contains("Your answer: right"))
        .stdout(predicate::str::contains("Correct: 5 - Wrong: 0"));
}

#[test]
fn all_wrong_answers_score_zero() {
    let data = first_answer_topic(8);
    run_with(data.path(), "1\n5\n2\n2\n2\n2\n2\n")
        .success()
        .stdout(predicate::str::contains("Correct: 0 - Wrong: 5"));
}

#[test]
fn bad_answer_input_skips_the_question() {
    let data = first_answer_topic(3);
    run_with(data.path(), "1\n2\nx\n1\n")
        .success()
        .stdout(predicate::str::contains("Invalid input. Skipping..."))
        .stdout(predicate::str::contains("Correct: 1 - Wrong: 1"));
}

#[test]
fn non_numeric_topic_exits_before_count_prompt() {
    let data = first_answer_topic(3);
    run_with(data.path(), "abc\n")
        .code(2)
        .stdout(predicate::str::contains("Invalid input. Exiting..."))
        .stdout(predicate::str::contains("Amount of questions").not());
}

#[test]
fn out_of_range_topic_exits() {
    let data = first_answer_topic(3);
    run_with(data.path(), "4\n2\n")
        .code(2)
        .stdout(predicate::str::contains("Invalid input. Exiting..."));
}

#[test]
fn non_numeric_count_exits() {
    let data = first_answer_topic(3);
    run_with(data.path(), "1\nmany\n")
        .code(2)
        .stdout(predicate::str::contains("Amount of questions"))
        .stdout(predicate::str::contains("Invalid input. Exiting..."));
}

#[test]
fn too_many_questions_is_reported() {
    let data = first_answer_topic(3);
    run_with(data.path(), "1\n4\n")
        .code(1)
        .stderr(predicate::str::contains("ran out of questions"));
}

#[test]
fn empty_question_file_is_skipped_with_warning() {
    let data = first_answer_topic(6);
    std::fs::write(data.path().join("Drills/empty.yaml"), "questions: []\n").unwrap();

    for seed in ["0", "1", "2", "3"] {
        certdrill()
            .arg("--data-dir")
            .arg(data.path())
            .arg("--seed")
            .arg(seed)
            .write_stdin("1\n2\n1\n1\n")
            .assert()
            .success()
            .stdout(predicate::str::contains("Correct: 2 - Wrong: 0"))
            .stderr(predicate::str::contains("skipping"));
    }
}

#[test]
fn same_seed_same_questions() {
    let data = first_answer_topic(10);
    let first = run_with(data.path(), "1\n4\n1\n1\n1\n1\n")
        .success()
        .get_output()
        .stdout
        .clone();
    let second = run_with(data.path(), "1\n4\n1\n1\n1\n1\n")
        .success()
        .get_output()
        .stdout
        .clone();
    assert_eq!(first, second);
}

#[test]
fn bundled_symfony_topic_runs() {
    certdrill()
        .arg("--data-dir")
        .arg("../../data")
        .write_stdin("1\n5\n1\n1\n1\n1\n1\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("1. symfony"))
        .stdout(predicate::str::contains("Question #5"))
        .stdout(predicate::str::contains("Correct Answer"));
}

#[test]
fn missing_data_dir_fails() {
    certdrill()
        .arg("--data-dir")
        .arg("no/such/data")
        .write_stdin("1\n1\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn validate_bundled_data() {
    certdrill()
        .arg("validate")
        .arg("--data-dir")
        .arg("../../data")
        .assert()
        .success()
        .stdout(predicate::str::contains("Topic: symfony (5 files, 12 questions)"))
        .stdout(predicate::str::contains("All topics valid."));
}

#[test]
fn validate_reports_warnings() {
    let data = TempDir::new().unwrap();
    let topic = data.path().join("broken");
    std::fs::create_dir(&topic).unwrap();
    std::fs::write(
        topic.join("bad.yaml"),
        "questions:\n  - uuid: lonely\n    question: No answers here?\n",
    )
    .unwrap();

    certdrill()
        .arg("validate")
        .arg("--data-dir")
        .arg(data.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("[bad.yaml] [lonely] WARNING: question has no answers"))
        .stdout(predicate::str::contains("1 warning(s) found."));
}

#[test]
fn init_creates_files() {
    let dir = TempDir::new().unwrap();

    certdrill()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created certdrill.toml"))
        .stdout(predicate::str::contains("Created data/sample/questions.yaml"));

    assert!(dir.path().join("certdrill.toml").exists());
    assert!(dir.path().join("data/sample/questions.yaml").exists());

    certdrill()
        .current_dir(dir.path())
        .arg("validate")
        .assert()
        .success()
        .stdout(predicate::str::contains("Topic: sample (1 files, 2 questions)"));
}

#[test]
fn init_skips_existing() {
    let dir = TempDir::new().unwrap();

    certdrill()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success();

    certdrill()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn help_output() {
    certdrill()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Interactive certification quiz trainer"));
}

#[test]
fn version_output() {
    certdrill()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("certdrill"));
}
