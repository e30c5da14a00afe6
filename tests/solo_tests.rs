//! Integration tests for solo command

use predicates::prelude::*;
use tempfile::TempDir;

mod common;
use common::tagmatch_cmd;

#[test]
fn test_solo_empty_selection() {
    let temp = TempDir::new().unwrap();

    tagmatch_cmd().arg("init").arg(temp.path()).assert().success();

    tagmatch_cmd()
        .current_dir(temp.path())
        .args(["solo", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Person 1"))
        .stdout(predicate::str::contains("Wellness Score: 50"))
        .stdout(predicate::str::contains("Sleep Patterns: 50"));
}

#[test]
fn test_solo_scores_reflect_selection() {
    let temp = TempDir::new().unwrap();

    tagmatch_cmd().arg("init").arg(temp.path()).assert().success();

    tagmatch_cmd()
        .current_dir(temp.path())
        .args(["select", "2", "Sleep Achiever", "Yogi", "Home Chef"])
        .assert()
        .success();

    tagmatch_cmd()
        .current_dir(temp.path())
        .args(["solo", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wellness Score: 71"))
        .stdout(predicate::str::contains("Sleep Patterns: 95"))
        .stdout(predicate::str::contains("Food & Dining: 90"));
}

#[test]
fn test_solo_invalid_person() {
    let temp = TempDir::new().unwrap();

    tagmatch_cmd().arg("init").arg(temp.path()).assert().success();

    tagmatch_cmd()
        .current_dir(temp.path())
        .args(["solo", "both"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid person"));
}
