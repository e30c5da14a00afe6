//! Integration tests for select, remove and show commands

use predicates::prelude::*;
use tempfile::TempDir;

mod common;
use common::tagmatch_cmd;

#[test]
fn test_select_and_show() {
    let temp = TempDir::new().unwrap();

    tagmatch_cmd().arg("init").arg(temp.path()).assert().success();

    tagmatch_cmd()
        .current_dir(temp.path())
        .args(["select", "1", "Early Bird", "Sushi Lover"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Selected 2 tag(s) for person 1"))
        .stdout(predicate::str::contains("sleep: Early Bird"))
        .stdout(predicate::str::contains("food: Sushi Lover"));

    tagmatch_cmd()
        .current_dir(temp.path())
        .args(["show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Person 1:"))
        .stdout(predicate::str::contains("Early Bird"));
}

#[test]
fn test_show_both_by_default() {
    let temp = TempDir::new().unwrap();

    tagmatch_cmd().arg("init").arg(temp.path()).assert().success();

    tagmatch_cmd()
        .current_dir(temp.path())
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("Person 1:"))
        .stdout(predicate::str::contains("Person 2:"))
        .stdout(predicate::str::contains("(no tags selected)"));
}

#[test]
fn test_select_unknown_tag() {
    let temp = TempDir::new().unwrap();

    tagmatch_cmd().arg("init").arg(temp.path()).assert().success();

    tagmatch_cmd()
        .current_dir(temp.path())
        .args(["select", "1", "Couch Surfer"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("Unknown tag: 'Couch Surfer'"))
        .stderr(predicate::str::contains("tagmatch tags"));
}

#[test]
fn test_select_conflicting_tag() {
    let temp = TempDir::new().unwrap();

    tagmatch_cmd().arg("init").arg(temp.path()).assert().success();

    tagmatch_cmd()
        .current_dir(temp.path())
        .args(["select", "1", "Early Bird"])
        .assert()
        .success();

    tagmatch_cmd()
        .current_dir(temp.path())
        .args(["select", "1", "Night Owl"])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("Tag conflict"))
        .stderr(predicate::str::contains("mutually-exclusive"));
}

#[test]
fn test_conflict_rule_is_per_person() {
    let temp = TempDir::new().unwrap();

    tagmatch_cmd().arg("init").arg(temp.path()).assert().success();

    tagmatch_cmd()
        .current_dir(temp.path())
        .args(["select", "1", "Early Bird"])
        .assert()
        .success();

    // Person 2 may pick the conflicting tag
    tagmatch_cmd()
        .current_dir(temp.path())
        .args(["select", "2", "Night Owl"])
        .assert()
        .success();
}

#[test]
fn test_remove_tag() {
    let temp = TempDir::new().unwrap();

    tagmatch_cmd().arg("init").arg(temp.path()).assert().success();

    tagmatch_cmd()
        .current_dir(temp.path())
        .args(["select", "1", "Yogi", "Cyclist"])
        .assert()
        .success();

    tagmatch_cmd()
        .current_dir(temp.path())
        .args(["remove", "1", "Yogi"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed 1 tag(s) from person 1"))
        .stdout(predicate::str::contains("Cyclist"))
        .stdout(predicate::str::contains("Yogi").not());
}

#[test]
fn test_remove_unselected_tag() {
    let temp = TempDir::new().unwrap();

    tagmatch_cmd().arg("init").arg(temp.path()).assert().success();

    tagmatch_cmd()
        .current_dir(temp.path())
        .args(["remove", "1", "Yogi"])
        .assert()
        .failure()
        .code(5)
        .stderr(predicate::str::contains("Tag not selected: 'Yogi'"));
}

#[test]
fn test_invalid_person() {
    let temp = TempDir::new().unwrap();

    tagmatch_cmd().arg("init").arg(temp.path()).assert().success();

    tagmatch_cmd()
        .current_dir(temp.path())
        .args(["select", "3", "Yogi"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid person"))
        .stderr(predicate::str::contains("Valid persons: 1, 2"));
}
