//! Integration tests for init command

use predicates::prelude::*;
use tempfile::TempDir;

mod common;
use common::pedia_cmd;

#[test]
fn test_init_creates_structure() {
    let temp = TempDir::new().unwrap();

    pedia_cmd()
        .arg("init")
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized pedia wiki"));

    assert!(temp.path().join(".pedia").is_dir());
    assert!(temp.path().join(".pedia/config.toml").is_file());
    assert!(temp.path().join("entries").is_dir());
}

#[test]
fn test_init_config_contents() {
    let temp = TempDir::new().unwrap();

    pedia_cmd().arg("init").arg(temp.path()).assert().success();

    let config = std::fs::read_to_string(temp.path().join(".pedia/config.toml")).unwrap();
    assert!(config.contains("entries_dir = \"entries\""));
    assert!(config.contains("created = "));
}

#[test]
fn test_init_twice_fails() {
    let temp = TempDir::new().unwrap();

    pedia_cmd().arg("init").arg(temp.path()).assert().success();

    pedia_cmd()
        .arg("init")
        .arg(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("already initialized"));
}

#[test]
fn test_init_creates_missing_directory() {
    let temp = TempDir::new().unwrap();
    let target = temp.path().join("wiki");

    pedia_cmd().arg("init").arg(&target).assert().success();

    assert!(target.join(".pedia").is_dir());
}

#[test]
fn test_commands_outside_wiki_fail() {
    let temp = TempDir::new().unwrap();

    pedia_cmd()
        .current_dir(temp.path())
        .arg("list")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Not a pedia directory"));
}
