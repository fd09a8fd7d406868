//! Integration tests for init, reset and config commands

#![allow(deprecated)]

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::{in_roster, init_roster, staffbook_cmd};

#[test]
fn test_init_creates_config_and_seed() {
    let temp = TempDir::new().unwrap();

    staffbook_cmd()
        .arg("init")
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Seeded with example staff"));

    let config = fs::read_to_string(temp.path().join(".staffbook/config.toml")).unwrap();
    assert!(config.contains("currency = \"RWF\""));
    assert!(config.contains("storage_key = \"staff\""));

    let data = fs::read_to_string(temp.path().join(".staffbook/data/staff.json")).unwrap();
    let staff: serde_json::Value = serde_json::from_str(&data).unwrap();
    assert_eq!(staff.as_array().unwrap().len(), 8);
    assert_eq!(staff[0]["firstName"], "John");
    assert_eq!(staff[0]["hireDate"], "2020-01-15");
}

#[test]
fn test_init_with_options() {
    let temp = TempDir::new().unwrap();

    staffbook_cmd()
        .arg("init")
        .arg(temp.path())
        .arg("--organization")
        .arg("Kigali Clinic")
        .arg("--currency")
        .arg("usd")
        .arg("--simulate-latency")
        .assert()
        .success()
        .stdout(predicate::str::contains("Kigali Clinic"));

    let config = fs::read_to_string(temp.path().join(".staffbook/config.toml")).unwrap();
    assert!(config.contains("organization = \"Kigali Clinic\""));
    assert!(config.contains("currency = \"USD\""));
    assert!(config.contains("create_ms = 700"));
}

#[test]
fn test_init_already_initialized_fails() {
    let temp = TempDir::new().unwrap();

    init_roster(temp.path());

    staffbook_cmd()
        .arg("init")
        .arg(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("already initialized"));
}

#[test]
fn test_commands_outside_roster_fail() {
    let temp = TempDir::new().unwrap();

    in_roster(temp.path())
        .arg("list")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("staffbook init"));
}

#[test]
fn test_roster_found_from_subdirectory() {
    let temp = TempDir::new().unwrap();
    init_roster(temp.path());
    let sub = temp.path().join("reports");
    fs::create_dir(&sub).unwrap();

    in_roster(&sub)
        .arg("show")
        .arg("1")
        .assert()
        .success()
        .stdout(predicate::str::contains("John Doe"));
}

#[test]
fn test_roster_found_via_env_root() {
    let temp = TempDir::new().unwrap();
    let elsewhere = TempDir::new().unwrap();
    init_roster(temp.path());

    in_roster(elsewhere.path())
        .env("STAFFBOOK_ROOT", temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Lisa Wilson"));
}

#[test]
fn test_corrupt_store_then_reset() {
    let temp = TempDir::new().unwrap();
    init_roster(temp.path());
    fs::write(temp.path().join(".staffbook/data/staff.json"), "[{oops").unwrap();

    in_roster(temp.path())
        .arg("list")
        .assert()
        .code(5)
        .stderr(predicate::str::contains("malformed"))
        .stderr(predicate::str::contains("staffbook reset"));

    in_roster(temp.path())
        .arg("reset")
        .assert()
        .success()
        .stdout(predicate::str::contains("8 example staff"));

    in_roster(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("John Doe"));
}

#[test]
fn test_missing_slot_reports_uninitialized() {
    let temp = TempDir::new().unwrap();
    init_roster(temp.path());
    fs::remove_file(temp.path().join(".staffbook/data/staff.json")).unwrap();

    in_roster(temp.path())
        .arg("show")
        .arg("1")
        .assert()
        .code(5)
        .stderr(predicate::str::contains("has not been initialized"));
}

#[test]
fn test_config_get_and_set() {
    let temp = TempDir::new().unwrap();
    init_roster(temp.path());

    in_roster(temp.path())
        .arg("config")
        .arg("currency")
        .assert()
        .success()
        .stdout(predicate::str::contains("RWF"));

    in_roster(temp.path())
        .arg("config")
        .arg("currency")
        .arg("KES")
        .assert()
        .success();

    in_roster(temp.path())
        .arg("show")
        .arg("1")
        .assert()
        .success()
        .stdout(predicate::str::contains("KES 120,000"));
}

#[test]
fn test_config_storage_key_switches_slot() {
    let temp = TempDir::new().unwrap();
    init_roster(temp.path());

    in_roster(temp.path())
        .arg("config")
        .arg("storage_key")
        .arg("archive")
        .assert()
        .success();

    // The new slot has never been written
    in_roster(temp.path()).arg("list").assert().code(5);

    in_roster(temp.path()).arg("reset").assert().success();
    assert!(temp.path().join(".staffbook/data/archive.json").exists());
}

#[test]
fn test_config_list() {
    let temp = TempDir::new().unwrap();
    init_roster(temp.path());

    in_roster(temp.path())
        .arg("config")
        .arg("--list")
        .assert()
        .success()
        .stdout(predicate::str::contains("organization = St. Luke's Hospital"))
        .stdout(predicate::str::contains("latency.update = 0"));
}

#[test]
fn test_config_unknown_key_fails() {
    let temp = TempDir::new().unwrap();
    init_roster(temp.path());

    in_roster(temp.path())
        .arg("config")
        .arg("mode")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown config key: 'mode'"));
}
