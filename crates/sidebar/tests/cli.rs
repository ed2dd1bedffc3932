//! End-to-end tests for the `sidebar` binary on sidebar script targets.
#![allow(clippy::tests_outside_test_module)]

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const RAYON_API: &str = r#"initSidebarItems({"enum":[["InitError","Custom error type for the rayon thread pool configuration."]],"fn":[["dump_stats","This is a debugging API not really intended for end users."],["initialize","Initializes the global thread pool."],["join",""]],"struct":[["Configuration","Contains the rayon thread pool configuration."],["ThreadPool",""]]});"#;

fn write_script(dir: &TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("sidebar-items.js");
    fs::write(&path, contents).unwrap();
    path
}

fn sidebar() -> Command {
    Command::cargo_bin("sidebar").unwrap()
}

#[test]
fn reprints_a_valid_script() {
    let dir = TempDir::new().unwrap();
    let path = write_script(&dir, RAYON_API);

    sidebar()
        .arg(&path)
        .assert()
        .success()
        .stdout(format!("{RAYON_API}\n"));
}

#[test]
fn converts_a_script_to_json() {
    let dir = TempDir::new().unwrap();
    let path = write_script(&dir, RAYON_API);

    sidebar()
        .arg(&path)
        .args(["--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("{\n  \"enum\": ["))
        .stdout(predicate::str::contains("\"ThreadPool\""));
}

#[test]
fn finds_items_by_name() {
    let dir = TempDir::new().unwrap();
    let path = write_script(&dir, RAYON_API);

    sidebar()
        .arg(&path)
        .args(["--find", "InitError"])
        .assert()
        .success()
        .stdout("enum InitError: Custom error type for the rayon thread pool configuration.\n");

    sidebar()
        .arg(&path)
        .args(["--find", "join"])
        .assert()
        .success()
        .stdout("fn join\n");

    sidebar()
        .arg(&path)
        .args(["--find", "spawn"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No item named spawn"));
}

#[test]
fn rejects_invalid_scripts() {
    let dir = TempDir::new().unwrap();
    let path = write_script(&dir, "window.items = {};");

    sidebar()
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid sidebar script"));

    let path = write_script(
        &dir,
        r#"initSidebarItems({"fn":[["join",""]],"gadget":[["x",""]]});"#,
    );
    sidebar()
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown item kind: gadget"));
}

#[test]
fn script_targets_take_no_module_options() {
    let dir = TempDir::new().unwrap();
    let path = write_script(&dir, RAYON_API);

    sidebar()
        .arg(&path)
        .args(["--module", "rayon::api"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--module and --out"));
}

#[test]
fn missing_rustdoc_json_is_reported() {
    let dir = TempDir::new().unwrap();

    sidebar()
        .arg(dir.path().join("missing.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read file"));
}
