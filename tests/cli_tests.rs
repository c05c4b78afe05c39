//! Integration tests for the depot CLI
//!
//! These tests run the actual CLI binary and verify output.

use assert_cmd::Command;
use predicates::prelude::*;

/// Get the binary to test
fn depot_cmd() -> Command {
    Command::cargo_bin("depot").unwrap()
}

#[test]
fn test_help_flag() {
    depot_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "producer/consumer simulation over a shared stock",
        ));
}

#[test]
fn test_check_prints_wiring() {
    depot_cmd()
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("Production runs: 100"))
        .stdout(predicate::str::contains("Consumption target: 20"))
        .stdout(predicate::str::contains("Producer pause: 20 ms"))
        .stdout(predicate::str::contains("Consumer pause: 50 ms"))
        .stdout(predicate::str::contains("Consumer retry backoff: 200 ms"))
        .stdout(predicate::str::contains("Expected final stock: 80"));
}

#[test]
fn test_run_reports_final_stock() {
    depot_cmd()
        .arg("run")
        .timeout(std::time::Duration::from_secs(60))
        .assert()
        .success()
        .stdout(predicate::str::contains("Final stock: 80"));
}

#[test]
fn test_unknown_subcommand_fails() {
    depot_cmd().arg("bogus").assert().failure();
}
