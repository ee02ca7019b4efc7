//! End-to-end tests for CLI exit codes.
//!
//! - Exit code 0: Success
//! - Exit code 1: Fatal error (bad config, not a repository, I/O failure)
//! - Exit code 2: Invalid command-line usage (handled by clap)

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

/// Exit code 0 is returned for --help.
#[test]
fn test_exit_code_help() {
    let mut cmd = cargo_bin_cmd!("commit-seeder");

    cmd.arg("--help")
        .assert()
        .code(0)
        .stdout(predicate::str::contains("run"))
        .stdout(predicate::str::contains("plan"))
        .stdout(predicate::str::contains("completions"));
}

/// Exit code 0 is returned for --version.
#[test]
fn test_exit_code_version() {
    let mut cmd = cargo_bin_cmd!("commit-seeder");

    cmd.arg("--version")
        .assert()
        .code(0)
        .stdout(predicate::str::starts_with("commit-seeder "));
}

/// Exit code 1 is returned for a config file that does not exist.
#[test]
fn test_exit_code_error_config_not_found() {
    let temp = assert_fs::TempDir::new().unwrap();
    let mut cmd = cargo_bin_cmd!("commit-seeder");

    cmd.current_dir(temp.path())
        .args(["plan", "--config", "nonexistent.yaml"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("I/O error"));
}

/// Exit code 2 is returned for unknown command-line flags.
#[test]
fn test_exit_code_usage_unknown_flag() {
    let mut cmd = cargo_bin_cmd!("commit-seeder");

    cmd.arg("--unknown-flag-that-does-not-exist")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("error:"));
}

/// Exit code 2 is returned for a non-numeric target.
#[test]
fn test_exit_code_usage_bad_target() {
    let mut cmd = cargo_bin_cmd!("commit-seeder");

    cmd.args(["run", "--target", "lots"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid value"));
}

/// Without a subcommand the default run executes, so outside a git
/// repository it fails with exit code 1 rather than a usage error.
#[test]
fn test_exit_code_bare_invocation_outside_repository() {
    let temp = assert_fs::TempDir::new().unwrap();
    let mut cmd = cargo_bin_cmd!("commit-seeder");

    cmd.current_dir(temp.path())
        .env_remove("COMMIT_SEEDER_CONFIG")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Not a git repository"));
}
