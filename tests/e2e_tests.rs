//! End-to-end tests for the nun CLI
//!
//! These tests verify:
//! - Exit code 1 when no usable package.json is given
//! - Help and version output
//!
//! None of them reach the npm registry.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

fn nun() -> Command {
    Command::cargo_bin("nun").expect("binary should be built")
}

mod exit_code_tests {
    use super::*;

    #[test]
    fn test_no_arguments_fails() {
        nun()
            .assert()
            .code(1)
            .stderr(predicate::str::contains("package.json file required"));
    }

    #[test]
    fn test_missing_file_fails() {
        let temp_dir = tempfile::tempdir().unwrap();
        nun()
            .arg(temp_dir.path().join("package.json"))
            .assert()
            .code(1)
            .stderr(predicate::str::contains("package.json file required"));
    }

    #[test]
    fn test_non_manifest_file_fails() {
        let temp_dir = tempfile::tempdir().unwrap();
        let other = temp_dir.path().join("abc.js");
        fs::write(&other, "").unwrap();

        nun()
            .arg(&other)
            .arg("--console")
            .assert()
            .code(1)
            .stderr(predicate::str::contains("package.json file required"));
    }

    #[test]
    fn test_invalid_interval_is_usage_error() {
        nun()
            .args(["--interval=soon", "package.json"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("--interval"));
    }

    #[test]
    fn test_interval_value_without_equals_warns() {
        let temp_dir = tempfile::tempdir().unwrap();
        nun()
            .env_remove("NUN_LOG")
            .arg("--interval")
            .arg("5000")
            .arg(temp_dir.path().join("package.json"))
            .assert()
            .code(1)
            .stderr(predicate::str::contains("--interval=5000"))
            .stderr(predicate::str::contains("package.json file required"));
    }
}

mod help_tests {
    use super::*;

    #[test]
    fn test_help_lists_options() {
        nun()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("--interval"))
            .stdout(predicate::str::contains("--console"));
    }

    #[test]
    fn test_version() {
        nun()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }
}
