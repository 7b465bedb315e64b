//! Failure paths: exit codes, messages and suggestions.

use std::fs;
use std::path::Path;

use assert_cmd::cargo;
use predicates::prelude::*;
use tempfile::TempDir;

fn opscaff(dir: &Path) -> assert_cmd::Command {
    let mut cmd = cargo::cargo_bin_cmd!("opscaff");
    cmd.current_dir(dir)
        .env("XDG_CONFIG_HOME", dir.join(".xdg"))
        .env("HOME", dir)
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "true");
    cmd
}

#[test]
fn unsupported_version_is_a_configuration_error() {
    let temp = TempDir::new().unwrap();

    opscaff(temp.path())
        .args(["init", "--repo", "example.com/app", "--project-version", "3"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("unknown project version '3'"))
        .stderr(predicate::str::contains("Supported versions: 1, 2"));

    // config and bootstrap batch were written before the version was checked
    assert!(temp.path().join("PROJECT").exists());
    assert!(temp.path().join("hack/boilerplate.go.txt").exists());
    assert!(!temp.path().join("main.go").exists());
}

#[test]
fn missing_repo_is_a_usage_error() {
    let temp = TempDir::new().unwrap();
    opscaff(temp.path())
        .arg("init")
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("--repo"));
}

#[test]
fn blank_repo_is_rejected_before_anything_is_written() {
    let temp = TempDir::new().unwrap();
    opscaff(temp.path())
        .args(["init", "--repo", " "])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--repo must not be empty"));
    assert!(!temp.path().join("PROJECT").exists());
}

#[test]
fn escaping_boilerplate_path_is_rejected() {
    let temp = TempDir::new().unwrap();
    opscaff(temp.path())
        .args([
            "init",
            "--dir",
            "inner",
            "--repo",
            "example.com/app",
            "--boilerplate-path",
            "../outside.txt",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("escapes the project root"));
    assert!(!temp.path().join("outside.txt").exists());
    assert!(!temp.path().join("inner/PROJECT").exists());
}

#[test]
fn boilerplate_path_naming_the_root_is_a_configuration_error() {
    let temp = TempDir::new().unwrap();
    opscaff(temp.path())
        .args(["init", "--repo", "example.com/app", "--boilerplate-path", "./"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("does not name a file"));
    assert!(!temp.path().join("PROJECT").exists());
}

#[test]
fn unwritable_target_is_an_internal_error() {
    let temp = TempDir::new().unwrap();
    // a regular file where the project directory should be
    fs::write(temp.path().join("taken"), "").unwrap();

    opscaff(temp.path())
        .args(["init", "--dir", "taken", "--repo", "example.com/app"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn json_errors_are_json() {
    let temp = TempDir::new().unwrap();

    let assert = opscaff(temp.path())
        .args([
            "--output-format",
            "json",
            "init",
            "--repo",
            "example.com/app",
            "--project-version",
            "9",
        ])
        .assert()
        .code(4);

    let stderr = String::from_utf8(assert.get_output().stderr.clone()).unwrap();
    let last = stderr.lines().last().unwrap();
    let error: serde_json::Value = serde_json::from_str(last).unwrap();
    assert_eq!(error["category"], "configuration");
    assert_eq!(error["exit_code"], 4);
}

#[test]
fn unknown_config_key_is_not_found() {
    let temp = TempDir::new().unwrap();
    opscaff(temp.path())
        .args(["config", "get", "defaults.language"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Unknown configuration key"))
        .stderr(predicate::str::contains("opscaff config list"));
}

#[test]
fn missing_explicit_config_file_is_a_configuration_error() {
    let temp = TempDir::new().unwrap();
    opscaff(temp.path())
        .args(["--config", "absent.toml", "config", "list"])
        .assert()
        .code(4);
}

#[test]
fn config_init_does_not_clobber() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("opscaff.toml");
    let flag = config.to_str().unwrap();

    opscaff(temp.path())
        .args(["--config", flag, "config", "init"])
        .assert()
        .success();
    opscaff(temp.path())
        .args(["--config", flag, "config", "init"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--force"));
    opscaff(temp.path())
        .args(["--config", flag, "config", "init", "--force"])
        .assert()
        .success();
}
