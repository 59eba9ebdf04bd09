use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[allow(deprecated)]
fn buildorder_cmd() -> Command {
    Command::cargo_bin("buildorder").unwrap()
}

fn check(manifest: &str) -> assert_cmd::assert::Assert {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("Buildorder.toml"), manifest).unwrap();
    fs::write(tmp.path().join("config.toml"), "").unwrap();
    buildorder_cmd()
        .current_dir(tmp.path())
        .args(["--config"])
        .arg(tmp.path().join("config.toml"))
        .arg("check")
        .assert()
}

#[test]
fn test_check_ok() {
    check("installed = [\"c\"]\n[packages]\na = [\"b\", \"c\"]\nb = [\"c\"]\n")
        .success()
        .stdout("OK\n")
        .stderr(predicate::str::contains("2 packages can be installed"));
}

#[test]
fn test_check_long_cycle_fails() {
    check("[packages]\na = [\"b\"]\nb = [\"c\"]\nc = [\"a\"]\n")
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("circular dependency"));
}

#[test]
fn test_check_missing_dependency_fails() {
    check("[packages]\na = [\"b\"]\nc = [\"d\"]\n")
        .failure()
        .stderr(predicate::str::contains("buildorder::resolve::unresolved"));
}

#[test]
fn test_check_bad_manifest_fails() {
    check("[packages]\na = 3\n")
        .failure()
        .stderr(predicate::str::contains("Manifest error"));
}

#[test]
fn test_check_missing_config_file_fails() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("Buildorder.toml"), "").unwrap();
    buildorder_cmd()
        .current_dir(tmp.path())
        .args(["check", "--config", "does-not-exist.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Config error"));
}
