//! Integration tests for the autonpm CLI
//!
//! Runs the binary against scratch project directories end to end.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Get the autonpm binary
fn autonpm() -> Command {
    Command::cargo_bin("autonpm").unwrap()
}

#[test]
fn test_help() {
    autonpm()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("autonpm"))
        .stdout(predicate::str::contains("check"))
        .stdout(predicate::str::contains("install"));
}

#[test]
fn test_check_relative_import_is_skipped() {
    let temp = TempDir::new().unwrap();

    autonpm()
        .current_dir(temp.path())
        .args(["check", "./client", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"action\": \"skip\""));
}

#[test]
fn test_check_missing_package_needs_install() {
    let temp = TempDir::new().unwrap();

    autonpm()
        .current_dir(temp.path())
        .args(["check", "newlib/sub/path", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"dependency\": \"newlib\""))
        .stdout(predicate::str::contains("\"action\": \"install\""));
}

#[test]
fn test_check_scoped_specifier_keeps_scope_and_name() {
    let temp = TempDir::new().unwrap();

    autonpm()
        .current_dir(temp.path())
        .args(["check", "@scope/name/sub/path", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"dependency\": \"@scope/name\""));
}

#[test]
fn test_check_declared_dependency_is_skipped() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("package.json"),
        r#"{ "dependencies": { "react": "^18.0.0" } }"#,
    )
    .unwrap();

    autonpm()
        .current_dir(temp.path())
        .args(["check", "react", "--save", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"action\": \"skip\""));
}

#[test]
fn test_check_core_module_is_skipped() {
    let temp = TempDir::new().unwrap();

    autonpm()
        .current_dir(temp.path())
        .args(["check", "fs", "--save", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"action\": \"skip\""));
}

#[test]
fn test_check_installed_package_satisfies_unselective_caller() {
    let temp = TempDir::new().unwrap();
    fs::create_dir_all(temp.path().join("node_modules/lodash")).unwrap();

    // no --save/--save-dev: node_modules contents count as satisfied
    autonpm()
        .current_dir(temp.path())
        .args(["check", "lodash", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"action\": \"skip\""));

    autonpm()
        .current_dir(temp.path())
        .args(["check", "newlib", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"action\": \"install\""));
}

#[test]
fn test_install_dry_run_builds_expected_argv() {
    let temp = TempDir::new().unwrap();

    autonpm()
        .current_dir(temp.path())
        .args([
            "install",
            "foo",
            "--save",
            "--flag",
            "registry=https://x",
            "--npm",
            "npm",
            "--dry-run",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("npm install foo --save --registry='https://x'"))
        .stdout(predicate::str::contains("--save-dev").not());
}

#[test]
fn test_install_dry_run_json() {
    let temp = TempDir::new().unwrap();

    autonpm()
        .current_dir(temp.path())
        .args([
            "install",
            "foo",
            "--save-dev",
            "--npm",
            "npm",
            "--dry-run",
            "--format",
            "json",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"--save-dev\""))
        .stdout(predicate::str::contains("\"install\""));
}

#[test]
fn test_install_declared_dependency_is_a_no_op() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("package.json"),
        r#"{ "devDependencies": { "jest": "^29.0.0" } }"#,
    )
    .unwrap();

    // no npm spawn happens, so a bogus binary goes unnoticed
    autonpm()
        .current_dir(temp.path())
        .args(["install", "jest", "--save-dev", "--npm", "definitely-not-npm"])
        .assert()
        .success()
        .stdout(predicate::str::contains("nothing to install"));
}

#[test]
fn test_install_spawn_failure_is_reported() {
    let temp = TempDir::new().unwrap();

    autonpm()
        .current_dir(temp.path())
        .args(["install", "foo", "--npm", "definitely-not-npm"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn test_install_missing_explicit_npm_path_is_a_config_error() {
    let temp = TempDir::new().unwrap();

    autonpm()
        .current_dir(temp.path())
        .args(["install", "foo", "--npm", "/no/such/dir/npm"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_env_json() {
    let temp = TempDir::new().unwrap();
    fs::create_dir_all(temp.path().join("node_modules")).unwrap();

    autonpm()
        .current_dir(temp.path())
        .args(["env", "--npm", "npm", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"npm_binary\": \"npm\""))
        .stdout(predicate::str::contains("\"node_modules\": true"))
        .stdout(predicate::str::contains("\"package_json\": false"));
}
