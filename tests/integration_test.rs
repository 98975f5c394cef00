// tests/integration_test.rs
use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn semver_bump(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_semver-bump"))
        .current_dir(dir)
        .args(args)
        .output()
        .expect("Failed to execute command")
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

fn setup_project() -> TempDir {
    let dir = TempDir::new().expect("Could not create temp dir");
    fs::write(
        dir.path().join(".semver.yaml"),
        "version: 1.2.3-beta+001\nfiles:\n  Chart.yaml: '(?m)^version:.*'\n  VERSION: '.+'\n",
    )
    .unwrap();
    fs::write(
        dir.path().join("Chart.yaml"),
        "apiVersion: v2\nversion: 1.2.3-beta+001\nappVersion: 1.2.3\n",
    )
    .unwrap();
    fs::write(dir.path().join("VERSION"), "1.2.3-beta+001\n").unwrap();
    dir
}

#[test]
fn test_semver_bump_help() {
    let dir = TempDir::new().unwrap();
    let output = semver_bump(dir.path(), &["--help"]);

    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("semver-bump"));
    assert!(text.contains("--major"));
    assert!(text.contains("--dry-run"));
}

#[test]
fn test_semver_bump_version_flag() {
    let dir = TempDir::new().unwrap();
    let output = semver_bump(dir.path(), &["--version"]);

    assert!(output.status.success());
    assert!(stdout(&output).starts_with("semver-bump "));
}

#[test]
fn test_minor_bump_syncs_files() {
    let dir = setup_project();
    let output = semver_bump(dir.path(), &["--minor"]);

    assert!(output.status.success(), "{:?}", output);
    assert_eq!(stdout(&output), "1.3.0\n");
    assert_eq!(
        fs::read_to_string(dir.path().join("Chart.yaml")).unwrap(),
        "apiVersion: v2\nversion: 1.3.0\nappVersion: 1.2.3\n"
    );
    assert_eq!(
        fs::read_to_string(dir.path().join("VERSION")).unwrap(),
        "1.3.0\n"
    );
    assert!(fs::read_to_string(dir.path().join(".semver.yaml"))
        .unwrap()
        .starts_with("version: 1.3.0\n"));
}

#[test]
fn test_no_flags_prints_current_version() {
    let dir = setup_project();
    let output = semver_bump(dir.path(), &[]);

    assert!(output.status.success());
    assert_eq!(stdout(&output), "1.2.3-beta+001\n");
}

#[test]
fn test_explicit_version_override() {
    let dir = setup_project();
    let output = semver_bump(dir.path(), &["4.0.0"]);

    assert!(output.status.success());
    assert_eq!(stdout(&output), "4.0.0\n");
    assert_eq!(
        fs::read_to_string(dir.path().join("VERSION")).unwrap(),
        "4.0.0\n"
    );
}

#[test]
fn test_override_conflicts_with_bump_flags() {
    let dir = setup_project();
    let output = semver_bump(dir.path(), &["4.0.0", "--major"]);

    assert!(!output.status.success());
}

#[test]
fn test_dry_run_writes_nothing() {
    let dir = setup_project();
    let output = semver_bump(dir.path(), &["--major", "--dry-run"]);

    assert!(output.status.success());
    assert_eq!(stdout(&output), "2.0.0\n");
    assert_eq!(
        fs::read_to_string(dir.path().join("VERSION")).unwrap(),
        "1.2.3-beta+001\n"
    );
}

#[test]
fn test_invalid_override_fails() {
    let dir = setup_project();
    let output = semver_bump(dir.path(), &["1.2"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Invalid version format"));
}

#[test]
fn test_missing_config_fails() {
    let dir = TempDir::new().unwrap();
    let output = semver_bump(dir.path(), &["--patch"]);

    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_init_then_bump() {
    let dir = TempDir::new().unwrap();

    let init = semver_bump(dir.path(), &["--init"]);
    assert!(init.status.success());
    assert!(dir.path().join(".semver.yaml").exists());

    let bump = semver_bump(dir.path(), &["--patch", "--tag", "rc.1"]);
    assert!(bump.status.success());
    assert_eq!(stdout(&bump), "0.0.1-rc.1\n");
}

#[test]
fn test_custom_toml_config() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("release.toml"),
        "version = \"0.9.9\"\n\n[files]\n\"Cargo.toml\" = '(?m)^version = \".*\"'\n",
    )
    .unwrap();
    fs::write(
        dir.path().join("Cargo.toml"),
        "[package]\nversion = \"0.9.9\"\n",
    )
    .unwrap();

    let output = semver_bump(dir.path(), &["--config", "release.toml", "-M"]);

    assert!(output.status.success(), "{:?}", output);
    assert_eq!(stdout(&output), "1.0.0\n");
    assert_eq!(
        fs::read_to_string(dir.path().join("Cargo.toml")).unwrap(),
        "[package]\nversion = \"1.0.0\"\n"
    );
    assert!(fs::read_to_string(dir.path().join("release.toml"))
        .unwrap()
        .starts_with("version = \"1.0.0\"\n"));
}
