//! Command-line tests that never enter the interactive UI

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

fn promptbar() -> Command {
    Command::cargo_bin("promptbar").unwrap()
}

#[test]
fn test_help_lists_options() {
    promptbar()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--config"))
        .stdout(predicate::str::contains("--print-config"));
}

#[test]
fn test_version() {
    promptbar()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_print_default_config() {
    let dir = tempfile::tempdir().unwrap();
    let empty = dir.path().join("empty.toml");
    std::fs::File::create(&empty).unwrap();

    promptbar()
        .arg("--config")
        .arg(&empty)
        .arg("--print-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Natural light"))
        .stdout(predicate::str::contains("title = \"Prompt\""));
}

#[test]
fn test_print_config_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "[[fields]]\nlabel = \"Lens\"\noptions = [\"Wide\", \"Macro\"]").unwrap();

    promptbar()
        .arg("--config")
        .arg(file.path())
        .arg("--print-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Lens"))
        .stdout(predicate::str::contains("Macro"))
        .stdout(predicate::str::contains("Lighting").not());
}

#[test]
fn test_missing_config_file_fails() {
    let dir = tempfile::tempdir().unwrap();

    promptbar()
        .arg("--config")
        .arg(dir.path().join("nope.toml"))
        .arg("--print-config")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Config file not found"));
}

#[test]
fn test_invalid_config_file_fails() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "[panel]\nmax_visible = \"many\"").unwrap();

    promptbar()
        .arg("--config")
        .arg(file.path())
        .arg("--print-config")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid config file"));
}
