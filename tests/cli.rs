//! End-to-end tests for the treexport binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

fn treexport_cmd() -> Command {
    Command::cargo_bin("treexport").unwrap()
}

#[test]
fn prints_tree_to_stdout() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("src")).unwrap();
    fs::write(dir.path().join("src/main.rs"), "fn main() {}").unwrap();
    fs::write(dir.path().join("Cargo.toml"), "[package]").unwrap();

    treexport_cmd()
        .arg(dir.path())
        .arg("--print")
        .assert()
        .success()
        .stdout(predicate::str::contains("├── Cargo.toml"))
        .stdout(predicate::str::contains("└── src/"))
        .stdout(predicate::str::contains("    └── main.rs"));
}

#[test]
fn depth_flag_limits_output() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("a")).unwrap();
    fs::write(dir.path().join("a/deep.txt"), "").unwrap();

    treexport_cmd()
        .arg(dir.path())
        .args(["--depth", "1", "--print"])
        .assert()
        .success()
        .stdout(predicate::str::contains("a/"))
        .stdout(predicate::str::contains("deep.txt").not());
}

#[test]
fn all_flag_includes_hidden_entries() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join(".env"), "").unwrap();
    fs::write(dir.path().join("main.py"), "").unwrap();

    treexport_cmd()
        .arg(dir.path())
        .arg("--print")
        .assert()
        .success()
        .stdout(predicate::str::contains(".env").not());

    treexport_cmd()
        .arg(dir.path())
        .args(["--all", "--print"])
        .assert()
        .success()
        .stdout(predicate::str::contains(".env"));
}

#[test]
fn file_flag_writes_output_file() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("hello.txt"), "").unwrap();
    let out = dir.path().join("tree.txt");

    treexport_cmd()
        .arg(dir.path())
        .args(["--file", out.to_str().unwrap()])
        .assert()
        .success()
        .stderr(predicate::str::contains("saved to"));

    let written = fs::read_to_string(&out).unwrap();
    assert!(written.contains("hello.txt"));
}

#[test]
fn file_and_print_flags_conflict() {
    let dir = tempdir().unwrap();

    treexport_cmd()
        .arg(dir.path())
        .args(["--print", "--file", "out.txt"])
        .assert()
        .failure();
}

#[test]
fn missing_directory_fails_with_message() {
    treexport_cmd()
        .arg("/no/such/directory")
        .arg("--print")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("does not exist"));
}

#[test]
fn file_root_fails_with_message() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("plain.txt");
    fs::write(&file, "").unwrap();

    treexport_cmd()
        .arg(&file)
        .arg("--print")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("is not a directory"));
}
