mod common;

use assert_fs::TempDir;
use common::command::{repository_dir, run_ark_command};
use predicates::prelude::*;
use rstest::rstest;

#[rstest]
fn init_creates_a_repository_with_a_root_commit(repository_dir: TempDir) {
    let dir = repository_dir.path();

    run_ark_command(dir, &["init"]).assert().success();

    assert!(dir.join(".ark").join("repository.json").exists());

    run_ark_command(dir, &["log"])
        .assert()
        .success()
        .stdout(predicate::str::contains("initial commit"));

    run_ark_command(dir, &["status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("*master"));
}

#[rstest]
fn init_refuses_to_overwrite_an_existing_repository(repository_dir: TempDir) {
    let dir = repository_dir.path();

    run_ark_command(dir, &["init"]).assert().success();

    run_ark_command(dir, &["init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "A repository already exists in the current directory.",
        ));
}

#[rstest]
fn commands_fail_outside_an_initialized_repository(repository_dir: TempDir) {
    let dir = repository_dir.path();

    run_ark_command(dir, &["status"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Not in an initialized ark directory.",
        ));
}
