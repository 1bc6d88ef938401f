mod common;

use assert_fs::TempDir;
use common::command::{commit_id_by_message, committed_repository_dir, run_ark_command, stage_and_commit};
use common::file::{read_file, write_file, FileSpec};
use predicates::prelude::*;
use rstest::rstest;

#[rstest]
fn branch_creates_without_switching(committed_repository_dir: TempDir) {
    let dir = committed_repository_dir.path();

    run_ark_command(dir, &["branch", "topic"]).assert().success();

    run_ark_command(dir, &["status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("*master").and(predicate::str::contains("topic")));
}

#[rstest]
fn branch_rejects_a_duplicate_name(committed_repository_dir: TempDir) {
    let dir = committed_repository_dir.path();

    run_ark_command(dir, &["branch", "topic"]).assert().success();

    run_ark_command(dir, &["branch", "topic"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "A branch with that name already exists.",
        ));
}

#[rstest]
fn rm_branch_rejects_an_unknown_name(committed_repository_dir: TempDir) {
    let dir = committed_repository_dir.path();

    run_ark_command(dir, &["rm-branch", "ghost"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "A branch with that name does not exist.",
        ));
}

#[rstest]
fn rm_branch_rejects_the_active_branch(committed_repository_dir: TempDir) {
    let dir = committed_repository_dir.path();

    run_ark_command(dir, &["rm-branch", "master"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cannot remove the current branch."));
}

#[rstest]
fn rm_branch_deletes_the_pointer_but_not_the_commits(committed_repository_dir: TempDir) {
    let dir = committed_repository_dir.path();

    run_ark_command(dir, &["branch", "topic"]).assert().success();
    run_ark_command(dir, &["checkout", "topic"])
        .assert()
        .success();

    write_file(FileSpec::new(dir.join("t.txt"), "topic".to_string()));
    stage_and_commit(dir, &["t.txt"], "topic commit");

    run_ark_command(dir, &["checkout", "master"])
        .assert()
        .success();
    run_ark_command(dir, &["rm-branch", "topic"])
        .assert()
        .success();

    run_ark_command(dir, &["checkout", "topic"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "A branch with that name does not exist.",
        ));

    run_ark_command(dir, &["global-log"])
        .assert()
        .success()
        .stdout(predicate::str::contains("topic commit"));
}

#[rstest]
fn reset_moves_the_branch_and_the_working_tree(committed_repository_dir: TempDir) {
    let dir = committed_repository_dir.path();

    write_file(FileSpec::new(dir.join("1.txt"), "revised".to_string()));
    write_file(FileSpec::new(dir.join("extra.txt"), "extra".to_string()));
    stage_and_commit(dir, &["1.txt", "extra.txt"], "second commit");

    let first_id = commit_id_by_message(dir, "first commit");

    run_ark_command(dir, &["reset", &first_id]).assert().success();

    assert_eq!(read_file(&dir.join("1.txt")), "one");
    assert!(!dir.join("extra.txt").exists());

    run_ark_command(dir, &["log"])
        .assert()
        .success()
        .stdout(predicate::str::contains("second commit").not());

    run_ark_command(dir, &["commit", "-m", "nothing staged"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No changes added to the commit."));
}

#[rstest]
fn reset_rejects_an_unknown_commit_id(committed_repository_dir: TempDir) {
    let dir = committed_repository_dir.path();

    run_ark_command(dir, &["reset", "deadbeefdeadbeefdeadbeefdeadbeefdeadbeef"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No commit with that id exists."));
}

#[rstest]
fn reset_refuses_to_clobber_an_untracked_file(committed_repository_dir: TempDir) {
    let dir = committed_repository_dir.path();

    let first_id = commit_id_by_message(dir, "first commit");

    run_ark_command(dir, &["rm", "1.txt"]).assert().success();
    run_ark_command(dir, &["commit", "-m", "drop 1.txt"])
        .assert()
        .success();

    write_file(FileSpec::new(dir.join("1.txt"), "local".to_string()));

    run_ark_command(dir, &["reset", &first_id])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "There is an untracked file in the way; delete it or add it first.",
        ));

    assert_eq!(read_file(&dir.join("1.txt")), "local");
}
