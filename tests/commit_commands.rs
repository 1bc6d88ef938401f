mod common;

use assert_fs::TempDir;
use common::command::{committed_repository_dir, run_ark_command, stage_and_commit};
use common::file::{read_file, write_file, FileSpec};
use predicates::prelude::*;
use rstest::rstest;

#[rstest]
fn commit_rejects_an_empty_staging_area(committed_repository_dir: TempDir) {
    let dir = committed_repository_dir.path();

    run_ark_command(dir, &["commit", "-m", "nothing"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No changes added to the commit."));
}

#[rstest]
fn commit_rejects_an_empty_message(committed_repository_dir: TempDir) {
    let dir = committed_repository_dir.path();

    write_file(FileSpec::new(dir.join("1.txt"), "changed".to_string()));
    run_ark_command(dir, &["add", "1.txt"]).assert().success();

    run_ark_command(dir, &["commit", "-m", ""])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Please enter a commit message."));
}

#[rstest]
fn log_walks_the_first_parent_chain_newest_first(committed_repository_dir: TempDir) {
    let dir = committed_repository_dir.path();

    write_file(FileSpec::new(dir.join("1.txt"), "revised".to_string()));
    stage_and_commit(dir, &["1.txt"], "second commit");

    let output = run_ark_command(dir, &["log"])
        .output()
        .expect("Failed to run log");
    let stdout = String::from_utf8(output.stdout).expect("Non UTF-8 log output");

    let second = stdout.find("second commit").expect("second commit missing");
    let first = stdout.find("first commit").expect("first commit missing");
    let root = stdout.find("initial commit").expect("initial commit missing");

    assert!(second < first && first < root);
}

#[rstest]
fn global_log_covers_commits_from_every_branch(committed_repository_dir: TempDir) {
    let dir = committed_repository_dir.path();

    run_ark_command(dir, &["branch", "topic"]).assert().success();
    run_ark_command(dir, &["checkout", "topic"])
        .assert()
        .success();

    write_file(FileSpec::new(dir.join("t.txt"), "topic only".to_string()));
    stage_and_commit(dir, &["t.txt"], "topic commit");

    run_ark_command(dir, &["checkout", "master"])
        .assert()
        .success();

    run_ark_command(dir, &["log"])
        .assert()
        .success()
        .stdout(predicate::str::contains("topic commit").not());

    run_ark_command(dir, &["global-log"])
        .assert()
        .success()
        .stdout(predicate::str::contains("topic commit"));
}

#[rstest]
fn find_prints_ids_of_matching_commits(committed_repository_dir: TempDir) {
    let dir = committed_repository_dir.path();

    run_ark_command(dir, &["find", "first commit"])
        .assert()
        .success()
        .stdout(predicate::str::is_match("^[0-9a-f]{40}\n$").expect("bad pattern"));
}

#[rstest]
fn find_reports_when_no_commit_matches(committed_repository_dir: TempDir) {
    let dir = committed_repository_dir.path();

    run_ark_command(dir, &["find", "no such message"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Found no commit with that message."));
}

#[rstest]
fn committed_content_round_trips_through_checkout(committed_repository_dir: TempDir) {
    let dir = committed_repository_dir.path();

    write_file(FileSpec::new(dir.join("1.txt"), "scribbles".to_string()));

    run_ark_command(dir, &["checkout", "--", "1.txt"])
        .assert()
        .success();

    assert_eq!(read_file(&dir.join("1.txt")), "one");
    assert_eq!(read_file(&dir.join("a").join("2.txt")), "two");
}
