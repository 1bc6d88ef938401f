mod common;

use assert_fs::TempDir;
use common::command::{repository_dir, run_ark_command, stage_and_commit};
use common::file::{remove_file, write_file, FileSpec};
use predicates::prelude::*;
use rstest::rstest;

#[rstest]
fn status_of_a_fresh_repository_lists_only_the_default_branch(repository_dir: TempDir) {
    let dir = repository_dir.path();

    run_ark_command(dir, &["init"]).assert().success();

    run_ark_command(dir, &["status"]).assert().success().stdout(
        predicate::str::contains("=== Branches ===\n*master")
            .and(predicate::str::contains("=== Staged Files ==="))
            .and(predicate::str::contains("=== Untracked Files ===")),
    );
}

#[rstest]
fn status_reports_every_section_in_order(repository_dir: TempDir) {
    let dir = repository_dir.path();

    run_ark_command(dir, &["init"]).assert().success();

    write_file(FileSpec::new(dir.join("tracked_del.txt"), "del".to_string()));
    write_file(FileSpec::new(dir.join("tracked_mod.txt"), "mod".to_string()));
    write_file(FileSpec::new(dir.join("tracked_rm.txt"), "rm".to_string()));
    stage_and_commit(
        dir,
        &["tracked_del.txt", "tracked_mod.txt", "tracked_rm.txt"],
        "track three files",
    );

    run_ark_command(dir, &["rm", "tracked_rm.txt"]).assert().success();
    write_file(FileSpec::new(dir.join("tracked_mod.txt"), "edited".to_string()));
    remove_file(&dir.join("tracked_del.txt"));

    write_file(FileSpec::new(dir.join("staged.txt"), "staged".to_string()));
    run_ark_command(dir, &["add", "staged.txt"]).assert().success();

    write_file(FileSpec::new(dir.join("untracked.txt"), "loose".to_string()));

    let expected = "\
=== Branches ===
*master

=== Staged Files ===
staged.txt

=== Removed Files ===
tracked_rm.txt

=== Modifications Not Staged For Commit ===
tracked_del.txt (deleted)
tracked_mod.txt (modified)

=== Untracked Files ===
untracked.txt
";

    run_ark_command(dir, &["status"])
        .assert()
        .success()
        .stdout(predicate::eq(expected));
}

#[rstest]
fn status_lists_branches_alphabetically_with_the_active_one_starred(repository_dir: TempDir) {
    let dir = repository_dir.path();

    run_ark_command(dir, &["init"]).assert().success();
    run_ark_command(dir, &["branch", "zeta"]).assert().success();
    run_ark_command(dir, &["branch", "alpha"]).assert().success();

    run_ark_command(dir, &["status"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "=== Branches ===\nalpha\n*master\nzeta\n",
        ));
}
