use crate::common::file::{write_file, FileSpec};
use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::Path;

pub fn run_ark_command(dir: &Path, args: &[&str]) -> Command {
    let mut command = Command::cargo_bin("ark").expect("Failed to find ark binary");
    command.current_dir(dir);

    for arg in args {
        command.arg(arg);
    }

    command
}

pub fn stage_and_commit(dir: &Path, paths: &[&str], message: &str) {
    for path in paths {
        run_ark_command(dir, &["add", path]).assert().success();
    }

    run_ark_command(dir, &["commit", "-m", message])
        .assert()
        .success();
}

/// Resolves a commit id through `find`, assuming the message is unique.
pub fn commit_id_by_message(dir: &Path, message: &str) -> String {
    let output = run_ark_command(dir, &["find", message])
        .output()
        .expect("Failed to run find");

    String::from_utf8(output.stdout)
        .expect("Non UTF-8 find output")
        .lines()
        .next()
        .expect("No commit found for message")
        .trim()
        .to_string()
}

#[fixture]
pub fn repository_dir() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// An initialized repository with two committed files, `1.txt` and `a/2.txt`.
#[fixture]
pub fn committed_repository_dir(repository_dir: TempDir) -> TempDir {
    let dir = repository_dir.path();

    run_ark_command(dir, &["init"]).assert().success();

    write_file(FileSpec::new(dir.join("1.txt"), "one".to_string()));
    write_file(FileSpec::new(dir.join("a").join("2.txt"), "two".to_string()));

    stage_and_commit(dir, &["1.txt", "a/2.txt"], "first commit");

    repository_dir
}
