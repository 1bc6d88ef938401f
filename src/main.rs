use anyhow::Result;
use ark::areas::repository::Repository;
use clap::{Parser, Subcommand};
use std::path::Path;

#[derive(Parser)]
#[command(
    name = "ark",
    version = "0.1.0",
    about = "A tiny local version-control system",
    long_about = "ark tracks snapshots of a directory in a local repository: \
    a content-addressed object store, a commit graph, a staging area, \
    branches, and a three-way merge. There is no server and no network.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(name = "init", about = "Initialize a new repository in the current directory")]
    Init,
    #[command(name = "add", about = "Stage a file for the next commit")]
    Add {
        #[arg(index = 1, help = "Path of the file to stage")]
        path: String,
    },
    #[command(name = "commit", about = "Record the staged changes as a new commit")]
    Commit {
        #[arg(short, long, help = "The commit message")]
        message: String,
    },
    #[command(name = "rm", about = "Unstage a file or remove a tracked file")]
    Rm {
        #[arg(index = 1, help = "Path of the file to remove")]
        path: String,
    },
    #[command(name = "log", about = "Show the current branch's history")]
    Log,
    #[command(name = "global-log", about = "Show every commit ever made")]
    GlobalLog,
    #[command(name = "find", about = "Print ids of commits with the given message")]
    Find {
        #[arg(index = 1, help = "The exact commit message to search for")]
        message: String,
    },
    #[command(name = "status", about = "Show branches, staged changes, and untracked files")]
    Status,
    #[command(
        name = "checkout",
        about = "Switch branches or restore files",
        long_about = "Three forms: `checkout <branch>` switches branches, \
        `checkout -- <file>` restores a file from HEAD, and \
        `checkout <commit-id> -- <file>` restores a file from a commit."
    )]
    Checkout {
        #[arg(index = 1, help = "Branch name or commit id prefix")]
        target: Option<String>,
        #[arg(index = 2, last = true, help = "File path to restore")]
        file: Vec<String>,
    },
    #[command(name = "branch", about = "Create a new branch at the current commit")]
    Branch {
        #[arg(index = 1, help = "Name of the new branch")]
        name: String,
    },
    #[command(name = "rm-branch", about = "Delete a branch pointer")]
    RmBranch {
        #[arg(index = 1, help = "Name of the branch to delete")]
        name: String,
    },
    #[command(name = "reset", about = "Move the current branch to a commit")]
    Reset {
        #[arg(index = 1, help = "Commit id prefix (at least 6 characters)")]
        id: String,
    },
    #[command(name = "merge", about = "Merge a branch into the current branch")]
    Merge {
        #[arg(index = 1, help = "Name of the branch to merge in")]
        branch: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let pwd = std::env::current_dir()?;
    let root = pwd.to_string_lossy().to_string();

    match cli.command {
        Commands::Init => {
            let repository = Repository::init(&root, Box::new(std::io::stdout()))?;
            repository.save()?;
        }
        command => {
            let mut repository = Repository::open(&root, Box::new(std::io::stdout()))?;
            dispatch(&mut repository, command)?;
            repository.save()?;
        }
    }

    Ok(())
}

fn dispatch(repository: &mut Repository, command: Commands) -> Result<()> {
    match command {
        Commands::Init => unreachable!("init is handled before the repository is loaded"),
        Commands::Add { path } => repository.add(Path::new(&path)),
        Commands::Commit { message } => {
            if message.trim().is_empty() {
                anyhow::bail!("Please enter a commit message.");
            }
            repository.commit(&message)
        }
        Commands::Rm { path } => repository.rm(Path::new(&path)),
        Commands::Log => repository.log(),
        Commands::GlobalLog => repository.global_log(),
        Commands::Find { message } => repository.find(&message),
        Commands::Status => repository.status(),
        Commands::Checkout { target, file } => match (target, file.as_slice()) {
            (Some(branch), []) => repository.checkout_branch(&branch),
            (None, [file]) => repository.checkout_file_from_head(Path::new(file)),
            (Some(id), [file]) => repository.checkout_file_from_commit(&id, Path::new(file)),
            _ => anyhow::bail!("Incorrect operands."),
        },
        Commands::Branch { name } => repository.branch(&name),
        Commands::RmBranch { name } => repository.remove_branch(&name),
        Commands::Reset { id } => repository.reset(&id),
        Commands::Merge { branch } => repository.merge(&branch),
    }
}
