//! The failure taxonomy of the engine.
//!
//! Every message matches the wording printed to the user; commands return
//! these through `anyhow` so the binary can report them and skip saving.

use crate::artifacts::objects::object_id::ObjectId;
use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("File does not exist.")]
    FileNotFound(PathBuf),

    #[error("No reason to remove the file.")]
    NothingToRemove(PathBuf),

    #[error("No changes added to the commit.")]
    NoChangesStaged,

    #[error("A branch with that name already exists.")]
    BranchExists(String),

    #[error("A branch with that name does not exist.")]
    BranchNotFound(String),

    #[error("Cannot remove the current branch.")]
    CannotRemoveActive,

    #[error("Cannot merge a branch with itself.")]
    SelfMerge,

    #[error("You have uncommitted changes.")]
    UncommittedChanges,

    #[error("There is an untracked file in the way; delete it or add it first.")]
    UntrackedObstruction(PathBuf),

    #[error("No commit with that id exists.")]
    AmbiguousOrNotFound(String),

    #[error("File does not exist in that commit.")]
    FileNotInCommit(PathBuf),

    #[error("No need to checkout the current branch.")]
    AlreadyOnBranch,

    #[error("A repository already exists in the current directory.")]
    RepositoryExists,

    #[error("Not in an initialized ark directory.")]
    RepositoryMissing,

    #[error("object {0} is missing from the store")]
    ObjectMissing(ObjectId),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
