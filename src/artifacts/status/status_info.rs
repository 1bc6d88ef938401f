//! Working-tree status report
//!
//! Terminology:
//! - staged / removed: pending operations recorded in the staging area
//! - modified files: tracked or staged files whose working-tree content no
//!   longer matches the recorded digest
//! - deleted files: tracked or staged files missing from the working tree
//!   without a pending removal
//! - untracked files: working-tree files unknown to HEAD and the staging area

use derive_new::new;
use std::collections::BTreeSet;
use std::path::PathBuf;

/// Structured result of a status inspection. Every bucket is sorted; the
/// command layer only formats it.
#[derive(Debug, Default, PartialEq, Eq, new)]
pub struct StatusReport {
    /// All branch names, sorted.
    pub branches: Vec<String>,
    /// The branch currently designated HEAD.
    pub active_branch: String,
    pub staged: BTreeSet<PathBuf>,
    pub removed: BTreeSet<PathBuf>,
    pub modified_not_staged: BTreeSet<PathBuf>,
    pub deleted_not_staged: BTreeSet<PathBuf>,
    pub untracked: BTreeSet<PathBuf>,
}
