//! Working-tree status inspection

pub mod status_info;

use crate::areas::repository::Repository;
use crate::artifacts::status::status_info::StatusReport;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// Builds a [`StatusReport`] by comparing the working tree against HEAD's
/// tracked-file table and the staging area.
pub struct StatusInspector<'r> {
    repository: &'r Repository,
}

impl<'r> StatusInspector<'r> {
    pub fn new(repository: &'r Repository) -> Self {
        StatusInspector { repository }
    }

    pub fn report(&self) -> anyhow::Result<StatusReport> {
        let repo = self.repository;
        let head = repo.head_commit()?;
        let staging = repo.staging();

        let worktree: BTreeSet<PathBuf> = repo.workspace().list_files()?.into_iter().collect();

        let mut report = StatusReport {
            branches: repo.branches().iter().map(|b| b.name().to_string()).collect(),
            active_branch: repo.branches().head_name().to_string(),
            staged: staging.added().map(|(path, _)| path.clone()).collect(),
            removed: staging.removed().cloned().collect(),
            ..Default::default()
        };

        // staged files: deleted again by hand, or edited past the captured digest
        for (path, staged_digest) in staging.added() {
            if !worktree.contains(path) {
                report.deleted_not_staged.insert(path.clone());
            } else if &self.worktree_digest(path)? != staged_digest {
                report.modified_not_staged.insert(path.clone());
            }
        }

        // HEAD-tracked files: edited or deleted without staging
        for (path, tracked_digest) in head.files() {
            if staging.is_staged(path) || staging.is_marked_removed(path) {
                continue;
            }
            if !worktree.contains(path) {
                report.deleted_not_staged.insert(path.clone());
            } else if &self.worktree_digest(path)? != tracked_digest {
                report.modified_not_staged.insert(path.clone());
            }
        }

        for path in &worktree {
            if !head.tracks(path) && !staging.is_staged(path) && !staging.is_marked_removed(path) {
                report.untracked.insert(path.clone());
            }
        }

        Ok(report)
    }

    fn worktree_digest(
        &self,
        path: &Path,
    ) -> anyhow::Result<crate::artifacts::objects::object_id::ObjectId> {
        Ok(self.repository.workspace().parse_blob(path)?.digest())
    }
}
