//! Staging area
//!
//! Two disjoint sets of pending operations: paths staged for addition (each
//! paired with the digest of its captured content) and paths marked for
//! removal. Staging a path cancels any pending removal of it and vice versa,
//! so a path never appears in both sets. The whole area is cleared atomically
//! on a successful commit, branch switch, or reset.

use crate::artifacts::objects::object_id::ObjectId;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct StagingArea {
    added: BTreeMap<PathBuf, ObjectId>,
    removed: BTreeSet<PathBuf>,
}

impl StagingArea {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `path` as staged with the given content digest.
    ///
    /// Drops any pending removal of the same path first.
    pub fn stage(&mut self, path: PathBuf, digest: ObjectId) {
        self.removed.remove(&path);
        self.added.insert(path, digest);
    }

    /// Drop a pending addition. Returns whether the path was staged.
    pub fn unstage(&mut self, path: &Path) -> bool {
        self.added.remove(path).is_some()
    }

    /// Record `path` as pending removal, dropping any staged addition.
    pub fn mark_removed(&mut self, path: PathBuf) {
        self.added.remove(&path);
        self.removed.insert(path);
    }

    /// Cancel a pending removal. Returns whether one was pending.
    pub fn cancel_removal(&mut self, path: &Path) -> bool {
        self.removed.remove(path)
    }

    pub fn is_staged(&self, path: &Path) -> bool {
        self.added.contains_key(path)
    }

    pub fn is_marked_removed(&self, path: &Path) -> bool {
        self.removed.contains(path)
    }

    pub fn staged_digest(&self, path: &Path) -> Option<&ObjectId> {
        self.added.get(path)
    }

    /// True iff both sets are empty. Gates `commit` and the merge
    /// preconditions.
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }

    pub fn clear(&mut self) {
        self.added.clear();
        self.removed.clear();
    }

    pub fn added(&self) -> impl Iterator<Item = (&PathBuf, &ObjectId)> {
        self.added.iter()
    }

    pub fn removed(&self) -> impl Iterator<Item = &PathBuf> {
        self.removed.iter()
    }
}
