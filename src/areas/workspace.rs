//! Working-directory reconciler
//!
//! The workspace is the only component that writes or deletes working-tree
//! files outside of the user's own edits. All paths are relative to the
//! repository root; the state directory is never enumerated or touched.
//!
//! Destructive switches go through [`Workspace::safe_switch`], which refuses
//! to overwrite any file the current commit does not track. The check runs
//! before any destructive step, so no file is ever clobbered unless it is
//! recoverable from some commit.

use crate::areas::object_store::ObjectStore;
use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::commit::Commit;
use crate::errors::{Error, Result};
use bytes::Bytes;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

const IGNORED_PATHS: [&str; 3] = [crate::areas::repository::STATE_DIR, ".", ".."];

#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self, path: &Path) -> bool {
        self.path.join(path).is_file()
    }

    pub fn read_file(&self, path: &Path) -> Result<Bytes> {
        let content = std::fs::read(self.path.join(path))?;
        Ok(Bytes::from(content))
    }

    /// Capture a working-tree file as a blob.
    pub fn parse_blob(&self, path: &Path) -> Result<Blob> {
        Ok(Blob::new(self.read_file(path)?))
    }

    /// Overwrite a working-tree file, creating parent directories as needed.
    pub fn write_file(&self, path: &Path, data: &[u8]) -> Result<()> {
        let full_path = self.path.join(path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(full_path, data)?;
        Ok(())
    }

    /// Delete a working-tree file if present. Missing files are fine: the
    /// user may already have deleted the path by hand.
    pub fn delete_file(&self, path: &Path) -> Result<()> {
        let full_path = self.path.join(path);
        if full_path.is_file() {
            std::fs::remove_file(full_path)?;
        }
        Ok(())
    }

    /// Every plain file in the working tree, relative to the root, with the
    /// state directory filtered out.
    pub fn list_files(&self) -> Result<Vec<PathBuf>> {
        let files = WalkDir::new(self.path.as_ref())
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter_map(|entry| self.check_if_not_ignored_file_path(entry.path()))
            .collect::<Vec<_>>();

        Ok(files)
    }

    fn is_ignored(path: &Path) -> bool {
        path.components().any(|component| {
            if let std::path::Component::Normal(name) = component {
                let name_str = name.to_string_lossy();
                IGNORED_PATHS.contains(&name_str.as_ref())
            } else {
                false
            }
        })
    }

    fn check_if_not_ignored_file_path(&self, path: &Path) -> Option<PathBuf> {
        let relative = path.strip_prefix(self.path.as_ref()).ok()?;
        if path.is_file() && !Self::is_ignored(relative) {
            Some(relative.to_path_buf())
        } else {
            None
        }
    }

    /// Materialize every file tracked by `commit` into the working tree.
    pub fn restore_all(&self, commit: &Commit, store: &ObjectStore) -> Result<()> {
        for (path, digest) in commit.files() {
            let blob = store.get(digest)?;
            self.write_file(path, blob.data())?;
        }
        Ok(())
    }

    /// Materialize a single tracked file from `commit`.
    pub fn restore_one(&self, commit: &Commit, path: &Path, store: &ObjectStore) -> Result<()> {
        let digest = commit
            .blob_digest(path)
            .ok_or_else(|| Error::FileNotInCommit(path.to_path_buf()))?;
        let blob = store.get(digest)?;
        self.write_file(path, blob.data())
    }

    /// Abort if switching from `from` to `to` would overwrite a file that
    /// `from` does not track. Checked before any destructive step, so a
    /// failure leaves the working tree untouched.
    pub fn ensure_unobstructed(&self, from: &Commit, to: &Commit) -> Result<()> {
        for path in to.files().keys() {
            if !from.tracks(path) && self.exists(path) {
                return Err(Error::UntrackedObstruction(path.clone()));
            }
        }
        Ok(())
    }

    /// Replace the working tree of `from` with that of `to`: obstruction
    /// check, then delete every `from`-tracked file, then restore all of
    /// `to`.
    pub fn safe_switch(&self, from: &Commit, to: &Commit, store: &ObjectStore) -> Result<()> {
        self.ensure_unobstructed(from, to)?;

        for path in from.files().keys() {
            self.delete_file(path)?;
        }

        self.restore_all(to, store)
    }
}
