use crate::areas::repository::Repository;
use crate::errors::Error;
use std::path::Path;

impl Repository {
    /// Switch the working tree and HEAD to another branch.
    ///
    /// Aborts with no side effects when an untracked file would be
    /// overwritten. Clears the staging area on success.
    pub fn checkout_branch(&mut self, name: &str) -> anyhow::Result<()> {
        let target_id = self.branches().get(name)?.target().clone();
        if name == self.branches().head_name() {
            return Err(Error::AlreadyOnBranch.into());
        }

        {
            let head = self.head_commit()?;
            let target = self.commits().get(&target_id)?;
            self.workspace().safe_switch(head, target, self.objects())?;
        }

        self.branches_mut().set_head(name);
        self.staging_mut().clear();

        Ok(())
    }

    /// Restore a single file from HEAD's snapshot.
    pub fn checkout_file_from_head(&self, path: &Path) -> anyhow::Result<()> {
        let head = self.head_commit()?;
        self.workspace().restore_one(head, path, self.objects())?;

        Ok(())
    }

    /// Restore a single file from the commit a digest prefix resolves to.
    pub fn checkout_file_from_commit(&self, id_prefix: &str, path: &Path) -> anyhow::Result<()> {
        let commit = self.commits().resolve_prefix(id_prefix)?;
        self.workspace().restore_one(commit, path, self.objects())?;

        Ok(())
    }
}
