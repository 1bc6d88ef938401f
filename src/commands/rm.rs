use crate::areas::repository::Repository;
use crate::errors::Error;
use std::path::Path;

impl Repository {
    /// Unstage a pending addition and/or remove a HEAD-tracked file.
    ///
    /// A tracked file is deleted from the working tree and its removal
    /// staged, so the next commit's table omits it. Both conditions can
    /// apply at once; neither applying is an error.
    pub fn rm(&mut self, path: &Path) -> anyhow::Result<()> {
        let unstaged = self.staging_mut().unstage(path);

        let tracked = self.head_commit()?.tracks(path);
        if tracked {
            self.workspace().delete_file(path)?;
            self.staging_mut().mark_removed(path.to_path_buf());
        }

        if !unstaged && !tracked {
            return Err(Error::NothingToRemove(path.to_path_buf()).into());
        }

        Ok(())
    }
}
