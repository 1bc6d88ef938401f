use crate::areas::repository::Repository;
use crate::errors::Error;
use std::path::Path;

impl Repository {
    /// Stage a working-tree file for the next commit.
    ///
    /// A pending removal of the same path is cancelled instead of staging.
    /// A file whose content matches HEAD's tracked version is not staged,
    /// and a stale staged entry for it is dropped, so re-adding an unchanged
    /// file is a no-op.
    pub fn add(&mut self, path: &Path) -> anyhow::Result<()> {
        if !self.workspace().exists(path) {
            return Err(Error::FileNotFound(path.to_path_buf()).into());
        }

        if self.staging_mut().cancel_removal(path) {
            return Ok(());
        }

        let blob = self.workspace().parse_blob(path)?;
        let digest = blob.digest();

        if self.head_commit()?.blob_digest(path) == Some(&digest) {
            self.staging_mut().unstage(path);
            return Ok(());
        }

        self.objects_mut().put(blob);
        self.staging_mut().stage(path.to_path_buf(), digest);

        Ok(())
    }
}
