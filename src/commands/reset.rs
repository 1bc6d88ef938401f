use crate::areas::repository::Repository;

impl Repository {
    /// Move the active branch to the commit a digest prefix resolves to and
    /// materialize that snapshot, with the same overwrite-safety as a branch
    /// switch. Clears the staging area on success.
    pub fn reset(&mut self, id_prefix: &str) -> anyhow::Result<()> {
        let target_id = self.commits().resolve_prefix(id_prefix)?.id().clone();

        {
            let head = self.head_commit()?;
            let target = self.commits().get(&target_id)?;
            self.workspace().safe_switch(head, target, self.objects())?;
        }

        let head_name = self.branches().head_name().to_string();
        self.branches_mut().advance(&head_name, target_id)?;
        self.staging_mut().clear();

        Ok(())
    }
}
