use crate::areas::repository::Repository;

impl Repository {
    /// Create a new branch pointing at HEAD's current commit. The working
    /// tree and HEAD designation are untouched.
    pub fn branch(&mut self, name: &str) -> anyhow::Result<()> {
        let target = self.branches().head_target().clone();
        self.branches_mut().create(name, target)?;

        Ok(())
    }

    /// Delete a branch pointer. The commits it pointed at remain in the
    /// graph.
    pub fn remove_branch(&mut self, name: &str) -> anyhow::Result<()> {
        self.branches_mut().delete(name)?;

        Ok(())
    }
}
