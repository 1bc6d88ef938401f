use crate::areas::repository::Repository;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::Error;

impl Repository {
    /// Record the staged changes as a new commit on the active branch.
    pub fn commit(&mut self, message: &str) -> anyhow::Result<()> {
        if self.staging().is_empty() {
            return Err(Error::NoChangesStaged.into());
        }

        let parent = self.branches().head_target().clone();
        self.commit_with_parents(message, vec![parent])?;

        Ok(())
    }

    /// Shared commit path for ordinary and merge commits.
    ///
    /// The child's tracked-file table is its first parent's table with the
    /// staging area applied: staged additions inserted, pending removals
    /// dropped. Advances the active branch and clears the staging area.
    pub(crate) fn commit_with_parents(
        &mut self,
        message: &str,
        parents: Vec<ObjectId>,
    ) -> anyhow::Result<ObjectId> {
        let mut files = self.commits().get(&parents[0])?.files().clone();
        for (path, digest) in self.staging().added() {
            files.insert(path.clone(), digest.clone());
        }
        for path in self.staging().removed() {
            files.remove(path);
        }

        let commit = Commit::new(
            message.to_string(),
            parents,
            chrono::Local::now().fixed_offset(),
            files,
        );
        let id = commit.id().clone();
        self.commits_mut().insert(commit);

        let head_name = self.branches().head_name().to_string();
        self.branches_mut().advance(&head_name, id.clone())?;
        self.staging_mut().clear();

        Ok(id)
    }
}
