use crate::areas::repository::Repository;
use crate::artifacts::merge::resolution::{self, MergeAction};
use crate::artifacts::merge::split_finder::SplitFinder;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::Error;
use std::io::Write;

impl Repository {
    /// Merge another branch into the active one.
    ///
    /// Preconditions, first failure wins: the branch exists, nothing is
    /// staged, no untracked file obstructs the incoming snapshot, and the
    /// branch is not the active one. A failed precondition aborts with no
    /// mutation.
    ///
    /// When one tip is an ancestor of the other the merge short-circuits
    /// without a merge commit. Otherwise every file is classified three-ways
    /// against the split point; a clean resolution auto-commits with both
    /// parents recorded, while any conflict leaves marker blocks and the
    /// staged non-conflicting changes in place for manual resolution.
    pub fn merge(&mut self, branch_name: &str) -> anyhow::Result<()> {
        let target_id = self.branches().get(branch_name)?.target().clone();
        if !self.staging().is_empty() {
            return Err(Error::UncommittedChanges.into());
        }

        let head_id = self.branches().head_target().clone();
        {
            let head = self.commits().get(&head_id)?;
            let target = self.commits().get(&target_id)?;
            self.workspace().ensure_unobstructed(head, target)?;
        }

        if branch_name == self.branches().head_name() {
            return Err(Error::SelfMerge.into());
        }

        let split_id = {
            let graph = self.commits();
            let finder = SplitFinder::new(|id: &ObjectId| {
                graph
                    .get(id)
                    .map(|commit| commit.parents().to_vec())
                    .unwrap_or_default()
            });
            finder
                .find(&head_id, &target_id)
                .ok_or_else(|| anyhow::anyhow!("no common ancestor between HEAD and target"))?
        };

        if split_id == target_id {
            writeln!(
                self.writer(),
                "Given branch is an ancestor of the current branch."
            )?;
            return Ok(());
        }

        if split_id == head_id {
            return self.fast_forward(target_id);
        }

        let actions = {
            let split = self.commits().get(&split_id)?;
            let head = self.commits().get(&head_id)?;
            let target = self.commits().get(&target_id)?;
            resolution::three_way(split.files(), head.files(), target.files())
        };

        let mut conflicted = false;
        for action in actions {
            match action {
                MergeAction::Take { path, digest } => {
                    let data = self.objects().get(&digest)?.data().clone();
                    self.workspace().write_file(&path, &data)?;
                    self.staging_mut().stage(path, digest);
                }
                MergeAction::Delete { path } => {
                    self.workspace().delete_file(&path)?;
                    self.staging_mut().mark_removed(path);
                }
                MergeAction::Conflict { path, head, target } => {
                    conflicted = true;
                    let block = {
                        let head_blob =
                            head.as_ref().map(|digest| self.objects().get(digest)).transpose()?;
                        let target_blob = target
                            .as_ref()
                            .map(|digest| self.objects().get(digest))
                            .transpose()?;
                        resolution::render_conflict(head_blob, target_blob)
                    };
                    self.workspace().write_file(&path, &block)?;
                }
            }
        }

        if conflicted {
            // not an abort: the conflict markers and staged resolutions
            // persist for the user to finish by hand
            writeln!(self.writer(), "Encountered a merge conflict.")?;
            return Ok(());
        }

        let head_name = self.branches().head_name().to_string();
        let message = format!("Merged {head_name} with {branch_name}.");
        self.commit_with_parents(&message, vec![head_id, target_id])?;

        Ok(())
    }

    /// Advance the HEAD branch pointer straight to the target tip and
    /// materialize its files. No merge commit is produced.
    fn fast_forward(&mut self, target_id: ObjectId) -> anyhow::Result<()> {
        {
            let head = self.head_commit()?;
            let target = self.commits().get(&target_id)?;
            self.workspace().safe_switch(head, target, self.objects())?;
        }

        let head_name = self.branches().head_name().to_string();
        self.branches_mut().advance(&head_name, target_id)?;
        self.staging_mut().clear();

        writeln!(self.writer(), "Current branch fast-forwarded.")?;

        Ok(())
    }
}
