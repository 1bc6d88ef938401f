use crate::areas::repository::Repository;
use crate::artifacts::objects::commit::Commit;
use colored::Colorize;
use std::io::Write;

impl Repository {
    /// Print each commit from HEAD back to the root, following first-parent
    /// links.
    pub fn log(&self) -> anyhow::Result<()> {
        let chain = self
            .commits()
            .first_parent_chain(self.branches().head_target())?;

        for commit in chain {
            self.write_log_block(commit)?;
        }

        Ok(())
    }

    /// Print every commit ever made, in no particular order.
    pub fn global_log(&self) -> anyhow::Result<()> {
        for commit in self.commits().iter() {
            self.write_log_block(commit)?;
        }

        Ok(())
    }

    fn write_log_block(&self, commit: &Commit) -> anyhow::Result<()> {
        let mut writer = self.writer();

        writeln!(writer, "===")?;
        writeln!(writer, "Commit {}", commit.id().as_ref().yellow())?;
        writeln!(writer, "{}", commit.readable_timestamp())?;
        writeln!(writer, "{}", commit.message())?;
        writeln!(writer)?;

        Ok(())
    }
}
