use crate::areas::repository::Repository;
use std::io::Write;

impl Repository {
    /// Print the ids of all commits with the given exact message.
    pub fn find(&self, message: &str) -> anyhow::Result<()> {
        let matches = self.commits().find_by_message(message);

        if matches.is_empty() {
            writeln!(self.writer(), "Found no commit with that message.")?;
            return Ok(());
        }

        let mut writer = self.writer();
        for id in matches {
            writeln!(writer, "{id}")?;
        }

        Ok(())
    }
}
