use crate::areas::repository::Repository;
use std::io::Write;

impl Repository {
    /// Print the working-tree status report, section by section. The active
    /// branch is marked with a `*`; every section is sorted.
    pub fn status(&self) -> anyhow::Result<()> {
        let report = self.status_inspector().report()?;
        let mut writer = self.writer();

        writeln!(writer, "=== Branches ===")?;
        for branch in &report.branches {
            if branch == &report.active_branch {
                writeln!(writer, "*{branch}")?;
            } else {
                writeln!(writer, "{branch}")?;
            }
        }
        writeln!(writer)?;

        writeln!(writer, "=== Staged Files ===")?;
        for path in &report.staged {
            writeln!(writer, "{}", path.display())?;
        }
        writeln!(writer)?;

        writeln!(writer, "=== Removed Files ===")?;
        for path in &report.removed {
            writeln!(writer, "{}", path.display())?;
        }
        writeln!(writer)?;

        writeln!(writer, "=== Modifications Not Staged For Commit ===")?;
        for path in &report.deleted_not_staged {
            writeln!(writer, "{} (deleted)", path.display())?;
        }
        for path in &report.modified_not_staged {
            writeln!(writer, "{} (modified)", path.display())?;
        }
        writeln!(writer)?;

        writeln!(writer, "=== Untracked Files ===")?;
        for path in &report.untracked {
            writeln!(writer, "{}", path.display())?;
        }

        Ok(())
    }
}
