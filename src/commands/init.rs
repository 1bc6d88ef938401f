use crate::areas::repository::{Repository, STATE_DIR};
use crate::artifacts::objects::commit::Commit;
use crate::errors::Error;
use std::path::Path;

pub const INITIAL_COMMIT_MESSAGE: &str = "initial commit";
pub const DEFAULT_BRANCH: &str = "master";

impl Repository {
    /// Create a new repository: one root commit and one branch "master"
    /// designated HEAD. The first `save` persists the snapshot.
    pub fn init(path: &str, writer: Box<dyn std::io::Write>) -> anyhow::Result<Self> {
        let path = Path::new(path).canonicalize()?;
        let state_dir = path.join(STATE_DIR);

        if state_dir.exists() {
            return Err(Error::RepositoryExists.into());
        }
        std::fs::create_dir_all(&state_dir)?;

        let root = Commit::root(
            INITIAL_COMMIT_MESSAGE.to_string(),
            chrono::Local::now().fixed_offset(),
        );

        Ok(Repository::bootstrap(
            path.into_boxed_path(),
            writer,
            root,
            DEFAULT_BRANCH,
        ))
    }
}
