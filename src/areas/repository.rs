//! Repository aggregate and persistence
//!
//! The repository owns one instance of every component and is loaded and
//! persisted as a single unit around each command invocation: load the full
//! state, perform exactly one operation, save the full state, exit. No
//! component retains state between invocations except through the snapshot.
//!
//! ## Persisted schema
//!
//! State lives at `.ark/repository.json` as an explicit, versioned
//! [`Snapshot`]: a `version` field plus the enumerated component fields.
//! Loading a snapshot with an unknown version fails instead of guessing.
//! Saves write a temp file next to the target and rename over it, so a crash
//! mid-save leaves the previous snapshot intact.

use crate::areas::branches::BranchTable;
use crate::areas::history::CommitGraph;
use crate::areas::object_store::ObjectStore;
use crate::areas::staging::StagingArea;
use crate::areas::workspace::Workspace;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::status::StatusInspector;
use crate::errors::{Error, Result};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::cell::{RefCell, RefMut};
use std::path::Path;

pub const STATE_DIR: &str = ".ark";
const STATE_FILE: &str = "repository.json";
const TEMP_STATE_FILE: &str = "repository.json.tmp";
const SCHEMA_VERSION: u32 = 1;

/// The persisted form of the repository, field by field.
#[derive(Serialize, Deserialize)]
struct Snapshot {
    version: u32,
    objects: ObjectStore,
    commits: CommitGraph,
    branches: BranchTable,
    staging: StagingArea,
}

/// Borrowed view of the aggregate, serialized on save without cloning.
#[derive(Serialize)]
struct SnapshotRef<'a> {
    version: u32,
    objects: &'a ObjectStore,
    commits: &'a CommitGraph,
    branches: &'a BranchTable,
    staging: &'a StagingArea,
}

pub struct Repository {
    path: Box<Path>,
    writer: RefCell<Box<dyn std::io::Write>>,
    workspace: Workspace,
    objects: ObjectStore,
    commits: CommitGraph,
    branches: BranchTable,
    staging: StagingArea,
}

impl Repository {
    /// Load the persisted repository rooted at `path`.
    ///
    /// Fails with [`Error::RepositoryMissing`] when no prior `init` persisted
    /// a snapshot there.
    pub fn open(path: &str, writer: Box<dyn std::io::Write>) -> anyhow::Result<Self> {
        let path = Path::new(path).canonicalize()?;
        let state_path = path.join(STATE_DIR).join(STATE_FILE);

        if !state_path.is_file() {
            return Err(Error::RepositoryMissing.into());
        }

        let raw = std::fs::read(&state_path)
            .with_context(|| format!("Unable to read repository state {}", state_path.display()))?;
        let snapshot: Snapshot =
            serde_json::from_slice(&raw).context("Unable to parse repository state")?;

        if snapshot.version != SCHEMA_VERSION {
            anyhow::bail!(
                "Unsupported repository schema version: {}",
                snapshot.version
            );
        }

        Ok(Self::assemble(path, writer, snapshot))
    }

    /// Build a fresh, empty aggregate rooted at `path`. Used by `init`, which
    /// seeds the root commit and master branch before the first save.
    pub(crate) fn bootstrap(
        path: Box<Path>,
        writer: Box<dyn std::io::Write>,
        root_commit: Commit,
        branch_name: &str,
    ) -> Self {
        let mut commits = CommitGraph::new();
        let branches = BranchTable::bootstrap(branch_name, root_commit.id().clone());
        commits.insert(root_commit);

        Repository {
            workspace: Workspace::new(path.clone()),
            path,
            writer: RefCell::new(writer),
            objects: ObjectStore::new(),
            commits,
            branches,
            staging: StagingArea::new(),
        }
    }

    fn assemble(
        path: std::path::PathBuf,
        writer: Box<dyn std::io::Write>,
        snapshot: Snapshot,
    ) -> Self {
        let path = path.into_boxed_path();
        Repository {
            workspace: Workspace::new(path.clone()),
            path,
            writer: RefCell::new(writer),
            objects: snapshot.objects,
            commits: snapshot.commits,
            branches: snapshot.branches,
            staging: snapshot.staging,
        }
    }

    /// Persist the full aggregate, atomically replacing the previous
    /// snapshot.
    pub fn save(&self) -> anyhow::Result<()> {
        let state_dir = self.path.join(STATE_DIR);
        let serialized = serde_json::to_vec(&SnapshotRef {
            version: SCHEMA_VERSION,
            objects: &self.objects,
            commits: &self.commits,
            branches: &self.branches,
            staging: &self.staging,
        })
        .context("Unable to serialize repository state")?;

        let temp_path = state_dir.join(TEMP_STATE_FILE);
        std::fs::write(&temp_path, &serialized)
            .with_context(|| format!("Unable to write {}", temp_path.display()))?;

        // rename over the previous snapshot to make the save atomic
        let state_path = state_dir.join(STATE_FILE);
        std::fs::rename(&temp_path, &state_path)
            .with_context(|| format!("Unable to replace {}", state_path.display()))?;

        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn objects(&self) -> &ObjectStore {
        &self.objects
    }

    pub fn objects_mut(&mut self) -> &mut ObjectStore {
        &mut self.objects
    }

    pub fn commits(&self) -> &CommitGraph {
        &self.commits
    }

    pub fn commits_mut(&mut self) -> &mut CommitGraph {
        &mut self.commits
    }

    pub fn branches(&self) -> &BranchTable {
        &self.branches
    }

    pub fn branches_mut(&mut self) -> &mut BranchTable {
        &mut self.branches
    }

    pub fn staging(&self) -> &StagingArea {
        &self.staging
    }

    pub fn staging_mut(&mut self) -> &mut StagingArea {
        &mut self.staging
    }

    /// The commit the active branch currently points at.
    pub fn head_commit(&self) -> Result<&Commit> {
        self.commits.get(self.branches.head_target())
    }

    pub fn status_inspector(&'_ self) -> StatusInspector<'_> {
        StatusInspector::new(self)
    }
}
