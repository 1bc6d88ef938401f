//! Commit object
//!
//! Commits are immutable snapshot records. Each one carries:
//! - Its own digest, computed once at creation
//! - An ordered list of parent digests (empty for the root commit, two for a
//!   merge commit with the HEAD-side parent first)
//! - A message and a creation timestamp
//! - The tracked-file table: a mapping from path to blob digest
//!
//! ## Identity
//!
//! The digest is a pure function of (message, parents, timestamp at second
//! granularity, sorted (path, digest) pairs). Two commits built from
//! identical inputs hash identically; the timestamp's granularity is what
//! keeps otherwise-identical commits apart across invocations.

use crate::artifacts::objects::object_id::ObjectId;
use serde::{Deserialize, Serialize};
use sha1::{Digest, Sha1};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Timestamp rendering used both for hashing and for log output.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Tracked-file table: path → blob digest, sorted by path.
pub type FileTable = BTreeMap<PathBuf, ObjectId>;

/// Immutable commit snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commit {
    id: ObjectId,
    parents: Vec<ObjectId>,
    message: String,
    timestamp: chrono::DateTime<chrono::FixedOffset>,
    files: FileTable,
}

impl Commit {
    /// Create a commit, computing its digest from the given fields.
    ///
    /// # Arguments
    ///
    /// * `parents` - Parent digests; empty for the root commit, two for a
    ///   merge commit (HEAD-side parent first)
    /// * `files` - The tracked-file table this commit snapshots
    pub fn new(
        message: String,
        parents: Vec<ObjectId>,
        timestamp: chrono::DateTime<chrono::FixedOffset>,
        files: FileTable,
    ) -> Self {
        let id = Self::compute_id(&message, &parents, &timestamp, &files);
        Commit {
            id,
            parents,
            message,
            timestamp,
            files,
        }
    }

    /// Create the root commit: no parents, empty file table.
    pub fn root(message: String, timestamp: chrono::DateTime<chrono::FixedOffset>) -> Self {
        Self::new(message, Vec::new(), timestamp, FileTable::new())
    }

    fn compute_id(
        message: &str,
        parents: &[ObjectId],
        timestamp: &chrono::DateTime<chrono::FixedOffset>,
        files: &FileTable,
    ) -> ObjectId {
        let mut hasher = Sha1::new();

        hasher.update(b"message ");
        hasher.update(message.as_bytes());
        hasher.update(b"\n");
        for parent in parents {
            hasher.update(b"parent ");
            hasher.update(parent.as_ref().as_bytes());
            hasher.update(b"\n");
        }
        hasher.update(b"time ");
        hasher.update(timestamp.format(TIMESTAMP_FORMAT).to_string().as_bytes());
        hasher.update(b"\n");
        // BTreeMap iteration keeps the (path, digest) pairs sorted
        for (path, digest) in files {
            hasher.update(b"file ");
            hasher.update(path.to_string_lossy().as_bytes());
            hasher.update(b" ");
            hasher.update(digest.as_ref().as_bytes());
            hasher.update(b"\n");
        }

        let oid = hasher.finalize();
        ObjectId::try_parse(format!("{oid:x}")).expect("SHA-1 output is always 40 hex chars")
    }

    pub fn id(&self) -> &ObjectId {
        &self.id
    }

    /// All parent digests, in order. The first entry is the HEAD-side parent
    /// for merge commits.
    pub fn parents(&self) -> &[ObjectId] {
        &self.parents
    }

    /// The first parent, used by linear history walks.
    pub fn first_parent(&self) -> Option<&ObjectId> {
        self.parents.first()
    }

    pub fn is_root(&self) -> bool {
        self.parents.is_empty()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn timestamp(&self) -> chrono::DateTime<chrono::FixedOffset> {
        self.timestamp
    }

    /// Format the creation time the way log output shows it.
    pub fn readable_timestamp(&self) -> String {
        self.timestamp.format(TIMESTAMP_FORMAT).to_string()
    }

    pub fn files(&self) -> &FileTable {
        &self.files
    }

    pub fn tracks(&self, path: &Path) -> bool {
        self.files.contains_key(path)
    }

    pub fn blob_digest(&self, path: &Path) -> Option<&ObjectId> {
        self.files.get(path)
    }
}
