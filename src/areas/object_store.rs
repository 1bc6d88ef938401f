//! Content-addressed object store
//!
//! Blobs are keyed by the digest of their bytes. Storing the same content
//! twice is a no-op, so `put` is idempotent and identical files across
//! commits share a single stored copy. Nothing is ever deleted: blobs are
//! retained for the lifetime of the repository (no-op reference counting is
//! an accepted limitation of this design).

use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ObjectStore {
    blobs: BTreeMap<ObjectId, Blob>,
}

impl ObjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a blob under the digest of its bytes, unless already present.
    ///
    /// # Returns
    ///
    /// The blob's digest, whether or not it was newly stored.
    pub fn put(&mut self, blob: Blob) -> ObjectId {
        let digest = blob.digest();
        self.blobs.entry(digest.clone()).or_insert(blob);
        digest
    }

    /// Look up a blob by digest.
    ///
    /// Failing here means the store is corrupt or an internal invariant was
    /// broken; callers only ever ask for digests recorded in a commit's
    /// tracked-file table or the staging area.
    pub fn get(&self, digest: &ObjectId) -> Result<&Blob> {
        self.blobs
            .get(digest)
            .ok_or_else(|| Error::ObjectMissing(digest.clone()))
    }

    pub fn contains(&self, digest: &ObjectId) -> bool {
        self.blobs.contains_key(digest)
    }

    pub fn len(&self) -> usize {
        self.blobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blobs.is_empty()
    }
}
