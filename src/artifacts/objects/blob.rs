//! Blob object
//!
//! A blob is an immutable byte payload identified by the SHA-1 digest of its
//! bytes. Identical content always hashes to the same digest, which is what
//! gives the object store its deduplication for free.

use crate::artifacts::objects::object_id::ObjectId;
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use sha1::{Digest, Sha1};

/// Immutable content-addressed byte payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Blob {
    data: Bytes,
}

impl Blob {
    pub fn new(data: Bytes) -> Self {
        Blob { data }
    }

    pub fn data(&self) -> &Bytes {
        &self.data
    }

    /// Compute the blob's identity: the SHA-1 digest of its bytes.
    pub fn digest(&self) -> ObjectId {
        let mut hasher = Sha1::new();
        hasher.update(&self.data);

        let oid = hasher.finalize();
        ObjectId::try_parse(format!("{oid:x}")).expect("SHA-1 output is always 40 hex chars")
    }
}

impl From<&str> for Blob {
    fn from(content: &str) -> Self {
        Blob::new(Bytes::copy_from_slice(content.as_bytes()))
    }
}
