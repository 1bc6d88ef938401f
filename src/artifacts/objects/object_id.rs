//! Object identifier (SHA-1 digest)
//!
//! Object IDs are 40-character lowercase hexadecimal strings. They identify
//! every blob and commit in the repository.
//!
//! ## Format
//!
//! - Full: 40 hex characters (e.g., "abc123...def")
//! - Short: first 7 characters, for display only
//! - User-supplied prefixes must be at least [`MIN_PREFIX_LENGTH`] characters

use serde::{Deserialize, Serialize};

/// Length of a full object ID in hex characters.
pub const OBJECT_ID_LENGTH: usize = 40;

/// Minimum number of characters a user-facing commit-id prefix must carry
/// before it is resolved against the commit graph.
pub const MIN_PREFIX_LENGTH: usize = 6;

/// SHA-1 object identifier
///
/// A validated 40-character hexadecimal string. Ordered lexicographically,
/// which the merge engine relies on for deterministic tie-breaking.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ObjectId(String);

impl ObjectId {
    /// Parse and validate an object ID from a string
    ///
    /// # Returns
    ///
    /// Validated ObjectId or error if invalid length/characters
    pub fn try_parse(id: String) -> anyhow::Result<Self> {
        if id.len() != OBJECT_ID_LENGTH {
            return Err(anyhow::anyhow!("Invalid object ID length: {}", id.len()));
        }
        if !id.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(anyhow::anyhow!("Invalid object ID characters: {}", id));
        }
        Ok(Self(id.to_lowercase()))
    }

    /// Get abbreviated form of the object ID
    ///
    /// # Returns
    ///
    /// First 7 characters of the digest
    pub fn to_short_oid(&self) -> String {
        self.0.split_at(7).0.to_string()
    }
}

impl TryFrom<String> for ObjectId {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_parse(value).map_err(|e| e.to_string())
    }
}

impl From<ObjectId> for String {
    fn from(id: ObjectId) -> Self {
        id.0
    }
}

impl AsRef<str> for ObjectId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ObjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_a_valid_object_id() {
        let id = ObjectId::try_parse("a".repeat(OBJECT_ID_LENGTH)).unwrap();
        assert_eq!(id.as_ref(), "a".repeat(OBJECT_ID_LENGTH));
    }

    #[test]
    fn rejects_wrong_length() {
        assert!(ObjectId::try_parse("abc123".to_string()).is_err());
    }

    #[test]
    fn rejects_non_hex_characters() {
        assert!(ObjectId::try_parse("z".repeat(OBJECT_ID_LENGTH)).is_err());
    }

    #[test]
    fn short_oid_is_seven_characters() {
        let id =
            ObjectId::try_parse("0123456789abcdef0123456789abcdef01234567".to_string()).unwrap();
        assert_eq!(id.to_short_oid(), "0123456");
    }
}
