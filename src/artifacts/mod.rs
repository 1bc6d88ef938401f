//! Data structures and algorithms
//!
//! - `merge`: split-point discovery and three-way resolution
//! - `objects`: object ids, blobs, commits
//! - `status`: working-tree status inspection

pub mod merge;
pub mod objects;
pub mod status;
