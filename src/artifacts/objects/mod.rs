//! Repository object types
//!
//! - `object_id`: SHA-1 identifiers and prefix rules
//! - `blob`: content-addressed byte payloads
//! - `commit`: immutable snapshot records with multi-parent links

pub mod blob;
pub mod commit;
pub mod object_id;
