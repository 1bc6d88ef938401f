//! ark: a local, single-user version-control engine
//!
//! A content-addressed object store layered with a commit history graph, a
//! staging area, named branch pointers, and a three-way merge engine. The
//! whole repository is one persisted aggregate: every invocation loads it,
//! performs a single operation, and saves it back.

pub mod areas;
pub mod artifacts;
pub mod commands;
pub mod errors;
