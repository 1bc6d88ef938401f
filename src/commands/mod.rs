//! User-facing repository operations
//!
//! Each file implements one operation on [`crate::areas::repository::Repository`]
//! and writes its human-readable output through the repository's injected
//! writer. The binary loads the persisted aggregate, invokes exactly one of
//! these, and saves the mutated aggregate back.
//!
//! ## Operations
//!
//! - `init`: create a repository with a root commit and "master"
//! - `add` / `rm`: stage additions and removals
//! - `commit`: snapshot the staged changes
//! - `log` / `find`: history inspection
//! - `status`: working-tree report
//! - `checkout`: switch branches or restore files
//! - `branch` / `reset`: pointer management
//! - `merge`: three-way merge with conflict materialization

pub mod add;
pub mod branch;
pub mod checkout;
pub mod commit;
pub mod find;
pub mod init;
pub mod log;
pub mod merge;
pub mod reset;
pub mod rm;
pub mod status;
