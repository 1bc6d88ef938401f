//! Core repository components
//!
//! The stateful building blocks the aggregate is assembled from:
//!
//! - `object_store`: content-addressed blob storage
//! - `history`: the commit graph
//! - `staging`: pending add/remove operations
//! - `branches`: named pointers and HEAD
//! - `workspace`: working-directory reconciliation
//! - `repository`: the coordinating aggregate and its persistence

pub mod branches;
pub mod history;
pub mod object_store;
pub mod repository;
pub mod staging;
pub mod workspace;
