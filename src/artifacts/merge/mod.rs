//! Merge algorithms
//!
//! - `split_finder`: common-ancestor (split point) discovery over the commit DAG
//! - `resolution`: three-way per-file classification and conflict rendering

pub mod resolution;
pub mod split_finder;
