//! Branch table and HEAD designation
//!
//! Branches are named mutable pointers into the commit graph. Exactly one
//! branch name is designated HEAD at any time; deleting that branch is
//! forbidden. Pointers advance on commit, reset, and fast-forward merge.

use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::{Error, Result};
use derive_new::new;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Named pointer to a commit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, new)]
pub struct Branch {
    name: String,
    target: ObjectId,
}

impl Branch {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn target(&self) -> &ObjectId {
        &self.target
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BranchTable {
    branches: BTreeMap<String, Branch>,
    head: String,
}

impl BranchTable {
    /// Create the table with a single branch designated as HEAD.
    pub fn bootstrap(name: &str, target: ObjectId) -> Self {
        let mut branches = BTreeMap::new();
        branches.insert(name.to_string(), Branch::new(name.to_string(), target));
        BranchTable {
            branches,
            head: name.to_string(),
        }
    }

    /// Create a new branch pointing at the given commit.
    pub fn create(&mut self, name: &str, target: ObjectId) -> Result<()> {
        if self.branches.contains_key(name) {
            return Err(Error::BranchExists(name.to_string()));
        }
        self.branches
            .insert(name.to_string(), Branch::new(name.to_string(), target));
        Ok(())
    }

    /// Delete a branch. The active branch cannot be deleted.
    pub fn delete(&mut self, name: &str) -> Result<()> {
        if !self.branches.contains_key(name) {
            return Err(Error::BranchNotFound(name.to_string()));
        }
        if name == self.head {
            return Err(Error::CannotRemoveActive);
        }
        self.branches.remove(name);
        Ok(())
    }

    /// Repoint a branch at a new commit.
    pub fn advance(&mut self, name: &str, target: ObjectId) -> Result<()> {
        let branch = self
            .branches
            .get_mut(name)
            .ok_or_else(|| Error::BranchNotFound(name.to_string()))?;
        branch.target = target;
        Ok(())
    }

    pub fn get(&self, name: &str) -> Result<&Branch> {
        self.branches
            .get(name)
            .ok_or_else(|| Error::BranchNotFound(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.branches.contains_key(name)
    }

    pub fn head_name(&self) -> &str {
        &self.head
    }

    /// The commit the active branch points at.
    pub fn head_target(&self) -> &ObjectId {
        // HEAD always names an existing branch; switching validates first
        self.branches[&self.head].target()
    }

    pub fn set_head(&mut self, name: &str) {
        debug_assert!(self.branches.contains_key(name));
        self.head = name.to_string();
    }

    /// All branches, sorted by name.
    pub fn iter(&self) -> impl Iterator<Item = &Branch> {
        self.branches.values()
    }
}
