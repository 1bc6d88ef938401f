//! Commit graph
//!
//! Every commit ever created, keyed by digest. Commits form a DAG through
//! their parent links; branch pointers select tips within it. The graph also
//! answers the user-facing lookups: digest-prefix resolution for short ids
//! and exact-message search for `find`.

use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::{ObjectId, MIN_PREFIX_LENGTH};
use crate::errors::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct CommitGraph {
    commits: BTreeMap<ObjectId, Commit>,
}

impl CommitGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, commit: Commit) {
        self.commits.insert(commit.id().clone(), commit);
    }

    /// Look up a commit by its full digest.
    ///
    /// Only called with digests taken from branch pointers or parent links,
    /// so a miss means the graph is corrupt.
    pub fn get(&self, id: &ObjectId) -> Result<&Commit> {
        self.commits
            .get(id)
            .ok_or_else(|| Error::ObjectMissing(id.clone()))
    }

    pub fn contains(&self, id: &ObjectId) -> bool {
        self.commits.contains_key(id)
    }

    /// Resolve a user-supplied digest prefix to a single commit.
    ///
    /// The prefix must be at least [`MIN_PREFIX_LENGTH`] characters and match
    /// exactly one commit; zero or multiple matches fail the same way. This
    /// is an explicit contract, not an artifact of iteration order.
    pub fn resolve_prefix(&self, prefix: &str) -> Result<&Commit> {
        if prefix.len() < MIN_PREFIX_LENGTH {
            return Err(Error::AmbiguousOrNotFound(prefix.to_string()));
        }

        let prefix = prefix.to_lowercase();
        let mut matches = self
            .commits
            .iter()
            .filter(|(id, _)| id.as_ref().starts_with(&prefix))
            .map(|(_, commit)| commit);

        match (matches.next(), matches.next()) {
            (Some(commit), None) => Ok(commit),
            _ => Err(Error::AmbiguousOrNotFound(prefix)),
        }
    }

    /// Walk first-parent links from `tip` back to the root.
    ///
    /// Merge commits contribute only their HEAD-side parent to this chain;
    /// the full DAG is visible to the merge engine instead.
    pub fn first_parent_chain(&self, tip: &ObjectId) -> Result<Vec<&Commit>> {
        let mut chain = Vec::new();
        let mut cursor = Some(tip.clone());

        while let Some(id) = cursor {
            let commit = self.get(&id)?;
            cursor = commit.first_parent().cloned();
            chain.push(commit);
        }

        Ok(chain)
    }

    /// All commits, in digest order.
    pub fn iter(&self) -> impl Iterator<Item = &Commit> {
        self.commits.values()
    }

    /// Digests of every commit whose message matches `message` exactly.
    pub fn find_by_message(&self, message: &str) -> BTreeSet<&ObjectId> {
        self.commits
            .values()
            .filter(|commit| commit.message() == message)
            .map(|commit| commit.id())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifacts::objects::commit::FileTable;
    use pretty_assertions::assert_eq;

    fn fixed_time(second: u32) -> chrono::DateTime<chrono::FixedOffset> {
        chrono::DateTime::parse_from_str(
            &format!("2024-05-01 09:30:{second:02} +0000"),
            "%Y-%m-%d %H:%M:%S %z",
        )
        .unwrap()
    }

    fn linear_graph(depth: u32) -> (CommitGraph, Vec<ObjectId>) {
        let mut graph = CommitGraph::new();
        let mut ids = Vec::new();

        let root = Commit::root("initial commit".to_string(), fixed_time(0));
        ids.push(root.id().clone());
        graph.insert(root);

        for i in 1..depth {
            let commit = Commit::new(
                format!("commit {i}"),
                vec![ids[(i - 1) as usize].clone()],
                fixed_time(i),
                FileTable::new(),
            );
            ids.push(commit.id().clone());
            graph.insert(commit);
        }

        (graph, ids)
    }

    #[test]
    fn chain_runs_from_tip_to_root() {
        let (graph, ids) = linear_graph(4);

        let chain = graph.first_parent_chain(&ids[3]).unwrap();
        let chain_ids: Vec<_> = chain.iter().map(|c| c.id().clone()).collect();

        assert_eq!(
            chain_ids,
            vec![ids[3].clone(), ids[2].clone(), ids[1].clone(), ids[0].clone()]
        );
    }

    #[test]
    fn resolves_a_unique_prefix() {
        let (graph, ids) = linear_graph(3);
        let full = ids[1].as_ref();

        // the longest unambiguous prefix trivially resolves
        let resolved = graph.resolve_prefix(&full[..8]).unwrap();
        assert_eq!(resolved.id(), &ids[1]);
    }

    #[test]
    fn rejects_prefixes_shorter_than_the_minimum() {
        let (graph, ids) = linear_graph(2);
        let err = graph.resolve_prefix(&ids[0].as_ref()[..5]).unwrap_err();
        assert!(matches!(err, Error::AmbiguousOrNotFound(_)));
    }

    #[test]
    fn rejects_an_unknown_prefix() {
        let (graph, _) = linear_graph(2);
        let err = graph.resolve_prefix("ffffff").unwrap_err();
        assert!(matches!(err, Error::AmbiguousOrNotFound(_)));
    }

    #[test]
    fn finds_commits_by_exact_message() {
        let (graph, ids) = linear_graph(3);

        let found = graph.find_by_message("commit 1");
        assert_eq!(found.into_iter().collect::<Vec<_>>(), vec![&ids[1]]);

        assert!(graph.find_by_message("commit").is_empty());
    }
}
