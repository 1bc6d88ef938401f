//! Split-point discovery for merges
//!
//! The split point (merge base) of two branch tips is the common ancestor
//! closest to both: the commit minimizing the sum of its graph distances
//! from each tip. Distances are measured over every parent link, so merge
//! commits contribute both sides of their history. Wall-clock time plays no
//! part in the ordering; it collides and disorders under skew.
//!
//! Ties between equally-close common ancestors (possible in symmetric
//! synthetic histories) resolve deterministically to the smallest digest.
//!
//! The finder is generic over a parent loader so it can walk any commit
//! source: the repository's graph in production, a plain map in tests.

use crate::artifacts::objects::object_id::ObjectId;
use std::collections::{HashMap, VecDeque};

pub struct SplitFinder<ParentLoaderFn>
where
    ParentLoaderFn: Fn(&ObjectId) -> Vec<ObjectId>,
{
    parents_of: ParentLoaderFn,
}

impl<ParentLoaderFn> SplitFinder<ParentLoaderFn>
where
    ParentLoaderFn: Fn(&ObjectId) -> Vec<ObjectId>,
{
    pub fn new(parents_of: ParentLoaderFn) -> Self {
        Self { parents_of }
    }

    /// Find the split point of `head` and `target`.
    ///
    /// Returns `None` only when the tips share no ancestor, which cannot
    /// happen for commits created through `init` (every commit descends from
    /// the single root).
    pub fn find(&self, head: &ObjectId, target: &ObjectId) -> Option<ObjectId> {
        let head_distances = self.distances_from(head);
        let target_distances = self.distances_from(target);

        head_distances
            .iter()
            .filter_map(|(id, head_distance)| {
                target_distances
                    .get(id)
                    .map(|target_distance| (head_distance + target_distance, id.clone()))
            })
            // min over (combined distance, digest) is the tie-break contract
            .min()
            .map(|(_, id)| id)
    }

    /// Breadth-first walk over parent links, recording the minimum distance
    /// from `tip` to every reachable commit.
    fn distances_from(&self, tip: &ObjectId) -> HashMap<ObjectId, u32> {
        let mut distances = HashMap::new();
        let mut queue = VecDeque::new();

        distances.insert(tip.clone(), 0u32);
        queue.push_back(tip.clone());

        while let Some(commit_id) = queue.pop_front() {
            let next_distance = distances[&commit_id] + 1;

            for parent_id in (self.parents_of)(&commit_id) {
                let known = distances.get(&parent_id).copied();
                if known.map_or(true, |d| next_distance < d) {
                    distances.insert(parent_id.clone(), next_distance);
                    queue.push_back(parent_id);
                }
            }
        }

        distances
    }
}
