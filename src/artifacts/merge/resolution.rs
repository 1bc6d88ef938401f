//! Three-way per-file merge resolution
//!
//! Classifies every path known to the split point, HEAD, or the target
//! branch by comparing blob digests across the three tracked-file tables,
//! and produces the action to take per path. Presence alone is never enough:
//! a path tracked by all three tables still conflicts when both sides
//! changed it differently.
//!
//! Conflicting files are rewritten in place as a marker block holding both
//! versions, pending manual resolution:
//!
//! ```text
//! <<<<<<< HEAD
//! <HEAD's content>
//! =======
//! <target's content>
//! >>>>>>>
//! ```
//!
//! A side that has no version of the file contributes no line between its
//! markers.

use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::commit::FileTable;
use crate::artifacts::objects::object_id::ObjectId;
use bytes::Bytes;
use std::collections::BTreeSet;
use std::path::PathBuf;

const CONFLICT_HEADER: &str = "<<<<<<< HEAD";
const CONFLICT_SEPARATOR: &str = "=======";
const CONFLICT_FOOTER: &str = ">>>>>>>";

/// Per-path outcome of the three-way classification
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergeAction {
    /// Take the target branch's version and stage it.
    Take { path: PathBuf, digest: ObjectId },
    /// Delete the file and stage the removal.
    Delete { path: PathBuf },
    /// Both sides disagree; materialize a conflict block from the two
    /// versions (either side may be absent).
    Conflict {
        path: PathBuf,
        head: Option<ObjectId>,
        target: Option<ObjectId>,
    },
}

/// Classify every path across the split / HEAD / target tables.
///
/// Unchanged, HEAD-only, and identical-on-both-sides paths produce no
/// action. Actions come out in path order.
pub fn three_way(split: &FileTable, head: &FileTable, target: &FileTable) -> Vec<MergeAction> {
    let paths: BTreeSet<&PathBuf> = split
        .keys()
        .chain(head.keys())
        .chain(target.keys())
        .collect();

    paths
        .into_iter()
        .filter_map(|path| {
            classify(split.get(path), head.get(path), target.get(path))
                .map(|kind| kind.into_action(path.clone()))
        })
        .collect()
}

/// Path-independent classification of one (split, head, target) digest
/// triple.
enum ActionKind {
    Take(ObjectId),
    Delete,
    Conflict(Option<ObjectId>, Option<ObjectId>),
}

impl ActionKind {
    fn into_action(self, path: PathBuf) -> MergeAction {
        match self {
            ActionKind::Take(digest) => MergeAction::Take { path, digest },
            ActionKind::Delete => MergeAction::Delete { path },
            ActionKind::Conflict(head, target) => MergeAction::Conflict { path, head, target },
        }
    }
}

fn classify(
    split: Option<&ObjectId>,
    head: Option<&ObjectId>,
    target: Option<&ObjectId>,
) -> Option<ActionKind> {
    match (split, head, target) {
        // present at the split and on both sides
        (Some(s), Some(h), Some(g)) => {
            if h == g {
                // unchanged, or both sides made the identical change
                None
            } else if s == h {
                // only the target modified it
                Some(ActionKind::Take(g.clone()))
            } else if s == g {
                // only HEAD modified it
                None
            } else {
                Some(ActionKind::Conflict(Some(h.clone()), Some(g.clone())))
            }
        }
        // the target deleted it
        (Some(s), Some(h), None) => {
            if s == h {
                Some(ActionKind::Delete)
            } else {
                Some(ActionKind::Conflict(Some(h.clone()), None))
            }
        }
        // HEAD deleted it
        (Some(s), None, Some(g)) => {
            if s == g {
                None
            } else {
                Some(ActionKind::Conflict(None, Some(g.clone())))
            }
        }
        // both sides deleted it
        (Some(_), None, None) => None,
        // the target added it, untouched by HEAD
        (None, None, Some(g)) => Some(ActionKind::Take(g.clone())),
        // HEAD added it, untouched by the target
        (None, Some(_), None) => None,
        // both sides added it
        (None, Some(h), Some(g)) => {
            if h == g {
                None
            } else {
                Some(ActionKind::Conflict(Some(h.clone()), Some(g.clone())))
            }
        }
        (None, None, None) => None,
    }
}

/// Render the textual conflict block for two irreconcilable versions.
pub fn render_conflict(head: Option<&Blob>, target: Option<&Blob>) -> Bytes {
    let mut lines: Vec<String> = vec![CONFLICT_HEADER.to_string()];

    if let Some(blob) = head {
        lines.push(String::from_utf8_lossy(blob.data()).to_string());
    }
    lines.push(CONFLICT_SEPARATOR.to_string());
    if let Some(blob) = target {
        lines.push(String::from_utf8_lossy(blob.data()).to_string());
    }
    lines.push(CONFLICT_FOOTER.to_string());

    let mut block = lines.join("\n");
    block.push('\n');
    Bytes::from(block)
}
