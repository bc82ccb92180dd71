//! Diff Entity
//!
//! Path-level difference between two revisions.

use std::collections::BTreeSet;

use crate::domain::value_objects::Revision;

/// Changed and deleted paths between `from` and `to`
///
/// Invariant: `changed ∩ deleted = ∅`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diff {
    from: Revision,
    to: Revision,
    changed: BTreeSet<String>,
    deleted: BTreeSet<String>,
}

impl Diff {
    /// Build a diff, dropping from `deleted` any path that is also changed.
    ///
    /// A path present at `to` must be written, never removed.
    pub fn new(
        from: Revision,
        to: Revision,
        changed: impl IntoIterator<Item = String>,
        deleted: impl IntoIterator<Item = String>,
    ) -> Self {
        let changed: BTreeSet<String> = changed.into_iter().collect();
        let deleted = deleted
            .into_iter()
            .filter(|p| !changed.contains(p))
            .collect();
        Self {
            from,
            to,
            changed,
            deleted,
        }
    }

    pub fn from_revision(&self) -> &Revision {
        &self.from
    }

    pub fn to_revision(&self) -> &Revision {
        &self.to
    }

    pub fn changed(&self) -> &BTreeSet<String> {
        &self.changed
    }

    pub fn deleted(&self) -> &BTreeSet<String> {
        &self.deleted
    }

    /// Both revisions are identical
    pub fn is_same_revision(&self) -> bool {
        self.from == self.to
    }

    /// No path changed or deleted
    pub fn is_empty(&self) -> bool {
        self.changed.is_empty() && self.deleted.is_empty()
    }
}
