//! Transient UI membership sets
//!
//! Hover and selection are "happening" sets: identifiers currently in some
//! transient UI state. They are auxiliary indices over the entity map and
//! are never persisted.

use std::collections::HashSet;

use uuid::Uuid;

/// A set of entity identifiers currently in one transient UI state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HappeningSet {
    members: HashSet<Uuid>,
}

impl HappeningSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark an identifier; returns false if it was already marked
    pub fn mark(&mut self, uuid: Uuid) -> bool {
        self.members.insert(uuid)
    }

    /// Unmark an identifier; returns false if it was not marked
    pub fn unmark(&mut self, uuid: Uuid) -> bool {
        self.members.remove(&uuid)
    }

    /// Replace the entire membership.
    ///
    /// Identifiers absent from `uuids` are unmarked, new ones are marked —
    /// this is a full replace, not an additive merge.
    pub fn replace_all(&mut self, uuids: impl IntoIterator<Item = Uuid>) {
        self.members = uuids.into_iter().collect();
    }

    /// Drop members that fail the predicate
    pub fn retain(&mut self, keep: impl FnMut(&Uuid) -> bool) {
        self.members.retain(keep);
    }

    /// Whether an identifier is marked
    pub fn contains(&self, uuid: Uuid) -> bool {
        self.members.contains(&uuid)
    }

    /// Iterate over the marked identifiers (no meaningful order)
    pub fn iter(&self) -> impl Iterator<Item = Uuid> + '_ {
        self.members.iter().copied()
    }

    /// Number of marked identifiers
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether nothing is marked
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Unmark everything
    pub fn clear(&mut self) {
        self.members.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mark_unmark() {
        let mut set = HappeningSet::new();
        let a = Uuid::new_v4();
        assert!(set.mark(a));
        assert!(!set.mark(a));
        assert!(set.contains(a));
        assert!(set.unmark(a));
        assert!(!set.unmark(a));
        assert!(set.is_empty());
    }

    #[test]
    fn test_replace_all_is_a_full_replace() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let c = Uuid::new_v4();

        let mut set = HappeningSet::new();
        set.mark(a);
        set.mark(b);

        set.replace_all([b, c]);

        assert!(!set.contains(a));
        assert!(set.contains(b));
        assert!(set.contains(c));
        assert_eq!(set.len(), 2);
    }
}
