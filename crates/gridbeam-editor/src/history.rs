//! Undo/Redo history management

use std::collections::HashMap;

use gridbeam_core::Part;
use uuid::Uuid;

/// The canonical identifier -> part mapping
pub type EntityMap = HashMap<Uuid, Part>;

/// A snapshot of the entity map for undo/redo
#[derive(Debug, Clone)]
pub struct Snapshot {
    /// Entity map at snapshot time (structurally independent copy)
    pub entities: EntityMap,
    /// Description of the action that led to this state
    pub description: String,
}

/// Undo/redo history manager
#[derive(Debug)]
pub struct UndoHistory {
    /// Stack of states that can be undone
    undo_stack: Vec<Snapshot>,
    /// Stack of states that can be redone
    redo_stack: Vec<Snapshot>,
    /// Maximum number of history entries
    max_history: usize,
}

impl Default for UndoHistory {
    fn default() -> Self {
        Self::new(50)
    }
}

impl UndoHistory {
    /// Create a new history manager with the specified maximum entries
    pub fn new(max_history: usize) -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            max_history,
        }
    }

    /// Save the current state before an action
    pub fn save_state(&mut self, entities: &EntityMap, description: &str) {
        // A new action invalidates anything that was undone
        self.redo_stack.clear();

        self.undo_stack.push(Snapshot {
            entities: entities.clone(),
            description: description.to_string(),
        });

        if self.undo_stack.len() > self.max_history {
            self.undo_stack.remove(0);
        }
    }

    /// Undo the last action, returning the previous state
    ///
    /// The current state is pushed to the redo stack.
    pub fn undo(&mut self, current: &EntityMap) -> Option<Snapshot> {
        let previous = self.undo_stack.pop()?;
        self.redo_stack.push(Snapshot {
            entities: current.clone(),
            description: previous.description.clone(),
        });
        Some(previous)
    }

    /// Redo the last undone action, returning the restored state
    ///
    /// The current state is pushed to the undo stack.
    pub fn redo(&mut self, current: &EntityMap) -> Option<Snapshot> {
        let next = self.redo_stack.pop()?;
        self.undo_stack.push(Snapshot {
            entities: current.clone(),
            description: next.description.clone(),
        });
        Some(next)
    }

    /// Check if undo is available
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Check if redo is available
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Clear all history
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridbeam_core::{AxisDirection, GridPosition};

    fn map_with(length: u32) -> (EntityMap, Uuid) {
        let uuid = Uuid::new_v4();
        let mut map = EntityMap::new();
        map.insert(
            uuid,
            Part::beam(GridPosition::ZERO, AxisDirection::X, length),
        );
        (map, uuid)
    }

    #[test]
    fn test_undo_redo_round_trip() {
        let (before, uuid) = map_with(3);
        let mut after = before.clone();
        after.get_mut(&uuid).unwrap().length = 8;

        let mut history = UndoHistory::default();
        history.save_state(&before, "Stretch Beam");

        let restored = history.undo(&after).unwrap();
        assert_eq!(restored.entities[&uuid].length, 3);
        assert!(history.can_redo());

        let replayed = history.redo(&restored.entities).unwrap();
        assert_eq!(replayed.entities[&uuid].length, 8);
    }

    #[test]
    fn test_snapshots_do_not_alias_live_state() {
        let (mut map, uuid) = map_with(3);
        let mut history = UndoHistory::default();
        history.save_state(&map, "Edit");

        map.get_mut(&uuid).unwrap().length = 99;

        let restored = history.undo(&map).unwrap();
        assert_eq!(restored.entities[&uuid].length, 3);
    }

    #[test]
    fn test_new_action_clears_redo() {
        let (map, _) = map_with(3);
        let mut history = UndoHistory::default();
        history.save_state(&map, "First");
        history.undo(&map).unwrap();
        assert!(history.can_redo());

        history.save_state(&map, "Second");
        assert!(!history.can_redo());
    }

    #[test]
    fn test_history_is_bounded() {
        let (map, _) = map_with(3);
        let mut history = UndoHistory::new(2);
        history.save_state(&map, "One");
        history.save_state(&map, "Two");
        history.save_state(&map, "Three");

        assert!(history.undo(&map).is_some());
        assert!(history.undo(&map).is_some());
        assert!(history.undo(&map).is_none());
    }
}
