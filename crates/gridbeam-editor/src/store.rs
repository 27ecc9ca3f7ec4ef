//! Part entity store
//!
//! Owns the canonical identifier -> part mapping, the hover/select sets,
//! the drag-transition flag, and the undo/redo history.

use gridbeam_core::Part;
use thiserror::Error;
use uuid::Uuid;

use crate::happening::HappeningSet;
use crate::history::{EntityMap, UndoHistory};
use crate::update::{PartUpdate, apply_updates};

/// Part store errors. These indicate caller bugs, not recoverable
/// conditions: updates never reference identifiers the UI did not get from
/// this store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("part not found: {0}")]
    PartNotFound(Uuid),

    #[error("no model has been loaded")]
    NotLoaded,
}

/// The authoritative in-memory collection of part entities.
///
/// `entities` stays unset until the first load installs a model; every
/// identifier is generated here, at insertion time.
#[derive(Debug)]
pub struct PartsState {
    entities: Option<EntityMap>,
    hovered: HappeningSet,
    selected: HappeningSet,
    is_moving: bool,
    history: UndoHistory,
}

impl Default for PartsState {
    fn default() -> Self {
        Self::new()
    }
}

impl PartsState {
    /// Create an empty store with default history capacity
    pub fn new() -> Self {
        Self::with_history(UndoHistory::default())
    }

    /// Create an empty store with the given history manager
    pub fn with_history(history: UndoHistory) -> Self {
        Self {
            entities: None,
            hovered: HappeningSet::new(),
            selected: HappeningSet::new(),
            is_moving: false,
            history,
        }
    }

    // ============== Reads ==============

    /// Whether a model has been installed
    pub fn is_loaded(&self) -> bool {
        self.entities.is_some()
    }

    /// Iterate over all parts with their identifiers
    pub fn parts(&self) -> impl Iterator<Item = (Uuid, &Part)> {
        self.entities
            .iter()
            .flat_map(|map| map.iter().map(|(uuid, part)| (*uuid, part)))
    }

    /// Look up one part
    pub fn part(&self, uuid: Uuid) -> Option<&Part> {
        self.entities.as_ref()?.get(&uuid)
    }

    /// Number of parts
    pub fn part_count(&self) -> usize {
        self.entities.as_ref().map_or(0, EntityMap::len)
    }

    /// The hovered set
    pub fn hovered(&self) -> &HappeningSet {
        &self.hovered
    }

    /// The selected set
    pub fn selected(&self) -> &HappeningSet {
        &self.selected
    }

    /// Whether a drag transition is in progress
    pub fn is_moving(&self) -> bool {
        self.is_moving
    }

    // ============== Entity Management ==============

    /// Replace the entire entity map with freshly identified parts.
    ///
    /// Used on load; clears hover/select state and history.
    pub fn set_parts(&mut self, parts: Vec<Part>) -> Vec<Uuid> {
        let mut map = EntityMap::with_capacity(parts.len());
        let uuids = parts
            .into_iter()
            .map(|part| {
                let uuid = Uuid::new_v4();
                map.insert(uuid, part);
                uuid
            })
            .collect();
        self.entities = Some(map);
        self.hovered.clear();
        self.selected.clear();
        self.is_moving = false;
        self.history.clear();
        uuids
    }

    /// Insert one part under a fresh identifier
    pub fn add_part(&mut self, part: Part) -> Uuid {
        let uuid = Uuid::new_v4();
        self.entities
            .get_or_insert_with(EntityMap::new)
            .insert(uuid, part);
        uuid
    }

    /// Insert several parts under fresh identifiers
    pub fn add_parts(&mut self, parts: Vec<Part>) -> Vec<Uuid> {
        parts.into_iter().map(|part| self.add_part(part)).collect()
    }

    /// Apply an update sequence to exactly one part
    pub fn update_part(&mut self, uuid: Uuid, updates: &[PartUpdate]) -> Result<(), StoreError> {
        let entities = self.entities.as_mut().ok_or(StoreError::NotLoaded)?;
        let part = entities.get_mut(&uuid).ok_or(StoreError::PartNotFound(uuid))?;
        *part = apply_updates(part, updates);
        Ok(())
    }

    /// Apply the same update sequence to every selected part
    pub fn update_selected(&mut self, updates: &[PartUpdate]) -> Result<(), StoreError> {
        let selected: Vec<Uuid> = self.selected.iter().collect();
        for uuid in selected {
            self.update_part(uuid, updates)?;
        }
        Ok(())
    }

    /// Delete every selected part, returning the removed identifiers
    pub fn remove_selected(&mut self) -> Vec<Uuid> {
        let Some(entities) = self.entities.as_mut() else {
            return Vec::new();
        };
        let removed: Vec<Uuid> = self.selected.iter().collect();
        for uuid in &removed {
            entities.remove(uuid);
            self.hovered.unmark(*uuid);
        }
        self.selected.clear();
        removed
    }

    // ============== Hover / Select ==============

    /// Mark a part as hovered
    pub fn hover(&mut self, uuid: Uuid) {
        self.hovered.mark(uuid);
    }

    /// Unmark a hovered part
    pub fn unhover(&mut self, uuid: Uuid) {
        self.hovered.unmark(uuid);
    }

    /// Replace the hovered set
    pub fn hover_many(&mut self, uuids: impl IntoIterator<Item = Uuid>) {
        self.hovered.replace_all(uuids);
    }

    /// Mark a part as selected
    pub fn select(&mut self, uuid: Uuid) {
        self.selected.mark(uuid);
    }

    /// Unmark a selected part
    pub fn unselect(&mut self, uuid: Uuid) {
        self.selected.unmark(uuid);
    }

    /// Replace the selected set
    pub fn select_many(&mut self, uuids: impl IntoIterator<Item = Uuid>) {
        self.selected.replace_all(uuids);
    }

    // ============== Transitions & History ==============

    /// Snapshot the current entity map ahead of an undoable action
    pub fn record_history(&mut self, description: &str) {
        if let Some(entities) = &self.entities {
            self.history.save_state(entities, description);
        }
    }

    /// Start a drag transition: one history snapshot covers every update
    /// until [`PartsState::end_transition`].
    pub fn begin_transition(&mut self, description: &str) {
        self.record_history(description);
        self.is_moving = true;
    }

    /// End a drag transition
    pub fn end_transition(&mut self) {
        self.is_moving = false;
    }

    /// Restore the most recent history snapshot; returns false when there
    /// is nothing to undo.
    pub fn undo(&mut self) -> bool {
        let Some(current) = self.entities.as_ref() else {
            return false;
        };
        let Some(snapshot) = self.history.undo(current) else {
            return false;
        };
        tracing::debug!("Undo: {}", snapshot.description);
        self.install_snapshot(snapshot.entities);
        true
    }

    /// Re-apply the most recently undone snapshot; returns false when there
    /// is nothing to redo.
    pub fn redo(&mut self) -> bool {
        let Some(current) = self.entities.as_ref() else {
            return false;
        };
        let Some(snapshot) = self.history.redo(current) else {
            return false;
        };
        tracing::debug!("Redo: {}", snapshot.description);
        self.install_snapshot(snapshot.entities);
        true
    }

    /// Check if undo is available
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Check if redo is available
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    fn install_snapshot(&mut self, entities: EntityMap) {
        // Hover/selection may reference parts that no longer exist
        self.hovered.retain(|uuid| entities.contains_key(uuid));
        self.selected.retain(|uuid| entities.contains_key(uuid));
        self.entities = Some(entities);
    }
}
