//! The editor facade
//!
//! Owns the part store, clipboard, and persistence controller, and exposes
//! the single dispatch entry point the UI layer drives.

use gridbeam_codec::FragmentError;
use gridbeam_core::{Model, SpecId};
use thiserror::Error;

use crate::actions::EditorAction;
use crate::clipboard::Clipboard;
use crate::config::EditorConfig;
use crate::history::UndoHistory;
use crate::persist::{LocationHash, Persistence};
use crate::selectors::selected_parts;
use crate::store::{PartsState, StoreError};

/// Errors surfaced by [`Editor::dispatch`]
#[derive(Debug, Error)]
pub enum EditorError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Fragment(#[from] FragmentError),
}

/// The editing core: store, clipboard, persistence, and active spec.
#[derive(Debug)]
pub struct Editor<L: LocationHash> {
    config: EditorConfig,
    parts: PartsState,
    clipboard: Clipboard,
    persistence: Persistence<L>,
    spec_id: SpecId,
}

impl<L: LocationHash> Editor<L> {
    /// Create an editor over a location with default configuration
    pub fn new(location: L) -> Self {
        Self::with_config(EditorConfig::default(), location)
    }

    /// Create an editor with the given configuration
    pub fn with_config(config: EditorConfig, location: L) -> Self {
        let spec_id = config.default_spec;
        Self {
            parts: PartsState::with_history(UndoHistory::new(config.max_history)),
            clipboard: Clipboard::new(),
            persistence: Persistence::new(location),
            spec_id,
            config,
        }
    }

    /// The editor configuration
    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// The part store
    pub fn parts(&self) -> &PartsState {
        &self.parts
    }

    /// The clipboard
    pub fn clipboard(&self) -> &Clipboard {
        &self.clipboard
    }

    /// The persistence controller
    pub fn persistence(&self) -> &Persistence<L> {
        &self.persistence
    }

    /// Mutable access to the persistence controller (location included)
    pub fn persistence_mut(&mut self) -> &mut Persistence<L> {
        &mut self.persistence
    }

    /// The spec the current design uses
    pub fn spec_id(&self) -> SpecId {
        self.spec_id
    }

    /// Load the model in the location's fragment, falling back to an empty
    /// design for the configured default spec.
    pub fn load(&mut self, default_model: Model) -> Result<(), EditorError> {
        let model = self.persistence.load(default_model)?;
        self.spec_id = model.spec_id;
        self.parts.set_parts(model.parts);
        Ok(())
    }

    /// Save the current parts and spec into the location's fragment
    pub fn save(&mut self) -> Result<String, EditorError> {
        let parts: Vec<_> = self.parts.parts().map(|(_, part)| part.clone()).collect();
        let fragment = self.persistence.save(parts, self.spec_id)?;
        Ok(fragment)
    }

    /// Dispatch one UI action
    pub fn dispatch(&mut self, action: EditorAction) -> Result<(), EditorError> {
        tracing::debug!(action = action.description(), "dispatch");

        // One snapshot per undoable action; drags snapshot at begin only
        if action.is_undoable() && !self.parts.is_moving() {
            self.parts.record_history(action.description());
        }

        match action {
            EditorAction::CreatePart(part) => {
                self.parts.add_part(part);
            }
            EditorAction::CreateParts(parts) => {
                self.parts.add_parts(parts);
            }
            EditorAction::UpdatePart { uuid, updates } => {
                self.parts.update_part(uuid, &updates)?;
            }
            EditorAction::UpdateSelected { updates } => {
                self.parts.update_selected(&updates)?;
            }
            EditorAction::DeleteSelected => {
                self.parts.remove_selected();
            }
            EditorAction::Hover(uuid) => self.parts.hover(uuid),
            EditorAction::Unhover(uuid) => self.parts.unhover(uuid),
            EditorAction::HoverMany(uuids) => self.parts.hover_many(uuids),
            EditorAction::Select(uuid) => self.parts.select(uuid),
            EditorAction::Unselect(uuid) => self.parts.unselect(uuid),
            EditorAction::SelectMany(uuids) => self.parts.select_many(uuids),
            EditorAction::BeginTransition(kind) => {
                self.parts.begin_transition(kind.description());
            }
            EditorAction::EndTransition => self.parts.end_transition(),
            EditorAction::Undo => {
                self.parts.undo();
            }
            EditorAction::Redo => {
                self.parts.redo();
            }
            EditorAction::LoadModel => {
                self.load(Model::empty(self.config.default_spec))?;
            }
            EditorAction::SaveModel => {
                self.save()?;
            }
            EditorAction::Cut => {
                self.copy_selection();
                self.parts.remove_selected();
            }
            EditorAction::Copy => self.copy_selection(),
            EditorAction::Paste => {
                let parts = self.clipboard.parts().to_vec();
                let uuids = self.parts.add_parts(parts);
                // Pasted parts become the new selection
                self.parts.select_many(uuids);
            }
        }
        Ok(())
    }

    fn copy_selection(&mut self) {
        let parts = selected_parts(&self.parts)
            .into_iter()
            .map(|(_, part)| part.clone())
            .collect();
        self.clipboard.set_parts(parts);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::TransitionKind;
    use crate::persist::MemoryLocation;
    use crate::update::{PartUpdate, ScalarPath};
    use gridbeam_core::{AxisDirection, GridPosition, Part};
    use uuid::Uuid;

    fn editor_with_parts() -> (Editor<MemoryLocation>, Vec<Uuid>) {
        let mut editor = Editor::new(MemoryLocation::new());
        editor.load(Model::empty(SpecId::Imperial)).unwrap();
        editor
            .dispatch(EditorAction::CreateParts(vec![
                Part::beam(GridPosition::ZERO, AxisDirection::X, 4),
                Part::beam(GridPosition::new(0, 2, 0), AxisDirection::Y, 6),
            ]))
            .unwrap();
        let uuids: Vec<Uuid> = editor.parts().parts().map(|(uuid, _)| uuid).collect();
        (editor, uuids)
    }

    #[test]
    fn test_create_and_update_through_dispatch() {
        let (mut editor, _) = editor_with_parts();
        let (uuid, _) = editor
            .parts()
            .parts()
            .find(|(_, part)| part.length == 4)
            .unwrap();

        editor
            .dispatch(EditorAction::UpdatePart {
                uuid,
                updates: vec![PartUpdate::Add {
                    path: ScalarPath::Length,
                    value: 3,
                }],
            })
            .unwrap();

        assert_eq!(editor.parts().part(uuid).unwrap().length, 7);
    }

    #[test]
    fn test_update_missing_part_is_an_error() {
        let (mut editor, _) = editor_with_parts();
        let missing = Uuid::new_v4();
        let result = editor.dispatch(EditorAction::UpdatePart {
            uuid: missing,
            updates: vec![],
        });
        assert!(matches!(
            result,
            Err(EditorError::Store(StoreError::PartNotFound(_)))
        ));
    }

    #[test]
    fn test_copy_paste_creates_fresh_parts() {
        let (mut editor, uuids) = editor_with_parts();
        editor
            .dispatch(EditorAction::SelectMany(vec![uuids[0]]))
            .unwrap();
        editor.dispatch(EditorAction::Copy).unwrap();
        assert_eq!(editor.clipboard().len(), 1);

        editor.dispatch(EditorAction::Paste).unwrap();
        assert_eq!(editor.parts().part_count(), 3);

        // The pasted part is selected under a fresh identifier
        assert_eq!(editor.parts().selected().len(), 1);
        assert!(!editor.parts().selected().contains(uuids[0]));
    }

    #[test]
    fn test_cut_removes_selection_and_fills_clipboard() {
        let (mut editor, uuids) = editor_with_parts();
        editor
            .dispatch(EditorAction::SelectMany(vec![uuids[0]]))
            .unwrap();
        editor.dispatch(EditorAction::Cut).unwrap();

        assert_eq!(editor.parts().part_count(), 1);
        assert_eq!(editor.clipboard().len(), 1);

        // A single undo brings the cut part back
        editor.dispatch(EditorAction::Undo).unwrap();
        assert_eq!(editor.parts().part_count(), 2);
    }

    #[test]
    fn test_select_many_replaces_selection() {
        let (mut editor, uuids) = editor_with_parts();
        editor.dispatch(EditorAction::Select(uuids[0])).unwrap();
        editor
            .dispatch(EditorAction::SelectMany(vec![uuids[1]]))
            .unwrap();
        assert!(!editor.parts().selected().contains(uuids[0]));
        assert!(editor.parts().selected().contains(uuids[1]));
    }

    #[test]
    fn test_drag_transition_undoes_as_one_step() {
        let (mut editor, uuids) = editor_with_parts();
        editor
            .dispatch(EditorAction::SelectMany(uuids.clone()))
            .unwrap();

        editor
            .dispatch(EditorAction::BeginTransition(TransitionKind::Move))
            .unwrap();
        for _ in 0..3 {
            editor
                .dispatch(EditorAction::UpdateSelected {
                    updates: vec![PartUpdate::Add {
                        path: ScalarPath::OriginZ,
                        value: 1,
                    }],
                })
                .unwrap();
        }
        editor.dispatch(EditorAction::EndTransition).unwrap();

        assert!(editor.parts().part(uuids[0]).unwrap().origin.z >= 3);
        editor.dispatch(EditorAction::Undo).unwrap();
        assert_eq!(editor.parts().part(uuids[0]).unwrap().origin.z, 0);
    }

    #[test]
    fn test_save_load_through_dispatch() {
        let (mut editor, _) = editor_with_parts();
        editor.dispatch(EditorAction::SaveModel).unwrap();
        assert!(!editor.persistence().has_external_change());

        // A fresh editor over the same location sees the saved design
        let location = editor.persistence().location().clone();
        let mut restored = Editor::new(location);
        restored.dispatch(EditorAction::LoadModel).unwrap();
        assert_eq!(restored.parts().part_count(), 2);
    }

    #[test]
    fn test_failed_load_leaves_state_untouched() {
        let (mut editor, _) = editor_with_parts();
        editor
            .persistence_mut()
            .location_mut()
            .set_fragment("2AAAA");

        let result = editor.dispatch(EditorAction::LoadModel);
        assert!(matches!(
            result,
            Err(EditorError::Fragment(FragmentError::UnexpectedVersion('2')))
        ));
        // The failed load did not disturb the entities
        assert_eq!(editor.parts().part_count(), 2);
    }
}
