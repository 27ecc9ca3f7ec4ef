//! Editor actions
//!
//! The verbs the UI layer dispatches into the core. Classification lives
//! here so history snapshots and logging stay uniform across handlers.

use gridbeam_core::Part;
use uuid::Uuid;

use crate::update::PartUpdate;

/// The kind of drag transition in progress
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionKind {
    /// Dragging selected parts to a new origin
    Move,
    /// Dragging a beam end to a new length
    Scale,
    /// Dragging out a copy of the selection
    Copy,
}

impl TransitionKind {
    /// Get a description of the transition for display
    pub fn description(&self) -> &'static str {
        match self {
            TransitionKind::Move => "Move Parts",
            TransitionKind::Scale => "Scale Parts",
            TransitionKind::Copy => "Copy Parts",
        }
    }
}

/// An action dispatched by the UI layer
#[derive(Debug, Clone, PartialEq)]
pub enum EditorAction {
    // Part actions
    CreatePart(Part),
    CreateParts(Vec<Part>),
    UpdatePart { uuid: Uuid, updates: Vec<PartUpdate> },
    UpdateSelected { updates: Vec<PartUpdate> },
    DeleteSelected,

    // Hover / selection
    Hover(Uuid),
    Unhover(Uuid),
    HoverMany(Vec<Uuid>),
    Select(Uuid),
    Unselect(Uuid),
    SelectMany(Vec<Uuid>),

    // Drag transitions
    BeginTransition(TransitionKind),
    EndTransition,

    // History
    Undo,
    Redo,

    // Persistence
    LoadModel,
    SaveModel,

    // Clipboard
    Cut,
    Copy,
    Paste,
}

impl EditorAction {
    /// Check if this action should be included in undo history
    pub fn is_undoable(&self) -> bool {
        match self {
            // Hover/selection changes are not undoable (UX preference)
            EditorAction::Hover(_)
            | EditorAction::Unhover(_)
            | EditorAction::HoverMany(_)
            | EditorAction::Select(_)
            | EditorAction::Unselect(_)
            | EditorAction::SelectMany(_) => false,

            // Transitions snapshot once at begin, not per action
            EditorAction::BeginTransition(_) | EditorAction::EndTransition => false,

            // Load replaces history wholesale; save mutates nothing
            EditorAction::LoadModel | EditorAction::SaveModel => false,

            // Undo/Redo themselves are not undoable
            EditorAction::Undo | EditorAction::Redo => false,

            // Copy only reads the selection
            EditorAction::Copy => false,

            // All other actions are undoable
            _ => true,
        }
    }

    /// Get a description of the action for display and history
    pub fn description(&self) -> &'static str {
        match self {
            EditorAction::CreatePart(_) => "Create Part",
            EditorAction::CreateParts(_) => "Create Parts",
            EditorAction::UpdatePart { .. } => "Update Part",
            EditorAction::UpdateSelected { .. } => "Update Parts",
            EditorAction::DeleteSelected => "Delete Parts",
            EditorAction::Hover(_) => "Hover Part",
            EditorAction::Unhover(_) => "Unhover Part",
            EditorAction::HoverMany(_) => "Hover Parts",
            EditorAction::Select(_) => "Select Part",
            EditorAction::Unselect(_) => "Unselect Part",
            EditorAction::SelectMany(_) => "Select Parts",
            EditorAction::BeginTransition(kind) => kind.description(),
            EditorAction::EndTransition => "End Transition",
            EditorAction::Undo => "Undo",
            EditorAction::Redo => "Redo",
            EditorAction::LoadModel => "Load Model",
            EditorAction::SaveModel => "Save Model",
            EditorAction::Cut => "Cut Parts",
            EditorAction::Copy => "Copy Parts",
            EditorAction::Paste => "Paste Parts",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_undoable_classification() {
        assert!(EditorAction::DeleteSelected.is_undoable());
        assert!(EditorAction::Cut.is_undoable());
        assert!(EditorAction::Paste.is_undoable());
        assert!(
            EditorAction::UpdateSelected { updates: vec![] }.is_undoable()
        );

        assert!(!EditorAction::Select(Uuid::new_v4()).is_undoable());
        assert!(!EditorAction::HoverMany(vec![]).is_undoable());
        assert!(!EditorAction::Undo.is_undoable());
        assert!(!EditorAction::Copy.is_undoable());
        assert!(!EditorAction::BeginTransition(TransitionKind::Move).is_undoable());
        assert!(!EditorAction::LoadModel.is_undoable());
    }
}
