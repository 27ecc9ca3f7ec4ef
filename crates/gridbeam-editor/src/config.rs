//! Editor configuration

use gridbeam_core::SpecId;
use serde::{Deserialize, Serialize};

/// Editor preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Maximum number of undo history entries
    pub max_history: usize,
    /// Spec installed when a new design is started
    pub default_spec: SpecId,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            max_history: 50,
            default_spec: SpecId::Imperial,
        }
    }
}
