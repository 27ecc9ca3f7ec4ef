//! The persisted design unit

use serde::{Deserialize, Serialize};

use crate::catalog::SpecId;
use crate::part::Part;

/// A complete design: the active spec and the parts in it.
///
/// Models exist only at save/load boundaries; the long-lived state is the
/// editor's entity map. Part order carries no meaning but round-trips.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Model {
    /// Which physical spec catalog the design uses
    pub spec_id: SpecId,
    /// The parts of the design
    pub parts: Vec<Part>,
}

impl Model {
    /// Create a new model
    pub fn new(spec_id: SpecId, parts: Vec<Part>) -> Self {
        Self { spec_id, parts }
    }

    /// An empty model for the given spec
    pub fn empty(spec_id: SpecId) -> Self {
        Self {
            spec_id,
            parts: Vec::new(),
        }
    }
}
