//! URL fragment persistence
//!
//! Loads a model from the browser location's fragment (or a default model
//! when there is none) and saves the current parts back into it. The
//! location itself sits behind a trait so the core stays testable off the
//! browser.

use gridbeam_codec::{FragmentError, decode_fragment, encode_fragment};
use gridbeam_core::{Model, Part, SpecId};

use crate::update::enforce_invariants;

/// Read/write access to the URL fragment (the part after `#`)
pub trait LocationHash {
    /// The current fragment, if any
    fn fragment(&self) -> Option<String>;
    /// Replace the fragment
    fn set_fragment(&mut self, fragment: &str);
}

/// An in-memory location, for native use and tests
#[derive(Debug, Clone, Default)]
pub struct MemoryLocation {
    fragment: Option<String>,
}

impl MemoryLocation {
    /// Create a location with no fragment
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a location carrying a fragment
    pub fn with_fragment(fragment: impl Into<String>) -> Self {
        Self {
            fragment: Some(fragment.into()),
        }
    }
}

impl LocationHash for MemoryLocation {
    fn fragment(&self) -> Option<String> {
        self.fragment.clone()
    }

    fn set_fragment(&mut self, fragment: &str) {
        self.fragment = Some(fragment.to_string());
    }
}

/// Load lifecycle of the persistence controller
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoadPhase {
    /// No load has been attempted yet
    #[default]
    Unloaded,
    /// A load attempt is in progress (or failed; failures propagate)
    Loading,
    /// The last load attempt succeeded
    Loaded,
}

/// Loads and saves models through a [`LocationHash`].
///
/// Remembers the fragment value of its own last save so external fragment
/// changes (back/forward navigation) can be told apart from save echoes.
#[derive(Debug)]
pub struct Persistence<L: LocationHash> {
    location: L,
    phase: LoadPhase,
    last_saved: Option<String>,
}

/// Normalize a part crossing the load/save boundary: collapse directions
/// that lie on a grid axis into the compact axis form, and re-establish the
/// part invariants.
fn normalize_part(mut part: Part) -> Part {
    part.direction = part.direction.normalized();
    enforce_invariants(&mut part);
    part
}

impl<L: LocationHash> Persistence<L> {
    /// Create a controller over a location
    pub fn new(location: L) -> Self {
        Self {
            location,
            phase: LoadPhase::Unloaded,
            last_saved: None,
        }
    }

    /// The current load phase
    pub fn phase(&self) -> LoadPhase {
        self.phase
    }

    /// The underlying location
    pub fn location(&self) -> &L {
        &self.location
    }

    /// Mutable access to the underlying location
    pub fn location_mut(&mut self) -> &mut L {
        &mut self.location
    }

    /// The fragment written by the last save, if any
    pub fn last_saved(&self) -> Option<&str> {
        self.last_saved.as_deref()
    }

    /// Load a model from the location's fragment.
    ///
    /// Without a fragment the default model is installed directly, skipping
    /// the decode pipeline. Decode failures propagate; falling back to a
    /// default model on a bad link is the caller's policy, not ours.
    pub fn load(&mut self, default_model: Model) -> Result<Model, FragmentError> {
        self.phase = LoadPhase::Loading;
        let model = match self.location.fragment() {
            None => default_model,
            Some(fragment) if fragment.is_empty() || fragment == "#" => default_model,
            Some(fragment) => {
                let decoded = decode_fragment(&fragment)?;
                tracing::debug!(parts = decoded.parts.len(), "loaded model from fragment");
                Model::new(
                    decoded.spec_id,
                    decoded.parts.into_iter().map(normalize_part).collect(),
                )
            }
        };
        self.phase = LoadPhase::Loaded;
        Ok(model)
    }

    /// Save parts and the active spec into the location's fragment
    pub fn save(
        &mut self,
        parts: impl IntoIterator<Item = Part>,
        spec_id: SpecId,
    ) -> Result<String, FragmentError> {
        let model = Model::new(
            spec_id,
            parts.into_iter().map(normalize_part).collect(),
        );
        let fragment = encode_fragment(&model)?;
        self.location.set_fragment(&fragment);
        tracing::debug!(parts = model.parts.len(), "saved model to fragment");
        self.last_saved = Some(fragment.clone());
        Ok(fragment)
    }

    /// Whether the live fragment differs from our last save.
    ///
    /// True means the URL changed under us (e.g. history navigation) and the
    /// caller should reload rather than treat it as a save echo.
    pub fn has_external_change(&self) -> bool {
        self.location.fragment().as_deref() != self.last_saved.as_deref()
    }
}
