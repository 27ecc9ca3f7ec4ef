//! Clipboard for cut/copy/paste
//!
//! Holds copied part values by value; pasting re-creates them through the
//! store so every paste gets fresh identifiers.

use gridbeam_core::Part;

/// Copied parts awaiting a paste
#[derive(Debug, Clone, Default)]
pub struct Clipboard {
    parts: Vec<Part>,
}

impl Clipboard {
    /// Create an empty clipboard
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the clipboard contents
    pub fn set_parts(&mut self, parts: Vec<Part>) {
        self.parts = parts;
    }

    /// The copied parts
    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    /// Number of copied parts
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    /// Whether the clipboard is empty
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Drop the clipboard contents
    pub fn clear(&mut self) {
        self.parts.clear();
    }
}
