//! Grid Beam Model Wire Format
//!
//! This crate serializes a [`gridbeam_core::Model`] for sharing through a
//! URL fragment:
//! - wire: varint-tagged binary encoding with stable field numbers
//! - message: the Direction/GridPosition/Part/Model message codecs
//! - fragment: deflate compression + URL-safe base64 + format version digit
//!
//! The field layout is a stable external contract: links generated by old
//! builds must keep decoding, so field numbers are never reused and unknown
//! fields are skipped rather than rejected.

pub mod error;
pub mod fragment;
pub mod message;
pub mod wire;

pub use error::*;
pub use fragment::*;
pub use message::*;
