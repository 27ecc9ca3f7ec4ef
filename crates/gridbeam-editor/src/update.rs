//! Declarative part updates
//!
//! Edits are expressed as small descriptor values rather than ad-hoc
//! mutations, so a drag gesture, a keyboard nudge, and a programmatic edit
//! all flow through the same interpreter.

use glam::DVec3;
use gridbeam_core::{Direction, GridPosition, Part};

/// A scalar field of a part that updates can address
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarPath {
    /// Hole count along the part
    Length,
    /// Origin x coordinate
    OriginX,
    /// Origin y coordinate
    OriginY,
    /// Origin z coordinate
    OriginZ,
}

/// One declarative mutation of a part.
///
/// Sequences of updates apply left to right, each seeing the previous
/// result. Rotation addresses the direction field only, which the variant
/// itself encodes.
#[derive(Debug, Clone, PartialEq)]
pub enum PartUpdate {
    /// path := value
    Set { path: ScalarPath, value: i32 },
    /// path += value
    Add { path: ScalarPath, value: i32 },
    /// path -= value
    Sub { path: ScalarPath, value: i32 },
    /// path := clamp(path, min, max)
    Clamp {
        path: ScalarPath,
        min: i32,
        max: i32,
    },
    /// origin := value
    SetOrigin { origin: GridPosition },
    /// direction := value
    SetDirection { direction: Direction },
    /// direction := rotate(direction, axis, angle)
    Rotate { axis: DVec3, angle: f64 },
}

fn read_scalar(part: &Part, path: ScalarPath) -> i64 {
    match path {
        ScalarPath::Length => i64::from(part.length),
        ScalarPath::OriginX => i64::from(part.origin.x),
        ScalarPath::OriginY => i64::from(part.origin.y),
        ScalarPath::OriginZ => i64::from(part.origin.z),
    }
}

fn write_scalar(part: &mut Part, path: ScalarPath, value: i64) {
    let clamped = value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32;
    match path {
        // length is unsigned; the safety pass floors it at 1 anyway
        ScalarPath::Length => part.length = clamped.max(1) as u32,
        ScalarPath::OriginX => part.origin.x = clamped,
        ScalarPath::OriginY => part.origin.y = clamped,
        ScalarPath::OriginZ => part.origin.z = clamped,
    }
}

/// Clamp a part back into its invariants: `length >= 1`, `origin.z >= 0`.
///
/// Runs after every update so interactive overshoot can never make a beam
/// vanish or sink below the ground plane. Idempotent.
pub fn enforce_invariants(part: &mut Part) {
    if part.length < 1 {
        part.length = 1;
    }
    if part.origin.z < 0 {
        part.origin.z = 0;
    }
}

/// Apply one update to a part, returning the mutated copy
pub fn apply_update(part: &Part, update: &PartUpdate) -> Part {
    let mut next = part.clone();
    match update {
        PartUpdate::Set { path, value } => {
            write_scalar(&mut next, *path, i64::from(*value));
        }
        PartUpdate::Add { path, value } => {
            let current = read_scalar(&next, *path);
            write_scalar(&mut next, *path, current + i64::from(*value));
        }
        PartUpdate::Sub { path, value } => {
            let current = read_scalar(&next, *path);
            write_scalar(&mut next, *path, current - i64::from(*value));
        }
        PartUpdate::Clamp { path, min, max } => {
            let current = read_scalar(&next, *path);
            let clamped = current.min(i64::from(*max)).max(i64::from(*min));
            write_scalar(&mut next, *path, clamped);
        }
        PartUpdate::SetOrigin { origin } => {
            next.origin = *origin;
        }
        PartUpdate::SetDirection { direction } => {
            next.direction = *direction;
        }
        PartUpdate::Rotate { axis, angle } => {
            next.direction = next.direction.rotated(*axis, *angle);
        }
    }
    enforce_invariants(&mut next);
    next
}

/// Apply a sequence of updates left to right
pub fn apply_updates(part: &Part, updates: &[PartUpdate]) -> Part {
    updates
        .iter()
        .fold(part.clone(), |part, update| apply_update(&part, update))
}
