//! Part definitions

use serde::{Deserialize, Serialize};

use crate::catalog::{MaterialId, SizeId};
use crate::direction::{AxisDirection, Direction};

/// The kind of structural element a part is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PartType {
    /// A drilled beam
    Beam,
    /// A flat panel fixed onto beams
    Skin,
    /// A bolt/nut pair joining beams
    Fastener,
    /// A non-structural attachment
    Accessory,
    /// An adapter between incompatible parts
    Adapter,
}

impl PartType {
    /// Get the display name of this part type
    pub fn name(&self) -> &'static str {
        match self {
            PartType::Beam => "Beam",
            PartType::Skin => "Skin",
            PartType::Fastener => "Fastener",
            PartType::Accessory => "Accessory",
            PartType::Adapter => "Adapter",
        }
    }

    /// Stable numeric value used on the wire
    pub fn value(&self) -> u32 {
        match self {
            PartType::Beam => 0,
            PartType::Skin => 1,
            PartType::Fastener => 2,
            PartType::Accessory => 3,
            PartType::Adapter => 4,
        }
    }

    /// Look up a part type by its wire value
    pub fn from_value(value: u32) -> Option<PartType> {
        match value {
            0 => Some(PartType::Beam),
            1 => Some(PartType::Skin),
            2 => Some(PartType::Fastener),
            3 => Some(PartType::Accessory),
            4 => Some(PartType::Adapter),
            _ => None,
        }
    }
}

/// An integer position on the beam-hole lattice
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridPosition {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl GridPosition {
    /// The lattice origin
    pub const ZERO: GridPosition = GridPosition { x: 0, y: 0, z: 0 };

    /// Create a new grid position
    pub fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }
}

/// One structural element in a grid beam design.
///
/// Positions are grid-cell units, not physical units; physical dimensions
/// come from the spec catalog via `size_id`/`material_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Part {
    /// What kind of element this is
    pub part_type: PartType,
    /// Position of the first hole on the lattice
    pub origin: GridPosition,
    /// Direction the part runs along
    pub direction: Direction,
    /// Number of holes along the part (>= 1)
    pub length: u32,
    /// Cross-section size, resolved through the spec catalog
    pub size_id: SizeId,
    /// Material, resolved through the spec catalog
    pub material_id: MaterialId,
}

impl Part {
    /// Create a new part
    pub fn new(
        part_type: PartType,
        origin: GridPosition,
        direction: Direction,
        length: u32,
    ) -> Self {
        Self {
            part_type,
            origin,
            direction,
            length,
            size_id: SizeId::default(),
            material_id: MaterialId::default(),
        }
    }

    /// Create a beam along an axis direction
    pub fn beam(origin: GridPosition, axis: AxisDirection, length: u32) -> Self {
        Self::new(PartType::Beam, origin, Direction::Axis(axis), length)
    }

    /// The axis this part runs along, if it is axis-aligned
    pub fn axis(&self) -> Option<AxisDirection> {
        self.direction.axis()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_part_type_wire_values() {
        for value in 0..5 {
            let part_type = PartType::from_value(value).unwrap();
            assert_eq!(part_type.value(), value);
        }
        assert_eq!(PartType::from_value(5), None);
    }

    #[test]
    fn test_beam_constructor() {
        let beam = Part::beam(GridPosition::new(1, 2, 3), AxisDirection::Y, 10);
        assert_eq!(beam.part_type, PartType::Beam);
        assert_eq!(beam.length, 10);
        assert_eq!(beam.axis(), Some(AxisDirection::Y));
    }
}
