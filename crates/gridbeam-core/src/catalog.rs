//! Physical spec catalog
//!
//! Maps size/material identifiers to physical dimensions. The catalog is a
//! read-only lookup table; parts only store the identifiers.

use serde::{Deserialize, Serialize};

/// Which physical spec catalog a design uses
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpecId {
    /// Inch-sized beams
    #[default]
    Imperial,
    /// Millimeter-sized beams
    Metric,
}

impl SpecId {
    /// Get the display name of this spec
    pub fn name(&self) -> &'static str {
        match self {
            SpecId::Imperial => "Imperial",
            SpecId::Metric => "Metric",
        }
    }

    /// Stable numeric value used on the wire
    pub fn value(&self) -> u32 {
        match self {
            SpecId::Imperial => 0,
            SpecId::Metric => 1,
        }
    }

    /// Look up a spec by its wire value
    pub fn from_value(value: u32) -> Option<SpecId> {
        match value {
            0 => Some(SpecId::Imperial),
            1 => Some(SpecId::Metric),
            _ => None,
        }
    }
}

/// Beam cross-section size
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SizeId {
    /// 1" square section
    OneInch,
    /// 1.5" square section
    #[default]
    OneAndHalfInch,
    /// 2" square section
    TwoInch,
    /// 25mm square section
    TwentyFiveMm,
    /// 40mm square section
    FortyMm,
    /// 50mm square section
    FiftyMm,
}

impl SizeId {
    /// Get the display name of this size
    pub fn name(&self) -> &'static str {
        match self {
            SizeId::OneInch => "1\"",
            SizeId::OneAndHalfInch => "1.5\"",
            SizeId::TwoInch => "2\"",
            SizeId::TwentyFiveMm => "25mm",
            SizeId::FortyMm => "40mm",
            SizeId::FiftyMm => "50mm",
        }
    }

    /// Stable numeric value used on the wire
    pub fn value(&self) -> u32 {
        match self {
            SizeId::OneInch => 0,
            SizeId::OneAndHalfInch => 1,
            SizeId::TwoInch => 2,
            SizeId::TwentyFiveMm => 3,
            SizeId::FortyMm => 4,
            SizeId::FiftyMm => 5,
        }
    }

    /// Look up a size by its wire value
    pub fn from_value(value: u32) -> Option<SizeId> {
        match value {
            0 => Some(SizeId::OneInch),
            1 => Some(SizeId::OneAndHalfInch),
            2 => Some(SizeId::TwoInch),
            3 => Some(SizeId::TwentyFiveMm),
            4 => Some(SizeId::FortyMm),
            5 => Some(SizeId::FiftyMm),
            _ => None,
        }
    }
}

/// Beam material
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MaterialId {
    #[default]
    Wood,
    Aluminum,
    Steel,
}

impl MaterialId {
    /// Get the display name of this material
    pub fn name(&self) -> &'static str {
        match self {
            MaterialId::Wood => "Wood",
            MaterialId::Aluminum => "Aluminum",
            MaterialId::Steel => "Steel",
        }
    }

    /// Stable numeric value used on the wire
    pub fn value(&self) -> u32 {
        match self {
            MaterialId::Wood => 0,
            MaterialId::Aluminum => 1,
            MaterialId::Steel => 2,
        }
    }

    /// Look up a material by its wire value
    pub fn from_value(value: u32) -> Option<MaterialId> {
        match value {
            0 => Some(MaterialId::Wood),
            1 => Some(MaterialId::Aluminum),
            2 => Some(MaterialId::Steel),
            _ => None,
        }
    }
}

/// Physical dimensions of a beam cross-section, in meters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BeamDimensions {
    /// Width of the square cross-section (also the hole pitch)
    pub beam_width: f64,
    /// Diameter of the drilled holes
    pub hole_diameter: f64,
    /// Diameter of the bolts that fit the holes
    pub bolt_diameter: f64,
}

/// Read-only lookup of physical dimensions by spec, size, and material.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpecCatalog;

impl SpecCatalog {
    /// Beam cross-section width in meters, if the size exists in the spec
    fn beam_width(spec_id: SpecId, size_id: SizeId) -> Option<f64> {
        match (spec_id, size_id) {
            (SpecId::Imperial, SizeId::OneInch) => Some(0.0254),
            (SpecId::Imperial, SizeId::OneAndHalfInch) => Some(0.0381),
            (SpecId::Imperial, SizeId::TwoInch) => Some(0.0508),
            (SpecId::Metric, SizeId::TwentyFiveMm) => Some(0.025),
            (SpecId::Metric, SizeId::FortyMm) => Some(0.04),
            (SpecId::Metric, SizeId::FiftyMm) => Some(0.05),
            _ => None,
        }
    }

    /// Hole and bolt diameters in meters for a material within a spec
    fn hole_and_bolt(spec_id: SpecId, material_id: MaterialId) -> (f64, f64) {
        match (spec_id, material_id) {
            // Wood takes a larger clearance hole
            (SpecId::Imperial, MaterialId::Wood) => (0.0079375, 0.00635),
            (SpecId::Imperial, _) => (0.0065, 0.00635),
            (SpecId::Metric, MaterialId::Wood) => (0.008, 0.006),
            (SpecId::Metric, _) => (0.0065, 0.006),
        }
    }

    /// Resolve the physical dimensions for a size/material pair.
    ///
    /// Returns `None` when the size does not exist in the given spec.
    pub fn dimensions(
        &self,
        spec_id: SpecId,
        size_id: SizeId,
        material_id: MaterialId,
    ) -> Option<BeamDimensions> {
        let beam_width = Self::beam_width(spec_id, size_id)?;
        let (hole_diameter, bolt_diameter) = Self::hole_and_bolt(spec_id, material_id);
        Some(BeamDimensions {
            beam_width,
            hole_diameter,
            bolt_diameter,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimensions_lookup() {
        let catalog = SpecCatalog;
        let dims = catalog
            .dimensions(SpecId::Imperial, SizeId::OneAndHalfInch, MaterialId::Wood)
            .unwrap();
        assert_eq!(dims.beam_width, 0.0381);
        assert!(dims.bolt_diameter < dims.hole_diameter);
    }

    #[test]
    fn test_size_missing_from_spec() {
        let catalog = SpecCatalog;
        // Metric sizes do not exist in the imperial spec
        assert!(
            catalog
                .dimensions(SpecId::Imperial, SizeId::FortyMm, MaterialId::Steel)
                .is_none()
        );
    }

    #[test]
    fn test_enum_wire_values_round_trip() {
        for value in 0..6 {
            assert_eq!(SizeId::from_value(value).unwrap().value(), value);
        }
        for value in 0..3 {
            assert_eq!(MaterialId::from_value(value).unwrap().value(), value);
        }
        for value in 0..2 {
            assert_eq!(SpecId::from_value(value).unwrap().value(), value);
        }
        assert_eq!(SpecId::from_value(9), None);
    }
}
