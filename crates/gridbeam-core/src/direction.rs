//! Direction vectors and rotation helpers
//!
//! Beam directions are unit vectors. Interactive editing keeps them on the
//! six grid axes, so rotations snap their components back to exact integers
//! instead of accumulating floating-point drift.

use glam::DVec3;
use serde::{Deserialize, Serialize};

/// Rounding factor applied to rotated components (10 decimal digits).
const ROUND_FACTOR: f64 = 1e10;

/// Round a vector component to 10 decimal digits, snapping negative zero
/// to positive zero.
pub fn round_component(value: f64) -> f64 {
    let rounded = (value * ROUND_FACTOR).round() / ROUND_FACTOR;
    if rounded == 0.0 { 0.0 } else { rounded }
}

/// Apply an angle-axis (Rodrigues) rotation to a vector.
///
/// `axis` must be a unit vector; `angle` is in radians. Each component of
/// the result is normalized through [`round_component`], so rotating an
/// axis direction by a multiple of 90 degrees yields exact {-1, 0, 1}
/// components.
pub fn rotate_vector(vector: DVec3, axis: DVec3, angle: f64) -> DVec3 {
    let (sin, cos) = angle.sin_cos();
    let rotated =
        vector * cos + axis.cross(vector) * sin + axis * (axis.dot(vector) * (1.0 - cos));
    DVec3::new(
        round_component(rotated.x),
        round_component(rotated.y),
        round_component(rotated.z),
    )
}

/// The six axis-aligned directions of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AxisDirection {
    /// +X
    X,
    /// -X
    NegX,
    /// +Y
    Y,
    /// -Y
    NegY,
    /// +Z
    Z,
    /// -Z
    NegZ,
}

impl AxisDirection {
    /// All six axis directions.
    pub const ALL: [AxisDirection; 6] = [
        AxisDirection::X,
        AxisDirection::NegX,
        AxisDirection::Y,
        AxisDirection::NegY,
        AxisDirection::Z,
        AxisDirection::NegZ,
    ];

    /// Get the display name of this axis direction
    pub fn name(&self) -> &'static str {
        match self {
            AxisDirection::X => "X",
            AxisDirection::NegX => "-X",
            AxisDirection::Y => "Y",
            AxisDirection::NegY => "-Y",
            AxisDirection::Z => "Z",
            AxisDirection::NegZ => "-Z",
        }
    }

    /// Unit vector for this axis direction
    pub fn vector(&self) -> DVec3 {
        match self {
            AxisDirection::X => DVec3::X,
            AxisDirection::NegX => DVec3::NEG_X,
            AxisDirection::Y => DVec3::Y,
            AxisDirection::NegY => DVec3::NEG_Y,
            AxisDirection::Z => DVec3::Z,
            AxisDirection::NegZ => DVec3::NEG_Z,
        }
    }

    /// Find the axis direction exactly matching a vector, if any
    pub fn from_vector(vector: DVec3) -> Option<AxisDirection> {
        AxisDirection::ALL
            .into_iter()
            .find(|axis| axis.vector() == vector)
    }
}

/// A beam direction: one of the six grid axes, or a free unit vector.
///
/// Axis form is the compact, preferred representation; a free vector is kept
/// only for directions that do not lie exactly on a grid axis.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub enum Direction {
    /// An axis-aligned direction
    Axis(AxisDirection),
    /// A free unit vector
    Vector(DVec3),
}

impl Default for Direction {
    fn default() -> Self {
        Direction::Axis(AxisDirection::X)
    }
}

/// Component tolerance for direction equality.
///
/// Free directions travel the wire as an f32 angle pair, which reproduces
/// components to roughly this precision; the six axis directions differ by
/// a full unit per component, so they still compare exactly.
const DIRECTION_EPSILON: f64 = 1e-6;

impl PartialEq for Direction {
    fn eq(&self, other: &Self) -> bool {
        // Axis(X) and Vector(1,0,0) describe the same direction, and a
        // saved free direction equals its reloaded value
        let delta = self.vector() - other.vector();
        delta.x.abs() <= DIRECTION_EPSILON
            && delta.y.abs() <= DIRECTION_EPSILON
            && delta.z.abs() <= DIRECTION_EPSILON
    }
}

impl From<AxisDirection> for Direction {
    fn from(axis: AxisDirection) -> Self {
        Direction::Axis(axis)
    }
}

impl Direction {
    /// Build a direction from a vector, collapsing exact axis vectors into
    /// the compact axis form.
    pub fn from_vector(vector: DVec3) -> Direction {
        match AxisDirection::from_vector(vector) {
            Some(axis) => Direction::Axis(axis),
            None => Direction::Vector(vector),
        }
    }

    /// Build a direction from legacy spherical angles in degrees.
    ///
    /// `inclination` is the elevation from the XY plane toward +Z; `azimuth`
    /// rotates in the XY plane from +X toward +Y. Angle pairs that land
    /// exactly on a grid axis collapse into the axis form.
    pub fn from_angles(inclination: f32, azimuth: f32) -> Direction {
        let inclination = f64::from(inclination).to_radians();
        let azimuth = f64::from(azimuth).to_radians();
        let vector = DVec3::new(
            round_component(inclination.cos() * azimuth.cos()),
            round_component(inclination.cos() * azimuth.sin()),
            round_component(inclination.sin()),
        );
        Direction::from_vector(vector)
    }

    /// The unit vector for this direction
    pub fn vector(&self) -> DVec3 {
        match self {
            Direction::Axis(axis) => axis.vector(),
            Direction::Vector(vector) => *vector,
        }
    }

    /// Legacy spherical angles (inclination, azimuth) in degrees
    pub fn angles(&self) -> (f32, f32) {
        let v = self.vector();
        let inclination = v.z.asin().to_degrees();
        let azimuth = v.y.atan2(v.x).to_degrees();
        (inclination as f32, azimuth as f32)
    }

    /// The axis form of this direction, if it lies exactly on a grid axis
    pub fn axis(&self) -> Option<AxisDirection> {
        match self {
            Direction::Axis(axis) => Some(*axis),
            Direction::Vector(vector) => AxisDirection::from_vector(*vector),
        }
    }

    /// Collapse into axis form when the vector lies exactly on a grid axis
    pub fn normalized(self) -> Direction {
        Direction::from_vector(self.vector())
    }

    /// True iff this is one of the six axis directions: unit length with
    /// exactly one component of magnitude 1.
    pub fn is_standard(&self) -> bool {
        self.axis().is_some()
    }

    /// Rotate this direction by `angle` radians about the given unit `axis`
    pub fn rotated(&self, axis: DVec3, angle: f64) -> Direction {
        Direction::from_vector(rotate_vector(self.vector(), axis, angle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_round_component_snaps_negative_zero() {
        assert_eq!(round_component(-0.0).to_bits(), 0.0_f64.to_bits());
        assert_eq!(round_component(1e-14), 0.0);
        assert_eq!(round_component(0.25), 0.25);
    }

    #[test]
    fn test_axis_vector_bijection() {
        for axis in AxisDirection::ALL {
            assert_eq!(AxisDirection::from_vector(axis.vector()), Some(axis));
        }
        assert_eq!(AxisDirection::from_vector(DVec3::new(1.0, 1.0, 0.0)), None);
    }

    #[test]
    fn test_quarter_turns_stay_on_grid() {
        let coordinate_axes = [DVec3::X, DVec3::Y, DVec3::Z];
        for start in AxisDirection::ALL {
            for axis in coordinate_axes {
                for quarter_turns in 0..4 {
                    let angle = FRAC_PI_2 * f64::from(quarter_turns);
                    let rotated = Direction::Axis(start).rotated(axis, angle);
                    let v = rotated.vector();
                    for component in [v.x, v.y, v.z] {
                        assert!(
                            component == 0.0 || component == 1.0 || component == -1.0,
                            "rotating {start:?} by {quarter_turns} quarter turns about {axis:?} left residue: {v:?}"
                        );
                    }
                    assert!(rotated.is_standard());
                }
            }
        }
    }

    #[test]
    fn test_full_turn_is_identity() {
        for start in AxisDirection::ALL {
            for axis in [DVec3::X, DVec3::Y, DVec3::Z] {
                let rotated = Direction::Axis(start).rotated(axis, 2.0 * PI);
                assert_eq!(rotated, Direction::Axis(start));
            }
        }
    }

    #[test]
    fn test_angles_round_trip_for_axes() {
        for axis in AxisDirection::ALL {
            let (inclination, azimuth) = Direction::Axis(axis).angles();
            let back = Direction::from_angles(inclination, azimuth);
            assert_eq!(back, Direction::Axis(axis), "axis {}", axis.name());
            assert_eq!(back.axis(), Some(axis));
        }
    }

    #[test]
    fn test_from_angles_x_axis() {
        assert_eq!(
            Direction::from_angles(0.0, 0.0),
            Direction::Axis(AxisDirection::X)
        );
    }

    #[test]
    fn test_equality_tolerates_wire_precision() {
        let diagonal = DVec3::new(1.0, 1.0, 0.0).normalize();
        let exact = Direction::Vector(diagonal);
        let reloaded = Direction::Vector(diagonal + DVec3::splat(5e-7));
        assert_eq!(exact, reloaded);

        // Beyond the tolerance is a different direction
        let other = Direction::Vector(diagonal + DVec3::new(1e-4, 0.0, 0.0));
        assert_ne!(exact, other);

        // Distinct axes always compare unequal
        assert_ne!(
            Direction::Axis(AxisDirection::X),
            Direction::Axis(AxisDirection::NegX)
        );
        // A vector that collapses onto an axis equals that axis
        assert_eq!(
            Direction::Vector(DVec3::X),
            Direction::Axis(AxisDirection::X)
        );
    }

    #[test]
    fn test_free_vector_survives() {
        let diagonal = DVec3::new(1.0, 1.0, 0.0).normalize();
        let direction = Direction::from_vector(DVec3::new(
            round_component(diagonal.x),
            round_component(diagonal.y),
            0.0,
        ));
        assert!(!direction.is_standard());
        let (inclination, azimuth) = direction.angles();
        assert_relative_eq!(f64::from(inclination), 0.0, epsilon = 1e-6);
        assert_relative_eq!(f64::from(azimuth), 45.0, epsilon = 1e-6);
    }

    #[test]
    fn test_rotation_moves_between_axes() {
        // +X rotated 90 degrees about +Z lands on +Y
        let rotated = Direction::Axis(AxisDirection::X).rotated(DVec3::Z, FRAC_PI_2);
        assert_eq!(rotated, Direction::Axis(AxisDirection::Y));
    }
}
