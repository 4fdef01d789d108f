//! Geometry primitives and the countertop piece model.

use serde::{Deserialize, Serialize};

use counterkit_core::LayoutError;

mod piece;

pub use piece::{Piece, PieceDimensions, PieceFinish};
pub(crate) use piece::check_border_radius;

/// A position in either pointer (screen) space or layout space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// A displacement in layout units.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Delta {
    pub x: f64,
    pub y: f64,
}

impl Delta {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    pub(crate) fn validate(&self) -> Result<(), LayoutError> {
        if !self.x.is_finite() {
            return Err(LayoutError::NonFiniteCoordinate { field: "dx" });
        }
        if !self.y.is_finite() {
            return Err(LayoutError::NonFiniteCoordinate { field: "dy" });
        }
        Ok(())
    }
}

/// Normalizes an angle in degrees into `[0, 360)`.
///
/// Any finite input is accepted, including negative angles: `-90` becomes
/// `270` and `-450` becomes `270`.
pub fn normalize_rotation(angle: f64) -> Result<f64, LayoutError> {
    if !angle.is_finite() {
        return Err(LayoutError::InvalidRotation { value: angle });
    }
    let normalized = angle.rem_euclid(360.0);
    // rem_euclid rounds tiny negative inputs up to exactly 360.0
    if normalized >= 360.0 {
        Ok(0.0)
    } else {
        Ok(normalized)
    }
}
