use serde::{Deserialize, Serialize};

use counterkit_core::constants::{IN_PER_FT, STANDARD_DEPTH};
use counterkit_core::LayoutError;

use super::normalize_rotation;

fn default_color() -> String {
    "#e0e0e0".to_string()
}

fn default_pattern() -> String {
    "marble".to_string()
}

/// Edge profile and material choices attached to a piece.
///
/// The layout engine carries these values around without interpreting them;
/// only the estimate calculator reads the prices.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PieceFinish {
    #[serde(rename = "edge", default, skip_serializing_if = "Option::is_none")]
    pub edge_profile: Option<String>,
    /// Edge price per linear foot
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edge_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub material: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub texture: Option<String>,
    /// Texture surcharge per square foot
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub texture_price: Option<f64>,
}

/// Width, height and depth of a slab, validated as a unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PieceDimensions {
    pub width: f64,
    pub height: f64,
    pub depth: f64,
}

impl PieceDimensions {
    pub fn new(width: f64, height: f64, depth: f64) -> Self {
        Self {
            width,
            height,
            depth,
        }
    }

    /// Fails with `InvalidDimension` on the first component that is not a
    /// positive finite number.
    pub fn validate(&self) -> Result<(), LayoutError> {
        for (field, value) in [
            ("width", self.width),
            ("height", self.height),
            ("depth", self.depth),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(LayoutError::InvalidDimension { field, value });
            }
        }
        Ok(())
    }
}

/// A single countertop slab placed on the layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Piece {
    pub id: u64,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub depth: f64,
    /// Degrees, always in `[0, 360)` once the piece is in a layout.
    #[serde(default)]
    pub rotation: f64,
    #[serde(default)]
    pub border_radius: f64,
    #[serde(default = "default_color")]
    pub color: String,
    #[serde(default = "default_pattern")]
    pub pattern: String,
    #[serde(flatten)]
    pub finish: PieceFinish,
}

impl Piece {
    pub fn new(id: u64, x: f64, y: f64, dims: PieceDimensions) -> Self {
        Self {
            id,
            x,
            y,
            width: dims.width,
            height: dims.height,
            depth: dims.depth,
            rotation: 0.0,
            border_radius: 0.0,
            color: default_color(),
            pattern: default_pattern(),
            finish: PieceFinish::default(),
        }
    }

    pub fn with_rotation(mut self, rotation: f64) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn dimensions(&self) -> PieceDimensions {
        PieceDimensions::new(self.width, self.height, self.depth)
    }

    pub fn validate_dimensions(&self) -> Result<(), LayoutError> {
        self.dimensions().validate()
    }

    /// Sets the rotation, normalizing it into `[0, 360)`.
    pub fn set_rotation(&mut self, angle: f64) -> Result<(), LayoutError> {
        self.rotation = normalize_rotation(angle)?;
        Ok(())
    }

    /// Checks every invariant a piece must hold inside a layout and returns
    /// a copy with its rotation normalized.
    pub(crate) fn sanitized(&self, max_border_radius: f64) -> Result<Piece, LayoutError> {
        self.validate_dimensions()?;
        if !self.x.is_finite() {
            return Err(LayoutError::NonFiniteCoordinate { field: "x" });
        }
        if !self.y.is_finite() {
            return Err(LayoutError::NonFiniteCoordinate { field: "y" });
        }
        check_border_radius(self.border_radius, max_border_radius)?;
        let mut piece = self.clone();
        piece.set_rotation(self.rotation)?;
        Ok(piece)
    }

    /// Top-face area in square inches.
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Perimeter in linear feet.
    pub fn perimeter_ft(&self) -> f64 {
        2.0 * (self.width + self.height) / IN_PER_FT
    }

    /// Price multiplier for slabs thicker than the standard depth.
    pub fn depth_factor(&self) -> f64 {
        if self.depth > STANDARD_DEPTH {
            self.depth / STANDARD_DEPTH
        } else {
            1.0
        }
    }

    /// Axis-aligned bounds `(min_x, min_y, max_x, max_y)` of the unrotated slab.
    pub fn bounds(&self) -> (f64, f64, f64, f64) {
        (self.x, self.y, self.x + self.width, self.y + self.height)
    }
}

pub(crate) fn check_border_radius(radius: f64, max: f64) -> Result<(), LayoutError> {
    if !radius.is_finite() || radius < 0.0 || radius > max {
        return Err(LayoutError::InvalidBorderRadius { value: radius, max });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slab() -> Piece {
        Piece::new(1, 0.0, 0.0, PieceDimensions::new(72.0, 24.0, 1.5))
    }

    #[test]
    fn test_validate_dimensions() {
        assert!(slab().validate_dimensions().is_ok());

        let mut piece = slab();
        piece.depth = 0.0;
        assert_eq!(
            piece.validate_dimensions(),
            Err(LayoutError::InvalidDimension {
                field: "depth",
                value: 0.0
            })
        );

        piece.depth = 1.5;
        piece.width = -3.0;
        assert!(matches!(
            piece.validate_dimensions(),
            Err(LayoutError::InvalidDimension { field: "width", .. })
        ));
    }

    #[test]
    fn test_set_rotation_normalizes() {
        let mut piece = slab();
        piece.set_rotation(-90.0).unwrap();
        assert_eq!(piece.rotation, 270.0);
        piece.set_rotation(450.0).unwrap();
        assert_eq!(piece.rotation, 90.0);
    }

    #[test]
    fn test_sanitized_rejects_bad_radius() {
        let mut piece = slab();
        piece.border_radius = 21.0;
        assert!(matches!(
            piece.sanitized(20.0),
            Err(LayoutError::InvalidBorderRadius { .. })
        ));
        piece.border_radius = -1.0;
        assert!(piece.sanitized(20.0).is_err());
    }

    #[test]
    fn test_sanitized_normalizes_rotation() {
        let piece = slab().with_rotation(-450.0);
        let clean = piece.sanitized(20.0).unwrap();
        assert_eq!(clean.rotation, 270.0);
        assert_eq!(piece.rotation, -450.0);
    }

    #[test]
    fn test_area_and_perimeter() {
        let piece = slab();
        assert_eq!(piece.area(), 1728.0);
        assert_eq!(piece.perimeter_ft(), 16.0);
        assert_eq!(piece.depth_factor(), 1.0);

        let mut thick = slab();
        thick.depth = 3.0;
        assert_eq!(thick.depth_factor(), 2.0);
    }

    #[test]
    fn test_json_field_names() {
        let mut piece = slab();
        piece.border_radius = 2.0;
        piece.finish.edge_profile = Some("bullnose".to_string());
        let json = serde_json::to_value(&piece).unwrap();
        assert_eq!(json["borderRadius"], 2.0);
        assert_eq!(json["edge"], "bullnose");
        assert!(json.get("texture").is_none());
    }

    #[test]
    fn test_json_defaults() {
        let piece: Piece = serde_json::from_str(
            r#"{"id":2,"width":24,"height":72,"depth":1.5,"x":72,"y":24}"#,
        )
        .unwrap();
        assert_eq!(piece.rotation, 0.0);
        assert_eq!(piece.color, "#e0e0e0");
        assert_eq!(piece.pattern, "marble");
        assert_eq!(piece.finish, PieceFinish::default());
    }
}
