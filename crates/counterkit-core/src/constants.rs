//! Layout and view constants.
//!
//! Layout units are inches; every value here is expressed in layout units
//! unless noted otherwise.

/// Spacing of the snap grid.
pub const GRID_UNIT: f64 = 20.0;

/// Multiplier applied by a single zoom-in step (divisor for zoom-out).
pub const ZOOM_STEP: f64 = 1.2;

/// Lower zoom bound.
pub const MIN_ZOOM: f64 = 0.1;

/// Upper zoom bound.
pub const MAX_ZOOM: f64 = 5.0;

/// Zoom level restored by a zoom reset.
pub const DEFAULT_ZOOM: f64 = 1.0;

/// Largest accepted edge rounding.
pub const MAX_BORDER_RADIUS: f64 = 20.0;

/// Standard slab thickness; thicker slabs are priced proportionally.
pub const STANDARD_DEPTH: f64 = 1.5;

/// Square inches per square foot.
pub const SQ_IN_PER_SQ_FT: f64 = 144.0;

/// Inches per foot.
pub const IN_PER_FT: f64 = 12.0;

/// Millimeters per inch.
pub const MM_PER_IN: f64 = 25.4;
