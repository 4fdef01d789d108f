//! Zoom and pan state for the layout canvas.
//!
//! Handles conversion between screen coordinates (pixels) and layout
//! coordinates (inches). Zoom is clamped to a configured range; panning is
//! unbounded.

use std::fmt;

use counterkit_core::constants::{DEFAULT_ZOOM, MAX_ZOOM, MIN_ZOOM, ZOOM_STEP};

use crate::model::Point;

/// Zoom bounds and step shared by every zoom operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomLimits {
    pub initial: f64,
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl ZoomLimits {
    /// True when every value is finite, `0 < min <= max` and `step > 1`.
    pub fn is_valid(&self) -> bool {
        [self.initial, self.min, self.max, self.step]
            .iter()
            .all(|v| v.is_finite())
            && self.min > 0.0
            && self.min <= self.max
            && self.step > 1.0
    }
}

impl Default for ZoomLimits {
    fn default() -> Self {
        Self {
            initial: DEFAULT_ZOOM,
            min: MIN_ZOOM,
            max: MAX_ZOOM,
            step: ZOOM_STEP,
        }
    }
}

/// Represents the view transformation state (zoom and pan).
#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    zoom: f64,
    pan_x: f64,
    pan_y: f64,
    limits: ZoomLimits,
}

impl Viewport {
    /// Creates a viewport at the initial zoom with no pan.
    ///
    /// Invalid limits (see [`ZoomLimits::is_valid`]) are replaced by the
    /// defaults.
    pub fn new(limits: ZoomLimits) -> Self {
        let limits = if limits.is_valid() {
            limits
        } else {
            tracing::warn!("Invalid zoom limits {:?}, using defaults", limits);
            ZoomLimits::default()
        };
        Self {
            zoom: limits.initial.clamp(limits.min, limits.max),
            pan_x: 0.0,
            pan_y: 0.0,
            limits,
        }
    }

    pub fn limits(&self) -> ZoomLimits {
        self.limits
    }

    /// Gets the current zoom level (1.0 = 100%).
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Sets the zoom level, clamped to the configured bounds.
    ///
    /// Non-finite values are ignored.
    pub fn set_zoom_level(&mut self, zoom: f64) {
        if !zoom.is_finite() {
            tracing::warn!("Ignoring non-finite zoom level {}", zoom);
            return;
        }
        self.zoom = zoom.clamp(self.limits.min, self.limits.max);
    }

    /// Zooms in by one step.
    pub fn zoom_in(&mut self) {
        self.set_zoom_level(self.zoom * self.limits.step);
    }

    /// Zooms out by one step.
    pub fn zoom_out(&mut self) {
        self.set_zoom_level(self.zoom / self.limits.step);
    }

    /// Restores the initial zoom and clears the pan offset.
    pub fn reset_zoom(&mut self) {
        self.zoom = self.limits.initial.clamp(self.limits.min, self.limits.max);
        self.pan_x = 0.0;
        self.pan_y = 0.0;
    }

    /// Gets the pan offset (X coordinate).
    pub fn pan_x(&self) -> f64 {
        self.pan_x
    }

    /// Gets the pan offset (Y coordinate).
    pub fn pan_y(&self) -> f64 {
        self.pan_y
    }

    /// Pans by a delta amount.
    pub fn pan(&mut self, dx: f64, dy: f64) {
        self.pan_x += dx;
        self.pan_y += dy;
    }

    /// Converts screen coordinates to layout coordinates.
    pub fn screen_to_layout(&self, screen_x: f64, screen_y: f64) -> Point {
        Point::new(
            (screen_x - self.pan_x) / self.zoom,
            (screen_y - self.pan_y) / self.zoom,
        )
    }

    /// Converts layout coordinates to screen coordinates.
    pub fn layout_to_screen(&self, layout_x: f64, layout_y: f64) -> (f64, f64) {
        (
            layout_x * self.zoom + self.pan_x,
            layout_y * self.zoom + self.pan_y,
        )
    }
}

impl fmt::Display for Viewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Zoom: {:.0}% | Pan: ({:.1}, {:.1})",
            self.zoom * 100.0,
            self.pan_x,
            self.pan_y
        )
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(ZoomLimits::default())
    }
}
