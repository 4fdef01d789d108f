//! Pointer drag tracking.
//!
//! Converts successive pointer positions into layout-unit deltas. Pointer
//! movement is divided by the zoom level, so the same on-screen movement
//! moves a piece less when zoomed in.
//!
//! With snapping enabled each incremental delta is rounded to the grid on
//! its own. Snapping the increments rather than the absolute position means
//! a slow drag made of many small moves can lose movement to rounding (a
//! series of 9-unit moves never leaves the spot). Callers that want the
//! absolute position on the grid must snap it themselves.

use counterkit_core::constants::GRID_UNIT;

use crate::model::{Delta, Point};

/// Drag state machine.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        last_position: Point,
        target_id: u64,
    },
}

/// Tracks one drag gesture at a time.
#[derive(Debug, Clone, PartialEq)]
pub struct DragController {
    state: DragState,
    grid_unit: f64,
}

impl DragController {
    pub fn new() -> Self {
        Self::with_grid_unit(GRID_UNIT)
    }

    pub fn with_grid_unit(grid_unit: f64) -> Self {
        Self {
            state: DragState::Idle,
            grid_unit,
        }
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn grid_unit(&self) -> f64 {
        self.grid_unit
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// Id of the piece under the pointer when the drag started.
    pub fn target_id(&self) -> Option<u64> {
        match self.state {
            DragState::Dragging { target_id, .. } => Some(target_id),
            DragState::Idle => None,
        }
    }

    /// Begins tracking from `pointer`. Pieces are not touched.
    pub fn start_drag(&mut self, pointer: Point, target_id: u64) {
        self.state = DragState::Dragging {
            last_position: pointer,
            target_id,
        };
    }

    /// Returns the layout-unit delta since the previous pointer position.
    ///
    /// Returns `None` when no drag is in progress.
    pub fn on_drag(&mut self, pointer: Point, zoom: f64, snap_to_grid: bool) -> Option<Delta> {
        let DragState::Dragging {
            last_position,
            target_id,
        } = self.state
        else {
            return None;
        };

        let mut dx = (pointer.x - last_position.x) / zoom;
        let mut dy = (pointer.y - last_position.y) / zoom;

        if snap_to_grid {
            dx = snap(dx, self.grid_unit);
            dy = snap(dy, self.grid_unit);
        }

        self.state = DragState::Dragging {
            last_position: pointer,
            target_id,
        };
        Some(Delta::new(dx, dy))
    }

    /// Ends the gesture. Safe to call when already idle.
    pub fn stop_drag(&mut self) {
        self.state = DragState::Idle;
    }
}

impl Default for DragController {
    fn default() -> Self {
        Self::new()
    }
}

fn snap(value: f64, unit: f64) -> f64 {
    // f64::round rounds half away from zero; -0.0 is folded to 0.0
    (value / unit).round() * unit + 0.0
}
