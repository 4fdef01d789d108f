//! Layout store: the single owner of the editable countertop layout.
//!
//! The store composes the piece list, selection, viewport, drag controller
//! and history, and is the only place layout state is mutated. Operations
//! validate their input before touching anything, so a rejected call leaves
//! the layout exactly as it was.
//!
//! This module is split into submodules by concern:
//! - `pieces`: add, remove and wholesale load
//! - `transforms`: move, resize, rotate, radius and appearance edits
//! - `selection`: selection operations
//! - `history`: commit, undo and redo
//! - `view`: zoom, pan and grid flags
//! - `interaction`: pointer down/move/up handling

mod history;
mod interaction;
mod pieces;
mod selection;
mod transforms;
mod view;

use serde::Serialize;

use counterkit_core::constants::{GRID_UNIT, MAX_BORDER_RADIUS};
use counterkit_core::LayoutError;

use crate::drag::DragController;
use crate::history::{History, HistoryEntry};
use crate::model::Piece;
use crate::selection_manager::SelectionManager;
use crate::viewport::{Viewport, ZoomLimits};

/// Tunables for a layout store.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutOptions {
    pub zoom: ZoomLimits,
    pub grid_unit: f64,
    pub show_grid: bool,
    pub snap_to_grid: bool,
    /// `None` keeps every undo entry.
    pub max_history_depth: Option<usize>,
    pub max_border_radius: f64,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            zoom: ZoomLimits::default(),
            grid_unit: GRID_UNIT,
            show_grid: true,
            snap_to_grid: false,
            max_history_depth: None,
            max_border_radius: MAX_BORDER_RADIUS,
        }
    }
}

/// A read-only copy of the layout handed to render and export code.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutSnapshot {
    pub pieces: Vec<Piece>,
    pub selected_ids: Vec<u64>,
    pub active_id: Option<u64>,
    pub zoom: f64,
    pub pan_x: f64,
    pub pan_y: f64,
    pub show_grid: bool,
    pub snap_to_grid: bool,
}

/// Layout state for UI integration
#[derive(Debug, Clone)]
pub struct LayoutStore {
    pieces: Vec<Piece>,
    selection: SelectionManager,
    viewport: Viewport,
    drag: DragController,
    history: History,
    /// State as of the last history boundary; this is what a commit records.
    baseline: HistoryEntry,
    show_grid: bool,
    snap_to_grid: bool,
    max_border_radius: f64,
    is_modified: bool,
    gesture_moved: bool,
}

impl LayoutStore {
    /// Creates an empty layout with default options.
    pub fn new() -> Self {
        Self::with_options(LayoutOptions::default())
    }

    pub fn with_options(options: LayoutOptions) -> Self {
        Self {
            pieces: Vec::new(),
            selection: SelectionManager::new(),
            viewport: Viewport::new(options.zoom),
            drag: DragController::with_grid_unit(options.grid_unit),
            history: History::with_max_depth(options.max_history_depth),
            baseline: HistoryEntry {
                pieces: Vec::new(),
                selected_ids: Vec::new(),
                active_id: None,
            },
            show_grid: options.show_grid,
            snap_to_grid: options.snap_to_grid,
            max_border_radius: options.max_border_radius,
            is_modified: false,
            gesture_moved: false,
        }
    }

    /// Pieces in stacking order.
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    pub fn piece(&self, id: u64) -> Option<&Piece> {
        self.pieces.iter().find(|p| p.id == id)
    }

    pub fn piece_count(&self) -> usize {
        self.pieces.len()
    }

    pub fn selection(&self) -> &SelectionManager {
        &self.selection
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn drag(&self) -> &DragController {
        &self.drag
    }

    pub fn show_grid(&self) -> bool {
        self.show_grid
    }

    pub fn snap_to_grid(&self) -> bool {
        self.snap_to_grid
    }

    pub fn max_border_radius(&self) -> f64 {
        self.max_border_radius
    }

    /// True once anything changed since creation or the last `mark_saved`.
    pub fn is_modified(&self) -> bool {
        self.is_modified
    }

    pub fn mark_saved(&mut self) {
        self.is_modified = false;
    }

    /// Copies the current layout for render/export collaborators.
    pub fn snapshot(&self) -> LayoutSnapshot {
        LayoutSnapshot {
            pieces: self.pieces.clone(),
            selected_ids: self.selection.selected_ids().to_vec(),
            active_id: self.selection.active_id(),
            zoom: self.viewport.zoom(),
            pan_x: self.viewport.pan_x(),
            pan_y: self.viewport.pan_y(),
            show_grid: self.show_grid,
            snap_to_grid: self.snap_to_grid,
        }
    }

    /// Deep copy of the undoable state.
    pub(crate) fn capture(&self) -> HistoryEntry {
        HistoryEntry {
            pieces: self.pieces.clone(),
            selected_ids: self.selection.selected_ids().to_vec(),
            active_id: self.selection.active_id(),
        }
    }

    fn restore(&mut self, entry: HistoryEntry) {
        self.drag.stop_drag();
        self.gesture_moved = false;
        self.selection = SelectionManager::from_parts(entry.selected_ids, entry.active_id);
        self.pieces = entry.pieces;
        self.is_modified = true;
    }

    /// Index of piece `id`, reporting unknown ids.
    fn index_of(&self, id: u64) -> Result<usize, LayoutError> {
        self.pieces.iter().position(|p| p.id == id).ok_or_else(|| {
            tracing::warn!("Operation targets unknown piece {}", id);
            LayoutError::UnknownPieceId { id }
        })
    }
}

impl Default for LayoutStore {
    fn default() -> Self {
        Self::new()
    }
}
