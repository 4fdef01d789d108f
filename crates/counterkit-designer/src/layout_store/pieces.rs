//! Piece lifecycle (add, remove, load) for the layout store.

use std::collections::HashSet;

use counterkit_core::LayoutError;

use super::LayoutStore;
use crate::model::{Piece, PieceDimensions};

impl LayoutStore {
    /// Smallest id greater than every id in the layout.
    ///
    /// When the largest id is `u64::MAX` the lowest unused id is returned
    /// instead.
    pub fn next_piece_id(&self) -> u64 {
        let Some(max) = self.pieces.iter().map(|p| p.id).max() else {
            return 1;
        };
        if let Some(id) = max.checked_add(1) {
            return id;
        }
        let used: HashSet<u64> = self.pieces.iter().map(|p| p.id).collect();
        let mut id = 0;
        while used.contains(&id) {
            id += 1;
        }
        tracing::debug!("Piece ids reached u64::MAX, reusing free id {}", id);
        id
    }

    /// Adds a piece, keeping the caller's id.
    ///
    /// The piece is validated and its rotation normalized before insertion.
    pub fn add_piece(&mut self, piece: Piece) -> Result<u64, LayoutError> {
        let piece = piece.sanitized(self.max_border_radius)?;
        if self.piece(piece.id).is_some() {
            tracing::warn!("Rejected duplicate piece id {}", piece.id);
            return Err(LayoutError::DuplicatePieceId { id: piece.id });
        }
        let id = piece.id;
        self.pieces.push(piece);
        self.is_modified = true;
        tracing::debug!("Added piece {}", id);
        Ok(id)
    }

    /// Creates a plain piece at `(x, y)` with a fresh id.
    pub fn add_new_piece(
        &mut self,
        x: f64,
        y: f64,
        dims: PieceDimensions,
    ) -> Result<u64, LayoutError> {
        let id = self.next_piece_id();
        self.add_piece(Piece::new(id, x, y, dims))
    }

    /// Removes a piece and drops it from the selection.
    pub fn remove_piece(&mut self, id: u64) -> Result<Piece, LayoutError> {
        let index = self.index_of(id)?;
        let removed = self.pieces.remove(index);
        self.selection.remove(id);
        self.is_modified = true;
        tracing::debug!("Removed piece {}", id);
        Ok(removed)
    }

    /// Removes every selected piece, returning how many were removed.
    pub fn remove_selected(&mut self) -> usize {
        let ids = self.selection.selected_ids().to_vec();
        let before = self.pieces.len();
        self.pieces.retain(|p| !ids.contains(&p.id));
        self.selection.clear_selection();
        let removed = before - self.pieces.len();
        if removed > 0 {
            self.is_modified = true;
        }
        removed
    }

    /// Replaces every piece with `pieces` and clears the selection.
    ///
    /// All records are checked first; on error the current layout is kept.
    /// History is left alone: commit afterwards to make the load undoable,
    /// or call `reset_history` to start a fresh history from it.
    pub fn load_layout(&mut self, pieces: Vec<Piece>) -> Result<(), LayoutError> {
        let mut seen = HashSet::with_capacity(pieces.len());
        let mut clean = Vec::with_capacity(pieces.len());
        for piece in &pieces {
            if !seen.insert(piece.id) {
                tracing::warn!("Layout load rejected: duplicate piece id {}", piece.id);
                return Err(LayoutError::DuplicatePieceId { id: piece.id });
            }
            clean.push(piece.sanitized(self.max_border_radius)?);
        }

        self.pieces = clean;
        self.selection.clear_selection();
        self.drag.stop_drag();
        self.gesture_moved = false;
        self.is_modified = true;
        tracing::debug!("Loaded layout with {} pieces", self.pieces.len());
        Ok(())
    }

    /// Removes every piece and all history.
    pub fn clear(&mut self) {
        self.pieces.clear();
        self.selection.clear_selection();
        self.drag.stop_drag();
        self.gesture_moved = false;
        self.reset_history();
        self.is_modified = false;
    }
}
