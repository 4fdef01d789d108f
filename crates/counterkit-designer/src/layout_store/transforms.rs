//! Geometry and appearance edits for the layout store.

use counterkit_core::LayoutError;

use super::LayoutStore;
use crate::model::{check_border_radius, normalize_rotation, Delta, PieceDimensions, PieceFinish};

impl LayoutStore {
    /// Translates every piece in `ids` by `delta` in one step.
    ///
    /// Unknown ids reject the whole move. Repeated ids move once. No history
    /// entry is recorded; callers commit at the end of the gesture.
    pub fn move_pieces(&mut self, ids: &[u64], delta: Delta) -> Result<(), LayoutError> {
        delta.validate()?;
        let mut indices = Vec::with_capacity(ids.len());
        for id in ids {
            let index = self.index_of(*id)?;
            if !indices.contains(&index) {
                indices.push(index);
            }
        }
        if delta.is_zero() {
            return Ok(());
        }

        for index in indices {
            let piece = &mut self.pieces[index];
            piece.x += delta.x;
            piece.y += delta.y;
        }
        self.is_modified = true;
        Ok(())
    }

    /// Places a piece at an absolute position.
    pub fn set_position(&mut self, id: u64, x: f64, y: f64) -> Result<(), LayoutError> {
        if !x.is_finite() {
            return Err(LayoutError::NonFiniteCoordinate { field: "x" });
        }
        if !y.is_finite() {
            return Err(LayoutError::NonFiniteCoordinate { field: "y" });
        }
        let index = self.index_of(id)?;
        let piece = &mut self.pieces[index];
        piece.x = x;
        piece.y = y;
        self.is_modified = true;
        Ok(())
    }

    /// Sets width, height and depth together.
    ///
    /// Non-positive values are rejected, never clamped.
    pub fn resize_piece(&mut self, id: u64, dims: PieceDimensions) -> Result<(), LayoutError> {
        if let Err(err) = dims.validate() {
            tracing::warn!("Rejected resize of piece {}: {}", id, err);
            return Err(err);
        }
        let index = self.index_of(id)?;
        let piece = &mut self.pieces[index];
        piece.width = dims.width;
        piece.height = dims.height;
        piece.depth = dims.depth;
        self.is_modified = true;
        tracing::debug!(
            "Resized piece {} to {}x{}x{}",
            id,
            dims.width,
            dims.height,
            dims.depth
        );
        Ok(())
    }

    /// Sets the rotation in degrees; any finite angle is accepted and
    /// normalized into `[0, 360)`.
    pub fn rotate_piece(&mut self, id: u64, angle: f64) -> Result<(), LayoutError> {
        let index = self.index_of(id)?;
        let rotation = normalize_rotation(angle)?;
        self.pieces[index].rotation = rotation;
        self.is_modified = true;
        Ok(())
    }

    /// Sets the corner rounding, which must lie in `[0, max_border_radius]`.
    pub fn set_border_radius(&mut self, id: u64, radius: f64) -> Result<(), LayoutError> {
        check_border_radius(radius, self.max_border_radius)?;
        let index = self.index_of(id)?;
        self.pieces[index].border_radius = radius;
        self.is_modified = true;
        Ok(())
    }

    pub fn set_appearance(
        &mut self,
        id: u64,
        color: impl Into<String>,
        pattern: impl Into<String>,
    ) -> Result<(), LayoutError> {
        let index = self.index_of(id)?;
        let piece = &mut self.pieces[index];
        piece.color = color.into();
        piece.pattern = pattern.into();
        self.is_modified = true;
        Ok(())
    }

    /// Replaces the edge/material metadata of a piece.
    pub fn set_finish(&mut self, id: u64, finish: PieceFinish) -> Result<(), LayoutError> {
        let index = self.index_of(id)?;
        self.pieces[index].finish = finish;
        self.is_modified = true;
        Ok(())
    }
}
