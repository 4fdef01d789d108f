//! Pointer handling for the layout store.
//!
//! A gesture is pointer-down on a piece, any number of pointer-moves, then
//! pointer-up. Every move is applied to all selected pieces immediately; the
//! gesture as a whole produces at most one history entry, on pointer-up.

use counterkit_core::LayoutError;

use super::LayoutStore;
use crate::model::{Delta, Point};

impl LayoutStore {
    /// Selects the piece under the pointer and starts a drag.
    ///
    /// With `additive` (shift held) the piece joins the current selection,
    /// otherwise it replaces it.
    pub fn pointer_down(
        &mut self,
        pointer: Point,
        id: u64,
        additive: bool,
    ) -> Result<(), LayoutError> {
        if additive {
            self.select_add(id)?;
        } else {
            self.select_only(id)?;
        }
        self.drag.start_drag(pointer, id);
        self.gesture_moved = false;
        Ok(())
    }

    /// Moves the selection by the pointer delta.
    ///
    /// Returns the applied delta, or `None` when no drag is in progress.
    pub fn pointer_move(&mut self, pointer: Point) -> Result<Option<Delta>, LayoutError> {
        let zoom = self.viewport.zoom();
        let Some(delta) = self.drag.on_drag(pointer, zoom, self.snap_to_grid) else {
            return Ok(None);
        };
        if delta.is_zero() {
            return Ok(Some(delta));
        }

        let ids = self.selection.selected_ids().to_vec();
        self.move_pieces(&ids, delta)?;
        self.gesture_moved = true;
        Ok(Some(delta))
    }

    /// Ends the drag and commits the gesture if it moved anything.
    ///
    /// Returns whether a history entry was recorded.
    pub fn pointer_up(&mut self) -> bool {
        if !self.drag.is_dragging() {
            return false;
        }
        self.drag.stop_drag();
        let moved = std::mem::take(&mut self.gesture_moved);
        moved && self.commit()
    }
}
