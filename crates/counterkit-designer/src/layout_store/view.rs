//! Zoom, pan and grid controls for the layout store.

use super::LayoutStore;

impl LayoutStore {
    pub fn zoom(&self) -> f64 {
        self.viewport.zoom()
    }

    pub fn zoom_in(&mut self) {
        self.viewport.zoom_in();
    }

    pub fn zoom_out(&mut self) {
        self.viewport.zoom_out();
    }

    /// Sets the zoom, clamped to the configured bounds.
    pub fn set_zoom_level(&mut self, zoom: f64) {
        self.viewport.set_zoom_level(zoom);
    }

    /// Restores the initial zoom and clears the pan offset.
    pub fn reset_zoom(&mut self) {
        self.viewport.reset_zoom();
    }

    pub fn pan(&mut self, dx: f64, dy: f64) {
        self.viewport.pan(dx, dy);
    }

    pub fn set_show_grid(&mut self, show: bool) {
        self.show_grid = show;
    }

    /// Toggle grid visibility
    pub fn toggle_grid(&mut self) {
        self.show_grid = !self.show_grid;
    }

    pub fn set_snap_to_grid(&mut self, snap: bool) {
        self.snap_to_grid = snap;
    }
}
