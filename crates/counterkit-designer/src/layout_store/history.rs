//! Undo/redo for the layout store.
//!
//! The store keeps a baseline: the layout as of the last history boundary
//! (creation, commit, undo, redo or `reset_history`). A commit records the
//! baseline, which is the state being left, and moves the baseline up to the
//! current layout. Undoing right after a commit therefore lands on the layout
//! as it was before the committed edits.

use super::LayoutStore;

impl LayoutStore {
    /// Closes the current interaction and records the state it started from.
    ///
    /// Returns `false` without touching history when nothing changed since
    /// the last boundary.
    pub fn commit(&mut self) -> bool {
        let current = self.capture();
        if current == self.baseline {
            tracing::debug!("Commit skipped: layout unchanged");
            return false;
        }
        self.history.commit(&self.baseline);
        self.baseline = current;
        tracing::debug!("Committed history entry ({} undo)", self.history.undo_depth());
        true
    }

    /// Restores the previous history entry. Returns `false` if there is none.
    pub fn undo(&mut self) -> bool {
        let current = self.capture();
        match self.history.undo(&current) {
            Some(previous) => {
                self.baseline = previous.clone();
                self.restore(previous);
                tracing::debug!("Undo ({} left)", self.history.undo_depth());
                true
            }
            None => false,
        }
    }

    /// Re-applies the most recently undone entry. Returns `false` if there is
    /// none.
    pub fn redo(&mut self) -> bool {
        let current = self.capture();
        match self.history.redo(&current) {
            Some(next) => {
                self.baseline = next.clone();
                self.restore(next);
                tracing::debug!("Redo ({} left)", self.history.redo_depth());
                true
            }
            None => false,
        }
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn undo_depth(&self) -> usize {
        self.history.undo_depth()
    }

    pub fn redo_depth(&self) -> usize {
        self.history.redo_depth()
    }

    /// Drops all history and makes the current layout the new baseline.
    pub fn reset_history(&mut self) {
        self.history.clear();
        self.baseline = self.capture();
    }
}
