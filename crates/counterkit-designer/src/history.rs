//! Linear undo/redo history of layout snapshots.
//!
//! Every entry is a full deep copy of the pieces plus the selection. `past`
//! runs oldest to newest; `future` runs from the most recently undone entry
//! outwards. Recording a new entry discards `future`.

use std::collections::VecDeque;

use crate::model::Piece;

/// An immutable copy of the undoable part of a layout.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    pub pieces: Vec<Piece>,
    pub selected_ids: Vec<u64>,
    pub active_id: Option<u64>,
}

/// Linear undo/redo stacks.
#[derive(Debug, Clone, Default)]
pub struct History {
    past: Vec<HistoryEntry>,
    future: VecDeque<HistoryEntry>,
    max_depth: Option<usize>,
}

impl History {
    /// Creates an unbounded history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a history that keeps at most `max_depth` undo entries,
    /// evicting the oldest ones first. `None` keeps everything.
    pub fn with_max_depth(max_depth: Option<usize>) -> Self {
        Self {
            max_depth,
            ..Self::default()
        }
    }

    /// Records a copy of `state` and clears the redo stack.
    pub fn commit(&mut self, state: &HistoryEntry) {
        self.past.push(state.clone());
        self.future.clear();
        self.enforce_depth();
    }

    /// Steps back one entry.
    ///
    /// `current` is stashed for redo and the most recent past entry is
    /// returned for the caller to restore. Returns `None` (and changes
    /// nothing) when there is nothing to undo.
    pub fn undo(&mut self, current: &HistoryEntry) -> Option<HistoryEntry> {
        let previous = self.past.pop()?;
        self.future.push_front(current.clone());
        Some(previous)
    }

    /// Steps forward one entry; the mirror image of [`History::undo`].
    pub fn redo(&mut self, current: &HistoryEntry) -> Option<HistoryEntry> {
        let next = self.future.pop_front()?;
        self.past.push(current.clone());
        self.enforce_depth();
        Some(next)
    }

    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    pub fn undo_depth(&self) -> usize {
        self.past.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.future.len()
    }

    pub fn max_depth(&self) -> Option<usize> {
        self.max_depth
    }

    pub fn clear(&mut self) {
        self.past.clear();
        self.future.clear();
    }

    fn enforce_depth(&mut self) {
        if let Some(max) = self.max_depth {
            if self.past.len() > max {
                let excess = self.past.len() - max;
                self.past.drain(..excess);
                tracing::debug!("History trimmed {} oldest entries", excess);
            }
        }
    }
}
