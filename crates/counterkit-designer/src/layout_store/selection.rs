//! Selection operations for the layout store.

use counterkit_core::LayoutError;

use super::LayoutStore;
use crate::model::Piece;

impl LayoutStore {
    /// Selects only `id` and makes it the active piece.
    pub fn select_only(&mut self, id: u64) -> Result<(), LayoutError> {
        self.index_of(id)?;
        self.selection.select_only(id);
        Ok(())
    }

    /// Adds `id` to the selection and makes it the active piece.
    pub fn select_add(&mut self, id: u64) -> Result<(), LayoutError> {
        self.index_of(id)?;
        self.selection.select_add(id);
        Ok(())
    }

    /// Selects every piece; the topmost becomes active.
    pub fn select_all(&mut self) {
        let ids: Vec<u64> = self.pieces.iter().map(|p| p.id).collect();
        self.selection.select_all(ids);
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear_selection();
    }

    /// The piece shown in the property editor.
    pub fn active_piece(&self) -> Option<&Piece> {
        self.selection.active_id().and_then(|id| self.piece(id))
    }

    /// Selected pieces in selection order.
    pub fn selected_pieces(&self) -> Vec<&Piece> {
        self.selection
            .selected_ids()
            .iter()
            .filter_map(|id| self.piece(*id))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PieceDimensions;

    fn store() -> LayoutStore {
        let mut store = LayoutStore::new();
        for _ in 0..3 {
            store
                .add_new_piece(0.0, 0.0, PieceDimensions::new(30.0, 25.0, 1.5))
                .unwrap();
        }
        store
    }

    #[test]
    fn test_select_unknown_id() {
        let mut store = store();
        assert_eq!(
            store.select_only(10),
            Err(LayoutError::UnknownPieceId { id: 10 })
        );
        assert!(store.selection().is_empty());
    }

    #[test]
    fn test_select_add_keeps_order() {
        let mut store = store();
        store.select_add(2).unwrap();
        store.select_add(1).unwrap();
        store.select_add(2).unwrap();
        assert_eq!(store.selection().selected_ids(), &[2, 1]);
        assert_eq!(store.active_piece().map(|p| p.id), Some(2));
    }

    #[test]
    fn test_remove_sole_selected_piece() {
        let mut store = store();
        store.select_only(3).unwrap();
        store.remove_piece(3).unwrap();
        assert!(store.selection().selected_ids().is_empty());
        assert_eq!(store.selection().active_id(), None);
        assert!(store.active_piece().is_none());
    }

    #[test]
    fn test_select_all() {
        let mut store = store();
        store.select_all();
        assert_eq!(store.selected_pieces().len(), 3);
        assert_eq!(store.selection().active_id(), Some(3));
        store.clear_selection();
        assert!(store.selected_pieces().is_empty());
    }
}
