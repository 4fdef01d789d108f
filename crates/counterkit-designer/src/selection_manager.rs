/// Tracks which pieces are selected and which one is active.
///
/// `SelectionManager` is responsible for:
/// - Keeping the ordered set of selected piece ids (no duplicates)
/// - Tracking the "active" piece whose properties are shown in edit controls
/// - Repairing the selection when a piece leaves the layout
///
/// # Selection Model
///
/// - **Selected ids**: insertion-ordered, each id at most once
/// - **Active id**: the last-focused piece; always a member of the selection
///   when set
///
/// # Design
///
/// The manager knows nothing about which ids exist. The layout store checks
/// ids against its pieces before calling in.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionManager {
    selected_ids: Vec<u64>,
    active_id: Option<u64>,
}

impl SelectionManager {
    /// Creates a new `SelectionManager` with no selection.
    ///
    /// # Examples
    ///
    /// ```
    /// use counterkit_designer::selection_manager::SelectionManager;
    ///
    /// let manager = SelectionManager::new();
    /// assert!(manager.selected_ids().is_empty());
    /// assert_eq!(manager.active_id(), None);
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    /// Restores a selection captured earlier (e.g. from a history entry).
    pub(crate) fn from_parts(selected_ids: Vec<u64>, active_id: Option<u64>) -> Self {
        Self {
            selected_ids,
            active_id,
        }
    }

    /// Returns the selected ids in selection order.
    pub fn selected_ids(&self) -> &[u64] {
        &self.selected_ids
    }

    /// Returns the active piece id, if any.
    pub fn active_id(&self) -> Option<u64> {
        self.active_id
    }

    pub fn is_selected(&self, id: u64) -> bool {
        self.selected_ids.contains(&id)
    }

    pub fn is_empty(&self) -> bool {
        self.selected_ids.is_empty()
    }

    /// Replaces the selection with `id` and makes it active.
    pub fn select_only(&mut self, id: u64) {
        self.selected_ids.clear();
        self.selected_ids.push(id);
        self.active_id = Some(id);
    }

    /// Adds `id` to the selection and makes it active.
    ///
    /// Selecting an id that is already selected leaves the order untouched.
    pub fn select_add(&mut self, id: u64) {
        if !self.selected_ids.contains(&id) {
            self.selected_ids.push(id);
        }
        self.active_id = Some(id);
    }

    /// Selects every id in `ids`; the last one becomes active.
    pub fn select_all(&mut self, ids: impl IntoIterator<Item = u64>) {
        self.selected_ids.clear();
        for id in ids {
            if !self.selected_ids.contains(&id) {
                self.selected_ids.push(id);
            }
        }
        self.active_id = self.selected_ids.last().copied();
    }

    /// Deselects everything.
    pub fn clear_selection(&mut self) {
        self.selected_ids.clear();
        self.active_id = None;
    }

    /// Drops `id` from the selection, clearing the active id if it pointed
    /// at that piece.
    pub fn remove(&mut self, id: u64) {
        self.selected_ids.retain(|selected| *selected != id);
        if self.active_id == Some(id) {
            self.active_id = None;
        }
    }

    /// Keeps only the ids accepted by `keep`.
    pub fn retain(&mut self, mut keep: impl FnMut(u64) -> bool) {
        self.selected_ids.retain(|id| keep(*id));
        if let Some(active) = self.active_id {
            if !self.selected_ids.contains(&active) {
                self.active_id = None;
            }
        }
    }
}
