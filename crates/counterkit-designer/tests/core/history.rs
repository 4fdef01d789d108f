use counterkit_designer::{Delta, LayoutStore, Piece, PieceDimensions, Point};

fn slab() -> Piece {
    Piece::new(1, 0.0, 0.0, PieceDimensions::new(72.0, 24.0, 1.5))
}

fn position(store: &LayoutStore, id: u64) -> Option<(f64, f64)> {
    store.piece(id).map(|p| (p.x, p.y))
}

#[test]
fn test_move_commit_undo_redo_scenario() {
    let mut store = LayoutStore::new();
    store.load_layout(vec![slab()]).unwrap();
    store.reset_history();

    store.move_pieces(&[1], Delta::new(10.0, 5.0)).unwrap();
    assert!(store.commit());

    assert!(store.undo());
    assert_eq!(position(&store, 1), Some((0.0, 0.0)));

    assert!(store.redo());
    assert_eq!(position(&store, 1), Some((10.0, 5.0)));
    assert!(!store.can_redo());
}

#[test]
fn test_undo_redo_restore_selection() {
    let mut store = LayoutStore::new();
    store.load_layout(vec![slab()]).unwrap();
    store.reset_history();

    store.select_only(1).unwrap();
    store.rotate_piece(1, 90.0).unwrap();
    store.commit();
    store.clear_selection();
    store.rotate_piece(1, 180.0).unwrap();
    store.commit();

    store.undo();
    assert_eq!(store.piece(1).map(|p| p.rotation), Some(90.0));
    assert_eq!(store.selection().active_id(), Some(1));
    store.undo();
    assert_eq!(store.piece(1).map(|p| p.rotation), Some(0.0));
    assert!(store.selection().is_empty());
    assert!(!store.undo());
}

#[test]
fn test_new_edit_after_undo_clears_redo() {
    let mut store = LayoutStore::new();
    store.load_layout(vec![slab()]).unwrap();
    store.reset_history();

    store.move_pieces(&[1], Delta::new(10.0, 0.0)).unwrap();
    store.commit();
    store.undo();
    assert!(store.can_redo());

    store.move_pieces(&[1], Delta::new(0.0, 7.0)).unwrap();
    store.commit();
    assert!(!store.can_redo());
    assert!(!store.redo());
    assert_eq!(position(&store, 1), Some((0.0, 7.0)));
}

#[test]
fn test_gesture_is_one_history_entry() {
    let mut store = LayoutStore::new();
    store.load_layout(vec![slab()]).unwrap();
    store.reset_history();

    store.pointer_down(Point::new(0.0, 0.0), 1, false).unwrap();
    for x in [5.0, 10.0, 20.0, 40.0] {
        store.pointer_move(Point::new(x, 0.0)).unwrap();
    }
    assert!(store.pointer_up());
    assert_eq!(store.undo_depth(), 1);

    store.undo();
    assert_eq!(position(&store, 1), Some((0.0, 0.0)));
}

#[test]
fn test_depth_cap() {
    let mut store = LayoutStore::with_options(counterkit_designer::LayoutOptions {
        max_history_depth: Some(2),
        ..Default::default()
    });
    store.load_layout(vec![slab()]).unwrap();
    store.reset_history();
    for _ in 0..5 {
        store.move_pieces(&[1], Delta::new(1.0, 0.0)).unwrap();
        store.commit();
    }
    assert_eq!(store.undo_depth(), 2);
    while store.undo() {}
    assert_eq!(position(&store, 1), Some((3.0, 0.0)));
}
