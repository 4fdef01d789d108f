use counterkit_designer::{Delta, LayoutOptions, LayoutStore, Piece, PieceDimensions, Point};

fn store_with(options: LayoutOptions) -> LayoutStore {
    let mut store = LayoutStore::with_options(options);
    store
        .add_piece(Piece::new(1, 0.0, 0.0, PieceDimensions::new(72.0, 24.0, 1.5)))
        .unwrap();
    store.reset_history();
    store
}

#[test]
fn test_snapped_drag_rounds_to_grid() {
    let mut store = store_with(LayoutOptions {
        snap_to_grid: true,
        ..LayoutOptions::default()
    });
    store.pointer_down(Point::new(0.0, 0.0), 1, false).unwrap();
    let delta = store.pointer_move(Point::new(23.0, 5.0)).unwrap();
    assert_eq!(delta, Some(Delta::new(20.0, 0.0)));
    assert_eq!(store.piece(1).map(|p| (p.x, p.y)), Some((20.0, 0.0)));
}

#[test]
fn test_unsnapped_drag_scales_by_zoom() {
    let mut store = store_with(LayoutOptions::default());
    store.set_zoom_level(2.0);
    store.pointer_down(Point::new(0.0, 0.0), 1, false).unwrap();
    let delta = store.pointer_move(Point::new(40.0, 10.0)).unwrap();
    assert_eq!(delta, Some(Delta::new(20.0, 5.0)));
}

#[test]
fn test_small_snapped_steps_do_not_accumulate() {
    let mut store = store_with(LayoutOptions {
        snap_to_grid: true,
        ..LayoutOptions::default()
    });
    store.pointer_down(Point::new(0.0, 0.0), 1, false).unwrap();
    for step in 1..=5 {
        store
            .pointer_move(Point::new(9.0 * step as f64, 0.0))
            .unwrap();
    }
    // 45 units of pointer travel in 9-unit increments, each rounded to zero
    assert_eq!(store.piece(1).map(|p| p.x), Some(0.0));
    assert!(!store.pointer_up());
    assert_eq!(store.undo_depth(), 0);
}

#[test]
fn test_drag_moves_whole_selection() {
    let mut store = store_with(LayoutOptions::default());
    store
        .add_piece(Piece::new(2, 100.0, 0.0, PieceDimensions::new(24.0, 24.0, 1.5)))
        .unwrap();
    store.select_only(2).unwrap();
    store.pointer_down(Point::new(5.0, 5.0), 1, true).unwrap();
    store.pointer_move(Point::new(15.0, 8.0)).unwrap();
    assert!(store.pointer_up());

    assert_eq!(store.piece(1).map(|p| (p.x, p.y)), Some((10.0, 3.0)));
    assert_eq!(store.piece(2).map(|p| (p.x, p.y)), Some((110.0, 3.0)));
    assert_eq!(store.selection().selected_ids(), &[2, 1]);
}

#[test]
fn test_move_without_drag_is_ignored() {
    let mut store = store_with(LayoutOptions::default());
    assert_eq!(store.pointer_move(Point::new(50.0, 50.0)).unwrap(), None);
    assert!(!store.pointer_up());
    assert_eq!(store.piece(1).map(|p| p.x), Some(0.0));
}

#[test]
fn test_removing_drag_target_mid_gesture() {
    let mut store = store_with(LayoutOptions::default());
    store
        .add_piece(Piece::new(2, 100.0, 0.0, PieceDimensions::new(24.0, 24.0, 1.5)))
        .unwrap();
    store.select_only(2).unwrap();
    store.pointer_down(Point::new(0.0, 0.0), 1, true).unwrap();

    store.remove_piece(1).unwrap();
    assert_eq!(store.selection().selected_ids(), &[2]);
    assert!(store.drag().is_dragging());

    let delta = store.pointer_move(Point::new(10.0, 4.0)).unwrap();
    assert_eq!(delta, Some(Delta::new(10.0, 4.0)));
    assert_eq!(store.piece(2).map(|p| (p.x, p.y)), Some((110.0, 4.0)));
    assert!(store.pointer_up());
    assert!(!store.drag().is_dragging());
}
