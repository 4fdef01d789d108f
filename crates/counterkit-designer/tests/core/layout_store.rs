use counterkit_core::LayoutError;
use counterkit_designer::{LayoutStore, Piece, PieceDimensions};

fn store() -> LayoutStore {
    let mut store = LayoutStore::new();
    store
        .load_layout(vec![
            Piece::new(1, 0.0, 0.0, PieceDimensions::new(72.0, 24.0, 1.5)),
            Piece::new(2, 72.0, 0.0, PieceDimensions::new(24.0, 72.0, 1.5)),
        ])
        .unwrap();
    store
}

#[test]
fn test_rotate_negative_angle() {
    let mut store = store();
    store.rotate_piece(1, -450.0).unwrap();
    assert_eq!(store.piece(1).map(|p| p.rotation), Some(270.0));
}

#[test]
fn test_rejected_resize_leaves_piece() {
    let mut store = store();
    let err = store
        .resize_piece(1, PieceDimensions::new(72.0, -3.0, 1.5))
        .unwrap_err();
    assert_eq!(
        err,
        LayoutError::InvalidDimension {
            field: "height",
            value: -3.0
        }
    );
    assert_eq!(store.piece(1).map(|p| p.height), Some(24.0));
}

#[test]
fn test_removing_sole_selected_piece_empties_selection() {
    let mut store = store();
    store.select_only(2).unwrap();
    store.remove_piece(2).unwrap();
    assert!(store.selection().is_empty());
    assert_eq!(store.selection().active_id(), None);
    assert!(store.active_piece().is_none());
}

#[test]
fn test_select_add_is_idempotent() {
    let mut store = store();
    store.select_only(1).unwrap();
    store.select_add(2).unwrap();
    store.select_add(1).unwrap();
    assert_eq!(store.selection().selected_ids(), &[1, 2]);
}

#[test]
fn test_unknown_id_is_stale_reference() {
    let mut store = store();
    let err = store.rotate_piece(42, 90.0).unwrap_err();
    assert!(err.is_stale_reference());
    assert_eq!(store.piece_count(), 2);
}

#[test]
fn test_snapshot_is_detached() {
    let mut store = store();
    store.select_all();
    let snapshot = store.snapshot();
    store.remove_selected();
    assert_eq!(snapshot.pieces.len(), 2);
    assert_eq!(snapshot.selected_ids, vec![1, 2]);
    assert_eq!(store.piece_count(), 0);
}

#[test]
fn test_snapshot_json_keys() {
    let json = serde_json::to_string(&store().snapshot()).unwrap();
    assert!(json.contains("\"selectedIds\""));
    assert!(json.contains("\"showGrid\""));
    assert!(json.contains("\"borderRadius\""));
}

#[test]
fn test_store_with_inverted_zoom_limits() {
    let options = counterkit_designer::LayoutOptions {
        zoom: counterkit_designer::ZoomLimits {
            initial: 1.0,
            min: 6.0,
            max: 5.0,
            step: 1.2,
        },
        ..Default::default()
    };
    let mut store = LayoutStore::with_options(options);
    store.zoom_in();
    assert!((store.zoom() - 1.2).abs() < 1e-12);
    store.reset_zoom();
    assert_eq!(store.zoom(), 1.0);
}
