use counterkit_designer::{estimate_layout, LayoutStore, PriceTable, TemplateLibrary};

#[test]
fn test_template_then_estimate() {
    let library = TemplateLibrary::new();
    let template = library.get_template("U-shaped").unwrap();

    let mut store = LayoutStore::new();
    store.apply_template(&template).unwrap();
    assert_eq!(store.piece_count(), 3);

    let estimate = estimate_layout(store.pieces(), &PriceTable::default());
    // three 72x24 runs: 12 sq ft each at the default rate
    assert!((estimate.area_sq_ft - 36.0).abs() < 1e-9);
    assert!((estimate.subtotal - 1800.0).abs() < 1e-9);
}

#[test]
fn test_applying_template_is_undoable_after_commit() {
    let library = TemplateLibrary::new();
    let mut store = LayoutStore::new();
    store
        .apply_template(&library.get_template("L-shaped").unwrap())
        .unwrap();
    assert!(store.commit());
    assert!(store.undo());
    assert_eq!(store.piece_count(), 0);
}
