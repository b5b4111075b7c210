//! Tests for bed groupings, shape lifecycle and the external load/update
//! interface.

use bedplanner_designer::{Canvas, Point, Shape, ShapeKind, ShapePatch};

#[test]
fn test_deleting_shape_cleans_all_bed_references() {
    let mut canvas = Canvas::with_size(800.0, 600.0);
    let a = canvas.create_shape(ShapeKind::Rectangle);
    let b = canvas.create_shape(ShapeKind::Circle);

    canvas.beds_mut().create_bed("herbs", [a, b]).unwrap();
    canvas.beds_mut().create_bed("spring", [a]).unwrap();

    canvas.delete_shape(a);

    // The id is gone from both beds; other shapes and beds are unaffected.
    assert!(!canvas.beds().bed("herbs").unwrap().shape_ids.contains(&a));
    assert!(canvas.beds().bed("herbs").unwrap().shape_ids.contains(&b));
    assert!(canvas.beds().bed("spring").unwrap().shape_ids.is_empty());
    assert_eq!(canvas.shape_count(), 1);
    assert!(canvas.get_shape(b).is_some());
}

#[test]
fn test_duplicate_bed_name_is_rejected() {
    let mut canvas = Canvas::with_size(800.0, 600.0);
    canvas.beds_mut().create_bed("herbs", []).unwrap();
    assert!(canvas.beds_mut().create_bed("herbs", []).is_err());
}

#[test]
fn test_bed_rename_and_assignment() {
    let mut canvas = Canvas::with_size(800.0, 600.0);
    let a = canvas.create_shape(ShapeKind::Rectangle);

    canvas.beds_mut().create_bed("herbs", []).unwrap();
    canvas.beds_mut().assign("herbs", a).unwrap();
    assert!(canvas.beds().bed("herbs").unwrap().shape_ids.contains(&a));

    canvas.beds_mut().rename_bed("herbs", "kitchen herbs").unwrap();
    assert!(canvas.beds().bed("herbs").is_none());
    assert!(canvas.beds().bed("kitchen herbs").unwrap().shape_ids.contains(&a));

    canvas.beds_mut().unassign("kitchen herbs", a).unwrap();
    assert!(canvas.beds().bed("kitchen herbs").unwrap().shape_ids.is_empty());

    assert!(canvas.beds_mut().assign("nope", a).is_err());
}

#[test]
fn test_deleting_selected_shape_clears_selection() {
    let mut canvas = Canvas::with_size(800.0, 600.0);
    let id = canvas.create_shape(ShapeKind::Rectangle);
    canvas.set_selected(Some(id));

    canvas.delete_shape(id);
    assert_eq!(canvas.selected_id(), None);
}

#[test]
fn test_new_shapes_append_on_top() {
    let mut canvas = Canvas::with_size(800.0, 600.0);
    let below = canvas.create_shape(ShapeKind::Rectangle);
    let above = canvas.create_shape(ShapeKind::Rectangle);

    let order: Vec<_> = canvas.shapes().map(|s| s.id).collect();
    assert_eq!(order, vec![below, above]);

    // Both cover the viewport center; hit-testing picks the topmost.
    canvas.pointer_down(Point::new(400.0, 300.0));
    canvas.pointer_up();
    assert_eq!(canvas.selected_id(), Some(above));
}

#[test]
fn test_create_shape_uses_type_defaults() {
    let mut canvas = Canvas::with_size(800.0, 600.0);

    let rect = canvas.create_shape(ShapeKind::Rectangle);
    let rect = canvas.get_shape(rect).unwrap();
    assert_eq!(rect.start, Point::new(350.0, 270.0));
    assert_eq!(rect.end, Point::new(450.0, 330.0));

    let circle = canvas.create_shape(ShapeKind::Circle);
    let circle = canvas.get_shape(circle).unwrap();
    assert_eq!(circle.width(), 80.0);
    assert_eq!(circle.height(), 80.0);

    let line = canvas.create_shape(ShapeKind::Line);
    let line = canvas.get_shape(line).unwrap();
    assert_eq!(line.start, Point::new(350.0, 300.0));
    assert_eq!(line.end, Point::new(450.0, 300.0));
}

#[test]
fn test_load_shapes_replaces_collection_and_resets_interaction() {
    let mut canvas = Canvas::with_size(800.0, 600.0);
    let old = canvas.create_shape(ShapeKind::Rectangle);
    canvas.set_selected(Some(old));

    let replacement = Shape::rectangle(Point::new(10.0, 10.0));
    let new_id = replacement.id;
    canvas.load_shapes(vec![replacement]);

    assert_eq!(canvas.shape_count(), 1);
    assert!(canvas.get_shape(old).is_none());
    assert!(canvas.get_shape(new_id).is_some());
    assert_eq!(canvas.selected_id(), None);
}

#[test]
fn test_load_shapes_strips_stale_bed_references() {
    let mut canvas = Canvas::with_size(800.0, 600.0);
    let old = canvas.create_shape(ShapeKind::Rectangle);
    let kept = canvas.create_shape(ShapeKind::Circle);
    canvas.beds_mut().create_bed("herbs", [old, kept]).unwrap();

    // Load a collection that keeps one shape and drops the other.
    let survivor = canvas.get_shape(kept).unwrap().clone();
    canvas.load_shapes(vec![survivor, Shape::rectangle(Point::new(10.0, 10.0))]);

    // No bed may reference a shape that no longer exists.
    let bed = canvas.beds().bed("herbs").unwrap();
    assert!(!bed.shape_ids.contains(&old));
    assert!(bed.shape_ids.contains(&kept));
}

#[test]
fn test_clear_shapes_empties_bed_references() {
    let mut canvas = Canvas::with_size(800.0, 600.0);
    let a = canvas.create_shape(ShapeKind::Rectangle);
    canvas.beds_mut().create_bed("herbs", [a]).unwrap();

    canvas.clear_shapes();
    assert_eq!(canvas.shape_count(), 0);
    assert!(canvas.beds().bed("herbs").unwrap().shape_ids.is_empty());
}

#[test]
fn test_update_for_unknown_shape_is_silent_noop() {
    let mut canvas = Canvas::with_size(800.0, 600.0);
    let id = canvas.create_shape(ShapeKind::Rectangle);
    canvas.delete_shape(id);

    // A stale handle racing a deletion: dropped, no panic, no mutation.
    canvas.apply_update(
        id,
        &ShapePatch {
            rotation: Some(45.0),
            ..Default::default()
        },
    );
    assert_eq!(canvas.shape_count(), 0);
}

#[test]
fn test_apply_update_merges_partial_fields() {
    let mut canvas = Canvas::with_size(800.0, 600.0);
    let id = canvas.create_shape(ShapeKind::Rectangle);

    canvas.apply_update(
        id,
        &ShapePatch {
            end: Some(Point::new(500.0, 400.0)),
            ..Default::default()
        },
    );

    let shape = canvas.get_shape(id).unwrap();
    assert_eq!(shape.end, Point::new(500.0, 400.0));
    assert_eq!(shape.start, Point::new(350.0, 270.0), "untouched field kept");
    assert_eq!(shape.rotation, 0.0);
}
