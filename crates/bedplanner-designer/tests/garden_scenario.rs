//! End-to-end scenarios: a full editing session through the planner state,
//! the render pass and the save/load document format.

use bedplanner_designer::{
    render_scene, Canvas, Handle, HandleDirection, PlannerState, Point, RenderShape, SavedGarden,
    ShapeKind,
};

fn handle_screen(canvas: &Canvas, wanted: Handle) -> Point {
    let shape = canvas.selected_shape().expect("shape selected");
    bedplanner_designer::handle_layout(shape, canvas.viewport())
        .iter()
        .find(|h| h.handle == wanted)
        .expect("handle placed")
        .screen
}

#[test]
fn test_create_then_resize_scenario() {
    let mut canvas = Canvas::with_size(800.0, 600.0);

    // A rectangle created at the viewport center with pan (0,0) and scale 1
    // spans (center - 50, center - 30)..(center + 50, center + 30).
    let id = canvas.create_shape(ShapeKind::Rectangle);
    let shape = canvas.get_shape(id).unwrap();
    assert_eq!(shape.start, Point::new(350.0, 270.0));
    assert_eq!(shape.end, Point::new(450.0, 330.0));

    // Resize via the bottom-right handle by a world delta of (20, 10).
    canvas.pointer_down(Point::new(400.0, 300.0));
    canvas.pointer_up();
    let grab = handle_screen(&canvas, Handle::Resize(HandleDirection::BottomRight));
    canvas.pointer_down(grab);
    canvas.pointer_move(Point::new(grab.x + 20.0, grab.y + 10.0), false);
    canvas.pointer_up();

    let shape = canvas.get_shape(id).unwrap();
    assert_eq!(shape.end, Point::new(470.0, 340.0));
    assert_eq!(shape.start, Point::new(350.0, 270.0), "start unchanged");
}

#[test]
fn test_render_pass_projects_to_screen_space() {
    let mut canvas = Canvas::with_size(800.0, 600.0);
    let circle = canvas.create_shape(ShapeKind::Circle);
    canvas.create_shape(ShapeKind::Line);
    canvas.viewport_mut().set_pan(Point::new(50.0, 0.0));
    canvas.viewport_mut().set_scale(2.0);
    canvas.set_selected(Some(circle));

    let scene = render_scene(&canvas);
    assert_eq!(scene.shapes.len(), 2);

    // Circle: world center (400, 300) lands at (850, 600); the 80x80 world
    // box doubles and the corner radius makes it round.
    match &scene.shapes[0] {
        RenderShape::Box {
            center,
            width,
            height,
            corner_radius,
            selected,
            ..
        } => {
            assert_eq!(*center, Point::new(850.0, 600.0));
            assert!((width - 160.0).abs() < 1e-9);
            assert!((height - 160.0).abs() < 1e-9);
            assert!((corner_radius - 80.0).abs() < 1e-9);
            assert!(selected);
        }
        other => panic!("expected a box, got {other:?}"),
    }

    // Line: thin strokes still render with a grabbable thickness floor.
    match &scene.shapes[1] {
        RenderShape::Bar {
            length, thickness, ..
        } => {
            assert!((length - 200.0).abs() < 1e-9);
            assert!((thickness - 8.0).abs() < 1e-9);
        }
        other => panic!("expected a bar, got {other:?}"),
    }

    // Only the selected shape contributes handles.
    assert!(!scene.handles.is_empty());
    canvas.set_selected(None);
    assert!(render_scene(&canvas).handles.is_empty());
}

#[test]
fn test_grid_pattern_follows_viewport() {
    let mut canvas = Canvas::with_size(800.0, 600.0);
    canvas.viewport_mut().set_scale(2.0);
    canvas.viewport_mut().set_pan(Point::new(130.0, -30.0));

    let scene = render_scene(&canvas);
    assert!((scene.grid.cell - 50.0).abs() < 1e-9);
    assert!((scene.grid.offset_x - 30.0).abs() < 1e-9);
    assert!((scene.grid.offset_y - 20.0).abs() < 1e-9);
}

#[test]
fn test_save_load_round_trips_shapes_and_beds() {
    let mut canvas = Canvas::with_size(800.0, 600.0);
    let rect = canvas.create_shape(ShapeKind::Rectangle);
    let circle = canvas.create_shape(ShapeKind::Circle);
    canvas.beds_mut().create_bed("herbs", [rect, circle]).unwrap();
    canvas.viewport_mut().set_pan(Point::new(99.0, 99.0));

    let json = SavedGarden::from_canvas("Backyard", &canvas).to_json().unwrap();

    let mut restored = Canvas::with_size(800.0, 600.0);
    SavedGarden::from_json(&json)
        .unwrap()
        .restore_into(&mut restored);

    assert_eq!(restored.shape_count(), 2);
    assert_eq!(restored.get_shape(rect), canvas.get_shape(rect));
    assert_eq!(restored.get_shape(circle), canvas.get_shape(circle));
    let bed = restored.beds().bed("herbs").unwrap();
    assert!(bed.shape_ids.contains(&rect) && bed.shape_ids.contains(&circle));

    // Viewport state is view-only and never part of the document.
    assert_eq!(restored.viewport().pan(), Point::new(0.0, 0.0));
}

#[test]
fn test_planner_state_session() {
    let mut state = PlannerState::new();
    assert!(!state.is_modified);

    // Default viewport is 1200x800, so the rectangle centers on (600, 400).
    let id = state.create_shape(ShapeKind::Rectangle);
    assert!(state.is_modified);
    let shape = state.canvas.get_shape(id).unwrap();
    assert_eq!(shape.start, Point::new(550.0, 370.0));
    assert_eq!(shape.end, Point::new(650.0, 430.0));

    // Drag the body through the host-facing pointer interface.
    state.on_pointer_down(Point::new(600.0, 400.0));
    state.on_pointer_move(Point::new(610.0, 400.0));
    state.on_pointer_up();
    assert_eq!(state.take_pending_updates().len(), 1);

    // Wheel up zooms in one tick; zoom never touches geometry.
    state.on_wheel(1.0);
    assert!((state.canvas.viewport().scale() - 1.05).abs() < 1e-9);

    let json = state.save_to_json().unwrap();
    assert!(!state.is_modified);

    let mut reloaded = PlannerState::new();
    reloaded.garden_name = "scratch".to_string();
    reloaded.load_from_json(&json).unwrap();
    assert_eq!(reloaded.garden_name, "Untitled");
    assert_eq!(
        reloaded.canvas.get_shape(id).unwrap().start,
        Point::new(560.0, 370.0)
    );
}
