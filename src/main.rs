//! Scripted demo session: lays out a small garden, drags a bed around and
//! prints the resulting scene. Useful for eyeballing the engine without a
//! UI host attached.

use bedplanner::{init_logging, Point, RenderShape, ShapeKind};
use tracing::info;

fn main() -> anyhow::Result<()> {
    init_logging()?;

    let mut state = bedplanner::PlannerState::new();
    state.garden_name = "Demo Garden".to_string();

    let herb_bed = state.create_shape(ShapeKind::Rectangle);
    let flower_bed = state.create_shape(ShapeKind::Circle);
    state.canvas.beds_mut().create_bed("herbs", [herb_bed])?;
    state.canvas.beds_mut().create_bed("flowers", [flower_bed])?;

    // Drag the herb bed 80px right, 40px down. The circle sits on top, so
    // grab the rectangle through its left edge region.
    let center = state.canvas.viewport().center();
    state.on_pointer_down(Point::new(center.x - 45.0, center.y));
    state.on_pointer_move(Point::new(center.x + 35.0, center.y + 40.0));
    state.on_pointer_up();

    for update in state.take_pending_updates() {
        info!(shape = %update.id, patch = ?update.patch, "geometry update");
    }

    let scene = bedplanner::render_scene(&state.canvas);
    info!(
        grid_cell = scene.grid.cell,
        shapes = scene.shapes.len(),
        handles = scene.handles.len(),
        "rendered scene"
    );
    for shape in &scene.shapes {
        match shape {
            RenderShape::Box { center, width, height, .. } => {
                info!("box at ({:.1}, {:.1}) {}x{}", center.x, center.y, width, height);
            }
            RenderShape::Bar { origin, length, .. } => {
                info!("bar from ({:.1}, {:.1}) length {:.1}", origin.x, origin.y, length);
            }
            RenderShape::Polyline { points, .. } => {
                info!("stroke with {} points", points.len());
            }
        }
    }

    println!("{}", state.save_to_json()?);
    Ok(())
}
