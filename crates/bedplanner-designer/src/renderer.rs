//! Render pass for the canvas.
//!
//! Produces pure screen-space primitives in draw order; the host (whatever
//! widget toolkit or DOM layer embeds the engine) does the actual painting.
//! Every world coordinate is put through the viewport transform here, so
//! the host never touches pan or scale directly.

use bedplanner_core::constants::{GRID_UNIT, MIN_LINE_THICKNESS};
use bedplanner_core::Point;

use crate::canvas::Canvas;
use crate::handles::{handle_layout, PlacedHandle};
use crate::model::{Shape, ShapeKind};
use crate::viewport::{GridPattern, Viewport};

/// One shape projected into screen space.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderShape {
    /// Rectangle or circle: a box rotated about its own center.
    /// `corner_radius` is 50% of the smaller extent for circles, 0 otherwise.
    Box {
        center: Point,
        width: f64,
        height: f64,
        corner_radius: f64,
        rotation: f64,
        color: String,
        stroke_width: f64,
        selected: bool,
    },
    /// Line: a thin filled bar from `origin`, rotated about its own start
    /// point by the angle between the endpoints. Thickness has a grabbable
    /// floor regardless of stroke width.
    Bar {
        origin: Point,
        length: f64,
        thickness: f64,
        angle: f64,
        color: String,
        selected: bool,
    },
    /// Freehand stroke: a screen-space polyline.
    Polyline {
        points: Vec<Point>,
        color: String,
        stroke_width: f64,
        selected: bool,
    },
}

/// Everything the host needs to paint one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub grid: GridPattern,
    pub shapes: Vec<RenderShape>,
    /// Handles of the selected shape, empty when nothing is selected.
    pub handles: Vec<PlacedHandle>,
}

/// Projects the whole canvas into a screen-space scene.
pub fn render_scene(canvas: &Canvas) -> Scene {
    let viewport = canvas.viewport();
    let shapes = canvas
        .shapes()
        .map(|shape| render_shape(shape, viewport, canvas.selected_id() == Some(shape.id)))
        .collect();
    let handles = canvas
        .selected_shape()
        .map(|shape| handle_layout(shape, viewport))
        .unwrap_or_default();
    Scene {
        grid: viewport.grid_pattern(GRID_UNIT),
        shapes,
        handles,
    }
}

fn render_shape(shape: &Shape, viewport: &Viewport, selected: bool) -> RenderShape {
    let scale = viewport.scale();
    match shape.kind {
        ShapeKind::Rectangle | ShapeKind::Circle => {
            let width = shape.width() * scale;
            let height = shape.height() * scale;
            let corner_radius = if shape.kind == ShapeKind::Circle {
                width.min(height) / 2.0
            } else {
                0.0
            };
            RenderShape::Box {
                center: viewport.world_to_screen(shape.center()),
                width,
                height,
                corner_radius,
                rotation: shape.rotation,
                color: shape.color.clone(),
                stroke_width: shape.stroke_width,
                selected,
            }
        }
        ShapeKind::Line => {
            let start = viewport.world_to_screen(shape.start);
            let end = viewport.world_to_screen(shape.end);
            let dx = end.x - start.x;
            let dy = end.y - start.y;
            RenderShape::Bar {
                origin: start,
                length: (dx * dx + dy * dy).sqrt(),
                thickness: shape.stroke_width.max(MIN_LINE_THICKNESS),
                angle: dy.atan2(dx).to_degrees(),
                color: shape.color.clone(),
                selected,
            }
        }
        ShapeKind::Freehand => RenderShape::Polyline {
            points: shape
                .points
                .iter()
                .map(|p| viewport.world_to_screen(*p))
                .collect(),
            color: shape.color.clone(),
            stroke_width: shape.stroke_width,
            selected,
        },
    }
}
