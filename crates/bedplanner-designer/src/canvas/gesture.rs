//! Pointer gesture protocol for the canvas.
//!
//! The active gesture is one explicit tagged value owned by the canvas.
//! Pointer-down starts at most one gesture, pointer-move is dispatched on
//! the current variant, and pointer-up returns to `Idle` from any state,
//! including a release outside the canvas bounds, which the host forwards
//! through the same entry point. Single-pointer input is assumed: a second
//! pointer-down during an active gesture is ignored.
//!
//! All handlers run synchronously on the caller's thread; move events are
//! applied in arrival order, so the final geometry is the deterministic
//! composition of every delta.

use tracing::{debug, warn};

use bedplanner_core::constants::ROTATION_SNAP_DEGREES;
use bedplanner_core::Point;

use crate::handles::{handle_layout, hit_test, Handle, HandleDirection};
use crate::model::{Shape, ShapeId};

use super::{Canvas, DrawMode};

impl Canvas {
    /// Handles pointer-down at a screen position.
    ///
    /// Resolution order: a handle of the selected shape, then the topmost
    /// shape body (which selects and never also pans), then the background
    /// (which clears the selection and pans or starts a freehand stroke,
    /// depending on the draw mode).
    pub fn pointer_down(&mut self, screen: Point) {
        if !matches!(self.gesture(), Gesture::Idle) {
            warn!("ignoring pointer-down while a gesture is active");
            return;
        }

        // Handles of the selected shape take priority over shape bodies.
        let handle_hit = self
            .selected_shape()
            .map(|shape| (shape.id, hit_test(&handle_layout(shape, self.viewport()), screen)));
        match handle_hit {
            Some((id, Some(Handle::Resize(direction)))) => {
                self.begin_resize(id, direction, screen);
                return;
            }
            Some((id, Some(Handle::Rotate))) => {
                self.begin_rotate(id, screen);
                return;
            }
            _ => {}
        }

        let world = self.viewport().screen_to_world(screen);
        let tolerance = 3.0 / self.viewport().scale();
        let hit = self
            .shape_store
            .iter_top_down()
            .find(|s| s.contains_point(world, tolerance))
            .map(|s| s.id);

        if let Some(id) = hit {
            self.begin_move(id, screen);
            return;
        }

        // Empty canvas: clear selection, then pan or draw.
        self.set_selected(None);
        match self.mode() {
            DrawMode::Select => {
                self.viewport_mut().begin_pan(screen);
                self.set_gesture(Gesture::Panning);
                debug!("gesture: panning");
            }
            DrawMode::Freehand => {
                let seed = self.viewport().screen_to_world(screen);
                let id = self.shape_store.insert(Shape::freehand(seed));
                self.set_gesture(Gesture::DrawingFreehand { id });
                debug!(%id, "gesture: drawing freehand");
            }
        }
    }

    /// Handles pointer-move at a screen position. `shift_held` enables
    /// rotation snapping.
    pub fn pointer_move(&mut self, screen: Point, shift_held: bool) {
        match self.gesture().clone() {
            Gesture::Idle => {}
            Gesture::Panning => {
                self.viewport_mut().update_pan(screen);
            }
            Gesture::DrawingFreehand { id } => {
                let world = self.viewport().screen_to_world(screen);
                let Some(shape) = self.shape_store.get(id) else {
                    return;
                };
                let extended = shape.with_appended_point(world);
                self.commit_shape(extended);
            }
            Gesture::Moving {
                origin,
                anchor_screen,
                ..
            } => {
                // World delta comes from dividing the screen delta by the
                // scale; pan is constant for the whole gesture. Applying it
                // to the captured snapshot keeps the translation rigid with
                // no drift from repeated relative updates.
                let scale = self.viewport().scale();
                let dx = (screen.x - anchor_screen.x) / scale;
                let dy = (screen.y - anchor_screen.y) / scale;
                self.commit_shape(origin.translated(dx, dy));
            }
            Gesture::Resizing {
                id,
                direction,
                origin_start,
                origin_end,
                anchor_screen,
            } => {
                let scale = self.viewport().scale();
                let dx = (screen.x - anchor_screen.x) / scale;
                let dy = (screen.y - anchor_screen.y) / scale;
                let (start, end) = resize_corners(direction, origin_start, origin_end, dx, dy);
                let Some(shape) = self.shape_store.get(id) else {
                    return;
                };
                let mut resized = shape.clone();
                resized.start = start;
                resized.end = end;
                self.commit_shape(resized);
            }
            Gesture::Rotating {
                id,
                center,
                origin_rotation,
                initial_angle,
            } => {
                let angle = pointer_angle(screen, center, self.viewport().scale());
                let mut rotation = origin_rotation + (angle - initial_angle).to_degrees();
                if shift_held {
                    rotation = snap_rotation(rotation);
                }
                let Some(shape) = self.shape_store.get(id) else {
                    return;
                };
                let mut rotated = shape.clone();
                rotated.rotation = rotation;
                self.commit_shape(rotated);
            }
        }
    }

    /// Ends the active gesture from any state. The last move event stays
    /// committed; there is no revert.
    pub fn pointer_up(&mut self) {
        if matches!(self.gesture(), Gesture::Panning) {
            self.viewport_mut().end_pan();
        }
        self.set_gesture(Gesture::Idle);
    }

    fn begin_move(&mut self, id: ShapeId, screen: Point) {
        self.set_selected(Some(id));
        let Some(shape) = self.shape_store.get(id) else {
            return;
        };
        let origin = shape.clone();
        self.set_gesture(Gesture::Moving {
            id,
            origin: Box::new(origin),
            anchor_screen: screen,
        });
        debug!(%id, "gesture: moving");
    }

    fn begin_resize(&mut self, id: ShapeId, direction: HandleDirection, screen: Point) {
        let Some(shape) = self.shape_store.get(id) else {
            return;
        };
        let (origin_start, origin_end) = (shape.start, shape.end);
        self.set_gesture(Gesture::Resizing {
            id,
            direction,
            origin_start,
            origin_end,
            anchor_screen: screen,
        });
        debug!(%id, ?direction, "gesture: resizing");
    }

    fn begin_rotate(&mut self, id: ShapeId, screen: Point) {
        let Some(shape) = self.shape_store.get(id) else {
            return;
        };
        let center = shape.center();
        let origin_rotation = shape.rotation;
        let initial_angle = pointer_angle(screen, center, self.viewport().scale());
        self.set_gesture(Gesture::Rotating {
            id,
            center,
            origin_rotation,
            initial_angle,
        });
        debug!(%id, "gesture: rotating");
    }
}

/// Angle in radians of the pointer relative to the shape center, with the
/// center projected into screen space by multiplying by the scale.
fn pointer_angle(screen: Point, center_world: Point, scale: f64) -> f64 {
    let dy = screen.y - center_world.y * scale;
    let dx = screen.x - center_world.x * scale;
    dy.atan2(dx)
}

/// Snaps a rotation to the nearest 15-degree multiple, round-half-up.
fn snap_rotation(degrees: f64) -> f64 {
    (degrees / ROTATION_SNAP_DEGREES + 0.5).floor() * ROTATION_SNAP_DEGREES
}

/// Applies a direction-specific resize rule to the captured corner
/// snapshots. Each direction edits only its own components, so opposite
/// edges are never perturbed. No minimum-size clamp: raw extents may reach
/// zero or go negative, and rendering takes absolute differences.
fn resize_corners(
    direction: HandleDirection,
    origin_start: Point,
    origin_end: Point,
    dx: f64,
    dy: f64,
) -> (Point, Point) {
    let mut start = origin_start;
    let mut end = origin_end;
    match direction {
        HandleDirection::TopLeft => {
            start.x += dx;
            start.y += dy;
        }
        HandleDirection::Top => {
            start.y += dy;
        }
        HandleDirection::TopRight => {
            end.x += dx;
            start.y += dy;
        }
        HandleDirection::Right => {
            end.x += dx;
        }
        HandleDirection::BottomRight => {
            end.x += dx;
            end.y += dy;
        }
        HandleDirection::Bottom => {
            end.y += dy;
        }
        HandleDirection::BottomLeft => {
            start.x += dx;
            end.y += dy;
        }
        HandleDirection::Left => {
            start.x += dx;
        }
    }
    (start, end)
}

/// The one active gesture, or `Idle`. At most one gesture runs at a time,
/// for at most one shape.
#[derive(Debug, Clone, PartialEq)]
pub enum Gesture {
    Idle,
    /// Background drag translating the viewport.
    Panning,
    /// Capturing a freehand stroke into the shape with this id.
    DrawingFreehand { id: ShapeId },
    /// Rigid translation of one shape from a captured snapshot.
    Moving {
        id: ShapeId,
        origin: Box<Shape>,
        anchor_screen: Point,
    },
    /// Edge/corner resize of one shape from captured corner snapshots.
    Resizing {
        id: ShapeId,
        direction: HandleDirection,
        origin_start: Point,
        origin_end: Point,
        anchor_screen: Point,
    },
    /// Rotation of one shape about its captured bounding-box center.
    Rotating {
        id: ShapeId,
        center: Point,
        origin_rotation: f64,
        initial_angle: f64,
    },
}

impl Gesture {
    /// The shape this gesture is acting on, if any.
    pub fn target(&self) -> Option<ShapeId> {
        match self {
            Gesture::Idle | Gesture::Panning => None,
            Gesture::DrawingFreehand { id }
            | Gesture::Moving { id, .. }
            | Gesture::Resizing { id, .. }
            | Gesture::Rotating { id, .. } => Some(*id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snap_rotation_rounds_half_up_at_exact_boundaries() {
        // 52.5 and -7.5 sit exactly halfway between multiples; half-up
        // resolves toward positive infinity on both sides of zero.
        assert_eq!(snap_rotation(52.5), 60.0);
        assert_eq!(snap_rotation(52.4), 45.0);
        assert_eq!(snap_rotation(-7.5), 0.0);
        assert_eq!(snap_rotation(-7.6), -15.0);
        assert_eq!(snap_rotation(0.0), 0.0);
        assert_eq!(snap_rotation(45.0), 45.0);
        assert_eq!(snap_rotation(370.0), 375.0);
    }
}
