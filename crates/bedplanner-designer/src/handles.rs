//! Rotation-aware handle geometry for the selected shape.
//!
//! All eight resize-handle anchors and the rotate-handle anchor are fixed
//! offsets from the shape's un-rotated bounding-box center, rotated about
//! that center by the shape's current rotation, then mapped to screen
//! space. Recomputed on every render so handles track the shape visually at
//! any rotation.

use bedplanner_core::constants::{HANDLE_HIT_RADIUS, ROTATE_HANDLE_OFFSET};
use bedplanner_core::{rotate_point, Point};

use crate::model::{Shape, ShapeKind};
use crate::viewport::Viewport;

/// The eight resize directions, one handle each.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandleDirection {
    TopLeft,
    Top,
    TopRight,
    Right,
    BottomRight,
    Bottom,
    BottomLeft,
    Left,
}

impl HandleDirection {
    pub const ALL: [HandleDirection; 8] = [
        HandleDirection::TopLeft,
        HandleDirection::Top,
        HandleDirection::TopRight,
        HandleDirection::Right,
        HandleDirection::BottomRight,
        HandleDirection::Bottom,
        HandleDirection::BottomLeft,
        HandleDirection::Left,
    ];

    /// Offset of this handle from the bounding-box center, for a box of
    /// half-extents `(hw, hh)` in the shape's un-rotated frame.
    fn offset(&self, hw: f64, hh: f64) -> Point {
        match self {
            HandleDirection::TopLeft => Point::new(-hw, -hh),
            HandleDirection::Top => Point::new(0.0, -hh),
            HandleDirection::TopRight => Point::new(hw, -hh),
            HandleDirection::Right => Point::new(hw, 0.0),
            HandleDirection::BottomRight => Point::new(hw, hh),
            HandleDirection::Bottom => Point::new(0.0, hh),
            HandleDirection::BottomLeft => Point::new(-hw, hh),
            HandleDirection::Left => Point::new(-hw, 0.0),
        }
    }
}

/// A handle around the selected shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handle {
    Resize(HandleDirection),
    Rotate,
}

/// A handle with its computed screen position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacedHandle {
    pub handle: Handle,
    pub screen: Point,
}

/// Computes the screen positions of all handles for `shape`.
///
/// Freehand strokes are move-only and get no handles.
pub fn handle_layout(shape: &Shape, viewport: &Viewport) -> Vec<PlacedHandle> {
    if shape.kind == ShapeKind::Freehand {
        return Vec::new();
    }

    let center = shape.center();
    let hw = shape.width() / 2.0;
    let hh = shape.height() / 2.0;
    let scale = viewport.scale();

    let mut placed = Vec::with_capacity(9);
    for dir in HandleDirection::ALL {
        let offset = dir.offset(hw, hh);
        let world = rotate_point(center + offset, center, shape.rotation);
        placed.push(PlacedHandle {
            handle: Handle::Resize(dir),
            screen: viewport.world_to_screen(world),
        });
    }

    // Rotate handle sits above top-center at a fixed screen distance; the
    // offset rotates with the shape so the handle orbits it.
    let rotate_offset = Point::new(0.0, -hh - ROTATE_HANDLE_OFFSET / scale);
    let world = rotate_point(center + rotate_offset, center, shape.rotation);
    placed.push(PlacedHandle {
        handle: Handle::Rotate,
        screen: viewport.world_to_screen(world),
    });

    placed
}

/// Returns the handle under a screen-space pointer position, if any.
pub fn hit_test(handles: &[PlacedHandle], screen: Point) -> Option<Handle> {
    handles
        .iter()
        .find(|h| h.screen.distance_to(&screen) <= HANDLE_HIT_RADIUS)
        .map(|h| h.handle)
}
