//! Viewport and coordinate transformation for canvas rendering.
//!
//! Handles conversion between pixel coordinates (screen space) and world
//! coordinates (garden space). Manages zoom and pan with proper coordinate
//! mapping: `world = (screen - pan) / scale` and its inverse, with no axis
//! flip (both spaces are y-down).

use std::fmt;

use bedplanner_core::constants::{MAX_ZOOM, MIN_ZOOM, ZOOM_IN_FACTOR, ZOOM_OUT_FACTOR};
use bedplanner_core::Point;

/// Wheel direction for a zoom tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomDirection {
    In,
    Out,
}

/// Parameters of the repeating background grid in screen space.
///
/// The cell size is `grid_unit * scale` and the phase offset is
/// `pan mod cell` per axis, so the grid pans and zooms in lock-step with
/// content without per-cell recomputation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridPattern {
    pub cell: f64,
    pub offset_x: f64,
    pub offset_y: f64,
}

/// Represents the viewport transformation state (pan and zoom).
#[derive(Debug, Clone)]
pub struct Viewport {
    pan: Point,
    scale: f64,
    canvas_width: f64,
    canvas_height: f64,
    /// Pan anchor captured at gesture start: `initial_screen - pan`.
    pan_anchor: Option<Point>,
}

impl Viewport {
    /// Creates a new viewport with initial dimensions, `pan = (0, 0)` and
    /// `scale = 1`.
    pub fn new(canvas_width: f64, canvas_height: f64) -> Self {
        Self {
            pan: Point::new(0.0, 0.0),
            scale: 1.0,
            canvas_width,
            canvas_height,
            pan_anchor: None,
        }
    }

    pub fn canvas_width(&self) -> f64 {
        self.canvas_width
    }

    pub fn canvas_height(&self) -> f64 {
        self.canvas_height
    }

    /// Sets the canvas dimensions (typically called when the window resizes).
    pub fn set_canvas_size(&mut self, width: f64, height: f64) {
        self.canvas_width = width;
        self.canvas_height = height;
    }

    /// Gets the current zoom scale (1.0 = 100%).
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Sets the zoom scale, clamped to `[0.75, 2.0]`.
    pub fn set_scale(&mut self, scale: f64) {
        self.scale = scale.clamp(MIN_ZOOM, MAX_ZOOM);
    }

    /// Applies one wheel tick. Zoom is anchored at the viewport origin, not
    /// at the pointer.
    pub fn zoom(&mut self, direction: ZoomDirection) {
        let factor = match direction {
            ZoomDirection::In => ZOOM_IN_FACTOR,
            ZoomDirection::Out => ZOOM_OUT_FACTOR,
        };
        self.set_scale(self.scale * factor);
    }

    /// Gets the pan offset (screen-space translation).
    pub fn pan(&self) -> Point {
        self.pan
    }

    pub fn set_pan(&mut self, pan: Point) {
        self.pan = pan;
    }

    /// Captures the pan anchor at gesture start.
    pub fn begin_pan(&mut self, screen: Point) {
        self.pan_anchor = Some(screen - self.pan);
    }

    /// Updates the pan from the current pointer position. The anchor makes
    /// the drag 1:1 in screen space regardless of scale.
    pub fn update_pan(&mut self, screen: Point) {
        if let Some(anchor) = self.pan_anchor {
            self.pan = screen - anchor;
        }
    }

    /// Ends the pan gesture.
    pub fn end_pan(&mut self) {
        self.pan_anchor = None;
    }

    /// Converts screen pixel coordinates to world coordinates.
    pub fn screen_to_world(&self, screen: Point) -> Point {
        Point::new(
            (screen.x - self.pan.x) / self.scale,
            (screen.y - self.pan.y) / self.scale,
        )
    }

    /// Converts world coordinates to screen pixel coordinates.
    pub fn world_to_screen(&self, world: Point) -> Point {
        Point::new(
            world.x * self.scale + self.pan.x,
            world.y * self.scale + self.pan.y,
        )
    }

    /// Screen-space center of the viewport.
    pub fn center(&self) -> Point {
        Point::new(self.canvas_width / 2.0, self.canvas_height / 2.0)
    }

    /// World coordinate currently shown at the viewport center. New shapes
    /// are placed here.
    pub fn visible_center_world(&self) -> Point {
        self.screen_to_world(self.center())
    }

    /// Computes the background grid pattern for the given world-space cell
    /// size.
    pub fn grid_pattern(&self, grid_unit: f64) -> GridPattern {
        let cell = grid_unit * self.scale;
        GridPattern {
            cell,
            offset_x: self.pan.x.rem_euclid(cell),
            offset_y: self.pan.y.rem_euclid(cell),
        }
    }

    /// Resets pan and zoom to the initial state.
    pub fn reset(&mut self) {
        self.pan = Point::new(0.0, 0.0);
        self.scale = 1.0;
        self.pan_anchor = None;
    }
}

impl fmt::Display for Viewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Zoom: {:.2}x | Pan: ({:.1}, {:.1})",
            self.scale, self.pan.x, self.pan.y
        )
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1200.0, 800.0)
    }
}
