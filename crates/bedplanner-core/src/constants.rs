//! Tuning constants for the design canvas.
//!
//! Zoom limits and step factors match the interaction model of the canvas:
//! one wheel tick multiplies the scale by the step factor, and the result is
//! always clamped to the `[MIN_ZOOM, MAX_ZOOM]` range.

/// Minimum zoom scale. Repeated zoom-out never drives the scale below this.
pub const MIN_ZOOM: f64 = 0.75;

/// Maximum zoom scale. Repeated zoom-in never drives the scale above this.
pub const MAX_ZOOM: f64 = 2.0;

/// Multiplier applied to the scale per zoom-in wheel tick.
pub const ZOOM_IN_FACTOR: f64 = 1.05;

/// Multiplier applied to the scale per zoom-out wheel tick.
pub const ZOOM_OUT_FACTOR: f64 = 0.95;

/// World-space size of one background grid cell at 100% zoom.
pub const GRID_UNIT: f64 = 25.0;

/// Rotation snapping increment in degrees when shift is held.
pub const ROTATION_SNAP_DEGREES: f64 = 15.0;

/// Screen-space distance between a shape's top edge and its rotate handle.
pub const ROTATE_HANDLE_OFFSET: f64 = 30.0;

/// Screen-space radius within which a pointer-down grabs a handle.
pub const HANDLE_HIT_RADIUS: f64 = 10.0;

/// Minimum rendered/hit thickness of a line shape, so thin lines stay grabbable.
pub const MIN_LINE_THICKNESS: f64 = 8.0;

/// Default half-width / half-height of a newly created rectangle bed.
pub const DEFAULT_RECT_HALF_WIDTH: f64 = 50.0;
pub const DEFAULT_RECT_HALF_HEIGHT: f64 = 30.0;

/// Default radius of a newly created circle bed.
pub const DEFAULT_CIRCLE_RADIUS: f64 = 40.0;

/// Default half-length of a newly created line.
pub const DEFAULT_LINE_HALF_LENGTH: f64 = 50.0;

/// Default stroke width for new shapes.
pub const DEFAULT_STROKE_WIDTH: f64 = 2.0;

/// Default color token for new shapes.
pub const DEFAULT_SHAPE_COLOR: &str = "#4a7c59";
