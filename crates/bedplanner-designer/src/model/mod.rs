//! Shape data model for the garden-bed canvas.
//!
//! Every shape stores its geometry as a pair of world-space corner points
//! (`start`, `end`). For rectangles, circles and lines these define the
//! bounding box (or the two endpoints); for freehand strokes they track the
//! bounding extremes of the captured point path.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use bedplanner_core::constants::{
    DEFAULT_CIRCLE_RADIUS, DEFAULT_LINE_HALF_LENGTH, DEFAULT_RECT_HALF_HEIGHT,
    DEFAULT_RECT_HALF_WIDTH, DEFAULT_SHAPE_COLOR, DEFAULT_STROKE_WIDTH, MIN_LINE_THICKNESS,
};
use bedplanner_core::Point;

/// Opaque unique shape identifier, assigned at creation and immutable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ShapeId(Uuid);

impl ShapeId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ShapeId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ShapeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// The kind of a shape on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Rectangle,
    Circle,
    Line,
    Freehand,
}

/// A single garden-bed shape.
///
/// Invariant: `start` and `end` always define a well-formed (possibly
/// zero-area) bounding box. Raw extents may go negative after a permissive
/// resize; [`Shape::width`] and [`Shape::height`] always return absolute
/// values, so rendering never sees a negative dimension.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    pub id: ShapeId,
    pub kind: ShapeKind,
    pub start: Point,
    pub end: Point,
    /// Captured stroke path, present only for freehand shapes. Appended in
    /// pointer order during capture, never reordered.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub points: Vec<Point>,
    pub color: String,
    pub stroke_width: f64,
    /// Rotation in degrees. Stored unbounded; 370 and 10 are visually equal
    /// but compare as distinct values.
    #[serde(default)]
    pub rotation: f64,
}

impl Shape {
    fn with_corners(kind: ShapeKind, start: Point, end: Point) -> Self {
        Self {
            id: ShapeId::new(),
            kind,
            start,
            end,
            points: Vec::new(),
            color: DEFAULT_SHAPE_COLOR.to_string(),
            stroke_width: DEFAULT_STROKE_WIDTH,
            rotation: 0.0,
        }
    }

    /// Creates a default-sized rectangle centered at `center`.
    pub fn rectangle(center: Point) -> Self {
        Self::with_corners(
            ShapeKind::Rectangle,
            center.translated(-DEFAULT_RECT_HALF_WIDTH, -DEFAULT_RECT_HALF_HEIGHT),
            center.translated(DEFAULT_RECT_HALF_WIDTH, DEFAULT_RECT_HALF_HEIGHT),
        )
    }

    /// Creates a default-sized circle centered at `center`.
    pub fn circle(center: Point) -> Self {
        Self::with_corners(
            ShapeKind::Circle,
            center.translated(-DEFAULT_CIRCLE_RADIUS, -DEFAULT_CIRCLE_RADIUS),
            center.translated(DEFAULT_CIRCLE_RADIUS, DEFAULT_CIRCLE_RADIUS),
        )
    }

    /// Creates a default-length horizontal line centered at `center`.
    pub fn line(center: Point) -> Self {
        Self::with_corners(
            ShapeKind::Line,
            center.translated(-DEFAULT_LINE_HALF_LENGTH, 0.0),
            center.translated(DEFAULT_LINE_HALF_LENGTH, 0.0),
        )
    }

    /// Creates a freehand stroke seeded with a single point.
    pub fn freehand(seed: Point) -> Self {
        let mut shape = Self::with_corners(ShapeKind::Freehand, seed, seed);
        shape.points.push(seed);
        shape
    }

    /// Width of the bounding box. Never negative.
    pub fn width(&self) -> f64 {
        (self.end.x - self.start.x).abs()
    }

    /// Height of the bounding box. Never negative.
    pub fn height(&self) -> f64 {
        (self.end.y - self.start.y).abs()
    }

    /// Center of the bounding box.
    pub fn center(&self) -> Point {
        Point::new(
            (self.start.x + self.end.x) / 2.0,
            (self.start.y + self.end.y) / 2.0,
        )
    }

    /// Returns a copy translated by `(dx, dy)`. Freehand points move with
    /// the bounding corners so the stroke stays rigid.
    pub fn translated(&self, dx: f64, dy: f64) -> Shape {
        let mut shape = self.clone();
        shape.start = shape.start.translated(dx, dy);
        shape.end = shape.end.translated(dx, dy);
        for p in &mut shape.points {
            *p = p.translated(dx, dy);
        }
        shape
    }

    /// Returns a copy with `p` appended to the stroke path and the bounding
    /// corners extended to cover it.
    ///
    /// Copy-on-write on purpose: no reader ever observes a half-appended
    /// point sequence. The bounding box grows monotonically during capture.
    pub fn with_appended_point(&self, p: Point) -> Shape {
        let mut shape = self.clone();
        shape.points.push(p);
        shape.start.x = shape.start.x.min(p.x);
        shape.start.y = shape.start.y.min(p.y);
        shape.end.x = shape.end.x.max(p.x);
        shape.end.y = shape.end.y.max(p.y);
        shape
    }

    /// Rotation-aware hit test against a world-space point.
    pub fn contains_point(&self, p: Point, tolerance: f64) -> bool {
        match self.kind {
            ShapeKind::Rectangle => {
                let local = self.to_local(p);
                local.x.abs() <= self.width() / 2.0 + tolerance
                    && local.y.abs() <= self.height() / 2.0 + tolerance
            }
            ShapeKind::Circle => {
                // Rendered as a box with 50% border radius, i.e. an ellipse.
                let local = self.to_local(p);
                let rx = self.width() / 2.0 + tolerance;
                let ry = self.height() / 2.0 + tolerance;
                if rx <= 0.0 || ry <= 0.0 {
                    return false;
                }
                let nx = local.x / rx;
                let ny = local.y / ry;
                nx * nx + ny * ny <= 1.0
            }
            ShapeKind::Line => {
                let grab = self.stroke_width.max(MIN_LINE_THICKNESS) / 2.0 + tolerance;
                segment_distance(p, self.start, self.end) <= grab
            }
            ShapeKind::Freehand => {
                let min_x = self.start.x.min(self.end.x) - tolerance;
                let max_x = self.start.x.max(self.end.x) + tolerance;
                let min_y = self.start.y.min(self.end.y) - tolerance;
                let max_y = self.start.y.max(self.end.y) + tolerance;
                p.x >= min_x && p.x <= max_x && p.y >= min_y && p.y <= max_y
            }
        }
    }

    /// Maps a world point into the shape's un-rotated local frame, centered
    /// on the bounding-box center.
    fn to_local(&self, p: Point) -> Point {
        let center = self.center();
        let unrotated = bedplanner_core::rotate_point(p, center, -self.rotation);
        unrotated - center
    }
}

/// Distance from `p` to the segment `a`-`b`.
fn segment_distance(p: Point, a: Point, b: Point) -> f64 {
    let ab = b - a;
    let len_sq = ab.x * ab.x + ab.y * ab.y;
    if len_sq < f64::EPSILON {
        return p.distance_to(&a);
    }
    let t = ((p.x - a.x) * ab.x + (p.y - a.y) * ab.y) / len_sq;
    let t = t.clamp(0.0, 1.0);
    let closest = Point::new(a.x + ab.x * t, a.y + ab.y * t);
    p.distance_to(&closest)
}
