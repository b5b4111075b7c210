//! Canvas type definitions: draw modes and outbound shape patches.

use serde::{Deserialize, Serialize};

use bedplanner_core::Point;

use crate::model::ShapeId;

/// Tool mode for pointer-down on empty canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DrawMode {
    /// Background drags pan the viewport.
    #[default]
    Select,
    /// Background pointer-down starts capturing a freehand stroke.
    Freehand,
}

/// Partial geometry update produced by a gesture.
///
/// Only the fields the gesture touched are set; the persistence collaborator
/// merges the patch into its own store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShapePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<Point>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<Point>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotation: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub points: Option<Vec<Point>>,
}

impl ShapePatch {
    pub fn is_empty(&self) -> bool {
        self.start.is_none()
            && self.end.is_none()
            && self.rotation.is_none()
            && self.points.is_none()
    }
}

/// An outbound shape mutation, queued for the persistence layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeUpdate {
    pub id: ShapeId,
    pub patch: ShapePatch,
}
