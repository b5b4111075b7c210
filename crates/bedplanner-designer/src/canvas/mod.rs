//! Canvas for laying out and manipulating garden-bed shapes.

mod gesture;
mod types;

pub use gesture::Gesture;
pub use types::{DrawMode, ShapePatch, ShapeUpdate};

use std::collections::BTreeSet;

use tracing::warn;

use crate::beds::BedRegistry;
use crate::model::{Shape, ShapeId, ShapeKind};
use crate::shape_store::ShapeStore;
use crate::viewport::Viewport;

/// Canvas state managing shapes, beds, the viewport and the active gesture.
///
/// The canvas is the sole writer of shape geometry. Gestures replace whole
/// shape values; readers never observe a partially-updated shape.
#[derive(Debug, Clone)]
pub struct Canvas {
    shape_store: ShapeStore,
    beds: BedRegistry,
    mode: DrawMode,
    viewport: Viewport,
    selected: Option<ShapeId>,
    gesture: Gesture,
    pending_updates: Vec<ShapeUpdate>,
}

impl Canvas {
    /// Creates a new canvas with the default viewport size.
    pub fn new() -> Self {
        Self::with_size(1200.0, 800.0)
    }

    /// Creates a canvas with specified viewport dimensions.
    pub fn with_size(width: f64, height: f64) -> Self {
        Self {
            shape_store: ShapeStore::new(),
            beds: BedRegistry::new(),
            mode: DrawMode::Select,
            viewport: Viewport::new(width, height),
            selected: None,
            gesture: Gesture::Idle,
            pending_updates: Vec::new(),
        }
    }

    /// Sets the draw mode.
    pub fn set_mode(&mut self, mode: DrawMode) {
        self.mode = mode;
    }

    /// Gets the current draw mode.
    pub fn mode(&self) -> DrawMode {
        self.mode
    }

    /// Returns the number of shapes on the canvas.
    pub fn shape_count(&self) -> usize {
        self.shape_store.len()
    }

    /// Gets a reference to a shape by id.
    pub fn get_shape(&self, id: ShapeId) -> Option<&Shape> {
        self.shape_store.get(id)
    }

    /// Gets all shapes in draw order.
    pub fn shapes(&self) -> impl Iterator<Item = &Shape> {
        self.shape_store.iter()
    }

    /// Gets the selected shape id, if any. At most one shape is selected.
    pub fn selected_id(&self) -> Option<ShapeId> {
        self.selected
    }

    /// Gets the selected shape, if any.
    pub fn selected_shape(&self) -> Option<&Shape> {
        self.selected.and_then(|id| self.shape_store.get(id))
    }

    /// Selects a shape by id, or clears the selection with `None`.
    pub fn set_selected(&mut self, id: Option<ShapeId>) {
        self.selected = id.filter(|id| self.shape_store.get(*id).is_some());
    }

    /// Gets the active gesture.
    pub fn gesture(&self) -> &Gesture {
        &self.gesture
    }

    pub(crate) fn set_gesture(&mut self, gesture: Gesture) {
        self.gesture = gesture;
    }

    /// Gets a reference to the viewport for coordinate transformations.
    ///
    /// Pan and scale are exposed read-only here so overlay UI can stay in a
    /// fixed screen position regardless of the canvas transform.
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Gets a mutable reference to the viewport.
    pub fn viewport_mut(&mut self) -> &mut Viewport {
        &mut self.viewport
    }

    /// Gets the bed registry.
    pub fn beds(&self) -> &BedRegistry {
        &self.beds
    }

    /// Gets the bed registry mutably, for grouping operations. Shape
    /// removal must go through [`Canvas::delete_shape`] so bed references
    /// and the selection stay consistent.
    pub fn beds_mut(&mut self) -> &mut BedRegistry {
        &mut self.beds
    }

    /// Creates a new default-sized shape centered in the visible viewport
    /// and appends it on top. Returns its id.
    pub fn create_shape(&mut self, kind: ShapeKind) -> ShapeId {
        let center = self.viewport.visible_center_world();
        let shape = match kind {
            ShapeKind::Rectangle => Shape::rectangle(center),
            ShapeKind::Circle => Shape::circle(center),
            ShapeKind::Line => Shape::line(center),
            ShapeKind::Freehand => Shape::freehand(center),
        };
        self.shape_store.insert(shape)
    }

    /// Replaces the entire shape collection, e.g. when a saved garden is
    /// loaded. Clears the selection and any active gesture, and strips bed
    /// references to any shape absent from the new collection.
    pub fn load_shapes(&mut self, shapes: Vec<Shape>) {
        let kept: BTreeSet<ShapeId> = shapes.iter().map(|s| s.id).collect();
        let stale: Vec<ShapeId> = self
            .shape_store
            .iter()
            .map(|s| s.id)
            .filter(|id| !kept.contains(id))
            .collect();
        for id in stale {
            self.beds.forget_shape(id);
        }
        self.shape_store.replace_all(shapes);
        self.selected = None;
        self.gesture = Gesture::Idle;
        self.viewport.end_pan();
    }

    /// Removes all shapes. Bed groupings remain but reference nothing.
    pub fn clear_shapes(&mut self) {
        let ids: Vec<ShapeId> = self.shape_store.iter().map(|s| s.id).collect();
        for id in ids {
            self.beds.forget_shape(id);
        }
        self.shape_store.clear();
        self.selected = None;
        self.gesture = Gesture::Idle;
    }

    /// Deletes a shape and strips its id from every bed.
    pub fn delete_shape(&mut self, id: ShapeId) -> Option<Shape> {
        let removed = self.shape_store.remove(id)?;
        self.beds.forget_shape(id);
        if self.selected == Some(id) {
            self.selected = None;
        }
        if self.gesture.target() == Some(id) {
            self.gesture = Gesture::Idle;
        }
        Some(removed)
    }

    /// Merges a partial geometry update into a shape.
    ///
    /// An update targeting an id that no longer exists is a silent no-op: a
    /// benign race between a stale handle and a deletion.
    pub fn apply_update(&mut self, id: ShapeId, patch: &ShapePatch) {
        let Some(shape) = self.shape_store.get_mut(id) else {
            warn!(%id, "dropping update for unknown shape");
            return;
        };
        if let Some(start) = patch.start {
            shape.start = start;
        }
        if let Some(end) = patch.end {
            shape.end = end;
        }
        if let Some(rotation) = patch.rotation {
            shape.rotation = rotation;
        }
        if let Some(points) = &patch.points {
            shape.points = points.clone();
        }
    }

    /// Drains the outbound updates queued by gestures since the last call.
    /// The persistence collaborator merges these into its own store.
    pub fn take_pending_updates(&mut self) -> Vec<ShapeUpdate> {
        std::mem::take(&mut self.pending_updates)
    }

    pub(crate) fn push_update(&mut self, id: ShapeId, patch: ShapePatch) {
        self.pending_updates.push(ShapeUpdate { id, patch });
    }

    /// Replaces a shape's value wholesale, queuing the changed fields as an
    /// outbound patch.
    pub(crate) fn commit_shape(&mut self, new_shape: Shape) {
        let id = new_shape.id;
        let Some(shape) = self.shape_store.get_mut(id) else {
            warn!(%id, "dropping commit for unknown shape");
            return;
        };
        let patch = ShapePatch {
            start: (new_shape.start != shape.start).then_some(new_shape.start),
            end: (new_shape.end != shape.end).then_some(new_shape.end),
            rotation: (new_shape.rotation != shape.rotation).then_some(new_shape.rotation),
            points: (new_shape.points != shape.points).then(|| new_shape.points.clone()),
        };
        *shape = new_shape;
        if !patch.is_empty() {
            self.push_update(id, patch);
        }
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new()
    }
}
