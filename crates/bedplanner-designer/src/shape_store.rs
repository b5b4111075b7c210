//! Insertion-ordered storage for canvas shapes.
//!
//! Z-order is insertion order: later shapes draw on top. Hit-testing walks
//! the store back-to-front so the topmost shape under the pointer wins.

use crate::model::{Shape, ShapeId};

/// Holds every shape on the canvas in draw order.
#[derive(Debug, Clone, Default)]
pub struct ShapeStore {
    shapes: Vec<Shape>,
}

impl ShapeStore {
    pub fn new() -> Self {
        Self { shapes: Vec::new() }
    }

    /// Appends a shape on top of the existing ones and returns its id.
    pub fn insert(&mut self, shape: Shape) -> ShapeId {
        let id = shape.id;
        self.shapes.push(shape);
        id
    }

    pub fn get(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.iter().find(|s| s.id == id)
    }

    pub fn get_mut(&mut self, id: ShapeId) -> Option<&mut Shape> {
        self.shapes.iter_mut().find(|s| s.id == id)
    }

    /// Removes a shape and returns it, preserving the order of the rest.
    pub fn remove(&mut self, id: ShapeId) -> Option<Shape> {
        let index = self.shapes.iter().position(|s| s.id == id)?;
        Some(self.shapes.remove(index))
    }

    /// Iterates shapes bottom-to-top (draw order).
    pub fn iter(&self) -> impl Iterator<Item = &Shape> {
        self.shapes.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Shape> {
        self.shapes.iter_mut()
    }

    /// Iterates shapes top-to-bottom, the order used for hit-testing.
    pub fn iter_top_down(&self) -> impl Iterator<Item = &Shape> {
        self.shapes.iter().rev()
    }

    /// Replaces the entire collection, e.g. when a saved garden is loaded.
    pub fn replace_all(&mut self, shapes: Vec<Shape>) {
        self.shapes = shapes;
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn clear(&mut self) {
        self.shapes.clear();
    }
}
