//! Saved-garden document format.
//!
//! The engine does not persist anything itself; the external persistence
//! layer loads and saves gardens by identifier. This module defines the
//! JSON document it exchanges with that collaborator.

use serde::{Deserialize, Serialize};

use bedplanner_core::Result;

use crate::beds::Bed;
use crate::canvas::Canvas;
use crate::model::Shape;

/// A complete garden layout as exchanged with the persistence layer.
///
/// Viewport state is deliberately absent: pan and zoom are view-only and
/// never persisted as part of the garden data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedGarden {
    pub name: String,
    pub shapes: Vec<Shape>,
    #[serde(default)]
    pub beds: Vec<Bed>,
}

impl SavedGarden {
    /// Captures the current canvas contents under the given name.
    pub fn from_canvas(name: impl Into<String>, canvas: &Canvas) -> Self {
        Self {
            name: name.into(),
            shapes: canvas.shapes().cloned().collect(),
            beds: canvas.beds().to_vec(),
        }
    }

    /// Restores this garden into the canvas, replacing shapes and beds.
    pub fn restore_into(&self, canvas: &mut Canvas) {
        canvas.load_shapes(self.shapes.clone());
        canvas.beds_mut().replace_all(self.beds.clone());
    }

    /// Encodes the document as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Decodes a document from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
