//! Planner state manager for UI integration.
//!
//! Wraps the canvas with the bits a host UI needs: grid visibility, shift
//! tracking for rotation snapping, a modified flag for the persistence
//! layer, and integer-coded callbacks for toolkit glue.

use tracing::warn;

use bedplanner_core::constants::GRID_UNIT;
use bedplanner_core::{Point, Result};

use crate::canvas::{Canvas, DrawMode, ShapeUpdate};
use crate::model::{ShapeId, ShapeKind};
use crate::serialization::SavedGarden;
use crate::viewport::ZoomDirection;

/// Planner state for UI integration.
#[derive(Debug, Clone)]
pub struct PlannerState {
    pub canvas: Canvas,
    pub garden_name: String,
    pub show_grid: bool,
    pub grid_spacing: f64,
    pub is_modified: bool,
    shift_pressed: bool,
}

impl PlannerState {
    /// Creates a new planner state with an empty garden.
    pub fn new() -> Self {
        Self {
            canvas: Canvas::new(),
            garden_name: "Untitled".to_string(),
            show_grid: true,
            grid_spacing: GRID_UNIT,
            is_modified: false,
            shift_pressed: false,
        }
    }

    /// Sets the draw mode from a toolkit-level integer code.
    pub fn set_mode(&mut self, mode: i32) {
        let draw_mode = match mode {
            0 => DrawMode::Select,
            1 => DrawMode::Freehand,
            unknown => {
                warn!("Unknown draw mode {}, defaulting to Select", unknown);
                DrawMode::Select
            }
        };
        self.canvas.set_mode(draw_mode);
    }

    /// Tracks the shift key for rotation snapping.
    pub fn set_shift_pressed(&mut self, pressed: bool) {
        self.shift_pressed = pressed;
    }

    pub fn shift_pressed(&self) -> bool {
        self.shift_pressed
    }

    /// Routes a pointer-down from the host.
    pub fn on_pointer_down(&mut self, screen: Point) {
        self.canvas.pointer_down(screen);
    }

    /// Routes a pointer-move from the host.
    pub fn on_pointer_move(&mut self, screen: Point) {
        self.canvas.pointer_move(screen, self.shift_pressed);
    }

    /// Routes a pointer-up from the host. The host keeps a global listener
    /// installed during drags so a release outside the canvas still lands
    /// here.
    pub fn on_pointer_up(&mut self) {
        self.canvas.pointer_up();
    }

    /// Routes a wheel tick from the host. Positive deltas zoom in.
    pub fn on_wheel(&mut self, delta: f64) {
        let direction = if delta > 0.0 {
            ZoomDirection::In
        } else {
            ZoomDirection::Out
        };
        self.canvas.viewport_mut().zoom(direction);
    }

    /// Creates a shape at the viewport center and marks the garden dirty.
    pub fn create_shape(&mut self, kind: ShapeKind) -> ShapeId {
        self.is_modified = true;
        self.canvas.create_shape(kind)
    }

    /// Deletes a shape, cleaning every bed reference to it.
    pub fn delete_shape(&mut self, id: ShapeId) {
        if self.canvas.delete_shape(id).is_some() {
            self.is_modified = true;
        }
    }

    /// Drains gesture updates for the persistence layer, marking the garden
    /// dirty when there are any.
    pub fn take_pending_updates(&mut self) -> Vec<ShapeUpdate> {
        let updates = self.canvas.take_pending_updates();
        if !updates.is_empty() {
            self.is_modified = true;
        }
        updates
    }

    /// Serializes the current garden for the persistence layer.
    pub fn save_to_json(&mut self) -> Result<String> {
        let json = SavedGarden::from_canvas(self.garden_name.clone(), &self.canvas).to_json()?;
        self.is_modified = false;
        Ok(json)
    }

    /// Restores a garden previously produced by [`Self::save_to_json`].
    pub fn load_from_json(&mut self, json: &str) -> Result<()> {
        let garden = SavedGarden::from_json(json)?;
        self.garden_name = garden.name.clone();
        garden.restore_into(&mut self.canvas);
        self.is_modified = false;
        Ok(())
    }
}

impl Default for PlannerState {
    fn default() -> Self {
        Self::new()
    }
}
