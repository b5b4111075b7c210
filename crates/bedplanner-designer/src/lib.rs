//! # BedPlanner Designer
//!
//! The direct-manipulation shape-canvas engine for laying out garden beds.
//! It owns the coordinate-transform model (pan/zoom, world/screen mapping),
//! the shape data model, and the interactive drag/resize/rotate protocol
//! with rotation-aware handle geometry.
//!
//! ## Core Components
//!
//! - **Model**: rectangles, circles, lines and freehand strokes, each a
//!   bounding-box pair in world coordinates
//! - **Viewport**: pan offset and clamped zoom scale, screen/world mapping,
//!   background grid pattern
//! - **Canvas**: the shape collection, single selection, bed groupings and
//!   the one active gesture
//! - **Handles**: rotation-aware screen placement of the eight resize
//!   handles and the rotate handle
//! - **Renderer**: pure screen-space primitives for the host to paint
//!
//! ## Architecture
//!
//! ```text
//! PlannerState (UI glue)
//!   └── Canvas
//!         ├── ShapeStore (draw order = z-order)
//!         ├── BedRegistry (named shape-id groupings)
//!         ├── Viewport (pan/zoom)
//!         └── Gesture (Idle | Panning | DrawingFreehand |
//!                      Moving | Resizing | Rotating)
//! ```
//!
//! Everything runs single-threaded and event-driven: pointer handlers run
//! to completion before the next event, updates compose deterministically,
//! and gestures queue whole-field shape patches for the external
//! persistence layer.
//!
//! ## Usage
//!
//! ```rust
//! use bedplanner_core::Point;
//! use bedplanner_designer::{Canvas, ShapeKind};
//!
//! let mut canvas = Canvas::with_size(800.0, 600.0);
//! let id = canvas.create_shape(ShapeKind::Rectangle);
//!
//! // Select and drag the new bed 40px to the right.
//! canvas.pointer_down(Point::new(400.0, 300.0));
//! canvas.pointer_move(Point::new(440.0, 300.0), false);
//! canvas.pointer_up();
//! assert_eq!(canvas.selected_id(), Some(id));
//! ```

pub mod beds;
pub mod canvas;
pub mod handles;
pub mod model;
pub mod planner_state;
pub mod renderer;
pub mod serialization;
pub mod shape_store;
pub mod viewport;

pub use beds::{Bed, BedRegistry};
pub use canvas::{Canvas, DrawMode, Gesture, ShapePatch, ShapeUpdate};
pub use handles::{handle_layout, Handle, HandleDirection, PlacedHandle};
pub use model::{Shape, ShapeId, ShapeKind};
pub use planner_state::PlannerState;
pub use renderer::{render_scene, RenderShape, Scene};
pub use serialization::SavedGarden;
pub use shape_store::ShapeStore;
pub use viewport::{GridPattern, Viewport, ZoomDirection};

// Re-export the core geometry types alongside the engine.
pub use bedplanner_core::{rotate_point, Point};
