//! # BedPlanner
//!
//! A Rust engine for composing 2-D garden-bed layouts on a pannable,
//! zoomable design canvas.
//!
//! ## Architecture
//!
//! BedPlanner is organized as a workspace with two crates:
//!
//! 1. **bedplanner-core** - Core types, constants, error taxonomy
//! 2. **bedplanner-designer** - Shape model, viewport, canvas and the
//!    drag/resize/rotate gesture engine
//!
//! This crate re-exports both and hosts the demo binary.

pub use bedplanner_designer as designer;

pub use bedplanner_core::{constants, rotate_point, DesignError, Point, Result};

pub use bedplanner_designer::{
    handle_layout, render_scene, Bed, BedRegistry, Canvas, DrawMode, Gesture, GridPattern, Handle,
    HandleDirection, PlacedHandle, PlannerState, RenderShape, SavedGarden, Scene, Shape, ShapeId,
    ShapeKind, ShapePatch, ShapeStore, ShapeUpdate, Viewport, ZoomDirection,
};

/// Initializes tracing with an env-filter, defaulting to INFO.
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer().with_target(true).with_level(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}
