//! # BedPlanner Core
//!
//! Core types, constants and errors for BedPlanner.
//! Provides the fundamental abstractions shared by the designer engine:
//! world-space points, rotation helpers, canvas tuning constants and the
//! error taxonomy.

pub mod constants;
pub mod error;
pub mod types;

pub use error::{DesignError, Result};
pub use types::{rotate_point, Point};
