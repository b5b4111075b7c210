//! Error handling for BedPlanner.
//!
//! The error surface is deliberately narrow: all canvas geometry is pure
//! arithmetic and infallible. What can fail is the serialization boundary
//! (saved-garden documents) and bed-registry operations addressed by name.
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Design/layout error type.
#[derive(Error, Debug)]
pub enum DesignError {
    /// No bed with the given name exists in the registry.
    #[error("Bed not found: {name}")]
    BedNotFound {
        /// The name that was looked up.
        name: String,
    },

    /// A bed with the given name already exists.
    #[error("Bed already exists: {name}")]
    DuplicateBed {
        /// The conflicting bed name.
        name: String,
    },

    /// A saved-garden document could not be encoded or decoded.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience result alias for design operations.
pub type Result<T> = std::result::Result<T, DesignError>;
