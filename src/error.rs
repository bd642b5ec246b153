//! Error types for walkbox.

use thiserror::Error;

/// Errors raised by navigation grid construction.
///
/// These are all defect-class errors: they indicate a caller bug
/// (bad scene dimensions, malformed configuration), not a runtime
/// condition. "No path found" is never an error; see
/// [`SearchFailure`](crate::search::SearchFailure).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GridError {
    #[error("grid dimensions must be non-zero (got {width}x{height})")]
    EmptyGrid { width: usize, height: usize },

    #[error("cell size must be positive and finite (got {0})")]
    InvalidCellSize(f32),

    #[error("world dimensions must be positive and finite (got {width}x{height})")]
    InvalidWorldSize { width: f32, height: f32 },

    #[error("character radius must be non-negative and finite (got {0})")]
    InvalidRadius(f32),
}
