//! Core types for the walkbox navigation library.
//!
//! This module provides the fundamental types used throughout the library:
//! - [`GridCoord`] and [`WorldPoint`]: grid and world coordinate types
//! - [`Bounds`]: axis-aligned bounding box for spatial queries

mod bounds;
mod point;

pub use bounds::Bounds;
pub use point::{GridCoord, WorldPoint};
