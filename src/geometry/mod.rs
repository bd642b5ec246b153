//! Polygon-based walkable area model.
//!
//! Scenes describe where a character may stand as a stack of polygon
//! regions: walkable floors first, obstacle cutouts layered on top.
//! This module provides:
//!
//! - [`PolygonRegion`]: a simple (possibly non-convex) polygon with a
//!   walkable tag and ray-casting containment
//! - [`WalkableArea`]: the ordered region collection with later-wins
//!   overlap resolution, cached bounds, and movement-blocking hotspots

mod area;
mod polygon;

pub use area::WalkableArea;
pub use polygon::PolygonRegion;
