//! # Walkbox: 2D Navigation for Point-and-Click Games
//!
//! A navigation and pathfinding library for 2D adventure games:
//! polygon walkable areas are rasterized into a uniform grid with
//! character-radius clearance, and world-space waypoint paths are
//! found with A* under configurable movement rules.
//!
//! ## Features
//!
//! - **Polygon walkable areas**: floors and obstacle cutouts with
//!   later-wins layering, ray-casting containment, blocking hotspots
//! - **Clearance-aware rasterization**: obstacle inflation by the
//!   character radius, with a lenient boundary fallback that keeps
//!   narrow corridors traversable
//! - **Pluggable heuristics**: Manhattan, Euclidean, Octile, and
//!   Chebyshev strategies with admissibility self-checks
//! - **Click-to-move paths**: endpoints snapped to the exact requested
//!   coordinates, interior waypoints on cell centers, colinear runs
//!   collapsed
//!
//! ## Quick Start
//!
//! ```rust
//! use walkbox::core::WorldPoint;
//! use walkbox::geometry::{PolygonRegion, WalkableArea};
//! use walkbox::grid::{ClearancePolicy, NavGrid};
//! use walkbox::search::Pathfinder;
//!
//! // A rectangular floor with an obstacle cutout
//! let mut area = WalkableArea::new();
//! area.add_region(PolygonRegion::floor(vec![
//!     WorldPoint::new(0.0, 0.0),
//!     WorldPoint::new(640.0, 0.0),
//!     WorldPoint::new(640.0, 480.0),
//!     WorldPoint::new(0.0, 480.0),
//! ]));
//! area.add_region(PolygonRegion::obstacle(vec![
//!     WorldPoint::new(300.0, 200.0),
//!     WorldPoint::new(400.0, 200.0),
//!     WorldPoint::new(400.0, 300.0),
//!     WorldPoint::new(300.0, 300.0),
//! ]));
//!
//! // Rasterize for a character of radius 12
//! let grid = NavGrid::from_walkable_area(
//!     &area, 640.0, 480.0, 16.0, 12.0, ClearancePolicy::Lenient,
//! ).expect("valid scene dimensions");
//!
//! // Click-to-move
//! let engine = Pathfinder::default();
//! if let Some(path) = engine.find_path(
//!     &grid,
//!     WorldPoint::new(50.0, 50.0),
//!     WorldPoint::new(600.0, 430.0),
//! ) {
//!     println!("{} waypoints, {:.1}px", path.len(), path.length());
//! }
//! ```
//!
//! ## Architecture
//!
//! - [`core`]: fundamental types ([`WorldPoint`], [`GridCoord`], [`Bounds`])
//! - [`geometry`]: polygon region model ([`PolygonRegion`], [`WalkableArea`])
//! - [`grid`]: rasterized walkability ([`NavGrid`], [`ClearancePolicy`])
//! - [`search`]: movement rules, heuristics, the A* engine, and paths
//! - [`config`]: YAML-backed settings ([`NavConfig`])
//!
//! ## Data Flow
//!
//! ```text
//! WalkableArea ──rasterize──► NavGrid ──search──► Path (waypoints)
//!  (polygons,    (clearance    (boolean  (A* +      │
//!   hotspots)     sampling)     cells)   heuristic) ▼
//!                                            movement controller
//!                                            (external, advances the
//!                                             character per tick)
//! ```
//!
//! The movement controller that walks a character along the returned
//! waypoints lives outside this crate; the contract is the waypoint
//! sequence itself plus [`Path::is_valid`] for cheap revalidation when
//! obstacles change under a stored path.
//!
//! ## Concurrency
//!
//! Search is single-threaded and synchronous; each call allocates its
//! own state, so read-only searches against one grid snapshot may run
//! concurrently. Grid mutation needs `&mut` and therefore external
//! synchronization, as usual.

pub mod config;
pub mod core;
pub mod geometry;
pub mod grid;
pub mod search;

mod error;

pub use error::GridError;

// Re-export main types at crate root
pub use crate::config::{ConfigLoadError, NavConfig};
pub use crate::core::{Bounds, GridCoord, WorldPoint};
pub use crate::geometry::{PolygonRegion, WalkableArea};
pub use crate::grid::{ClearancePolicy, NavGrid};
pub use crate::search::{
    select_heuristic, Heuristic, MovementRules, Path, Pathfinder, SearchFailure, SearchOutcome,
};
