//! Path search over the navigation grid.
//!
//! - [`MovementRules`]: which neighbor transitions are legal and what
//!   they cost (diagonal policy, corner-cutting prevention)
//! - [`Heuristic`] and its four implementations: admissible distance
//!   estimates injected into the engine as strategy objects
//! - [`Pathfinder`]: the A* engine producing world-space waypoint paths
//! - [`Path`]: the returned waypoint sequence with colinear
//!   simplification and dynamic revalidation

mod astar;
mod heuristic;
mod movement;
mod path;

pub use astar::{Pathfinder, SearchFailure, SearchOutcome};
pub use heuristic::{select_heuristic, Chebyshev, Euclidean, Heuristic, Manhattan, Octile};
pub use movement::MovementRules;
pub use path::Path;
