//! World-space waypoint paths.

use serde::{Deserialize, Serialize};

use crate::core::WorldPoint;
use crate::grid::NavGrid;

use super::movement::MovementRules;

/// An ordered sequence of world-space waypoints from start to goal.
///
/// Produced fresh by each `find_path` call and owned by the caller;
/// the engine keeps no reference to it. The grid may change between
/// calls, so movement controllers should re-check a stored path with
/// [`Path::is_valid`] on obstacle changes (or each frame) and request
/// a fresh one when it fails.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Path {
    waypoints: Vec<WorldPoint>,
}

impl Path {
    /// Wrap a waypoint sequence. At least one point.
    pub fn new(waypoints: Vec<WorldPoint>) -> Self {
        debug_assert!(!waypoints.is_empty(), "a path has at least one waypoint");
        Self { waypoints }
    }

    /// The waypoints, in traversal order.
    #[inline]
    pub fn waypoints(&self) -> &[WorldPoint] {
        &self.waypoints
    }

    /// Number of waypoints.
    #[inline]
    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    /// Total world-space length of the path.
    pub fn length(&self) -> f32 {
        self.waypoints
            .windows(2)
            .map(|w| w[0].distance(&w[1]))
            .sum()
    }

    /// Collapse runs of colinear waypoints into single segments.
    ///
    /// A waypoint is dropped when the cross product of its incoming
    /// and outgoing direction vectors is within `epsilon` of zero and
    /// it does not reverse direction. First and last waypoints always
    /// survive, so the exact snapped endpoints are preserved.
    pub fn simplify_colinear(&mut self, epsilon: f32) {
        if self.waypoints.len() <= 2 {
            return;
        }

        let mut kept: Vec<WorldPoint> = Vec::with_capacity(self.waypoints.len());
        kept.push(self.waypoints[0]);

        for i in 1..self.waypoints.len() - 1 {
            let prev = *kept.last().unwrap();
            let curr = self.waypoints[i];
            let next = self.waypoints[i + 1];

            let incoming = curr - prev;
            let outgoing = next - curr;
            let colinear = incoming.cross(&outgoing).abs() <= epsilon;
            let forward = incoming.dot(&outgoing) >= 0.0;

            if !(colinear && forward) {
                kept.push(curr);
            }
        }

        kept.push(*self.waypoints.last().unwrap());
        self.waypoints = kept;
    }

    /// Is every segment of this path still traversable on the current
    /// grid state?
    ///
    /// Adjacent-cell segments are re-checked through the movement
    /// rules (which also re-applies corner-cutting). Longer segments,
    /// as produced by colinear simplification, are sampled at
    /// half-cell steps and every sampled cell must be walkable.
    /// Returns false at the first invalid segment; O(path length).
    pub fn is_valid(&self, grid: &NavGrid, rules: &MovementRules) -> bool {
        if self.waypoints.is_empty() {
            return false;
        }
        if self.waypoints.len() == 1 {
            return grid.is_walkable(grid.world_to_grid(self.waypoints[0]));
        }

        for pair in self.waypoints.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            let cell_a = grid.world_to_grid(a);
            let cell_b = grid.world_to_grid(b);

            if cell_a == cell_b {
                if !grid.is_walkable(cell_b) {
                    return false;
                }
            } else if cell_a.is_adjacent(&cell_b) {
                if !rules.can_move(grid, cell_a, cell_b) {
                    return false;
                }
            } else if !segment_walkable(grid, a, b) {
                return false;
            }
        }
        true
    }
}

/// Sample a world-space segment at half-cell steps and require every
/// sampled cell to be walkable.
fn segment_walkable(grid: &NavGrid, a: WorldPoint, b: WorldPoint) -> bool {
    let step = grid.cell_size() * 0.5;
    let distance = a.distance(&b);
    let samples = ((distance / step).ceil() as usize).max(1);

    for i in 0..=samples {
        let t = i as f32 / samples as f32;
        let point = a + (b - a) * t;
        if !grid.is_walkable(grid.world_to_grid(point)) {
            return false;
        }
    }
    true
}
