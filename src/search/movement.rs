//! Movement legality and cost rules for grid transitions.

use serde::{Deserialize, Serialize};

use crate::core::GridCoord;
use crate::grid::NavGrid;

/// Adjacency rules for the search: 4- or 8-connected movement,
/// corner-cutting prevention, and per-transition costs.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MovementRules {
    /// Allow diagonal movement (8-connected vs 4-connected)
    pub allow_diagonal: bool,
    /// Reject diagonal moves whose two orthogonal "shoulder" cells are
    /// not both walkable, so the character never slips through the
    /// shared corner point of two blocked cells.
    pub prevent_corner_cutting: bool,
    /// Cost of a diagonal step (sqrt(2) x orthogonal by default)
    pub diagonal_cost: f32,
    /// Cost of a cardinal step
    pub orthogonal_cost: f32,
}

impl Default for MovementRules {
    fn default() -> Self {
        Self {
            allow_diagonal: true,
            prevent_corner_cutting: true,
            diagonal_cost: std::f32::consts::SQRT_2,
            orthogonal_cost: 1.0,
        }
    }
}

impl MovementRules {
    /// 4-connected movement with unit step cost.
    pub fn cardinal_only() -> Self {
        Self {
            allow_diagonal: false,
            ..Default::default()
        }
    }

    /// Is the single-step transition `from` -> `to` legal on this grid?
    ///
    /// The target must be walkable and in bounds, and must be one of
    /// the 8 (or 4, without diagonals) adjacent cells. Identical and
    /// non-adjacent coordinates are rejected. Note the *source* cell's
    /// walkability is not checked here; that is what lets the engine
    /// path out of an invalid start cell.
    pub fn can_move(&self, grid: &NavGrid, from: GridCoord, to: GridCoord) -> bool {
        if !grid.is_walkable(to) {
            return false;
        }
        if !from.is_adjacent(&to) {
            return false;
        }
        if from.is_diagonal_to(&to) {
            if !self.allow_diagonal {
                return false;
            }
            if self.prevent_corner_cutting {
                let shoulder_a = GridCoord::new(from.x, to.y);
                let shoulder_b = GridCoord::new(to.x, from.y);
                if !grid.is_walkable(shoulder_a) || !grid.is_walkable(shoulder_b) {
                    return false;
                }
            }
        }
        true
    }

    /// Cost of moving between two cells.
    ///
    /// Diagonal and cardinal adjacency use their configured costs. For
    /// any other pair this falls back to Euclidean grid distance times
    /// the orthogonal cost; normal search never produces that case.
    pub fn move_cost(&self, from: GridCoord, to: GridCoord) -> f32 {
        if from.is_adjacent(&to) {
            if from.is_diagonal_to(&to) {
                self.diagonal_cost
            } else {
                self.orthogonal_cost
            }
        } else {
            let dx = (from.x - to.x) as f32;
            let dy = (from.y - to.y) as f32;
            (dx * dx + dy * dy).sqrt() * self.orthogonal_cost
        }
    }

    /// Legal neighbor cells of `coord`, cardinals first, then
    /// diagonals when enabled.
    ///
    /// The fixed ordering matters only for deterministic tie-breaking
    /// in search, not for correctness.
    pub fn valid_neighbors(&self, grid: &NavGrid, coord: GridCoord) -> Vec<GridCoord> {
        let mut neighbors = Vec::with_capacity(if self.allow_diagonal { 8 } else { 4 });
        for n in coord.neighbors_4() {
            if self.can_move(grid, coord, n) {
                neighbors.push(n);
            }
        }
        if self.allow_diagonal {
            for n in coord.neighbors_diagonal() {
                if self.can_move(grid, coord, n) {
                    neighbors.push(n);
                }
            }
        }
        neighbors
    }
}
