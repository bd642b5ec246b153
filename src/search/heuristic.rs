//! Distance heuristics for A* search.
//!
//! Each heuristic is a strategy object injected into the engine, so
//! the A* loop stays free of per-call conditional dispatch. Whether a
//! heuristic is admissible (never overestimates the true remaining
//! cost, which is what guarantees optimal paths) depends on the
//! configured movement model; [`Heuristic::is_admissible`] is the
//! self-check, and [`select_heuristic`] picks the right default.

use crate::core::GridCoord;

use super::movement::MovementRules;

const COST_EPSILON: f32 = 1e-5;

/// Admissible distance estimate between two grid cells.
pub trait Heuristic: Send + Sync {
    /// Estimated cost from `from` to `to`.
    fn estimate(&self, from: GridCoord, to: GridCoord) -> f32;

    /// Does this heuristic never overestimate under the given movement
    /// rules? Searching with an inadmissible heuristic can return
    /// suboptimal paths.
    fn is_admissible(&self, rules: &MovementRules) -> bool;

    /// Short name for logging.
    fn name(&self) -> &'static str;
}

/// `(dx + dy) * orthogonal_cost`. Exact for 4-directional movement,
/// overestimates once diagonals are allowed.
#[derive(Clone, Debug)]
pub struct Manhattan {
    pub orthogonal_cost: f32,
}

impl Heuristic for Manhattan {
    fn estimate(&self, from: GridCoord, to: GridCoord) -> f32 {
        from.manhattan_distance(&to) as f32 * self.orthogonal_cost
    }

    fn is_admissible(&self, rules: &MovementRules) -> bool {
        !rules.allow_diagonal
    }

    fn name(&self) -> &'static str {
        "manhattan"
    }
}

/// Straight-line distance. Admissible for every movement model, but a
/// weaker bound than octile on 8-connected grids.
#[derive(Clone, Debug)]
pub struct Euclidean {
    pub orthogonal_cost: f32,
}

impl Heuristic for Euclidean {
    fn estimate(&self, from: GridCoord, to: GridCoord) -> f32 {
        let dx = (from.x - to.x) as f32;
        let dy = (from.y - to.y) as f32;
        (dx * dx + dy * dy).sqrt() * self.orthogonal_cost
    }

    fn is_admissible(&self, _rules: &MovementRules) -> bool {
        true
    }

    fn name(&self) -> &'static str {
        "euclidean"
    }
}

/// `diagonal_cost * min(dx, dy) + orthogonal_cost * (max - min)`.
///
/// Exactly the cost of the best unobstructed 8-directional route when
/// `diagonal_cost = sqrt(2) * orthogonal_cost`, which makes it the
/// default for diagonal movement.
#[derive(Clone, Debug)]
pub struct Octile {
    pub orthogonal_cost: f32,
    pub diagonal_cost: f32,
}

impl Heuristic for Octile {
    fn estimate(&self, from: GridCoord, to: GridCoord) -> f32 {
        let dx = (from.x - to.x).abs() as f32;
        let dy = (from.y - to.y).abs() as f32;
        let min = dx.min(dy);
        let max = dx.max(dy);
        self.diagonal_cost * min + self.orthogonal_cost * (max - min)
    }

    fn is_admissible(&self, _rules: &MovementRules) -> bool {
        // Once a diagonal costs more than two cardinal steps the best
        // route stops using diagonals and octile overestimates.
        self.diagonal_cost <= 2.0 * self.orthogonal_cost + COST_EPSILON
    }

    fn name(&self) -> &'static str {
        "octile"
    }
}

/// `max(dx, dy) * orthogonal_cost`. Matches true cost only when
/// diagonal steps cost the same as cardinal ones.
#[derive(Clone, Debug)]
pub struct Chebyshev {
    pub orthogonal_cost: f32,
}

impl Heuristic for Chebyshev {
    fn estimate(&self, from: GridCoord, to: GridCoord) -> f32 {
        from.chebyshev_distance(&to) as f32 * self.orthogonal_cost
    }

    fn is_admissible(&self, rules: &MovementRules) -> bool {
        !rules.allow_diagonal
            || (rules.diagonal_cost - rules.orthogonal_cost).abs() < COST_EPSILON
    }

    fn name(&self) -> &'static str {
        "chebyshev"
    }
}

/// Pick the strongest admissible heuristic for the movement model:
/// octile for 8-directional movement with differentiated diagonal
/// cost, chebyshev when diagonal and cardinal cost the same, manhattan
/// for 4-directional movement.
pub fn select_heuristic(rules: &MovementRules) -> Box<dyn Heuristic> {
    if !rules.allow_diagonal {
        Box::new(Manhattan {
            orthogonal_cost: rules.orthogonal_cost,
        })
    } else if (rules.diagonal_cost - rules.orthogonal_cost).abs() < COST_EPSILON {
        Box::new(Chebyshev {
            orthogonal_cost: rules.orthogonal_cost,
        })
    } else {
        Box::new(Octile {
            orthogonal_cost: rules.orthogonal_cost,
            diagonal_cost: rules.diagonal_cost,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules_8dir() -> MovementRules {
        MovementRules::default()
    }

    #[test]
    fn test_manhattan() {
        let h = Manhattan { orthogonal_cost: 1.0 };
        assert_eq!(h.estimate(GridCoord::new(0, 0), GridCoord::new(3, 4)), 7.0);
        assert!(h.is_admissible(&MovementRules::cardinal_only()));
        assert!(!h.is_admissible(&rules_8dir()));
    }

    #[test]
    fn test_euclidean() {
        let h = Euclidean { orthogonal_cost: 1.0 };
        assert!((h.estimate(GridCoord::new(0, 0), GridCoord::new(3, 4)) - 5.0).abs() < 1e-6);
        assert!(h.is_admissible(&rules_8dir()));
        assert!(h.is_admissible(&MovementRules::cardinal_only()));
    }

    #[test]
    fn test_octile() {
        let h = Octile {
            orthogonal_cost: 1.0,
            diagonal_cost: std::f32::consts::SQRT_2,
        };
        // 3 diagonal steps + 1 cardinal step
        let est = h.estimate(GridCoord::new(0, 0), GridCoord::new(3, 4));
        assert!((est - (3.0 * std::f32::consts::SQRT_2 + 1.0)).abs() < 1e-5);
        assert!(h.is_admissible(&rules_8dir()));

        let pricey = Octile {
            orthogonal_cost: 1.0,
            diagonal_cost: 2.5,
        };
        assert!(!pricey.is_admissible(&rules_8dir()));
    }

    #[test]
    fn test_chebyshev() {
        let h = Chebyshev { orthogonal_cost: 1.0 };
        assert_eq!(h.estimate(GridCoord::new(0, 0), GridCoord::new(3, 4)), 4.0);
        assert!(!h.is_admissible(&rules_8dir()));

        let equal_cost = MovementRules {
            diagonal_cost: 1.0,
            ..Default::default()
        };
        assert!(h.is_admissible(&equal_cost));
        assert!(h.is_admissible(&MovementRules::cardinal_only()));
    }

    #[test]
    fn test_selection_policy() {
        assert_eq!(select_heuristic(&rules_8dir()).name(), "octile");
        assert_eq!(
            select_heuristic(&MovementRules::cardinal_only()).name(),
            "manhattan"
        );
        let equal_cost = MovementRules {
            diagonal_cost: 1.0,
            ..Default::default()
        };
        assert_eq!(select_heuristic(&equal_cost).name(), "chebyshev");
    }

    #[test]
    fn test_selected_heuristic_is_admissible() {
        for rules in [
            rules_8dir(),
            MovementRules::cardinal_only(),
            MovementRules {
                diagonal_cost: 1.0,
                ..Default::default()
            },
        ] {
            assert!(select_heuristic(&rules).is_admissible(&rules));
        }
    }
}
