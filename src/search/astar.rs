//! A* pathfinding over the navigation grid.
//!
//! The engine runs one synchronous search per call: no state persists
//! between calls, and concurrent searches against the same grid are
//! safe because all search state (node arena, open heap, closed set)
//! is allocated fresh per call.

use log::{debug, trace, warn};
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};

use crate::core::{GridCoord, WorldPoint};
use crate::grid::NavGrid;

use super::heuristic::{select_heuristic, Heuristic};
use super::movement::MovementRules;
use super::path::Path;

/// Two world points closer than this resolve to "the same spot" for
/// the same-cell fast path.
const COINCIDENT_EPSILON: f32 = 1e-3;

/// Colinearity tolerance for waypoint simplification (world units).
const SIMPLIFY_EPSILON: f32 = 1e-3;

/// Default node expansion budget.
const DEFAULT_MAX_SEARCH_NODES: usize = 100_000;

/// A search node in the arena. The parent is an arena index, not a
/// reference, which keeps reconstruction a simple index walk.
#[derive(Clone, Debug)]
struct Node {
    coord: GridCoord,
    g_cost: f32,
    h_cost: f32,
    parent: Option<usize>,
}

/// Open-set entry. Ordered for a min-heap on `f_cost`, ties broken by
/// lower `h_cost` (prefer nodes closer to the goal).
#[derive(Clone, Debug)]
struct OpenEntry {
    f_cost: f32,
    h_cost: f32,
    node: usize,
}

impl Eq for OpenEntry {}

impl PartialEq for OpenEntry {
    fn eq(&self, other: &Self) -> bool {
        self.f_cost == other.f_cost && self.h_cost == other.h_cost
    }
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap behavior
        other
            .f_cost
            .partial_cmp(&self.f_cost)
            .unwrap_or(Ordering::Equal)
            .then(
                other
                    .h_cost
                    .partial_cmp(&self.h_cost)
                    .unwrap_or(Ordering::Equal),
            )
    }
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Reason a search produced no path. All of these are routine
/// outcomes, not errors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchFailure {
    /// Start or goal world coordinate falls outside the grid.
    OutOfBounds,
    /// The goal cell is not walkable; categorically unreachable.
    GoalBlocked,
    /// The open set emptied without reaching the goal.
    NoPath,
    /// The node expansion budget ran out. A path may exist but was not
    /// found within the configured bound.
    BudgetExhausted,
}

/// Result of one `find_path` call, with search diagnostics.
#[derive(Clone, Debug)]
pub struct SearchOutcome {
    /// The path, if one was found.
    pub path: Option<Path>,
    /// Number of nodes expanded during search.
    pub nodes_expanded: usize,
    /// Accumulated move cost of the found path, in grid-step units
    /// (`f32::INFINITY` when no path was found).
    pub cost: f32,
    /// Why no path was returned, when `path` is `None`.
    pub failure: Option<SearchFailure>,
}

impl SearchOutcome {
    fn failed(failure: SearchFailure, nodes_expanded: usize) -> Self {
        Self {
            path: None,
            nodes_expanded,
            cost: f32::INFINITY,
            failure: Some(failure),
        }
    }
}

/// A* pathfinding engine.
///
/// Owns the movement rules, the injected heuristic strategy, and the
/// node budget. Grids are passed per call, so one engine serves any
/// number of scenes; per the dependency-injection design there is no
/// process-wide engine singleton.
pub struct Pathfinder {
    rules: MovementRules,
    heuristic: Box<dyn Heuristic>,
    max_search_nodes: usize,
}

impl Default for Pathfinder {
    fn default() -> Self {
        let rules = MovementRules::default();
        let heuristic = select_heuristic(&rules);
        Self::new(rules, heuristic, DEFAULT_MAX_SEARCH_NODES)
    }
}

impl Pathfinder {
    /// Create an engine with explicit rules, heuristic, and node budget.
    ///
    /// Logs a warning when the heuristic is not admissible for the
    /// rules; searching with it may return suboptimal paths.
    pub fn new(
        rules: MovementRules,
        heuristic: Box<dyn Heuristic>,
        max_search_nodes: usize,
    ) -> Self {
        if !heuristic.is_admissible(&rules) {
            warn!(
                "[AStar] heuristic '{}' is not admissible for the configured movement rules; \
                 paths may be suboptimal",
                heuristic.name()
            );
        }
        Self {
            rules,
            heuristic,
            max_search_nodes,
        }
    }

    /// Create an engine from movement rules, selecting the matching
    /// heuristic automatically.
    pub fn with_rules(rules: MovementRules) -> Self {
        let heuristic = select_heuristic(&rules);
        Self::new(rules, heuristic, DEFAULT_MAX_SEARCH_NODES)
    }

    /// The movement rules this engine searches under.
    pub fn rules(&self) -> &MovementRules {
        &self.rules
    }

    /// Find a path between two world coordinates.
    ///
    /// Returns `None` for every routine no-path outcome; use
    /// [`find_path_result`](Self::find_path_result) for diagnostics.
    pub fn find_path(&self, grid: &NavGrid, start: WorldPoint, goal: WorldPoint) -> Option<Path> {
        self.find_path_result(grid, start, goal).path
    }

    /// Find a path, returning the full [`SearchOutcome`].
    ///
    /// Non-finite coordinates are a caller bug and panic; "no path" in
    /// all its forms is reported as a value.
    pub fn find_path_result(
        &self,
        grid: &NavGrid,
        start: WorldPoint,
        goal: WorldPoint,
    ) -> SearchOutcome {
        assert!(
            start.is_finite() && goal.is_finite(),
            "find_path called with non-finite coordinates: start={start:?} goal={goal:?}"
        );

        let start_cell = grid.world_to_grid(start);
        let goal_cell = grid.world_to_grid(goal);
        trace!(
            "[AStar] find_path: start=({},{}) goal=({},{})",
            start_cell.x,
            start_cell.y,
            goal_cell.x,
            goal_cell.y
        );

        if !grid.in_bounds(start_cell) || !grid.in_bounds(goal_cell) {
            debug!("[AStar] FAILED: OutOfBounds - start or goal outside grid");
            return SearchOutcome::failed(SearchFailure::OutOfBounds, 0);
        }

        // An unwalkable goal is categorically unreachable; don't search.
        if !grid.is_walkable(goal_cell) {
            debug!(
                "[AStar] FAILED: GoalBlocked at ({},{})",
                goal_cell.x, goal_cell.y
            );
            return SearchOutcome::failed(SearchFailure::GoalBlocked, 0);
        }

        // Same-cell fast path: grid search would degenerate here, and
        // sub-cell movement wants the exact coordinates anyway.
        if start_cell == goal_cell {
            let waypoints = if start.distance(&goal) > COINCIDENT_EPSILON {
                vec![start, goal]
            } else {
                vec![goal]
            };
            return SearchOutcome {
                path: Some(Path::new(waypoints)),
                nodes_expanded: 0,
                cost: 0.0,
                failure: None,
            };
        }

        // Note: the start cell is deliberately NOT validated. A
        // character can end up standing in a cell an obstacle was
        // added under; seeding the search there lets it path out.
        self.search(grid, start, goal, start_cell, goal_cell)
    }

    fn search(
        &self,
        grid: &NavGrid,
        start: WorldPoint,
        goal: WorldPoint,
        start_cell: GridCoord,
        goal_cell: GridCoord,
    ) -> SearchOutcome {
        let mut arena: Vec<Node> = Vec::with_capacity(64);
        let mut index_of: HashMap<GridCoord, usize> = HashMap::new();
        let mut open: BinaryHeap<OpenEntry> = BinaryHeap::new();
        let mut closed: HashSet<GridCoord> = HashSet::new();

        let h_start = self.heuristic.estimate(start_cell, goal_cell);
        arena.push(Node {
            coord: start_cell,
            g_cost: 0.0,
            h_cost: h_start,
            parent: None,
        });
        index_of.insert(start_cell, 0);
        open.push(OpenEntry {
            f_cost: h_start,
            h_cost: h_start,
            node: 0,
        });

        let mut nodes_expanded = 0usize;

        while let Some(entry) = open.pop() {
            let current = arena[entry.node].coord;
            if closed.contains(&current) {
                continue; // stale entry superseded by a relaxation
            }
            closed.insert(current);
            nodes_expanded += 1;

            // Goal test outranks the budget: a search that reaches the
            // goal on its last allowed expansion still returns the path.
            if current == goal_cell {
                let cost = arena[entry.node].g_cost;
                let path = self.reconstruct(grid, &arena, entry.node, start, goal);
                trace!(
                    "[AStar] SUCCESS: {} waypoints, cost={:.2}, nodes_expanded={}",
                    path.len(),
                    cost,
                    nodes_expanded
                );
                return SearchOutcome {
                    path: Some(path),
                    nodes_expanded,
                    cost,
                    failure: None,
                };
            }

            if nodes_expanded > self.max_search_nodes {
                debug!(
                    "[AStar] FAILED: BudgetExhausted ({} nodes)",
                    nodes_expanded
                );
                return SearchOutcome::failed(SearchFailure::BudgetExhausted, nodes_expanded);
            }

            let current_g = arena[entry.node].g_cost;
            for neighbor in self.rules.valid_neighbors(grid, current) {
                if closed.contains(&neighbor) {
                    continue;
                }

                let tentative_g = current_g + self.rules.move_cost(current, neighbor);

                match index_of.get(&neighbor) {
                    Some(&idx) => {
                        // Already open with a higher cost: relax it.
                        if tentative_g < arena[idx].g_cost {
                            arena[idx].g_cost = tentative_g;
                            arena[idx].parent = Some(entry.node);
                            let h = arena[idx].h_cost;
                            open.push(OpenEntry {
                                f_cost: tentative_g + h,
                                h_cost: h,
                                node: idx,
                            });
                        }
                    }
                    None => {
                        let h = self.heuristic.estimate(neighbor, goal_cell);
                        let idx = arena.len();
                        arena.push(Node {
                            coord: neighbor,
                            g_cost: tentative_g,
                            h_cost: h,
                            parent: Some(entry.node),
                        });
                        index_of.insert(neighbor, idx);
                        open.push(OpenEntry {
                            f_cost: tentative_g + h,
                            h_cost: h,
                            node: idx,
                        });
                    }
                }
            }
        }

        debug!(
            "[AStar] FAILED: NoPath after expanding {} nodes",
            nodes_expanded
        );
        SearchOutcome::failed(SearchFailure::NoPath, nodes_expanded)
    }

    /// Walk parent indices goal-to-start, reverse, convert cells to
    /// their world centers, then snap the first waypoint to the exact
    /// requested start and the last to the exact requested goal so
    /// click-to-move lands precisely. Interior waypoints stay on cell
    /// centers; colinear runs collapse.
    fn reconstruct(
        &self,
        grid: &NavGrid,
        arena: &[Node],
        goal_index: usize,
        start: WorldPoint,
        goal: WorldPoint,
    ) -> Path {
        let mut cells = Vec::new();
        let mut cursor = Some(goal_index);
        while let Some(idx) = cursor {
            cells.push(arena[idx].coord);
            cursor = arena[idx].parent;
        }
        cells.reverse();

        let mut waypoints: Vec<WorldPoint> =
            cells.iter().map(|&c| grid.grid_to_world(c)).collect();
        // cells always holds start and goal: same-cell is handled
        // before search, so len >= 2 here.
        waypoints[0] = start;
        let last = waypoints.len() - 1;
        waypoints[last] = goal;

        let mut path = Path::new(waypoints);
        path.simplify_colinear(SIMPLIFY_EPSILON);
        path
    }
}
