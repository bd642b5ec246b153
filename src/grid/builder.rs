//! Grid rasterization from a walkable area snapshot.
//!
//! Converts polygon geometry into per-cell walkability, inflating
//! obstacles by the character's clearance radius. Clearance is checked
//! by sampling eight rays out of the cell center at half-cell steps
//! rather than computing an exact Minkowski sum; the approximation is
//! conservative near area edges but applies a lenient fallback so
//! corridors narrower than the full clearance diameter are not blocked
//! outright (see [`ClearancePolicy`]).

use log::debug;
use std::f32::consts::FRAC_1_SQRT_2;

use crate::core::{GridCoord, WorldPoint};
use crate::error::GridError;
use crate::geometry::WalkableArea;

use super::NavGrid;

/// How strictly the clearance disk must fit inside the walkable area.
///
/// Regardless of policy, a ray sample that lands inside an obstacle
/// cutout (or a blocking rect) makes the cell non-walkable: the
/// character must never overlap an obstacle. What the policies differ
/// on is spill past the area boundary, where no geometry exists at
/// all.
///
/// With [`ClearancePolicy::Lenient`] (the default), the inner half of
/// each ray (samples within `radius / 2` of the center) must fit, but
/// the outer half may spill past the area boundary. This deliberately
/// trades exactness for traversable corridors: a passage narrower than
/// the clearance diameter but wider than the radius stays open along
/// its centerline.
///
/// [`ClearancePolicy::Strict`] requires every ray sample to pass,
/// which blocks every such corridor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ClearancePolicy {
    /// Forgive outer-half ray samples that land past the area edge.
    #[default]
    Lenient,
    /// The full clearance disk must fit.
    Strict,
}

impl NavGrid {
    /// Rasterize a walkable area snapshot into a navigation grid.
    ///
    /// Grid dimensions are `ceil(world / cell_size) + 1` per axis (the
    /// `+1` covers the inclusive far bound). A cell is walkable iff the
    /// clearance disk of `character_radius` around its center fits in
    /// the area, per `policy`. A radius of 0 degenerates to a plain
    /// center containment test. Cells whose center lies inside a
    /// movement-blocking hotspot rectangle are forced non-walkable
    /// regardless of clearance.
    ///
    /// Monotonicity: a larger radius never produces more walkable
    /// cells than a smaller one on the same area.
    pub fn from_walkable_area(
        area: &WalkableArea,
        world_width: f32,
        world_height: f32,
        cell_size: f32,
        character_radius: f32,
        policy: ClearancePolicy,
    ) -> Result<Self, GridError> {
        if !(world_width.is_finite() && world_height.is_finite())
            || world_width <= 0.0
            || world_height <= 0.0
        {
            return Err(GridError::InvalidWorldSize {
                width: world_width,
                height: world_height,
            });
        }
        if !(character_radius.is_finite() && character_radius >= 0.0) {
            return Err(GridError::InvalidRadius(character_radius));
        }
        if !(cell_size.is_finite() && cell_size > 0.0) {
            return Err(GridError::InvalidCellSize(cell_size));
        }

        let width = (world_width / cell_size).ceil() as usize + 1;
        let height = (world_height / cell_size).ceil() as usize + 1;
        let mut grid = NavGrid::new(width, height, cell_size)?;

        for y in 0..height as i32 {
            for x in 0..width as i32 {
                let coord = GridCoord::new(x, y);
                let center = grid.grid_to_world(coord);
                let walkable = !area.is_blocked(center)
                    && disk_fits(area, center, character_radius, cell_size * 0.5, policy);
                grid.set_walkable(coord, walkable);
            }
        }

        debug!(
            "[NavGrid] rasterized {}x{} cells (cell_size={}, radius={}): {} walkable",
            width,
            height,
            cell_size,
            character_radius,
            grid.walkable_count()
        );

        Ok(grid)
    }
}

/// Unit directions for the clearance rays: cardinals and diagonals.
fn ray_directions() -> [WorldPoint; 8] {
    let d = FRAC_1_SQRT_2;
    [
        WorldPoint::new(1.0, 0.0),
        WorldPoint::new(-1.0, 0.0),
        WorldPoint::new(0.0, 1.0),
        WorldPoint::new(0.0, -1.0),
        WorldPoint::new(d, d),
        WorldPoint::new(d, -d),
        WorldPoint::new(-d, d),
        WorldPoint::new(-d, -d),
    ]
}

/// Does the clearance disk centered at `center` fit the walkable area?
///
/// Each of the eight rays is sampled at multiples of `step` out to
/// `radius` (plus the exact `radius` endpoint). Because the sample
/// distances are multiples of a radius-independent step, a larger
/// radius checks a superset of a smaller radius' samples, which keeps
/// the walkable set monotone in the radius.
fn disk_fits(
    area: &WalkableArea,
    center: WorldPoint,
    radius: f32,
    step: f32,
    policy: ClearancePolicy,
) -> bool {
    if !area.is_walkable(center) {
        return false;
    }
    if radius <= 0.0 {
        return true;
    }

    let inner_limit = radius * 0.5;
    let mut edge_spill = false;
    for dir in ray_directions() {
        let mut d = step.min(radius);
        loop {
            let sample = center + dir * d;
            if !area.is_walkable(sample) {
                // Overlapping an obstacle cutout or a blocking rect
                // fails outright at any distance; only spill past the
                // area edge can be forgiven, and only on the outer
                // half of the ray.
                if area.in_obstacle(sample)
                    || area.is_blocked(sample)
                    || d <= inner_limit
                {
                    return false;
                }
                edge_spill = true;
            }
            if d >= radius {
                break;
            }
            d = (d + step).min(radius);
        }
    }

    !edge_spill || policy == ClearancePolicy::Lenient
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Bounds;
    use crate::geometry::PolygonRegion;

    fn rect_region(x: f32, y: f32, w: f32, h: f32, walkable: bool) -> PolygonRegion {
        PolygonRegion::new(
            vec![
                WorldPoint::new(x, y),
                WorldPoint::new(x + w, y),
                WorldPoint::new(x + w, y + h),
                WorldPoint::new(x, y + h),
            ],
            walkable,
        )
    }

    /// One large floor covering the whole test scene.
    fn open_scene() -> WalkableArea {
        let mut area = WalkableArea::new();
        area.add_region(rect_region(0.0, 0.0, 320.0, 320.0, true));
        area
    }

    #[test]
    fn test_dimension_formula() {
        let area = open_scene();
        let grid =
            NavGrid::from_walkable_area(&area, 320.0, 320.0, 32.0, 0.0, ClearancePolicy::Lenient)
                .unwrap();
        assert_eq!(grid.width(), 11); // ceil(320/32) + 1
        assert_eq!(grid.height(), 11);
    }

    #[test]
    fn test_invalid_parameters() {
        let area = open_scene();
        assert!(matches!(
            NavGrid::from_walkable_area(&area, 0.0, 320.0, 32.0, 0.0, ClearancePolicy::Lenient),
            Err(GridError::InvalidWorldSize { .. })
        ));
        assert!(matches!(
            NavGrid::from_walkable_area(&area, 320.0, 320.0, 32.0, -1.0, ClearancePolicy::Lenient),
            Err(GridError::InvalidRadius(_))
        ));
        assert!(matches!(
            NavGrid::from_walkable_area(
                &area,
                320.0,
                320.0,
                f32::NAN,
                0.0,
                ClearancePolicy::Lenient
            ),
            Err(GridError::InvalidCellSize(_))
        ));
    }

    #[test]
    fn test_point_agent_matches_containment() {
        let mut area = WalkableArea::new();
        area.add_region(rect_region(0.0, 0.0, 320.0, 320.0, true));
        area.add_region(rect_region(96.0, 96.0, 64.0, 64.0, false));

        let grid =
            NavGrid::from_walkable_area(&area, 320.0, 320.0, 32.0, 0.0, ClearancePolicy::Lenient)
                .unwrap();

        // Center of cell (4,4) is (144,144) - inside the cutout
        assert!(!grid.is_walkable(GridCoord::new(4, 4)));
        // Center of cell (1,1) is (48,48) - open floor
        assert!(grid.is_walkable(GridCoord::new(1, 1)));
    }

    #[test]
    fn test_obstacle_inflated_by_radius() {
        let mut area = WalkableArea::new();
        area.add_region(rect_region(0.0, 0.0, 320.0, 320.0, true));
        area.add_region(rect_region(128.0, 128.0, 64.0, 64.0, false));

        let no_clearance =
            NavGrid::from_walkable_area(&area, 320.0, 320.0, 16.0, 0.0, ClearancePolicy::Lenient)
                .unwrap();
        let with_clearance =
            NavGrid::from_walkable_area(&area, 320.0, 320.0, 16.0, 20.0, ClearancePolicy::Lenient)
                .unwrap();

        // Cell just left of the cutout: center (120,168), 8px from the
        // obstacle edge. Walkable for a point agent, blocked at r=20
        // because the ring reaches inside the cutout.
        let beside = GridCoord::new(7, 10);
        assert!(no_clearance.is_walkable(beside));
        assert!(!with_clearance.is_walkable(beside));
    }

    /// Each radius' walkable set must be a subset of every smaller
    /// radius' set on the same area.
    fn assert_monotonic(area: &WalkableArea, world: f32, cell_size: f32, radii: &[f32]) {
        let grids: Vec<NavGrid> = radii
            .iter()
            .map(|&r| {
                NavGrid::from_walkable_area(area, world, world, cell_size, r, ClearancePolicy::Lenient)
                    .unwrap()
            })
            .collect();

        for pair in grids.windows(2) {
            let (smaller, larger) = (&pair[0], &pair[1]);
            assert!(larger.walkable_count() <= smaller.walkable_count());
            for y in 0..smaller.height() as i32 {
                for x in 0..smaller.width() as i32 {
                    let c = GridCoord::new(x, y);
                    if larger.is_walkable(c) {
                        assert!(smaller.is_walkable(c), "walkable set not a subset at {c:?}");
                    }
                }
            }
        }
    }

    #[test]
    fn test_monotonic_clearance() {
        let mut area = WalkableArea::new();
        area.add_region(rect_region(0.0, 0.0, 320.0, 320.0, true));
        area.add_region(rect_region(100.0, 0.0, 40.0, 200.0, false));
        assert_monotonic(&area, 320.0, 16.0, &[0.0, 8.0, 16.0, 32.0]);
    }

    #[test]
    fn test_monotonic_clearance_near_area_edge() {
        // Obstacle strip close to the area boundary. A large radius
        // pushes its outermost samples past the edge, but forgiveness
        // must never override the obstacle overlap in between.
        let mut area = WalkableArea::new();
        area.add_region(rect_region(0.0, 0.0, 100.0, 100.0, true));
        area.add_region(rect_region(60.0, 0.0, 10.0, 100.0, false));
        assert_monotonic(&area, 100.0, 8.0, &[0.0, 15.0, 30.0, 60.0]);

        // Cell (6,6) center (52,52) sits 8px left of the strip: its +x
        // ray enters the strip at every radius >= 8, so the cell stays
        // blocked no matter how far the outer samples overshoot the
        // area edge.
        let near = GridCoord::new(6, 6);
        for r in [15.0, 30.0, 60.0] {
            let grid =
                NavGrid::from_walkable_area(&area, 100.0, 100.0, 8.0, r, ClearancePolicy::Lenient)
                    .unwrap();
            assert!(!grid.is_walkable(near), "r={r}: ray into the strip must block");
        }
    }

    #[test]
    fn test_narrow_corridor_lenient_vs_blocked() {
        // A 40px-high corridor. Diameter 84 > 40: nothing fits, even
        // leniently. Radius 15 leaves the centerline open.
        let mut area = WalkableArea::new();
        area.add_region(rect_region(0.0, 100.0, 320.0, 40.0, true));

        let blocked =
            NavGrid::from_walkable_area(&area, 320.0, 240.0, 8.0, 42.0, ClearancePolicy::Lenient)
                .unwrap();
        assert_eq!(blocked.walkable_count(), 0);

        let open =
            NavGrid::from_walkable_area(&area, 320.0, 240.0, 8.0, 15.0, ClearancePolicy::Lenient)
                .unwrap();
        // Centerline row: y = 120 -> cell row 15
        let mut centerline = 0;
        for x in 0..open.width() as i32 {
            if open.is_walkable(GridCoord::new(x, 15)) {
                centerline += 1;
            }
        }
        assert!(centerline > 0, "centerline should stay walkable at r=15");
    }

    #[test]
    fn test_strict_policy_blocks_corridor() {
        // Corridor taller than the radius but narrower than the
        // diameter: lenient keeps the centerline, strict blocks it.
        let mut area = WalkableArea::new();
        area.add_region(rect_region(0.0, 100.0, 320.0, 40.0, true));

        let lenient =
            NavGrid::from_walkable_area(&area, 320.0, 240.0, 8.0, 30.0, ClearancePolicy::Lenient)
                .unwrap();
        let strict =
            NavGrid::from_walkable_area(&area, 320.0, 240.0, 8.0, 30.0, ClearancePolicy::Strict)
                .unwrap();

        assert!(lenient.walkable_count() > 0);
        assert_eq!(strict.walkable_count(), 0);
    }

    #[test]
    fn test_lenient_does_not_forgive_obstacles() {
        // Corridor between two obstacle cutouts instead of area edges:
        // ray samples land inside obstacles, so no leniency applies.
        let mut area = WalkableArea::new();
        area.add_region(rect_region(0.0, 0.0, 320.0, 240.0, true));
        area.add_region(rect_region(0.0, 0.0, 320.0, 100.0, false));
        area.add_region(rect_region(0.0, 140.0, 320.0, 100.0, false));

        let grid =
            NavGrid::from_walkable_area(&area, 320.0, 240.0, 8.0, 30.0, ClearancePolicy::Lenient)
                .unwrap();
        // Centerline y=120 -> row 15: blocked because the failures are
        // inside true obstacles, not past the area edge.
        for x in 2..(grid.width() as i32 - 2) {
            assert!(!grid.is_walkable(GridCoord::new(x, 15)));
        }
    }

    #[test]
    fn test_blocking_rect_forces_unwalkable() {
        let mut area = open_scene();
        area.add_blocked_rect(Bounds::from_rect(64.0, 64.0, 64.0, 64.0));

        let grid =
            NavGrid::from_walkable_area(&area, 320.0, 320.0, 32.0, 0.0, ClearancePolicy::Lenient)
                .unwrap();

        // Cell (3,3) center (112,112) is inside the blocked rect
        assert!(!grid.is_walkable(GridCoord::new(3, 3)));
        assert!(grid.is_walkable(GridCoord::new(6, 6)));
    }
}
