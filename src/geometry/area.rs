//! Walkable area aggregate: ordered polygon regions plus blocking hotspots.

use serde::{Deserialize, Serialize};

use crate::core::{Bounds, WorldPoint};

use super::polygon::PolygonRegion;

/// The walkable geometry of a scene.
///
/// An ordered collection of [`PolygonRegion`]s (walkable floors first,
/// obstacle cutouts layered on top) plus rectangles for hotspots that
/// block movement. Later regions take precedence where regions overlap:
/// a non-walkable region added after a walkable one carves a hole out
/// of it.
///
/// The bounding box over all region vertices is cached and refreshed on
/// every mutation.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct WalkableArea {
    regions: Vec<PolygonRegion>,
    /// Hotspot rectangles explicitly flagged as movement-blocking.
    blocked_rects: Vec<Bounds>,
    /// Cached AABB over all region vertices.
    bounds: Bounds,
}

impl WalkableArea {
    /// Create an empty walkable area. Everything is non-walkable until
    /// a floor region is added.
    pub fn new() -> Self {
        Self {
            regions: Vec::new(),
            blocked_rects: Vec::new(),
            bounds: Bounds::empty(),
        }
    }

    /// Append a region. Order matters: later regions win on overlap.
    pub fn add_region(&mut self, region: PolygonRegion) {
        self.regions.push(region);
        self.recompute_bounds();
    }

    /// Add a movement-blocking hotspot rectangle.
    ///
    /// Points inside it are non-walkable regardless of the polygon
    /// stack, and grid cells whose center falls inside are forced
    /// non-walkable regardless of clearance sampling.
    pub fn add_blocked_rect(&mut self, rect: Bounds) {
        self.blocked_rects.push(rect);
    }

    /// The region stack, in insertion order.
    #[inline]
    pub fn regions(&self) -> &[PolygonRegion] {
        &self.regions
    }

    /// Blocking hotspot rectangles.
    #[inline]
    pub fn blocked_rects(&self) -> &[Bounds] {
        &self.blocked_rects
    }

    /// Cached bounding box over all region vertices.
    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Edit one vertex of one region. Returns false if either index is
    /// out of range. Refreshes the cached bounds.
    pub fn set_region_vertex(
        &mut self,
        region_index: usize,
        vertex_index: usize,
        point: WorldPoint,
    ) -> bool {
        let updated = match self.regions.get_mut(region_index) {
            Some(region) => region.set_vertex(vertex_index, point),
            None => false,
        };
        if updated {
            self.recompute_bounds();
        }
        updated
    }

    /// Is a world point walkable?
    ///
    /// The last region in the stack containing the point decides: its
    /// walkable tag wins over every earlier region. A point contained
    /// by no region is non-walkable, as is any point inside a blocking
    /// hotspot rectangle.
    pub fn is_walkable(&self, point: WorldPoint) -> bool {
        if self.is_blocked(point) {
            return false;
        }

        let mut walkable = false;
        for region in &self.regions {
            if region.contains(point) {
                walkable = region.is_walkable_region();
            }
        }
        walkable
    }

    /// Is the point inside a movement-blocking hotspot rectangle?
    #[inline]
    pub fn is_blocked(&self, point: WorldPoint) -> bool {
        self.blocked_rects.iter().any(|r| r.contains(point))
    }

    /// Is the point inside any region at all, walkable or not?
    ///
    /// Distinguishes "past the area boundary" from "inside an obstacle
    /// cutout"; the lenient clearance fallback forgives only the
    /// former. See [`grid`](crate::grid).
    pub fn contains_any(&self, point: WorldPoint) -> bool {
        self.regions.iter().any(|r| r.contains(point))
    }

    /// Is the point inside a non-walkable region that takes precedence
    /// at that point (i.e. the point is genuinely inside an obstacle)?
    pub fn in_obstacle(&self, point: WorldPoint) -> bool {
        self.contains_any(point) && !self.is_walkable(point)
    }

    fn recompute_bounds(&mut self) {
        let mut bounds = Bounds::empty();
        for region in &self.regions {
            for &v in region.vertices() {
                bounds.expand_to_include(v);
            }
        }
        self.bounds = bounds;
    }
}
