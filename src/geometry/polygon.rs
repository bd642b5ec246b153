//! Polygon region with ray-casting containment.

use serde::{Deserialize, Serialize};

use crate::core::{Bounds, WorldPoint};

/// A simple (possibly non-convex) polygon in world space, tagged as
/// walkable floor or obstacle cutout.
///
/// Regions are authored at scene-creation time and are immutable
/// afterwards except for explicit vertex edits.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PolygonRegion {
    /// Ordered vertices in world space. At least 3 for a valid region.
    vertices: Vec<WorldPoint>,
    /// Walkable floor (true) or obstacle cutout (false).
    walkable: bool,
}

impl PolygonRegion {
    /// Create a new region from ordered vertices.
    pub fn new(vertices: Vec<WorldPoint>, walkable: bool) -> Self {
        Self { vertices, walkable }
    }

    /// A walkable floor region.
    pub fn floor(vertices: Vec<WorldPoint>) -> Self {
        Self::new(vertices, true)
    }

    /// An obstacle cutout region.
    pub fn obstacle(vertices: Vec<WorldPoint>) -> Self {
        Self::new(vertices, false)
    }

    /// A polygon needs at least 3 vertices to bound any area.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.vertices.len() >= 3
    }

    /// Walkable tag for this region.
    #[inline]
    pub fn is_walkable_region(&self) -> bool {
        self.walkable
    }

    /// The ordered vertex list.
    #[inline]
    pub fn vertices(&self) -> &[WorldPoint] {
        &self.vertices
    }

    /// Replace a vertex. Returns false if the index is out of range.
    ///
    /// The owning [`WalkableArea`](super::WalkableArea) recomputes its
    /// cached bounds after vertex edits.
    pub fn set_vertex(&mut self, index: usize, point: WorldPoint) -> bool {
        match self.vertices.get_mut(index) {
            Some(v) => {
                *v = point;
                true
            }
            None => false,
        }
    }

    /// Append a vertex.
    pub fn push_vertex(&mut self, point: WorldPoint) {
        self.vertices.push(point);
    }

    /// Axis-aligned bounding box of the vertices.
    pub fn bounds(&self) -> Bounds {
        let mut bounds = Bounds::empty();
        for &v in &self.vertices {
            bounds.expand_to_include(v);
        }
        bounds
    }

    /// Point-in-polygon test using the standard ray-casting
    /// (crossing number) algorithm.
    ///
    /// Invalid regions (< 3 vertices) contain nothing.
    pub fn contains(&self, point: WorldPoint) -> bool {
        if !self.is_valid() {
            return false;
        }

        let mut inside = false;
        let mut j = self.vertices.len() - 1;
        for i in 0..self.vertices.len() {
            let vi = self.vertices[i];
            let vj = self.vertices[j];

            if (vi.y > point.y) != (vj.y > point.y)
                && point.x < (vj.x - vi.x) * (point.y - vi.y) / (vj.y - vi.y) + vi.x
            {
                inside = !inside;
            }
            j = i;
        }
        inside
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(x: f32, y: f32, size: f32) -> Vec<WorldPoint> {
        vec![
            WorldPoint::new(x, y),
            WorldPoint::new(x + size, y),
            WorldPoint::new(x + size, y + size),
            WorldPoint::new(x, y + size),
        ]
    }

    #[test]
    fn test_square_containment() {
        let region = PolygonRegion::floor(square(0.0, 0.0, 100.0));
        assert!(region.contains(WorldPoint::new(50.0, 50.0)));
        assert!(region.contains(WorldPoint::new(1.0, 99.0)));
        assert!(!region.contains(WorldPoint::new(-1.0, 50.0)));
        assert!(!region.contains(WorldPoint::new(50.0, 101.0)));
    }

    #[test]
    fn test_concave_polygon() {
        // L-shape: the notch at the top right is outside
        let region = PolygonRegion::floor(vec![
            WorldPoint::new(0.0, 0.0),
            WorldPoint::new(50.0, 0.0),
            WorldPoint::new(50.0, 50.0),
            WorldPoint::new(100.0, 50.0),
            WorldPoint::new(100.0, 100.0),
            WorldPoint::new(0.0, 100.0),
        ]);

        assert!(region.contains(WorldPoint::new(25.0, 25.0)));
        assert!(region.contains(WorldPoint::new(75.0, 75.0)));
        assert!(!region.contains(WorldPoint::new(75.0, 25.0))); // in the notch
    }

    #[test]
    fn test_degenerate_polygon() {
        let line = PolygonRegion::floor(vec![
            WorldPoint::new(0.0, 0.0),
            WorldPoint::new(10.0, 10.0),
        ]);
        assert!(!line.is_valid());
        assert!(!line.contains(WorldPoint::new(5.0, 5.0)));
    }

    #[test]
    fn test_vertex_edit() {
        let mut region = PolygonRegion::floor(square(0.0, 0.0, 10.0));
        assert!(region.set_vertex(1, WorldPoint::new(20.0, 0.0)));
        assert!(!region.set_vertex(9, WorldPoint::ZERO));
        assert_eq!(region.vertices()[1], WorldPoint::new(20.0, 0.0));

        region.push_vertex(WorldPoint::new(5.0, -5.0));
        assert_eq!(region.vertices().len(), 5);
    }

    #[test]
    fn test_bounds() {
        let region = PolygonRegion::floor(square(10.0, 20.0, 30.0));
        let b = region.bounds();
        assert_eq!(b.min, WorldPoint::new(10.0, 20.0));
        assert_eq!(b.max, WorldPoint::new(40.0, 50.0));
    }
}
