//! Axis-aligned bounding box for spatial operations.
//!
//! [`Bounds`] represents a rectangular region in world space, used for:
//! - Walkable area extent caching (updated when regions mutate)
//! - Movement-blocking hotspot rectangles
//! - Fast point-in-rect rejection before polygon containment tests

use serde::{Deserialize, Serialize};

use super::point::WorldPoint;

/// Axis-aligned bounding box.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    /// Minimum corner (smallest x and y values).
    pub min: WorldPoint,
    /// Maximum corner (largest x and y values).
    pub max: WorldPoint,
}

impl Bounds {
    /// Create a new bounding box from min and max corners.
    #[inline]
    pub const fn new(min: WorldPoint, max: WorldPoint) -> Self {
        Self { min, max }
    }

    /// Create a bounding box from an origin and a size.
    #[inline]
    pub fn from_rect(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            min: WorldPoint::new(x, y),
            max: WorldPoint::new(x + width, y + height),
        }
    }

    /// Create an empty (invalid) bounding box.
    ///
    /// The empty bounds has min > max, so it will expand to fit any point.
    #[inline]
    pub fn empty() -> Self {
        Self {
            min: WorldPoint::new(f32::INFINITY, f32::INFINITY),
            max: WorldPoint::new(f32::NEG_INFINITY, f32::NEG_INFINITY),
        }
    }

    /// Check if the bounds are empty (invalid).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y
    }

    /// Width of the bounding box (x extent).
    #[inline]
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    /// Height of the bounding box (y extent).
    #[inline]
    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    /// Center of the bounding box.
    #[inline]
    pub fn center(&self) -> WorldPoint {
        WorldPoint::new(
            (self.min.x + self.max.x) * 0.5,
            (self.min.y + self.max.y) * 0.5,
        )
    }

    /// Check if a point is inside the bounding box (inclusive edges).
    #[inline]
    pub fn contains(&self, point: WorldPoint) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    /// Check if this bounds intersects with another.
    #[inline]
    pub fn intersects(&self, other: &Bounds) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
    }

    /// Grow the bounds to include a point.
    #[inline]
    pub fn expand_to_include(&mut self, point: WorldPoint) {
        self.min.x = self.min.x.min(point.x);
        self.min.y = self.min.y.min(point.y);
        self.max.x = self.max.x.max(point.x);
        self.max.y = self.max.y.max(point.y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_expands() {
        let mut b = Bounds::empty();
        assert!(b.is_empty());

        b.expand_to_include(WorldPoint::new(2.0, 3.0));
        b.expand_to_include(WorldPoint::new(-1.0, 5.0));

        assert!(!b.is_empty());
        assert_eq!(b.min, WorldPoint::new(-1.0, 3.0));
        assert_eq!(b.max, WorldPoint::new(2.0, 5.0));
    }

    #[test]
    fn test_contains() {
        let b = Bounds::from_rect(10.0, 20.0, 30.0, 40.0);
        assert!(b.contains(WorldPoint::new(10.0, 20.0)));
        assert!(b.contains(WorldPoint::new(40.0, 60.0)));
        assert!(b.contains(b.center()));
        assert!(!b.contains(WorldPoint::new(9.9, 30.0)));
        assert!(!b.contains(WorldPoint::new(20.0, 60.1)));
    }

    #[test]
    fn test_intersects() {
        let a = Bounds::from_rect(0.0, 0.0, 10.0, 10.0);
        let b = Bounds::from_rect(5.0, 5.0, 10.0, 10.0);
        let c = Bounds::from_rect(20.0, 20.0, 5.0, 5.0);
        assert!(a.intersects(&b));
        assert!(!a.intersects(&c));
    }

    #[test]
    fn test_dimensions() {
        let b = Bounds::from_rect(1.0, 2.0, 3.0, 4.0);
        assert_eq!(b.width(), 3.0);
        assert_eq!(b.height(), 4.0);
        assert_eq!(b.center(), WorldPoint::new(2.5, 4.0));
    }
}
