//! Point and coordinate types for the navigation grid.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Sub};

/// Grid coordinates (integer cell indices).
///
/// Equality and hashing are by coordinate only, which makes this the
/// search-node identity during pathfinding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct GridCoord {
    /// X coordinate (column index)
    pub x: i32,
    /// Y coordinate (row index)
    pub y: i32,
}

impl GridCoord {
    /// Create a new grid coordinate
    #[inline]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Manhattan distance to another coordinate
    #[inline]
    pub fn manhattan_distance(&self, other: &GridCoord) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }

    /// Chebyshev distance (max of x and y distance) - used for 8-connected grids
    #[inline]
    pub fn chebyshev_distance(&self, other: &GridCoord) -> i32 {
        (self.x - other.x).abs().max((self.y - other.y).abs())
    }

    /// Is `other` one of the 8 surrounding cells? Identical coordinates
    /// are not adjacent.
    #[inline]
    pub fn is_adjacent(&self, other: &GridCoord) -> bool {
        *self != *other && self.chebyshev_distance(other) == 1
    }

    /// Is the step from here to `other` a diagonal one?
    #[inline]
    pub fn is_diagonal_to(&self, other: &GridCoord) -> bool {
        self.x != other.x && self.y != other.y
    }

    /// The 4 cardinal neighbors, in a fixed order (up, right, down, left).
    ///
    /// Cardinal-before-diagonal ordering is what makes search tie-breaking
    /// deterministic; see [`MovementRules`](crate::search::MovementRules).
    #[inline]
    pub fn neighbors_4(&self) -> [GridCoord; 4] {
        [
            GridCoord::new(self.x, self.y - 1),
            GridCoord::new(self.x + 1, self.y),
            GridCoord::new(self.x, self.y + 1),
            GridCoord::new(self.x - 1, self.y),
        ]
    }

    /// The 4 diagonal neighbors, in a fixed order (NE, SE, SW, NW in
    /// screen coordinates, y-down).
    #[inline]
    pub fn neighbors_diagonal(&self) -> [GridCoord; 4] {
        [
            GridCoord::new(self.x + 1, self.y - 1),
            GridCoord::new(self.x + 1, self.y + 1),
            GridCoord::new(self.x - 1, self.y + 1),
            GridCoord::new(self.x - 1, self.y - 1),
        ]
    }
}

impl Add for GridCoord {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        GridCoord::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for GridCoord {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        GridCoord::new(self.x - other.x, self.y - other.y)
    }
}

/// World coordinates (pixels, f32).
///
/// Screen convention: X grows right, Y grows down, origin at the
/// top-left of the scene.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct WorldPoint {
    /// X coordinate in pixels
    pub x: f32,
    /// Y coordinate in pixels
    pub y: f32,
}

impl WorldPoint {
    /// Create a new world point
    #[inline]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Zero point (scene origin)
    pub const ZERO: WorldPoint = WorldPoint { x: 0.0, y: 0.0 };

    /// Euclidean distance to another point
    #[inline]
    pub fn distance(&self, other: &WorldPoint) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Squared distance (faster, avoids sqrt)
    #[inline]
    pub fn distance_squared(&self, other: &WorldPoint) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    /// Dot product with another point (as vectors)
    #[inline]
    pub fn dot(&self, other: &WorldPoint) -> f32 {
        self.x * other.x + self.y * other.y
    }

    /// Cross product (z-component of 3D cross product).
    ///
    /// Zero when the two vectors are colinear; used by path
    /// simplification.
    #[inline]
    pub fn cross(&self, other: &WorldPoint) -> f32 {
        self.x * other.y - self.y * other.x
    }

    /// Are both components finite (not NaN or infinite)?
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for WorldPoint {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        WorldPoint::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for WorldPoint {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        WorldPoint::new(self.x - other.x, self.y - other.y)
    }
}

impl Mul<f32> for WorldPoint {
    type Output = Self;

    #[inline]
    fn mul(self, scalar: f32) -> Self {
        WorldPoint::new(self.x * scalar, self.y * scalar)
    }
}
