//! Navigation grid: rasterized walkability used by path search.
//!
//! [`NavGrid`] is a uniform grid of boolean walkability flags covering
//! the rectangular scene area `[0, world_width] x [0, world_height]`.
//! It is built once per scene load from a
//! [`WalkableArea`](crate::geometry::WalkableArea) snapshot
//! (see [`NavGrid::from_walkable_area`]) and stays immutable afterwards
//! unless explicitly mutated through [`NavGrid::set_walkable`] /
//! [`NavGrid::set_rect_walkable`], which tests and the debug overlay
//! use to simulate dynamic obstacles between path requests.

mod builder;

use crate::core::{GridCoord, WorldPoint};
use crate::error::GridError;

pub use builder::ClearancePolicy;

/// Uniform boolean walkability grid.
///
/// The grid uses a coordinate system where:
/// - cell (0, 0) covers the world rect `[0, cell_size) x [0, cell_size)`
/// - cell (x, y) maps to the world-space center
///   `(x*cell_size + cell_size/2, y*cell_size + cell_size/2)`
/// - X grows right, Y grows down (screen convention)
///
/// Cells are stored row-major in a flat `Vec<bool>`.
#[derive(Clone, Debug)]
pub struct NavGrid {
    cells: Vec<bool>,
    width: usize,
    height: usize,
    cell_size: f32,
}

impl NavGrid {
    /// Create a grid with the given dimensions, all cells walkable.
    ///
    /// Zero dimensions and non-positive or non-finite cell sizes are
    /// caller bugs and fail fast.
    pub fn new(width: usize, height: usize, cell_size: f32) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::EmptyGrid { width, height });
        }
        if !(cell_size.is_finite() && cell_size > 0.0) {
            return Err(GridError::InvalidCellSize(cell_size));
        }
        Ok(Self {
            cells: vec![true; width * height],
            width,
            height,
            cell_size,
        })
    }

    /// Grid width in cells
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height in cells
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Cell size in world units (pixels per cell)
    #[inline]
    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    /// Total number of cells
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }

    /// Number of walkable cells
    pub fn walkable_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Convert world coordinates to grid coordinates.
    ///
    /// Uses `floor(x / cell_size)` per axis. For negative inputs the
    /// `as i32` cast truncates toward zero instead of flooring; such
    /// coordinates are outside the grid either way and fail the bounds
    /// check, so the truncation direction is not observable through
    /// the search surface.
    #[inline]
    pub fn world_to_grid(&self, point: WorldPoint) -> GridCoord {
        GridCoord::new(
            (point.x / self.cell_size) as i32,
            (point.y / self.cell_size) as i32,
        )
    }

    /// Convert grid coordinates to world coordinates (cell center).
    #[inline]
    pub fn grid_to_world(&self, coord: GridCoord) -> WorldPoint {
        WorldPoint::new(
            (coord.x as f32 + 0.5) * self.cell_size,
            (coord.y as f32 + 0.5) * self.cell_size,
        )
    }

    /// Check if grid coordinates are within bounds
    #[inline]
    pub fn in_bounds(&self, coord: GridCoord) -> bool {
        coord.x >= 0
            && coord.y >= 0
            && (coord.x as usize) < self.width
            && (coord.y as usize) < self.height
    }

    /// Is the cell walkable? Total function: returns false for any
    /// out-of-bounds coordinate, never panics.
    #[inline]
    pub fn is_walkable(&self, coord: GridCoord) -> bool {
        match self.index_of(coord) {
            Some(i) => self.cells[i],
            None => false,
        }
    }

    /// Set the walkability of one cell. Out-of-bounds coordinates are
    /// ignored.
    pub fn set_walkable(&mut self, coord: GridCoord, walkable: bool) {
        if let Some(i) = self.index_of(coord) {
            self.cells[i] = walkable;
        }
    }

    /// Set the walkability of every cell overlapping a world-space
    /// rectangle. The rectangle is converted to the enclosing cell
    /// range, clamped to the grid.
    pub fn set_rect_walkable(
        &mut self,
        world_x: f32,
        world_y: f32,
        world_w: f32,
        world_h: f32,
        walkable: bool,
    ) {
        let min = self.world_to_grid(WorldPoint::new(world_x, world_y));
        let max = self.world_to_grid(WorldPoint::new(world_x + world_w, world_y + world_h));

        let x0 = min.x.max(0);
        let y0 = min.y.max(0);
        let x1 = max.x.min(self.width as i32 - 1);
        let y1 = max.y.min(self.height as i32 - 1);

        for y in y0..=y1 {
            for x in x0..=x1 {
                self.set_walkable(GridCoord::new(x, y), walkable);
            }
        }
    }

    /// Flat index for a coordinate, or None when out of bounds.
    #[inline]
    fn index_of(&self, coord: GridCoord) -> Option<usize> {
        if self.in_bounds(coord) {
            Some(coord.y as usize * self.width + coord.x as usize)
        } else {
            None
        }
    }

    /// Render the grid as ASCII art for debugging: `.` walkable,
    /// `#` blocked. One text row per grid row, top to bottom.
    pub fn render_ascii(&self) -> String {
        let mut out = String::with_capacity((self.width + 1) * self.height);
        for y in 0..self.height {
            for x in 0..self.width {
                let walkable = self.cells[y * self.width + x];
                out.push(if walkable { '.' } else { '#' });
            }
            out.push('\n');
        }
        out
    }
}
