//! Binary occupancy grid: the maze as `Empty`/`Path` cells.

use crate::error::GridError;
use smallvec::SmallVec;

/// The contents of a single grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cell {
    /// Wall material, not traversable.
    Empty,
    /// Corridor floor, traversable.
    Path,
}

impl Cell {
    /// Returns `true` for traversable cells.
    pub fn is_path(self) -> bool {
        matches!(self, Cell::Path)
    }
}

/// A binary maze grid of `height` rows by `width` columns, row-major,
/// with row 0 at the top.
///
/// Both dimensions must be odd and at least 1; construction rejects
/// anything else. Oddness is what lets the generator place rooms at
/// even `(row, col)` indices with one-cell wall bands between them.
///
/// The start cell is always `(0, 0)` and the goal cell
/// `(height - 1, width - 1)`; a well-formed maze (the generator's
/// contract) has every `Path` cell reachable from the start with an
/// acyclic corridor graph.
///
/// # Examples
///
/// ```
/// use warren_core::{Cell, OccupancyGrid};
///
/// let grid = OccupancyGrid::filled(5, 3, Cell::Empty).unwrap();
/// assert_eq!(grid.width(), 5);
/// assert_eq!(grid.height(), 3);
/// assert_eq!(grid.cell_count(), 15);
/// assert!(!grid.is_path(0, 0));
///
/// assert!(OccupancyGrid::filled(4, 3, Cell::Empty).is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OccupancyGrid {
    width: u32,
    height: u32,
    cells: Vec<Cell>,
}

impl OccupancyGrid {
    /// Maximum dimension size: observations use `row * width + col` in
    /// a `u32`, so each axis must stay well inside `i32`.
    pub const MAX_DIM: u32 = i32::MAX as u32;

    /// Check maze dimensions without building a grid.
    ///
    /// Returns `Err(GridError::EmptyGrid)` if either dimension is 0,
    /// `Err(GridError::EvenDimension)` if either is even, or
    /// `Err(GridError::DimensionTooLarge)` if either exceeds
    /// [`MAX_DIM`](Self::MAX_DIM).
    pub fn validate_dimensions(width: u32, height: u32) -> Result<(), GridError> {
        validate_dim("width", width)?;
        validate_dim("height", height)
    }

    /// Create a grid with every cell set to `fill`.
    ///
    /// Dimensions are validated as in
    /// [`validate_dimensions`](Self::validate_dimensions).
    pub fn filled(width: u32, height: u32, fill: Cell) -> Result<Self, GridError> {
        Self::validate_dimensions(width, height)?;
        Ok(Self {
            width,
            height,
            cells: vec![fill; (width as usize) * (height as usize)],
        })
    }

    /// Number of columns.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// The fixed start cell, `(row, col)`.
    pub fn start(&self) -> (u32, u32) {
        (0, 0)
    }

    /// The fixed goal cell, `(row, col)`.
    pub fn end(&self) -> (u32, u32) {
        (self.height - 1, self.width - 1)
    }

    /// Whether `(row, col)` lies inside the grid.
    pub fn in_bounds(&self, row: u32, col: u32) -> bool {
        row < self.height && col < self.width
    }

    /// Flat row-major index of `(row, col)`.
    ///
    /// This is also the observation encoding: the stride is `width`,
    /// the true row length.
    pub fn index_of(&self, row: u32, col: u32) -> usize {
        (row as usize) * (self.width as usize) + (col as usize)
    }

    /// The cell at `(row, col)`. Panics if out of bounds.
    pub fn cell(&self, row: u32, col: u32) -> Cell {
        assert!(self.in_bounds(row, col), "cell ({row}, {col}) out of bounds");
        self.cells[self.index_of(row, col)]
    }

    /// Overwrite the cell at `(row, col)`. Panics if out of bounds.
    pub fn set(&mut self, row: u32, col: u32, cell: Cell) {
        assert!(self.in_bounds(row, col), "cell ({row}, {col}) out of bounds");
        let idx = self.index_of(row, col);
        self.cells[idx] = cell;
    }

    /// Returns `true` if `(row, col)` is in bounds and traversable.
    pub fn is_path(&self, row: u32, col: u32) -> bool {
        self.in_bounds(row, col) && self.cells[self.index_of(row, col)].is_path()
    }

    /// The 4-connected in-bounds neighbours of `(row, col)` that are
    /// `Path`, in up/down/left/right order.
    pub fn path_neighbours(&self, row: u32, col: u32) -> SmallVec<[(u32, u32); 4]> {
        let offsets: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
        let mut result = SmallVec::new();
        for (dr, dc) in offsets {
            let nr = row as i32 + dr;
            let nc = col as i32 + dc;
            if nr < 0 || nc < 0 {
                continue;
            }
            let (nr, nc) = (nr as u32, nc as u32);
            if self.is_path(nr, nc) {
                result.push((nr, nc));
            }
        }
        result
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}

fn validate_dim(axis: &'static str, value: u32) -> Result<(), GridError> {
    if value == 0 {
        return Err(GridError::EmptyGrid);
    }
    if value % 2 == 0 {
        return Err(GridError::EvenDimension { axis, value });
    }
    if value > OccupancyGrid::MAX_DIM {
        return Err(GridError::DimensionTooLarge {
            axis,
            value,
            max: OccupancyGrid::MAX_DIM,
        });
    }
    Ok(())
}
