//! Logical grid structs and utilities.

use crate::constants::FULL_MASK;
use crate::error::MazeError;
use num_enum::{IntoPrimitive, TryFromPrimitive};
use serde::{Deserialize, Serialize};

pub mod standard_grids;

/// The walls around one cell; a set bit means the wall on that side is present
///
/// Only the low four bits are used, one per [`Direction`].
pub type WallMask = u8;

/// Enum for direction values.
///
/// Each value is the single bit of a [`WallMask`] that holds the wall on that side.
#[derive(
    Clone,
    Copy,
    Debug,
    Hash,
    Eq,
    PartialEq,
    IntoPrimitive,
    TryFromPrimitive,
    Serialize,
    Deserialize,
)]
#[repr(u8)]
pub enum Direction {
    /// Up, or -row
    Up = 0b1000,
    /// Right, or +column
    Right = 0b0100,
    /// Down, or +row
    Down = 0b0010,
    /// Left, or -column
    Left = 0b0001,
}

impl Direction {
    /// Get a list of all directions
    pub fn get_all() -> [Self; 4] {
        [Self::Up, Self::Right, Self::Down, Self::Left]
    }

    /// The bit of a [`WallMask`] that holds the wall on this side
    pub fn mask(self) -> WallMask {
        self.into()
    }

    /// The direction pointing back the way this one came
    pub fn inverse(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// The bit of the neighbor's [`WallMask`] that faces back toward this cell
    pub fn inverse_mask(self) -> WallMask {
        self.inverse().mask()
    }

    /// Row and column deltas of one step in this direction
    pub fn offset(self) -> (isize, isize) {
        match self {
            Self::Up => (-1, 0),
            Self::Down => (1, 0),
            Self::Left => (0, -1),
            Self::Right => (0, 1),
        }
    }
}

/// A fixed size, row-major matrix of [`WallMask`]s
///
/// Removing a wall always updates both cells that share it; see [`Grid::remove_wall`].
///
/// # Examples
///
/// ```
/// use mazegen::grid::{make_grid, Direction};
///
/// let mut grid = make_grid(2, 3).unwrap();
/// grid.remove_wall(0, 0, Direction::Right).unwrap();
///
/// assert_eq!(grid.cell_at(0, 0), Some(0b1011));
/// assert_eq!(grid.cell_at(0, 1), Some(0b1110));
/// ```
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Grid {
    rows: usize,
    columns: usize,
    cells: Vec<WallMask>,
}

/// Creates a fully walled [`Grid`] with the given dimensions
///
/// Both dimensions must be at least 1.
///
/// # Examples
///
/// ```
/// use mazegen::grid::make_grid;
///
/// let grid = make_grid(3, 7).unwrap();
/// assert_eq!((grid.rows(), grid.columns()), (3, 7));
/// assert!(make_grid(0, 7).is_err());
/// ```
pub fn make_grid(rows: usize, columns: usize) -> Result<Grid, MazeError> {
    Grid::new(rows, columns)
}

impl Grid {
    /// Creates a fully walled [`Grid`]; see [`make_grid`]
    pub fn new(rows: usize, columns: usize) -> Result<Self, MazeError> {
        if rows == 0 || columns == 0 {
            return Err(MazeError::InvalidDimension { rows, columns });
        }
        Ok(Self {
            rows,
            columns,
            cells: vec![FULL_MASK; rows * columns],
        })
    }

    /// Creates a [`Grid`] from explicit rows of masks
    ///
    /// Rows must be non-empty, all the same length, and hold only 4 bit values.
    /// The wall symmetry of the result is not checked; see [`Grid::validate`].
    pub fn from_rows(rows: Vec<Vec<WallMask>>) -> Result<Self, MazeError> {
        let columns = rows.first().map(|row| row.len()).unwrap_or(0);
        if rows.is_empty() || columns == 0 {
            return Err(MazeError::MalformedEncoding("grid has no cells".into()));
        }
        if let Some(row) = rows.iter().position(|row| row.len() != columns) {
            return Err(MazeError::MalformedEncoding(format!(
                "row {} has {} cells, expected {}",
                row,
                rows[row].len(),
                columns
            )));
        }
        let num_rows = rows.len();
        let cells: Vec<WallMask> = rows.into_iter().flatten().collect();
        if let Some(i) = cells.iter().position(|&mask| mask > FULL_MASK) {
            return Err(MazeError::MalformedEncoding(format!(
                "cell ({}, {}) holds {}, which is wider than 4 bits",
                i / columns,
                i % columns,
                cells[i]
            )));
        }
        Ok(Self {
            rows: num_rows,
            columns,
            cells,
        })
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    pub fn columns(&self) -> usize {
        self.columns
    }

    fn index(&self, row: usize, column: usize) -> Option<usize> {
        if row < self.rows && column < self.columns {
            Some(row * self.columns + column)
        } else {
            None
        }
    }

    /// Returns the [`WallMask`] at the given cell, or `None` if the cell is out of bounds
    pub fn cell_at(&self, row: usize, column: usize) -> Option<WallMask> {
        self.index(row, column).map(|i| self.cells[i])
    }

    /// Iterates over the rows of the grid, top to bottom
    pub fn iter_rows(&self) -> impl Iterator<Item = &[WallMask]> + '_ {
        self.cells.chunks(self.columns)
    }

    /// Returns the cell one step in the given direction, or `None` if that step leaves the grid
    ///
    /// # Examples
    ///
    /// ```
    /// use mazegen::grid::{make_grid, Direction};
    ///
    /// let grid = make_grid(2, 2).unwrap();
    /// assert_eq!(grid.neighbor(0, 0, Direction::Right), Some((0, 1)));
    /// assert_eq!(grid.neighbor(0, 0, Direction::Up), None);
    /// ```
    pub fn neighbor(
        &self,
        row: usize,
        column: usize,
        direction: Direction,
    ) -> Option<(usize, usize)> {
        let (d_row, d_column) = direction.offset();
        let row = row.checked_add_signed(d_row)?;
        let column = column.checked_add_signed(d_column)?;
        self.index(row, column).map(|_| (row, column))
    }

    /// Whether the cell still has all four walls, meaning generation never reached it
    pub fn is_unvisited(&self, row: usize, column: usize) -> bool {
        self.cell_at(row, column) == Some(FULL_MASK)
    }

    /// Whether the wall on the given side of the cell is absent
    ///
    /// Out of bounds cells have no openings.
    pub fn is_open(&self, row: usize, column: usize, direction: Direction) -> bool {
        self.cell_at(row, column)
            .is_some_and(|mask| mask & direction.mask() == 0)
    }

    /// Removes the wall on the given side of a cell, and the matching wall of its neighbor
    ///
    /// If the neighbor is outside the grid, only this cell changes, which is how boundary
    /// openings are carved. Removing a wall that is already gone changes nothing.
    pub fn remove_wall(
        &mut self,
        row: usize,
        column: usize,
        direction: Direction,
    ) -> Result<(), MazeError> {
        let i = self
            .index(row, column)
            .ok_or(MazeError::OutOfBounds { row, column })?;
        self.cells[i] &= !direction.mask();

        if let Some((n_row, n_column)) = self.neighbor(row, column, direction) {
            let n = n_row * self.columns + n_column;
            self.cells[n] &= !direction.inverse_mask();
        }
        Ok(())
    }

    /// Number of walls removed between pairs of cells inside the grid
    ///
    /// A perfect maze over `rows * columns` cells has exactly `rows * columns - 1`.
    pub fn removed_wall_count(&self) -> usize {
        let mut count = 0;
        for row in 0..self.rows {
            for column in 0..self.columns {
                for direction in [Direction::Right, Direction::Down] {
                    if self.neighbor(row, column, direction).is_some()
                        && self.is_open(row, column, direction)
                    {
                        count += 1;
                    }
                }
            }
        }
        count
    }

    /// Number of cells reachable from the given cell through open walls
    pub fn reachable_count(&self, row: usize, column: usize) -> usize {
        if self.index(row, column).is_none() {
            return 0;
        }
        let mut visited = vec![false; self.cells.len()];
        let mut stack = vec![(row, column)];
        let mut count = 0;
        while let Some((row, column)) = stack.pop() {
            let i = row * self.columns + column;
            if visited[i] {
                continue;
            }
            visited[i] = true;
            count += 1;
            for direction in Direction::get_all() {
                if !self.is_open(row, column, direction) {
                    continue;
                }
                if let Some(next) = self.neighbor(row, column, direction) {
                    stack.push(next);
                }
            }
        }
        count
    }

    /// Validates the walls of the grid.
    ///
    /// A valid [`Grid`] must satisfy the following conditions:
    /// - Two neighboring cells agree about the wall between them.
    /// - The left and right edges are all walls.
    ///
    /// Top and bottom edges may hold openings.
    pub fn validate(&self) -> Result<(), MazeError> {
        for row in 0..self.rows {
            if self.is_open(row, 0, Direction::Left) {
                return Err(MazeError::MalformedEncoding(format!(
                    "Left edge of grid is open at row {}",
                    row
                )));
            }
            if self.is_open(row, self.columns - 1, Direction::Right) {
                return Err(MazeError::MalformedEncoding(format!(
                    "Right edge of grid is open at row {}",
                    row
                )));
            }
        }

        for row in 0..self.rows {
            for column in 0..self.columns {
                for direction in [Direction::Right, Direction::Down] {
                    if let Some((n_row, n_column)) = self.neighbor(row, column, direction) {
                        if self.is_open(row, column, direction)
                            != self.is_open(n_row, n_column, direction.inverse())
                        {
                            return Err(MazeError::MalformedEncoding(format!(
                                "Cells ({}, {}) and ({}, {}) disagree about their wall",
                                row, column, n_row, n_column
                            )));
                        }
                    }
                }
            }
        }

        Ok(())
    }
}
