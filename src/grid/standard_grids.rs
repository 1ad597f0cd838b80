#![cfg_attr(rustfmt, rustfmt_skip)]
//! A set of pre-made, hand-built grids

use crate::grid::{Grid, WallMask};

/// Rows of a hand-built 5x6 perfect maze
///
/// The entrance is at column 1 of the top row and the exit at column 1 of the bottom row.
pub const GRID_EXAMPLE: [[WallMask; 6]; 5] = [
    [0b1001, 0b0100, 0b1001, 0b1000, 0b1010, 0b1100],
    [0b0101, 0b0011, 0b0110, 0b0101, 0b1001, 0b0100],
    [0b0001, 0b1110, 0b1001, 0b0110, 0b0101, 0b0101],
    [0b0101, 0b1001, 0b0110, 0b1001, 0b0110, 0b0101],
    [0b0111, 0b0101, 0b1011, 0b0110, 0b1011, 0b0110],
];

/// [`GRID_EXAMPLE`] as produced by [`flatten`](crate::codec::flatten)
pub const GRID_EXAMPLE_ENCODED: &str = "9498ac,536594,1e9655,596965,75b6b6";

/// A single row whose only entrance is at column 3
pub const ROW_ENTRANCE_AT_3: [WallMask; 6] = [0b1001, 0b1100, 0b1001, 0b0000, 0b1010, 0b1100];

/// Builds a [`Grid`] from [`GRID_EXAMPLE`]
///
/// ```
/// use mazegen::grid::standard_grids::example_grid;
///
/// let grid = example_grid();
/// assert_eq!(grid.cell_at(0, 1), Some(0b0100));
/// ```
pub fn example_grid() -> Grid {
    Grid::from_rows(GRID_EXAMPLE.iter().map(|row| row.to_vec()).collect())
        .expect("GRID_EXAMPLE is rectangular and 4 bit")
}
