//! Provides constants for the library.

use crate::grid::WallMask;

/// Mask of a cell with all four walls present; during generation this marks an unvisited cell
pub const FULL_MASK: WallMask = 0b1111;
/// Separates row strings in an encoded grid
pub const ROW_DELIMITER: char = ',';
/// Radix used to render one cell as one digit
pub const CELL_RADIX: u32 = 16;

/// Number of rows on the default board
pub const DEFAULT_ROWS: usize = 10;
/// Number of columns on the default board
pub const DEFAULT_COLUMNS: usize = 20;
