//! Converts a [`Grid`] to and from its single line text form.
//!
//! Every cell is written as one lowercase hex digit, rows are written top to bottom and
//! separated by [`ROW_DELIMITER`]. There is no whitespace and no leading or trailing delimiter.

use crate::constants::{CELL_RADIX, FULL_MASK, ROW_DELIMITER};
use crate::error::MazeError;
use crate::grid::{Direction, Grid, WallMask};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Encodes a [`Grid`] as text
///
/// # Examples
///
/// ```
/// use mazegen::codec::flatten;
/// use mazegen::grid::Grid;
///
/// let grid = Grid::from_rows(vec![vec![0b1001, 0b0100]]).unwrap();
/// assert_eq!(flatten(&grid), "94");
/// ```
pub fn flatten(grid: &Grid) -> String {
    let mut encoded = String::with_capacity(grid.rows() * (grid.columns() + 1));
    for (i, row) in grid.iter_rows().enumerate() {
        if i > 0 {
            encoded.push(ROW_DELIMITER);
        }
        // masks are at most 4 bits wide, so each is exactly one digit
        encoded.extend(row.iter().map(|&mask| {
            debug_assert!(mask <= FULL_MASK, "mask {mask} is wider than 4 bits");
            char::from_digit(u32::from(mask), CELL_RADIX).unwrap_or('f')
        }));
    }
    encoded
}

/// Decodes text produced by [`flatten`] back into a [`Grid`]
///
/// # Examples
///
/// ```
/// use mazegen::codec::inflate;
///
/// let grid = inflate("94,53").unwrap();
/// assert_eq!(grid.cell_at(1, 0), Some(0b0101));
/// assert!(inflate("xg,12").is_err());
/// ```
pub fn inflate(encoded: &str) -> Result<Grid, MazeError> {
    let rows = encoded
        .split(ROW_DELIMITER)
        .enumerate()
        .map(|(row, cells)| {
            cells
                .chars()
                .enumerate()
                .map(|(column, c)| {
                    decode_cell(c).ok_or_else(|| {
                        MazeError::MalformedEncoding(format!(
                            "invalid cell {:?} at ({}, {})",
                            c, row, column
                        ))
                    })
                })
                .collect::<Result<Vec<_>, _>>()
        })
        .collect::<Result<Vec<_>, _>>()?;
    Grid::from_rows(rows)
}

/// Parses one lowercase hex digit
fn decode_cell(c: char) -> Option<WallMask> {
    if c.is_ascii_digit() || ('a'..='f').contains(&c) {
        c.to_digit(CELL_RADIX).map(|digit| digit as WallMask)
    } else {
        None
    }
}

/// Returns the column of the first cell in the top row whose up wall is removed
///
/// # Examples
///
/// ```
/// use mazegen::codec::find_start_column;
/// use mazegen::grid::standard_grids::example_grid;
///
/// assert_eq!(find_start_column(&example_grid()), Ok(1));
/// ```
pub fn find_start_column(grid: &Grid) -> Result<usize, MazeError> {
    (0..grid.columns())
        .find(|&column| grid.is_open(0, column, Direction::Up))
        .ok_or(MazeError::NoOpeningFound)
}

impl Display for Grid {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", flatten(self))
    }
}

impl FromStr for Grid {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        inflate(s)
    }
}

impl Serialize for Grid {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&flatten(self))
    }
}

impl<'de> Deserialize<'de> for Grid {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let encoded = String::deserialize(deserializer)?;
        inflate(&encoded).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::generate_maze;
    use crate::grid::make_grid;
    use crate::grid::standard_grids::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn flatten_single_row() {
        let grid = Grid::from_rows(vec![vec![0b1001, 0b0100]]).unwrap();
        assert_eq!(flatten(&grid), "94");
    }

    #[test]
    fn flatten_example() {
        assert_eq!(flatten(&example_grid()), GRID_EXAMPLE_ENCODED);
    }

    #[test]
    fn flatten_full_masks() {
        let grid = make_grid(2, 3).unwrap();
        assert_eq!(flatten(&grid), "fff,fff");
        assert_eq!(grid.to_string(), "fff,fff");
    }

    #[test]
    fn flatten_every_mask() {
        let grid = Grid::from_rows(vec![(0..=FULL_MASK).collect()]).unwrap();
        let encoded = flatten(&grid);
        assert_eq!(encoded, "0123456789abcdef");
        assert_eq!(encoded.len(), grid.columns());
    }

    #[test]
    fn inflate_example() {
        assert_eq!(inflate(GRID_EXAMPLE_ENCODED), Ok(example_grid()));
    }

    #[test]
    fn round_trip_generated() {
        let mut rng = StdRng::seed_from_u64(99);
        for (rows, columns) in [(1, 1), (3, 7), (10, 20)] {
            let grid = generate_maze(rows, columns, &mut rng, None, None).unwrap();
            let encoded = flatten(&grid);
            assert_eq!(encoded.split(ROW_DELIMITER).count(), rows);
            assert_eq!(inflate(&encoded).unwrap(), grid);
            assert_eq!(flatten(&inflate(&encoded).unwrap()), encoded);
        }
    }

    #[test]
    fn inflate_rejects_bad_digits() {
        assert!(matches!(
            inflate("xg,12"),
            Err(MazeError::MalformedEncoding(_))
        ));
        assert!(inflate("9A").is_err());
        assert!(inflate("9 4").is_err());
    }

    #[test]
    fn inflate_rejects_ragged_rows() {
        assert!(matches!(
            inflate("12,1"),
            Err(MazeError::MalformedEncoding(_))
        ));
    }

    #[test]
    fn inflate_rejects_empty_rows() {
        assert!(inflate("").is_err());
        assert!(inflate("12,").is_err());
        assert!(inflate(",12").is_err());
    }

    #[test]
    fn inflate_error_message() {
        assert_eq!(
            inflate("12,3g").unwrap_err().to_string(),
            "Malformed encoding: invalid cell 'g' at (1, 1)"
        );
    }

    #[test]
    fn start_column() {
        let grid = Grid::from_rows(vec![ROW_ENTRANCE_AT_3.to_vec()]).unwrap();
        assert_eq!(find_start_column(&grid), Ok(3));
    }

    #[test]
    fn start_column_missing() {
        let grid = make_grid(3, 3).unwrap();
        assert_eq!(find_start_column(&grid), Err(MazeError::NoOpeningFound));
    }

    #[test]
    fn from_str() {
        let grid: Grid = "94".parse().unwrap();
        assert_eq!(grid.cell_at(0, 1), Some(0b0100));
    }

    #[test]
    fn serde_uses_encoded_string() {
        let json = serde_json::to_string(&example_grid()).unwrap();
        assert_eq!(json, format!("\"{}\"", GRID_EXAMPLE_ENCODED));
        let grid: Grid = serde_json::from_str(&json).unwrap();
        assert_eq!(grid, example_grid());
        assert!(serde_json::from_str::<Grid>("\"12,1\"").is_err());
    }
}
