//! Errors produced while building, mutating, or decoding a maze

use std::fmt::{Display, Formatter};

/// Everything that can go wrong in this crate
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum MazeError {
    /// A grid was requested with zero rows or zero columns
    InvalidDimension {
        /// The requested number of rows
        rows: usize,
        /// The requested number of columns
        columns: usize,
    },
    /// A cell was addressed outside of the grid
    OutOfBounds {
        /// The requested row
        row: usize,
        /// The requested column
        column: usize,
    },
    /// An encoded grid (or a hand-built one) violates the structure of a grid
    MalformedEncoding(String),
    /// The top row has no cell with its up wall removed
    NoOpeningFound,
}

impl Display for MazeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            MazeError::InvalidDimension { rows, columns } => {
                write!(f, "Invalid grid dimensions {rows}x{columns}")
            }
            MazeError::OutOfBounds { row, column } => {
                write!(f, "Cell ({row}, {column}) is out of bounds")
            }
            MazeError::MalformedEncoding(reason) => write!(f, "Malformed encoding: {reason}"),
            MazeError::NoOpeningFound => write!(f, "No opening found in the top row"),
        }
    }
}

impl std::error::Error for MazeError {}
