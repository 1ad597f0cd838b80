//! Generates perfect mazes with the Hunt-and-Kill algorithm.
//!
//! Starting from a random cell, the generator walks to random unvisited neighbors, removing the
//! wall it crosses each time. When the walk is stuck, it hunts for the first unvisited cell (in
//! row-major order) that touches visited territory, connects it to a random visited neighbor,
//! and walks again from there. When the hunt finds nothing, every cell belongs to one spanning
//! tree, and one opening is carved into each of the top and bottom rows.

use crate::error::MazeError;
use crate::grid::{make_grid, Direction, Grid};
use log::{debug, trace};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// A boundary wall that is deliberately removed, marking an entrance or exit
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Opening {
    /// Row of the cell
    pub row: usize,
    /// Column of the cell
    pub column: usize,
    /// Side of the cell that faces out of the grid
    pub direction: Direction,
}

impl Opening {
    /// An entrance through the top wall of the given column
    pub fn entrance(column: usize) -> Self {
        Self {
            row: 0,
            column,
            direction: Direction::Up,
        }
    }

    /// An exit through the bottom wall of the given column of a grid with `rows` rows
    pub fn exit(rows: usize, column: usize) -> Self {
        Self {
            row: rows.saturating_sub(1),
            column,
            direction: Direction::Down,
        }
    }

    /// Removes the wall this opening describes
    pub fn carve(&self, grid: &mut Grid) -> Result<(), MazeError> {
        grid.remove_wall(self.row, self.column, self.direction)
    }
}

/// Generates a perfect maze with one entrance in the top row and one exit in the bottom row
///
/// Entrance and exit columns are chosen at random unless given. All randomness comes from `rng`,
/// so a seeded generator always produces the same maze.
///
/// # Examples
///
/// ```
/// use mazegen::generator::generate_maze;
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let grid = generate_maze(4, 5, &mut rng, Some(2), None).unwrap();
///
/// assert_eq!(grid.removed_wall_count(), 4 * 5 - 1);
/// assert!(grid.is_open(0, 2, mazegen::grid::Direction::Up));
/// ```
pub fn generate_maze<R: Rng + ?Sized>(
    rows: usize,
    columns: usize,
    rng: &mut R,
    entrance_column: Option<usize>,
    exit_column: Option<usize>,
) -> Result<Grid, MazeError> {
    if rows == 0 || columns == 0 {
        return Err(MazeError::InvalidDimension { rows, columns });
    }
    if let Some(column) = entrance_column.filter(|&c| c >= columns) {
        return Err(MazeError::OutOfBounds { row: 0, column });
    }
    if let Some(column) = exit_column.filter(|&c| c >= columns) {
        return Err(MazeError::OutOfBounds {
            row: rows - 1,
            column,
        });
    }

    debug!("Generating a {rows}x{columns} maze");
    let mut grid = make_grid(rows, columns)?;
    let hunts = hunt_and_kill(&mut grid, rng)?;

    let entrance_column = entrance_column.unwrap_or_else(|| rng.gen_range(0..columns));
    let exit_column = exit_column.unwrap_or_else(|| rng.gen_range(0..columns));
    let entrance = Opening::entrance(entrance_column);
    let exit = Opening::exit(rows, exit_column);
    entrance.carve(&mut grid)?;
    exit.carve(&mut grid)?;

    debug!(
        "Generated a {rows}x{columns} maze after {hunts} hunts; entrance at column {}, exit at column {}",
        entrance.column, exit.column
    );
    Ok(grid)
}

/// Runs Hunt-and-Kill over a fully walled grid, returning how many hunts succeeded
///
/// Afterwards every cell is connected to every other by exactly one path.
pub fn hunt_and_kill<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R) -> Result<usize, MazeError> {
    let mut selected = (
        rng.gen_range(0..grid.rows()),
        rng.gen_range(0..grid.columns()),
    );
    let mut hunts = 0;

    loop {
        selected = walk(grid, rng, selected)?;
        match hunt(grid, rng)? {
            Some(cell) => {
                trace!(
                    "Walk stopped at {:?}; hunt resumed at {:?}",
                    selected,
                    cell
                );
                selected = cell;
                hunts += 1;
            }
            None => return Ok(hunts),
        }
    }
}

/// Neighbors of a cell, paired with the direction that leads to them
fn neighbors(grid: &Grid, row: usize, column: usize) -> Vec<(Direction, (usize, usize))> {
    Direction::get_all()
        .into_iter()
        .filter_map(|d| grid.neighbor(row, column, d).map(|n| (d, n)))
        .collect()
}

/// Carves into random unvisited neighbors until there are none, returning the last cell
fn walk<R: Rng + ?Sized>(
    grid: &mut Grid,
    rng: &mut R,
    mut selected: (usize, usize),
) -> Result<(usize, usize), MazeError> {
    loop {
        let unvisited: Vec<_> = neighbors(grid, selected.0, selected.1)
            .into_iter()
            .filter(|&(_, (row, column))| grid.is_unvisited(row, column))
            .collect();
        match unvisited.choose(rng) {
            Some(&(direction, next)) => {
                grid.remove_wall(selected.0, selected.1, direction)?;
                selected = next;
            }
            None => return Ok(selected),
        }
    }
}

/// Finds the first unvisited cell next to a visited one and connects the two
///
/// Returns `None` once no such cell exists.
fn hunt<R: Rng + ?Sized>(
    grid: &mut Grid,
    rng: &mut R,
) -> Result<Option<(usize, usize)>, MazeError> {
    for row in 0..grid.rows() {
        for column in 0..grid.columns() {
            if !grid.is_unvisited(row, column) {
                continue;
            }
            let visited: Vec<_> = neighbors(grid, row, column)
                .into_iter()
                .filter(|&(_, (n_row, n_column))| !grid.is_unvisited(n_row, n_column))
                .collect();
            if let Some(&(direction, _)) = visited.choose(rng) {
                grid.remove_wall(row, column, direction)?;
                return Ok(Some((row, column)));
            }
        }
    }
    Ok(None)
}
