//! Tracks a player's path through a finished maze.
//!
//! Drawing and input handling live outside this crate; they talk to the maze only through
//! [`MazeView`].

use crate::codec::find_start_column;
use crate::error::MazeError;
use crate::grid::{Direction, Grid, WallMask};
use serde::{Deserialize, Serialize};

/// What a rendering layer needs from, and is told by, the maze logic
pub trait MazeView {
    /// Returns the [`WallMask`] at the given cell, or `None` if the cell is out of bounds
    fn cell_at(&self, row: usize, column: usize) -> Option<WallMask>;

    /// The cursor moved onto this cell
    fn on_enter(&mut self, _row: usize, _column: usize) {}

    /// The cursor backed out of this cell, so it is no longer part of the path
    fn on_abandon(&mut self, _row: usize, _column: usize) {}
}

impl MazeView for Grid {
    fn cell_at(&self, row: usize, column: usize) -> Option<WallMask> {
        Grid::cell_at(self, row, column)
    }
}

/// One recorded move: the cell it arrived at, and the direction it took
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Step {
    /// Row arrived at; -1 is the space above the entrance
    pub row: isize,
    /// Column arrived at
    pub column: isize,
    /// Direction of the move
    pub direction: Direction,
}

/// A position in or just outside of a maze, plus the path that led there
///
/// The cursor starts on row -1, just above the entrance, and has escaped once it reaches the
/// row just below the last one. Moving back along the last step shortens the path instead of
/// lengthening it.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Cursor {
    row: isize,
    column: isize,
    rows: usize,
    columns: usize,
    path: Vec<Step>,
}

impl Cursor {
    /// Creates a cursor above the given column of a `rows` by `columns` maze
    pub fn new(rows: usize, columns: usize, start_column: usize) -> Self {
        Self {
            row: -1,
            column: start_column as isize,
            rows,
            columns,
            path: vec![],
        }
    }

    /// Creates a cursor above the entrance of the given maze
    pub fn at_entrance(grid: &Grid) -> Result<Self, MazeError> {
        Ok(Self::new(
            grid.rows(),
            grid.columns(),
            find_start_column(grid)?,
        ))
    }

    /// Current `(row, column)`
    pub fn position(&self) -> (isize, isize) {
        (self.row, self.column)
    }

    /// Moves recorded so far, oldest first
    pub fn path(&self) -> &[Step] {
        &self.path
    }

    /// Whether the cursor has left through the bottom of the maze
    pub fn has_escaped(&self) -> bool {
        self.row == self.rows as isize
    }

    fn cell(&self) -> Option<(usize, usize)> {
        if self.row < 0
            || self.column < 0
            || self.row >= self.rows as isize
            || self.column >= self.columns as isize
        {
            return None;
        }
        Some((self.row as usize, self.column as usize))
    }

    /// Whether a move in the given direction is allowed by the walls
    ///
    /// Only the rows just above and below the maze may be left; every other move must stay
    /// inside the grid.
    pub fn allowed_to_move<V: MazeView + ?Sized>(&self, view: &V, direction: Direction) -> bool {
        let column = self.column + direction.offset().1;
        if column < 0 || column >= self.columns as isize {
            return false;
        }
        if self.row == -1 {
            return direction == Direction::Down;
        }
        if self.has_escaped() {
            return direction == Direction::Up;
        }
        // the mask describes walls, i.e. where the cursor can't go
        self.cell()
            .and_then(|(row, column)| view.cell_at(row, column))
            .is_some_and(|mask| mask & direction.mask() == 0)
    }

    /// Moves one cell if the walls allow it, telling the view which cells joined or left the path
    ///
    /// Returns whether the cursor moved.
    pub fn try_move<V: MazeView + ?Sized>(&mut self, view: &mut V, direction: Direction) -> bool {
        if !self.allowed_to_move(view, direction) {
            return false;
        }
        let (d_row, d_column) = direction.offset();
        self.row += d_row;
        self.column += d_column;

        let backtracking = self
            .path
            .last()
            .is_some_and(|last| last.direction.inverse() == direction);
        if backtracking {
            if let Some(abandoned) = self.path.pop() {
                if abandoned.row >= 0 && abandoned.row < self.rows as isize {
                    view.on_abandon(abandoned.row as usize, abandoned.column as usize);
                }
            }
        } else {
            self.path.push(Step {
                row: self.row,
                column: self.column,
                direction,
            });
        }

        if let Some((row, column)) = self.cell() {
            view.on_enter(row, column);
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::standard_grids::example_grid;
    use Direction::*;

    #[derive(Debug, Eq, PartialEq)]
    enum Event {
        Enter(usize, usize),
        Abandon(usize, usize),
    }

    struct RecordingView {
        grid: Grid,
        events: Vec<Event>,
    }

    impl MazeView for RecordingView {
        fn cell_at(&self, row: usize, column: usize) -> Option<WallMask> {
            self.grid.cell_at(row, column)
        }

        fn on_enter(&mut self, row: usize, column: usize) {
            self.events.push(Event::Enter(row, column));
        }

        fn on_abandon(&mut self, row: usize, column: usize) {
            self.events.push(Event::Abandon(row, column));
        }
    }

    fn example_view() -> RecordingView {
        RecordingView {
            grid: example_grid(),
            events: vec![],
        }
    }

    #[test]
    fn starts_above_entrance() {
        let cursor = Cursor::at_entrance(&example_grid()).unwrap();
        assert_eq!(cursor.position(), (-1, 1));
        assert!(cursor.path().is_empty());
        assert!(!cursor.has_escaped());
    }

    #[test]
    fn only_down_from_start() {
        let grid = example_grid();
        let cursor = Cursor::at_entrance(&grid).unwrap();
        assert!(cursor.allowed_to_move(&grid, Down));
        assert!(!cursor.allowed_to_move(&grid, Up));
        assert!(!cursor.allowed_to_move(&grid, Left));
        assert!(!cursor.allowed_to_move(&grid, Right));
    }

    #[test]
    fn walls_block_moves() {
        let mut view = example_view();
        let mut cursor = Cursor::at_entrance(&view.grid).unwrap();
        assert!(cursor.try_move(&mut view, Down));
        assert!(!cursor.try_move(&mut view, Right));
        assert_eq!(cursor.position(), (0, 1));
        assert_eq!(view.events, vec![Event::Enter(0, 1)]);
    }

    #[test]
    fn backtracking_abandons() {
        let mut view = example_view();
        let mut cursor = Cursor::at_entrance(&view.grid).unwrap();
        assert!(cursor.try_move(&mut view, Down));
        assert!(cursor.try_move(&mut view, Down));
        assert!(cursor.try_move(&mut view, Up));
        assert_eq!(
            view.events,
            vec![
                Event::Enter(0, 1),
                Event::Enter(1, 1),
                Event::Abandon(1, 1),
                Event::Enter(0, 1),
            ]
        );
        assert_eq!(cursor.path().len(), 1);
        assert_eq!(cursor.position(), (0, 1));
    }

    #[test]
    fn solves_example() {
        let mut view = example_view();
        let mut cursor = Cursor::at_entrance(&view.grid).unwrap();
        let moves = [
            Down, Down, Right, Up, Right, Down, Down, Left, Down, Left, Down, Down,
        ];
        for direction in moves {
            assert!(cursor.try_move(&mut view, direction), "{direction:?} blocked");
        }
        assert!(cursor.has_escaped());
        assert_eq!(cursor.position(), (5, 1));
        assert_eq!(cursor.path().len(), moves.len());
        // the last move leaves the grid, so it enters nothing
        assert_eq!(view.events.len(), moves.len() - 1);

        assert!(!cursor.allowed_to_move(&view.grid, Down));
        assert!(cursor.try_move(&mut view, Up));
        assert_eq!(cursor.path().len(), moves.len() - 1);
        assert_eq!(view.events.last(), Some(&Event::Enter(4, 1)));
    }

    #[test]
    fn leaving_through_entrance() {
        let mut view = example_view();
        let mut cursor = Cursor::at_entrance(&view.grid).unwrap();
        assert!(cursor.try_move(&mut view, Down));
        assert!(cursor.try_move(&mut view, Up));
        assert_eq!(cursor.position(), (-1, 1));
        assert!(cursor.path().is_empty());
        assert_eq!(view.events, vec![Event::Enter(0, 1), Event::Abandon(0, 1)]);
    }

    #[test]
    fn open_side_edge_stays_in_grid() {
        let mut view = RecordingView {
            grid: crate::codec::inflate("1").unwrap(),
            events: vec![],
        };
        let mut cursor = Cursor::at_entrance(&view.grid).unwrap();
        assert!(cursor.try_move(&mut view, Down));
        assert!(!cursor.allowed_to_move(&view.grid, Right));
        assert!(!cursor.try_move(&mut view, Right));
        assert_eq!(cursor.position(), (0, 0));
        assert_eq!(view.events, vec![Event::Enter(0, 0)]);
        assert!(cursor.try_move(&mut view, Down));
        assert!(cursor.has_escaped());
    }

    #[test]
    fn entrance_outside_grid_cannot_enter() {
        let grid = example_grid();
        let cursor = Cursor::new(grid.rows(), grid.columns(), 6);
        assert!(!cursor.allowed_to_move(&grid, Down));
    }

    #[test]
    fn closed_grid_has_no_entrance() {
        let grid = crate::grid::make_grid(2, 2).unwrap();
        assert_eq!(Cursor::at_entrance(&grid), Err(MazeError::NoOpeningFound));
    }
}
