//! Grid and cell model, plus the textual drawing format.
//!
//! A [`Grid`] is a fixed `height × width` array of [`Cell`]s that also
//! remembers the agent's start cell. Its shape never changes after
//! construction; cell contents change only through the engine's TAKE and
//! DROP handling.
//!
//! The text format is documented in [`parse`].

mod cell;
mod error;
pub mod parse;

pub use cell::Cell;
pub use error::GridError;
pub use parse::{parse_grid, render_with_agent};

use crate::types::Position;

/// Rectangular grid of cells with a recorded start cell.
///
/// # Invariants
///
/// - `cells.len() == height * width`, both non-zero
/// - `start` is in bounds and not an obstacle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Cell>,
    height: usize,
    width: usize,
    start: Position,
}

impl Grid {
    /// Builds a grid from row-major rows of cells.
    ///
    /// # Errors
    ///
    /// - [`GridError::Empty`] if there are no rows or the first row is empty
    /// - [`GridError::InconsistentWidth`] if any row differs in length from the first
    /// - [`GridError::InvalidStart`] if `start` is out of bounds or an obstacle
    pub fn from_rows(rows: Vec<Vec<Cell>>, start: Position) -> Result<Self, GridError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if height == 0 || width == 0 {
            return Err(GridError::Empty);
        }

        let mut cells = Vec::with_capacity(height * width);
        for (row, cells_in_row) in rows.into_iter().enumerate() {
            if cells_in_row.len() != width {
                return Err(GridError::InconsistentWidth {
                    row,
                    expected: width,
                    found: cells_in_row.len(),
                });
            }
            cells.extend(cells_in_row);
        }

        let grid = Self {
            cells,
            height,
            width,
            start,
        };
        grid.validate_start(start)?;
        Ok(grid)
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// The recorded start cell (the scoring "home").
    pub fn start(&self) -> Position {
        self.start
    }

    /// Moves the recorded start cell.
    ///
    /// # Errors
    ///
    /// [`GridError::InvalidStart`] if `start` is out of bounds or an obstacle.
    pub fn set_start(&mut self, start: Position) -> Result<(), GridError> {
        self.validate_start(start)?;
        self.start = start;
        Ok(())
    }

    fn validate_start(&self, start: Position) -> Result<(), GridError> {
        if self.is_traversable(start) {
            Ok(())
        } else {
            Err(GridError::InvalidStart { position: start })
        }
    }

    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.row < self.height && pos.col < self.width
    }

    /// True if `pos` is in bounds and not an obstacle.
    pub fn is_traversable(&self, pos: Position) -> bool {
        self.get(pos).is_some_and(|c| !c.is_obstacle())
    }

    fn index(&self, pos: Position) -> Option<usize> {
        self.in_bounds(pos).then(|| pos.row * self.width + pos.col)
    }

    /// Bounds-checked cell access.
    pub fn get(&self, pos: Position) -> Option<&Cell> {
        self.index(pos).map(|i| &self.cells[i])
    }

    /// Bounds-checked mutable cell access.
    pub fn get_mut(&mut self, pos: Position) -> Option<&mut Cell> {
        match self.index(pos) {
            Some(i) => Some(&mut self.cells[i]),
            None => None,
        }
    }

    /// Resource units resting at `pos` (0 when out of bounds).
    pub fn resource_count(&self, pos: Position) -> u32 {
        self.get(pos).map_or(0, Cell::resource_count)
    }

    /// Sum of resource units over every cell.
    pub fn total_resources(&self) -> u64 {
        self.cells
            .iter()
            .map(|c| u64::from(c.resource_count()))
            .sum()
    }

    /// Iterates over all positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.height).flat_map(move |row| (0..self.width).map(move |col| Position::new(row, col)))
    }

    /// Iterates over cells with their positions in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, &Cell)> + '_ {
        self.positions().zip(self.cells.iter())
    }

    /// Positions of every cell currently holding resources, row-major.
    pub fn resource_positions(&self) -> Vec<Position> {
        self.iter()
            .filter(|(_, c)| c.has_resources())
            .map(|(p, _)| p)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_grid() -> Grid {
        Grid::from_rows(
            vec![
                vec![Cell::empty(), Cell::with_resources(2)],
                vec![Cell::obstacle(), Cell::empty()],
            ],
            Position::new(0, 0),
        )
        .unwrap()
    }

    #[test]
    fn accessors_are_bounds_checked() {
        let grid = small_grid();
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.width(), 2);
        assert!(grid.get(Position::new(2, 0)).is_none());
        assert!(grid.get(Position::new(0, 2)).is_none());
        assert_eq!(grid.resource_count(Position::new(0, 1)), 2);
        assert_eq!(grid.resource_count(Position::new(9, 9)), 0);
    }

    #[test]
    fn obstacles_are_not_traversable() {
        let grid = small_grid();
        assert!(!grid.is_traversable(Position::new(1, 0)));
        assert!(grid.is_traversable(Position::new(1, 1)));
        assert!(!grid.is_traversable(Position::new(5, 5)));
    }

    #[test]
    fn ragged_rows_are_rejected() {
        let err = Grid::from_rows(
            vec![vec![Cell::empty(), Cell::empty()], vec![Cell::empty()]],
            Position::new(0, 0),
        )
        .unwrap_err();
        assert_eq!(
            err,
            GridError::InconsistentWidth {
                row: 1,
                expected: 2,
                found: 1
            }
        );
    }

    #[test]
    fn empty_rows_are_rejected() {
        assert_eq!(
            Grid::from_rows(vec![], Position::new(0, 0)).unwrap_err(),
            GridError::Empty
        );
    }

    #[test]
    fn start_on_obstacle_is_rejected() {
        let mut grid = small_grid();
        let err = grid.set_start(Position::new(1, 0)).unwrap_err();
        assert_eq!(
            err,
            GridError::InvalidStart {
                position: Position::new(1, 0)
            }
        );
        assert_eq!(grid.start(), Position::new(0, 0));
    }

    #[test]
    fn resource_positions_row_major() {
        let grid = small_grid();
        assert_eq!(grid.resource_positions(), vec![Position::new(0, 1)]);
        assert_eq!(grid.total_resources(), 2);
    }
}
