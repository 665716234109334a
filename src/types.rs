//! Core spatial types shared by the grid, the engine and the planners.
//!
//! Rows grow downward and columns grow to the right, so `(0, 0)` is the
//! top-left cell and `UP` decreases the row index.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A cell coordinate on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    /// Creates a new position.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Manhattan distance to another position.
    pub fn manhattan_distance(&self, other: &Position) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// Returns the neighbouring position in `direction`.
    ///
    /// Returns `None` when the step would leave the non-negative quadrant.
    /// Upper bounds are the grid's concern, not the position's.
    pub fn step(&self, direction: Direction) -> Option<Position> {
        let (dr, dc) = direction.offset();
        let row = self.row.checked_add_signed(dr)?;
        let col = self.col.checked_add_signed(dc)?;
        Some(Position { row, col })
    }

    /// Returns the direction leading from `self` to an adjacent `other`.
    pub fn direction_to(&self, other: &Position) -> Option<Direction> {
        Direction::ALL
            .into_iter()
            .find(|d| self.step(*d) == Some(*other))
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A movement direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    UpLeft,
    UpRight,
    DownLeft,
    DownRight,
}

impl Direction {
    /// The four orthogonal directions.
    pub const ORTHOGONAL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// The four diagonal directions.
    pub const DIAGONAL: [Direction; 4] = [
        Direction::UpLeft,
        Direction::UpRight,
        Direction::DownLeft,
        Direction::DownRight,
    ];

    /// All eight directions, orthogonal first.
    pub const ALL: [Direction; 8] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
        Direction::UpLeft,
        Direction::UpRight,
        Direction::DownLeft,
        Direction::DownRight,
    ];

    /// `(row, col)` offset of one step in this direction.
    pub fn offset(&self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
            Direction::UpLeft => (-1, -1),
            Direction::UpRight => (-1, 1),
            Direction::DownLeft => (1, -1),
            Direction::DownRight => (1, 1),
        }
    }

    pub fn is_diagonal(&self) -> bool {
        Self::DIAGONAL.contains(self)
    }

    /// Canonical uppercase token for this direction.
    pub fn token(&self) -> &'static str {
        match self {
            Direction::Up => "UP",
            Direction::Down => "DOWN",
            Direction::Left => "LEFT",
            Direction::Right => "RIGHT",
            Direction::UpLeft => "UPLEFT",
            Direction::UpRight => "UPRIGHT",
            Direction::DownLeft => "DOWNLEFT",
            Direction::DownRight => "DOWNRIGHT",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Movement topology: which directions the agent may move in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Topology {
    /// Orthogonal moves only.
    #[default]
    FourConnected,
    /// Orthogonal and diagonal moves.
    EightConnected,
}

impl Topology {
    /// Directions legal under this topology.
    pub fn directions(&self) -> &'static [Direction] {
        match self {
            Topology::FourConnected => &Direction::ORTHOGONAL,
            Topology::EightConnected => &Direction::ALL,
        }
    }

    pub fn allows(&self, direction: Direction) -> bool {
        match self {
            Topology::FourConnected => !direction.is_diagonal(),
            Topology::EightConnected => true,
        }
    }
}

impl fmt::Display for Topology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Topology::FourConnected => write!(f, "4-connected"),
            Topology::EightConnected => write!(f, "8-connected"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manhattan_distance_is_symmetric() {
        let a = Position::new(0, 3);
        let b = Position::new(2, 1);
        assert_eq!(a.manhattan_distance(&b), 4);
        assert_eq!(b.manhattan_distance(&a), 4);
    }

    #[test]
    fn step_off_the_top_left_is_none() {
        let origin = Position::new(0, 0);
        assert_eq!(origin.step(Direction::Up), None);
        assert_eq!(origin.step(Direction::Left), None);
        assert_eq!(origin.step(Direction::UpRight), None);
        assert_eq!(origin.step(Direction::DownRight), Some(Position::new(1, 1)));
    }

    #[test]
    fn direction_to_adjacent_cell() {
        let p = Position::new(2, 2);
        assert_eq!(p.direction_to(&Position::new(1, 2)), Some(Direction::Up));
        assert_eq!(p.direction_to(&Position::new(3, 1)), Some(Direction::DownLeft));
        assert_eq!(p.direction_to(&Position::new(4, 2)), None);
    }

    #[test]
    fn four_connected_excludes_diagonals() {
        let topo = Topology::FourConnected;
        assert_eq!(topo.directions().len(), 4);
        assert!(!topo.allows(Direction::UpLeft));
        assert!(topo.allows(Direction::Down));
        assert_eq!(Topology::EightConnected.directions().len(), 8);
    }
}
