//! Textual grid drawing: parser and its `Display` inverse.
//!
//! One line per row, cells separated by a single space (any whitespace run
//! is accepted on input). Blank lines are ignored. Markers are
//! case-insensitive on input and written uppercase:
//!
//! | marker  | meaning                                   |
//! |---------|-------------------------------------------|
//! | `.`     | empty cell                                |
//! | `#`     | obstacle                                  |
//! | `R`     | one resource unit                         |
//! | `R<n>`  | `n` resource units (`n >= 1`)             |
//! | `A`     | agent, cell holds no resources            |
//! | `A<n>`  | agent, cell holds `n` resource units      |
//!
//! ```text
//! A . R
//! . # R3
//! . . .
//! ```

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use super::cell::Cell;
use super::error::GridError;
use super::Grid;
use crate::types::Position;

const EMPTY: char = '.';
const OBSTACLE: char = '#';
const RESOURCE: char = 'R';
const AGENT: char = 'A';
const SEPARATOR: &str = " ";

/// Parses a grid drawing, returning the grid with its start cell set to the
/// agent marker's position.
///
/// # Errors
///
/// - [`GridError::Empty`] when there are no non-blank lines
/// - [`GridError::UnknownMarker`] / [`GridError::InvalidResourceCount`] on a bad token
/// - [`GridError::AgentCount`] unless exactly one agent marker is present
/// - [`GridError::InconsistentWidth`] when rows differ in length
pub fn parse_grid(text: &str) -> Result<Grid, GridError> {
    let mut rows = Vec::new();
    let mut agents = Vec::new();

    for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
        let row = rows.len();
        let mut cells = Vec::new();
        for (col, token) in line.split_whitespace().enumerate() {
            let (cell, is_agent) = parse_token(token, row, col)?;
            if is_agent {
                agents.push(Position::new(row, col));
            }
            cells.push(cell);
        }
        rows.push(cells);
    }

    if rows.is_empty() {
        return Err(GridError::Empty);
    }

    let start = match agents.as_slice() {
        [single] => *single,
        _ => {
            debug!(found = agents.len(), "rejecting grid with wrong agent count");
            return Err(GridError::AgentCount {
                found: agents.len(),
            });
        }
    };

    Grid::from_rows(rows, start)
}

fn parse_token(token: &str, row: usize, col: usize) -> Result<(Cell, bool), GridError> {
    let upper = token.to_ascii_uppercase();
    let mut chars = upper.chars();
    let marker = chars.next();
    let rest = chars.as_str();

    let unknown = || GridError::UnknownMarker {
        row,
        col,
        token: token.to_string(),
    };
    let count = |default: u32| -> Result<u32, GridError> {
        if rest.is_empty() {
            return Ok(default);
        }
        match rest.parse::<u32>() {
            Ok(n) if n > 0 => Ok(n),
            _ => Err(GridError::InvalidResourceCount {
                row,
                col,
                token: token.to_string(),
            }),
        }
    };

    match marker {
        Some(EMPTY) if rest.is_empty() => Ok((Cell::empty(), false)),
        Some(OBSTACLE) if rest.is_empty() => Ok((Cell::obstacle(), false)),
        Some(RESOURCE) => Ok((Cell::with_resources(count(1)?), false)),
        Some(AGENT) => Ok((Cell::with_resources(count(0)?), true)),
        _ => Err(unknown()),
    }
}

fn cell_token(cell: &Cell, has_agent: bool) -> String {
    let n = cell.resource_count();
    match (has_agent, cell.is_obstacle(), n) {
        (true, _, 0) => AGENT.to_string(),
        (true, _, n) => format!("{AGENT}{n}"),
        (false, true, _) => OBSTACLE.to_string(),
        (false, false, 0) => EMPTY.to_string(),
        (false, false, 1) => RESOURCE.to_string(),
        (false, false, n) => format!("{RESOURCE}{n}"),
    }
}

fn write_grid(f: &mut fmt::Formatter<'_>, grid: &Grid, agent: Position) -> fmt::Result {
    for row in 0..grid.height() {
        if row > 0 {
            writeln!(f)?;
        }
        for col in 0..grid.width() {
            if col > 0 {
                f.write_str(SEPARATOR)?;
            }
            let pos = Position::new(row, col);
            if let Some(cell) = grid.get(pos) {
                f.write_str(&cell_token(cell, pos == agent))?;
            }
        }
    }
    Ok(())
}

impl fmt::Display for Grid {
    /// Draws the grid with the agent marker on the start cell.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_grid(f, self, self.start())
    }
}

impl FromStr for Grid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_grid(s)
    }
}

struct AgentView<'a> {
    grid: &'a Grid,
    agent: Position,
}

impl fmt::Display for AgentView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_grid(f, self.grid, self.agent)
    }
}

/// Draws the grid with the agent marker at `agent` instead of the start cell.
///
/// This is the "updated grid" shown mid-game. Parsing it back yields a grid
/// whose start cell is `agent`.
pub fn render_with_agent(grid: &Grid, agent: Position) -> String {
    AgentView { grid, agent }.to_string()
}
