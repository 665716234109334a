use thiserror::Error;

use crate::types::Position;

/// Errors raised while building a grid from its textual drawing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("Grid text contains no cells")]
    Empty,

    #[error("Expected exactly one agent marker, found {found}")]
    AgentCount { found: usize },

    #[error("Row {row} has {found} cells, expected {expected}")]
    InconsistentWidth {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("Unknown cell marker {token:?} at row {row}, column {col}")]
    UnknownMarker {
        row: usize,
        col: usize,
        token: String,
    },

    #[error("Invalid resource count {token:?} at row {row}, column {col}")]
    InvalidResourceCount {
        row: usize,
        col: usize,
        token: String,
    },

    #[error("Start cell {position} is outside the grid or on an obstacle")]
    InvalidStart { position: Position },
}
