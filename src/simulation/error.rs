use thiserror::Error;

use crate::grid::GridError;

/// Errors surfaced by the string-level entry points.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SimulationError {
    #[error("Malformed grid: {0}")]
    MalformedGrid(#[from] GridError),

    #[error("Invalid solution: action sequence is empty")]
    EmptyActions,
}
