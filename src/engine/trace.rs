//! Execution trace: what the interpreter rejected or skipped.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::types::{Direction, Position};

/// Why a move was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum BlockReason {
    OutOfBounds,
    Obstacle,
}

impl fmt::Display for BlockReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlockReason::OutOfBounds => write!(f, "out of bounds"),
            BlockReason::Obstacle => write!(f, "obstacle"),
        }
    }
}

/// A geometrically invalid move attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct InvalidMove {
    /// Zero-based index of the action in the (truncated) sequence.
    pub step: usize,
    pub direction: Direction,
    /// Where the agent stood, and still stands.
    pub from: Position,
    pub reason: BlockReason,
}

/// A token outside the active vocabulary.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SkippedToken {
    pub step: usize,
    pub token: String,
}

/// Summary of one call to [`execute`](super::execute).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ExecutionReport {
    /// Actions consumed after truncation, including skipped tokens.
    pub executed: usize,
    /// Actions discarded by truncation.
    pub truncated: usize,
    pub invalid_moves: Vec<InvalidMove>,
    pub skipped: Vec<SkippedToken>,
}

impl ExecutionReport {
    /// True if any move was rejected.
    pub fn invalid_move_occurred(&self) -> bool {
        !self.invalid_moves.is_empty()
    }
}
