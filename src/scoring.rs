//! Outcome evaluation for a finished run.
//!
//! Only resources resting in the start cell count. Anything still carried by
//! the agent at the end of the run is worth nothing.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::agent::AgentState;
use crate::engine::ExecutionReport;
use crate::grid::Grid;

/// Externally visible result of a run.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Outcome {
    /// Resources in the start cell minus step costs. May be negative.
    pub score: f64,
    /// Whether the agent ended on the start cell.
    pub returned_to_start: bool,
    /// Whether any move was rejected during the run.
    pub invalid_move: bool,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "score={:.2} returned={} invalid_move={}",
            self.score, self.returned_to_start, self.invalid_move
        )
    }
}

/// `resource_count(start) - cost_per_step × actions_executed`.
pub fn score(grid: &Grid, actions_executed: usize, cost_per_step: f64) -> f64 {
    f64::from(grid.resource_count(grid.start())) - cost_per_step * actions_executed as f64
}

/// Grades the post-execution state.
pub fn evaluate(
    grid: &Grid,
    agent: &AgentState,
    report: &ExecutionReport,
    cost_per_step: f64,
) -> Outcome {
    let outcome = Outcome {
        score: score(grid, report.executed, cost_per_step),
        returned_to_start: agent.position == grid.start(),
        invalid_move: report.invalid_move_occurred(),
    };
    debug!(
        score = outcome.score,
        returned_to_start = outcome.returned_to_start,
        invalid_move = outcome.invalid_move,
        executed = report.executed,
        "run evaluated"
    );
    outcome
}
