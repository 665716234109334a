//! Agent state for a single simulation run.

use crate::grid::Grid;
use crate::types::Position;

/// Position and carried load of the agent.
///
/// The carry limit is run configuration, not agent state; see
/// [`SimulationConfig`](crate::engine::SimulationConfig).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgentState {
    /// Current cell.
    pub position: Position,
    /// Resource units currently held.
    pub carried: u32,
}

impl AgentState {
    /// Creates an agent at `position` carrying nothing.
    pub fn new(position: Position) -> Self {
        Self {
            position,
            carried: 0,
        }
    }

    /// Creates an agent on the grid's start cell.
    pub fn at_start(grid: &Grid) -> Self {
        Self::new(grid.start())
    }

    pub fn is_carrying(&self) -> bool {
        self.carried > 0
    }

    /// True when no more units can be taken under `carry_limit`.
    pub fn is_full(&self, carry_limit: u32) -> bool {
        self.carried >= carry_limit
    }
}

/// Resource mass in the system: every cell plus the agent's load.
///
/// The engine keeps this constant across a run.
pub fn total_resources(grid: &Grid, agent: &AgentState) -> u64 {
    grid.total_resources() + u64::from(agent.carried)
}
