//! Run-scoped configuration for the simulation engine.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::types::Topology;

/// Maximum number of actions executed per run.
pub const ACTION_BUDGET: usize = 20;

/// Configuration for one simulation run.
///
/// Passed explicitly to every engine and planner call so runs stay
/// independent of one another.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimulationConfig {
    /// Movement directions available to the agent.
    pub topology: Topology,
    /// Maximum units carried at once. `0` means unlimited.
    pub carry_limit: u32,
    /// Score deducted per executed action.
    pub cost_per_step: f64,
    /// Actions beyond this many are discarded before execution.
    pub action_budget: usize,
}

impl SimulationConfig {
    /// Carry limit sentinel meaning "no limit".
    pub const UNLIMITED: u32 = 0;

    pub fn new(topology: Topology, carry_limit: u32, cost_per_step: f64) -> Self {
        Self {
            topology,
            carry_limit,
            cost_per_step,
            action_budget: ACTION_BUDGET,
        }
    }

    pub fn with_topology(mut self, topology: Topology) -> Self {
        self.topology = topology;
        self
    }

    pub fn with_carry_limit(mut self, carry_limit: u32) -> Self {
        self.carry_limit = carry_limit;
        self
    }

    pub fn with_cost_per_step(mut self, cost_per_step: f64) -> Self {
        self.cost_per_step = cost_per_step;
        self
    }

    pub fn with_action_budget(mut self, action_budget: usize) -> Self {
        self.action_budget = action_budget;
        self
    }

    /// Carry limit with the `0` sentinel mapped to `u32::MAX`.
    pub fn effective_carry_limit(&self) -> u32 {
        if self.carry_limit == Self::UNLIMITED {
            u32::MAX
        } else {
            self.carry_limit
        }
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self::new(Topology::FourConnected, Self::UNLIMITED, 0.0)
    }
}
