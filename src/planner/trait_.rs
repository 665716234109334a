//! Planner trait.

use crate::action::Action;
use crate::agent::AgentState;
use crate::grid::Grid;

/// Produces an action sequence for an agent on a grid.
///
/// Planners never touch the caller's grid; the returned sequence is meant to
/// be run through [`execute_actions`](crate::engine::execute_actions) like
/// any externally supplied solution.
pub trait Planner {
    /// Plans a sequence of actions starting from `agent` on `grid`.
    fn plan(&mut self, grid: &Grid, agent: &AgentState) -> Vec<Action>;

    /// Returns a human-readable name for this planner.
    fn name(&self) -> &str;
}
