//! Greedy nearest-resource planner.
//!
//! Runs a small phase machine over a private copy of the grid:
//!
//! - `Seeking`: walk to the nearest reachable resource (breadth-first
//!   distance, excluding the start cell) and TAKE one unit. At the carry
//!   limit, switch to `Returning`.
//! - `Returning`: walk back to the start cell and DROP, then seek again.
//! - `Done`: the budget is spent or no further progress is possible.
//!
//! A trip is only started if reaching the resource, taking it, walking home
//! and dropping all fit in the remaining budget. When a trip does not fit, or
//! nothing reachable is left, a loaded agent goes home first.

use tracing::debug;

use super::trait_::Planner;
use crate::action::Action;
use crate::agent::AgentState;
use crate::engine::{self, SimulationConfig};
use crate::grid::Grid;
use crate::pathfinding::GridGraph;
use crate::types::{Direction, Position};

/// Phase of the greedy planner's state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Seeking,
    Returning,
    Done,
}

/// Greedy baseline: repeatedly fetch the nearest resource and bring it home.
#[derive(Debug, Clone)]
pub struct GreedyPlanner {
    config: SimulationConfig,
}

/// Mutable planning state: the working grid copy, the simulated agent and
/// the plan so far.
struct Workspace<'a> {
    graph: GridGraph,
    grid: Grid,
    agent: AgentState,
    plan: Vec<Action>,
    config: &'a SimulationConfig,
}

impl Workspace<'_> {
    fn remaining(&self) -> usize {
        self.config.action_budget.saturating_sub(self.plan.len())
    }

    fn home(&self) -> Position {
        self.grid.start()
    }

    fn push(&mut self, action: Action) {
        engine::step(&mut self.grid, &mut self.agent, action, self.config);
        self.plan.push(action);
    }

    fn walk(&mut self, path: &[Direction]) {
        for &direction in path {
            self.push(Action::Move(direction));
        }
    }

    fn give_up(&self) -> Phase {
        if self.agent.is_carrying() {
            Phase::Returning
        } else {
            Phase::Done
        }
    }

    fn seek(&mut self) -> Phase {
        let home = self.home();
        let grid = &self.grid;
        let Some((target, _)) = self
            .graph
            .nearest(self.agent.position, |p| p != home && grid.resource_count(p) > 0)
        else {
            debug!(carried = self.agent.carried, "no reachable resource left");
            return self.give_up();
        };

        let outbound = self.graph.shortest_path(self.agent.position, target, 1);
        let inbound = self.graph.shortest_path(target, home, 1);
        let (Some(outbound), Some(inbound)) = (outbound, inbound) else {
            debug!(%target, "resource has no round trip home");
            return self.give_up();
        };

        let trip = outbound.len() + 1 + inbound.len() + 1;
        if trip > self.remaining() {
            debug!(%target, trip, remaining = self.remaining(), "trip exceeds budget");
            return self.give_up();
        }

        self.walk(&outbound);
        self.push(Action::Take);
        if self.agent.is_full(self.config.effective_carry_limit()) {
            Phase::Returning
        } else {
            Phase::Seeking
        }
    }

    fn return_home(&mut self) -> Phase {
        let Some(path) = self
            .graph
            .shortest_path(self.agent.position, self.home(), 1)
        else {
            debug!(position = %self.agent.position, "start cell unreachable");
            return Phase::Done;
        };
        if path.len() + 1 > self.remaining() {
            debug!(steps = path.len(), remaining = self.remaining(), "return trip exceeds budget");
            return Phase::Done;
        }
        self.walk(&path);
        self.push(Action::Drop);
        Phase::Seeking
    }
}

impl GreedyPlanner {
    pub fn new(config: SimulationConfig) -> Self {
        Self { config }
    }

    /// Plans from `agent` on `grid`, never exceeding the action budget.
    ///
    /// The start cell is `grid.start()`. `grid` itself is not modified.
    pub fn plan_for(&self, grid: &Grid, agent: &AgentState) -> Vec<Action> {
        let mut ws = Workspace {
            graph: GridGraph::build(grid, self.config.topology),
            grid: grid.clone(),
            agent: *agent,
            plan: Vec::new(),
            config: &self.config,
        };

        let mut phase = if ws.agent.is_full(self.config.effective_carry_limit()) {
            Phase::Returning
        } else {
            Phase::Seeking
        };

        while phase != Phase::Done {
            if ws.remaining() == 0 {
                break;
            }
            let next = match phase {
                Phase::Seeking => ws.seek(),
                Phase::Returning => ws.return_home(),
                Phase::Done => Phase::Done,
            };
            if next != phase {
                debug!(from = ?phase, to = ?next, planned = ws.plan.len(), "greedy phase change");
            }
            phase = next;
        }

        let mut plan = ws.plan;
        plan.truncate(self.config.action_budget);
        plan
    }
}

impl Planner for GreedyPlanner {
    fn plan(&mut self, grid: &Grid, agent: &AgentState) -> Vec<Action> {
        self.plan_for(grid, agent)
    }

    fn name(&self) -> &str {
        "greedy"
    }
}
