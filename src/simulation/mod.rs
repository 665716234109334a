//! String-level entry points used by benchmark drivers and graders.
//!
//! Grids arrive as text and actions as string tokens. The agent marker in the
//! grid text is where the agent currently stands; `start_position` is the
//! home cell used for scoring. For a fresh puzzle the two coincide. For a
//! mid-game "updated grid" they may not.

mod error;

pub use error::SimulationError;

use tracing::debug;

use crate::action::to_tokens;
use crate::agent::AgentState;
use crate::engine::{execute, ExecutionReport, SimulationConfig};
use crate::grid::{parse_grid, render_with_agent, Grid};
use crate::planner::{GreedyPlanner, RandomPlanner};
use crate::scoring::{evaluate, Outcome};
use crate::types::{Position, Topology};

/// Full result of a simulated run.
#[derive(Debug, Clone)]
pub struct RunResult {
    pub outcome: Outcome,
    pub report: ExecutionReport,
    /// Grid after execution, start cell unchanged.
    pub grid: Grid,
    /// Agent after execution.
    pub agent: AgentState,
}

impl RunResult {
    /// The post-run grid drawn with the agent at its final position.
    pub fn updated_grid(&self) -> String {
        render_with_agent(&self.grid, self.agent.position)
    }
}

/// Parses `grid_text` and pins its start cell to `start_position`.
///
/// The agent is placed on the grid's agent marker.
pub fn prepare(
    grid_text: &str,
    start_position: Position,
) -> Result<(Grid, AgentState), SimulationError> {
    let mut grid = parse_grid(grid_text)?;
    let agent = AgentState::at_start(&grid);
    grid.set_start(start_position)?;
    Ok((grid, agent))
}

/// Executes `actions` on `grid_text` and returns the full result.
///
/// # Errors
///
/// - [`SimulationError::MalformedGrid`] if the grid text does not parse or
///   `start_position` is not a traversable cell
/// - [`SimulationError::EmptyActions`] if `actions` is empty
pub fn simulate<S: AsRef<str>>(
    grid_text: &str,
    start_position: Position,
    actions: &[S],
    config: &SimulationConfig,
) -> Result<RunResult, SimulationError> {
    if actions.is_empty() {
        return Err(SimulationError::EmptyActions);
    }
    let (mut grid, mut agent) = prepare(grid_text, start_position)?;
    let report = execute(&mut grid, &mut agent, actions, config);
    let outcome = evaluate(&grid, &agent, &report, config.cost_per_step);
    Ok(RunResult {
        outcome,
        report,
        grid,
        agent,
    })
}

/// Executes `actions` and grades the result.
///
/// `config.carry_limit == 0` means unlimited capacity.
pub fn run<S: AsRef<str>>(
    grid_text: &str,
    start_position: Position,
    actions: &[S],
    config: &SimulationConfig,
) -> Result<Outcome, SimulationError> {
    simulate(grid_text, start_position, actions, config).map(|r| r.outcome)
}

/// Greedy baseline plan as string tokens.
///
/// Uses `config.topology`, `config.carry_limit` and `config.action_budget`.
pub fn plan_greedy(
    grid_text: &str,
    start_position: Position,
    config: &SimulationConfig,
) -> Result<Vec<String>, SimulationError> {
    let (grid, agent) = prepare(grid_text, start_position)?;
    let actions = GreedyPlanner::new(*config).plan_for(&grid, &agent);
    debug!(actions = actions.len(), "greedy plan ready");
    Ok(to_tokens(&actions))
}

/// Random baseline plan of exactly `count` tokens, reproducible by seed.
///
/// The grid is validated but otherwise ignored.
pub fn plan_random(
    grid_text: &str,
    start_position: Position,
    topology: Topology,
    count: usize,
    rng_seed: u64,
) -> Result<Vec<String>, SimulationError> {
    prepare(grid_text, start_position)?;
    let actions = RandomPlanner::seeded(topology, count, rng_seed).generate();
    Ok(to_tokens(&actions))
}
