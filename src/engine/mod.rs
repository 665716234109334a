//! Action interpreter / state-transition engine.
//!
//! Applies an action sequence to a grid and agent owned by the caller:
//!
//! 1. Truncate the sequence to `config.action_budget` actions.
//! 2. Parse each token against the topology; unsupported tokens are skipped.
//! 3. Apply each action in order. Rejected moves leave the agent in place
//!    and are recorded, but never stop the run.
//!
//! # TAKE semantics
//!
//! A TAKE moves exactly one unit from the current cell to the agent, and only
//! while `carried < carry_limit`. On an empty cell or with a full load it is a
//! no-op. DROP moves the whole load onto the current cell. Neither changes the
//! total resource mass.

mod config;
mod trace;

pub use config::{SimulationConfig, ACTION_BUDGET};
pub use trace::{BlockReason, ExecutionReport, InvalidMove, SkippedToken};

use tracing::{debug, trace};

use crate::action::Action;
use crate::agent::AgentState;
use crate::grid::Grid;

/// Units moved by a single TAKE.
pub const TAKE_UNIT: u32 = 1;

/// Effect of a single applied action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    Moved,
    Blocked(BlockReason),
    /// Units taken; `0` when the cell was empty or the load was full.
    Took(u32),
    /// Units dropped; `0` when nothing was carried.
    Dropped(u32),
}

/// Applies one action to the grid and agent.
pub fn step(
    grid: &mut Grid,
    agent: &mut AgentState,
    action: Action,
    config: &SimulationConfig,
) -> StepOutcome {
    match action {
        Action::Move(direction) => {
            let target = agent.position.step(direction);
            match target {
                Some(t) if grid.is_traversable(t) => {
                    agent.position = t;
                    StepOutcome::Moved
                }
                Some(t) if grid.in_bounds(t) => StepOutcome::Blocked(BlockReason::Obstacle),
                _ => StepOutcome::Blocked(BlockReason::OutOfBounds),
            }
        }
        Action::Take => {
            if agent.is_full(config.effective_carry_limit()) {
                return StepOutcome::Took(0);
            }
            let taken = grid
                .get_mut(agent.position)
                .map_or(0, |cell| cell.withdraw(TAKE_UNIT));
            agent.carried += taken;
            StepOutcome::Took(taken)
        }
        Action::Drop => {
            let load = agent.carried;
            if load == 0 {
                return StepOutcome::Dropped(0);
            }
            // A refused deposit keeps the load on the agent.
            if let Some(cell) = grid.get_mut(agent.position) {
                if cell.deposit(load) {
                    agent.carried = 0;
                    return StepOutcome::Dropped(load);
                }
            }
            StepOutcome::Dropped(0)
        }
    }
}

/// Executes raw string tokens.
///
/// Only the first `config.action_budget` tokens are considered. Tokens that do
/// not name an action supported by `config.topology` are skipped and listed in
/// [`ExecutionReport::skipped`].
pub fn execute<S: AsRef<str>>(
    grid: &mut Grid,
    agent: &mut AgentState,
    actions: &[S],
    config: &SimulationConfig,
) -> ExecutionReport {
    let parsed = actions.iter().map(|token| {
        let token = token.as_ref();
        Action::parse(token, config.topology).ok_or(token)
    });
    run(grid, agent, parsed, actions.len(), config)
}

/// Executes already-parsed actions under the same rules as [`execute`].
///
/// Moves the topology does not support are skipped, just as their tokens
/// would be.
pub fn execute_actions(
    grid: &mut Grid,
    agent: &mut AgentState,
    actions: &[Action],
    config: &SimulationConfig,
) -> ExecutionReport {
    let tokens: Vec<String> = actions.iter().map(ToString::to_string).collect();
    let parsed = actions
        .iter()
        .zip(tokens.iter())
        .map(|(action, token)| {
            if action.is_supported(config.topology) {
                Ok(*action)
            } else {
                Err(token.as_str())
            }
        });
    run(grid, agent, parsed, actions.len(), config)
}

fn run<'a>(
    grid: &mut Grid,
    agent: &mut AgentState,
    parsed: impl Iterator<Item = Result<Action, &'a str>>,
    total: usize,
    config: &SimulationConfig,
) -> ExecutionReport {
    let executed = total.min(config.action_budget);
    let mut report = ExecutionReport {
        executed,
        truncated: total - executed,
        ..ExecutionReport::default()
    };
    if report.truncated > 0 {
        debug!(
            discarded = report.truncated,
            budget = config.action_budget,
            "truncating action sequence"
        );
    }

    for (index, item) in parsed.take(executed).enumerate() {
        let action = match item {
            Ok(action) => action,
            Err(token) => {
                trace!(step = index, token, "skipping unsupported token");
                report.skipped.push(SkippedToken {
                    step: index,
                    token: token.to_string(),
                });
                continue;
            }
        };

        let from = agent.position;
        let outcome = step(grid, agent, action, config);
        trace!(step = index, %action, ?outcome, position = %agent.position, carried = agent.carried);

        if let (Action::Move(direction), StepOutcome::Blocked(reason)) = (action, outcome) {
            debug!(step = index, %direction, %from, %reason, "invalid move");
            report.invalid_moves.push(InvalidMove {
                step: index,
                direction,
                from,
                reason,
            });
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::total_resources;
    use crate::grid::parse_grid;
    use crate::types::{Direction, Position, Topology};

    fn setup(text: &str) -> (Grid, AgentState) {
        let grid = parse_grid(text).unwrap();
        let agent = AgentState::at_start(&grid);
        (grid, agent)
    }

    #[test]
    fn move_into_bounds_updates_position() {
        let (mut grid, mut agent) = setup("A .\n. .");
        let cfg = SimulationConfig::default();
        let outcome = step(&mut grid, &mut agent, Action::Move(Direction::Right), &cfg);
        assert_eq!(outcome, StepOutcome::Moved);
        assert_eq!(agent.position, Position::new(0, 1));
    }

    #[test]
    fn move_off_grid_is_blocked() {
        let (mut grid, mut agent) = setup("A .\n. .");
        let cfg = SimulationConfig::default();
        let outcome = step(&mut grid, &mut agent, Action::Move(Direction::Up), &cfg);
        assert_eq!(outcome, StepOutcome::Blocked(BlockReason::OutOfBounds));
        assert_eq!(agent.position, Position::new(0, 0));
    }

    #[test]
    fn move_past_far_edge_is_blocked() {
        let (mut grid, mut agent) = setup(". A");
        let cfg = SimulationConfig::default();
        let outcome = step(&mut grid, &mut agent, Action::Move(Direction::Right), &cfg);
        assert_eq!(outcome, StepOutcome::Blocked(BlockReason::OutOfBounds));
    }

    #[test]
    fn move_into_obstacle_is_blocked() {
        let (mut grid, mut agent) = setup("A #");
        let cfg = SimulationConfig::default();
        let outcome = step(&mut grid, &mut agent, Action::Move(Direction::Right), &cfg);
        assert_eq!(outcome, StepOutcome::Blocked(BlockReason::Obstacle));
        assert_eq!(agent.position, Position::new(0, 0));
    }

    #[test]
    fn take_moves_one_unit() {
        let (mut grid, mut agent) = setup("A3 .");
        let cfg = SimulationConfig::default();
        assert_eq!(step(&mut grid, &mut agent, Action::Take, &cfg), StepOutcome::Took(1));
        assert_eq!(agent.carried, 1);
        assert_eq!(grid.resource_count(agent.position), 2);
    }

    #[test]
    fn take_on_empty_cell_is_noop() {
        let (mut grid, mut agent) = setup("A R");
        let cfg = SimulationConfig::default();
        assert_eq!(step(&mut grid, &mut agent, Action::Take, &cfg), StepOutcome::Took(0));
        assert_eq!(agent.carried, 0);
    }

    #[test]
    fn take_respects_carry_limit() {
        let (mut grid, mut agent) = setup("A2 .");
        let cfg = SimulationConfig::default().with_carry_limit(1);
        step(&mut grid, &mut agent, Action::Take, &cfg);
        assert_eq!(step(&mut grid, &mut agent, Action::Take, &cfg), StepOutcome::Took(0));
        assert_eq!(agent.carried, 1);
        assert_eq!(grid.resource_count(agent.position), 1);
    }

    #[test]
    fn drop_empties_load_onto_cell() {
        let (mut grid, mut agent) = setup("A R");
        agent.carried = 4;
        let cfg = SimulationConfig::default();
        assert_eq!(step(&mut grid, &mut agent, Action::Drop, &cfg), StepOutcome::Dropped(4));
        assert_eq!(agent.carried, 0);
        assert_eq!(grid.resource_count(agent.position), 4);
    }

    #[test]
    fn drop_with_nothing_carried_is_noop() {
        let (mut grid, mut agent) = setup("A R");
        let cfg = SimulationConfig::default();
        assert_eq!(step(&mut grid, &mut agent, Action::Drop, &cfg), StepOutcome::Dropped(0));
        assert_eq!(grid.total_resources(), 1);
    }

    #[test]
    fn execute_flags_invalid_moves_and_continues() {
        let (mut grid, mut agent) = setup("A R\n. .");
        let cfg = SimulationConfig::default();
        let report = execute(&mut grid, &mut agent, &["UP", "RIGHT", "TAKE"], &cfg);
        assert!(report.invalid_move_occurred());
        assert_eq!(report.invalid_moves.len(), 1);
        assert_eq!(report.invalid_moves[0].step, 0);
        assert_eq!(report.invalid_moves[0].reason, BlockReason::OutOfBounds);
        assert_eq!(agent.position, Position::new(0, 1));
        assert_eq!(agent.carried, 1);
    }

    #[test]
    fn unsupported_tokens_are_skipped_without_flag() {
        let (mut grid, mut agent) = setup(". .\n. A");
        let cfg = SimulationConfig::default();
        let report = execute(&mut grid, &mut agent, &["upleft", "dance", "up"], &cfg);
        assert!(!report.invalid_move_occurred());
        assert_eq!(report.skipped.len(), 2);
        assert_eq!(report.skipped[0].token, "upleft");
        assert_eq!(report.skipped[1].step, 1);
        assert_eq!(agent.position, Position::new(0, 1));
        assert_eq!(report.executed, 3);
    }

    #[test]
    fn diagonal_moves_under_eight_connected() {
        let (mut grid, mut agent) = setup(". .\n. A");
        let cfg = SimulationConfig::default().with_topology(Topology::EightConnected);
        let report = execute(&mut grid, &mut agent, &["UPLEFT"], &cfg);
        assert!(report.skipped.is_empty());
        assert_eq!(agent.position, Position::new(0, 0));
    }

    #[test]
    fn execute_truncates_to_budget() {
        let (mut grid, mut agent) = setup("A . . . .");
        let cfg = SimulationConfig::default().with_action_budget(2);
        let report = execute(&mut grid, &mut agent, &["RIGHT", "RIGHT", "RIGHT"], &cfg);
        assert_eq!(report.executed, 2);
        assert_eq!(report.truncated, 1);
        assert_eq!(agent.position, Position::new(0, 2));
    }

    #[test]
    fn execute_actions_skips_unsupported_diagonals() {
        let (mut grid, mut agent) = setup(". .\n. A");
        let cfg = SimulationConfig::default();
        let report = execute_actions(
            &mut grid,
            &mut agent,
            &[Action::Move(Direction::UpLeft), Action::Move(Direction::Left)],
            &cfg,
        );
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(report.skipped[0].token, "UPLEFT");
        assert_eq!(agent.position, Position::new(1, 0));
    }

    #[test]
    fn mass_is_conserved_across_mixed_actions() {
        let (mut grid, mut agent) = setup("A R2 #\nR . R");
        let before = total_resources(&grid, &agent);
        let cfg = SimulationConfig::default().with_carry_limit(2);
        execute(
            &mut grid,
            &mut agent,
            &[
                "RIGHT", "TAKE", "TAKE", "TAKE", "RIGHT", "DOWN", "TAKE", "LEFT", "DROP", "LEFT",
                "TAKE", "UP", "DROP",
            ],
            &cfg,
        );
        assert_eq!(total_resources(&grid, &agent), before);
    }

    #[test]
    fn drop_onto_saturated_cell_keeps_load() {
        let (mut grid, mut agent) = setup("A4294967295 R");
        let before = total_resources(&grid, &agent);
        let cfg = SimulationConfig::default();
        let report = execute(&mut grid, &mut agent, &["RIGHT", "TAKE", "LEFT", "DROP"], &cfg);
        assert!(!report.invalid_move_occurred());
        assert_eq!(agent.carried, 1);
        assert_eq!(grid.resource_count(Position::new(0, 0)), u32::MAX);
        assert_eq!(total_resources(&grid, &agent), before);
    }

    #[test]
    fn diagonal_off_grid_is_flagged() {
        let (mut grid, mut agent) = setup("A .\n. .");
        let cfg = SimulationConfig::default().with_topology(Topology::EightConnected);
        let report = execute(&mut grid, &mut agent, &["UPLEFT", "DOWNLEFT"], &cfg);
        assert!(report.invalid_move_occurred());
        assert_eq!(report.invalid_moves.len(), 2);
        assert_eq!(report.invalid_moves[0].direction, Direction::UpLeft);
        assert_eq!(report.invalid_moves[0].reason, BlockReason::OutOfBounds);
        assert_eq!(agent.position, Position::new(0, 0));
    }

    #[test]
    fn diagonal_into_obstacle_is_flagged() {
        let (mut grid, mut agent) = setup("A .\n. #");
        let cfg = SimulationConfig::default().with_topology(Topology::EightConnected);
        let outcome = step(&mut grid, &mut agent, Action::Move(Direction::DownRight), &cfg);
        assert_eq!(outcome, StepOutcome::Blocked(BlockReason::Obstacle));
        let report = execute(&mut grid, &mut agent, &["DOWNRIGHT"], &cfg);
        assert!(report.invalid_move_occurred());
        assert_eq!(report.invalid_moves[0].reason, BlockReason::Obstacle);
        assert_eq!(agent.position, Position::new(0, 0));
    }
}
