//! Baseline evaluation over repeated planning episodes.
//!
//! Each episode plans on a fresh copy of the grid, executes the plan through
//! the engine and grades it, exactly as an external solution would be.

use std::fmt;

use tracing::info;

use crate::agent::AgentState;
use crate::engine::{execute_actions, SimulationConfig};
use crate::grid::Grid;
use crate::planner::Planner;
use crate::scoring::{evaluate, Outcome};

/// Aggregated outcomes of a planner over several episodes.
#[derive(Debug, Clone, PartialEq)]
pub struct BaselineMetrics {
    /// Mean score per episode.
    pub mean_score: f64,
    /// Best single-episode score.
    pub best_score: f64,
    /// Fraction of episodes ending on the start cell.
    pub return_rate: f64,
    /// Fraction of episodes with at least one rejected move.
    pub invalid_move_rate: f64,
    /// Number of episodes evaluated.
    pub n_episodes: usize,
}

/// Plans, executes and grades one episode.
pub fn run_episode(planner: &mut dyn Planner, grid: &Grid, config: &SimulationConfig) -> Outcome {
    let mut grid = grid.clone();
    let mut agent = AgentState::at_start(&grid);
    let actions = planner.plan(&grid, &agent);
    let report = execute_actions(&mut grid, &mut agent, &actions, config);
    evaluate(&grid, &agent, &report, config.cost_per_step)
}

impl BaselineMetrics {
    /// Evaluates a planner over `n_episodes` episodes on the same grid.
    ///
    /// # Arguments
    ///
    /// * `planner` - The planner to evaluate
    /// * `grid` - Starting grid; each episode works on its own copy
    /// * `config` - Run configuration used for execution and scoring
    /// * `n_episodes` - Number of episodes to run
    pub fn evaluate(
        planner: &mut dyn Planner,
        grid: &Grid,
        config: &SimulationConfig,
        n_episodes: usize,
    ) -> Self {
        let outcomes: Vec<Outcome> = (0..n_episodes)
            .map(|_| run_episode(planner, grid, config))
            .collect();
        let metrics = Self::aggregate(&outcomes);
        info!(
            planner = planner.name(),
            episodes = metrics.n_episodes,
            mean_score = metrics.mean_score,
            "baseline evaluated"
        );
        metrics
    }

    /// Aggregates a set of outcomes. An empty set yields all zeros.
    pub fn aggregate(outcomes: &[Outcome]) -> Self {
        let n = outcomes.len();
        if n == 0 {
            return Self {
                mean_score: 0.0,
                best_score: 0.0,
                return_rate: 0.0,
                invalid_move_rate: 0.0,
                n_episodes: 0,
            };
        }
        let n_f = n as f64;
        let fraction = |pred: fn(&Outcome) -> bool| {
            outcomes.iter().filter(|o| pred(o)).count() as f64 / n_f
        };

        Self {
            mean_score: outcomes.iter().map(|o| o.score).sum::<f64>() / n_f,
            best_score: outcomes
                .iter()
                .map(|o| o.score)
                .fold(f64::NEG_INFINITY, f64::max),
            return_rate: fraction(|o| o.returned_to_start),
            invalid_move_rate: fraction(|o| o.invalid_move),
            n_episodes: n,
        }
    }
}

impl fmt::Display for BaselineMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "episodes={} mean_score={:.3} best_score={:.3} return_rate={:.1}% invalid_rate={:.1}%",
            self.n_episodes,
            self.mean_score,
            self.best_score,
            self.return_rate * 100.0,
            self.invalid_move_rate * 100.0
        )
    }
}
