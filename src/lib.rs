//! gathergrid - a deterministic resource-gathering grid game.
//!
//! An agent on a 2-D grid collects resource tokens and deposits them on its
//! start cell within a bounded number of actions. The crate provides the
//! grid model and text format, the action interpreter, outcome scoring,
//! A* pathfinding, and two reference planners (greedy and random).
//!
//! ```
//! use gathergrid::{run, Position, SimulationConfig};
//!
//! let outcome = run(
//!     "A R .\n. . .",
//!     Position::new(0, 0),
//!     &["RIGHT", "TAKE", "LEFT", "DROP"],
//!     &SimulationConfig::default(),
//! )
//! .unwrap();
//! assert_eq!(outcome.score, 1.0);
//! assert!(outcome.returned_to_start);
//! ```

pub mod action;
pub mod agent;
pub mod engine;
pub mod grid;
pub mod metrics;
pub mod pathfinding;
pub mod planner;
pub mod scoring;
pub mod simulation;
pub mod types;

pub use action::Action;
pub use agent::{total_resources, AgentState};
pub use engine::{execute, execute_actions, ExecutionReport, SimulationConfig, ACTION_BUDGET};
pub use grid::{parse_grid, Cell, Grid, GridError};
pub use metrics::BaselineMetrics;
pub use pathfinding::shortest_path;
pub use planner::{GreedyPlanner, Planner, RandomPlanner};
pub use scoring::Outcome;
pub use simulation::{plan_greedy, plan_random, run, simulate, RunResult, SimulationError};
pub use types::{Direction, Position, Topology};
