//! Random-walk planner for baselines.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::trait_::Planner;
use crate::action::Action;
use crate::agent::AgentState;
use crate::grid::Grid;
use crate::types::Topology;

/// Uniformly random action sequences.
///
/// Each action is drawn independently from the topology's moves plus TAKE
/// and DROP. The grid is ignored. Used as a lower-bound baseline.
#[derive(Debug, Clone)]
pub struct RandomPlanner<R = StdRng> {
    vocabulary: Vec<Action>,
    count: usize,
    rng: R,
}

impl RandomPlanner<StdRng> {
    /// Creates a reproducible planner from a seed.
    pub fn seeded(topology: Topology, count: usize, seed: u64) -> Self {
        Self::with_rng(topology, count, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomPlanner<R> {
    /// Creates a planner drawing from the given random source.
    ///
    /// # Arguments
    ///
    /// * `topology` - Selects which moves are in the vocabulary
    /// * `count` - Number of actions in every generated sequence
    /// * `rng` - Source of randomness
    pub fn with_rng(topology: Topology, count: usize, rng: R) -> Self {
        Self {
            vocabulary: Action::vocabulary(topology),
            count,
            rng,
        }
    }

    /// Draws a fresh sequence of `count` actions.
    pub fn generate(&mut self) -> Vec<Action> {
        (0..self.count)
            .map(|_| self.vocabulary[self.rng.gen_range(0..self.vocabulary.len())])
            .collect()
    }
}

impl<R: Rng> Planner for RandomPlanner<R> {
    fn plan(&mut self, _grid: &Grid, _agent: &AgentState) -> Vec<Action> {
        self.generate()
    }

    fn name(&self) -> &str {
        "random"
    }
}
