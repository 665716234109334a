//! Reference planners and the trait they share.

pub mod greedy;
pub mod random;
pub mod trait_;

pub use greedy::{GreedyPlanner, Phase};
pub use random::RandomPlanner;
pub use trait_::Planner;
