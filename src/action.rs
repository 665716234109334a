//! Closed action vocabulary and its token form.
//!
//! Raw tokens are parsed once at the boundary. Matching ignores case and
//! any `_`, `-` or space inside the token, so `up_left`, `Up-Left` and
//! `UPLEFT` are the same action. A token that names a diagonal under the
//! 4-connected topology, or names nothing at all, parses to `None`.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::types::{Direction, Topology};

/// A single agent action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Action {
    Move(Direction),
    Take,
    Drop,
}

impl Action {
    /// Parses a token regardless of topology.
    pub fn from_token(token: &str) -> Option<Action> {
        let normalized: String = token
            .chars()
            .filter(|c| !matches!(c, '_' | '-' | ' '))
            .collect::<String>()
            .to_ascii_uppercase();

        match normalized.as_str() {
            "TAKE" => Some(Action::Take),
            "DROP" => Some(Action::Drop),
            other => Direction::ALL
                .into_iter()
                .find(|d| d.token() == other)
                .map(Action::Move),
        }
    }

    /// Parses a token, rejecting moves the topology does not allow.
    pub fn parse(token: &str, topology: Topology) -> Option<Action> {
        Self::from_token(token).filter(|a| a.is_supported(topology))
    }

    pub fn is_supported(&self, topology: Topology) -> bool {
        match self {
            Action::Move(d) => topology.allows(*d),
            Action::Take | Action::Drop => true,
        }
    }

    /// Full vocabulary for a topology: its moves, then TAKE and DROP.
    pub fn vocabulary(topology: Topology) -> Vec<Action> {
        topology
            .directions()
            .iter()
            .copied()
            .map(Action::Move)
            .chain([Action::Take, Action::Drop])
            .collect()
    }
}

impl From<Direction> for Action {
    fn from(direction: Direction) -> Self {
        Action::Move(direction)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Move(d) => write!(f, "{d}"),
            Action::Take => f.write_str("TAKE"),
            Action::Drop => f.write_str("DROP"),
        }
    }
}

/// Renders actions as canonical string tokens.
pub fn to_tokens(actions: &[Action]) -> Vec<String> {
    actions.iter().map(ToString::to_string).collect()
}
