//! # Monte Carlo Tree Search
//!
//! Upper confidence bounds applied to trees over any [`GameState`](crate::game::GameState).
//!
//! Every iteration descends from the root, expands a single unexplored move
//! or follows the child with the best UCT score, evaluates the reached node
//! and propagates the result back to the root.
//! The reached node is evaluated by its outcome only, there are no random
//! playouts, so most iterations propagate a draw.

use serde::{Deserialize, Serialize};

mod mcts;
pub use mcts::*;
mod node;
pub use node::*;
mod tree;
pub use tree::*;

/// Exploration weight used while growing the tree.
pub const EXPLORATION: f64 = 1.41;
/// Added to the visit counts to avoid divisions by zero.
pub const EPSILON: f64 = 1e-6;

pub const WIN: f64 = 1.0;
pub const DRAW: f64 = 0.0;
pub const LOSS: f64 = -1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    #[error("at least one iteration is required")]
    NoIterations,
    #[error("the game is already over")]
    TerminalState,
    #[error("the root has not been expanded")]
    NoChildren,
}

/// From whose point of view the wins of a node are accumulated.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Perspective {
    /// Wins count for the player that moved into the node.
    /// Parents select the children that are best for the player to move.
    #[default]
    Mover,
    /// Wins count for the player that moves next at the node.
    /// With this rule the search steers away from its own wins.
    ToMove,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct SearchConfig {
    pub iterations: usize,
    /// UCT exploration weight, the final move is always chosen with 0.
    pub exploration: f64,
    pub perspective: Perspective,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            iterations: 1000,
            exploration: EXPLORATION,
            perspective: Perspective::default(),
        }
    }
}

impl SearchConfig {
    pub fn new(iterations: usize) -> Self {
        Self {
            iterations,
            ..Self::default()
        }
    }
}
