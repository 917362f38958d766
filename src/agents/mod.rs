use std::fmt;
use std::str::FromStr;

mod mcts;
pub use mcts::*;
mod random;
pub use random::*;

use crate::game::GameState;
use crate::search::SearchError;

/// Move sources that can be configured with json,
/// e.g. `{"Mcts":{"iterations":500}}` or `"Random"`.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Agent {
    Mcts(MctsAgent),
    Random,
}

impl Default for Agent {
    fn default() -> Self {
        Self::Mcts(MctsAgent::default())
    }
}

impl Agent {
    /// Chooses the next move for the current player.
    pub fn step<G: GameState>(&self, game: &G) -> Result<G::Move, SearchError> {
        match self {
            Agent::Mcts(agent) => agent.step(game),
            Agent::Random => RandomAgent.step(game),
        }
    }
}

impl FromStr for Agent {
    type Err = serde_json::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_json::from_str(s)
    }
}

impl fmt::Display for Agent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", serde_json::to_string(self).unwrap_or_default())
    }
}
