use rand::{rngs::SmallRng, seq::SliceRandom, SeedableRng};

use crate::game::GameState;
use crate::search::SearchError;

/// Plays a uniformly random legal move.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomAgent;

impl RandomAgent {
    pub fn step<G: GameState>(&self, game: &G) -> Result<G::Move, SearchError> {
        let mut rng = SmallRng::from_entropy();
        let moves = game.legal_moves();
        moves
            .choose(&mut rng)
            .copied()
            .ok_or(SearchError::TerminalState)
    }
}
