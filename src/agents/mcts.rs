use std::time::Instant;

use log::info;
use rand::{rngs::SmallRng, SeedableRng};

use crate::game::GameState;
use crate::search::{Mcts, Perspective, SearchConfig, SearchError, EXPLORATION};

/// Monte Carlo tree search agent.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct MctsAgent {
    pub iterations: usize,
    pub exploration: f64,
    pub perspective: Perspective,
    /// Fixed seed for reproducible moves, random if not set
    pub seed: Option<u64>,
}

impl Default for MctsAgent {
    fn default() -> Self {
        Self {
            iterations: 1000,
            exploration: EXPLORATION,
            perspective: Perspective::default(),
            seed: None,
        }
    }
}

impl MctsAgent {
    pub fn config(&self) -> SearchConfig {
        SearchConfig {
            iterations: self.iterations,
            exploration: self.exploration,
            perspective: self.perspective,
        }
    }

    pub fn step<G: GameState>(&self, game: &G) -> Result<G::Move, SearchError> {
        let mut rng = match self.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };

        let start = Instant::now();
        let mut mcts = Mcts::new(game.clone(), self.config())?;
        let stats = mcts.run(&mut rng)?;
        let (mv, _) = mcts.best()?;

        info!(
            ">>> mcts {}ms move={mv:?} visits={} mean={:.3} nodes={} depth={}",
            start.elapsed().as_millis(),
            stats.visits,
            stats.mean,
            stats.nodes,
            stats.depth
        );
        Ok(mv)
    }
}
