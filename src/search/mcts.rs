use log::{debug, trace};
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::game::{GameState, Player};

use super::{NodeId, SearchConfig, SearchError, Tree, DRAW, LOSS, WIN};

/// Summary of a finished search.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SearchStats {
    pub iterations: usize,
    /// Allocated nodes including the root
    pub nodes: usize,
    /// Deepest node reached, the root has depth 0
    pub depth: usize,
    /// Visits of the chosen child
    pub visits: u32,
    /// Mean result of the chosen child
    pub mean: f64,
}

/// Tree search state for a single decision.
#[derive(Debug, Clone)]
pub struct Mcts<G: GameState> {
    tree: Tree<G>,
    config: SearchConfig,
    depth: usize,
}

impl<G: GameState> Mcts<G> {
    /// Creates the root for `state`.
    ///
    /// Fails if there is nothing to decide.
    pub fn new(state: G, config: SearchConfig) -> Result<Self, SearchError> {
        if config.iterations == 0 {
            return Err(SearchError::NoIterations);
        }
        if state.is_terminal() {
            return Err(SearchError::TerminalState);
        }
        Ok(Self {
            tree: Tree::new(state),
            config,
            depth: 0,
        })
    }

    pub fn tree(&self) -> &Tree<G> {
        &self.tree
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Runs the configured number of iterations.
    pub fn run<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<SearchStats, SearchError> {
        for _ in 0..self.config.iterations {
            self.iterate(rng);
        }

        let best = self.best_child()?;
        let stats = SearchStats {
            iterations: self.config.iterations,
            nodes: self.tree.len(),
            depth: self.depth,
            visits: self.tree[best].visits,
            mean: self.tree[best].mean(),
        };
        debug!("mcts {stats:?}");
        Ok(stats)
    }

    /// Select, expand, evaluate and backpropagate once.
    pub fn iterate<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let frontier = self.descend(rng);
        let result = evaluate(&self.tree[frontier].state);
        trace!("frontier={frontier:?} result={result}");
        self.tree
            .backpropagate(frontier, result, self.config.perspective);
    }

    /// Follows the best children until a node is expanded or a terminal
    /// state is reached.
    fn descend<R: Rng + ?Sized>(&mut self, rng: &mut R) -> NodeId {
        let mut id = NodeId::ROOT;
        let mut depth = 0;
        while !self.tree[id].state.is_terminal() {
            if !self.tree.is_fully_expanded(id) {
                let moves = self.tree.unexplored(id);
                if let Some(&mv) = moves.choose(rng) {
                    id = self.tree.add_child(id, mv);
                    depth += 1;
                }
                break;
            }
            match self.tree.best_child(id, self.config.exploration) {
                Some(child) => id = child,
                None => break,
            }
            depth += 1;
        }
        self.depth = self.depth.max(depth);
        id
    }

    /// The most promising child of the root, ignoring exploration.
    pub fn best_child(&self) -> Result<NodeId, SearchError> {
        self.tree
            .best_child(NodeId::ROOT, 0.0)
            .ok_or(SearchError::NoChildren)
    }

    /// State and move of the best child of the root.
    pub fn best(&self) -> Result<(G::Move, &G), SearchError> {
        let node = &self.tree[self.best_child()?];
        let mv = node.mv.ok_or(SearchError::NoChildren)?;
        Ok((mv, &node.state))
    }
}

/// Result of a state from the view of the maximizing player.
/// Running games count as draw.
fn evaluate<G: GameState>(state: &G) -> f64 {
    match state.winner() {
        Some(player) if player.is_max() => WIN,
        Some(_) => LOSS,
        None => DRAW,
    }
}

/// Searches `iterations` times from `state` and returns the chosen successor.
pub fn search<G: GameState>(state: &G, iterations: usize) -> Result<G, SearchError> {
    let mut rng = SmallRng::from_entropy();
    search_with(state, &SearchConfig::new(iterations), &mut rng)
}

/// Like [`search`] with an explicit configuration and random source.
pub fn search_with<G: GameState, R: Rng + ?Sized>(
    state: &G,
    config: &SearchConfig,
    rng: &mut R,
) -> Result<G, SearchError> {
    let mut mcts = Mcts::new(state.clone(), *config)?;
    mcts.run(rng)?;
    let (mv, next) = mcts.best()?;
    debug!("mcts move={mv:?}");
    Ok(next.clone())
}
