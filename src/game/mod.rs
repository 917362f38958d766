//! Game abstraction used by the tree search and the agents.
//!
//! Any sequential two player game with perfect information can be searched
//! by implementing [`GameState`] for its state type.

use std::fmt::Debug;

mod board;
pub use board::*;
mod tictactoe;
pub use tictactoe::*;

/// One of the two sides of a game.
pub trait Player: Copy + Eq + Debug {
    /// The player whose wins count as positive outcomes.
    const MAX: Self;

    fn opponent(self) -> Self;

    fn is_max(self) -> bool {
        self == Self::MAX
    }
}

/// The outcome of a game.
/// If the game did not end the outcome is `None`.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum Outcome<P> {
    None,
    Draw,
    Winner(P),
}

/// Immutable game state as seen by the search.
///
/// Applying a move returns a new state, the previous one stays untouched.
pub trait GameState: Clone + Debug {
    type Move: Copy + Eq + Debug;
    type Player: Player;

    /// All moves the current player may play.
    /// The order has to be deterministic for a given state.
    fn legal_moves(&self) -> Vec<Self::Move>;

    /// Returns the state after the current player played `mv`.
    ///
    /// Panics if `mv` is not a legal move.
    fn apply(&self, mv: Self::Move) -> Self;

    /// The player that completed a winning configuration, if any.
    fn winner(&self) -> Option<Self::Player>;

    /// The player that moves next.
    fn current_player(&self) -> Self::Player;

    fn is_terminal(&self) -> bool {
        self.winner().is_some() || self.legal_moves().is_empty()
    }

    fn outcome(&self) -> Outcome<Self::Player> {
        match self.winner() {
            Some(player) => Outcome::Winner(player),
            None if self.legal_moves().is_empty() => Outcome::Draw,
            None => Outcome::None,
        }
    }
}
