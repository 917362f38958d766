use std::fmt::{self, Debug, Display};

use serde::{Deserialize, Serialize};

use super::{Board, Cell, GameState, Mark, Player};

/// Complete state of a noughts and crosses game.
///
/// Moves are cell indices from 0 to 8, row major.
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TicTacToe {
    pub board: Board,
    /// The player that moves next.
    pub current: Mark,
}

impl Default for TicTacToe {
    fn default() -> TicTacToe {
        TicTacToe::new()
    }
}

impl TicTacToe {
    /// Empty board, X to move.
    pub fn new() -> TicTacToe {
        TicTacToe {
            board: Board::new(),
            current: Mark::X,
        }
    }

    /// Parses a board (see [`Board::parse`]).
    ///
    /// The player to move is derived from the number of marks:
    /// X if both players have placed as many marks, O if X has one more.
    /// Returns `None` for any other distribution.
    pub fn parse(txt: &str) -> Option<TicTacToe> {
        let board = Board::parse(txt)?;
        let x = board.count(Mark::X);
        let o = board.count(Mark::O);
        let current = if x == o {
            Mark::X
        } else if x == o + 1 {
            Mark::O
        } else {
            return None;
        };
        Some(TicTacToe { board, current })
    }

    /// Converts a row and column into a move.
    pub fn cell(row: usize, col: usize) -> usize {
        assert!(row < 3 && col < 3, "Invalid cell");
        row * 3 + col
    }

    /// Returns if `mv` can be played by the current player.
    pub fn move_is_valid(&self, mv: usize) -> bool {
        mv < self.board.cells().len() && self.board[mv].is_empty() && self.winner().is_none()
    }
}

impl GameState for TicTacToe {
    type Move = usize;
    type Player = Mark;

    /// Empty cells in row major order, no moves once a player has won.
    fn legal_moves(&self) -> Vec<usize> {
        if self.winner().is_some() {
            return Vec::new();
        }
        self.board.free().collect()
    }

    fn apply(&self, mv: usize) -> TicTacToe {
        assert!(self.move_is_valid(mv), "Illegal move {mv} on {self:?}");
        let mut next = *self;
        next.board[mv] = Cell::Marked(self.current);
        next.current = self.current.opponent();
        next
    }

    fn winner(&self) -> Option<Mark> {
        self.board.winner()
    }

    fn current_player(&self) -> Mark {
        self.current
    }
}

impl Debug for TicTacToe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TicTacToe {{ current: {:?}, board: {:?} }}", self.current, self.board)
    }
}

impl Display for TicTacToe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.board, f)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::game::Outcome;

    #[test]
    fn game_parse() {
        let game = TicTacToe::parse(
            r#"
            X O .
            . X .
            . . ."#,
        )
        .unwrap();
        assert_eq!(game.current, Mark::O);
        assert_eq!(game.legal_moves(), vec![2, 3, 5, 6, 7, 8]);

        let game = TicTacToe::parse("XO. ... ...").unwrap();
        assert_eq!(game.current, Mark::X);

        // O never starts
        assert!(TicTacToe::parse("O.. ... ...").is_none());
        assert!(TicTacToe::parse("XX. ... ...").is_none());
    }

    #[test]
    fn game_apply() {
        let game = TicTacToe::new();
        assert_eq!(game.legal_moves(), (0..9).collect::<Vec<_>>());
        assert_eq!(game.outcome(), Outcome::None);

        let next = game.apply(4);
        assert_eq!(next.board[4], Cell::Marked(Mark::X));
        assert_eq!(next.current_player(), Mark::O);
        assert!(!next.legal_moves().contains(&4));
        // the previous state is untouched
        assert!(game.board[4].is_empty());

        let next = next.apply(TicTacToe::cell(0, 0));
        assert_eq!(next.board[0], Cell::Marked(Mark::O));
        assert_eq!(next.current_player(), Mark::X);
    }

    #[test]
    #[should_panic]
    fn game_apply_occupied() {
        let game = TicTacToe::new().apply(4);
        game.apply(4);
    }

    #[test]
    #[should_panic]
    fn game_apply_after_win() {
        let game = TicTacToe::parse("XXX OO. ...").unwrap();
        game.apply(8);
    }

    #[test]
    fn game_outcome() {
        let won = TicTacToe::parse("XXX OO. ...").unwrap();
        assert_eq!(won.winner(), Some(Mark::X));
        assert!(won.is_terminal());
        assert!(won.legal_moves().is_empty());
        assert_eq!(won.outcome(), Outcome::Winner(Mark::X));

        let draw = TicTacToe::parse("XOX XOO OXX").unwrap();
        assert!(draw.is_terminal());
        assert_eq!(draw.winner(), None);
        assert_eq!(draw.outcome(), Outcome::Draw);
    }

    /// Walks the complete game tree and checks the contract on every state.
    #[test]
    fn game_tree_contract() {
        fn walk(game: &TicTacToe, games: &mut usize) {
            let moves = game.legal_moves();
            if game.is_terminal() {
                assert!(game.winner().is_some() || moves.is_empty());
                assert!(game.winner().is_none() || moves.is_empty());
                *games += 1;
                return;
            }
            assert!(!moves.is_empty());
            for mv in moves {
                let next = game.apply(mv);
                assert_eq!(next.current_player(), game.current_player().opponent());
                assert!(!next.legal_moves().contains(&mv));
                walk(&next, games);
            }
        }

        let mut games = 0;
        walk(&TicTacToe::new(), &mut games);
        // number of distinct move sequences of noughts and crosses
        assert_eq!(games, 255168);
    }

    #[test]
    fn game_serde() {
        let game = TicTacToe::parse("XO. .X. ...").unwrap();
        let json = serde_json::to_string(&game).unwrap();
        assert_eq!(json, r#"{"board":"XO..X....","current":"O"}"#);
        let back: TicTacToe = serde_json::from_str(&json).unwrap();
        assert_eq!(back, game);
        assert_eq!(back.legal_moves(), game.legal_moves());
        assert_eq!(back.winner(), game.winner());
        assert_eq!(back.current_player(), game.current_player());
    }
}
