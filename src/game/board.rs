use std::fmt::{self, Debug, Display};
use std::ops::{Index, IndexMut};
use std::str::FromStr;

use owo_colors::OwoColorize;
use serde::{Deserialize, Serialize};

use super::Player;

/// Number of cells on the board.
pub const CELLS: usize = 9;

/// All rows, columns and diagonals, in the order they are checked for a winner.
pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// The mark a player puts on the board. X always starts.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mark {
    X,
    O,
}

impl Player for Mark {
    const MAX: Mark = Mark::X;

    fn opponent(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

impl Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mark::X => write!(f, "X"),
            Mark::O => write!(f, "O"),
        }
    }
}

impl FromStr for Mark {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "x" | "X" => Ok(Mark::X),
            "o" | "O" => Ok(Mark::O),
            other => Err(BoardError::Mark(other.to_string())),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum BoardError {
    #[error("invalid mark {0:?}, expected X or O")]
    Mark(String),
    #[error("invalid board {0:?}")]
    Board(String),
}

/// Represents a single cell of the board
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Marked(Mark),
}

impl Cell {
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Marked(mark) => Some(mark),
        }
    }

    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    fn parse(c: char) -> Option<Cell> {
        match c {
            'x' | 'X' => Some(Cell::Marked(Mark::X)),
            'o' | 'O' => Some(Cell::Marked(Mark::O)),
            // Empty cells may also be printed with their number
            '.' | '_' | '0'..='8' => Some(Cell::Empty),
            _ => None,
        }
    }
}

impl Debug for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Empty => write!(f, "."),
            Cell::Marked(mark) => write!(f, "{mark}"),
        }
    }
}

/// The 3x3 playing field, stored row major.
///
/// Serialized as a compact string like `"XO..X...O"`.
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(into = "String", try_from = "String")]
pub struct Board {
    cells: [Cell; CELLS],
}

impl Board {
    pub fn new() -> Board {
        Board::default()
    }

    /// Parses a board from text.
    ///
    /// Cells are `X`, `O` and `.`, `_` or a digit for empty cells.
    /// Whitespace, `|` and `+` are ignored as are separator lines made of
    /// dashes, so a printed board can be parsed again.
    pub fn parse(txt: &str) -> Option<Board> {
        let mut cells = Vec::with_capacity(CELLS);
        for line in txt.lines() {
            if line.trim().chars().all(|c| c == '-' || c == '+') {
                continue;
            }
            for c in line.chars() {
                if c.is_whitespace() || c == '|' || c == '+' {
                    continue;
                }
                cells.push(Cell::parse(c)?);
            }
        }
        Some(Board {
            cells: cells.try_into().ok()?,
        })
    }

    pub fn cells(&self) -> &[Cell; CELLS] {
        &self.cells
    }

    /// Indices of all empty cells in ascending order.
    pub fn free(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_empty())
            .map(|(i, _)| i)
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.cells
            .iter()
            .filter(|c| **c == Cell::Marked(mark))
            .count()
    }

    /// Returns the mark of the first line with three identical marks.
    pub fn winner(&self) -> Option<Mark> {
        LINES.iter().find_map(|&[a, b, c]| {
            let mark = self.cells[a].mark()?;
            (self.cells[b] == self.cells[a] && self.cells[c] == self.cells[a]).then_some(mark)
        })
    }
}

impl Index<usize> for Board {
    type Output = Cell;

    fn index(&self, i: usize) -> &Self::Output {
        &self.cells[i]
    }
}

impl IndexMut<usize> for Board {
    fn index_mut(&mut self, i: usize) -> &mut Self::Output {
        &mut self.cells[i]
    }
}

impl From<Board> for String {
    fn from(board: Board) -> String {
        board.cells.iter().map(|c| format!("{c:?}")).collect()
    }
}

impl TryFrom<String> for Board {
    type Error = BoardError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Board::parse(&s).ok_or(BoardError::Board(s))
    }
}

impl Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        for row in self.cells.chunks(3) {
            for cell in row {
                write!(f, " {cell:?}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Human readable board, empty cells show their number.
impl Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.cells.chunks(3).enumerate() {
            if y > 0 {
                writeln!(f, " ---+---+---")?;
            }
            for (x, cell) in row.iter().enumerate() {
                if x > 0 {
                    write!(f, "|")?;
                }
                match cell {
                    Cell::Empty => write!(f, " {} ", (y * 3 + x).bright_black())?,
                    Cell::Marked(Mark::X) => write!(f, " {} ", "X".bright_red())?,
                    Cell::Marked(Mark::O) => write!(f, " {} ", "O".bright_blue())?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn board_parse() {
        let board = Board::parse(
            r#"
            X O .
            . X .
            O . ."#,
        )
        .unwrap();
        assert_eq!(board[0], Cell::Marked(Mark::X));
        assert_eq!(board[1], Cell::Marked(Mark::O));
        assert_eq!(board[4], Cell::Marked(Mark::X));
        assert_eq!(board[6], Cell::Marked(Mark::O));
        assert_eq!(board.free().collect::<Vec<_>>(), vec![2, 3, 5, 7, 8]);
        assert_eq!(board.count(Mark::X), 2);
        assert_eq!(board.count(Mark::O), 2);

        assert!(Board::parse("X O .").is_none());
        assert!(Board::parse("X O . . . . . . . .").is_none());
        assert!(Board::parse("X O . . ? . . . .").is_none());
    }

    #[test]
    fn board_parse_printed() {
        let board = Board::parse("XO.......").unwrap();
        let printed = format!("{}", board);
        println!("{printed}");
        // The printed form contains color codes, the plain layout parses back
        let plain = " X | O | 2\n ---+---+---\n 3 | 4 | 5\n ---+---+---\n 6 | 7 | 8\n";
        assert_eq!(Board::parse(plain), Some(board));
    }

    #[test]
    fn board_winner() {
        assert_eq!(Board::new().winner(), None);
        assert_eq!(Board::parse("XXX OO. ...").unwrap().winner(), Some(Mark::X));
        assert_eq!(Board::parse("X.O X.O .XO").unwrap().winner(), Some(Mark::O));
        assert_eq!(Board::parse("X.O .XO O.X").unwrap().winner(), Some(Mark::X));
        assert_eq!(Board::parse("X.O XO. O.X").unwrap().winner(), Some(Mark::O));
        // full board without a line
        let draw = Board::parse("XOX XOO OXX").unwrap();
        assert!(draw.is_full());
        assert_eq!(draw.winner(), None);
    }

    #[test]
    fn board_lines() {
        for line in LINES {
            let mut board = Board::new();
            for i in line {
                board[i] = Cell::Marked(Mark::O);
            }
            assert_eq!(board.winner(), Some(Mark::O), "{line:?}");
        }
    }

    #[test]
    fn board_serde() {
        let board = Board::parse("XO. .X. O..").unwrap();
        let json = serde_json::to_string(&board).unwrap();
        assert_eq!(json, r#""XO..X.O..""#);
        let back: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(back, board);
        assert!(serde_json::from_str::<Board>(r#""XO""#).is_err());
    }

    #[test]
    fn mark_from_str() {
        assert_eq!("x".parse::<Mark>().unwrap(), Mark::X);
        assert_eq!("O".parse::<Mark>().unwrap(), Mark::O);
        assert!("z".parse::<Mark>().is_err());
        assert_eq!(Mark::X.opponent(), Mark::O);
        assert!(Mark::X.is_max());
        assert!(!Mark::O.is_max());
    }
}
