//! Core domain types for tic-tac-toe.

use super::position::Position;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Player in the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Player {
    /// Player X (always moves first).
    X,
    /// Player O (moves second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }
}

/// Three board positions whose equal occupancy ends the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinLine([Position; 3]);

impl WinLine {
    /// Returns the three positions of the line.
    pub fn positions(&self) -> [Position; 3] {
        self.0
    }

    /// Returns the three board indices of the line.
    pub fn indices(&self) -> [usize; 3] {
        self.0.map(Position::to_index)
    }
}

impl std::fmt::Display for WinLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [a, b, c] = self.indices();
        write!(f, "({}, {}, {})", a, b, c)
    }
}

/// All winning lines: rows, then columns, then diagonals.
///
/// Win detection reports the first line that matches in this order.
pub const WIN_LINES: [WinLine; 8] = {
    use Position::*;
    [
        // Rows
        WinLine([TopLeft, TopCenter, TopRight]),
        WinLine([MiddleLeft, Center, MiddleRight]),
        WinLine([BottomLeft, BottomCenter, BottomRight]),
        // Columns
        WinLine([TopLeft, MiddleLeft, BottomLeft]),
        WinLine([TopCenter, Center, BottomCenter]),
        WinLine([TopRight, MiddleRight, BottomRight]),
        // Diagonals
        WinLine([TopLeft, Center, BottomRight]),
        WinLine([TopRight, Center, BottomLeft]),
    ]
};

/// 3x3 tic-tac-toe board.
///
/// A `Board` is a plain value: the live one is owned by a
/// [`GameSession`](crate::GameSession), and copies of it are used as
/// scratch boards when the move selector probes hypothetical moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Creates a board from squares in row-major order.
    pub fn from_squares(squares: [Square; 9]) -> Self {
        Self { squares }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Sets the square at the given position.
    pub fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.to_index()] = square;
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Empty positions in ascending index order.
    pub fn empty_positions(&self) -> Vec<Position> {
        Position::valid_moves(self)
    }

    /// Number of squares held by `player`.
    pub fn count(&self, player: Player) -> usize {
        self.squares
            .iter()
            .filter(|s| **s == Square::Occupied(player))
            .count()
    }

    /// Checks if the board is full.
    pub fn is_full(&self) -> bool {
        super::rules::is_full(self)
    }

    /// Returns whether `player` holds all three squares of some line.
    pub fn is_winner(&self, player: Player) -> bool {
        super::rules::is_winner(self, player)
    }

    /// Formats the board as a human-readable string.
    ///
    /// Empty squares show the 1-based key that selects them.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                let symbol = match self.squares[pos].player() {
                    Some(player) => player.to_string(),
                    None => (pos + 1).to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Error parsing a board from its nine-character form.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum BoardParseError {
    /// Input did not contain exactly nine squares.
    #[display("Expected 9 squares, found {}", _0)]
    WrongLength(usize),
    /// Input contained a character that is not a square.
    #[display("Invalid square character {:?}", _0)]
    InvalidSquare(char),
}

impl std::error::Error for BoardParseError {}

/// Parses `"XX..O...."` style boards: `X`, `O`, and `.`/`_`/`-` for empty.
/// Whitespace and `|` separators are ignored.
impl FromStr for Board {
    type Err = BoardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let squares = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '|')
            .map(|c| match c.to_ascii_uppercase() {
                'X' => Ok(Square::Occupied(Player::X)),
                'O' => Ok(Square::Occupied(Player::O)),
                '.' | '_' | '-' => Ok(Square::Empty),
                other => Err(BoardParseError::InvalidSquare(other)),
            })
            .collect::<Result<Vec<_>, _>>()?;

        let len = squares.len();
        let squares: [Square; 9] = squares
            .try_into()
            .map_err(|_| BoardParseError::WrongLength(len))?;
        Ok(Self::from_squares(squares))
    }
}
