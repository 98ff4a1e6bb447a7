//! First-class action types for tic-tac-toe.
//!
//! Moves are domain events, not side effects. They carry the player's intent
//! and are validated against the session before anything is written.

use super::{Player, Position};
use serde::{Deserialize, Serialize};

/// A move in tic-tac-toe: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position.label())
    }
}

/// Illegal move: the session rejected the request and was left unchanged.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The index does not name a square (must be 0-8).
    #[display("Position {} is out of range (must be 0-8)", _0)]
    OutOfRange(usize),

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    CellOccupied(Position),

    /// It's not this player's turn.
    #[display("It's not {}'s turn ({} to move)", actual, expected)]
    WrongPlayer {
        /// Player whose turn it is.
        expected: Player,
        /// Player that attempted the move.
        actual: Player,
    },

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}

/// The move selector was asked for a move on a board that has none to give.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum SelectError {
    /// Every square is occupied.
    #[display("No empty squares left to select")]
    BoardFull,

    /// A line is already complete, so the game is over.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for SelectError {}

/// Failure of a combined select-then-apply turn.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::From)]
pub enum EngineError {
    /// The selected move was rejected.
    #[display("{}", _0)]
    Move(MoveError),

    /// No move could be selected.
    #[display("{}", _0)]
    Select(SelectError),
}

impl std::error::Error for EngineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EngineError::Move(e) => Some(e),
            EngineError::Select(e) => Some(e),
        }
    }
}
