//! The state of one game.

use super::{Board, Move, Player, Square, WinLine};
use serde::{Deserialize, Serialize};

/// Outcome of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Player completed the given line.
    Win {
        /// The winner.
        player: Player,
        /// The first complete line, in row/column/diagonal order.
        line: WinLine,
    },
    /// Board filled with no complete line.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Win { player, .. } => Some(*player),
            Outcome::Draw => None,
        }
    }

    /// Returns the winning line if there is one.
    pub fn line(&self) -> Option<WinLine> {
        match self {
            Outcome::Win { line, .. } => Some(*line),
            Outcome::Draw => None,
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Win { player, .. } => write!(f, "{} wins", player),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Phase of the state machine.
///
/// `InProgress` is initial; `Won` and `Draw` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Player, WinLine),
    /// Game ended in a draw.
    Draw,
}

/// Complete state of one game, and the read-only view handed to callers.
///
/// Only [`Engine`](crate::Engine) mutates a session; everything public here
/// is a query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSession {
    /// The board.
    board: Board,
    /// Player to move. Frozen at the last mover once the game ends.
    current_player: Player,
    /// True until a win or draw is detected.
    running: bool,
    /// Set exactly when `running` becomes false.
    outcome: Option<Outcome>,
    /// Moves applied so far, in order.
    history: Vec<Move>,
}

impl GameSession {
    /// Creates a fresh game: empty board, X to move, running.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::X,
            running: true,
            outcome: None,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the nine squares in row-major order.
    pub fn cells(&self) -> &[Square; 9] {
        self.board.squares()
    }

    /// Returns the player to move.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns true while moves are accepted.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Returns the outcome once the game has ended.
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Returns the move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the state machine phase.
    pub fn status(&self) -> GameStatus {
        match self.outcome {
            None => GameStatus::InProgress,
            Some(Outcome::Win { player, line }) => GameStatus::Won(player, line),
            Some(Outcome::Draw) => GameStatus::Draw,
        }
    }

    /// Writes the mark and records the move (unchecked - use
    /// `Engine::apply_move` for validation).
    pub(crate) fn record(&mut self, action: Move) {
        self.board.set(action.position, Square::Occupied(action.player));
        self.history.push(action);
    }

    /// Ends the game.
    pub(crate) fn finish(&mut self, outcome: Outcome) {
        self.running = false;
        self.outcome = Some(outcome);
    }

    /// Hands the turn to the other player.
    pub(crate) fn advance_turn(&mut self) {
        self.current_player = self.current_player.opponent();
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
