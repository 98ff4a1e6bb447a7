//! The board state machine.

use super::contracts::{Contract, GameRunning, InRange, MoveContract};
use super::rules::{check_winner, is_full};
use super::{EngineError, GameSession, Move, MoveError, MoveSelector, Outcome, Player, Position};
use rand::Rng;
use tracing::{debug, info, instrument, warn};

/// Tic-tac-toe game engine.
///
/// Owns one [`GameSession`] and is its only mutator. Independent engines
/// share nothing, so any number of games can run side by side.
#[derive(Debug, Clone, Default)]
pub struct Engine {
    session: GameSession,
}

impl Engine {
    /// Creates an engine holding a fresh game.
    #[instrument]
    pub fn new() -> Self {
        Self {
            session: GameSession::new(),
        }
    }

    /// Returns the current session.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Discards the current session and starts a fresh one.
    #[instrument(skip(self))]
    pub fn reset(&mut self) -> &GameSession {
        info!(moves = self.session.history().len(), "Resetting game");
        self.session = GameSession::new();
        &self.session
    }

    /// Places `player`'s mark at `index` (0-8).
    ///
    /// On success the returned session already reflects the new mark, any
    /// outcome, and the next player to move.
    ///
    /// # Errors
    ///
    /// Returns a [`MoveError`] if the game is over, the index is out of range,
    /// the square is occupied, or it is not `player`'s turn. The session is
    /// left unchanged.
    #[instrument(skip(self))]
    pub fn apply_move(&mut self, index: usize, player: Player) -> Result<&GameSession, MoveError> {
        let position = GameRunning::check(&self.session)
            .and_then(|()| InRange::check(index))
            .inspect_err(|e| warn!(error = %e, "Rejected move"))?;
        self.place(Move::new(player, position))
    }

    /// Applies a [`Move`] whose position is already known to be on the board.
    ///
    /// # Errors
    ///
    /// Same as [`Engine::apply_move`], minus the range check.
    #[instrument(skip(self), fields(position = %action.position, player = %action.player))]
    pub fn place(&mut self, action: Move) -> Result<&GameSession, MoveError> {
        MoveContract::pre(&self.session, &action)
            .inspect_err(|e| warn!(error = %e, "Rejected move"))?;

        #[cfg(debug_assertions)]
        let before = self.session.clone();

        self.session.record(action);
        self.evaluate_termination();
        if self.session.is_running() {
            self.session.advance_turn();
        }

        #[cfg(debug_assertions)]
        {
            if let Err(e) = MoveContract::post(&before, &self.session) {
                self.session = before;
                return Err(e);
            }
        }

        debug!(next = %self.session.current_player(), "Move applied");
        Ok(&self.session)
    }

    /// Returns whether `player` holds a complete line on the live board.
    pub fn is_winner(&self, player: Player) -> bool {
        self.session.board().is_winner(player)
    }

    /// Asks `selector` for the current player's move and applies it.
    ///
    /// # Errors
    ///
    /// [`MoveError::GameOver`] once the game has ended, and
    /// [`EngineError::Select`] if the selector cannot produce a move.
    #[instrument(skip(self, selector))]
    pub fn play_computer_turn<R: Rng>(
        &mut self,
        selector: &mut MoveSelector<R>,
    ) -> Result<Position, EngineError> {
        if !self.session.is_running() {
            return Err(MoveError::GameOver.into());
        }
        let player = self.session.current_player();
        let position = selector.select_move(self.session.board(), player)?;
        self.place(Move::new(player, position))?;
        Ok(position)
    }

    /// Ends the game if the last move completed a line or filled the board.
    fn evaluate_termination(&mut self) {
        let board = self.session.board();
        if let Some((player, line)) = check_winner(board) {
            info!(%player, %line, "Game won");
            self.session.finish(Outcome::Win { player, line });
        } else if is_full(board) {
            info!("Game drawn");
            self.session.finish(Outcome::Draw);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameStatus, Square};

    fn play(engine: &mut Engine, moves: &[(usize, Player)]) {
        for &(index, player) in moves {
            engine.apply_move(index, player).unwrap();
        }
    }

    #[test]
    fn test_new_engine_is_fresh() {
        let engine = Engine::new();
        let session = engine.session();
        assert!(session.cells().iter().all(|s| *s == Square::Empty));
        assert_eq!(session.current_player(), Player::X);
        assert!(session.is_running());
        assert_eq!(session.outcome(), None);
    }

    #[test]
    fn test_apply_move_writes_and_alternates() {
        let mut engine = Engine::new();
        let session = engine.apply_move(4, Player::X).unwrap();
        assert_eq!(session.board().get(Position::Center), Square::Occupied(Player::X));
        assert_eq!(session.current_player(), Player::O);
        assert!(session.is_running());
    }

    #[test]
    fn test_out_of_range_rejected() {
        let mut engine = Engine::new();
        assert_eq!(engine.apply_move(9, Player::X), Err(MoveError::OutOfRange(9)));
        assert_eq!(engine.session(), &GameSession::new());
    }

    #[test]
    fn test_occupied_rejected_and_session_unchanged() {
        let mut engine = Engine::new();
        engine.apply_move(4, Player::X).unwrap();
        let before = engine.session().clone();

        assert_eq!(
            engine.apply_move(4, Player::O),
            Err(MoveError::CellOccupied(Position::Center))
        );
        assert_eq!(engine.session(), &before);
    }

    #[test]
    fn test_wrong_player_rejected() {
        let mut engine = Engine::new();
        assert_eq!(
            engine.apply_move(0, Player::O),
            Err(MoveError::WrongPlayer {
                expected: Player::X,
                actual: Player::O,
            })
        );
    }

    #[test]
    fn test_win_ends_game_without_advancing_turn() {
        let mut engine = Engine::new();
        play(
            &mut engine,
            &[(0, Player::X), (4, Player::O), (1, Player::X), (5, Player::O), (2, Player::X)],
        );

        let session = engine.session();
        assert!(!session.is_running());
        assert_eq!(session.current_player(), Player::X);
        let outcome = session.outcome().unwrap();
        assert_eq!(outcome.winner(), Some(Player::X));
        assert_eq!(outcome.line().map(|l| l.indices()), Some([0, 1, 2]));
        assert!(matches!(session.status(), GameStatus::Won(Player::X, _)));
        assert!(engine.is_winner(Player::X));
        assert!(!engine.is_winner(Player::O));
    }

    #[test]
    fn test_moves_after_game_over_rejected() {
        let mut engine = Engine::new();
        play(
            &mut engine,
            &[(0, Player::X), (4, Player::O), (1, Player::X), (5, Player::O), (2, Player::X)],
        );
        let before = engine.session().clone();

        assert_eq!(engine.apply_move(8, Player::O), Err(MoveError::GameOver));
        assert_eq!(engine.apply_move(42, Player::O), Err(MoveError::GameOver));
        assert_eq!(engine.session(), &before);
    }

    #[test]
    fn test_reset_after_win() {
        let mut engine = Engine::new();
        play(
            &mut engine,
            &[(0, Player::X), (4, Player::O), (1, Player::X), (5, Player::O), (2, Player::X)],
        );

        let session = engine.reset();
        assert_eq!(session, &GameSession::new());
        assert!(session.history().is_empty());
    }

    #[test]
    fn test_computer_turn_applies_selected_move() {
        let mut engine = Engine::new();
        play(&mut engine, &[(0, Player::X), (4, Player::O), (1, Player::X)]);

        let mut selector = MoveSelector::seeded(3);
        let position = engine.play_computer_turn(&mut selector).unwrap();
        assert_eq!(position, Position::TopRight);
        assert_eq!(
            engine.session().board().get(Position::TopRight),
            Square::Occupied(Player::O)
        );
        assert_eq!(engine.session().current_player(), Player::X);
    }

    #[test]
    fn test_computer_turn_after_game_over() {
        let mut engine = Engine::new();
        play(
            &mut engine,
            &[(0, Player::X), (4, Player::O), (1, Player::X), (5, Player::O), (2, Player::X)],
        );
        let mut selector = MoveSelector::seeded(3);
        assert_eq!(
            engine.play_computer_turn(&mut selector),
            Err(EngineError::Move(MoveError::GameOver))
        );
    }
}
