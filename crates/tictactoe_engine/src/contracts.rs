//! Contract-based validation for tic-tac-toe.
//!
//! Contracts define correctness through preconditions and postconditions:
//! {P} action {Q}.

use super::action::{Move, MoveError};
use super::invariants::{InvariantSet, TicTacToeInvariants};
use super::{GameSession, Position};
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: The game must still be running.
pub struct GameRunning;

impl GameRunning {
    /// Rejects any move once an outcome is set.
    pub fn check(session: &GameSession) -> Result<(), MoveError> {
        if session.is_running() {
            Ok(())
        } else {
            Err(MoveError::GameOver)
        }
    }
}

/// Precondition: The index must name a square.
pub struct InRange;

impl InRange {
    /// Converts a raw index into a position, rejecting anything past 8.
    pub fn check(index: usize) -> Result<Position, MoveError> {
        Position::from_index(index).ok_or(MoveError::OutOfRange(index))
    }
}

/// Precondition: The square at the move's position must be empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Rejects moves onto occupied squares.
    pub fn check(action: &Move, session: &GameSession) -> Result<(), MoveError> {
        if session.board().is_empty(action.position) {
            Ok(())
        } else {
            Err(MoveError::CellOccupied(action.position))
        }
    }
}

/// Precondition: It must be the player's turn.
pub struct PlayersTurn;

impl PlayersTurn {
    /// Rejects moves by the player who is not to move.
    pub fn check(action: &Move, session: &GameSession) -> Result<(), MoveError> {
        let expected = session.current_player();
        if action.player == expected {
            Ok(())
        } else {
            Err(MoveError::WrongPlayer {
                expected,
                actual: action.player,
            })
        }
    }
}

/// Composite precondition: running, square empty, and the player's turn.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(session))]
    pub fn check(action: &Move, session: &GameSession) -> Result<(), MoveError> {
        GameRunning::check(session)?;
        SquareIsEmpty::check(action, session)?;
        PlayersTurn::check(action, session)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for move actions.
///
/// Preconditions:
/// - Game is running
/// - Square must be empty
/// - Must be player's turn
///
/// Postconditions:
/// - Exactly one more move is recorded
/// - Board remains monotonic
/// - Players still alternate
/// - History remains consistent with board
pub struct MoveContract;

impl Contract<GameSession, Move> for MoveContract {
    fn pre(session: &GameSession, action: &Move) -> Result<(), MoveError> {
        LegalMove::check(action, session)
    }

    fn post(before: &GameSession, after: &GameSession) -> Result<(), MoveError> {
        if after.history().len() != before.history().len() + 1 {
            warn!(
                before = before.history().len(),
                after = after.history().len(),
                "Move count changed by more than one"
            );
            return Err(MoveError::InvariantViolation(
                "Postcondition failed: exactly one move must be recorded".to_string(),
            ));
        }

        TicTacToeInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "Invariant violated after move");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Engine, Player, Square};

    #[test]
    fn test_precondition_empty_square() {
        let session = GameSession::new();
        let action = Move::new(Player::X, Position::Center);
        assert!(MoveContract::pre(&session, &action).is_ok());
    }

    #[test]
    fn test_precondition_occupied_square() {
        let mut engine = Engine::new();
        engine.apply_move(4, Player::X).unwrap();

        let action = Move::new(Player::O, Position::Center);
        assert_eq!(
            MoveContract::pre(engine.session(), &action),
            Err(MoveError::CellOccupied(Position::Center))
        );
    }

    #[test]
    fn test_precondition_wrong_turn() {
        let session = GameSession::new();
        let action = Move::new(Player::O, Position::Center);
        assert_eq!(
            MoveContract::pre(&session, &action),
            Err(MoveError::WrongPlayer {
                expected: Player::X,
                actual: Player::O,
            })
        );
    }

    #[test]
    fn test_in_range() {
        assert_eq!(InRange::check(8), Ok(Position::BottomRight));
        assert_eq!(InRange::check(9), Err(MoveError::OutOfRange(9)));
    }

    #[test]
    fn test_postcondition_holds_after_move() {
        let before = GameSession::new();
        let mut engine = Engine::new();
        engine.apply_move(4, Player::X).unwrap();
        assert!(MoveContract::post(&before, engine.session()).is_ok());
    }

    #[test]
    fn test_postcondition_detects_corruption() {
        let before = GameSession::new();
        let mut engine = Engine::new();
        engine.apply_move(4, Player::X).unwrap();

        let mut after = engine.session().clone();
        after
            .board_mut()
            .set(Position::TopLeft, Square::Occupied(Player::O));
        assert!(matches!(
            MoveContract::post(&before, &after),
            Err(MoveError::InvariantViolation(_))
        ));
    }
}
