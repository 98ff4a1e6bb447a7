//! Monotonic board invariant: squares only ever go from empty to occupied.

use super::Invariant;
use crate::{Board, GameSession, Square};

/// Invariant: The board is exactly the history replayed onto an empty board.
///
/// Each recorded move targeted an empty square, and no square holds a mark
/// without a move that placed it.
pub struct MonotonicBoardInvariant;

impl Invariant<GameSession> for MonotonicBoardInvariant {
    fn holds(session: &GameSession) -> bool {
        let mut replayed = Board::new();
        for action in session.history() {
            if !replayed.is_empty(action.position) {
                return false;
            }
            replayed.set(action.position, Square::Occupied(action.player));
        }
        replayed == *session.board()
    }

    fn description() -> &'static str {
        "Board matches history replayed onto empty squares"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Engine, Player, Position};

    #[test]
    fn test_fresh_session_holds() {
        assert!(MonotonicBoardInvariant::holds(&GameSession::new()));
    }

    #[test]
    fn test_holds_after_moves() {
        let mut engine = Engine::new();
        engine.apply_move(0, Player::X).unwrap();
        engine.apply_move(8, Player::O).unwrap();
        assert!(MonotonicBoardInvariant::holds(engine.session()));
    }

    #[test]
    fn test_erased_square_violates() {
        let mut engine = Engine::new();
        engine.apply_move(4, Player::X).unwrap();

        let mut session = engine.session().clone();
        session.board_mut().set(Position::Center, Square::Empty);
        assert!(!MonotonicBoardInvariant::holds(&session));
    }
}
