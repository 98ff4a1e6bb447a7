//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::Invariant;
use crate::{GameSession, Player};

/// Invariant: Players alternate turns, X first.
///
/// While the game runs, the player to move is the one the history implies.
/// After the game ends the turn stays with the last mover.
pub struct AlternatingTurnInvariant;

impl Invariant<GameSession> for AlternatingTurnInvariant {
    fn holds(session: &GameSession) -> bool {
        let history = session.history();

        let alternates = history
            .iter()
            .enumerate()
            .all(|(i, action)| action.player == expected_mover(i));
        if !alternates {
            return false;
        }

        if session.is_running() {
            session.current_player() == expected_mover(history.len())
        } else {
            history
                .last()
                .is_some_and(|last| last.player == session.current_player())
        }
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}

fn expected_mover(ply: usize) -> Player {
    if ply % 2 == 0 { Player::X } else { Player::O }
}
