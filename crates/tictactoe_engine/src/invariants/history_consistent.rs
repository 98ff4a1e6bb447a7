//! History consistency invariant: history length matches occupied squares.

use super::Invariant;
use crate::GameSession;

/// Invariant: History length equals number of occupied squares.
pub struct HistoryConsistentInvariant;

impl Invariant<GameSession> for HistoryConsistentInvariant {
    fn holds(session: &GameSession) -> bool {
        let occupied_count = session
            .cells()
            .iter()
            .filter(|s| s.player().is_some())
            .count();

        session.history().len() == occupied_count
    }

    fn description() -> &'static str {
        "History length matches number of occupied squares"
    }
}
