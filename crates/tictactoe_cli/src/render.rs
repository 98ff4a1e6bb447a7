//! Text rendering of game events.

use crate::mode::GameMode;
use tictactoe_engine::{GameSession, Outcome};

/// Status line for a session, like `Turn: X` or `X wins! (0, 1, 2)`.
pub fn status(session: &GameSession) -> String {
    match session.outcome() {
        None => format!("Turn: {}", session.current_player()),
        Some(Outcome::Win { player, line }) => format!("{} wins! {}", player, line),
        Some(Outcome::Draw) => "Draw".to_string(),
    }
}

/// The board followed by its status line.
pub fn session(session: &GameSession) -> String {
    format!("{}\n{}", session.board().display(), status(session))
}

/// Label for the mode switch.
pub fn mode(mode: GameMode) -> String {
    format!("Mode: {}", mode)
}

/// Short usage reminder.
pub fn help() -> &'static str {
    "Keys: 1-9 place a mark, 0 restart, m switch mode, q quit"
}
