//! Parsing of typed commands.

use tictactoe_engine::Position;

/// A request from the person at the keyboard (or from the computer).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Place the current player's mark.
    Place(Position),
    /// Start a fresh game in the same mode.
    Restart,
    /// Switch between two-player and versus-computer mode (restarts).
    ToggleMode,
    /// Leave the program.
    Quit,
    /// Anything else; echoed back to the user.
    Unrecognized(String),
}

/// Parses one line of input.
///
/// `1`-`9` pick a square, left to right and top to bottom;
/// `0` or `r` restarts, `m` toggles the mode, `q` quits.
pub fn parse_command(line: &str) -> Command {
    let trimmed = line.trim();
    let mut chars = trimmed.chars();
    match (chars.next(), chars.next()) {
        (Some('0'), None) => Command::Restart,
        (Some(c), None) if c.is_ascii_digit() => match Position::from_key(c) {
            Some(pos) => Command::Place(pos),
            None => Command::Unrecognized(trimmed.to_string()),
        },
        _ => match trimmed.to_ascii_lowercase().as_str() {
            "r" | "restart" => Command::Restart,
            "m" | "mode" => Command::ToggleMode,
            "q" | "quit" | "exit" => Command::Quit,
            _ => Command::Unrecognized(trimmed.to_string()),
        },
    }
}
