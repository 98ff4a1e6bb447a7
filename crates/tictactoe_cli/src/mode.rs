//! Game mode selection.

use serde::{Deserialize, Serialize};
use tictactoe_engine::Player;

/// Who plays the two sides.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum, strum::Display,
)]
#[serde(rename_all = "kebab-case")]
pub enum GameMode {
    /// Two humans share the keyboard.
    #[default]
    #[strum(to_string = "2 players")]
    TwoPlayers,
    /// One human against the computer.
    #[strum(to_string = "vs computer (easy)")]
    VsComputer,
}

impl GameMode {
    /// Returns the other mode.
    pub fn toggle(self) -> Self {
        match self {
            GameMode::TwoPlayers => GameMode::VsComputer,
            GameMode::VsComputer => GameMode::TwoPlayers,
        }
    }

    /// Whether `to_move` is played by the computer when it holds `computer_mark`.
    pub fn is_computer_turn(self, to_move: Player, computer_mark: Player) -> bool {
        self == GameMode::VsComputer && to_move == computer_mark
    }
}
