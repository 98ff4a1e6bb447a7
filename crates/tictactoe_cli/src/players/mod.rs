//! Player trait and implementations.

mod computer;
mod human;

pub use computer::ComputerPlayer;
pub use human::HumanPlayer;

use crate::input::Command;
use anyhow::Result;
use tictactoe_engine::GameSession;

/// Anything that can decide what happens next in a game.
#[async_trait::async_trait]
pub trait Player: Send {
    /// Waits for this player's next command.
    async fn get_command(&mut self, session: &GameSession) -> Result<Command>;

    /// Returns the player's display name.
    fn name(&self) -> &str;
}
