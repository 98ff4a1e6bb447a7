//! Computer player backed by the heuristic move selector.

use super::Player;
use crate::input::Command;
use anyhow::Result;
use std::time::Duration;
use tictactoe_engine::{GameSession, MoveSelector};
use tracing::debug;

/// Computer opponent.
pub struct ComputerPlayer {
    name: String,
    selector: MoveSelector,
    think: Duration,
}

impl ComputerPlayer {
    /// Creates a computer player that pauses for `think` before each move.
    pub fn new(name: impl Into<String>, selector: MoveSelector, think: Duration) -> Self {
        Self {
            name: name.into(),
            selector,
            think,
        }
    }
}

#[async_trait::async_trait]
impl Player for ComputerPlayer {
    async fn get_command(&mut self, session: &GameSession) -> Result<Command> {
        debug!(ai = %self.name, "Computer making move");

        // Cosmetic delay so the reply doesn't appear instantly.
        tokio::time::sleep(self.think).await;

        let (position, tier) = self
            .selector
            .select_with_tier(session.board(), session.current_player())?;
        debug!(ai = %self.name, %position, %tier, "Computer chose position");
        Ok(Command::Place(position))
    }

    fn name(&self) -> &str {
        &self.name
    }
}
