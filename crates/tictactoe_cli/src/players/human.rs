//! Human player fed by lines of keyboard input.

use super::Player;
use crate::input::{Command, parse_command};
use anyhow::Result;
use tictactoe_engine::GameSession;
use tokio::sync::mpsc;
use tracing::debug;

/// Human player reading commands from an input channel.
pub struct HumanPlayer {
    name: String,
    input_rx: mpsc::UnboundedReceiver<String>,
}

impl HumanPlayer {
    /// Creates a new human player.
    pub fn new(name: impl Into<String>, input_rx: mpsc::UnboundedReceiver<String>) -> Self {
        Self {
            name: name.into(),
            input_rx,
        }
    }
}

#[async_trait::async_trait]
impl Player for HumanPlayer {
    async fn get_command(&mut self, _session: &GameSession) -> Result<Command> {
        match self.input_rx.recv().await {
            Some(line) => {
                let command = parse_command(&line);
                debug!(player = %self.name, ?command, "Read command");
                Ok(command)
            }
            // End of input means the person has left.
            None => Ok(Command::Quit),
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_engine::Position;

    #[tokio::test]
    async fn test_reads_commands_then_quits_on_close() {
        let (tx, rx) = mpsc::unbounded_channel();
        let mut human = HumanPlayer::new("You", rx);
        tx.send("5".to_string()).unwrap();
        drop(tx);

        let session = GameSession::new();
        assert_eq!(
            human.get_command(&session).await.unwrap(),
            Command::Place(Position::Center)
        );
        assert_eq!(human.get_command(&session).await.unwrap(), Command::Quit);
    }
}
