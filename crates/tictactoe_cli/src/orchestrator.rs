//! Game orchestration between the keyboard, the computer and the engine.

use crate::input::Command;
use crate::mode::GameMode;
use crate::players::{ComputerPlayer, HumanPlayer, Player};
use anyhow::Result;
use tictactoe_engine::{Engine, GameSession, MoveError, Player as Mark, Position};
use tokio::sync::mpsc;
use tracing::{debug, info, instrument};

/// Messages sent from orchestrator to UI.
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    /// Game state updated (after a move, a restart, or a mode change).
    StateChanged(GameSession),
    /// Computer is thinking.
    ComputerThinking,
    /// Move was made.
    MoveMade {
        /// Who moved.
        player: Mark,
        /// Where.
        position: Position,
    },
    /// The engine refused a move.
    MoveRejected(MoveError),
    /// Mode switched; a fresh game follows.
    ModeChanged(GameMode),
    /// Input that is not a command.
    Unrecognized(String),
}

/// Drives one engine from a human and, in versus mode, a computer.
pub struct Orchestrator {
    engine: Engine,
    mode: GameMode,
    computer_mark: Mark,
    human: HumanPlayer,
    computer: ComputerPlayer,
    event_tx: mpsc::UnboundedSender<GameEvent>,
}

impl Orchestrator {
    /// Creates a new orchestrator.
    pub fn new(
        mode: GameMode,
        computer_mark: Mark,
        human: HumanPlayer,
        computer: ComputerPlayer,
        event_tx: mpsc::UnboundedSender<GameEvent>,
    ) -> Self {
        Self {
            engine: Engine::new(),
            mode,
            computer_mark,
            human,
            computer,
            event_tx,
        }
    }

    /// Returns the engine.
    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Returns the current mode.
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Runs until the human quits or input ends.
    #[instrument(skip(self), fields(mode = %self.mode))]
    pub async fn run(&mut self) -> Result<()> {
        info!("Starting game orchestration");
        self.event_tx.send(GameEvent::ModeChanged(self.mode))?;
        self.publish_state()?;

        loop {
            let session = self.engine.session();
            let computer_turn = session.is_running()
                && self
                    .mode
                    .is_computer_turn(session.current_player(), self.computer_mark);

            let command = if computer_turn {
                self.event_tx.send(GameEvent::ComputerThinking)?;
                debug!(player = %self.computer.name(), "Waiting for move");
                self.computer.get_command(session).await?
            } else {
                debug!(player = %self.human.name(), "Waiting for command");
                self.human.get_command(session).await?
            };

            if !self.handle(command)? {
                info!("Quitting");
                return Ok(());
            }
        }
    }

    /// Applies one command. Returns `false` when the loop should stop.
    fn handle(&mut self, command: Command) -> Result<bool> {
        match command {
            Command::Place(position) => {
                let player = self.engine.session().current_player();
                let applied = self
                    .engine
                    .apply_move(position.to_index(), player)
                    .map(|_| ());
                match applied {
                    Ok(()) => {
                        self.event_tx.send(GameEvent::MoveMade { player, position })?;
                        self.publish_state()?;
                    }
                    Err(e) => self.event_tx.send(GameEvent::MoveRejected(e))?,
                }
            }
            Command::Restart => {
                self.restart();
                self.publish_state()?;
            }
            Command::ToggleMode => {
                self.mode = self.mode.toggle();
                info!(mode = %self.mode, "Mode switched");
                self.restart();
                self.event_tx.send(GameEvent::ModeChanged(self.mode))?;
                self.publish_state()?;
            }
            Command::Quit => return Ok(false),
            Command::Unrecognized(input) => self.event_tx.send(GameEvent::Unrecognized(input))?,
        }
        Ok(true)
    }

    /// Restarts the game.
    pub fn restart(&mut self) {
        self.engine.reset();
    }

    fn publish_state(&self) -> Result<()> {
        self.event_tx
            .send(GameEvent::StateChanged(self.engine.session().clone()))?;
        Ok(())
    }
}
