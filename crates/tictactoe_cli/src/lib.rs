//! Terminal front-end for the tic-tac-toe engine.
//!
//! Reads commands line by line from stdin, prints the board and status to
//! stdout, and logs to stderr. The engine does the game; this crate only
//! wires input and output to it.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod input;
pub mod mode;
pub mod orchestrator;
pub mod players;
pub mod render;

use anyhow::{Context, Result};
use config::ConsoleConfig;
use orchestrator::{GameEvent, Orchestrator};
use players::{ComputerPlayer, HumanPlayer};
use tictactoe_engine::MoveSelector;
use tokio::sync::mpsc;
use tracing::{info, instrument, warn};

/// Plays games on stdin/stdout until the user quits.
#[instrument(skip_all, fields(mode = %config.mode()))]
pub async fn run(config: ConsoleConfig) -> Result<()> {
    let (input_tx, input_rx) = mpsc::unbounded_channel();
    let (event_tx, event_rx) = mpsc::unbounded_channel();

    // A plain thread, so a pending read never holds up shutdown.
    std::thread::spawn(move || {
        for line in std::io::stdin().lines() {
            match line {
                Ok(line) => {
                    if input_tx.send(line).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    warn!(error = %e, "Failed to read stdin");
                    break;
                }
            }
        }
    });

    let selector = match config.seed() {
        Some(seed) => MoveSelector::seeded(*seed),
        None => MoveSelector::new(),
    };
    let human = HumanPlayer::new("You", input_rx);
    let computer = ComputerPlayer::new("Computer", selector, config.think_delay());

    println!("{}", render::help());
    let orchestrator =
        Orchestrator::new(*config.mode(), *config.computer_mark(), human, computer, event_tx);
    play(orchestrator, event_rx, |text| println!("{}", text)).await?;
    info!("Goodbye");
    Ok(())
}

/// Runs `orchestrator` while a printer task passes each event's text to `emit`.
///
/// Returns only after every queued event has been emitted, including when
/// the orchestrator fails.
pub async fn play<F>(
    mut orchestrator: Orchestrator,
    mut event_rx: mpsc::UnboundedReceiver<GameEvent>,
    mut emit: F,
) -> Result<()>
where
    F: FnMut(String) + Send + 'static,
{
    let printer = tokio::spawn(async move {
        while let Some(event) = event_rx.recv().await {
            if let Some(text) = describe(&event) {
                emit(text);
            }
        }
    });

    let outcome = orchestrator.run().await;
    drop(orchestrator);

    printer.await.context("Output task failed")?;
    outcome
}

/// Text shown for an event, if any.
pub fn describe(event: &GameEvent) -> Option<String> {
    match event {
        GameEvent::StateChanged(session) => Some(format!("\n{}", render::session(session))),
        GameEvent::ComputerThinking => Some("Computer is thinking...".to_string()),
        GameEvent::MoveMade { .. } => None,
        GameEvent::MoveRejected(e) => Some(format!("Illegal move: {}", e)),
        GameEvent::ModeChanged(mode) => Some(render::mode(*mode)),
        GameEvent::Unrecognized(input) => {
            Some(format!("Unrecognized input {:?}. {}", input, render::help()))
        }
    }
}
