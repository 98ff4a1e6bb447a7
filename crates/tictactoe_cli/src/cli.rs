//! Command-line interface for the terminal front-end.

use crate::mode::GameMode;
use clap::Parser;
use std::path::PathBuf;
use tictactoe_engine::Player;

/// Tic-tac-toe in the terminal - two players or against the computer
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Play tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to an optional TOML config file
    #[arg(short, long, default_value = "tictactoe.toml")]
    pub config: PathBuf,

    /// Starting mode (overrides the config file)
    #[arg(short, long, value_enum)]
    pub mode: Option<GameMode>,

    /// Mark the computer plays in vs-computer mode (x or o)
    #[arg(long, value_parser = parse_mark)]
    pub computer_mark: Option<Player>,

    /// Computer "thinking" pause in milliseconds
    #[arg(long)]
    pub think_ms: Option<u64>,

    /// Seed for the computer's random choices
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Parses `x`/`o` (any case) into a mark.
pub fn parse_mark(s: &str) -> Result<Player, String> {
    match s.trim().to_ascii_uppercase().as_str() {
        "X" => Ok(Player::X),
        "O" => Ok(Player::O),
        other => Err(format!("expected X or O, got {:?}", other)),
    }
}
