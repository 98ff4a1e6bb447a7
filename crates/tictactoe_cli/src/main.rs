//! Tic-tac-toe terminal front-end.

use anyhow::Result;
use clap::Parser;
use tictactoe_cli::cli::Cli;
use tictactoe_cli::config::ConsoleConfig;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Logs go to stderr so they never interleave with the board.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = ConsoleConfig::load_or_default(&cli.config)?.with_overrides(
        cli.mode,
        cli.computer_mark,
        cli.think_ms,
        cli.seed,
    );
    info!(?config, "Starting tic-tac-toe");

    tictactoe_cli::run(config).await
}
