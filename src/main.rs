//! Connect Four - terminal entry point.

use anyhow::Result;
use clap::Parser;
use connect_four::cli::Cli;
use connect_four::tui;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let (player_one, player_two) = cli.player_specs()?;

    // The TUI owns the terminal, so logs go to a file.
    let log_file = std::fs::File::create(&cli.log_file)?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .init();

    tui::run_tui(player_one, player_two).await
}
