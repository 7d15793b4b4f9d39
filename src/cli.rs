//! Command-line interface for Connect Four.

use anyhow::{Result, bail};
use clap::{Parser, ValueEnum};

/// Whether a seat is controlled by a person or by the computer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PlayerKind {
    /// Moves are entered at the keyboard.
    Human,
    /// Moves are chosen at random after a short delay.
    Computer,
}

/// Setup for one seat, as validated from the command line.
#[derive(Debug, Clone)]
pub struct PlayerSpec {
    /// Display name.
    pub name: String,
    /// Human or computer.
    pub kind: PlayerKind,
}

/// Connect Four - two-player board game in the terminal
#[derive(Parser, Debug)]
#[command(name = "connect_four")]
#[command(about = "Connect Four with human and computer players", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Name of player 1 (moves first)
    #[arg(long, default_value = "Player 1")]
    pub player1: String,

    /// Who controls player 1
    #[arg(long, value_enum, default_value = "human")]
    pub player1_kind: PlayerKind,

    /// Name of player 2
    #[arg(long, default_value = "Player 2")]
    pub player2: String,

    /// Who controls player 2
    #[arg(long, value_enum, default_value = "computer")]
    pub player2_kind: PlayerKind,

    /// Log file path (the TUI owns the terminal, so logs go to a file)
    #[arg(long, default_value = "connect_four.log")]
    pub log_file: std::path::PathBuf,
}

impl Cli {
    /// Validates player setup the way the original game form did: both
    /// names present and distinct. The engine itself assumes well-formed
    /// players, so this is the only place names are checked.
    pub fn player_specs(&self) -> Result<(PlayerSpec, PlayerSpec)> {
        if self.player1.trim().is_empty()
            || self.player2.trim().is_empty()
            || self.player1 == self.player2
        {
            bail!("you must provide a unique name for both players");
        }

        Ok((
            PlayerSpec {
                name: self.player1.clone(),
                kind: self.player1_kind,
            },
            PlayerSpec {
                name: self.player2.clone(),
                kind: self.player2_kind,
            },
        ))
    }
}
