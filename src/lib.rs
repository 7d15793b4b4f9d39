//! Connect Four with an asynchronous turn engine.
//!
//! The core of the crate is the [`TurnEngine`]: it owns the [`Grid`],
//! solicits moves from two pluggable [`Player`] implementations, validates
//! and applies them, and reports lifecycle notifications ([`GameEvent`])
//! over a channel to whatever presentation layer is listening.
//!
//! # Architecture
//!
//! - **Game**: grid storage and pure win/draw rules ([`game`])
//! - **Engine**: turn orchestration and notifications ([`engine`])
//! - **Players**: human (interactive) and computer (random) ([`players`])
//! - **TUI**: terminal presentation layer ([`tui`])
//!
//! # Example
//!
//! ```no_run
//! use connect_four::{ComputerPlayer, TurnEngine};
//! use tokio::sync::mpsc;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let (event_tx, mut event_rx) = mpsc::unbounded_channel();
//! let mut engine = TurnEngine::new(
//!     Box::new(ComputerPlayer::new("Kasparov")),
//!     Box::new(ComputerPlayer::new("Deep Blue")),
//!     event_tx,
//! );
//! let outcome = engine.run().await?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod engine;
mod game;
mod players;

// Public module declarations
pub mod cli;
pub mod tui;

// Crate-level exports - Engine
pub use engine::{EngineSnapshot, GameEvent, TurnEngine};

// Crate-level exports - Game types
pub use game::{COLUMNS, Grid, MoveError, Outcome, PlayerId, ROWS, rules};

// Crate-level exports - Players
pub use players::{ComputerPlayer, HumanPlayer, Player, SelectionHandle};
