//! Player trait and implementations.

mod computer;
mod human;

pub use computer::ComputerPlayer;
pub use human::{HumanPlayer, SelectionHandle};

use crate::engine::EngineSnapshot;
use anyhow::Result;

/// Trait for players that can supply moves.
#[async_trait::async_trait]
pub trait Player: Send {
    /// Picks the column for this player's next move.
    ///
    /// The engine issues one request at a time and awaits it to completion;
    /// implementations may suspend for as long as they need.
    async fn request_move(&mut self, view: &EngineSnapshot) -> Result<usize>;

    /// Reacts to a UI-originated column activation.
    ///
    /// Interactive players resolve their pending move request with it;
    /// autonomous players ignore it.
    fn column_selected(&self, _column: usize) {}

    /// Returns the player's display name.
    fn name(&self) -> &str;
}
