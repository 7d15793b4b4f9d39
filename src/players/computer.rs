//! Computer player that picks a random open column.

use super::Player;
use crate::engine::EngineSnapshot;
use anyhow::Result;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::time::Duration;
use tracing::debug;

/// Delay before answering, so turn pacing feels natural to humans playing
/// or watching. Not needed for correctness.
const MOVE_DELAY: Duration = Duration::from_millis(200);

/// Autonomous player choosing uniformly at random among non-full columns.
pub struct ComputerPlayer {
    name: String,
    rng: StdRng,
}

impl ComputerPlayer {
    /// Creates a new computer player.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rng: StdRng::from_os_rng(),
        }
    }
}

#[async_trait::async_trait]
impl Player for ComputerPlayer {
    async fn request_move(&mut self, view: &EngineSnapshot) -> Result<usize> {
        tokio::time::sleep(MOVE_DELAY).await;

        let open = view.grid.open_columns();
        let column = if open.is_empty() {
            // Nothing sensible to pick; the engine's retry loop will reject
            // whatever we return.
            self.rng.random_range(0..view.grid.columns())
        } else {
            open[self.rng.random_range(0..open.len())]
        };

        debug!(player = %self.name, column, "Computer chose a column");
        Ok(column)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
