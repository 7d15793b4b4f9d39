//! Human player driven by column selections from the presentation layer.

use super::Player;
use crate::engine::EngineSnapshot;
use anyhow::{Result, anyhow};
use std::sync::{Arc, Mutex};
use tokio::sync::oneshot;
use tracing::debug;

/// Slot holding the resolver for the one outstanding move request, if any.
type PendingMove = Arc<Mutex<Option<oneshot::Sender<usize>>>>;

/// Interactive player.
///
/// `request_move` arms a single-use rendezvous and suspends until the
/// presentation layer reports a column selection. Selections arriving while
/// no request is armed are dropped, so stale input can never resolve a
/// later request.
pub struct HumanPlayer {
    name: String,
    pending: PendingMove,
}

impl HumanPlayer {
    /// Creates a new human player.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            pending: Arc::default(),
        }
    }

    /// Returns a cloneable input surface for the presentation layer.
    ///
    /// The handle stays valid while the engine owns the player.
    pub fn handle(&self) -> SelectionHandle {
        SelectionHandle {
            pending: Arc::clone(&self.pending),
        }
    }
}

#[async_trait::async_trait]
impl Player for HumanPlayer {
    async fn request_move(&mut self, _view: &EngineSnapshot) -> Result<usize> {
        let (tx, rx) = oneshot::channel();
        match self.pending.lock() {
            Ok(mut slot) => *slot = Some(tx),
            Err(_) => return Err(anyhow!("selection slot poisoned")),
        }

        debug!(player = %self.name, "Waiting for column selection");
        rx.await
            .map_err(|_| anyhow!("selection handle dropped before a column was chosen"))
    }

    fn column_selected(&self, column: usize) {
        resolve(&self.pending, column);
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Input surface handed to the presentation layer for one [`HumanPlayer`].
#[derive(Clone)]
pub struct SelectionHandle {
    pending: PendingMove,
}

impl SelectionHandle {
    /// Reports that a column control was activated.
    ///
    /// Resolves the pending move request, if one is armed; a no-op
    /// otherwise.
    pub fn column_selected(&self, column: usize) {
        resolve(&self.pending, column);
    }
}

fn resolve(pending: &PendingMove, column: usize) {
    let sender = pending.lock().ok().and_then(|mut slot| slot.take());
    match sender {
        // The request side may have been dropped; that just means the game
        // is gone, so the selection is discarded either way.
        Some(tx) => {
            let _ = tx.send(column);
        }
        None => debug!(column, "Dropping column selection with no pending request"),
    }
}
