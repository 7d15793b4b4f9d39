//! Turn orchestration between two players.

use crate::game::{Grid, Outcome, PlayerId, rules};
use crate::players::Player;
use anyhow::Result;
use serde::Serialize;
use tokio::sync::mpsc;
use tracing::{debug, info};

/// Read-only view of the engine carried in every notification and handed to
/// players when their move is requested.
#[derive(Debug, Clone, Serialize)]
pub struct EngineSnapshot {
    /// The grid as of the snapshot.
    pub grid: Grid,
    /// The seat whose move is being solicited next.
    pub next_turn: PlayerId,
    /// Display names, ordered by seat.
    pub players: [String; 2],
}

impl EngineSnapshot {
    /// Name of the seat now to move.
    pub fn next_player_name(&self) -> &str {
        &self.players[self.next_turn.index()]
    }
}

/// Notifications sent from the engine to the presentation layer.
///
/// Events are emitted strictly in the order moves resolve. Dropping the
/// receiver silences them without disturbing the game.
#[derive(Debug, Clone)]
pub enum GameEvent {
    /// A move was validated and applied. The snapshot already names the
    /// next seat to move.
    MoveCompleted {
        /// Column the disc was dropped into.
        column: usize,
        /// Seat that moved.
        player: PlayerId,
        /// Engine state after the move.
        snapshot: EngineSnapshot,
    },
    /// A move was rejected; the same seat will be asked again.
    MoveInvalid {
        /// The rejected column.
        column: usize,
        /// Seat that attempted the move.
        player: PlayerId,
        /// Engine state, unchanged by the attempt.
        snapshot: EngineSnapshot,
    },
    /// The game reached a terminal state.
    GameOver {
        /// The winning seat, or `None` for a draw.
        winner: Option<PlayerId>,
        /// Final engine state.
        snapshot: EngineSnapshot,
    },
}

/// Drives the game: solicits moves, validates and applies them, detects
/// termination, and emits [`GameEvent`]s.
///
/// The engine owns the grid exclusively and issues at most one outstanding
/// move request at a time.
pub struct TurnEngine {
    grid: Grid,
    players: [Box<dyn Player>; 2],
    next_turn: PlayerId,
    outcome: Option<Outcome>,
    event_tx: mpsc::UnboundedSender<GameEvent>,
}

impl TurnEngine {
    /// Creates an engine for one game session between two players.
    ///
    /// Seat [`PlayerId::One`] goes to `player_one` and moves first.
    pub fn new(
        player_one: Box<dyn Player>,
        player_two: Box<dyn Player>,
        event_tx: mpsc::UnboundedSender<GameEvent>,
    ) -> Self {
        Self {
            grid: Grid::new(),
            players: [player_one, player_two],
            next_turn: PlayerId::One,
            outcome: None,
            event_tx,
        }
    }

    /// Grid width.
    pub fn columns(&self) -> usize {
        self.grid.columns()
    }

    /// Grid height.
    pub fn rows(&self) -> usize {
        self.grid.rows()
    }

    /// The seat whose move is solicited next.
    pub fn next_turn(&self) -> PlayerId {
        self.next_turn
    }

    /// Player display names, ordered by seat.
    pub fn player_names(&self) -> [&str; 2] {
        [self.players[0].name(), self.players[1].name()]
    }

    /// The grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The terminal result, once the game has completed.
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Captures the current read-only view of the engine.
    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            grid: self.grid.clone(),
            next_turn: self.next_turn,
            players: [
                self.players[0].name().to_string(),
                self.players[1].name().to_string(),
            ],
        }
    }

    fn emit(&self, event: GameEvent) {
        // A missing consumer is fine; notifications are optional.
        let _ = self.event_tx.send(event);
    }

    /// Runs the game to completion.
    ///
    /// Rejected moves are reported and re-requested from the same seat
    /// without limit; the turn advances on successful moves only. Returns
    /// the outcome, or an error if a player fails to supply a move (an
    /// abandoned session, not a game state).
    pub async fn run(&mut self) -> Result<Outcome> {
        info!(
            player_one = %self.players[0].name(),
            player_two = %self.players[1].name(),
            "Starting game"
        );

        loop {
            let seat = self.next_turn;
            let view = self.snapshot();

            debug!(player = %view.next_player_name(), "Waiting for move");
            let column = self.players[seat.index()].request_move(&view).await?;

            match self.grid.append(column, seat) {
                Ok(()) => {
                    self.next_turn = seat.other();
                    debug!(column, player = ?seat, "Move applied");
                    self.emit(GameEvent::MoveCompleted {
                        column,
                        player: seat,
                        snapshot: self.snapshot(),
                    });
                }
                Err(err) => {
                    debug!(column, player = ?seat, %err, "Move rejected");
                    self.emit(GameEvent::MoveInvalid {
                        column,
                        player: seat,
                        snapshot: self.snapshot(),
                    });
                    continue;
                }
            }

            if let Some(outcome) = rules::outcome(&self.grid) {
                self.outcome = Some(outcome);
                info!(?outcome, "Game over");
                self.emit(GameEvent::GameOver {
                    winner: outcome.winner(),
                    snapshot: self.snapshot(),
                });
                return Ok(outcome);
            }
        }
    }
}
