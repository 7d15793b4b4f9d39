//! Application state and logic.

use crate::engine::{EngineSnapshot, GameEvent};
use crate::game::{Grid, PlayerId};
use tracing::debug;

/// View state driven by engine events.
pub struct App {
    grid: Grid,
    next_turn: PlayerId,
    players: [String; 2],
    ticker: String,
    game_over: bool,
}

impl App {
    /// Creates the application state from the engine's initial snapshot.
    pub fn new(snapshot: EngineSnapshot) -> Self {
        let ticker = format!("Now playing: {}.", snapshot.next_player_name());
        Self {
            grid: snapshot.grid,
            next_turn: snapshot.next_turn,
            players: snapshot.players,
            ticker,
            game_over: false,
        }
    }

    /// The grid as last reported by the engine.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The seat whose move is being solicited.
    pub fn next_turn(&self) -> PlayerId {
        self.next_turn
    }

    /// Player display names, ordered by seat.
    pub fn players(&self) -> &[String; 2] {
        &self.players
    }

    /// Current ticker line.
    pub fn ticker(&self) -> &str {
        &self.ticker
    }

    /// Whether the game has reached a terminal state.
    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// Handles a game event from the engine.
    pub fn handle_event(&mut self, event: GameEvent) {
        debug!(?event, "Handling game event");

        match event {
            GameEvent::MoveCompleted { snapshot, .. } => {
                self.ticker = format!("Now playing: {}.", snapshot.next_player_name());
                self.grid = snapshot.grid;
                self.next_turn = snapshot.next_turn;
            }
            GameEvent::MoveInvalid {
                column,
                player,
                snapshot,
            } => {
                self.ticker = format!(
                    "{} attempted invalid move: column {}.",
                    snapshot.players[player.index()],
                    column
                );
            }
            GameEvent::GameOver { winner, snapshot } => {
                self.ticker = match winner {
                    Some(id) => format!(
                        "Game over! And the winner is: {}! Press 'q' to quit.",
                        snapshot.players[id.index()]
                    ),
                    None => "The game ended in a draw. Press 'q' to quit.".to_string(),
                };
                self.grid = snapshot.grid;
                self.game_over = true;
            }
        }
    }
}
