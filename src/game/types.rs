//! Player identity and game outcome types.

use serde::{Deserialize, Serialize};

/// Identity of one of the two seats at the board.
///
/// Doubles as the occupant marker stored in the grid: a cell's "color" is
/// the identity of the player who dropped the disc.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerId {
    /// First seat (moves first).
    One,
    /// Second seat.
    Two,
}

impl PlayerId {
    /// Returns the opposing seat.
    pub fn other(self) -> Self {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One,
        }
    }

    /// Seat position, usable as an index into an ordered player pair.
    pub fn index(self) -> usize {
        match self {
            PlayerId::One => 0,
            PlayerId::Two => 1,
        }
    }
}

/// Terminal result of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// A player connected four.
    Winner(PlayerId),
    /// The grid filled up with no four on the board.
    Draw,
}

impl Outcome {
    /// The winning seat, or `None` for a draw.
    pub fn winner(self) -> Option<PlayerId> {
        match self {
            Outcome::Winner(id) => Some(id),
            Outcome::Draw => None,
        }
    }
}
