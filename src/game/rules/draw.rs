//! Draw detection.

use super::super::Grid;
use super::win::winner;
use tracing::instrument;

/// Checks whether the game ended in a draw: a full grid with no four on the
/// board for either player.
#[instrument]
pub fn is_draw(grid: &Grid) -> bool {
    grid.is_full() && winner(grid).is_none()
}
