//! Game rules for Connect Four.
//!
//! Pure functions for evaluating grid state. Rules are separated from grid
//! storage so the engine and the tests can share one terminal-evaluation
//! path.

pub mod draw;
pub mod win;

pub use draw::is_draw;
pub use win::{find_diagonal_four, find_horizontal_four, find_vertical_four, winner};

use super::{Grid, Outcome};
use tracing::instrument;

/// Evaluates the terminal state of a grid, if any.
///
/// A win takes precedence over a draw: on the move that both connects four
/// and fills the grid, the mover wins.
#[instrument]
pub fn outcome(grid: &Grid) -> Option<Outcome> {
    if let Some(marker) = winner(grid) {
        return Some(Outcome::Winner(marker));
    }
    if grid.is_full() {
        return Some(Outcome::Draw);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::super::PlayerId;
    use super::*;

    #[test]
    fn test_live_grid_has_no_outcome() {
        let mut grid = Grid::new();
        grid.append(3, PlayerId::One).unwrap();
        assert_eq!(outcome(&grid), None);
    }

    #[test]
    fn test_win_takes_precedence_over_full_grid() {
        // Fill the whole board from 2x2 blocks of alternating seats. The
        // blocks leave no horizontal or vertical four but do line up
        // diagonals, so the full grid must read as a win, never a draw.
        let one = [
            PlayerId::One,
            PlayerId::One,
            PlayerId::Two,
            PlayerId::Two,
            PlayerId::One,
            PlayerId::One,
        ];
        let two = [
            PlayerId::Two,
            PlayerId::Two,
            PlayerId::One,
            PlayerId::One,
            PlayerId::Two,
            PlayerId::Two,
        ];

        let mut grid = Grid::new();
        for col in 0..grid.columns() {
            let stack = if matches!(col, 2 | 3 | 6) { two } else { one };
            for marker in stack {
                grid.append(col, marker).unwrap();
            }
        }

        assert!(grid.is_full());
        let expected = winner(&grid).expect("block pattern holds a diagonal four");
        assert_eq!(outcome(&grid), Some(Outcome::Winner(expected)));
    }
}
