//! Four-in-a-row detection.
//!
//! All scans run in a fixed order so the result is reproducible: rows
//! bottom-to-top, columns left-to-right, and for diagonals the down-right
//! direction before down-left. In a valid game only one player can hold a
//! four, so the order never changes who wins — only which line is found
//! first.

use super::super::{Grid, PlayerId};
use tracing::instrument;

/// Checks if either player has connected four in any orientation.
///
/// Horizontal lines are checked first, then vertical, then both diagonal
/// directions.
#[instrument]
pub fn winner(grid: &Grid) -> Option<PlayerId> {
    find_horizontal_four(grid)
        .or_else(|| find_vertical_four(grid))
        .or_else(|| find_diagonal_four(grid))
}

/// Finds a four lying within a single row.
pub fn find_horizontal_four(grid: &Grid) -> Option<PlayerId> {
    for row in 0..grid.rows() {
        for start in 0..grid.columns().saturating_sub(3) {
            let Some(marker) = grid.occupant(start, row) else {
                continue;
            };
            if (1..4).all(|i| grid.occupant(start + i, row) == Some(marker)) {
                return Some(marker);
            }
        }
    }
    None
}

/// Finds a four lying within a single column.
pub fn find_vertical_four(grid: &Grid) -> Option<PlayerId> {
    for start in 0..grid.rows().saturating_sub(3) {
        for column in 0..grid.columns() {
            let Some(marker) = grid.occupant(column, start) else {
                continue;
            };
            if (1..4).all(|i| grid.occupant(column, start + i) == Some(marker)) {
                return Some(marker);
            }
        }
    }
    None
}

/// Finds a four on a diagonal, in either direction.
pub fn find_diagonal_four(grid: &Grid) -> Option<PlayerId> {
    find_in_direction(grid, 1).or_else(|| find_in_direction(grid, -1))
}

/// Scans every diagonal line running in one direction (`dir` is the column
/// step per row climbed: `1` for down-right lines, `-1` for down-left).
fn find_in_direction(grid: &Grid, dir: isize) -> Option<PlayerId> {
    let columns = grid.columns() as isize;
    let rows = grid.rows() as isize;

    // Parameterize each diagonal by the column its row-0 cell would occupy,
    // including starts off the board so every line is covered.
    let first = if dir < 0 { 0 } else { -rows };
    for first_column in first..(columns + rows) {
        let mut cells = Vec::new();
        for row in 0..rows {
            let column = first_column + row * dir;
            if (0..columns).contains(&column) {
                cells.push(grid.occupant(column as usize, row as usize));
            }
        }

        if cells.len() < 4 {
            continue;
        }
        for window in cells.windows(4) {
            if let Some(marker) = window[0] {
                if window.iter().all(|cell| *cell == Some(marker)) {
                    return Some(marker);
                }
            }
        }
    }
    None
}
