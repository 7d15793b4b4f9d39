//! Grid storage: per-column disc stacks with bounded append.

use super::types::PlayerId;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

/// Number of columns on a standard board.
pub const COLUMNS: usize = 7;
/// Number of rows on a standard board.
pub const ROWS: usize = 6;

/// Why a move was rejected. Both cases are recoverable: the engine reports
/// them and re-requests a move from the same player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// The column index lies outside the board.
    #[display("column {column} is out of range")]
    ColumnOutOfRange {
        /// The rejected column index.
        column: usize,
    },
    /// The column already holds a full stack of discs.
    #[display("column {column} is already full")]
    ColumnFull {
        /// The rejected column index.
        column: usize,
    },
}

/// The board: one disc stack per column, bottom-to-top insertion order.
///
/// A cell `(col, row)` is occupied iff `row < fill_depth(col)`; row 0 is the
/// bottom of the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    columns: usize,
    rows: usize,
    data: Vec<Vec<PlayerId>>,
}

impl Grid {
    /// Creates an empty standard 7x6 grid.
    pub fn new() -> Self {
        Self {
            columns: COLUMNS,
            rows: ROWS,
            data: vec![Vec::new(); COLUMNS],
        }
    }

    /// Number of columns.
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Drops a disc into a column.
    ///
    /// Fails with [`MoveError::ColumnOutOfRange`] or [`MoveError::ColumnFull`]
    /// without touching the grid.
    pub fn append(&mut self, column: usize, marker: PlayerId) -> Result<(), MoveError> {
        if column >= self.columns {
            return Err(MoveError::ColumnOutOfRange { column });
        }
        if self.data[column].len() >= self.rows {
            return Err(MoveError::ColumnFull { column });
        }
        self.data[column].push(marker);
        Ok(())
    }

    /// The marker at a cell, or `None` if the cell is empty or out of bounds.
    pub fn occupant(&self, column: usize, row: usize) -> Option<PlayerId> {
        self.data.get(column)?.get(row).copied()
    }

    /// Number of discs dropped into a column so far.
    pub fn fill_depth(&self, column: usize) -> usize {
        self.data.get(column).map_or(0, Vec::len)
    }

    /// Whether a column has no room left. Out-of-range columns count as full.
    pub fn is_column_full(&self, column: usize) -> bool {
        column >= self.columns || self.data[column].len() >= self.rows
    }

    /// Whether every column is full.
    pub fn is_full(&self) -> bool {
        self.data.iter().all(|stack| stack.len() >= self.rows)
    }

    /// Columns that still have room, in left-to-right order.
    pub fn open_columns(&self) -> Vec<usize> {
        (0..self.columns)
            .filter(|&col| !self.is_column_full(col))
            .collect()
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}
