//! Core Connect Four domain: grid storage, player identity, and the pure
//! win/draw rules that decide when a game ends.

mod grid;
pub mod rules;
mod types;

pub use grid::{COLUMNS, Grid, MoveError, ROWS};
pub use types::{Outcome, PlayerId};
