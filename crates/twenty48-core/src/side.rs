//! Tilt directions and the coordinate view that makes them interchangeable.
//!
//! A tilt slides every tile toward one edge of the board. Rather than write
//! four variants of the slide/merge routine, the engine works in a
//! side-relative frame in which the tilted-toward edge is always the top row
//! and every line of motion is a column. [`Side::to_board`] maps a
//! side-relative coordinate back to an absolute board coordinate, so a single
//! routine serves all four directions.

use serde::{Deserialize, Serialize};

/// A direction the board can be tilted toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// Toward the top edge (row `size - 1`)
    North,
    /// Toward the bottom edge (row 0)
    South,
    /// Toward the right edge (column `size - 1`)
    East,
    /// Toward the left edge (column 0)
    West,
}

impl Side {
    /// All four sides in declaration order
    pub const ALL: [Side; 4] = [Side::North, Side::South, Side::East, Side::West];

    /// Map a side-relative coordinate to an absolute board coordinate.
    ///
    /// In the side-relative frame for this side, `row == size - 1` is the
    /// edge tiles slide toward and `col` indexes the line of motion. For a
    /// fixed `size` the mapping is a bijection on the grid, so iterating the
    /// relative frame visits every absolute cell exactly once.
    pub fn to_board(self, col: usize, row: usize, size: usize) -> (usize, usize) {
        match self {
            Side::North => (col, row),
            Side::South => (col, size - 1 - row),
            Side::East => (row, col),
            Side::West => (size - 1 - row, col),
        }
    }
}
