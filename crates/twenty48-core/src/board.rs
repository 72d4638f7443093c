//! Board storage for the Twenty48 grid.
//!
//! This module contains:
//! - `Tile`: an immutable numbered tile bound to a cell
//! - `Board`: the square grid with placement and relocation primitives
//! - `BoardError`: fail-fast errors for caller misuse
//!
//! The board knows nothing about merge rules or scoring. It stores tiles,
//! validates coordinates, and executes the moves the game logic asks for.
//! Coordinates are (column, row) with (0, 0) at the bottom-left.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised by grid accessors and mutators.
///
/// Both variants indicate a programming error in the caller, not a
/// recoverable condition; coordinates are never silently clamped.
#[derive(Debug, Clone, Error, Serialize, Deserialize)]
pub enum BoardError {
    #[error("Cell ({col}, {row}) is outside the {size}x{size} board")]
    OutOfBounds { col: usize, row: usize, size: usize },

    #[error("Cell ({col}, {row}) already holds a tile")]
    OccupiedCell { col: usize, row: usize },
}

/// A single numbered tile bound to a board cell.
///
/// Tiles are immutable values. Sliding or merging produces a new tile at the
/// destination cell and the old tile ceases to exist; a tile's value never
/// changes in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tile {
    value: u32,
    col: usize,
    row: usize,
}

impl Tile {
    /// Create a tile with `value` at `(col, row)`
    pub const fn new(value: u32, col: usize, row: usize) -> Self {
        Self { value, col, row }
    }

    /// The tile's numeric value
    pub const fn value(&self) -> u32 {
        self.value
    }

    /// Column of the cell holding this tile
    pub const fn col(&self) -> usize {
        self.col
    }

    /// Row of the cell holding this tile
    pub const fn row(&self) -> usize {
        self.row
    }
}

/// The square grid of cells, each holding at most one tile.
///
/// Invariant: a tile stored in a cell always records that cell as its
/// position.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    cells: Vec<Option<Tile>>,
}

impl Board {
    /// Create an empty `size` x `size` board
    pub fn new(size: usize) -> Self {
        assert!(size >= 1, "Must have a positive board size");
        Self {
            size,
            cells: vec![None; size * size],
        }
    }

    /// Build a board from a value grid, top row first.
    ///
    /// `raw[0]` is the top row of the board (row `size - 1`), matching the
    /// rendered layout so fixture literals read like the display output. A
    /// value of 0 leaves the cell empty.
    pub fn from_raw(raw: &[Vec<u32>]) -> Self {
        let size = raw.len();
        assert!(size >= 1, "Must provide at least one row");
        for row in raw {
            assert_eq!(row.len(), size, "Must provide a square snapshot");
        }

        let mut board = Self::new(size);
        for (r, values) in raw.iter().enumerate() {
            for (c, &value) in values.iter().enumerate() {
                if value != 0 {
                    let row = size - 1 - r;
                    let idx = board.index(c, row);
                    board.cells[idx] = Some(Tile::new(value, c, row));
                }
            }
        }
        board
    }

    // ==================== Queries ====================

    /// Board side length
    pub fn size(&self) -> usize {
        self.size
    }

    /// The tile at `(col, row)`, or `None` for an empty cell
    pub fn tile(&self, col: usize, row: usize) -> Result<Option<Tile>, BoardError> {
        self.check_bounds(col, row)?;
        Ok(self.cells[self.index(col, row)])
    }

    /// Whether every cell holds a tile
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_some())
    }

    /// Coordinates of every empty cell
    pub fn empty_cells(&self) -> Vec<(usize, usize)> {
        let mut empties = Vec::new();
        for row in 0..self.size {
            for col in 0..self.size {
                if self.cells[self.index(col, row)].is_none() {
                    empties.push((col, row));
                }
            }
        }
        empties
    }

    /// Iterate over every tile on the board
    pub fn iter_tiles(&self) -> impl Iterator<Item = Tile> + '_ {
        self.cells.iter().filter_map(|cell| *cell)
    }

    /// Infallible lookup for internal callers whose coordinates are already
    /// in bounds
    pub(crate) fn get(&self, col: usize, row: usize) -> Option<Tile> {
        self.cells[self.index(col, row)]
    }

    // ==================== Mutations ====================

    /// Place `tile` at its declared position
    pub fn add_tile(&mut self, tile: Tile) -> Result<(), BoardError> {
        self.check_bounds(tile.col(), tile.row())?;
        let idx = self.index(tile.col(), tile.row());
        if self.cells[idx].is_some() {
            return Err(BoardError::OccupiedCell {
                col: tile.col(),
                row: tile.row(),
            });
        }
        self.cells[idx] = Some(tile);
        Ok(())
    }

    /// Relocate an existing tile to `(col, row)`, merging with any occupant.
    ///
    /// An occupied destination merges: a new tile whose value is the sum of
    /// both replaces the occupant and is returned so the caller can account
    /// for it. An empty destination is a plain move and returns `None`. The
    /// caller is responsible for only requesting legal moves; equal-value
    /// merging and no-jumping are not validated here.
    pub fn move_tile(
        &mut self,
        col: usize,
        row: usize,
        tile: Tile,
    ) -> Result<Option<Tile>, BoardError> {
        self.check_bounds(col, row)?;
        Ok(self.slide(col, row, tile))
    }

    /// Remove every tile
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// Move mechanics shared by [`Board::move_tile`] and the tilt loop,
    /// whose transformed coordinates are in bounds by construction
    pub(crate) fn slide(&mut self, col: usize, row: usize, tile: Tile) -> Option<Tile> {
        let from = self.index(tile.col(), tile.row());
        debug_assert_eq!(
            self.cells[from],
            Some(tile),
            "tile is not at its recorded cell"
        );
        self.cells[from] = None;

        let to = self.index(col, row);
        match self.cells[to] {
            Some(occupant) => {
                debug_assert_eq!(occupant.value(), tile.value(), "merge requires equal values");
                let merged = Tile::new(occupant.value() + tile.value(), col, row);
                self.cells[to] = Some(merged);
                Some(merged)
            }
            None => {
                self.cells[to] = Some(Tile::new(tile.value(), col, row));
                None
            }
        }
    }

    // ==================== Validation ====================

    fn check_bounds(&self, col: usize, row: usize) -> Result<(), BoardError> {
        if col >= self.size || row >= self.size {
            return Err(BoardError::OutOfBounds {
                col,
                row,
                size: self.size,
            });
        }
        Ok(())
    }

    fn index(&self, col: usize, row: usize) -> usize {
        row * self.size + col
    }
}
