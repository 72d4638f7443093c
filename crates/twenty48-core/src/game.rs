//! Game state and rules for Twenty48.
//!
//! This module contains:
//! - `Game`: the complete game state and its rule methods
//! - The tilt logic that slides and merges tiles toward a side
//! - Game-over detection, scoring, and the canonical text rendering
//!
//! All four tilt directions share one side-relative routine: coordinates are
//! transformed through [`Side::to_board`] so the merge rules are written
//! once, for a board that always tilts toward its own top edge.

use std::fmt;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::board::{Board, BoardError, Tile};
use crate::side::Side;

/// The tile value that ends the game as a win
pub const MAX_PIECE: u32 = 2048;

/// Complete state of one Twenty48 game.
///
/// Holds the board, the running score, the best final score seen across
/// games, and a cached game-over flag. The flag is recomputed after every
/// mutation so queries and rendering never have to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    /// Grid of tiles
    board: Board,
    /// Points earned by merges since the last clear
    score: u32,
    /// Highest final score across finished games
    max_score: u32,
    /// Whether the game has ended, cached from the last mutation
    game_over: bool,
}

impl Game {
    /// Create a new game on an empty `size` x `size` board
    pub fn new(size: usize) -> Self {
        Self {
            board: Board::new(size),
            score: 0,
            max_score: 0,
            game_over: false,
        }
    }

    /// Restore a game from a raw value grid, top row first.
    ///
    /// `raw[0]` is the top row of the board and a value of 0 leaves the cell
    /// empty. The game-over flag is stored verbatim rather than recomputed,
    /// so a snapshot round-trips exactly even when the flag disagrees with
    /// the board.
    pub fn from_raw(raw: &[Vec<u32>], score: u32, max_score: u32, game_over: bool) -> Self {
        Self {
            board: Board::from_raw(raw),
            score,
            max_score,
            game_over,
        }
    }

    // ==================== Queries ====================

    /// The underlying board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Board side length
    pub fn size(&self) -> usize {
        self.board.size()
    }

    /// The tile at `(col, row)`, or `None` for an empty cell
    pub fn tile(&self, col: usize, row: usize) -> Result<Option<Tile>, BoardError> {
        self.board.tile(col, row)
    }

    /// Points earned by merges since the last clear
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Highest final score across finished games
    pub fn max_score(&self) -> u32 {
        self.max_score
    }

    /// Whether the game has ended.
    ///
    /// True once a tile reaches [`MAX_PIECE`] or the board is full with no
    /// adjacent equal pair left to merge.
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    // ==================== Setup ====================

    /// Add `tile` to the board.
    ///
    /// Errors if the cell is occupied or out of bounds. The new tile may
    /// fill the last empty cell or reach the winning value, so the
    /// game-over state is refreshed.
    pub fn add_tile(&mut self, tile: Tile) -> Result<(), BoardError> {
        self.board.add_tile(tile)?;
        self.refresh_game_over();
        Ok(())
    }

    /// Spawn a random tile in a uniformly chosen empty cell.
    ///
    /// New tiles are worth 2 nine times out of ten and 4 otherwise. Returns
    /// the spawned tile, or `None` when the board is full.
    pub fn add_random_tile(&mut self) -> Option<Tile> {
        let mut rng = rand::thread_rng();
        self.add_random_tile_with_rng(&mut rng)
    }

    /// Spawn a random tile using the supplied generator, for reproducible
    /// games
    pub fn add_random_tile_with_rng<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Tile> {
        let empties = self.board.empty_cells();
        let &(col, row) = empties.choose(rng)?;
        let value = if rng.gen_range(0..10) < 9 { 2 } else { 4 };

        let tile = Tile::new(value, col, row);
        self.board.add_tile(tile).ok()?;
        self.refresh_game_over();
        Some(tile)
    }

    /// Reset the board and current score for a fresh game.
    ///
    /// The max score survives so the best result outlives any single game.
    pub fn clear(&mut self) {
        self.board.clear();
        self.score = 0;
        self.game_over = false;
    }

    // ==================== Tilting ====================

    /// Tilt the board toward `side`, sliding and merging every tile.
    ///
    /// Each line of cells parallel to the motion is handled independently.
    /// Tiles slide as far as they can; a tile that reaches an equal value
    /// merges into one doubled tile, and each merge result is frozen for
    /// the rest of the tilt so merges never chain. Every merge adds the new
    /// tile's value to the score. Returns whether anything moved.
    pub fn tilt(&mut self, side: Side) -> bool {
        let mut changed = false;
        for col in 0..self.size() {
            if self.tilt_column(side, col) {
                changed = true;
            }
        }
        self.refresh_game_over();
        changed
    }

    /// Tilt a single side-relative column.
    ///
    /// Rows are processed nearest the destination edge first, so a tile
    /// never has to pass through an unresolved neighbor. `last_merge` holds
    /// the row of this column's most recent merge result, which locks that
    /// tile against merging again in the same tilt.
    fn tilt_column(&mut self, side: Side, col: usize) -> bool {
        let size = self.size();
        let mut changed = false;
        let mut last_merge: Option<usize> = None;

        for row in (0..size).rev() {
            let (abs_col, abs_row) = side.to_board(col, row, size);
            let tile = match self.board.get(abs_col, abs_row) {
                Some(tile) => tile,
                None => continue,
            };

            let dest = self.destination(side, col, row, tile.value(), last_merge);
            if dest == row {
                continue;
            }

            let (dest_col, dest_row) = side.to_board(col, dest, size);
            if let Some(merged) = self.board.slide(dest_col, dest_row, tile) {
                self.score += merged.value();
                last_merge = Some(dest);
            }
            changed = true;
        }
        changed
    }

    /// Where the tile at side-relative `(col, row)` comes to rest.
    ///
    /// Scans toward the destination edge for the first occupied cell. An
    /// equal-valued blocker absorbs the tile unless it already took a merge
    /// this tilt; any other blocker stops the tile one cell short. No
    /// blocker means the tile slides all the way to the edge.
    fn destination(
        &self,
        side: Side,
        col: usize,
        row: usize,
        value: u32,
        last_merge: Option<usize>,
    ) -> usize {
        let size = self.size();
        for ahead in (row + 1)..size {
            let (abs_col, abs_row) = side.to_board(col, ahead, size);
            if let Some(blocker) = self.board.get(abs_col, abs_row) {
                if blocker.value() == value && last_merge != Some(ahead) {
                    return ahead;
                }
                return ahead - 1;
            }
        }
        size - 1
    }

    // ==================== Game over ====================

    /// Recompute the cached game-over state after a mutation.
    ///
    /// A finished game folds its score into the max score.
    fn refresh_game_over(&mut self) {
        self.game_over = self.max_tile_exists() || !self.any_move_exists();
        if self.game_over {
            self.max_score = self.max_score.max(self.score);
        }
    }

    /// Whether any tile has reached the winning value
    fn max_tile_exists(&self) -> bool {
        self.board.iter_tiles().any(|tile| tile.value() == MAX_PIECE)
    }

    /// Whether some tilt could still change the board.
    ///
    /// True while an empty cell remains or two orthogonal neighbors hold
    /// equal values.
    fn any_move_exists(&self) -> bool {
        if !self.board.is_full() {
            return true;
        }
        let size = self.size();
        self.board.iter_tiles().any(|tile| {
            let (col, row) = (tile.col(), tile.row());
            let matches_right = col + 1 < size
                && self
                    .board
                    .get(col + 1, row)
                    .is_some_and(|t| t.value() == tile.value());
            let matches_above = row + 1 < size
                && self
                    .board
                    .get(col, row + 1)
                    .is_some_and(|t| t.value() == tile.value());
            matches_right || matches_above
        })
    }
}

// ==================== Rendering ====================

impl fmt::Display for Game {
    /// Render the grid with one row per line, top row first, followed by
    /// the score line
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "[")?;
        for row in (0..self.size()).rev() {
            for col in 0..self.size() {
                match self.board.get(col, row) {
                    Some(tile) => write!(f, "|{:>4}", tile.value())?,
                    None => write!(f, "|    ")?,
                }
            }
            writeln!(f, "|")?;
        }
        let over = if self.game_over { "over" } else { "not over" };
        writeln!(
            f,
            "] {} (max: {}) (game is {}) ",
            self.score, self.max_score, over
        )
    }
}

impl PartialEq for Game {
    /// Two games are equal when they render identically: same tiles, same
    /// score, same max score, same game-over state
    fn eq(&self, other: &Self) -> bool {
        self.to_string() == other.to_string()
    }
}

impl Eq for Game {}
