//! WebAssembly bindings for the Twenty48 game engine.
//!
//! This module exposes the game engine to JavaScript through wasm-bindgen.

#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

#[cfg(feature = "wasm")]
use crate::board::Tile;
#[cfg(feature = "wasm")]
use crate::bot::{AutoPlayer, Strategy};
#[cfg(feature = "wasm")]
use crate::game::Game;
#[cfg(feature = "wasm")]
use crate::side::Side;

/// Initialize panic hook for better error messages in browser console
#[cfg(feature = "wasm")]
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// WASM-exposed game wrapper
#[cfg(feature = "wasm")]
#[wasm_bindgen]
pub struct WasmGame {
    state: Game,
}

#[cfg(feature = "wasm")]
#[wasm_bindgen]
impl WasmGame {
    /// Create a new game on an empty `size` x `size` board
    #[wasm_bindgen(constructor)]
    pub fn new(size: usize) -> Result<WasmGame, JsValue> {
        if size == 0 {
            return Err(JsValue::from_str("Board size must be positive"));
        }
        Ok(WasmGame {
            state: Game::new(size),
        })
    }

    /// Tilt the board toward "north", "south", "east" or "west".
    /// Returns whether the tilt changed the board.
    pub fn tilt(&mut self, direction: &str) -> Result<bool, JsValue> {
        let side = match direction.to_ascii_lowercase().as_str() {
            "north" => Side::North,
            "south" => Side::South,
            "east" => Side::East,
            "west" => Side::West,
            _ => {
                return Err(JsValue::from_str(&format!(
                    "Unknown direction: {}",
                    direction
                )))
            }
        };
        Ok(self.state.tilt(side))
    }

    /// Add a tile with `value` at `(col, row)`
    #[wasm_bindgen(js_name = addTile)]
    pub fn add_tile(&mut self, value: u32, col: usize, row: usize) -> Result<(), JsValue> {
        self.state
            .add_tile(Tile::new(value, col, row))
            .map_err(|e| JsValue::from_str(&format!("Cannot add tile: {}", e)))
    }

    /// Spawn a random tile and return it as JSON, or "null" on a full board
    #[wasm_bindgen(js_name = addRandomTile)]
    pub fn add_random_tile(&mut self) -> String {
        match self.state.add_random_tile() {
            Some(tile) => serde_json::to_string(&tile).unwrap_or_else(|_| "null".to_string()),
            None => "null".to_string(),
        }
    }

    /// Reset the board and score, keeping the max score
    pub fn clear(&mut self) {
        self.state.clear();
    }

    /// Get the full game state as JSON
    #[wasm_bindgen(js_name = getState)]
    pub fn get_state(&self) -> String {
        serde_json::to_string(&self.state).unwrap_or_else(|_| "{}".to_string())
    }

    /// Get the tile at `(col, row)` as JSON, "null" for an empty cell
    #[wasm_bindgen(js_name = getTile)]
    pub fn get_tile(&self, col: usize, row: usize) -> Result<String, JsValue> {
        match self.state.tile(col, row) {
            Ok(Some(tile)) => {
                Ok(serde_json::to_string(&tile).unwrap_or_else(|_| "null".to_string()))
            }
            Ok(None) => Ok("null".to_string()),
            Err(e) => Err(JsValue::from_str(&format!("Cannot read tile: {}", e))),
        }
    }

    /// Render the board in the canonical text layout (for debugging)
    pub fn render(&self) -> String {
        self.state.to_string()
    }

    /// Current score
    pub fn score(&self) -> u32 {
        self.state.score()
    }

    /// Best final score across games
    #[wasm_bindgen(js_name = maxScore)]
    pub fn max_score(&self) -> u32 {
        self.state.max_score()
    }

    /// Whether the game has ended
    #[wasm_bindgen(js_name = isGameOver)]
    pub fn is_game_over(&self) -> bool {
        self.state.is_game_over()
    }

    /// Board side length
    pub fn size(&self) -> usize {
        self.state.size()
    }

    /// Get an automated player's suggested tilt as JSON, "null" if none.
    /// strategy: "Random", "Greedy", or "Corner"
    #[wasm_bindgen(js_name = getBotMove)]
    pub fn get_bot_move(&self, strategy: &str) -> String {
        let strategy = match strategy {
            "Random" => Strategy::Random,
            "Greedy" => Strategy::Greedy,
            "Corner" => Strategy::Corner,
            _ => Strategy::Greedy,
        };

        let mut player = AutoPlayer::new(strategy);
        match player.choose_move(&self.state) {
            Some(side) => serde_json::to_string(&side).unwrap_or_else(|_| "null".to_string()),
            None => "null".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_wasm_module_compiles() {
        // This test just verifies the module compiles
        assert!(true);
    }
}
