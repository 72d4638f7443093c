//! Twenty48 - A sliding-tile puzzle game engine
//!
//! This crate provides the core game logic for Twenty48, including:
//! - Board representation with bounds-checked tile access
//! - Tilt mechanics that slide and merge tiles toward any side
//! - Scoring, game-over detection, and the canonical text rendering
//! - Automated players for driving games without a UI
//!
//! # Architecture
//!
//! The game engine is designed to be platform-agnostic. It can be compiled to:
//! - Native Rust for terminal or server-side play
//! - WebAssembly for client-side play in the browser
//!
//! # Modules
//!
//! - [`side`]: The four tilt directions and their coordinate frames
//! - [`board`]: Game board representation and tile storage
//! - [`game`]: Game state with tilt rules, scoring, and game-over detection
//! - [`bot`]: Automated move selection

pub mod board;
pub mod bot;
pub mod game;
pub mod side;
#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export commonly used types
pub use board::{Board, BoardError, Tile};
pub use bot::{AutoPlayer, Strategy};
pub use game::{Game, MAX_PIECE};
pub use side::Side;
