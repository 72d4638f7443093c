//! Automated players for Twenty48.
//!
//! This module provides different move-selection strategies:
//! - Random: any tilt that changes the board
//! - Greedy: the tilt that earns the most points right now
//! - Corner: a fixed direction preference that herds tiles into one corner

use crate::game::Game;
use crate::side::Side;
use rand::prelude::*;
use serde::{Deserialize, Serialize};

/// Move-selection strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Strategy {
    Random,
    Greedy,
    Corner,
}

/// An automated player that picks the next tilt for a game
pub struct AutoPlayer {
    pub strategy: Strategy,
    rng: StdRng,
}

impl AutoPlayer {
    pub fn new(strategy: Strategy) -> Self {
        Self {
            strategy,
            rng: StdRng::from_entropy(),
        }
    }

    pub fn with_seed(strategy: Strategy, seed: u64) -> Self {
        Self {
            strategy,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Choose the next tilt, or `None` when no tilt can change the board
    pub fn choose_move(&mut self, game: &Game) -> Option<Side> {
        if game.is_game_over() {
            return None;
        }

        let candidates = Self::changing_sides(game);
        if candidates.is_empty() {
            return None;
        }

        match self.strategy {
            Strategy::Random => self.choose_random(&candidates),
            Strategy::Greedy => self.choose_greedy(game, &candidates),
            Strategy::Corner => self.choose_corner(&candidates),
        }
    }

    /// Sides whose tilt would move or merge at least one tile
    fn changing_sides(game: &Game) -> Vec<Side> {
        Side::ALL
            .into_iter()
            .filter(|&side| {
                let mut preview = game.clone();
                preview.tilt(side)
            })
            .collect()
    }

    /// Random: any changing tilt is as good as another
    fn choose_random(&mut self, candidates: &[Side]) -> Option<Side> {
        candidates.choose(&mut self.rng).copied()
    }

    /// Greedy: take the tilt that earns the most points immediately.
    ///
    /// Ties keep the earlier candidate, so a scoreless position still
    /// yields a deterministic move.
    fn choose_greedy(&mut self, game: &Game, candidates: &[Side]) -> Option<Side> {
        let mut best_side = None;
        let mut best_gain = 0;

        for &side in candidates {
            let mut preview = game.clone();
            preview.tilt(side);
            let gained = preview.score() - game.score();
            if best_side.is_none() || gained > best_gain {
                best_side = Some(side);
                best_gain = gained;
            }
        }
        best_side
    }

    /// Corner: keep the stack packed toward the north-west corner.
    fn choose_corner(&mut self, candidates: &[Side]) -> Option<Side> {
        // Preference order for the corner strategy:
        // 1. North and West keep tiles in the target corner
        // 2. East recovers when neither can move
        // 3. South only as a last resort
        const PREFERRED: [Side; 4] = [Side::North, Side::West, Side::East, Side::South];
        PREFERRED.into_iter().find(|side| candidates.contains(side))
    }
}
