//! Integration tests for the Twenty48 game engine.
//!
//! These tests verify complete game flows: tilting, scoring, spawning, and
//! the session lifecycle from a fresh board to game over.

use pretty_assertions::{assert_eq, assert_ne};
use rand::rngs::StdRng;
use rand::SeedableRng;
use twenty48_core::*;

/// Build a game from a value grid, top row first, with a clean score
fn game_from(raw: &[Vec<u32>]) -> Game {
    Game::from_raw(raw, 0, 0, false)
}

/// Sum of every tile value on the board
fn board_sum(game: &Game) -> u32 {
    game.board().iter_tiles().map(|t| t.value()).sum()
}

/// Drive a game with an automated player, spawning after each tilt and
/// checking the core invariants on every move. Returns the number of tilts
/// made before the game ended or the cap was reached.
fn play_out(game: &mut Game, player: &mut AutoPlayer, rng: &mut StdRng, max_moves: usize) -> usize {
    let mut moves = 0;

    while moves < max_moves && !game.is_game_over() {
        let side = match player.choose_move(game) {
            Some(side) => side,
            None => break,
        };

        let sum_before = board_sum(game);
        let score_before = game.score();
        let changed = game.tilt(side);

        assert!(changed, "The chosen tilt should always change the board");
        assert_eq!(
            board_sum(game),
            sum_before,
            "Tilting must conserve the total tile value"
        );
        assert!(
            game.score() >= score_before,
            "Score must never decrease during play"
        );

        if !game.is_game_over() {
            let sum_after_tilt = board_sum(game);
            if let Some(tile) = game.add_random_tile_with_rng(rng) {
                assert!(
                    tile.value() == 2 || tile.value() == 4,
                    "Spawned tiles should be worth 2 or 4"
                );
                assert_eq!(
                    board_sum(game),
                    sum_after_tilt + tile.value(),
                    "A spawn adds exactly the spawned tile's value"
                );
            }
        }
        moves += 1;
    }
    moves
}

#[test]
fn test_seeded_game_runs_to_completion() {
    let mut game = Game::new(2);
    let mut player = AutoPlayer::with_seed(Strategy::Corner, 99);
    let mut rng = StdRng::seed_from_u64(99);
    let max_moves = 10_000;

    game.add_random_tile_with_rng(&mut rng).unwrap();
    let moves = play_out(&mut game, &mut player, &mut rng, max_moves);

    assert!(moves > 0, "The opening position should allow at least one tilt");
    assert!(
        game.is_game_over(),
        "A 2x2 session must end within {} moves",
        max_moves
    );
    assert_eq!(
        game.max_score(),
        game.score(),
        "Finishing the first game should record its score as the max"
    );
}

#[test]
fn test_greedy_game_preserves_invariants_on_the_standard_board() {
    let mut game = Game::new(4);
    let mut player = AutoPlayer::with_seed(Strategy::Greedy, 7);
    let mut rng = StdRng::seed_from_u64(7);
    let max_moves = 500;

    game.add_random_tile_with_rng(&mut rng).unwrap();
    game.add_random_tile_with_rng(&mut rng).unwrap();
    let moves = play_out(&mut game, &mut player, &mut rng, max_moves);

    assert!(
        moves == max_moves || game.is_game_over(),
        "Play should stop only at the cap or at game over"
    );
    assert!(
        game.board().iter_tiles().count() > 0,
        "The board should still hold tiles after play"
    );
}

#[test]
fn test_score_delta_matches_the_merged_values() {
    let mut game = game_from(&[
        vec![2, 0, 0, 0],
        vec![2, 0, 0, 0],
        vec![4, 0, 0, 0],
        vec![4, 0, 0, 0],
    ]);
    assert_eq!(board_sum(&game), 12);

    // One tilt makes a 4 and an 8, worth 12 points together
    game.tilt(Side::North);
    assert_eq!(game.score(), 12);
    assert_eq!(board_sum(&game), 12, "Merging never changes the board total");

    // The locked results cannot merge again
    assert!(!game.tilt(Side::North));
    assert_eq!(game.score(), 12);
}

#[test]
fn test_session_lifecycle_keeps_the_best_score() {
    // First game: restored mid-session, then tilted into a dead position
    let mut game = Game::from_raw(&[vec![2, 4], vec![4, 2]], 30, 0, false);
    assert!(!game.tilt(Side::North));
    assert!(game.is_game_over());
    assert_eq!(game.max_score(), 30);

    // Second game: clear keeps the max but resets everything else
    game.clear();
    assert_eq!(game.score(), 0);
    assert_eq!(game.max_score(), 30);
    assert!(!game.is_game_over());

    game.add_tile(Tile::new(2, 0, 0)).unwrap();
    game.add_tile(Tile::new(2, 1, 0)).unwrap();
    game.tilt(Side::West);
    assert_eq!(game.score(), 4);

    // Fill the rest of the board into a dead position
    game.add_tile(Tile::new(8, 1, 0)).unwrap();
    game.add_tile(Tile::new(2, 0, 1)).unwrap();
    game.add_tile(Tile::new(4, 1, 1)).unwrap();
    assert!(game.is_game_over());
    assert_eq!(
        game.max_score(),
        30,
        "A weaker second game should not lower the recorded best"
    );
}

#[test]
fn test_winning_tile_ends_the_game_immediately() {
    let mut game = game_from(&[
        vec![1024, 0, 0, 0],
        vec![1024, 0, 0, 0],
        vec![0, 0, 0, 0],
        vec![0, 0, 0, 0],
    ]);

    assert!(game.tilt(Side::North));
    assert_eq!(game.tile(0, 3).unwrap().unwrap().value(), MAX_PIECE);
    assert!(
        game.is_game_over(),
        "Reaching the winning tile ends the game even with room to move"
    );
    assert_eq!(game.score(), 2048);
    assert_eq!(game.max_score(), 2048);

    let mut player = AutoPlayer::with_seed(Strategy::Random, 5);
    assert_eq!(
        player.choose_move(&game),
        None,
        "No further moves should be offered on a won game"
    );
}

#[test]
fn test_render_shows_the_full_session_state() {
    let game = Game::from_raw(
        &[
            vec![0, 0, 0, 0],
            vec![0, 0, 0, 0],
            vec![0, 2, 0, 0],
            vec![0, 0, 0, 4],
        ],
        0,
        8,
        false,
    );

    let expected = "\n\
        [\n\
        |    |    |    |    |\n\
        |    |    |    |    |\n\
        |    |   2|    |    |\n\
        |    |    |    |   4|\n\
        ] 0 (max: 8) (game is not over) \n";
    assert_eq!(game.to_string(), expected);
}

#[test]
fn test_equality_ignores_construction_history() {
    let mut played = game_from(&[vec![0, 0], vec![2, 2]]);
    played.tilt(Side::East);

    let restored = Game::from_raw(&[vec![0, 0], vec![0, 4]], 4, 0, false);
    assert_eq!(played, restored, "Same rendered state means equal games");

    let different_max = Game::from_raw(&[vec![0, 0], vec![0, 4]], 4, 9, false);
    assert_ne!(played, different_max, "Max score is part of game equality");
}

#[test]
fn test_state_round_trips_through_json() {
    let mut game = game_from(&[vec![2, 0], vec![2, 0]]);
    game.tilt(Side::North);

    let json = serde_json::to_string(&game).unwrap();
    let restored: Game = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, game, "Serialized state should restore identically");
    assert_eq!(restored.score(), 4);
    assert_eq!(restored.tile(0, 1).unwrap().unwrap().value(), 4);
}

#[test]
fn test_placement_errors_name_the_offending_cell() {
    let mut game = Game::new(4);
    game.add_tile(Tile::new(2, 1, 1)).unwrap();

    let occupied = game.add_tile(Tile::new(4, 1, 1)).unwrap_err();
    assert!(matches!(occupied, BoardError::OccupiedCell { col: 1, row: 1 }));
    assert_eq!(occupied.to_string(), "Cell (1, 1) already holds a tile");

    let outside = game.add_tile(Tile::new(2, 4, 0)).unwrap_err();
    assert!(matches!(
        outside,
        BoardError::OutOfBounds { col: 4, row: 0, size: 4 }
    ));
    assert_eq!(outside.to_string(), "Cell (4, 0) is outside the 4x4 board");
}
