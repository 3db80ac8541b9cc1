//! Full games through the driver.

use rand::rngs::StdRng;
use rand::SeedableRng;

use draughts_engine::board::prelude::*;
use draughts_engine::game::{play_game, EnginePlayer, Outcome, RandomPlayer, SilentObserver};

#[test]
fn engine_against_random_player() {
    let mut board = Board::new();
    let mut white = EnginePlayer::new(3);
    let mut black = RandomPlayer::new(StdRng::seed_from_u64(2024));

    let record = play_game(&mut board, &mut white, &mut black, 120, &mut SilentObserver).unwrap();
    assert_eq!(board.history().len(), record.plies);
    assert!(record.plies > 0);
    if let Outcome::WonBy(winner) = record.outcome {
        assert!(board.legal_moves().is_empty());
        assert_eq!(board.side_to_move(), winner.opponent());
    }
}

#[test]
fn game_can_be_replayed_backwards() {
    let mut board = Board::new();
    let mut white = RandomPlayer::new(StdRng::seed_from_u64(5));
    let mut black = RandomPlayer::new(StdRng::seed_from_u64(6));

    let record = play_game(&mut board, &mut white, &mut black, 80, &mut SilentObserver).unwrap();
    for _ in 0..record.plies {
        board.pop().unwrap();
    }
    assert_eq!(board, Board::new());
}

#[test]
fn same_seeds_same_game() {
    let play = || {
        let mut board = Board::new();
        let mut white = RandomPlayer::new(StdRng::seed_from_u64(77));
        let mut black = RandomPlayer::new(StdRng::seed_from_u64(78));
        play_game(&mut board, &mut white, &mut black, 50, &mut SilentObserver).unwrap();
        board.history().to_vec()
    };
    assert_eq!(play(), play());
}
