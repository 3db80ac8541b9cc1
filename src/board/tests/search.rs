//! Search algorithm tests.
//!
//! Tests for the root search, alpha-beta and the static evaluation.

use super::board_of;
use crate::board::search::{
    alpha_beta_value, find_best_chain, minimax_value, search, search_with, SearchParams,
};
use crate::board::{Board, Color, Coord};

// ============================================================================
// Evaluation
// ============================================================================

#[test]
fn evaluate_counts_material_from_both_sides() {
    let board = Board::new();
    assert_eq!(board.evaluate(Color::White), 1);
    assert_eq!(board.evaluate(Color::Black), 1);

    let board = Board::from_notation("X,o");
    assert_eq!(board.evaluate(Color::White), 5);
    assert_eq!(board.evaluate(Color::Black), -3);
}

#[test]
fn evaluate_empty_board() {
    assert_eq!(Board::empty().evaluate(Color::White), 1);
}

// ============================================================================
// Root search
// ============================================================================

#[test]
fn search_takes_forced_capture() {
    let board = Board::from_notation(",,....o,...x");
    let best = search(&board, 3).expect("White has a capture");
    assert_eq!(best.to(), Coord(5, 1));
    assert!(board.history().is_empty());
}

#[test]
fn search_returns_none_without_moves() {
    let board = Board::from_notation(",.o........,,.o........,,,,,,");
    assert!(search(&board, 4).is_none());

    let mut board = board;
    let result = search_with(&mut board, &SearchParams::with_depth(4), None);
    assert!(result.best_chain.is_none());
    assert!(result.value.is_none());
    assert_eq!(result.stats.nodes, 0);
}

#[test]
fn search_avoids_hanging_a_man() {
    // Stepping to (4, 5) lets the black man on (3, 4) capture it.
    let position = [((5, 6), 'x'), ((3, 4), 'o'), ((9, 9), 'x')];

    // One ply deep every move looks the same, so the first one is kept.
    let shallow = search(&board_of(&position, Color::White), 1).unwrap();
    assert_eq!(shallow.to(), Coord(4, 5));

    for depth in 2..=4 {
        let mut board = board_of(&position, Color::White);
        let result = search_with(&mut board, &SearchParams::with_depth(depth), None);
        let best = result.best_chain.unwrap();
        assert_eq!(best.from(), Coord(5, 6), "depth {depth}");
        assert_eq!(best.to(), Coord(6, 5), "depth {depth}");
        assert_eq!(result.value, Some(2));
    }
}

#[test]
fn search_keeps_first_chain_on_ties() {
    let board = Board::new();
    let first = Board::new().legal_moves().remove(0);
    for depth in 1..=3 {
        assert_eq!(search(&board, depth), Some(first.clone()), "depth {depth}");
    }
}

#[test]
fn search_depth_zero_behaves_like_depth_one() {
    let mut board = Board::new();
    let zero = search_with(&mut board, &SearchParams::with_depth(0), None);
    let one = search_with(&mut board, &SearchParams::with_depth(1), None);

    assert_eq!(zero.best_chain, one.best_chain);
    assert_eq!(zero.value, one.value);
    assert_eq!(zero.stats, one.stats);
}

#[test]
fn search_stats_from_opening() {
    let mut board = Board::new();

    let result = search_with(&mut board, &SearchParams::with_depth(1), None);
    assert_eq!(result.value, Some(1));
    assert_eq!(result.stats.nodes, 9);
    assert_eq!(result.stats.cutoffs, 0);

    let result = search_with(&mut board, &SearchParams::with_depth(2), None);
    assert_eq!(result.stats.nodes, 90);
    assert_eq!(result.stats.cutoffs, 0);

    let result = search_with(&mut board, &SearchParams::with_depth(3), None);
    assert_eq!(result.stats.nodes, 249);
    assert_eq!(result.stats.cutoffs, 70);

    assert_eq!(board, Board::new());
    assert!(board.history().is_empty());
}

#[test]
fn find_best_chain_restores_board() {
    let mut board = Board::from_notation(",.o.o.o....,,.o.o......,..x");
    let before = board.clone();

    let best = find_best_chain(&mut board, 3);
    assert!(best.is_some());
    assert_eq!(board, before);
    assert!(board.history().is_empty());
}

#[test]
fn search_default_params() {
    assert_eq!(SearchParams::default().depth, 4);
}

// ============================================================================
// Alpha-beta against plain minimax
// ============================================================================

#[test]
fn alphabeta_matches_minimax() {
    let positions = [
        (".o.o.o.o.o,o.o.o.o.o.,.o.o.o.o.o,o.....o.o.,.....o....,....o.....,...x.x.x.x,x.x.x.x.x.,.x.x.x.x.x,x.x.x.x.x.", Color::White),
        (".o.o.o.o.o,o...o.o.o.,.o.o...o.o,o.o.......,.o........,....x...o.,.x.x.....o,x...x...x.,.x.x.x.x.x,x.x.x.x.x.", Color::White),
        (".o.o.o.o.o,o.o.o.o.o.,.o.o...o.o,....o.....,.o........,........x.,.x.x......,x.x...x...,.x.x.....x,x.x.x.....", Color::Black),
        (",.o.o.o....,,.o.o......,..x", Color::White),
    ];

    for (notation, color) in positions {
        let mut board = Board::from_notation(notation);
        board.set_side_to_move(color);
        let before = board.clone();

        for depth in 0..=3 {
            let pruned = alpha_beta_value(&mut board, depth);
            let full = minimax_value(&mut board, depth);
            assert_eq!(pruned, full, "{notation} at depth {depth}");
        }
        assert_eq!(board, before);
    }
}

#[test]
fn alphabeta_values_of_circle_position() {
    let mut board = Board::from_notation(",.o.o.o....,,.o.o......,..x");
    assert_eq!(alpha_beta_value(&mut board, 0), -3);
    assert_eq!(alpha_beta_value(&mut board, 1), 5);
    assert_eq!(alpha_beta_value(&mut board, 4), 5);
}

#[test]
fn alphabeta_terminal_position_is_evaluated() {
    // Black to move without checkers: the leaf is scored as it stands.
    let mut board = Board::from_notation(",,,,,,.x");
    board.set_side_to_move(Color::Black);
    assert_eq!(alpha_beta_value(&mut board, 3), 0);
    assert_eq!(minimax_value(&mut board, 3), 0);
}
