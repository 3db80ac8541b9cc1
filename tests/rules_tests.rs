//! Game rule tests against the public API: crowning, flying kings and
//! configurable capture directions.

use draughts_engine::board::prelude::*;
use draughts_engine::board::STARTING_POSITION;

fn play(board: &mut Board, from: Coord, to: Coord) {
    let chain = board
        .legal_moves()
        .into_iter()
        .find(|chain| chain.from() == from && chain.to() == to)
        .unwrap_or_else(|| panic!("no legal chain from {from} to {to}"));
    board.push(chain);
}

#[test]
fn opening_position() {
    let mut board = Board::new();
    assert_eq!(board.get_board(), STARTING_POSITION);
    assert_eq!(board.side_to_move(), Color::White);
    assert_eq!(board.legal_moves().len(), 9);
}

#[test]
fn man_crowned_on_last_row_then_flies() {
    let mut board = BoardBuilder::new()
        .checker(Coord(1, 1), Checker::man(Color::White))
        .checker(Coord(9, 3), Checker::man(Color::Black))
        .build();

    play(&mut board, Coord(1, 1), Coord(2, 0));
    assert_eq!(board.checker_on(Coord(2, 0)), Some(Checker::king(Color::White)));

    play(&mut board, Coord(9, 3), Coord(8, 4));

    let king_moves: Vec<MoveChain> = board.legal_moves();
    assert!(king_moves.iter().any(|chain| chain.to() == Coord(7, 5)));
    assert!(king_moves.iter().all(|chain| chain.checker().crowned));
}

#[test]
fn forward_capture_rules_only_change_men() {
    let king_board = BoardBuilder::new()
        .checker(Coord(3, 3), Checker::king(Color::White))
        .checker(Coord(4, 4), Checker::man(Color::Black))
        .rules(Rules::forward_captures_only());
    let mut board = king_board.build();
    let chains = board.legal_moves();
    assert!(chains.iter().all(MoveChain::is_capture));
    assert_eq!(chains.len(), 5);

    let mut board = BoardBuilder::new()
        .checker(Coord(3, 3), Checker::man(Color::White))
        .checker(Coord(4, 4), Checker::man(Color::Black))
        .rules(Rules::forward_captures_only())
        .build();
    assert!(board.legal_moves().iter().all(|chain| !chain.is_capture()));
    assert!(!board.has_capture());

    let mut board = board.with_rules(Rules::international());
    assert!(board.has_capture());
    assert_eq!(board.legal_moves().len(), 1);
}

#[test]
fn undo_whole_game() {
    let mut board = Board::new();
    let mut count = 0;
    while count < 60 {
        let Some(chain) = board.legal_moves().into_iter().last() else {
            break;
        };
        board.push(chain);
        count += 1;
    }
    assert_eq!(board.history().len(), count);

    while board.pop().is_ok() {}
    assert_eq!(board, Board::new());
    assert_eq!(board.pop(), Err(BoardError::EmptyHistory));
}

#[test]
fn notation_errors_are_reported() {
    let err = Board::try_from_notation("abc").unwrap_err();
    assert_eq!(
        err,
        NotationError::InvalidCharacter {
            char: 'a',
            row: 0,
            column: 0
        }
    );
    assert_eq!(err.to_string(), "Invalid character 'a' in notation at row 0, column 0");
}
