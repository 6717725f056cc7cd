//! End-to-end tests of the move selector.

use riposte_othello::{Board, GameState, Location, Move, Player};
use riposte_player::{eval, Minimax};

fn loc(row: usize, col: usize) -> Location {
    Location::from_coords(row, col)
}

fn state(board: &str, player: Player) -> GameState {
    GameState::new(board.parse::<Board>().unwrap(), player)
}

#[test]
fn passes_when_no_move_exists() {
    // A lone Black piece gives Black nothing to capture.
    let lone = state(
        "........
         ........
         ........
         ...X....
         ........
         ........
         ........
         ........",
        Player::Black,
    );
    assert_eq!(Minimax::default().decide_move(lone), Move::Pass);
}

#[test]
fn plays_the_only_legal_move() {
    let forced = state(
        "XO......
         ........
         ........
         ........
         ........
         ........
         ........
         ........",
        Player::Black,
    );
    assert_eq!(forced.legal_moves().len(), 1);
    assert_eq!(
        Minimax::new(3).decide_move(forced),
        Move::Place(loc(0, 2))
    );
}

#[test]
fn opens_with_one_of_the_four_standard_moves() {
    let opening = Minimax::new(1).decide_move(GameState::default());

    let standard = [loc(2, 3), loc(3, 2), loc(4, 5), loc(5, 4)];
    match opening {
        Move::Place(chosen) => assert!(standard.contains(&chosen)),
        Move::Pass => panic!("opening position has legal moves"),
    }
}

#[test]
fn prefers_the_corner_capture() {
    // Two captures of equal size: one lands on a corner, one in the
    // interior. The corner line is worth more and enumerates later, so
    // winning here requires comparing scores, not order.
    let game = state(
        "........
         ........
         ........
         ..XO....
         ........
         ........
         ........
         .....XO.",
        Player::Black,
    );
    let moves: Vec<Location> = game.legal_moves().into_iter().collect();
    assert_eq!(moves, vec![loc(3, 4), loc(7, 7)]);

    assert_eq!(
        Minimax::new(1).decide_move(game),
        Move::Place(loc(7, 7))
    );
}

#[test]
fn white_prefers_the_corner_capture_too() {
    // Color-swapped mirror of the corner test: the selector must minimize
    // the absolute score when White is to move.
    let game = state(
        "........
         ........
         ........
         ..OX....
         ........
         ........
         ........
         .....OX.",
        Player::White,
    );
    assert_eq!(
        Minimax::new(1).decide_move(game),
        Move::Place(loc(7, 7))
    );
}

#[test]
fn ties_keep_the_first_move_found() {
    // Both captures take an edge space and flip one edge piece; their
    // resulting scores are identical.
    let game = state(
        "...OX...
         ........
         ........
         ........
         ........
         ........
         ........
         ...OX...",
        Player::Black,
    );
    let moves: Vec<Location> = game.legal_moves().into_iter().collect();
    assert_eq!(moves, vec![loc(0, 2), loc(7, 2)]);

    let top = game.make_move(loc(0, 2));
    let bottom = game.make_move(loc(7, 2));
    assert_eq!(eval::evaluate(&top.board), eval::evaluate(&bottom.board));

    assert_eq!(
        Minimax::new(1).decide_move(game),
        Move::Place(loc(0, 2))
    );
}

#[test]
fn deciding_is_deterministic_and_leaves_the_state_alone() {
    let game = GameState::default();
    let copy = game;
    let engine = Minimax::new(3);

    let first = engine.decide_move(game);
    let second = engine.decide_move(game);

    assert_eq!(first, second);
    assert_eq!(game, copy);

    match first {
        Move::Place(chosen) => assert!(game.legal_moves().contains(chosen)),
        Move::Pass => panic!("opening position has legal moves"),
    }
}
