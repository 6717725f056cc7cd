//! Play against the engine on the terminal. The human takes Black; an
//! optional argument sets the search depth.

use riposte_othello::{GameState, Move, Player};
use riposte_player::{Minimax, DEFAULT_DEPTH};
use std::io::Write;

fn main() {
    env_logger::init();

    let max_depth = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(DEFAULT_DEPTH);
    let engine = Minimax::new(max_depth);

    let mut game = GameState::default();
    while !game.is_finished() {
        if game.active_player == Player::Black {
            game = human_turn(game);
        } else {
            let mv = engine.decide_move(game);
            println!("Engine plays {}.", mv);
            game = game.act(mv);
        }
    }

    println!("\n{}", game.board);
    if let Some(winner) = game.winner() {
        println!("Winner: {}.", winner);
    } else {
        println!("Draw.")
    }
}

/// Prompt until the human enters a move the rules accept, and return the
/// state after it.
fn human_turn(game: GameState) -> GameState {
    loop {
        println!("\n{}", game);

        print!("Enter a move: ");
        std::io::stdout().flush().unwrap();
        let mut input_line = String::new();
        std::io::stdin().read_line(&mut input_line).unwrap();

        let mv: Move = match input_line.trim().parse() {
            Ok(mv) => mv,
            Err(_) => {
                println!("Cannot parse move.");
                continue;
            }
        };

        match game.apply_move(mv) {
            Ok(next_state) => return next_state,
            Err(_) if game.legal_moves().is_empty() => {
                println!("Invalid move. Please enter 'pass'.");
            }
            Err(_) => {
                println!("Invalid move. Legal moves: {}", game.legal_moves());
            }
        }
    }
}
