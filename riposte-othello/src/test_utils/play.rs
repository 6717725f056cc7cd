use crate::game::{GameState, Move, ParseMoveError};

/// Play an interactive two-player Othello game on stdin.
pub fn play_interactive() {
    use std::io::Write;
    let mut game = GameState::default();

    while !game.is_finished() {
        loop {
            println!("\n{}", game);

            print!("Enter a move: ");
            std::io::stdout().flush().unwrap();
            let mut input_line = String::new();
            std::io::stdin().read_line(&mut input_line).unwrap();
            let parsed_mv: Result<Move, ParseMoveError> = input_line.trim().parse();

            let mv = match parsed_mv {
                Ok(mv) => mv,
                Err(_) => {
                    println!("Cannot parse move.");
                    continue;
                }
            };

            match game.apply_move(mv) {
                Ok(next_state) => {
                    game = next_state;
                    break;
                }
                Err(_) if game.legal_moves().is_empty() => {
                    println!("Invalid move. Please enter 'pass'.");
                }
                Err(_) => {
                    println!("Invalid move. Legal moves: {}", game.legal_moves());
                }
            }
        }
    }

    if let Some(winner) = game.winner() {
        println!("Winner: {}.", winner);
    } else {
        println!("Draw.")
    }
}
