//! `riposte-player` picks Othello moves by depth-limited adversarial search.
//!
//! The engine explores the tree of hypothetical continuations to a configured
//! number of plies, scores the frontier with a positional evaluator, and
//! backs the scores up through alternating maximizing and minimizing plies
//! with alpha-beta pruning. One call, one move recommendation; the engine
//! keeps no state between calls beyond its configured depth.

pub mod eval;

mod search;

use log::{debug, trace};
use riposte_othello::{GameState, Location, Move, Player};

/// Search depth used when none is configured.
pub const DEFAULT_DEPTH: u32 = 5;

/// A depth-limited minimax engine with alpha-beta pruning.
#[derive(Clone, Copy, Debug)]
pub struct Minimax {
    max_depth: u32,
}

impl Default for Minimax {
    /// Gets an engine with the default search depth.
    fn default() -> Self {
        Self::new(DEFAULT_DEPTH)
    }
}

impl Minimax {
    /// Create an engine that searches `max_depth` plies deep.
    pub fn new(max_depth: u32) -> Self {
        Self { max_depth }
    }

    /// Pick the move judged best for the active player.
    ///
    /// Returns [`Move::Pass`] when the active player has no legal move.
    /// Ties keep the earliest candidate in enumeration order: a later move
    /// must score strictly better to replace the current choice.
    pub fn decide_move(&self, state: GameState) -> Move {
        let mut moves = state.legal_moves().into_iter();

        let mut best_move = match moves.next() {
            Some(loc) => loc,
            None => return Move::Pass,
        };
        let mut best_score = self.score_root_move(state, best_move);
        trace!("{} scores {}", best_move, best_score);

        for loc in moves {
            let score = self.score_root_move(state, loc);
            trace!("{} scores {}", loc, score);

            let improves = match state.active_player {
                Player::Black => score > best_score,
                Player::White => score < best_score,
            };
            if improves {
                best_score = score;
                best_move = loc;
            }
        }

        debug!(
            "{} plays {} (score {} at depth {})",
            state.active_player, best_move, best_score, self.max_depth
        );
        Move::Place(best_move)
    }

    /// Score one root move by handing the derived state to the opponent's
    /// half of the search, one ply down, with the window fully open.
    fn score_root_move(&self, state: GameState, loc: Location) -> i32 {
        let child = state.make_move(loc);
        match state.active_player {
            Player::Black => search::min_value(child, i32::MIN, i32::MAX, 1, self.max_depth),
            Player::White => search::max_value(child, i32::MIN, i32::MAX, 1, self.max_depth),
        }
    }
}
