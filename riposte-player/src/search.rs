//! Internal search functions: mutually recursive maximizing and minimizing
//! passes over the game tree, pruned with an alpha-beta window.
//!
//! Scores are absolute: positive favors Black, negative favors White, at
//! every node. `alpha` is the score the maximizing side can already force
//! along the path from the root, `beta` the score the minimizing side can.

use crate::eval;
use riposte_othello::GameState;

/// Backed-up score of `state` with Black (the maximizing side) to move.
pub(crate) fn max_value(
    state: GameState,
    mut alpha: i32,
    beta: i32,
    depth: u32,
    max_depth: u32,
) -> i32 {
    if cutoff(state, depth, max_depth) {
        return eval::evaluate(&state.board);
    }

    let moves = state.legal_moves();
    if moves.is_empty() {
        // Stuck but not finished: the turn passes to the opponent.
        return min_value(state.pass(), alpha, beta, depth + 1, max_depth);
    }

    let mut best = i32::MIN;
    for loc in moves {
        best = best.max(min_value(
            state.make_move(loc),
            alpha,
            beta,
            depth + 1,
            max_depth,
        ));

        // Fail high: the minimizing ancestor would never allow this branch.
        if best >= beta {
            return best;
        }
        alpha = alpha.max(best);
    }

    best
}

/// Backed-up score of `state` with White (the minimizing side) to move.
pub(crate) fn min_value(
    state: GameState,
    alpha: i32,
    mut beta: i32,
    depth: u32,
    max_depth: u32,
) -> i32 {
    if cutoff(state, depth, max_depth) {
        return eval::evaluate(&state.board);
    }

    let moves = state.legal_moves();
    if moves.is_empty() {
        return max_value(state.pass(), alpha, beta, depth + 1, max_depth);
    }

    let mut worst = i32::MAX;
    for loc in moves {
        worst = worst.min(max_value(
            state.make_move(loc),
            alpha,
            beta,
            depth + 1,
            max_depth,
        ));

        // Fail low: the maximizing ancestor would never allow this branch.
        if worst <= alpha {
            return worst;
        }
        beta = beta.min(worst);
    }

    worst
}

/// True once the search must stop here: the depth limit is reached or
/// neither player has a legal continuation. Checked before any moves are
/// generated for a node.
fn cutoff(state: GameState, depth: u32, max_depth: u32) -> bool {
    depth >= max_depth || state.is_finished()
}
