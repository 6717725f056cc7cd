//! The static evaluator: a lookahead-free estimate of positional advantage.

use riposte_othello::{Board, Cell, Location, EDGE_LENGTH};

const CORNER_WEIGHT: i32 = 4;
const EDGE_WEIGHT: i32 = 3;
const INNER_RING_WEIGHT: i32 = 1;
const INTERIOR_WEIGHT: i32 = 2;

/// Score a position without further search: positive favors Black,
/// negative favors White.
///
/// Every occupied space contributes its positional weight, added for Black
/// and subtracted for White. The same score is used whether the position is
/// a true end of game or merely a search horizon.
pub fn evaluate(board: &Board) -> i32 {
    let mut score = 0;

    for row in 0..EDGE_LENGTH {
        for col in 0..EDGE_LENGTH {
            match board.get(Location::from_coords(row, col)) {
                Cell::Black => score += weight(row, col),
                Cell::White => score -= weight(row, col),
                Cell::Empty => {}
            }
        }
    }

    score
}

/// The positional weight of a board space. A corner can never be flipped
/// back, so it counts most; the ring just inside the rim tends to hand the
/// adjacent rim space to the opponent, so it counts least.
pub fn weight(row: usize, col: usize) -> i32 {
    let last = EDGE_LENGTH - 1;
    let rim_row = row == 0 || row == last;
    let rim_col = col == 0 || col == last;

    if rim_row && rim_col {
        CORNER_WEIGHT
    } else if rim_row || rim_col {
        EDGE_WEIGHT
    } else if row == 1 || row == last - 1 || col == 1 || col == last - 1 {
        INNER_RING_WEIGHT
    } else {
        INTERIOR_WEIGHT
    }
}
