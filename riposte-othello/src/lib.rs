//! `riposte-othello` is a complete Othello rules library for engines and UIs.
//!
//! This package implements two levels of abstraction:
//!
//!  - [`Board`] stores the grid of pieces and implements the placement and
//!    flipping rules for a single move, without tracking whose turn it is.
//!  - [`GameState`] pairs a [`Board`] with the player to move and exposes the
//!    full game logic: legal moves, passing, turn alternation and game end.
//!
//! Every type is a plain value: deriving a new position copies its parent, so
//! no two positions ever share storage.

pub mod test_utils;

mod board;
mod game;
mod location;
mod utils;

pub use board::*;
pub use game::*;
pub use location::*;

/// The number of spaces on one edge of an Othello board.
pub const EDGE_LENGTH: usize = 8;

/// The number of spaces on an Othello board.
pub const NUM_SPACES: usize = 64;
