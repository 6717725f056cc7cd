//! The Othello board and its placement-and-flip rules.
//!
//! A [`Board`] is a plain 8x8 grid of [`Cell`]s and knows nothing about whose
//! turn it is; every operation takes the acting [`Player`] explicitly. Making
//! a move returns a fresh board, so a parent position is never mutated by
//! exploring its children.

use crate::game::Player;
use crate::location::{Location, MoveList};
use crate::utils;
use crate::EDGE_LENGTH;
use derive_more::{Display, Error};
use std::fmt::{self, Formatter};

/// The contents of a single board space.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Cell {
    Empty,
    Black,
    White,
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        match player {
            Player::Black => Cell::Black,
            Player::White => Cell::White,
        }
    }
}

/// The eight ray directions a move can flip along, as (row, column) steps.
const DIRECTIONS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// An 8x8 Othello board.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Board {
    cells: [[Cell; EDGE_LENGTH]; EDGE_LENGTH],
}

impl Default for Board {
    /// Gets the standard starting position.
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Construct the standard starting position: the four center spaces
    /// occupied, White on the main diagonal.
    pub fn new() -> Self {
        let mut board = Self::empty();
        board.set(Location::from_coords(3, 3), Cell::White);
        board.set(Location::from_coords(3, 4), Cell::Black);
        board.set(Location::from_coords(4, 3), Cell::Black);
        board.set(Location::from_coords(4, 4), Cell::White);
        board
    }

    /// Construct a board with no pieces on it.
    pub fn empty() -> Self {
        Self {
            cells: [[Cell::Empty; EDGE_LENGTH]; EDGE_LENGTH],
        }
    }

    /// Get the contents of one space.
    #[inline]
    pub fn get(self, loc: Location) -> Cell {
        self.cells[loc.row][loc.col]
    }

    /// Overwrite the contents of one space. Intended for setting up
    /// positions; game play goes through [`Board::make_move`].
    pub fn set(&mut self, loc: Location, cell: Cell) {
        self.cells[loc.row][loc.col] = cell;
    }

    /// Returns whether `player` may place a piece on `loc`.
    pub fn is_legal_move(self, loc: Location, player: Player) -> bool {
        self.get(loc) == Cell::Empty
            && DIRECTIONS
                .iter()
                .any(|&step| self.flips_along(loc, player, step) > 0)
    }

    /// Enumerate the legal moves for `player`, in row-major board order.
    pub fn get_moves(self, player: Player) -> MoveList {
        let mut moves = MoveList::default();
        for row in 0..EDGE_LENGTH {
            for col in 0..EDGE_LENGTH {
                let loc = Location::from_coords(row, col);
                if self.is_legal_move(loc, player) {
                    moves.push(loc);
                }
            }
        }
        moves
    }

    /// Returns whether `player` has at least one legal move.
    pub fn has_move(self, player: Player) -> bool {
        for row in 0..EDGE_LENGTH {
            for col in 0..EDGE_LENGTH {
                if self.is_legal_move(Location::from_coords(row, col), player) {
                    return true;
                }
            }
        }
        false
    }

    /// Place a piece for `player` on `loc` and flip every captured line,
    /// returning the resulting board. The move must be legal; this is not
    /// rechecked here.
    pub fn make_move(self, loc: Location, player: Player) -> Self {
        let mut next = self;
        next.set(loc, Cell::from(player));

        for &step in DIRECTIONS.iter() {
            let flips = self.flips_along(loc, player, step);
            let mut row = loc.row as isize;
            let mut col = loc.col as isize;
            for _ in 0..flips {
                row += step.0;
                col += step.1;
                next.set(
                    Location::from_coords(row as usize, col as usize),
                    Cell::from(player),
                );
            }
        }

        next
    }

    /// Count the number of pieces captured by placing on `loc` along one
    /// ray: the length of the unbroken run of opposing pieces between `loc`
    /// and the nearest own piece, or zero if no own piece closes the run.
    fn flips_along(self, loc: Location, player: Player, step: (isize, isize)) -> usize {
        let own = Cell::from(player);
        let other = Cell::from(!player);

        let mut row = loc.row as isize + step.0;
        let mut col = loc.col as isize + step.1;
        let mut run = 0;

        while (0..EDGE_LENGTH as isize).contains(&row) && (0..EDGE_LENGTH as isize).contains(&col)
        {
            let cell = self.get(Location::from_coords(row as usize, col as usize));
            if cell == other {
                run += 1;
                row += step.0;
                col += step.1;
            } else if cell == own {
                return run;
            } else {
                return 0;
            }
        }

        0
    }

    /// Count the pieces showing `cell`.
    pub fn count(self, cell: Cell) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&space| space == cell)
            .count()
    }

    /// Score the board as: # Black pieces - # White pieces.
    pub fn score_difference(self) -> i32 {
        self.count(Cell::Black) as i32 - self.count(Cell::White) as i32
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        utils::format_grid(
            self.cells.iter().flatten().map(|cell| match cell {
                Cell::Empty => '.',
                Cell::Black => 'X',
                Cell::White => 'O',
            }),
            f,
        )
    }
}

#[derive(Debug, PartialEq, Error, Display)]
pub enum ParseBoardError {
    WrongLength,
    BadCharacter,
}

/// Build a [`Board`] from 64 piece characters ('X' Black, 'O' White,
/// '.' empty), in row-major order. Whitespace is ignored, so boards can be
/// written as one string per row.
impl std::str::FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut board = Board::empty();
        let mut index = 0;

        for piece in s.chars().filter(|c| !c.is_whitespace()) {
            if index >= crate::NUM_SPACES {
                return Err(ParseBoardError::WrongLength);
            }
            let cell = match piece {
                '.' => Cell::Empty,
                'X' => Cell::Black,
                'O' => Cell::White,
                _ => return Err(ParseBoardError::BadCharacter),
            };
            board.set(Location::from_index(index), cell);
            index += 1;
        }

        if index != crate::NUM_SPACES {
            return Err(ParseBoardError::WrongLength);
        }
        Ok(board)
    }
}
