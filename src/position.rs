//! Row/column coordinates on the board.

use crate::EDGE_LENGTH;
use derive_more::{Display, Error, From, Into};
use std::fmt::{self, Formatter, Write};

/// A (row, col) cell address. Both coordinates are valid in `[0, 7]`.
///
/// Positions are plain values compared by coordinate equality; nothing
/// stops you from constructing an off-board one, but every board
/// operation validates its input and reports
/// [`BoardError::OutOfBounds`](crate::BoardError::OutOfBounds) rather
/// than indexing blindly.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, From, Into)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    /// Construct from row and column coordinates.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Whether both coordinates lie on the board.
    pub fn is_valid(self) -> bool {
        self.row < EDGE_LENGTH && self.col < EDGE_LENGTH
    }

    /// One step along a `(d_row, d_col)` offset, or `None` when the step
    /// leaves the board. This is the bounds gate for the scan loop.
    pub(crate) fn step(self, (d_row, d_col): (isize, isize)) -> Option<Self> {
        let stepped = Self {
            row: self.row.checked_add_signed(d_row)?,
            col: self.col.checked_add_signed(d_col)?,
        };
        stepped.is_valid().then_some(stepped)
    }
}

/// Format on-board positions in algebraic notation ("D3": column letter,
/// 1-indexed row); off-board positions fall back to raw coordinates.
impl fmt::Display for Position {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if !self.is_valid() {
            return write!(f, "({}, {})", self.row, self.col);
        }
        let col_str = "ABCDEFGH".chars().nth(self.col).ok_or(fmt::Error)?;
        let row_str = "12345678".chars().nth(self.row).ok_or(fmt::Error)?;
        f.write_char(col_str)?;
        f.write_char(row_str)
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Error, Display)]
#[display(fmt = "invalid position string")]
pub struct ParsePositionError;

/// Build a [`Position`] from algebraic notation ("D3"; case-insensitive
/// column letter).
impl std::str::FromStr for Position {
    type Err = ParsePositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let col_char = chars.next().ok_or(ParsePositionError)?.to_ascii_uppercase();
        let col = "ABCDEFGH".find(col_char).ok_or(ParsePositionError)?;
        let row = chars
            .next()
            .ok_or(ParsePositionError)?
            .to_digit(10)
            .ok_or(ParsePositionError)? as usize;

        if row < 1 || row > EDGE_LENGTH || chars.next().is_some() {
            return Err(ParsePositionError);
        }

        Ok(Self::new(row - 1, col))
    }
}
