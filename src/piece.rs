//! A single colored piece occupying one board cell.

use crate::Color;
use std::fmt;

/// A two-sided token sitting on a board cell.
///
/// Pieces never move and are never removed: once placed they stay at
/// their cell for the rest of the game and are only recolored via
/// [`Piece::flip`]. The [`Board`](crate::Board) grid is the sole owner
/// of every piece; queries hand out copies.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Piece {
    color: Color,
}

impl Piece {
    /// Construct a piece showing `color`.
    pub fn new(color: Color) -> Self {
        Self { color }
    }

    /// The color this piece currently shows.
    pub fn color(self) -> Color {
        self.color
    }

    /// The color on this piece's hidden face.
    pub fn opposite_color(self) -> Color {
        self.color.opposite()
    }

    /// Turn the piece over, recoloring it in place. Always succeeds.
    pub fn flip(&mut self) {
        self.color = self.color.opposite();
    }
}

/// Format as "B" or "W".
impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.color.fmt(f)
    }
}
