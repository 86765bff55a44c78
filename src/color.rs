//! The two piece colors.

use std::fmt;

/// One of the two colors a piece can show.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Color {
    Black,
    White,
}

impl Color {
    /// Get the other color. Self-inverse: `c.opposite().opposite() == c`.
    pub fn opposite(self) -> Self {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }
}

impl Default for Color {
    /// Gets the starting color (black moves first).
    fn default() -> Self {
        Self::Black
    }
}

impl std::ops::Not for Color {
    type Output = Self;

    /// Operator form of [`Color::opposite`].
    fn not(self) -> Self {
        self.opposite()
    }
}

/// Format as the single-letter notation used on board displays.
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Black => f.write_str("B"),
            Color::White => f.write_str("W"),
        }
    }
}
