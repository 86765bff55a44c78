//! `reversi-core` is a rules library for Reversi/Othello.
//!
//! The crate tracks an 8×8 grid of two-colored pieces and enforces the
//! game's legal-move and flip-propagation semantics:
//!
//!  - [`Color`] and [`Piece`] model a single two-sided token and its
//!    in-place color flip.
//!  - [`Position`] addresses cells by row/column coordinates and parses
//!    and prints algebraic notation ("D3").
//!  - [`Board`] owns the grid and implements legality checks, move
//!    enumeration, and the place-and-flip operation.
//!
//! Turn alternation, move selection, and rendering loops are left to the
//! caller: a game loop asks [`Board::legal_moves`] or
//! [`Board::has_legal_move`], commits moves with [`Board::place_piece`],
//! and renders with the board's `Display` impl. No core operation
//! performs I/O.

mod board;
mod color;
mod piece;
mod position;

pub use board::*;
pub use color::*;
pub use piece::*;
pub use position::*;

/// The number of cells on one edge of the board.
pub const EDGE_LENGTH: usize = 8;

/// The number of cells on the board.
pub const NUM_SPACES: usize = 64;
