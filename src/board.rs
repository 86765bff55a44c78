//! The 8×8 Reversi board and its move dynamics.
//!
//! [`Board`] owns every [`Piece`] through its grid and is the only thing
//! that mutates them: a committed move flips enclosed pieces in place
//! (by coordinate, so grid and flip list address the same object) and
//! fills exactly one empty cell. Cells never go back to empty.
//!
//! The correctness-sensitive part is [`Board::flip_run`], the directional
//! scan that decides which run of enemy pieces a placement encloses.

use crate::piece::Piece;
use crate::position::Position;
use crate::{Color, EDGE_LENGTH};
use derive_more::{Display, Error};
use std::fmt;

/// The eight scan directions as (row, col) offsets.
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

/// What a cell holds, relative to the color asking.
///
/// This is the tri-state answer behind [`Board::is_owned_by`]: an empty
/// cell and an enemy piece are different things to the scan, so they are
/// different variants here rather than two meanings of `false`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Ownership {
    Empty,
    Mine,
    Theirs,
}

/// Errors reported by board queries and mutations.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error, Display)]
pub enum BoardError {
    /// A coordinate pair fell outside `[0, 7]`.
    #[display(fmt = "position {} is off the board", pos)]
    OutOfBounds { pos: Position },

    /// A placement on an occupied cell, or one that would flip nothing.
    #[display(fmt = "{} has no legal move at {}", color, pos)]
    InvalidMove { pos: Position, color: Color },
}

/// The game board: an 8×8 grid of optional pieces.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Board {
    grid: [[Option<Piece>; EDGE_LENGTH]; EDGE_LENGTH],
}

impl Default for Board {
    /// Gets the standard starting board.
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Construct the standard starting board: all cells empty except
    /// White at (3,3) and (4,4), Black at (3,4) and (4,3).
    pub fn new() -> Self {
        let mut grid = [[None; EDGE_LENGTH]; EDGE_LENGTH];
        grid[3][3] = Some(Piece::new(Color::White));
        grid[4][4] = Some(Piece::new(Color::White));
        grid[3][4] = Some(Piece::new(Color::Black));
        grid[4][3] = Some(Piece::new(Color::Black));
        Self { grid }
    }

    /// Whether both of `pos`'s coordinates lie on the board.
    pub fn is_valid_position(&self, pos: Position) -> bool {
        pos.is_valid()
    }

    /// Get the piece at `pos`, or `None` for an empty cell.
    /// Fails with [`BoardError::OutOfBounds`] for off-board coordinates.
    pub fn piece_at(&self, pos: Position) -> Result<Option<Piece>, BoardError> {
        if !pos.is_valid() {
            return Err(BoardError::OutOfBounds { pos });
        }
        Ok(self.grid[pos.row][pos.col])
    }

    /// Whether the cell at `pos` holds a piece.
    pub fn is_occupied(&self, pos: Position) -> Result<bool, BoardError> {
        Ok(self.piece_at(pos)?.is_some())
    }

    /// What the cell at `pos` holds, from `color`'s point of view.
    pub fn ownership(&self, pos: Position, color: Color) -> Result<Ownership, BoardError> {
        if !pos.is_valid() {
            return Err(BoardError::OutOfBounds { pos });
        }
        Ok(self.relation(pos, color))
    }

    /// Whether the cell at `pos` holds a piece of `color`. Empty cells
    /// yield `Ok(false)`; use [`Board::ownership`] when "empty" and
    /// "enemy" must be told apart.
    pub fn is_owned_by(&self, pos: Position, color: Color) -> Result<bool, BoardError> {
        Ok(self.ownership(pos, color)? == Ownership::Mine)
    }

    /// Whether placing a `color` piece at `pos` is legal: the cell is an
    /// on-board empty cell and at least one direction encloses a run of
    /// enemy pieces. Off-board positions are never legal.
    pub fn is_legal_move(&self, pos: Position, color: Color) -> bool {
        if !pos.is_valid() || self.grid[pos.row][pos.col].is_some() {
            return false;
        }
        DIRECTIONS
            .iter()
            .any(|&dir| self.flip_run(pos, color, dir).is_some())
    }

    /// All legal placements for `color`, in row-major order.
    pub fn legal_moves(&self, color: Color) -> Vec<Position> {
        let mut moves = Vec::new();
        for row in 0..EDGE_LENGTH {
            for col in 0..EDGE_LENGTH {
                let pos = Position::new(row, col);
                if self.is_legal_move(pos, color) {
                    moves.push(pos);
                }
            }
        }
        moves
    }

    /// Whether `color` has at least one legal placement.
    pub fn has_legal_move(&self, color: Color) -> bool {
        (0..EDGE_LENGTH).any(|row| {
            (0..EDGE_LENGTH).any(|col| self.is_legal_move(Position::new(row, col), color))
        })
    }

    /// Whether the game is over: neither color has a legal placement.
    /// One blocked color alone does not end the game (that side passes).
    pub fn is_game_over(&self) -> bool {
        !self.has_legal_move(Color::Black) && !self.has_legal_move(Color::White)
    }

    /// Commit a move: flip every enclosed enemy piece in place, then fill
    /// `pos` with a new piece of `color`.
    ///
    /// Fails with [`BoardError::OutOfBounds`] for off-board coordinates
    /// and [`BoardError::InvalidMove`] when the cell is occupied or no
    /// direction encloses a run. All-or-nothing: on failure the grid is
    /// untouched.
    pub fn place_piece(&mut self, pos: Position, color: Color) -> Result<(), BoardError> {
        if !pos.is_valid() {
            return Err(BoardError::OutOfBounds { pos });
        }
        if self.grid[pos.row][pos.col].is_some() {
            return Err(BoardError::InvalidMove { pos, color });
        }

        // Collect every run before touching the grid. Runs from distinct
        // directions lie on distinct rays, so the concatenation holds no
        // duplicates.
        let mut flips = Vec::new();
        for dir in DIRECTIONS {
            if let Some(run) = self.flip_run(pos, color, dir) {
                flips.extend(run);
            }
        }
        if flips.is_empty() {
            return Err(BoardError::InvalidMove { pos, color });
        }

        for flip_pos in flips {
            match self.grid[flip_pos.row][flip_pos.col].as_mut() {
                Some(piece) => piece.flip(),
                None => unreachable!("flip runs only cross occupied cells"),
            }
        }
        self.grid[pos.row][pos.col] = Some(Piece::new(color));
        Ok(())
    }

    /// Scan one direction away from `pos` and return the run of enemy
    /// positions a `color` placement there would enclose.
    ///
    /// Walks cell by cell along `dir`. Falling off the board or hitting
    /// an empty cell kills the run; hitting a `color` piece terminates
    /// it. A terminator with an empty accumulator means an adjacent
    /// friendly piece enclosing nothing, which is `None`, not an empty
    /// success.
    fn flip_run(&self, pos: Position, color: Color, dir: (isize, isize)) -> Option<Vec<Position>> {
        let mut run = Vec::new();
        let mut cursor = pos.step(dir)?;
        loop {
            match self.relation(cursor, color) {
                Ownership::Empty => return None,
                Ownership::Mine => return (!run.is_empty()).then_some(run),
                Ownership::Theirs => run.push(cursor),
            }
            cursor = cursor.step(dir)?;
        }
    }

    // `pos` must already be on the board.
    fn relation(&self, pos: Position, color: Color) -> Ownership {
        match self.grid[pos.row][pos.col] {
            None => Ownership::Empty,
            Some(piece) if piece.color() == color => Ownership::Mine,
            Some(_) => Ownership::Theirs,
        }
    }
}

/// Render the grid with A–H column letters, 1-indexed rows, and
/// `B`/`W`/`.` cells. Pure: reads the grid, mutates nothing.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "   A B C D E F G H")?;
        for (row, cells) in self.grid.iter().enumerate() {
            write!(f, " {} ", row + 1)?;
            for cell in cells {
                match cell {
                    Some(piece) => write!(f, "{} ", piece)?,
                    None => write!(f, ". ")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Error, Display)]
pub enum ParseBoardError {
    /// The string did not describe exactly 64 cells.
    #[display(fmt = "board string must describe exactly 64 cells")]
    WrongLength,

    /// A cell character other than 'B', 'W', or '.'.
    #[display(fmt = "unrecognized cell character {:?}", found)]
    BadCell { found: char },
}

/// Build a board from 64 `B`/`W`/`.` cell characters in row-major order.
/// Whitespace (including newlines between rows) is ignored, so the
/// output of the `Display` impl minus its headers parses back.
impl std::str::FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = s.chars().filter(|c| !c.is_whitespace());
        let mut grid = [[None; EDGE_LENGTH]; EDGE_LENGTH];

        for row in grid.iter_mut() {
            for cell in row.iter_mut() {
                *cell = match cells.next().ok_or(ParseBoardError::WrongLength)? {
                    'B' => Some(Piece::new(Color::Black)),
                    'W' => Some(Piece::new(Color::White)),
                    '.' => None,
                    found => return Err(ParseBoardError::BadCell { found }),
                };
            }
        }
        if cells.next().is_some() {
            return Err(ParseBoardError::WrongLength);
        }
        Ok(Self { grid })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_board(s: &str) -> Board {
        s.parse().unwrap()
    }

    const EMPTY_ROW: &str = "........";

    #[test]
    fn starting_board_layout() {
        let board = Board::new();
        assert_eq!(
            board.piece_at(Position::new(3, 3)).unwrap().map(Piece::color),
            Some(Color::White)
        );
        assert_eq!(
            board.piece_at(Position::new(4, 4)).unwrap().map(Piece::color),
            Some(Color::White)
        );
        assert_eq!(
            board.piece_at(Position::new(3, 4)).unwrap().map(Piece::color),
            Some(Color::Black)
        );
        assert_eq!(
            board.piece_at(Position::new(4, 3)).unwrap().map(Piece::color),
            Some(Color::Black)
        );
    }

    #[test]
    fn piece_at_out_of_bounds() {
        let board = Board::new();
        let pos = Position::new(8, 0);
        assert_eq!(board.piece_at(pos), Err(BoardError::OutOfBounds { pos }));
        let pos = Position::new(0, 8);
        assert_eq!(board.piece_at(pos), Err(BoardError::OutOfBounds { pos }));
    }

    #[test]
    fn occupancy_queries() {
        let board = Board::new();
        assert_eq!(board.is_occupied(Position::new(3, 3)), Ok(true));
        assert_eq!(board.is_occupied(Position::new(0, 0)), Ok(false));
        assert!(board.is_occupied(Position::new(9, 9)).is_err());
    }

    #[test]
    fn ownership_distinguishes_empty_from_enemy() {
        let board = Board::new();
        assert_eq!(
            board.ownership(Position::new(3, 3), Color::White),
            Ok(Ownership::Mine)
        );
        assert_eq!(
            board.ownership(Position::new(3, 3), Color::Black),
            Ok(Ownership::Theirs)
        );
        assert_eq!(
            board.ownership(Position::new(0, 0), Color::Black),
            Ok(Ownership::Empty)
        );
    }

    #[test]
    fn is_owned_by_is_false_for_empty_and_enemy() {
        let board = Board::new();
        assert_eq!(board.is_owned_by(Position::new(3, 3), Color::White), Ok(true));
        assert_eq!(board.is_owned_by(Position::new(3, 3), Color::Black), Ok(false));
        assert_eq!(board.is_owned_by(Position::new(0, 0), Color::Black), Ok(false));
    }

    #[test]
    fn is_valid_position() {
        let board = Board::new();
        assert!(board.is_valid_position(Position::new(7, 7)));
        assert!(!board.is_valid_position(Position::new(8, 7)));
    }

    #[test]
    fn flip_run_collects_the_enclosed_run() {
        // Placing Black at A1 encloses the two White pieces before D1.
        let board = parse_board(&(".WWB....".to_owned() + &EMPTY_ROW.repeat(7)));
        assert_eq!(
            board.flip_run(Position::new(0, 0), Color::Black, (0, 1)),
            Some(vec![Position::new(0, 1), Position::new(0, 2)])
        );
    }

    #[test]
    fn flip_run_adjacent_friendly_piece_is_none() {
        // A same-color neighbor with nothing between encloses nothing.
        let board = parse_board(&(".B......".to_owned() + &EMPTY_ROW.repeat(7)));
        assert_eq!(board.flip_run(Position::new(0, 0), Color::Black, (0, 1)), None);
    }

    #[test]
    fn flip_run_gap_is_none() {
        let board = parse_board(&(".W.B....".to_owned() + &EMPTY_ROW.repeat(7)));
        assert_eq!(board.flip_run(Position::new(0, 0), Color::Black, (0, 1)), None);
    }

    #[test]
    fn flip_run_hitting_the_edge_is_none() {
        // Enemy pieces all the way to the edge with no terminator.
        let board = parse_board(&(".WWWWWWW".to_owned() + &EMPTY_ROW.repeat(7)));
        assert_eq!(board.flip_run(Position::new(0, 0), Color::Black, (0, 1)), None);
    }

    #[test]
    fn flip_run_immediately_off_board_is_none() {
        let board = Board::new();
        assert_eq!(board.flip_run(Position::new(0, 0), Color::Black, (-1, 0)), None);
    }

    #[test]
    fn place_piece_out_of_bounds() {
        let mut board = Board::new();
        let pos = Position::new(8, 8);
        assert_eq!(
            board.place_piece(pos, Color::Black),
            Err(BoardError::OutOfBounds { pos })
        );
    }

    #[test]
    fn place_piece_flips_across_multiple_directions() {
        // Placing Black at C3 closes runs left (towards A3) and up
        // (towards C1).
        let board_str = "\
            ..B.....\n\
            ..W.....\n\
            BW......\n\
            ........\n\
            ........\n\
            ........\n\
            ........\n\
            ........";
        let mut board = parse_board(board_str);
        board.place_piece(Position::new(2, 2), Color::Black).unwrap();

        let expected = parse_board(
            "\
            ..B.....\n\
            ..B.....\n\
            BBB.....\n\
            ........\n\
            ........\n\
            ........\n\
            ........\n\
            ........",
        );
        assert_eq!(board, expected);
    }

    #[test]
    fn display_renders_the_starting_grid() {
        let rendered = Board::new().to_string();
        let expected = "   A B C D E F G H\n \
                        1 . . . . . . . . \n \
                        2 . . . . . . . . \n \
                        3 . . . . . . . . \n \
                        4 . . . W B . . . \n \
                        5 . . . B W . . . \n \
                        6 . . . . . . . . \n \
                        7 . . . . . . . . \n \
                        8 . . . . . . . . \n";
        assert_eq!(rendered, expected);
    }

    #[test]
    fn board_from_str_round_trips_through_cells() {
        let board_str = "\
            B.......\n\
            .W......\n\
            ........\n\
            ...WB...\n\
            ...BW...\n\
            ........\n\
            ........\n\
            .......B";
        let parsed = parse_board(board_str);
        assert_eq!(
            parsed.piece_at(Position::new(0, 0)).unwrap().map(Piece::color),
            Some(Color::Black)
        );
        assert_eq!(
            parsed.piece_at(Position::new(1, 1)).unwrap().map(Piece::color),
            Some(Color::White)
        );
        assert_eq!(parsed.piece_at(Position::new(2, 2)).unwrap(), None);
        assert_eq!(
            parsed.piece_at(Position::new(7, 7)).unwrap().map(Piece::color),
            Some(Color::Black)
        );
    }

    #[test]
    fn board_from_str_rejects_bad_input() {
        assert_eq!("B".parse::<Board>(), Err(ParseBoardError::WrongLength));
        assert_eq!(
            (EMPTY_ROW.repeat(8) + ".").parse::<Board>(),
            Err(ParseBoardError::WrongLength)
        );
        let mut bad = EMPTY_ROW.repeat(8);
        bad.replace_range(10..11, "X");
        assert_eq!(bad.parse::<Board>(), Err(ParseBoardError::BadCell { found: 'X' }));
    }
}
