//! Core value types shared by every subsystem.
//!
//! Pieces are tagged `Color` x `PieceKind` values; the `white-knight` style
//! identifiers only exist at the display boundary (`Display` / `FromStr`).

use std::fmt;
use std::str::FromStr;

use crate::errors::{ChessError, ChessResult};

pub use crate::game_state::board::Board;
pub use crate::game_state::game_state::Game;
pub use crate::game_state::undo_state::UndoState;

/// Side to move and piece ownership.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row delta of a single pawn step. White moves toward row 0.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// Row the pawns of this color start on.
    #[inline]
    pub const fn pawn_home_row(self) -> u8 {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }

    /// Back rank row, where king and rooks start.
    #[inline]
    pub const fn home_row(self) -> u8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Color::White => "white",
            Color::Black => "black",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            PieceKind::Pawn => "pawn",
            PieceKind::Knight => "knight",
            PieceKind::Bishop => "bishop",
            PieceKind::Rook => "rook",
            PieceKind::Queen => "queen",
            PieceKind::King => "king",
        }
    }
}

/// A piece is nothing more than its owner and kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    #[inline]
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Self { color, kind }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.color.name(), self.kind.name())
    }
}

impl FromStr for Piece {
    type Err = ChessError;

    fn from_str(s: &str) -> ChessResult<Self> {
        let invalid = || ChessError::InvalidPieceName(s.to_owned());
        let (color, kind) = s.split_once('-').ok_or_else(invalid)?;
        let color = match color {
            "white" => Color::White,
            "black" => Color::Black,
            _ => return Err(invalid()),
        };
        let kind = PieceKind::ALL
            .into_iter()
            .find(|k| k.name() == kind)
            .ok_or_else(invalid)?;
        Ok(Piece::new(color, kind))
    }
}

/// Board coordinate. Row 0 is the eighth rank, col 0 is the a-file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    pub row: u8,
    pub col: u8,
}

impl Square {
    #[inline]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Every square in row-major order (a8, b8, ..., h1).
    pub fn all() -> impl Iterator<Item = Square> {
        (0..8u8).flat_map(|row| (0..8u8).map(move |col| Square::new(row, col)))
    }

    /// Offset by a row/col delta, `None` when it leaves the board.
    #[inline]
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Square> {
        let row = self.row as i8 + d_row;
        let col = self.col as i8 + d_col;
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Some(Square::new(row as u8, col as u8))
        } else {
            None
        }
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            char::from(b'a' + self.col),
            char::from(b'8' - self.row)
        )
    }
}

/// Per-side, per-wing castling flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CastlingRights {
    pub white_kingside: bool,
    pub white_queenside: bool,
    pub black_kingside: bool,
    pub black_queenside: bool,
}

impl Default for CastlingRights {
    fn default() -> Self {
        Self::all()
    }
}

impl CastlingRights {
    pub const fn all() -> Self {
        Self {
            white_kingside: true,
            white_queenside: true,
            black_kingside: true,
            black_queenside: true,
        }
    }

    pub const fn none() -> Self {
        Self {
            white_kingside: false,
            white_queenside: false,
            black_kingside: false,
            black_queenside: false,
        }
    }

    /// Rights implied by a placement: a wing is open only when the king and
    /// that wing's rook both stand on their home squares.
    pub fn from_board(board: &Board) -> Self {
        let has = |color: Color, kind: PieceKind, col: u8| {
            board.piece_at(Square::new(color.home_row(), col)) == Some(Piece::new(color, kind))
        };
        let white_king = has(Color::White, PieceKind::King, 4);
        let black_king = has(Color::Black, PieceKind::King, 4);
        Self {
            white_kingside: white_king && has(Color::White, PieceKind::Rook, 7),
            white_queenside: white_king && has(Color::White, PieceKind::Rook, 0),
            black_kingside: black_king && has(Color::Black, PieceKind::Rook, 7),
            black_queenside: black_king && has(Color::Black, PieceKind::Rook, 0),
        }
    }

    #[inline]
    pub fn kingside(&self, color: Color) -> bool {
        match color {
            Color::White => self.white_kingside,
            Color::Black => self.black_kingside,
        }
    }

    #[inline]
    pub fn queenside(&self, color: Color) -> bool {
        match color {
            Color::White => self.white_queenside,
            Color::Black => self.black_queenside,
        }
    }

    pub fn revoke_color(&mut self, color: Color) {
        match color {
            Color::White => {
                self.white_kingside = false;
                self.white_queenside = false;
            }
            Color::Black => {
                self.black_kingside = false;
                self.black_queenside = false;
            }
        }
    }

    /// Clear the flag tied to a rook home square, if `square` is one.
    pub fn revoke_rook_square(&mut self, square: Square) {
        match (square.row, square.col) {
            (7, 7) => self.white_kingside = false,
            (7, 0) => self.white_queenside = false,
            (0, 7) => self.black_kingside = false,
            (0, 0) => self.black_queenside = false,
            _ => {}
        }
    }
}

/// An executed move. `captured` is filled in by the executor so undo can
/// put the captured piece back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub start: Square,
    pub end: Square,
    pub piece: Piece,
    pub captured: Option<Piece>,
}

impl Move {
    #[inline]
    pub const fn new(start: Square, end: Square, piece: Piece) -> Self {
        Self {
            start,
            end,
            piece,
            captured: None,
        }
    }

    /// King moves spanning two files are castling moves.
    #[inline]
    pub fn is_castling(&self) -> bool {
        self.piece.kind == PieceKind::King
            && self.start.row == self.end.row
            && self.start.col.abs_diff(self.end.col) == 2
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.start, self.end)
    }
}
