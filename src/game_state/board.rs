//! 8x8 mailbox board.
//!
//! The board is created once per game and mutated in place. Each square
//! holds at most one piece; king count is not validated.

use crate::game_state::chess_rules::STARTING_POSITION_PLACEMENT;
use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};
use crate::utils::fen_parser::parse_placement;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
}

impl Board {
    #[inline]
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn starting_position() -> Self {
        // The constant placement is covered by tests; fall back to empty if it ever breaks.
        parse_placement(STARTING_POSITION_PLACEMENT).unwrap_or_default()
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.squares[square.row as usize][square.col as usize]
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.piece_at(square).is_none()
    }

    /// Place `piece` on `square`, returning whatever stood there.
    #[inline]
    pub fn set_piece(&mut self, square: Square, piece: Piece) -> Option<Piece> {
        self.squares[square.row as usize][square.col as usize].replace(piece)
    }

    #[inline]
    pub fn take_piece(&mut self, square: Square) -> Option<Piece> {
        self.squares[square.row as usize][square.col as usize].take()
    }

    /// Pieces of `color` in row-major order.
    pub fn pieces_of(&self, color: Color) -> Vec<(Square, Piece)> {
        Square::all()
            .filter_map(|sq| self.piece_at(sq).map(|p| (sq, p)))
            .filter(|(_, p)| p.color == color)
            .collect()
    }

    /// First king of `color` in row-major order.
    pub fn king_square(&self, color: Color) -> Option<Square> {
        Square::all().find(|&sq| self.piece_at(sq) == Some(Piece::new(color, PieceKind::King)))
    }

    /// Row-major grid of `{color}-{kind}` identifiers for display collaborators.
    pub fn snapshot(&self) -> Vec<Vec<Option<String>>> {
        self.squares
            .iter()
            .map(|row| row.iter().map(|cell| cell.map(|p| p.to_string())).collect())
            .collect()
    }
}
