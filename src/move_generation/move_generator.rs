//! Move generator abstraction.
//!
//! Generators answer "where can this piece go" for a board position. The
//! engines, detectors and perft all go through this trait so the pseudo-legal
//! and fully legal rule sets can be swapped.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{CastlingRights, Color, Move, Piece, Square};

pub trait MoveGenerator: Send + Sync {
    /// Destinations for `piece` standing on `start`, in row-major order.
    fn destinations(
        &self,
        board: &Board,
        start: Square,
        piece: Piece,
        castling_rights: &CastlingRights,
    ) -> Vec<Square>;

    /// Every move available to `color`, piece by piece in row-major order.
    fn moves_for(
        &self,
        board: &Board,
        color: Color,
        castling_rights: &CastlingRights,
    ) -> Vec<Move> {
        board
            .pieces_of(color)
            .into_iter()
            .flat_map(|(start, piece)| {
                self.destinations(board, start, piece, castling_rights)
                    .into_iter()
                    .map(move |end| Move::new(start, end, piece))
            })
            .collect()
    }

    fn has_any_move(&self, board: &Board, color: Color, castling_rights: &CastlingRights) -> bool {
        board
            .pieces_of(color)
            .into_iter()
            .any(|(start, piece)| {
                !self
                    .destinations(board, start, piece, castling_rights)
                    .is_empty()
            })
    }
}
