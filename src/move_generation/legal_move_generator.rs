//! Destination generators.
//!
//! `PseudoLegalMoveGenerator` scans every square and keeps those the piece's
//! geometry allows, minus squares held by its own side. `LegalMoveGenerator`
//! additionally simulates each candidate and drops those that leave the
//! mover's king attacked, and applies the check-related castling rules.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{CastlingRights, Color, Move, Piece, PieceKind, Square};
use crate::move_generation::legal_move_apply::{apply_move, castling_rook_shift};
use crate::move_generation::legal_move_checks::{is_king_in_check, is_square_attacked};
use crate::move_generation::legal_move_shared::is_pseudo_legal;
use crate::move_generation::move_generator::MoveGenerator;
use crate::moves::king_moves::is_valid_castling;

pub struct PseudoLegalMoveGenerator;
pub struct LegalMoveGenerator;

impl MoveGenerator for PseudoLegalMoveGenerator {
    fn destinations(
        &self,
        board: &Board,
        start: Square,
        piece: Piece,
        castling_rights: &CastlingRights,
    ) -> Vec<Square> {
        Square::all()
            .filter(|&end| !matches!(board.piece_at(end), Some(p) if p.color == piece.color))
            .filter(|&end| is_pseudo_legal(board, start, end, piece, castling_rights))
            .collect()
    }
}

impl MoveGenerator for LegalMoveGenerator {
    fn destinations(
        &self,
        board: &Board,
        start: Square,
        piece: Piece,
        castling_rights: &CastlingRights,
    ) -> Vec<Square> {
        PseudoLegalMoveGenerator
            .destinations(board, start, piece, castling_rights)
            .into_iter()
            .filter(|&end| {
                piece.kind != PieceKind::King
                    || !is_valid_castling(board, start, end, piece, castling_rights)
                    || castling_is_safe(board, start, end, piece)
            })
            .filter(|&end| !is_king_in_check(&apply_move(board, start, end), piece.color))
            .collect()
    }
}

/// Castling additionally needs the king and rook on their home squares, and
/// the king may not start on or cross an attacked square. The landing square
/// is covered by the ordinary self-check filter.
fn castling_is_safe(board: &Board, start: Square, end: Square, piece: Piece) -> bool {
    let Some((rook_from, _)) = castling_rook_shift(&Move::new(start, end, piece)) else {
        return false;
    };
    if board.piece_at(rook_from) != Some(Piece::new(piece.color, PieceKind::Rook)) {
        return false;
    }

    let enemy = piece.color.opposite();
    let crossed = Square::new(start.row, (start.col + end.col) / 2);
    !is_square_attacked(board, start, enemy) && !is_square_attacked(board, crossed, enemy)
}

/// Convenience wrapper over the legal generator for a whole side.
pub fn legal_moves(board: &Board, color: Color, castling_rights: &CastlingRights) -> Vec<Move> {
    LegalMoveGenerator.moves_for(board, color, castling_rights)
}
