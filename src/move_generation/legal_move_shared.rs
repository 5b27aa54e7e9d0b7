//! Per-kind dispatch over the movement predicates.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{CastlingRights, Piece, PieceKind, Square};
use crate::moves::bishop_moves::is_valid_bishop_move;
use crate::moves::king_moves::{is_king_step, is_valid_king_move};
use crate::moves::knight_moves::is_valid_knight_move;
use crate::moves::pawn_moves::{is_valid_pawn_move, pawn_attacks};
use crate::moves::queen_moves::is_valid_queen_move;
use crate::moves::rook_moves::is_valid_rook_move;

/// Pseudo-legal geometry test for `piece` moving `start -> end`, ignoring
/// what stands on `end` (except for pawns) and ignoring self-check.
#[inline]
pub fn is_pseudo_legal(
    board: &Board,
    start: Square,
    end: Square,
    piece: Piece,
    castling_rights: &CastlingRights,
) -> bool {
    match piece.kind {
        PieceKind::Pawn => is_valid_pawn_move(board, start, end, piece),
        PieceKind::Knight => is_valid_knight_move(board, start, end, piece),
        PieceKind::Bishop => is_valid_bishop_move(board, start, end, piece),
        PieceKind::Rook => is_valid_rook_move(board, start, end, piece),
        PieceKind::Queen => is_valid_queen_move(board, start, end, piece),
        PieceKind::King => is_valid_king_move(board, start, end, piece, castling_rights),
    }
}

/// Whether `piece` on `from` threatens `target`. Same as the move geometry
/// except pawns hit diagonals only and kings never "attack" via castling.
#[inline]
pub fn attacks_square(board: &Board, from: Square, target: Square, piece: Piece) -> bool {
    match piece.kind {
        PieceKind::Pawn => pawn_attacks(from, target, piece),
        PieceKind::Knight => is_valid_knight_move(board, from, target, piece),
        PieceKind::Bishop => is_valid_bishop_move(board, from, target, piece),
        PieceKind::Rook => is_valid_rook_move(board, from, target, piece),
        PieceKind::Queen => is_valid_queen_move(board, from, target, piece),
        PieceKind::King => is_king_step(from, target),
    }
}
