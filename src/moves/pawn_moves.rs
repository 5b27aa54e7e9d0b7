//! Pawn movement and attack predicates.
//!
//! Pushes and diagonal captures only; en passant and promotion are not
//! modeled.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Piece, Square};

pub fn is_valid_pawn_move(board: &Board, start: Square, end: Square, piece: Piece) -> bool {
    let forward = piece.color.forward();
    let d_row = end.row as i8 - start.row as i8;
    let d_col = end.col as i8 - start.col as i8;

    if d_col == 0 {
        if d_row == forward {
            return board.is_empty(end);
        }
        if d_row == 2 * forward && start.row == piece.color.pawn_home_row() {
            return match start.offset(forward, 0) {
                Some(mid) => board.is_empty(mid) && board.is_empty(end),
                None => false,
            };
        }
        return false;
    }

    if d_col.abs() == 1 && d_row == forward {
        return matches!(board.piece_at(end), Some(target) if target.color != piece.color);
    }

    false
}

/// Squares a pawn threatens: the two forward diagonals, occupied or not.
#[inline]
pub fn pawn_attacks(start: Square, target: Square, piece: Piece) -> bool {
    let d_row = target.row as i8 - start.row as i8;
    d_row == piece.color.forward() && start.col.abs_diff(target.col) == 1
}
