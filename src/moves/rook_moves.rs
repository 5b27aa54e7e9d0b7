//! Rook movement predicate.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Piece, Square};
use crate::moves::sliding::{path_is_clear, squares_between};

/// Same row or column with nothing in between. Destination occupancy is
/// filtered by the generator, not here.
pub fn is_valid_rook_move(board: &Board, start: Square, end: Square, _piece: Piece) -> bool {
    if start.row != end.row && start.col != end.col {
        return false;
    }
    match squares_between(start, end) {
        Some(between) => path_is_clear(board, &between),
        None => false,
    }
}
