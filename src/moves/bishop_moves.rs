//! Bishop movement predicate.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Piece, Square};
use crate::moves::sliding::{path_is_clear, squares_between};

/// Strict diagonal (`|d_row| == |d_col| > 0`) with an empty path.
pub fn is_valid_bishop_move(board: &Board, start: Square, end: Square, _piece: Piece) -> bool {
    if start.row.abs_diff(end.row) != start.col.abs_diff(end.col) {
        return false;
    }
    match squares_between(start, end) {
        Some(between) => path_is_clear(board, &between),
        None => false,
    }
}
