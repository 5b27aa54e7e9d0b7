//! Shared ray walking for rooks, bishops and queens.

use crate::game_state::board::Board;
use crate::game_state::chess_types::Square;

/// Squares strictly between `start` and `end` when they share a row, column
/// or diagonal. `None` when they are not aligned (or are the same square).
pub fn squares_between(start: Square, end: Square) -> Option<Vec<Square>> {
    let d_row = end.row as i8 - start.row as i8;
    let d_col = end.col as i8 - start.col as i8;
    if (d_row, d_col) == (0, 0) {
        return None;
    }
    let aligned = d_row == 0 || d_col == 0 || d_row.abs() == d_col.abs();
    if !aligned {
        return None;
    }

    let step = (d_row.signum(), d_col.signum());
    let mut between = Vec::with_capacity(6);
    let mut current = start.offset(step.0, step.1)?;
    while current != end {
        between.push(current);
        current = current.offset(step.0, step.1)?;
    }
    Some(between)
}

/// True when every square strictly between the two is empty.
#[inline]
pub fn path_is_clear(board: &Board, between: &[Square]) -> bool {
    between.iter().all(|&sq| board.is_empty(sq))
}
