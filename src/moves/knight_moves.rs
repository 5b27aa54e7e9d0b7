//! Knight movement predicate. Knights jump, so occupancy never matters here.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Piece, Square};

#[inline]
pub fn is_valid_knight_move(_board: &Board, start: Square, end: Square, _piece: Piece) -> bool {
    matches!(
        (start.row.abs_diff(end.row), start.col.abs_diff(end.col)),
        (2, 1) | (1, 2)
    )
}

#[cfg(test)]
mod tests {
    use super::is_valid_knight_move;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};
    use crate::utils::algebraic::sq;

    const KNIGHT: Piece = Piece::new(Color::White, PieceKind::Knight);

    #[test]
    fn empty_board_knight_moves_iff_l_shape() {
        let board = Board::empty();
        for start in Square::all() {
            for end in Square::all() {
                let shape = (start.row.abs_diff(end.row), start.col.abs_diff(end.col));
                let expected = shape == (1, 2) || shape == (2, 1);
                assert_eq!(is_valid_knight_move(&board, start, end, KNIGHT), expected);
            }
        }
    }

    #[test]
    fn knight_in_the_corner_has_two_targets() {
        let board = Board::starting_position();
        let targets: Vec<_> = Square::all()
            .filter(|&end| is_valid_knight_move(&board, sq("a1"), end, KNIGHT))
            .collect();
        assert_eq!(targets, vec![sq("b3"), sq("c2")]);
    }
}
