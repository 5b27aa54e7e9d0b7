//! King step and castling predicates.
//!
//! Castling here only checks the wing flag and that the squares between
//! king and rook are empty. Check-related castling restrictions live in the
//! legal move generator.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{CastlingRights, Piece, Square};

#[inline]
pub fn is_king_step(start: Square, end: Square) -> bool {
    start != end && start.row.abs_diff(end.row) <= 1 && start.col.abs_diff(end.col) <= 1
}

pub fn is_valid_king_move(
    board: &Board,
    start: Square,
    end: Square,
    piece: Piece,
    castling_rights: &CastlingRights,
) -> bool {
    is_king_step(start, end) || is_valid_castling(board, start, end, piece, castling_rights)
}

pub fn is_valid_castling(
    board: &Board,
    start: Square,
    end: Square,
    piece: Piece,
    castling_rights: &CastlingRights,
) -> bool {
    if start.row != end.row || start.col.abs_diff(end.col) != 2 {
        return false;
    }
    let row = start.row;
    let all_empty = |cols: &[u8]| cols.iter().all(|&col| board.is_empty(Square::new(row, col)));

    match end.col {
        6 => castling_rights.kingside(piece.color) && all_empty(&[5, 6]),
        2 => castling_rights.queenside(piece.color) && all_empty(&[1, 2, 3]),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::{is_valid_castling, is_valid_king_move};
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{CastlingRights, Color, Piece, PieceKind, Square};
    use crate::utils::algebraic::sq;
    use crate::utils::fen_parser::parse_placement;

    const WHITE_KING: Piece = Piece::new(Color::White, PieceKind::King);
    const BLACK_KING: Piece = Piece::new(Color::Black, PieceKind::King);

    #[test]
    fn king_steps_one_square_in_any_direction() {
        let board = Board::empty();
        let rights = CastlingRights::none();
        let targets = Square::all()
            .filter(|&end| is_valid_king_move(&board, sq("d4"), end, WHITE_KING, &rights))
            .count();
        assert_eq!(targets, 8);
        assert!(!is_valid_king_move(&board, sq("d4"), sq("d4"), WHITE_KING, &rights));
        assert!(!is_valid_king_move(&board, sq("d4"), sq("d6"), WHITE_KING, &rights));
    }

    #[test]
    fn castling_needs_flag_and_empty_squares() {
        let board = parse_placement("r3k2r/8/8/8/8/8/8/R3K2R").expect("placement should parse");
        let all = CastlingRights::all();
        assert!(is_valid_castling(&board, sq("e1"), sq("g1"), WHITE_KING, &all));
        assert!(is_valid_castling(&board, sq("e1"), sq("c1"), WHITE_KING, &all));
        assert!(is_valid_castling(&board, sq("e8"), sq("g8"), BLACK_KING, &all));
        assert!(is_valid_castling(&board, sq("e8"), sq("c8"), BLACK_KING, &all));

        let rights = CastlingRights {
            white_kingside: false,
            ..CastlingRights::all()
        };
        assert!(!is_valid_castling(&board, sq("e1"), sq("g1"), WHITE_KING, &rights));
        assert!(is_valid_castling(&board, sq("e8"), sq("g8"), BLACK_KING, &rights));
    }

    #[test]
    fn queenside_requires_the_b_file_square_empty() {
        let board = parse_placement("4k3/8/8/8/8/8/8/RN2K2R").expect("placement should parse");
        let all = CastlingRights::all();
        assert!(!is_valid_castling(&board, sq("e1"), sq("c1"), WHITE_KING, &all));
        assert!(is_valid_castling(&board, sq("e1"), sq("g1"), WHITE_KING, &all));
    }

    #[test]
    fn start_position_cannot_castle() {
        let board = Board::starting_position();
        let all = CastlingRights::all();
        assert!(!is_valid_king_move(&board, sq("e1"), sq("g1"), WHITE_KING, &all));
        assert!(!is_valid_king_move(&board, sq("e1"), sq("c1"), WHITE_KING, &all));
    }
}
