use crate::game_state::board::Board;
use crate::game_state::chess_types::{Piece, Square};
use crate::moves::bishop_moves::is_valid_bishop_move;
use crate::moves::rook_moves::is_valid_rook_move;

#[inline]
pub fn is_valid_queen_move(board: &Board, start: Square, end: Square, piece: Piece) -> bool {
    is_valid_rook_move(board, start, end, piece) || is_valid_bishop_move(board, start, end, piece)
}

#[cfg(test)]
mod tests {
    use super::is_valid_queen_move;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{Color, Piece, PieceKind};
    use crate::utils::algebraic::sq;

    const QUEEN: Piece = Piece::new(Color::White, PieceKind::Queen);

    #[test]
    fn queen_from_d4_reaches_twenty_seven_squares() {
        let board = Board::empty();
        let count = crate::game_state::chess_types::Square::all()
            .filter(|&end| is_valid_queen_move(&board, sq("d4"), end, QUEEN))
            .count();
        assert_eq!(count, 27);
    }

    #[test]
    fn queen_is_blocked_on_both_line_kinds() {
        let mut board = Board::empty();
        board.set_piece(sq("d6"), Piece::new(Color::Black, PieceKind::Pawn));
        board.set_piece(sq("f6"), Piece::new(Color::White, PieceKind::Pawn));
        assert!(is_valid_queen_move(&board, sq("d4"), sq("d6"), QUEEN));
        assert!(!is_valid_queen_move(&board, sq("d4"), sq("d7"), QUEEN));
        assert!(!is_valid_queen_move(&board, sq("d4"), sq("g7"), QUEEN));
        assert!(!is_valid_queen_move(&board, sq("d4"), sq("e6"), QUEEN));
    }
}
