//! Board mutation primitives shared by simulation and the game executor.
//!
//! `apply_move_in_place` does not check legality. It moves whatever stands on
//! `start`, remembers the captured piece, and relocates the rook when the
//! move is a castling move from the king's home square.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{CastlingRights, Move, Piece, PieceKind, Square};

/// Rook relocation performed alongside a castling king move.
pub type RookShift = (Square, Square);

/// Rook start and end squares for a castling king move, if `mv` is one.
pub fn castling_rook_shift(mv: &Move) -> Option<RookShift> {
    let home_row = mv.piece.color.home_row();
    if !mv.is_castling() || mv.start != Square::new(home_row, 4) {
        return None;
    }
    match mv.end.col {
        6 => Some((Square::new(home_row, 7), Square::new(home_row, 5))),
        2 => Some((Square::new(home_row, 0), Square::new(home_row, 3))),
        _ => None,
    }
}

/// Move the piece on `start` to `end`. Returns `None` when `start` is empty.
pub fn apply_move_in_place(
    board: &mut Board,
    start: Square,
    end: Square,
) -> Option<(Move, Option<RookShift>)> {
    let piece = board.take_piece(start)?;
    let mut mv = Move::new(start, end, piece);
    mv.captured = board.set_piece(end, piece);

    let rook = Piece::new(piece.color, PieceKind::Rook);
    let rook_shift = castling_rook_shift(&mv)
        .filter(|&(from, to)| board.piece_at(from) == Some(rook) && board.is_empty(to));
    if let Some((from, to)) = rook_shift {
        board.take_piece(from);
        board.set_piece(to, rook);
    }

    Some((mv, rook_shift))
}

/// Reverse of [`apply_move_in_place`].
pub fn revert_move_in_place(board: &mut Board, mv: &Move, rook_shift: Option<RookShift>) {
    if let Some((from, to)) = rook_shift {
        if let Some(rook) = board.take_piece(to) {
            board.set_piece(from, rook);
        }
    }
    board.take_piece(mv.end);
    if let Some(captured) = mv.captured {
        board.set_piece(mv.end, captured);
    }
    board.set_piece(mv.start, mv.piece);
}

/// Copy-make helper used for look-ahead simulation.
pub fn apply_move(board: &Board, start: Square, end: Square) -> Board {
    let mut next = *board;
    apply_move_in_place(&mut next, start, end);
    next
}

/// Clear rights invalidated by `mv`: king moves clear both wings, and any
/// move from or onto a rook home square clears that wing.
pub fn update_castling_rights(rights: &mut CastlingRights, mv: &Move) {
    if mv.piece.kind == PieceKind::King {
        rights.revoke_color(mv.piece.color);
    }
    rights.revoke_rook_square(mv.start);
    rights.revoke_rook_square(mv.end);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::Color;
    use crate::utils::algebraic::sq;
    use crate::utils::fen_parser::{generate_placement, parse_placement};

    #[test]
    fn capture_is_recorded_and_reverted() {
        let mut board = parse_placement("4k3/8/8/3q4/4P3/8/8/4K3").expect("placement should parse");
        let before = board;
        let (mv, shift) = apply_move_in_place(&mut board, sq("e4"), sq("d5")).expect("pawn on e4");
        assert_eq!(mv.captured, Some(Piece::new(Color::Black, PieceKind::Queen)));
        assert_eq!(shift, None);
        assert!(board.is_empty(sq("e4")));

        revert_move_in_place(&mut board, &mv, shift);
        assert_eq!(board, before);
    }

    #[test]
    fn castling_moves_the_rook_and_back() {
        let mut board = parse_placement("r3k2r/8/8/8/8/8/8/R3K2R").expect("placement should parse");
        let before = board;

        let (mv, shift) = apply_move_in_place(&mut board, sq("e1"), sq("g1")).expect("king on e1");
        assert_eq!(shift, Some((sq("h1"), sq("f1"))));
        assert_eq!(generate_placement(&board), "r3k2r/8/8/8/8/8/8/R4RK1");

        revert_move_in_place(&mut board, &mv, shift);
        assert_eq!(board, before);

        let (_, shift) = apply_move_in_place(&mut board, sq("e8"), sq("c8")).expect("king on e8");
        assert_eq!(shift, Some((sq("a8"), sq("d8"))));
        assert_eq!(generate_placement(&board), "2kr3r/8/8/8/8/8/8/R3K2R");
    }

    #[test]
    fn empty_start_square_applies_nothing() {
        let mut board = Board::empty();
        assert!(apply_move_in_place(&mut board, sq("a1"), sq("a2")).is_none());
        assert_eq!(apply_move(&board, sq("a1"), sq("a2")), Board::empty());
    }

    #[test]
    fn rights_are_revoked_by_king_rook_and_capture() {
        let king = Piece::new(Color::White, PieceKind::King);
        let rook = Piece::new(Color::Black, PieceKind::Rook);
        let bishop = Piece::new(Color::White, PieceKind::Bishop);

        let mut rights = CastlingRights::all();
        update_castling_rights(&mut rights, &Move::new(sq("e1"), sq("f1"), king));
        assert!(!rights.white_kingside && !rights.white_queenside);
        assert!(rights.black_kingside && rights.black_queenside);

        let mut rights = CastlingRights::all();
        update_castling_rights(&mut rights, &Move::new(sq("a8"), sq("a5"), rook));
        assert!(!rights.black_queenside);
        assert!(rights.black_kingside);

        let mut rights = CastlingRights::all();
        update_castling_rights(&mut rights, &Move::new(sq("b2"), sq("h8"), bishop));
        assert!(!rights.black_kingside);
        assert!(rights.white_kingside && rights.white_queenside && rights.black_queenside);
    }
}
