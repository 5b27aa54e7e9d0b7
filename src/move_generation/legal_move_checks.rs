//! Check, checkmate and stalemate detection.
//!
//! Checkmate and stalemate are both "no legal move" positions, told apart
//! by whether the side to move is currently in check. Legal moves come from
//! [`LegalMoveGenerator`], so the same self-check filter applies everywhere.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{CastlingRights, Color, Game, Square};
use crate::move_generation::legal_move_generator::LegalMoveGenerator;
use crate::move_generation::legal_move_shared::attacks_square;
use crate::move_generation::move_generator::MoveGenerator;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    /// Side to move is in check but has a way out.
    Check,
    Checkmate { winner: Color },
    Stalemate,
}

impl GameStatus {
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, GameStatus::Checkmate { .. } | GameStatus::Stalemate)
    }
}

/// Whether any piece of `attacker_color` attacks `square`.
pub fn is_square_attacked(board: &Board, square: Square, attacker_color: Color) -> bool {
    board
        .pieces_of(attacker_color)
        .into_iter()
        .any(|(from, piece)| attacks_square(board, from, square, piece))
}

/// Whether a king of `king_color` standing on `king_square` is attacked.
#[inline]
pub fn is_in_check(board: &Board, king_square: Square, king_color: Color) -> bool {
    is_square_attacked(board, king_square, king_color.opposite())
}

/// Locates the king first. A side without a king is never in check.
#[inline]
pub fn is_king_in_check(board: &Board, color: Color) -> bool {
    board
        .king_square(color)
        .is_some_and(|king_sq| is_in_check(board, king_sq, color))
}

pub fn is_checkmate(
    board: &Board,
    king_square: Square,
    king_color: Color,
    castling_rights: &CastlingRights,
) -> bool {
    if !is_in_check(board, king_square, king_color) {
        return false;
    }
    !LegalMoveGenerator.has_any_move(board, king_color, castling_rights)
}

pub fn is_stalemate(board: &Board, current_color: Color, castling_rights: &CastlingRights) -> bool {
    if is_king_in_check(board, current_color) {
        return false;
    }
    !LegalMoveGenerator.has_any_move(board, current_color, castling_rights)
}

/// Classify the position for the side to move in `game`.
pub fn game_status(game: &Game) -> GameStatus {
    let board = game.board();
    let color = game.turn();
    let in_check = is_king_in_check(board, color);
    let can_move = LegalMoveGenerator.has_any_move(board, color, game.castling_rights());

    match (in_check, can_move) {
        (true, false) => GameStatus::Checkmate {
            winner: color.opposite(),
        },
        (false, false) => GameStatus::Stalemate,
        (true, true) => GameStatus::Check,
        (false, true) => GameStatus::Ongoing,
    }
}
