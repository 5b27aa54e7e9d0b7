use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::RookShift;

/// Single undo record pushed by `Game::execute` and popped by `Game::undo`.
#[derive(Debug, Clone)]
pub struct UndoState {
    pub mv: Move,
    /// Side that was to move before `mv` was played.
    pub prev_turn: Color,
    pub prev_castling_rights: CastlingRights,
    pub rook_shift: Option<RookShift>,
}
