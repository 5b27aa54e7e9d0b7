//! Canonical chess-rule constants.
//!
//! Static rule-related literals such as the standard starting placement and
//! the material table used by the greedy engine.

use crate::game_state::chess_types::PieceKind;

/// Piece-placement field of the standard starting position.
pub const STARTING_POSITION_PLACEMENT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

/// Material value of a captured piece. Kings score nothing.
#[inline]
pub const fn material_value(kind: PieceKind) -> i32 {
    match kind {
        PieceKind::Pawn => 1,
        PieceKind::Knight => 3,
        PieceKind::Bishop => 3,
        PieceKind::Rook => 5,
        PieceKind::Queen => 9,
        PieceKind::King => 0,
    }
}
