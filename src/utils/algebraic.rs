//! Algebraic coordinate parsing (`"e4"` to `Square`).
//!
//! The reverse direction is `Square`'s `Display` impl.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::Square;

/// Convert algebraic notation (for example: "e4") to a board square.
#[inline]
pub fn algebraic_to_square(square: &str) -> ChessResult<Square> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessError::InvalidSquare(square.to_owned()));
    }

    let file = bytes[0];
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(ChessError::InvalidSquare(square.to_owned()));
    }

    Ok(Square::new(b'8' - rank, file - b'a'))
}

/// Shorthand used heavily by tests: `sq("e2")`.
#[cfg(test)]
pub fn sq(square: &str) -> Square {
    algebraic_to_square(square).expect("test square should be valid")
}
