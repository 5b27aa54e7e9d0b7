//! FEN piece-placement parser.
//!
//! Only the first whitespace-separated field of a FEN string is consumed.
//! Side to move, castling, en-passant and clock fields are ignored; callers
//! must not assume any of them are derived here.

use tracing::trace;

use crate::errors::{ChessError, ChessResult};
use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};

/// Parse the placement field (ranks 8 to 1, so row 0 first) into a board.
pub fn parse_placement(fen: &str) -> ChessResult<Board> {
    let placement = fen
        .split_whitespace()
        .next()
        .ok_or_else(|| ChessError::InvalidPlacement("empty placement field".to_owned()))?;

    let ranks: Vec<&str> = placement.split('/').collect();
    if ranks.len() != 8 {
        return Err(ChessError::InvalidPlacement(format!(
            "expected 8 ranks, found {}",
            ranks.len()
        )));
    }

    let mut board = Board::empty();
    for (row, rank_str) in ranks.iter().enumerate() {
        let mut col = 0usize;

        for ch in rank_str.chars() {
            if let Some(run) = ch.to_digit(10) {
                if !(1..=8).contains(&run) {
                    return Err(ChessError::InvalidPlacement(format!(
                        "invalid empty-square count '{ch}'"
                    )));
                }
                col += run as usize;
                continue;
            }

            let piece = piece_from_fen_char(ch).ok_or(ChessError::InvalidPiece(ch))?;
            if col >= 8 {
                return Err(ChessError::InvalidPlacement(format!(
                    "rank {} has more than 8 files",
                    8 - row
                )));
            }
            board.set_piece(Square::new(row as u8, col as u8), piece);
            col += 1;
        }

        if col != 8 {
            return Err(ChessError::InvalidPlacement(format!(
                "rank {} covers {col} files instead of 8",
                8 - row
            )));
        }
    }

    trace!(placement, "parsed placement field");
    Ok(board)
}

/// Inverse of [`parse_placement`].
pub fn generate_placement(board: &Board) -> String {
    let mut out = String::with_capacity(72);
    for row in 0..8u8 {
        let mut empty_run = 0u8;
        for col in 0..8u8 {
            match board.piece_at(Square::new(row, col)) {
                Some(piece) => {
                    if empty_run > 0 {
                        out.push(char::from(b'0' + empty_run));
                        empty_run = 0;
                    }
                    out.push(piece_to_fen_char(piece));
                }
                None => empty_run += 1,
            }
        }
        if empty_run > 0 {
            out.push(char::from(b'0' + empty_run));
        }
        if row < 7 {
            out.push('/');
        }
    }
    out
}

fn piece_from_fen_char(ch: char) -> Option<Piece> {
    let color = if ch.is_ascii_uppercase() {
        Color::White
    } else if ch.is_ascii_lowercase() {
        Color::Black
    } else {
        return None;
    };

    let kind = match ch.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return None,
    };

    Some(Piece::new(color, kind))
}

fn piece_to_fen_char(piece: Piece) -> char {
    let ch = match piece.kind {
        PieceKind::Pawn => 'p',
        PieceKind::Knight => 'n',
        PieceKind::Bishop => 'b',
        PieceKind::Rook => 'r',
        PieceKind::Queen => 'q',
        PieceKind::King => 'k',
    };
    match piece.color {
        Color::White => ch.to_ascii_uppercase(),
        Color::Black => ch,
    }
}
