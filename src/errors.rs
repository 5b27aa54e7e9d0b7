//! Errors used throughout the rules engine.
//!
//! `ChessError` is the single error type returned by parsing, execution and
//! configuration code. Running out of moves and undoing with an empty history
//! are expected game states and are not represented here.

use thiserror::Error;

use crate::game_state::chess_types::Square;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessError {
    /// A placement field symbol outside `rnbqkp`/`RNBQKP`, digits and `/`.
    #[error("invalid piece symbol '{0}' in placement field")]
    InvalidPiece(char),

    /// Structurally broken placement field (rank count or file overflow).
    #[error("invalid placement field: {0}")]
    InvalidPlacement(String),

    #[error("invalid algebraic square: {0}")]
    InvalidSquare(String),

    /// A boundary identifier that is not of the form `{color}-{kind}`.
    #[error("invalid piece identifier: {0}")]
    InvalidPieceName(String),

    /// Tried to execute a move whose start square holds no piece.
    #[error("no piece on start square {0}")]
    EmptySquare(Square),

    #[error("invalid value '{value}' for {key}")]
    InvalidConfig { key: String, value: String },
}

pub type ChessResult<T> = Result<T, ChessError>;
