//! Game aggregate: board, side to move, castling rights and history.
//!
//! One `Game` is owned by one turn-loop controller. Nothing here is
//! synchronized; hosts that share a game across threads must serialize
//! access themselves. Independent games share no state.

use tracing::{debug, warn};

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::{
    apply_move_in_place, revert_move_in_place, update_castling_rights,
};
use crate::utils::fen_parser::parse_placement;

#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    turn: Color,
    castling_rights: CastlingRights,
    undo_stack: Vec<UndoState>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Standard starting position, White to move, all rights available.
    pub fn new() -> Self {
        Self::from_parts(Board::starting_position(), Color::White, CastlingRights::all())
    }

    /// Start from a FEN placement field. White moves first and castling
    /// rights are derived from where the kings and rooks stand.
    pub fn from_fen_placement(fen: &str) -> ChessResult<Self> {
        let board = parse_placement(fen)?;
        let rights = CastlingRights::from_board(&board);
        Ok(Self::from_parts(board, Color::White, rights))
    }

    pub fn from_parts(board: Board, turn: Color, castling_rights: CastlingRights) -> Self {
        Self {
            board,
            turn,
            castling_rights,
            undo_stack: Vec::new(),
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn turn(&self) -> Color {
        self.turn
    }

    #[inline]
    pub fn castling_rights(&self) -> &CastlingRights {
        &self.castling_rights
    }

    /// Executed moves, oldest first.
    pub fn move_history(&self) -> impl Iterator<Item = &Move> + '_ {
        self.undo_stack.iter().map(|undo| &undo.mv)
    }

    /// Side to move before each executed move, parallel to `move_history`.
    pub fn turn_history(&self) -> impl Iterator<Item = Color> + '_ {
        self.undo_stack.iter().map(|undo| undo.prev_turn)
    }

    #[inline]
    pub fn ply_count(&self) -> usize {
        self.undo_stack.len()
    }

    /// Play the piece on `start` to `end` and hand the turn over.
    ///
    /// Legality is the caller's concern; any occupant of `end` is captured.
    pub fn execute(&mut self, start: Square, end: Square) -> ChessResult<Move> {
        let (mv, rook_shift) =
            apply_move_in_place(&mut self.board, start, end).ok_or(ChessError::EmptySquare(start))?;

        self.undo_stack.push(UndoState {
            mv,
            prev_turn: self.turn,
            prev_castling_rights: self.castling_rights,
            rook_shift,
        });
        update_castling_rights(&mut self.castling_rights, &mv);
        self.turn = self.turn.opposite();

        debug!(
            mv = %mv,
            piece = %mv.piece,
            captured = ?mv.captured.map(|p| p.to_string()),
            ply = self.undo_stack.len(),
            "executed move"
        );
        Ok(mv)
    }

    /// Take back the last move. Returns the side to move again, or `None`
    /// when there is nothing to undo.
    pub fn undo(&mut self) -> Option<Color> {
        let Some(undo) = self.undo_stack.pop() else {
            warn!("undo requested with empty history");
            return None;
        };

        revert_move_in_place(&mut self.board, &undo.mv, undo.rook_shift);
        self.castling_rights = undo.prev_castling_rights;
        self.turn = undo.prev_turn;

        debug!(mv = %undo.mv, ply = self.undo_stack.len(), "undid move");
        Some(self.turn)
    }
}

#[cfg(test)]
mod tests {
    use super::Game;
    use crate::errors::ChessError;
    use crate::game_state::chess_types::*;
    use crate::utils::algebraic::sq;
    use crate::utils::fen_parser::generate_placement;

    #[test]
    fn execute_moves_piece_records_history_and_flips_turn() {
        let mut game = Game::new();
        let mv = game.execute(sq("e2"), sq("e4")).expect("pawn on e2");

        assert_eq!(mv.piece, Piece::new(Color::White, PieceKind::Pawn));
        assert_eq!(mv.captured, None);
        assert!(game.board().is_empty(sq("e2")));
        assert_eq!(game.board().piece_at(sq("e4")), Some(mv.piece));
        assert_eq!(game.turn(), Color::Black);
        assert_eq!(game.move_history().copied().collect::<Vec<_>>(), vec![mv]);
        assert_eq!(game.turn_history().collect::<Vec<_>>(), vec![Color::White]);
    }

    #[test]
    fn undo_restores_start_square_and_empties_destination() {
        let mut game = Game::new();
        game.execute(sq("g1"), sq("f3")).expect("knight on g1");

        assert_eq!(game.undo(), Some(Color::White));
        assert_eq!(
            game.board().piece_at(sq("g1")),
            Some(Piece::new(Color::White, PieceKind::Knight))
        );
        assert!(game.board().is_empty(sq("f3")));
        assert_eq!(game.board(), &Board::starting_position());
        assert_eq!(game.ply_count(), 0);
    }

    #[test]
    fn undo_restores_a_captured_piece() {
        let mut game = Game::from_fen_placement("4k3/8/8/3q4/4P3/8/8/4K3").expect("placement should parse");
        let mv = game.execute(sq("e4"), sq("d5")).expect("pawn on e4");
        assert_eq!(mv.captured, Some(Piece::new(Color::Black, PieceKind::Queen)));

        game.undo();
        assert_eq!(
            game.board().piece_at(sq("d5")),
            Some(Piece::new(Color::Black, PieceKind::Queen))
        );
        assert_eq!(
            game.board().piece_at(sq("e4")),
            Some(Piece::new(Color::White, PieceKind::Pawn))
        );
    }

    #[test]
    fn undo_with_empty_history_is_a_no_op() {
        let mut game = Game::new();
        assert_eq!(game.undo(), None);
        assert_eq!(game.turn(), Color::White);
        assert_eq!(game.board(), &Board::starting_position());
    }

    #[test]
    fn execute_from_empty_square_fails_without_side_effects() {
        let mut game = Game::new();
        assert_eq!(game.execute(sq("e4"), sq("e5")), Err(ChessError::EmptySquare(sq("e4"))));
        assert_eq!(game.ply_count(), 0);
        assert_eq!(game.turn(), Color::White);
    }

    #[test]
    fn castling_revokes_rights_and_undo_brings_them_back() {
        let mut game = Game::from_fen_placement("r3k2r/8/8/8/8/8/8/R3K2R").expect("placement should parse");
        assert_eq!(game.castling_rights(), &CastlingRights::all());

        game.execute(sq("e1"), sq("g1")).expect("king on e1");
        assert_eq!(generate_placement(game.board()), "r3k2r/8/8/8/8/8/8/R4RK1");
        assert!(!game.castling_rights().white_kingside);
        assert!(!game.castling_rights().white_queenside);
        assert!(game.castling_rights().black_kingside);

        game.execute(sq("a8"), sq("a1")).expect("rook on a8");
        assert!(!game.castling_rights().black_queenside);

        assert_eq!(game.undo(), Some(Color::Black));
        assert_eq!(game.undo(), Some(Color::White));
        assert_eq!(generate_placement(game.board()), "r3k2r/8/8/8/8/8/8/R3K2R");
        assert_eq!(game.castling_rights(), &CastlingRights::all());
    }

    #[test]
    fn independent_games_do_not_share_history() {
        let mut first = Game::new();
        let second = Game::new();
        first.execute(sq("d2"), sq("d4")).expect("pawn on d2");
        assert_eq!(first.ply_count(), 1);
        assert_eq!(second.ply_count(), 0);
    }
}
