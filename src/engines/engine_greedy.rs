//! One-ply greedy capture engine.
//!
//! Walks the side's pieces and their destinations in row-major order and
//! keeps the move whose target square holds the most material. Quiet moves
//! score zero, so the very first move becomes the baseline and only a
//! strictly more valuable capture replaces it.

use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::game_state::board::Board;
use crate::game_state::chess_rules::material_value;
use crate::game_state::chess_types::{CastlingRights, Color};
use crate::move_generation::legal_move_generator::LegalMoveGenerator;
use crate::move_generation::move_generator::MoveGenerator;

pub struct GreedyEngine {
    move_generator: LegalMoveGenerator,
}

impl GreedyEngine {
    pub fn new() -> Self {
        Self {
            move_generator: LegalMoveGenerator,
        }
    }
}

impl Default for GreedyEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for GreedyEngine {
    fn name(&self) -> &str {
        "Greedy"
    }

    fn choose_move(
        &mut self,
        board: &Board,
        color: Color,
        castling_rights: &CastlingRights,
    ) -> EngineOutput {
        let mut best_value = -1;
        let mut best_move = None;
        let mut candidates = 0usize;

        for mv in self.move_generator.moves_for(board, color, castling_rights) {
            candidates += 1;
            let value = board
                .piece_at(mv.end)
                .map_or(0, |target| material_value(target.kind));
            if value > best_value {
                best_value = value;
                best_move = Some(mv);
            }
        }

        let mut out = EngineOutput::default();
        out.info_lines.push(format!(
            "info string greedy_engine legal_moves {candidates}"
        ));
        if best_move.is_some() {
            out.info_lines.push(format!(
                "info string greedy_engine capture_score {best_value}"
            ));
        }
        out.best_move = best_move;
        out
    }
}

#[cfg(test)]
mod tests {
    use super::GreedyEngine;
    use crate::engines::engine_trait::Engine;
    use crate::game_state::chess_types::{CastlingRights, Color, Game, Move, Piece, PieceKind};
    use crate::utils::algebraic::sq;
    use crate::utils::fen_parser::parse_placement;

    fn game(placement: &str, turn: Color) -> Game {
        let board = parse_placement(placement).expect("test placement should parse");
        Game::from_parts(board, turn, CastlingRights::none())
    }

    #[test]
    fn greedy_prefers_the_queen_capture() {
        // The rook on a1 can take a pawn on a5 or the queen on h1.
        let game = game("k7/8/8/p7/8/8/8/R6q w", Color::White);
        let mut engine = GreedyEngine::new();
        let out = engine.choose_move(game.board(), Color::White, game.castling_rights());
        assert_eq!(
            out.best_move,
            Some(Move::new(sq("a1"), sq("h1"), Piece::new(Color::White, PieceKind::Rook)))
        );
    }

    #[test]
    fn greedy_takes_the_capture_over_quiet_moves() {
        let mut game = game("4k3/8/8/3q4/4P3/8/8/K7", Color::White);
        let mut engine = GreedyEngine::new();
        assert_eq!(engine.play_turn(&mut game), Ok(true));
        assert_eq!(
            game.board().piece_at(sq("d5")),
            Some(Piece::new(Color::White, PieceKind::Pawn))
        );
    }

    #[test]
    fn without_captures_the_first_move_found_is_kept() {
        let game = Game::new();
        let mut engine = GreedyEngine::new();
        let out = engine.choose_move(game.board(), Color::White, game.castling_rights());
        // First white piece in row-major order is the a2 pawn; its first destination is a4.
        assert_eq!(
            out.best_move,
            Some(Move::new(sq("a2"), sq("a4"), Piece::new(Color::White, PieceKind::Pawn)))
        );
    }

    #[test]
    fn ties_keep_the_earliest_capture() {
        // Both the b3 knight and the g3 knight can take a rook.
        let game = game("k7/8/8/r6r/8/1N4N1/8/1K6", Color::White);
        let mut engine = GreedyEngine::new();
        let out = engine.choose_move(game.board(), Color::White, game.castling_rights());
        let mv = out.best_move.expect("captures are available");
        assert_eq!(mv.start, sq("b3"));
        assert_eq!(mv.end, sq("a5"));
    }

    #[test]
    fn greedy_returns_false_without_moves() {
        let mut game = game("7k/5Q2/6K1/8/8/8/8/8", Color::Black);
        let mut engine = GreedyEngine::new();
        assert_eq!(engine.play_turn(&mut game), Ok(false));
        assert_eq!(game.ply_count(), 0);
    }
}
