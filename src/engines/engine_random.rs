//! Random-move engine.
//!
//! Shuffles the side's pieces, takes the first one that can move and picks
//! one of its destinations uniformly. Used for diagnostics, integration
//! testing and low-strength play.

use rand::prelude::{IndexedRandom, SliceRandom};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::game_state::board::Board;
use crate::game_state::chess_types::{CastlingRights, Color, Move};
use crate::move_generation::legal_move_generator::LegalMoveGenerator;
use crate::move_generation::move_generator::MoveGenerator;

pub struct RandomEngine {
    move_generator: LegalMoveGenerator,
    rng: StdRng,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            move_generator: LegalMoveGenerator,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Reproducible move sequence for tests and seeded matches.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            move_generator: LegalMoveGenerator,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "Random"
    }

    fn choose_move(
        &mut self,
        board: &Board,
        color: Color,
        castling_rights: &CastlingRights,
    ) -> EngineOutput {
        let mut pieces = board.pieces_of(color);
        pieces.shuffle(&mut self.rng);

        let mut out = EngineOutput::default();
        out.info_lines
            .push(format!("info string random_engine pieces {}", pieces.len()));

        for (start, piece) in pieces {
            let destinations = self
                .move_generator
                .destinations(board, start, piece, castling_rights);
            if let Some(&end) = destinations.choose(&mut self.rng) {
                out.info_lines.push(format!(
                    "info string random_engine piece {piece} destinations {}",
                    destinations.len()
                ));
                out.best_move = Some(Move::new(start, end, piece));
                return out;
            }
        }

        out.info_lines
            .push("info string random_engine no legal moves".to_owned());
        out
    }
}
