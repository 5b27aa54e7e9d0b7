//! Engine abstraction layer used by the match harness and binaries.
//!
//! An engine is a decision function over a position: given the board, the
//! side to move and the castling rights it names one move (or none). Any
//! implementation can be plugged in per color.

use tracing::debug;

use crate::errors::ChessResult;
use crate::game_state::board::Board;
use crate::game_state::chess_types::{CastlingRights, Color, Game, Move};

#[derive(Debug, Clone, Default)]
pub struct EngineOutput {
    pub best_move: Option<Move>,
    pub info_lines: Vec<String>,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    /// Pick a move for `color` without touching the board.
    fn choose_move(
        &mut self,
        board: &Board,
        color: Color,
        castling_rights: &CastlingRights,
    ) -> EngineOutput;

    /// Choose for the side to move and execute the choice. `Ok(false)` means
    /// the side had no move at all.
    fn play_turn(&mut self, game: &mut Game) -> ChessResult<bool> {
        let output = self.choose_move(game.board(), game.turn(), game.castling_rights());
        for line in &output.info_lines {
            debug!(engine = self.name(), "{line}");
        }

        match output.best_move {
            Some(mv) => {
                game.execute(mv.start, mv.end)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
