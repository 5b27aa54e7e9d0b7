//! Perft node counting over any `MoveGenerator`.
//!
//! Walks the move tree with `Game::execute`/`Game::undo`, so it exercises
//! generation, execution and undo together.

use crate::errors::ChessResult;
use crate::game_state::chess_types::Game;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::move_generator::MoveGenerator;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub castles: usize,
    pub checks: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.castles += rhs.castles;
        self.checks += rhs.checks;
    }
}

/// Count leaf nodes `depth` plies below the current position of `game`.
/// The game is left exactly as it was found.
pub fn perft<G: MoveGenerator>(
    generator: &G,
    game: &mut Game,
    depth: u8,
) -> ChessResult<PerftCounts> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }

    let moves = generator.moves_for(game.board(), game.turn(), game.castling_rights());
    let mut total = PerftCounts::default();

    for mv in moves {
        let played = game.execute(mv.start, mv.end)?;

        if depth == 1 {
            total.nodes += 1;
            if played.captured.is_some() {
                total.captures += 1;
            }
            if played.is_castling() {
                total.castles += 1;
            }
            if is_king_in_check(game.board(), game.turn()) {
                total.checks += 1;
            }
        } else {
            total.merge(perft(generator, game, depth - 1)?);
        }

        game.undo();
    }

    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::{perft, PerftCounts};
    use crate::game_state::chess_types::Game;
    use crate::move_generation::legal_move_generator::LegalMoveGenerator;
    use crate::utils::fen_parser::generate_placement;

    #[test]
    fn start_position_matches_known_counts() {
        let mut game = Game::new();
        let expected = [
            PerftCounts { nodes: 20, captures: 0, castles: 0, checks: 0 },
            PerftCounts { nodes: 400, captures: 0, castles: 0, checks: 0 },
            PerftCounts { nodes: 8902, captures: 34, castles: 0, checks: 12 },
        ];
        for (depth, counts) in expected.into_iter().enumerate() {
            let got = perft(&LegalMoveGenerator, &mut game, depth as u8 + 1).expect("perft should run");
            assert_eq!(got, counts, "depth {}", depth + 1);
        }
        assert_eq!(game.ply_count(), 0);
    }

    #[test]
    fn kiwipete_root_moves_include_both_castles() {
        let mut game = Game::from_fen_placement("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R")
            .expect("placement should parse");
        let counts = perft(&LegalMoveGenerator, &mut game, 1).expect("perft should run");
        assert_eq!(counts.nodes, 48);
        assert_eq!(counts.captures, 8);
        assert_eq!(counts.castles, 2);
        assert_eq!(
            generate_placement(game.board()),
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R"
        );
    }

    #[test]
    fn sparse_endgame_matches_known_counts() {
        let mut game = Game::from_fen_placement("8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8").expect("placement should parse");
        assert_eq!(perft(&LegalMoveGenerator, &mut game, 1).expect("perft should run").nodes, 14);
        assert_eq!(perft(&LegalMoveGenerator, &mut game, 2).expect("perft should run").nodes, 191);
    }
}
