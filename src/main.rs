use std::process::ExitCode;

use tracing::error;

use meadow_chess::engines::engine_greedy::GreedyEngine;
use meadow_chess::engines::engine_random::RandomEngine;
use meadow_chess::errors::ChessResult;
use meadow_chess::utils::engine_match_harness::{play_engine_match, MatchConfig};
use meadow_chess::utils::logging::init_tracing;
use meadow_chess::utils::render_game_state::render_board;

// Random (White) against Greedy (Black). Tune with CHESS_MAX_PLIES,
// CHESS_SEED, CHESS_PLACEMENT and RUST_LOG=debug for a move-by-move log.
fn main() -> ExitCode {
    init_tracing();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "match aborted");
            ExitCode::FAILURE
        }
    }
}

fn run() -> ChessResult<()> {
    let config = MatchConfig::from_env()?;

    let mut white = match config.seed {
        Some(seed) => RandomEngine::with_seed(seed),
        None => RandomEngine::new(),
    };
    let mut black = GreedyEngine::new();

    let result = play_engine_match(&mut white, &mut black, &config)?;

    println!("{}", render_board(result.final_state.board()));
    let moves: Vec<String> = result.played_moves.iter().map(|mv| mv.to_string()).collect();
    println!("moves: {}", moves.join(" "));
    println!(
        "outcome: {:?} after {} plies (white {} / black {})",
        result.outcome,
        result.played_moves.len(),
        result.white_move_count,
        result.black_move_count
    );
    Ok(())
}
