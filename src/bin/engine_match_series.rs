//! Standalone engine-vs-engine series runner.
//!
//! Run with:
//! `cargo run --release --bin engine_match_series`
//! `cargo run --release --bin engine_match_series -- --verbose`

use meadow_chess::engines::engine_greedy::GreedyEngine;
use meadow_chess::engines::engine_random::RandomEngine;
use meadow_chess::engines::engine_trait::Engine;
use meadow_chess::errors::ChessResult;
use meadow_chess::utils::engine_match_harness::{
    play_engine_match_series, MatchConfig, MatchSeriesConfig,
};
use meadow_chess::utils::logging::init_tracing;

fn main() -> ChessResult<()> {
    init_tracing();
    let verbose = std::env::args().any(|a| a == "--verbose" || a == "-v");

    // Swap these two lines to try other pairings.
    let player1 = |seed: u64| Box::new(RandomEngine::with_seed(seed)) as Box<dyn Engine>;
    let player2 = |_seed: u64| Box::new(GreedyEngine::new()) as Box<dyn Engine>;

    let per_game = MatchConfig::from_env()?;
    let stats = play_engine_match_series(
        player1,
        player2,
        &MatchSeriesConfig {
            games: 10,
            base_seed: per_game.seed.unwrap_or(1234),
            per_game,
        },
    )?;

    println!("{}", stats.report());
    if verbose {
        println!("outcomes: {:?}", stats.outcomes);
    }
    Ok(())
}
