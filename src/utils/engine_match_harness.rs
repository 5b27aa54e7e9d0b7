//! Head-to-head engine match harness.
//!
//! Runs two `Engine` implementations against each other on one `Game`,
//! consulting the detector after every ply to decide when the game is over.

use tracing::{debug, info};

use crate::engines::engine_trait::Engine;
use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_rules::STARTING_POSITION_PLACEMENT;
use crate::game_state::chess_types::{Color, Game, Move};
use crate::move_generation::legal_move_checks::{game_status, GameStatus};

pub const ENV_MAX_PLIES: &str = "CHESS_MAX_PLIES";
pub const ENV_SEED: &str = "CHESS_SEED";
pub const ENV_PLACEMENT: &str = "CHESS_PLACEMENT";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    WhiteWinCheckmate,
    BlackWinCheckmate,
    DrawStalemate,
    DrawMaxPlies,
}

impl MatchOutcome {
    pub fn winner(self) -> Option<Color> {
        match self {
            MatchOutcome::WhiteWinCheckmate => Some(Color::White),
            MatchOutcome::BlackWinCheckmate => Some(Color::Black),
            MatchOutcome::DrawStalemate | MatchOutcome::DrawMaxPlies => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchConfig {
    pub max_plies: u16,
    /// FEN placement field the game starts from. White always moves first.
    pub start_placement: String,
    /// Seed for engines that take one; `None` means OS entropy.
    pub seed: Option<u64>,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_plies: 300,
            start_placement: STARTING_POSITION_PLACEMENT.to_owned(),
            seed: None,
        }
    }
}

impl MatchConfig {
    /// Defaults overridden by `CHESS_MAX_PLIES`, `CHESS_SEED` and
    /// `CHESS_PLACEMENT` when they are set.
    pub fn from_env() -> ChessResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`MatchConfig::from_env`] with an injectable variable source.
    pub fn from_lookup<F>(lookup: F) -> ChessResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(ENV_MAX_PLIES) {
            config.max_plies = parse_value(ENV_MAX_PLIES, &value)?;
        }
        if let Some(value) = lookup(ENV_SEED) {
            config.seed = Some(parse_value(ENV_SEED, &value)?);
        }
        if let Some(value) = lookup(ENV_PLACEMENT) {
            if value.trim().is_empty() {
                return Err(ChessError::InvalidConfig {
                    key: ENV_PLACEMENT.to_owned(),
                    value,
                });
            }
            config.start_placement = value;
        }

        Ok(config)
    }
}

fn parse_value<T: std::str::FromStr>(key: &str, value: &str) -> ChessResult<T> {
    value.trim().parse::<T>().map_err(|_| ChessError::InvalidConfig {
        key: key.to_owned(),
        value: value.to_owned(),
    })
}

#[derive(Debug, Clone)]
pub struct MatchResult {
    pub outcome: MatchOutcome,
    pub final_state: Game,
    pub played_moves: Vec<Move>,
    pub white_move_count: u32,
    pub black_move_count: u32,
}

/// Play one game. `engine_white` moves first.
pub fn play_engine_match(
    engine_white: &mut dyn Engine,
    engine_black: &mut dyn Engine,
    config: &MatchConfig,
) -> ChessResult<MatchResult> {
    let mut game = Game::from_fen_placement(&config.start_placement)?;
    let mut white_move_count = 0u32;
    let mut black_move_count = 0u32;

    info!(
        white = engine_white.name(),
        black = engine_black.name(),
        max_plies = config.max_plies,
        "starting match"
    );

    let outcome = loop {
        match game_status(&game) {
            GameStatus::Checkmate {
                winner: Color::White,
            } => break MatchOutcome::WhiteWinCheckmate,
            GameStatus::Checkmate {
                winner: Color::Black,
            } => break MatchOutcome::BlackWinCheckmate,
            GameStatus::Stalemate => break MatchOutcome::DrawStalemate,
            GameStatus::Check | GameStatus::Ongoing => {}
        }
        if game.ply_count() >= usize::from(config.max_plies) {
            break MatchOutcome::DrawMaxPlies;
        }

        let mover = game.turn();
        let moved = match mover {
            Color::White => engine_white.play_turn(&mut game)?,
            Color::Black => engine_black.play_turn(&mut game)?,
        };
        if !moved {
            // Only reachable when the detector and the engine disagree.
            break MatchOutcome::DrawStalemate;
        }
        match mover {
            Color::White => white_move_count += 1,
            Color::Black => black_move_count += 1,
        }

        if let Some(mv) = game.move_history().last() {
            debug!(ply = game.ply_count(), side = %mover, mv = %mv, "ply played");
        }
    };

    info!(?outcome, plies = game.ply_count(), "match finished");

    Ok(MatchResult {
        outcome,
        played_moves: game.move_history().copied().collect(),
        final_state: game,
        white_move_count,
        black_move_count,
    })
}

#[derive(Debug, Clone)]
pub struct MatchSeriesConfig {
    pub games: u16,
    pub base_seed: u64,
    pub per_game: MatchConfig,
}

impl Default for MatchSeriesConfig {
    fn default() -> Self {
        Self {
            games: 10,
            base_seed: 0,
            per_game: MatchConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MatchSeriesStats {
    pub games: u16,
    pub white_wins: u16,
    pub black_wins: u16,
    pub draws: u16,
    pub outcomes: Vec<MatchOutcome>,
}

impl MatchSeriesStats {
    pub fn report(&self) -> String {
        format!(
            "games={} white_wins={} black_wins={} draws={}",
            self.games, self.white_wins, self.black_wins, self.draws
        )
    }
}

/// Play `config.games` matches, building fresh engines for every game from
/// the per-game seed `base_seed + game_index`.
pub fn play_engine_match_series<W, B>(
    mut make_white: W,
    mut make_black: B,
    config: &MatchSeriesConfig,
) -> ChessResult<MatchSeriesStats>
where
    W: FnMut(u64) -> Box<dyn Engine>,
    B: FnMut(u64) -> Box<dyn Engine>,
{
    let mut stats = MatchSeriesStats::default();

    for game_index in 0..config.games {
        let seed = config.base_seed.wrapping_add(u64::from(game_index));
        let per_game = MatchConfig {
            seed: Some(seed),
            ..config.per_game.clone()
        };
        let mut white = make_white(seed);
        let mut black = make_black(seed);
        let result = play_engine_match(white.as_mut(), black.as_mut(), &per_game)?;

        stats.games += 1;
        match result.outcome.winner() {
            Some(Color::White) => stats.white_wins += 1,
            Some(Color::Black) => stats.black_wins += 1,
            None => stats.draws += 1,
        }
        stats.outcomes.push(result.outcome);
    }

    info!(report = %stats.report(), "series finished");
    Ok(stats)
}
