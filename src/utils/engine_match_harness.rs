//! Head-to-head engine match harness for local testing.
//!
//! Runs two `Engine` implementations against each other without protocol
//! I/O, with an optional seeded random opening prefix. Every step an engine
//! returns goes through `GameState::play_move`, so an illegal answer aborts
//! the match with an error instead of corrupting the game.

use rand::prelude::IndexedRandom;
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::time::Instant;

use crate::engines::engine_trait::{Engine, GoParams};
use crate::game_state::checkers_types::{Color, GameOutcome, GameState};
use crate::utils::long_algebraic::move_to_long_algebraic;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    WhiteWin,
    BlackWin,
    DrawMaxPlies,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerId {
    Player1,
    Player2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesOutcome {
    PlayerWin { player: PlayerId, color: Color },
    DrawMaxPlies,
}

#[derive(Debug, Clone)]
pub struct MatchConfig {
    /// Completed turns before the game is scored a draw.
    pub max_plies: u16,
    pub opening_min_plies: u8,
    pub opening_max_plies: u8,
    pub go_params: GoParams,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_plies: 200,
            opening_min_plies: 0,
            opening_max_plies: 4,
            go_params: GoParams::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchResult {
    pub outcome: MatchOutcome,
    pub final_state: GameState,
    pub opening_moves_lan: Vec<String>,
    pub played_moves_lan: Vec<String>,
    pub white_move_count: u32,
    pub black_move_count: u32,
    pub white_total_time_ns: u128,
    pub black_total_time_ns: u128,
}

#[derive(Debug, Clone)]
pub struct MatchSeriesConfig {
    pub games: u16,
    pub base_seed: u64,
    pub per_game: MatchConfig,
    pub verbose: bool,
}

impl Default for MatchSeriesConfig {
    fn default() -> Self {
        Self {
            games: 9,
            base_seed: 0,
            per_game: MatchConfig::default(),
            verbose: false,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MatchSeriesStats {
    pub games: u16,
    pub player1_wins: u16,
    pub player2_wins: u16,
    pub draws: u16,
    pub outcomes: Vec<SeriesOutcome>,
    pub player1_moves: u32,
    pub player2_moves: u32,
    pub player1_total_time_ns: u128,
    pub player2_total_time_ns: u128,
    pub player1_avg_move_time_ms: f64,
    pub player2_avg_move_time_ms: f64,
}

impl MatchSeriesStats {
    pub fn report(&self) -> String {
        format!(
            "games={} player1_wins={} player2_wins={} draws={} p1_avg_ms={:.3} p2_avg_ms={:.3}",
            self.games,
            self.player1_wins,
            self.player2_wins,
            self.draws,
            self.player1_avg_move_time_ms,
            self.player2_avg_move_time_ms,
        )
    }
}

/// Play a single seeded engine-vs-engine match from the opening layout.
///
/// `engine_white` is White, `engine_black` is Black.
pub fn play_engine_match(
    engine_white: &mut dyn Engine,
    engine_black: &mut dyn Engine,
    seed: u64,
    config: &MatchConfig,
) -> Result<MatchResult, String> {
    let (state, opening_moves_lan) = apply_seeded_random_opening(
        &GameState::new_game(),
        seed,
        config.opening_min_plies,
        config.opening_max_plies,
    )?;
    play_from_state(state, opening_moves_lan, engine_white, engine_black, config)
}

/// Play from a caller-provided position, skipping the random opening.
pub fn play_engine_match_from_state(
    engine_white: &mut dyn Engine,
    engine_black: &mut dyn Engine,
    start_state: GameState,
    config: &MatchConfig,
) -> Result<MatchResult, String> {
    play_from_state(start_state, Vec::new(), engine_white, engine_black, config)
}

fn play_from_state(
    mut state: GameState,
    opening_moves_lan: Vec<String>,
    engine_white: &mut dyn Engine,
    engine_black: &mut dyn Engine,
    config: &MatchConfig,
) -> Result<MatchResult, String> {
    engine_white.new_game();
    engine_black.new_game();

    let mut played_moves_lan = Vec::<String>::new();
    let mut white_move_count = 0u32;
    let mut black_move_count = 0u32;
    let mut white_total_time_ns = 0u128;
    let mut black_total_time_ns = 0u128;

    // Chains always shrink the opponent, so every turn ends in finitely many steps.
    let outcome = loop {
        if let GameOutcome::Win(winner) = state.outcome() {
            break match winner {
                Color::White => MatchOutcome::WhiteWin,
                Color::Black => MatchOutcome::BlackWin,
            };
        }
        if state.ply >= config.max_plies {
            break MatchOutcome::DrawMaxPlies;
        }

        let mover = state.side_to_move;
        let engine: &mut dyn Engine = match mover {
            Color::White => &mut *engine_white,
            Color::Black => &mut *engine_black,
        };

        let started = Instant::now();
        let out = engine
            .choose_move(&state, &config.go_params)
            .map_err(|e| format!("{} failed: {e}", engine.name()))?;
        let elapsed_ns = started.elapsed().as_nanos();

        match mover {
            Color::White => {
                white_move_count = white_move_count.saturating_add(1);
                white_total_time_ns = white_total_time_ns.saturating_add(elapsed_ns);
            }
            Color::Black => {
                black_move_count = black_move_count.saturating_add(1);
                black_total_time_ns = black_total_time_ns.saturating_add(elapsed_ns);
            }
        }

        let chosen = out
            .best_move
            .ok_or_else(|| format!("{} returned no move in a live game", engine.name()))?;
        state
            .play_move(chosen.from, chosen.to)
            .map_err(|e| format!("{} returned an illegal move: {e}", engine.name()))?;
        played_moves_lan.push(move_to_long_algebraic(chosen));
    };

    Ok(MatchResult {
        outcome,
        final_state: state,
        opening_moves_lan,
        played_moves_lan,
        white_move_count,
        black_move_count,
        white_total_time_ns,
        black_total_time_ns,
    })
}

/// Play a series of matches and aggregate win/loss/draw statistics.
///
/// Player colors are randomized each game (deterministic from `base_seed`).
pub fn play_engine_match_series<F1, F2>(
    player1_factory: F1,
    player2_factory: F2,
    config: MatchSeriesConfig,
) -> Result<MatchSeriesStats, String>
where
    F1: Fn() -> Box<dyn Engine>,
    F2: Fn() -> Box<dyn Engine>,
{
    let mut stats = MatchSeriesStats {
        games: config.games,
        ..MatchSeriesStats::default()
    };
    let mut color_rng = StdRng::seed_from_u64(config.base_seed ^ 0xA5A5_5A5A_0123_4567);

    for i in 0..config.games {
        let player1_is_white = color_rng.random_bool(0.5);
        let seed = config.base_seed.wrapping_add(u64::from(i));
        if config.verbose {
            let (white, black) = if player1_is_white {
                ("Player1", "Player2")
            } else {
                ("Player2", "Player1")
            };
            println!(
                "[series] game {}/{} seed={} white={} black={}",
                i + 1,
                config.games,
                seed,
                white,
                black
            );
        }

        let mut player1 = player1_factory();
        let mut player2 = player2_factory();
        let result = if player1_is_white {
            play_engine_match(player1.as_mut(), player2.as_mut(), seed, &config.per_game)?
        } else {
            play_engine_match(player2.as_mut(), player1.as_mut(), seed, &config.per_game)?
        };

        let (p1_moves, p1_ns, p2_moves, p2_ns) = if player1_is_white {
            (
                result.white_move_count,
                result.white_total_time_ns,
                result.black_move_count,
                result.black_total_time_ns,
            )
        } else {
            (
                result.black_move_count,
                result.black_total_time_ns,
                result.white_move_count,
                result.white_total_time_ns,
            )
        };
        stats.player1_moves = stats.player1_moves.saturating_add(p1_moves);
        stats.player2_moves = stats.player2_moves.saturating_add(p2_moves);
        stats.player1_total_time_ns = stats.player1_total_time_ns.saturating_add(p1_ns);
        stats.player2_total_time_ns = stats.player2_total_time_ns.saturating_add(p2_ns);

        let mapped = match result.outcome {
            MatchOutcome::DrawMaxPlies => {
                stats.draws += 1;
                SeriesOutcome::DrawMaxPlies
            }
            MatchOutcome::WhiteWin | MatchOutcome::BlackWin => {
                let color = if result.outcome == MatchOutcome::WhiteWin {
                    Color::White
                } else {
                    Color::Black
                };
                let player = if (color == Color::White) == player1_is_white {
                    stats.player1_wins += 1;
                    PlayerId::Player1
                } else {
                    stats.player2_wins += 1;
                    PlayerId::Player2
                };
                SeriesOutcome::PlayerWin { player, color }
            }
        };
        stats.outcomes.push(mapped);

        if config.verbose {
            println!(
                "[series] game {}/{} result={:?} p1_wins={} p2_wins={} draws={}\n",
                i + 1,
                config.games,
                mapped,
                stats.player1_wins,
                stats.player2_wins,
                stats.draws
            );
        }
    }

    stats.player1_avg_move_time_ms =
        avg_ns_per_move_ms(stats.player1_total_time_ns, stats.player1_moves);
    stats.player2_avg_move_time_ms =
        avg_ns_per_move_ms(stats.player2_total_time_ns, stats.player2_moves);

    Ok(stats)
}

#[inline]
fn avg_ns_per_move_ms(total_ns: u128, moves: u32) -> f64 {
    if moves == 0 {
        0.0
    } else {
        (total_ns as f64) / (moves as f64) / 1_000_000.0
    }
}

fn apply_seeded_random_opening(
    initial: &GameState,
    seed: u64,
    min_plies: u8,
    max_plies: u8,
) -> Result<(GameState, Vec<String>), String> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut state = initial.clone();
    let mut opening_moves_lan = Vec::<String>::new();

    let low = min_plies.min(max_plies);
    let high = max_plies.max(min_plies);
    let target_plies = if low == high {
        low
    } else {
        rng.random_range(low..=high)
    };

    // Stop at a capture so the engines, not the dice, decide exchanges.
    while state.ply < u16::from(target_plies) {
        let actions = state.legal_actions();
        if !actions.captures.is_empty() {
            break;
        }
        let Some(chosen) = actions.moves.choose(&mut rng).copied() else {
            break;
        };
        state
            .play_move(chosen.from, chosen.to)
            .map_err(|e| format!("opening move rejected: {e}"))?;
        opening_moves_lan.push(move_to_long_algebraic(chosen));
    }

    Ok((state, opening_moves_lan))
}
