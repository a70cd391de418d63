//! Standalone engine-vs-engine series runner.
//!
//! Run with:
//! `cargo run --release --bin engine_match_series`
//! `cargo run --release --bin engine_match_series -- --verbose`

use plum_checkers::engines::engine_heuristic::HeuristicEngine;
use plum_checkers::engines::engine_trait::Engine;
use plum_checkers::game_state::checkers_types::Difficulty;
use plum_checkers::utils::engine_match_harness::{
    play_engine_match_series, MatchConfig, MatchSeriesConfig,
};

fn main() -> Result<(), String> {
    let verbose = std::env::args().any(|a| a == "--verbose" || a == "-v");

    // Swap tiers here to compare them.
    let player1 = || Box::new(HeuristicEngine::new(Difficulty::Hard)) as Box<dyn Engine>;
    let player2 = || Box::new(HeuristicEngine::new(Difficulty::Easy)) as Box<dyn Engine>;

    let stats = play_engine_match_series(
        player1,
        player2,
        MatchSeriesConfig {
            games: 20,
            base_seed: 1234,
            per_game: MatchConfig {
                max_plies: 200,
                opening_min_plies: 0,
                opening_max_plies: 4,
                ..MatchConfig::default()
            },
            verbose,
        },
    )?;

    println!("{}", stats.report());
    println!("outcomes: {:?}", stats.outcomes);
    Ok(())
}
