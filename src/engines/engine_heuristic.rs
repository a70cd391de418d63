//! Tiered heuristic opponent.
//!
//! Wraps `search::move_selector` behind the `Engine` trait. The tier comes
//! from `GoParams` when given, otherwise from the `Difficulty` option.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::engines::engine_trait::{Engine, EngineOutput, GoParams};
use crate::errors::CheckersError;
use crate::game_state::checkers_types::{Difficulty, GameState};
use crate::search::move_selector::{select_for_state, SelectionReason};

pub struct HeuristicEngine {
    difficulty: Difficulty,
    rng: StdRng,
}

impl HeuristicEngine {
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn with_seed(difficulty: Difficulty, seed: u64) -> Self {
        Self {
            difficulty,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    #[inline]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }
}

impl Default for HeuristicEngine {
    fn default() -> Self {
        Self::new(Difficulty::default())
    }
}

fn reason_text(reason: SelectionReason) -> String {
    match reason {
        SelectionReason::FirstCapture => "first_capture".to_owned(),
        SelectionReason::MostFollowUps(n) => format!("follow_ups {n}"),
        SelectionReason::LongestChain(n) => format!("chain_depth {n}"),
        SelectionReason::Centralizing => "centralizing".to_owned(),
        SelectionReason::Random => "random".to_owned(),
    }
}

impl Engine for HeuristicEngine {
    fn name(&self) -> &str {
        "PlumCheckers Heuristic"
    }

    fn set_option(&mut self, name: &str, value: &str) -> Result<(), String> {
        if name.eq_ignore_ascii_case("difficulty") {
            self.difficulty = value.parse()?;
        } else if name.eq_ignore_ascii_case("seed") {
            let seed = value
                .trim()
                .parse::<u64>()
                .map_err(|_| format!("invalid seed '{value}'"))?;
            self.rng = StdRng::seed_from_u64(seed);
        }
        Ok(())
    }

    fn choose_move(
        &mut self,
        game_state: &GameState,
        params: &GoParams,
    ) -> Result<EngineOutput, CheckersError> {
        if game_state.outcome().is_over() {
            return Err(CheckersError::GameFinished);
        }

        let difficulty = params.difficulty.unwrap_or(self.difficulty);
        let mut out = EngineOutput::default();
        out.info_lines.push(format!(
            "info string heuristic_engine difficulty {difficulty}"
        ));

        if let Some(selection) = select_for_state(game_state, difficulty, &mut self.rng) {
            out.info_lines.push(format!(
                "info string heuristic_engine candidates {} reason {}",
                selection.candidates,
                reason_text(selection.reason)
            ));
            out.best_move = Some(selection.mv);
        }
        Ok(out)
    }
}
