//! Engine abstraction layer used by the text protocol and the match harness.
//!
//! Defines common input parameters and output payloads so different move
//! choosers can be selected at runtime behind a single trait interface.
//! Engines report what they did through `info string` lines rather than a
//! logger; front-ends decide whether to print them.

use crate::errors::CheckersError;
use crate::game_state::checkers_types::{Difficulty, GameState};
use crate::moves::move_descriptions::Move;

#[derive(Debug, Clone, Default)]
pub struct GoParams {
    /// Overrides the engine's configured tier for this call only.
    pub difficulty: Option<Difficulty>,
}

#[derive(Debug, Clone, Default)]
pub struct EngineOutput {
    /// `None` when the side to move has nothing to play.
    pub best_move: Option<Move>,
    pub info_lines: Vec<String>,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    fn set_option(&mut self, _name: &str, _value: &str) -> Result<(), String> {
        Ok(())
    }

    fn choose_move(
        &mut self,
        game_state: &GameState,
        params: &GoParams,
    ) -> Result<EngineOutput, CheckersError>;
}
