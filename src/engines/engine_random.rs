//! Uniform random mover.
//!
//! Picks any legal step for the side to move, chain-aware. Used as a sparring
//! partner in engine matches and for smoke testing the protocol.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::engines::engine_trait::{Engine, EngineOutput, GoParams};
use crate::errors::CheckersError;
use crate::game_state::checkers_types::GameState;
use crate::move_generation::move_generator::{LegalMoveGenerator, MoveGenerator};

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
        "PlumCheckers Random"
    }

    fn set_option(&mut self, name: &str, value: &str) -> Result<(), String> {
        if name.eq_ignore_ascii_case("seed") {
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
        _params: &GoParams,
    ) -> Result<EngineOutput, CheckersError> {
        if game_state.outcome().is_over() {
            return Err(CheckersError::GameFinished);
        }

        let legal_moves = self.move_generator.generate_legal_moves(game_state);

        let mut out = EngineOutput::default();
        out.info_lines.push(format!(
            "info string random_engine legal_moves {}",
            legal_moves.len()
        ));

        out.best_move = legal_moves.choose(&mut self.rng).map(|m| m.mv);
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::RandomEngine;
    use crate::engines::engine_trait::{Engine, GoParams};
    use crate::errors::CheckersError;
    use crate::game_state::checkers_types::{Color, GameState};
    use crate::move_generation::legal_move_checks::is_legal;

    #[test]
    fn random_engine_plays_legal_opening_moves() {
        let game = GameState::new_game();
        let mut engine = RandomEngine::with_seed(11);
        for _ in 0..20 {
            let out = engine
                .choose_move(&game, &GoParams::default())
                .expect("engine should choose");
            let mv = out.best_move.expect("opening has moves");
            assert!(is_legal(&game.board, mv.from, mv.to, Color::White));
            assert_eq!(out.info_lines[0], "info string random_engine legal_moves 7");
        }
    }

    #[test]
    fn finished_game_is_reported() {
        let game = GameState::from_text(
            "......../......../......../......../......../......../......../w.......",
            Color::Black,
        )
        .expect("board text parses");
        let mut engine = RandomEngine::with_seed(0);
        assert_eq!(
            engine.choose_move(&game, &GoParams::default()).err(),
            Some(CheckersError::GameFinished)
        );
    }

    #[test]
    fn same_seed_same_choice() {
        let game = GameState::new_game();
        let mut a = RandomEngine::with_seed(5);
        let mut b = RandomEngine::new();
        b.set_option("Seed", "5").expect("seed option parses");
        let params = GoParams::default();
        for _ in 0..5 {
            let left = a.choose_move(&game, &params).expect("move").best_move;
            let right = b.choose_move(&game, &params).expect("move").best_move;
            assert_eq!(left, right);
        }
    }
}
