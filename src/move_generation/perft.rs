//! Step-counting tree walk for move generator validation.
//!
//! Every jump of a capture chain is its own node, so a double jump adds two
//! plies of depth even though it is a single turn.

use std::sync::Arc;
use std::thread;

use crate::game_state::checkers_types::GameState;
use crate::move_generation::move_generator::{GeneratedMove, MoveGenerator};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub promotions: usize,
    /// Leaf steps that leave a capture chain open.
    pub chain_steps: usize,
    /// Leaf steps after which the side to move has no legal action.
    pub game_overs: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.promotions += rhs.promotions;
        self.chain_steps += rhs.chain_steps;
        self.game_overs += rhs.game_overs;
    }
}

pub fn perft<G: MoveGenerator>(generator: &G, game_state: &GameState, depth: u8) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let mut total = PerftCounts::default();
    for mv in generator.generate_legal_moves(game_state) {
        perft_recurse(generator, &mv, depth, 1, &mut total);
    }
    total
}

/// One worker thread per root step.
pub fn perft_multi_threaded(
    generator: Arc<dyn MoveGenerator>,
    game_state: &GameState,
    depth: u8,
) -> Result<PerftCounts, String> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }

    let root_moves = generator.generate_legal_moves(game_state);
    let mut handles = Vec::with_capacity(root_moves.len());

    for mv in root_moves {
        let generator_ref = Arc::clone(&generator);
        handles.push(thread::spawn(move || {
            let mut local = PerftCounts::default();
            perft_recurse(generator_ref.as_ref(), &mv, depth, 1, &mut local);
            local
        }));
    }

    let mut total = PerftCounts::default();
    for handle in handles {
        let local = handle
            .join()
            .map_err(|_| "perft worker thread panicked".to_owned())?;
        total.merge(local);
    }
    Ok(total)
}

fn perft_recurse<G: MoveGenerator + ?Sized>(
    generator: &G,
    mv: &GeneratedMove,
    search_depth: u8,
    current_depth: u8,
    counts: &mut PerftCounts,
) {
    if current_depth == search_depth {
        counts.nodes += 1;
        if mv.captured.is_some() {
            counts.captures += 1;
        }
        if mv.promoted {
            counts.promotions += 1;
        }
        if !mv.turn_complete {
            counts.chain_steps += 1;
        }
        if mv.game_after_move.outcome().is_over() {
            counts.game_overs += 1;
        }
        return;
    }

    for child in generator.generate_legal_moves(&mv.game_after_move) {
        perft_recurse(generator, &child, search_depth, current_depth + 1, counts);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::{perft, perft_multi_threaded, PerftCounts};
    use crate::game_state::checkers_types::{Color, GameState};
    use crate::move_generation::move_generator::LegalMoveGenerator;

    #[test]
    fn perft_initial_position_shallow_depths() {
        let game = GameState::new_game();
        let generator = LegalMoveGenerator;

        assert_eq!(perft(&generator, &game, 0).nodes, 1);
        assert_eq!(perft(&generator, &game, 1).nodes, 7);

        let depth_two = perft(&generator, &game, 2);
        assert_eq!(depth_two.nodes, 49);
        assert_eq!(depth_two.captures, 0);
        assert_eq!(depth_two.game_overs, 0);

        assert_eq!(perft(&generator, &game, 3).nodes, 302);
    }

    #[test]
    fn king_position_counts() {
        let game = GameState::from_text(
            ".b....../......../...b..../......../.b.b..../......../...W..../........",
            Color::White,
        )
        .expect("board text parses");
        let nodes: Vec<usize> = (1..=4).map(|d| perft(&LegalMoveGenerator, &game, d).nodes).collect();
        assert_eq!(nodes, vec![1, 6, 31, 117]);
    }

    #[test]
    fn multi_threaded_matches_single_threaded() {
        let game = GameState::new_game();
        let single = perft(&LegalMoveGenerator, &game, 4);
        let multi = perft_multi_threaded(Arc::new(LegalMoveGenerator), &game, 4)
            .expect("workers finish");
        assert_eq!(single, multi);
        assert_eq!(single.nodes, 1469);
    }

    #[test]
    fn chain_steps_are_counted_per_jump() {
        // White's double jump from (5,0) is two nodes deep.
        let game = GameState::from_text(
            "......../......../...b..../......../.b....../w......./......../........",
            Color::White,
        )
        .expect("board text parses");
        let generator = LegalMoveGenerator;

        let first = perft(&generator, &game, 1);
        assert_eq!(
            first,
            PerftCounts {
                nodes: 1,
                captures: 1,
                promotions: 0,
                chain_steps: 1,
                game_overs: 0,
            }
        );

        let second = perft(&generator, &game, 2);
        assert_eq!(second.nodes, 1);
        assert_eq!(second.captures, 1);
        assert_eq!(second.chain_steps, 0);
        assert_eq!(second.game_overs, 1);
    }
}
