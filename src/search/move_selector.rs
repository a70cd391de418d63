//! Heuristic move choice for the automated opponent.
//!
//! Captures always win over quiet moves. Among captures the tier decides how
//! far ahead to look: Easy takes the first one, Medium counts the follow-up
//! captures one jump ahead, Hard measures the whole chain with the bounded
//! search in `capture_depth`. Without captures Easy plays at random while the
//! other tiers prefer moves toward the board center.

use rand::prelude::IndexedRandom;
use rand::Rng;

use crate::game_state::checkers_rules::DOUBLED_CENTER;
use crate::game_state::checkers_types::{Board, CaptureChain, Color, Difficulty, GameState, Square};
use crate::move_generation::move_generator::{piece_captures, side_actions};
use crate::moves::move_descriptions::{Capture, Move};
use crate::search::capture_depth::{chain_depth_after, follow_up_captures};

/// Why a move was picked, for engine diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionReason {
    FirstCapture,
    MostFollowUps(usize),
    LongestChain(usize),
    Centralizing,
    Random,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub mv: Move,
    pub reason: SelectionReason,
    pub candidates: usize,
}

/// Picks a move for `side` at the start of its turn.
pub fn choose_move<R: Rng + ?Sized>(
    board: &Board,
    side: Color,
    difficulty: Difficulty,
    rng: &mut R,
) -> Option<Move> {
    select_move(board, side, difficulty, rng).map(|s| s.mv)
}

/// Picks the next jump for a piece in the middle of a capture chain.
pub fn choose_chain_continuation(
    board: &Board,
    chained: Square,
    difficulty: Difficulty,
) -> Option<Move> {
    select_chain_continuation(board, chained, difficulty).map(|s| s.mv)
}

/// Chain-aware choice for the side to move of `game_state`.
pub fn choose_for_state<R: Rng + ?Sized>(
    game_state: &GameState,
    difficulty: Difficulty,
    rng: &mut R,
) -> Option<Move> {
    select_for_state(game_state, difficulty, rng).map(|s| s.mv)
}

pub fn select_for_state<R: Rng + ?Sized>(
    game_state: &GameState,
    difficulty: Difficulty,
    rng: &mut R,
) -> Option<Selection> {
    match game_state.chain {
        CaptureChain::InChain(square) => {
            select_chain_continuation(&game_state.board, square, difficulty)
        }
        CaptureChain::Idle => select_move(&game_state.board, game_state.side_to_move, difficulty, rng),
    }
}

pub fn select_move<R: Rng + ?Sized>(
    board: &Board,
    side: Color,
    difficulty: Difficulty,
    rng: &mut R,
) -> Option<Selection> {
    let actions = side_actions(board, side);

    if !actions.captures.is_empty() {
        return match difficulty {
            Difficulty::Easy => actions.captures.first().map(|c| Selection {
                mv: c.mv,
                reason: SelectionReason::FirstCapture,
                candidates: actions.captures.len(),
            }),
            Difficulty::Medium => best_by_follow_ups(board, &actions.captures),
            Difficulty::Hard => best_by_chain_depth(board, &actions.captures),
        };
    }

    let candidates = actions.moves.len();
    if difficulty != Difficulty::Easy {
        let central: Vec<Move> = actions
            .moves
            .iter()
            .copied()
            .filter(is_centralizing)
            .collect();
        if let Some(mv) = central.choose(rng) {
            return Some(Selection {
                mv: *mv,
                reason: SelectionReason::Centralizing,
                candidates,
            });
        }
    }

    actions.moves.choose(rng).map(|mv| Selection {
        mv: *mv,
        reason: SelectionReason::Random,
        candidates,
    })
}

pub fn select_chain_continuation(
    board: &Board,
    chained: Square,
    difficulty: Difficulty,
) -> Option<Selection> {
    let captures = piece_captures(board, chained);
    match difficulty {
        Difficulty::Hard => best_by_chain_depth(board, &captures),
        Difficulty::Easy | Difficulty::Medium => best_by_follow_ups(board, &captures),
    }
}

/// Doubled Manhattan distance to the board center `(3.5, 3.5)`.
#[inline]
pub fn doubled_center_distance(square: Square) -> i32 {
    (2 * square.row as i32 - DOUBLED_CENTER).abs() + (2 * square.col as i32 - DOUBLED_CENTER).abs()
}

#[inline]
pub fn is_centralizing(mv: &Move) -> bool {
    doubled_center_distance(mv.to) < doubled_center_distance(mv.from)
}

fn best_by_follow_ups(board: &Board, captures: &[Capture]) -> Option<Selection> {
    best_by(captures, |c| follow_up_captures(board, c)).map(|(capture, score)| Selection {
        mv: capture.mv,
        reason: SelectionReason::MostFollowUps(score),
        candidates: captures.len(),
    })
}

fn best_by_chain_depth(board: &Board, captures: &[Capture]) -> Option<Selection> {
    best_by(captures, |c| chain_depth_after(board, c)).map(|(capture, score)| Selection {
        mv: capture.mv,
        reason: SelectionReason::LongestChain(score),
        candidates: captures.len(),
    })
}

/// Highest-scoring capture; ties go to the first enumerated.
fn best_by<F>(captures: &[Capture], mut score: F) -> Option<(Capture, usize)>
where
    F: FnMut(&Capture) -> usize,
{
    let mut best: Option<(Capture, usize)> = None;
    for capture in captures {
        let value = score(capture);
        match best {
            Some((_, best_value)) if value <= best_value => {}
            _ => best = Some((*capture, value)),
        }
    }
    best
}
