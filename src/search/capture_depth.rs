//! Longest capture chain available to one piece.
//!
//! Explicit-stack depth-first enumeration over board snapshots. Depth is
//! capped at `MAX_CHAIN_DEPTH` and the walk at `NODE_BUDGET` expansions, so
//! the cost stays bounded even for kings with many landing squares.

use crate::game_state::checkers_rules::MAX_CHAIN_DEPTH;
use crate::game_state::checkers_types::{Board, Square};
use crate::move_generation::legal_move_apply::apply_capture;
use crate::move_generation::move_generator::piece_captures;
use crate::moves::move_descriptions::Capture;

const NODE_BUDGET: usize = 20_000;

/// Most captures the piece on `from` can chain from this position.
pub fn max_chain_depth(board: &Board, from: Square) -> usize {
    let mut stack: Vec<(Board, Square, usize)> = vec![(*board, from, 0)];
    let mut best = 0;
    let mut expanded = 0;

    while let Some((snapshot, square, depth)) = stack.pop() {
        best = best.max(depth);
        if depth >= MAX_CHAIN_DEPTH || expanded >= NODE_BUDGET {
            continue;
        }
        expanded += 1;

        for capture in piece_captures(&snapshot, square) {
            let applied = apply_capture(&snapshot, &capture);
            stack.push((applied.board, capture.mv.to, depth + 1));
        }
    }

    best
}

/// Length of the longest chain that starts with `capture`.
pub fn chain_depth_after(board: &Board, capture: &Capture) -> usize {
    let applied = apply_capture(board, capture);
    1 + max_chain_depth(&applied.board, capture.mv.to)
}

/// Captures available to the same piece immediately after `capture`.
pub fn follow_up_captures(board: &Board, capture: &Capture) -> usize {
    let applied = apply_capture(board, capture);
    piece_captures(&applied.board, capture.mv.to).len()
}
