//! Move legality, forced-capture enforcement and the terminal-state check.
//!
//! `validate_move` walks the proposed path directly rather than searching the
//! generator output, but accepts exactly the moves `generate` would list for
//! the same board.

use crate::errors::CheckersError;
use crate::game_state::checkers_types::{Board, Color, GameOutcome, Square};
use crate::move_generation::legal_move_shared::{enemy_piece_on, ray};
use crate::move_generation::move_generator::{has_captures, side_actions};
use crate::moves::move_descriptions::{Move, MoveKind};

/// Classifies `from -> to` for `side`, or explains why it is rejected.
pub fn validate_move(
    board: &Board,
    from: Square,
    to: Square,
    side: Color,
) -> Result<MoveKind, CheckersError> {
    let illegal = |reason: &'static str| CheckersError::IllegalMoveRequested { from, to, reason };

    let piece = board.piece_at(from).ok_or_else(|| illegal("no piece on origin"))?;
    if piece.color != side {
        return Err(illegal("piece belongs to the other side"));
    }
    if !board.is_empty_at(to) {
        return Err(illegal("destination is occupied"));
    }

    let mv = Move::new(from, to);
    let distance = mv.diagonal_distance().ok_or_else(|| illegal("move is not diagonal"))?;
    let (d_row, d_col) = mv.direction();

    let kind = if piece.is_king {
        let mut captured = None;
        for cell in ray(from, d_row, d_col).take(distance as usize - 1) {
            match board.piece_at(cell) {
                None => {}
                Some(p) if p.color == side => return Err(illegal("path is blocked by own piece")),
                Some(_) if captured.is_some() => {
                    return Err(illegal("path crosses more than one piece"))
                }
                Some(_) => captured = Some(cell),
            }
        }
        captured.map_or(MoveKind::Quiet, MoveKind::Capture)
    } else {
        match distance {
            1 if d_row != side.forward() => return Err(illegal("men only step forward")),
            1 => MoveKind::Quiet,
            2 => {
                let over = from
                    .offset(d_row, d_col, 1)
                    .filter(|sq| enemy_piece_on(board, side, *sq).is_some())
                    .ok_or_else(|| illegal("jump must pass over an opposing piece"))?;
                MoveKind::Capture(over)
            }
            _ => return Err(illegal("men move one step or jump two")),
        }
    };

    if kind == MoveKind::Quiet && has_captures(board, side) {
        return Err(illegal("a capture is mandatory"));
    }
    Ok(kind)
}

#[inline]
pub fn is_legal(board: &Board, from: Square, to: Square, side: Color) -> bool {
    validate_move(board, from, to, side).is_ok()
}

/// True when `side` has neither a move nor a capture with any piece.
pub fn is_game_over(board: &Board, side: Color) -> bool {
    side_actions(board, side).is_empty()
}

/// Outcome with `side_to_move` about to play.
pub fn game_outcome(board: &Board, side_to_move: Color) -> GameOutcome {
    if is_game_over(board, side_to_move) {
        GameOutcome::Win(side_to_move.opposite())
    } else {
        GameOutcome::InProgress
    }
}
