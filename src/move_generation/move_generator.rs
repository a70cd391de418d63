//! Per-piece and per-side action generation with the forced-capture filter.
//!
//! `piece_actions` is the raw generator for one piece; `generate` and
//! `side_actions` apply the board-wide rule that quiet moves disappear as soon
//! as any piece of the mover's side can capture.

use crate::game_state::checkers_types::{Board, Color, GameState, Square};
use crate::move_generation::legal_moves_king::{generate_king_captures, generate_king_moves};
use crate::move_generation::legal_moves_man::{generate_man_captures, generate_man_moves};
use crate::moves::move_descriptions::{Capture, GeneratedActions, Move};

/// Unfiltered moves and captures of the piece on `square`.
pub fn piece_actions(board: &Board, square: Square) -> GeneratedActions {
    let mut out = GeneratedActions::default();
    let Some(piece) = board.piece_at(square) else {
        return out;
    };

    if piece.is_king {
        generate_king_moves(board, square, &mut out.moves);
        generate_king_captures(board, square, piece, &mut out.captures);
    } else {
        generate_man_moves(board, square, piece, &mut out.moves);
        generate_man_captures(board, square, piece, &mut out.captures);
    }
    out
}

/// Captures only, for the piece on `square`.
pub fn piece_captures(board: &Board, square: Square) -> Vec<Capture> {
    let mut out = Vec::new();
    if let Some(piece) = board.piece_at(square) {
        if piece.is_king {
            generate_king_captures(board, square, piece, &mut out);
        } else {
            generate_man_captures(board, square, piece, &mut out);
        }
    }
    out
}

/// Legal actions of the piece on `square`; quiet moves are dropped whenever
/// its side has a capture anywhere on the board.
pub fn generate(board: &Board, square: Square) -> GeneratedActions {
    let mut actions = piece_actions(board, square);
    if let Some(piece) = board.piece_at(square) {
        if !actions.moves.is_empty() && has_captures(board, piece.color) {
            actions.moves.clear();
        }
    }
    actions
}

/// Legal actions of every piece of `side`, row-major by origin.
pub fn side_actions(board: &Board, side: Color) -> GeneratedActions {
    let mut all = GeneratedActions::default();
    for square in board.squares_of(side) {
        all.extend(piece_actions(board, square));
    }
    if !all.captures.is_empty() {
        all.moves.clear();
    }
    all
}

/// Whether any piece of `side` has a capture available.
pub fn has_captures(board: &Board, side: Color) -> bool {
    board
        .squares_of(side)
        .any(|square| !piece_captures(board, square).is_empty())
}

/// Whether the piece now standing on `square` can capture again.
///
/// Uses the piece as it stands, so a man crowned by its last jump continues
/// under king rules.
pub fn can_continue_capture(board: &Board, square: Square) -> bool {
    !piece_captures(board, square).is_empty()
}

/// One playable step from a game state together with the state it leads to.
#[derive(Debug, Clone)]
pub struct GeneratedMove {
    pub mv: Move,
    pub captured: Option<Square>,
    pub promoted: bool,
    /// False when the step leaves a capture chain open.
    pub turn_complete: bool,
    pub game_after_move: GameState,
}

pub trait MoveGenerator: Send + Sync {
    /// Every step the side to move may play, honoring an active capture chain.
    fn generate_legal_moves(&self, game_state: &GameState) -> Vec<GeneratedMove>;
}

pub struct LegalMoveGenerator;

impl MoveGenerator for LegalMoveGenerator {
    fn generate_legal_moves(&self, game_state: &GameState) -> Vec<GeneratedMove> {
        let actions = game_state.legal_actions();
        let mut out = Vec::with_capacity(actions.captures.len() + actions.moves.len());

        let steps = actions
            .captures
            .iter()
            .map(|c| (c.mv, Some(c.captured)))
            .chain(actions.moves.iter().map(|m| (*m, None)));

        for (mv, captured) in steps {
            let mut next = game_state.clone();
            // Actions come from the same state, so playing them cannot fail.
            if let Ok(report) = next.play_move(mv.from, mv.to) {
                out.push(GeneratedMove {
                    mv,
                    captured,
                    promoted: report.promoted,
                    turn_complete: report.turn_complete,
                    game_after_move: next,
                });
            }
        }
        out
    }
}
