//! Explicit game value threaded through every stateful call.
//!
//! `GameState` bundles the board, the side to move and the capture-chain
//! state. `play_move` is the single entry point that mutates it: each call
//! fully applies one step (relocation, removal, promotion, chain
//! re-evaluation, turn switch) before returning a `TurnReport`.

use crate::errors::CheckersError;
use crate::game_state::checkers_types::*;
use crate::move_generation::legal_move_apply::apply_classified;
use crate::move_generation::legal_move_checks::{game_outcome, validate_move};
use crate::move_generation::move_generator::{piece_captures, side_actions};
use crate::moves::move_descriptions::{GeneratedActions, Move};
use crate::utils::board_text::parse_board;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub board: Board,
    pub side_to_move: Color,
    pub chain: CaptureChain,
    /// Completed turns; a whole capture chain counts once.
    pub ply: u16,
}

/// Structured result of one accepted step, for the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnReport {
    pub mv: Move,
    pub mover: Color,
    pub captured: Vec<Square>,
    pub promoted: bool,
    /// Chain state after the step; `InChain` means the same side moves again.
    pub chain: CaptureChain,
    pub turn_complete: bool,
    pub outcome: GameOutcome,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}

impl GameState {
    /// Opening layout, White to move.
    pub fn new_game() -> Self {
        Self::from_board(Board::new_game(), Color::White)
    }

    pub fn from_board(board: Board, side_to_move: Color) -> Self {
        Self {
            board,
            side_to_move,
            chain: CaptureChain::Idle,
            ply: 0,
        }
    }

    pub fn from_text(text: &str, side_to_move: Color) -> Result<Self, CheckersError> {
        Ok(Self::from_board(parse_board(text)?, side_to_move))
    }

    #[inline]
    pub fn capture_chain(&self) -> CaptureChain {
        self.chain
    }

    /// Derived from the board and side to move; never cached.
    pub fn outcome(&self) -> GameOutcome {
        game_outcome(&self.board, self.side_to_move)
    }

    /// Actions the side to move may take right now, chain-aware.
    pub fn legal_actions(&self) -> GeneratedActions {
        match self.chain {
            CaptureChain::InChain(square) => GeneratedActions {
                moves: Vec::new(),
                captures: piece_captures(&self.board, square),
            },
            CaptureChain::Idle => side_actions(&self.board, self.side_to_move),
        }
    }

    /// Whether `square` may be selected by the side to move.
    pub fn is_selectable(&self, square: Square) -> bool {
        match self.chain {
            CaptureChain::InChain(chained) => chained == square,
            CaptureChain::Idle => self
                .legal_actions()
                .all_moves()
                .any(|mv| mv.from == square),
        }
    }

    /// Applies one step for the side to move.
    ///
    /// On error the state is unchanged.
    pub fn play_move(&mut self, from: Square, to: Square) -> Result<TurnReport, CheckersError> {
        if self.outcome().is_over() {
            return Err(CheckersError::GameFinished);
        }

        let kind = match self.chain.resolve_step(&self.board, from, to)? {
            Some(kind) => kind,
            None => validate_move(&self.board, from, to, self.side_to_move)?,
        };

        let mover = self.side_to_move;
        let mv = Move::new(from, to);
        let applied = apply_classified(&self.board, mv, kind);

        self.board = applied.board;
        self.chain = CaptureChain::after_step(&self.board, to, !applied.captured.is_empty());

        let turn_complete = !self.chain.is_active();
        if turn_complete {
            self.side_to_move = mover.opposite();
            self.ply = self.ply.saturating_add(1);
        }

        Ok(TurnReport {
            mv,
            mover,
            captured: applied.captured,
            promoted: applied.promoted,
            chain: self.chain,
            turn_complete,
            outcome: self.outcome(),
        })
    }
}
