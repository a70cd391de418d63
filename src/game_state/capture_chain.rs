//! Multi-jump state machine.
//!
//! A chain opens when a capture leaves the same piece with another capture
//! and closes when no further capture exists from where it landed. While it is
//! open only that piece may move, and only by capturing.

use crate::errors::CheckersError;
use crate::game_state::checkers_types::{Board, Square};
use crate::move_generation::move_generator::{can_continue_capture, piece_captures};
use crate::moves::move_descriptions::MoveKind;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CaptureChain {
    #[default]
    Idle,
    InChain(Square),
}

impl CaptureChain {
    #[inline]
    pub fn chained_square(self) -> Option<Square> {
        match self {
            CaptureChain::Idle => None,
            CaptureChain::InChain(square) => Some(square),
        }
    }

    #[inline]
    pub fn is_active(self) -> bool {
        matches!(self, CaptureChain::InChain(_))
    }

    /// Resolves a step requested while the chain is open.
    ///
    /// Returns `Ok(None)` when idle. In a chain, only a capture listed for the
    /// chained piece is accepted; anything else is a chain violation.
    pub fn resolve_step(
        self,
        board: &Board,
        from: Square,
        to: Square,
    ) -> Result<Option<MoveKind>, CheckersError> {
        let CaptureChain::InChain(chained) = self else {
            return Ok(None);
        };
        let violation = CheckersError::ChainViolation { chained, from, to };
        if from != chained {
            return Err(violation);
        }
        piece_captures(board, from)
            .into_iter()
            .find(|c| c.mv.to == to)
            .map(|c| Some(MoveKind::Capture(c.captured)))
            .ok_or(violation)
    }

    /// State after a step landing on `landing` of the post-move `board`.
    ///
    /// `captured_any` is false for quiet moves, which always end the turn.
    pub fn after_step(board: &Board, landing: Square, captured_any: bool) -> Self {
        if captured_any && can_continue_capture(board, landing) {
            CaptureChain::InChain(landing)
        } else {
            CaptureChain::Idle
        }
    }
}

#[cfg(test)]
mod tests {
    use super::CaptureChain;
    use crate::errors::CheckersError;
    use crate::game_state::checkers_types::{Board, Color, Piece, Square};
    use crate::moves::move_descriptions::MoveKind;

    fn sq(row: i32, col: i32) -> Square {
        Square::new(row, col).expect("test square in range")
    }

    #[test]
    fn idle_defers_to_regular_validation() {
        let board = Board::new_game();
        assert_eq!(CaptureChain::Idle.resolve_step(&board, sq(5, 0), sq(4, 1)), Ok(None));
    }

    #[test]
    fn chain_rejects_other_piece_and_quiet_step() {
        let mut board = Board::new_empty();
        board.place(sq(3, 2), Piece::man(Color::White));
        board.place(sq(2, 3), Piece::man(Color::Black));
        board.place(sq(5, 4), Piece::man(Color::White));
        board.place(sq(4, 5), Piece::man(Color::Black));
        let chain = CaptureChain::InChain(sq(3, 2));

        assert_eq!(
            chain.resolve_step(&board, sq(5, 4), sq(3, 6)),
            Err(CheckersError::ChainViolation {
                chained: sq(3, 2),
                from: sq(5, 4),
                to: sq(3, 6),
            })
        );
        assert!(matches!(
            chain.resolve_step(&board, sq(3, 2), sq(2, 1)),
            Err(CheckersError::ChainViolation { .. })
        ));
        assert_eq!(
            chain.resolve_step(&board, sq(3, 2), sq(1, 4)),
            Ok(Some(MoveKind::Capture(sq(2, 3))))
        );
    }

    #[test]
    fn chain_opens_only_after_a_capture_with_follow_up() {
        let mut board = Board::new_empty();
        board.place(sq(3, 2), Piece::man(Color::White));
        board.place(sq(2, 3), Piece::man(Color::Black));

        assert_eq!(
            CaptureChain::after_step(&board, sq(3, 2), true),
            CaptureChain::InChain(sq(3, 2))
        );
        assert_eq!(CaptureChain::after_step(&board, sq(3, 2), false), CaptureChain::Idle);

        board.remove(sq(2, 3));
        assert_eq!(CaptureChain::after_step(&board, sq(3, 2), true), CaptureChain::Idle);
    }
}
