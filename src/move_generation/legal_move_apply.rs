use crate::errors::CheckersError;
use crate::game_state::checkers_types::{Board, Square};
use crate::move_generation::legal_move_checks::validate_move;
use crate::moves::move_descriptions::{Capture, Move, MoveKind};

/// Board after one step, with what the step removed and whether it crowned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppliedMove {
    pub board: Board,
    pub captured: Vec<Square>,
    pub promoted: bool,
}

/// Validates `from -> to` for the side owning the piece on `from`, then plays
/// it on a copy of `board`.
pub fn apply_move(board: &Board, from: Square, to: Square) -> Result<AppliedMove, CheckersError> {
    let side = board
        .piece_at(from)
        .ok_or(CheckersError::IllegalMoveRequested {
            from,
            to,
            reason: "no piece on origin",
        })?
        .color;
    let kind = validate_move(board, from, to, side)?;
    Ok(apply_classified(board, Move::new(from, to), kind))
}

/// Plays a capture taken from generator output.
#[inline]
pub fn apply_capture(board: &Board, capture: &Capture) -> AppliedMove {
    apply_classified(board, capture.mv, MoveKind::Capture(capture.captured))
}

/// Relocation, capture removal and promotion for an already classified move.
pub(crate) fn apply_classified(board: &Board, mv: Move, kind: MoveKind) -> AppliedMove {
    let mut next = *board;
    let mut captured = Vec::with_capacity(1);

    let Some(mut piece) = next.remove(mv.from) else {
        return AppliedMove {
            board: next,
            captured,
            promoted: false,
        };
    };

    if let Some(over) = kind.captured() {
        next.remove(over);
        captured.push(over);
    }

    let promoted = !piece.is_king && mv.to.row == piece.color.promotion_row();
    if promoted {
        piece.is_king = true;
    }
    next.place(mv.to, piece);

    AppliedMove {
        board: next,
        captured,
        promoted,
    }
}

#[cfg(test)]
mod tests {
    use super::apply_move;
    use crate::errors::CheckersError;
    use crate::game_state::checkers_types::{Board, Color, Piece, Square};
    use crate::move_generation::move_generator::can_continue_capture;

    fn sq(row: i32, col: i32) -> Square {
        Square::new(row, col).expect("test square in range")
    }

    #[test]
    fn quiet_move_relocates_the_piece() {
        let board = Board::new_game();
        let applied = apply_move(&board, sq(5, 0), sq(4, 1)).expect("opening move is legal");
        assert!(applied.board.is_empty_at(sq(5, 0)));
        assert_eq!(applied.board.piece_at(sq(4, 1)), Some(Piece::man(Color::White)));
        assert!(applied.captured.is_empty());
        assert!(!applied.promoted);
        // The input board is a snapshot and stays untouched.
        assert_eq!(board, Board::new_game());
    }

    #[test]
    fn jump_removes_the_captured_piece() {
        let mut board = Board::new_empty();
        board.place(sq(3, 2), Piece::man(Color::White));
        board.place(sq(2, 3), Piece::man(Color::Black));

        let applied = apply_move(&board, sq(3, 2), sq(1, 4)).expect("capture is legal");
        assert_eq!(applied.captured, vec![sq(2, 3)]);
        assert!(applied.board.is_empty_at(sq(2, 3)));
        assert_eq!(applied.board.count(Color::Black), 0);
    }

    #[test]
    fn man_reaching_far_row_is_crowned_and_continues_as_king() {
        let mut board = Board::new_empty();
        board.place(sq(2, 5), Piece::man(Color::White));
        board.place(sq(1, 4), Piece::man(Color::Black));
        // Only reachable by a long king capture from (0,3).
        board.place(sq(3, 6), Piece::man(Color::Black));

        let applied = apply_move(&board, sq(2, 5), sq(0, 3)).expect("capture is legal");
        assert!(applied.promoted);
        assert_eq!(applied.board.piece_at(sq(0, 3)), Some(Piece::king(Color::White)));
        assert!(can_continue_capture(&applied.board, sq(0, 3)));

        let mut as_man = applied.board;
        as_man.place(sq(0, 3), Piece::man(Color::White));
        assert!(!can_continue_capture(&as_man, sq(0, 3)));
    }

    #[test]
    fn black_man_crowns_on_row_seven() {
        let mut board = Board::new_empty();
        board.place(sq(6, 1), Piece::man(Color::Black));
        let applied = apply_move(&board, sq(6, 1), sq(7, 2)).expect("step is legal");
        assert!(applied.promoted);
        assert_eq!(applied.board.piece_at(sq(7, 2)), Some(Piece::king(Color::Black)));
    }

    #[test]
    fn illegal_request_leaves_no_trace() {
        let board = Board::new_game();
        match apply_move(&board, sq(5, 0), sq(3, 2)) {
            Err(CheckersError::IllegalMoveRequested { .. }) => {}
            other => panic!("expected rejection, got {other:?}"),
        }
        assert!(apply_move(&board, sq(4, 1), sq(3, 2)).is_err());
    }
}
