use crate::game_state::checkers_types::{Board, Piece, Square};
use crate::move_generation::legal_move_shared::{all_diagonals, ray};
use crate::moves::move_descriptions::{Capture, Move};

/// Long-range slides over empty cells, stopping at the first occupied cell.
pub fn generate_king_moves(board: &Board, from: Square, out: &mut Vec<Move>) {
    for (d_row, d_col) in all_diagonals() {
        for to in ray(from, d_row, d_col) {
            if !board.is_empty_at(to) {
                break;
            }
            out.push(Move::new(from, to));
        }
    }
}

/// Long-range captures.
///
/// Along each ray the first piece met must be an opponent; every empty cell
/// after it, up to the next obstruction, is a separate landing.
pub fn generate_king_captures(board: &Board, from: Square, king: Piece, out: &mut Vec<Capture>) {
    for (d_row, d_col) in all_diagonals() {
        let mut captured: Option<Square> = None;
        for cell in ray(from, d_row, d_col) {
            match (board.piece_at(cell), captured) {
                (None, None) => continue,
                (None, Some(over)) => out.push(Capture {
                    mv: Move::new(from, cell),
                    captured: over,
                }),
                (Some(piece), None) if piece.color != king.color => captured = Some(cell),
                (Some(_), _) => break,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{generate_king_captures, generate_king_moves};
    use crate::game_state::checkers_types::{Board, Color, Piece, Square};

    fn sq(row: i32, col: i32) -> Square {
        Square::new(row, col).expect("test square in range")
    }

    #[test]
    fn lone_king_in_corner_slides_the_long_diagonal() {
        let mut board = Board::new_empty();
        board.place(sq(7, 0), Piece::king(Color::White));

        let mut moves = Vec::new();
        generate_king_moves(&board, sq(7, 0), &mut moves);
        assert_eq!(moves.len(), 7);
        assert_eq!(moves.last().map(|m| m.to), Some(sq(0, 7)));
    }

    #[test]
    fn king_slide_stops_before_any_piece() {
        let mut board = Board::new_empty();
        board.place(sq(4, 3), Piece::king(Color::White));
        board.place(sq(2, 1), Piece::man(Color::White));
        board.place(sq(6, 5), Piece::man(Color::Black));

        let mut moves = Vec::new();
        generate_king_moves(&board, sq(4, 3), &mut moves);
        let targets: Vec<_> = moves.iter().map(|m| m.to).collect();
        assert!(targets.contains(&sq(3, 2)));
        assert!(!targets.contains(&sq(2, 1)));
        assert!(!targets.contains(&sq(1, 0)));
        assert!(targets.contains(&sq(5, 4)));
        assert!(!targets.contains(&sq(6, 5)));
        assert!(!targets.contains(&sq(7, 6)));
    }

    #[test]
    fn king_capture_lists_every_landing_beyond_the_captured_piece() {
        let mut board = Board::new_empty();
        let king = Piece::king(Color::White);
        board.place(sq(5, 4), king);
        board.place(sq(3, 2), Piece::man(Color::Black));

        let mut captures = Vec::new();
        generate_king_captures(&board, sq(5, 4), king, &mut captures);
        let landings: Vec<_> = captures.iter().map(|c| c.mv.to).collect();
        assert_eq!(landings, vec![sq(2, 1), sq(1, 0)]);
        assert!(captures.iter().all(|c| c.captured == sq(3, 2)));
    }

    #[test]
    fn own_piece_blocks_king_capture_ray() {
        let mut board = Board::new_empty();
        let king = Piece::king(Color::White);
        board.place(sq(5, 0), king);
        board.place(sq(4, 1), Piece::man(Color::White));
        board.place(sq(3, 2), Piece::man(Color::Black));

        let mut captures = Vec::new();
        generate_king_captures(&board, sq(5, 0), king, &mut captures);
        assert!(captures.is_empty());
    }

    #[test]
    fn two_adjacent_enemies_block_king_capture() {
        let mut board = Board::new_empty();
        let king = Piece::king(Color::Black);
        board.place(sq(0, 1), king);
        board.place(sq(2, 3), Piece::man(Color::White));
        board.place(sq(3, 4), Piece::man(Color::White));

        let mut captures = Vec::new();
        generate_king_captures(&board, sq(0, 1), king, &mut captures);
        assert!(captures.is_empty());
    }

    #[test]
    fn landing_run_ends_at_next_obstruction() {
        let mut board = Board::new_empty();
        let king = Piece::king(Color::Black);
        board.place(sq(0, 1), king);
        board.place(sq(2, 3), Piece::man(Color::White));
        board.place(sq(5, 6), Piece::man(Color::Black));

        let mut captures = Vec::new();
        generate_king_captures(&board, sq(0, 1), king, &mut captures);
        let landings: Vec<_> = captures.iter().map(|c| c.mv.to).collect();
        assert_eq!(landings, vec![sq(3, 4), sq(4, 5)]);
    }
}
