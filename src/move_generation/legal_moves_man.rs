use crate::game_state::checkers_types::{Board, Piece, Square};
use crate::move_generation::legal_move_shared::{all_diagonals, enemy_piece_on, forward_diagonals};
use crate::moves::move_descriptions::{Capture, Move};

/// Forward single steps onto empty cells.
pub fn generate_man_moves(board: &Board, from: Square, man: Piece, out: &mut Vec<Move>) {
    for (d_row, d_col) in forward_diagonals(man.color) {
        let Some(to) = from.offset(d_row, d_col, 1) else {
            continue;
        };
        if board.is_empty_at(to) {
            out.push(Move::new(from, to));
        }
    }
}

/// Two-cell jumps over an opposing piece, in all four directions.
pub fn generate_man_captures(board: &Board, from: Square, man: Piece, out: &mut Vec<Capture>) {
    for (d_row, d_col) in all_diagonals() {
        let (Some(over), Some(to)) = (from.offset(d_row, d_col, 1), from.offset(d_row, d_col, 2))
        else {
            continue;
        };
        if enemy_piece_on(board, man.color, over).is_some() && board.is_empty_at(to) {
            out.push(Capture {
                mv: Move::new(from, to),
                captured: over,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{generate_man_captures, generate_man_moves};
    use crate::game_state::checkers_types::{Board, Color, Piece, Square};

    fn sq(row: i32, col: i32) -> Square {
        Square::new(row, col).expect("test square in range")
    }

    #[test]
    fn white_man_steps_toward_row_zero_only() {
        let mut board = Board::new_empty();
        let man = Piece::man(Color::White);
        board.place(sq(4, 3), man);

        let mut moves = Vec::new();
        generate_man_moves(&board, sq(4, 3), man, &mut moves);
        let targets: Vec<_> = moves.iter().map(|m| m.to).collect();
        assert_eq!(targets, vec![sq(3, 2), sq(3, 4)]);
    }

    #[test]
    fn man_on_edge_has_single_step() {
        let mut board = Board::new_empty();
        let man = Piece::man(Color::Black);
        board.place(sq(2, 7), man);

        let mut moves = Vec::new();
        generate_man_moves(&board, sq(2, 7), man, &mut moves);
        assert_eq!(moves.len(), 1);
        assert_eq!(moves[0].to, sq(3, 6));
    }

    #[test]
    fn man_captures_backwards_too() {
        let mut board = Board::new_empty();
        let man = Piece::man(Color::White);
        board.place(sq(3, 2), man);
        board.place(sq(4, 3), Piece::man(Color::Black));
        board.place(sq(2, 1), Piece::man(Color::Black));

        let mut captures = Vec::new();
        generate_man_captures(&board, sq(3, 2), man, &mut captures);
        let landings: Vec<_> = captures.iter().map(|c| (c.mv.to, c.captured)).collect();
        assert_eq!(landings, vec![(sq(1, 0), sq(2, 1)), (sq(5, 4), sq(4, 3))]);
    }

    #[test]
    fn man_cannot_jump_own_piece_or_onto_occupied_cell() {
        let mut board = Board::new_empty();
        let man = Piece::man(Color::White);
        board.place(sq(5, 2), man);
        board.place(sq(4, 1), Piece::man(Color::White));
        board.place(sq(4, 3), Piece::man(Color::Black));
        board.place(sq(3, 4), Piece::man(Color::Black));

        let mut captures = Vec::new();
        generate_man_captures(&board, sq(5, 2), man, &mut captures);
        assert!(captures.is_empty());
    }
}
