use crate::game_state::checkers_rules::DIAGONALS;
use crate::game_state::checkers_types::{Board, Color, Piece, Square};

#[inline]
pub fn piece_on_square_for_color(board: &Board, color: Color, square: Square) -> Option<Piece> {
    board.piece_at(square).filter(|p| p.color == color)
}

#[inline]
pub fn enemy_piece_on(board: &Board, own: Color, square: Square) -> Option<Piece> {
    piece_on_square_for_color(board, own.opposite(), square)
}

/// Cells along one diagonal ray from `origin`, nearest first, excluding the
/// origin itself.
pub fn ray(origin: Square, d_row: i8, d_col: i8) -> impl Iterator<Item = Square> {
    (1i8..).map_while(move |distance| origin.offset(d_row, d_col, distance))
}

/// Diagonals a man may step along without capturing.
#[inline]
pub fn forward_diagonals(color: Color) -> [(i8, i8); 2] {
    let d_row = color.forward();
    [(d_row, -1), (d_row, 1)]
}

#[inline]
pub fn all_diagonals() -> [(i8, i8); 4] {
    DIAGONALS
}
