//! Cell-grid board model.
//!
//! `Board` owns every piece on the 8×8 grid. It is `Copy`, so move application
//! and lookahead work on value snapshots instead of make/unmake stacks.

use crate::game_state::checkers_rules::{BLACK_HOME_ROWS, BOARD_SIZE, WHITE_HOME_ROWS};
use crate::game_state::checkers_types::{Color, Piece, Square};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Option<Piece>; BOARD_SIZE]; BOARD_SIZE],
}

impl Default for Board {
    fn default() -> Self {
        Self {
            cells: [[None; BOARD_SIZE]; BOARD_SIZE],
        }
    }
}

impl Board {
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    /// Standard opening layout: twelve men per side on the dark cells.
    pub fn new_game() -> Self {
        let mut board = Self::new_empty();
        for square in all_squares().filter(|sq| sq.is_playable()) {
            if BLACK_HOME_ROWS.contains(&square.row) {
                board.place(square, Piece::man(Color::Black));
            } else if WHITE_HOME_ROWS.contains(&square.row) {
                board.place(square, Piece::man(Color::White));
            }
        }
        board
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.cells[square.row as usize][square.col as usize]
    }

    #[inline]
    pub fn is_empty_at(&self, square: Square) -> bool {
        self.piece_at(square).is_none()
    }

    /// Puts `piece` on `square`, returning whatever stood there.
    ///
    /// Light cells are never written; the call is ignored and returns `None`.
    pub fn place(&mut self, square: Square, piece: Piece) -> Option<Piece> {
        if !square.is_playable() {
            return None;
        }
        self.cells[square.row as usize][square.col as usize].replace(piece)
    }

    #[inline]
    pub fn remove(&mut self, square: Square) -> Option<Piece> {
        self.cells[square.row as usize][square.col as usize].take()
    }

    /// Squares holding a piece of `color`, row-major.
    pub fn squares_of(&self, color: Color) -> impl Iterator<Item = Square> + '_ {
        all_squares().filter(move |sq| matches!(self.piece_at(*sq), Some(p) if p.color == color))
    }

    pub fn count(&self, color: Color) -> usize {
        self.squares_of(color).count()
    }

    pub fn count_kings(&self, color: Color) -> usize {
        self.squares_of(color)
            .filter(|sq| self.piece_at(*sq).is_some_and(|p| p.is_king))
            .count()
    }
}

/// Every cell of the board, row-major from `(0,0)`.
pub fn all_squares() -> impl Iterator<Item = Square> {
    (0..BOARD_SIZE as u8).flat_map(|row| (0..BOARD_SIZE as u8).map(move |col| Square { row, col }))
}

#[cfg(test)]
mod tests {
    use super::{all_squares, Board};
    use crate::game_state::checkers_types::{Color, Piece, Square};

    #[test]
    fn initial_layout_has_twelve_men_per_side_on_dark_cells() {
        let board = Board::new_game();
        assert_eq!(board.count(Color::White), 12);
        assert_eq!(board.count(Color::Black), 12);
        assert_eq!(board.count_kings(Color::White), 0);

        for sq in all_squares() {
            if let Some(piece) = board.piece_at(sq) {
                assert!(sq.is_playable(), "piece on light cell {sq}");
                assert!(!piece.is_king);
                match piece.color {
                    Color::Black => assert!(sq.row < 3),
                    Color::White => assert!(sq.row > 4),
                }
            }
        }
    }

    #[test]
    fn light_cells_are_never_written() {
        let mut board = Board::new_empty();
        let light = Square::new(0, 0).expect("square in range");
        board.place(light, Piece::man(Color::White));
        assert!(board.is_empty_at(light));
    }

    #[test]
    fn place_and_remove_round_trip() {
        let mut board = Board::new_empty();
        let sq = Square::new(3, 2).expect("square in range");
        assert_eq!(board.place(sq, Piece::king(Color::Black)), None);
        assert_eq!(board.remove(sq), Some(Piece::king(Color::Black)));
        assert!(board.is_empty_at(sq));
    }
}
