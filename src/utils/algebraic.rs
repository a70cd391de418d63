//! Square conversions for protocol coordinates.
//!
//! Columns map to files `a..h` and rows to ranks counted from White's home
//! edge, so row 7 is rank 1 and `a3` is `(5,0)`.

use crate::errors::CheckersError;
use crate::game_state::checkers_rules::BOARD_SIZE;
use crate::game_state::checkers_types::Square;

/// Convert a coordinate such as "a3" to a square.
pub fn algebraic_to_square(text: &str) -> Result<Square, CheckersError> {
    let bytes = text.as_bytes();
    if bytes.len() != 2 {
        return Err(CheckersError::InvalidSquareText(text.to_owned()));
    }

    let file = bytes[0].to_ascii_lowercase();
    let rank = bytes[1];
    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(CheckersError::InvalidSquareText(text.to_owned()));
    }

    let col = (file - b'a') as i32;
    let row = BOARD_SIZE as i32 - (rank - b'0') as i32;
    Square::new(row, col)
}

pub fn square_to_algebraic(square: Square) -> String {
    let file = char::from(b'a' + square.col);
    let rank = BOARD_SIZE as u8 - square.row;
    format!("{file}{rank}")
}
