//! Canonical draughts-rule constants.
//!
//! Board dimensions, the starting layout, diagonal directions and the
//! centralization reference point used by the heuristic opponent.

pub const BOARD_SIZE: usize = 8;

/// Rows `0..3` hold Black men and rows `5..8` hold White men on dark cells.
pub const BLACK_HOME_ROWS: std::ops::Range<u8> = 0..3;
pub const WHITE_HOME_ROWS: std::ops::Range<u8> = 5..8;

/// Starting position in the board text format (row 0 first).
pub const STARTING_POSITION_TEXT: &str =
    ".b.b.b.b/b.b.b.b./.b.b.b.b/......../......../w.w.w.w./.w.w.w.w/w.w.w.w.";

/// All four diagonal directions as `(d_row, d_col)`.
pub const DIAGONALS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Board center `(3.5, 3.5)` doubled so distances stay integral.
pub const DOUBLED_CENTER: i32 = 7;

/// Upper bound on jumps in one chain: a side never has more than twelve
/// opposing pieces to take.
pub const MAX_CHAIN_DEPTH: usize = 12;
