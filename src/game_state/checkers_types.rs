//! Core value types shared by the board model, move generation and engines.
//!
//! Everything here is `Copy`: boards are snapshotted by value when the engine
//! explores hypothetical positions, so the pieces and coordinates they hold
//! must be trivially duplicable.

use std::fmt;

pub use crate::game_state::board::Board;
pub use crate::game_state::capture_chain::CaptureChain;
pub use crate::game_state::game_state::GameState;

use crate::errors::CheckersError;
use crate::game_state::checkers_rules::BOARD_SIZE;

/// Side owning a piece, also used for side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row delta of a man's forward step.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// Row on which a man of this color is crowned.
    #[inline]
    pub const fn promotion_row(self) -> u8 {
        match self {
            Color::White => 0,
            Color::Black => (BOARD_SIZE - 1) as u8,
        }
    }

    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Color::White => "white",
            Color::Black => "black",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub is_king: bool,
}

impl Piece {
    #[inline]
    pub const fn man(color: Color) -> Self {
        Self {
            color,
            is_king: false,
        }
    }

    #[inline]
    pub const fn king(color: Color) -> Self {
        Self {
            color,
            is_king: true,
        }
    }
}

/// Board cell addressed by zero-based `(row, col)`; row 0 is Black's home edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    pub row: u8,
    pub col: u8,
}

impl Square {
    /// Checked constructor; coordinates outside `0..8` are rejected.
    pub fn new(row: i32, col: i32) -> Result<Self, CheckersError> {
        Self::from_signed(row, col).ok_or(CheckersError::InvalidPosition { row, col })
    }

    #[inline]
    pub(crate) fn from_signed(row: i32, col: i32) -> Option<Self> {
        let size = BOARD_SIZE as i32;
        if (0..size).contains(&row) && (0..size).contains(&col) {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// Square reached after `distance` diagonal steps along `(d_row, d_col)`.
    #[inline]
    pub fn offset(self, d_row: i8, d_col: i8, distance: i8) -> Option<Self> {
        Self::from_signed(
            self.row as i32 + d_row as i32 * distance as i32,
            self.col as i32 + d_col as i32 * distance as i32,
        )
    }

    /// Dark cells, the only ones pieces may stand on.
    #[inline]
    pub const fn is_playable(self) -> bool {
        (self.row + self.col) % 2 == 1
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

/// Result of the terminal-state check for the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    InProgress,
    Win(Color),
}

impl GameOutcome {
    #[inline]
    pub const fn is_over(self) -> bool {
        matches!(self, GameOutcome::Win(_))
    }
}

/// Strength tier of the automated opponent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl std::str::FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" | "1" => Ok(Difficulty::Easy),
            "medium" | "2" => Ok(Difficulty::Medium),
            "hard" | "3" => Ok(Difficulty::Hard),
            other => Err(format!("unknown difficulty '{other}'")),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
