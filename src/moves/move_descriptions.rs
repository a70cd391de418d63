//! Move and capture descriptions produced by generation and consumed by the
//! rule engine, the chain controller and the engines.

use std::fmt;

use crate::game_state::checkers_types::Square;

/// A diagonal displacement of one piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    #[inline]
    pub const fn new(from: Square, to: Square) -> Self {
        Self { from, to }
    }

    /// Number of diagonal steps, or `None` when the displacement is not a
    /// non-zero diagonal.
    pub fn diagonal_distance(&self) -> Option<u8> {
        let d_row = self.from.row.abs_diff(self.to.row);
        let d_col = self.from.col.abs_diff(self.to.col);
        (d_row == d_col && d_row != 0).then_some(d_row)
    }

    /// Unit direction `(d_row, d_col)` of a diagonal move.
    pub fn direction(&self) -> (i8, i8) {
        (
            (self.to.row as i8 - self.from.row as i8).signum(),
            (self.to.col as i8 - self.from.col as i8).signum(),
        )
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{}", self.from, self.to)
    }
}

/// A single jump: the move plus the opposing piece it removes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Capture {
    pub mv: Move,
    pub captured: Square,
}

/// Per-piece generator output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratedActions {
    pub moves: Vec<Move>,
    pub captures: Vec<Capture>,
}

impl GeneratedActions {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty() && self.captures.is_empty()
    }

    pub fn extend(&mut self, other: GeneratedActions) {
        self.moves.extend(other.moves);
        self.captures.extend(other.captures);
    }

    /// Captures first, then quiet moves, as plain moves.
    pub fn all_moves(&self) -> impl Iterator<Item = Move> + '_ {
        self.captures
            .iter()
            .map(|c| c.mv)
            .chain(self.moves.iter().copied())
    }
}

/// Classification returned by move validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveKind {
    Quiet,
    Capture(Square),
}

impl MoveKind {
    #[inline]
    pub fn captured(self) -> Option<Square> {
        match self {
            MoveKind::Quiet => None,
            MoveKind::Capture(sq) => Some(sq),
        }
    }
}
