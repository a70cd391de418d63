//! Terminal-oriented Unicode board renderer.
//!
//! Creates a human-readable board view for debugging, tests and the text
//! protocol's `board` command.

use crate::game_state::checkers_rules::BOARD_SIZE;
use crate::game_state::checkers_types::{
    Board, CaptureChain, Color, GameOutcome, GameState, Piece, Square,
};

/// Render the board with rank labels on both sides, White's home edge at the
/// bottom.
pub fn render_board(board: &Board) -> String {
    let mut out = String::new();
    out.push_str("  a b c d e f g h\n");

    for row in 0..BOARD_SIZE as u8 {
        let rank = char::from(b'0' + BOARD_SIZE as u8 - row);
        out.push(rank);
        out.push(' ');

        for col in 0..BOARD_SIZE as u8 {
            let square = Square { row, col };
            out.push(match board.piece_at(square) {
                Some(piece) => piece_to_unicode(piece),
                None if square.is_playable() => '·',
                None => ' ',
            });
            if col < BOARD_SIZE as u8 - 1 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(rank);
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");
    out
}

/// Board plus a status line: side to move, chain and outcome.
pub fn render_game_state(game_state: &GameState) -> String {
    let mut out = render_board(&game_state.board);
    out.push_str(&format!("\nturn {} ply {}", game_state.side_to_move, game_state.ply));
    if let CaptureChain::InChain(square) = game_state.chain {
        out.push_str(&format!(" chain {square}"));
    }
    if let GameOutcome::Win(winner) = game_state.outcome() {
        out.push_str(&format!(" winner {winner}"));
    }
    out
}

fn piece_to_unicode(piece: Piece) -> char {
    match (piece.color, piece.is_king) {
        (Color::White, false) => '⛀',
        (Color::White, true) => '⛁',
        (Color::Black, false) => '⛂',
        (Color::Black, true) => '⛃',
    }
}
