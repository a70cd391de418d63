//! Compact board text format.
//!
//! Eight `/`-separated rows from row 0 (Black's home edge) to row 7, eight
//! characters each: `.` empty, `w`/`b` men, `W`/`B` kings. Used to set up
//! positions in tests and through the protocol's `position board` command.

use crate::errors::CheckersError;
use crate::game_state::checkers_rules::BOARD_SIZE;
use crate::game_state::checkers_types::{Board, Color, Piece, Square};

pub fn parse_board(text: &str) -> Result<Board, CheckersError> {
    let rows: Vec<&str> = text.trim().split('/').collect();
    if rows.len() != BOARD_SIZE {
        return Err(CheckersError::InvalidBoardText(format!(
            "expected {BOARD_SIZE} rows, found {}",
            rows.len()
        )));
    }

    let mut board = Board::new_empty();
    for (row, row_text) in rows.iter().enumerate() {
        let cells: Vec<char> = row_text.chars().collect();
        if cells.len() != BOARD_SIZE {
            return Err(CheckersError::InvalidBoardText(format!(
                "row {row} has {} cells",
                cells.len()
            )));
        }

        for (col, ch) in cells.into_iter().enumerate() {
            let Some(piece) = piece_from_char(ch)? else {
                continue;
            };
            let square = Square::new(row as i32, col as i32)?;
            if !square.is_playable() {
                return Err(CheckersError::InvalidBoardText(format!(
                    "piece '{ch}' on light cell {square}"
                )));
            }
            board.place(square, piece);
        }
    }

    Ok(board)
}

pub fn board_to_text(board: &Board) -> String {
    let mut out = String::with_capacity(BOARD_SIZE * (BOARD_SIZE + 1));
    for row in 0..BOARD_SIZE as u8 {
        if row > 0 {
            out.push('/');
        }
        for col in 0..BOARD_SIZE as u8 {
            out.push(piece_to_char(board.piece_at(Square { row, col })));
        }
    }
    out
}

fn piece_from_char(ch: char) -> Result<Option<Piece>, CheckersError> {
    Ok(match ch {
        '.' => None,
        'w' => Some(Piece::man(Color::White)),
        'b' => Some(Piece::man(Color::Black)),
        'W' => Some(Piece::king(Color::White)),
        'B' => Some(Piece::king(Color::Black)),
        _ => {
            return Err(CheckersError::InvalidBoardText(format!(
                "unknown cell character '{ch}'"
            )))
        }
    })
}

fn piece_to_char(piece: Option<Piece>) -> char {
    match piece {
        None => '.',
        Some(Piece { color: Color::White, is_king: false }) => 'w',
        Some(Piece { color: Color::Black, is_king: false }) => 'b',
        Some(Piece { color: Color::White, is_king: true }) => 'W',
        Some(Piece { color: Color::Black, is_king: true }) => 'B',
    }
}

#[cfg(test)]
mod tests {
    use super::{board_to_text, parse_board};
    use crate::errors::CheckersError;
    use crate::game_state::checkers_rules::STARTING_POSITION_TEXT;
    use crate::game_state::checkers_types::{Board, Color, Piece, Square};

    #[test]
    fn starting_text_matches_initial_layout() {
        let parsed = parse_board(STARTING_POSITION_TEXT).expect("starting text parses");
        assert_eq!(parsed, Board::new_game());
        assert_eq!(board_to_text(&parsed), STARTING_POSITION_TEXT);
    }

    #[test]
    fn kings_are_upper_case() {
        let board = parse_board("......../......../......../......../...W..../......../......../B.......")
            .expect("board parses");
        assert_eq!(
            board.piece_at(Square::new(4, 3).expect("in range")),
            Some(Piece::king(Color::White))
        );
        assert_eq!(
            board.piece_at(Square::new(7, 0).expect("in range")),
            Some(Piece::king(Color::Black))
        );
    }

    #[test]
    fn malformed_text_is_rejected() {
        assert!(matches!(parse_board("........"), Err(CheckersError::InvalidBoardText(_))));
        assert!(parse_board("w......./......../......../......../......../......../......../........").is_err());
        assert!(parse_board("......../......../......../......../......../......../......../.......x").is_err());
        assert!(parse_board("......./......../......../......../......../......../......../........").is_err());
    }
}
