use crate::errors::CheckersError;
use crate::moves::move_descriptions::Move;
use crate::utils::algebraic::{algebraic_to_square, square_to_algebraic};

/// Four-character move text, origin then destination (for example "a3b4").
pub fn move_to_long_algebraic(mv: Move) -> String {
    format!("{}{}", square_to_algebraic(mv.from), square_to_algebraic(mv.to))
}

pub fn long_algebraic_to_move(text: &str) -> Result<Move, CheckersError> {
    if text.len() != 4 || !text.is_ascii() {
        return Err(CheckersError::InvalidSquareText(text.to_owned()));
    }
    let from = algebraic_to_square(&text[0..2])?;
    let to = algebraic_to_square(&text[2..4])?;
    Ok(Move::new(from, to))
}

#[cfg(test)]
mod tests {
    use super::{long_algebraic_to_move, move_to_long_algebraic};
    use crate::game_state::checkers_types::Square;
    use crate::moves::move_descriptions::Move;

    #[test]
    fn opening_move_text() {
        let mv = long_algebraic_to_move("a3b4").expect("move text parses");
        let expected = Move::new(
            Square::new(5, 0).expect("in range"),
            Square::new(4, 1).expect("in range"),
        );
        assert_eq!(mv, expected);
        assert_eq!(move_to_long_algebraic(expected), "a3b4");
        assert!(long_algebraic_to_move("a3b").is_err());
        assert!(long_algebraic_to_move("a3z4").is_err());
    }
}
