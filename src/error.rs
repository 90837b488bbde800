use thiserror::Error;

/// Reasons a move is rejected. A rejected move never mutates the game.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum MoveError {
    #[error("game is already over")]
    GameOver,

    #[error("row/col out of range: ({row}, {col})")]
    OutOfRange { row: i64, col: i64 },

    #[error("illegal move: ({row}, {col}) is occupied")]
    Occupied { row: u8, col: u8 },

    #[error("illegal move: ({row}, {col}) flips nothing")]
    NoFlips { row: u8, col: u8 },
}

impl MoveError {
    /// True for rejections caused by the requested square itself.
    pub fn is_invalid_move(&self) -> bool {
        !matches!(self, MoveError::GameOver)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn game_over_is_not_an_invalid_move() {
        assert!(!MoveError::GameOver.is_invalid_move());
        assert!(MoveError::OutOfRange { row: 8, col: 0 }.is_invalid_move());
        assert!(MoveError::Occupied { row: 3, col: 3 }.is_invalid_move());
        assert!(MoveError::NoFlips { row: 0, col: 0 }.is_invalid_move());
    }

    #[test]
    fn messages_name_the_square() {
        let err = MoveError::NoFlips { row: 0, col: 7 };

        assert!(err.to_string().contains("illegal move"));
        assert!(err.to_string().contains("(0, 7)"));
    }
}
