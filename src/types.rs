use std::fmt;

use serde::{Deserialize, Serialize};

pub const PLAYER_BLACK: u8 = 1;
pub const PLAYER_WHITE: u8 = 2;

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    Black,
    White,
}

impl Player {
    pub fn opponent(self) -> Self {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }

    /// Numeric id used by the presentation layer: 1=black, 2=white.
    pub fn id(self) -> u8 {
        match self {
            Player::Black => PLAYER_BLACK,
            Player::White => PLAYER_WHITE,
        }
    }
}

/// Content of one board square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Black,
    White,
}

impl Cell {
    /// 0=empty, 1=black, 2=white.
    pub fn id(self) -> u8 {
        match self {
            Cell::Empty => 0,
            Cell::Black => PLAYER_BLACK,
            Cell::White => PLAYER_WHITE,
        }
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        match player {
            Player::Black => Cell::Black,
            Player::White => Cell::White,
        }
    }
}

/// A board coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: u8,
    pub col: u8,
}

impl Position {
    pub fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }
}

/// Final result of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    BlackWins,
    WhiteWins,
    Tie,
}

impl Outcome {
    /// Strict majority of disc counts.
    pub fn from_counts(black_count: u8, white_count: u8) -> Self {
        if black_count > white_count {
            Outcome::BlackWins
        } else if white_count > black_count {
            Outcome::WhiteWins
        } else {
            Outcome::Tie
        }
    }

    pub fn winner(self) -> Option<Player> {
        match self {
            Outcome::BlackWins => Some(Player::Black),
            Outcome::WhiteWins => Some(Player::White),
            Outcome::Tie => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Outcome::BlackWins => "Black wins!",
            Outcome::WhiteWins => "White wins!",
            Outcome::Tie => "It's a tie!",
        })
    }
}

/// Read-only snapshot handed to the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StateView {
    /// Row-major cells, 0=empty, 1=black, 2=white.
    pub board: Vec<u8>,
    pub current_player: u8,
    pub black_count: u8,
    pub white_count: u8,
    pub is_game_over: bool,
    /// Contract:
    /// - `true` when the last move made the opponent skip its turn.
    /// - `false` otherwise, including before the first move.
    pub is_pass: bool,
    /// Contract:
    /// - After a move: flipped positions (0..=63) in ascending order.
    /// - Before the first move: an empty list.
    pub flipped: Vec<u8>,
}

/// Final result after game over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GameResult {
    /// 0 on a tie.
    pub winner: u8,
    pub black_count: u8,
    pub white_count: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_follows_strict_majority() {
        assert_eq!(Outcome::from_counts(33, 31), Outcome::BlackWins);
        assert_eq!(Outcome::from_counts(10, 54), Outcome::WhiteWins);
        assert_eq!(Outcome::from_counts(32, 32), Outcome::Tie);
        assert_eq!(Outcome::Tie.winner(), None);
    }

    #[test]
    fn outcome_displays_end_of_game_message() {
        assert_eq!(Outcome::BlackWins.to_string(), "Black wins!");
        assert_eq!(Outcome::WhiteWins.to_string(), "White wins!");
        assert_eq!(Outcome::Tie.to_string(), "It's a tie!");
    }
}
