use std::fmt;

use crate::config::{BOARD_SIZE, DIRECTIONS, NUM_SQUARES};
use crate::types::{Cell, Player};

/// Reversi board state represented by two bitboards.
/// Bit `row * 8 + col` is set in at most one of the two masks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    black: u64,
    white: u64,
}

impl Board {
    /// Creates the initial board:
    /// d4=black, e4=white, d5=white, e5=black.
    pub fn new() -> Self {
        Self {
            black: bit(27) | bit(36),
            white: bit(28) | bit(35),
        }
    }

    /// Builds a board from raw masks. Returns `None` when a square is claimed by both colors.
    pub fn from_bitboards(black: u64, white: u64) -> Option<Self> {
        if black & white != 0 {
            return None;
        }
        Some(Self { black, white })
    }

    /// Returns the content of a square, or `None` when out of range.
    pub fn cell(&self, row: u8, col: u8) -> Option<Cell> {
        let pos = row_col_to_pos(row, col)?;
        let square = bit(pos);
        Some(if (self.black & square) != 0 {
            Cell::Black
        } else if (self.white & square) != 0 {
            Cell::White
        } else {
            Cell::Empty
        })
    }

    /// True when `player` may place a disc at `(row, col)`.
    /// Out-of-range coordinates are never valid.
    pub fn is_valid_move(&self, row: u8, col: u8, player: Player) -> bool {
        match row_col_to_pos(row, col) {
            Some(pos) => self.collect_flips(pos, player) != 0,
            None => false,
        }
    }

    pub fn has_valid_move(&self, player: Player) -> bool {
        self.legal_moves(player) != 0
    }

    /// Returns legal move mask for the given side.
    pub fn legal_moves(&self, player: Player) -> u64 {
        let occupied = self.black | self.white;
        let mut legal = 0u64;

        for pos in 0..NUM_SQUARES {
            let move_bit = bit(pos);
            if (occupied & move_bit) != 0 {
                continue;
            }
            if self.collect_flips(pos, player) != 0 {
                legal |= move_bit;
            }
        }

        legal
    }

    /// Places one disc and flips captured discs.
    /// Returns flipped bit mask. Returns 0 and leaves the board untouched when the move is illegal.
    pub fn place(&mut self, row: u8, col: u8, player: Player) -> u64 {
        let Some(pos) = row_col_to_pos(row, col) else {
            return 0;
        };

        let flips = self.collect_flips(pos, player);
        if flips == 0 {
            return 0;
        }

        let (me, opp) = self.masks(player);
        let next_me = me | bit(pos) | flips;
        let next_opp = opp & !flips;

        match player {
            Player::Black => {
                self.black = next_me;
                self.white = next_opp;
            }
            Player::White => {
                self.white = next_me;
                self.black = next_opp;
            }
        }

        flips
    }

    /// Returns `(black_count, white_count)`.
    pub fn count(&self) -> (u8, u8) {
        (self.black.count_ones() as u8, self.white.count_ones() as u8)
    }

    /// Returns the number of empty squares.
    pub fn empty_count(&self) -> u8 {
        let (black_count, white_count) = self.count();
        NUM_SQUARES as u8 - black_count - white_count
    }

    /// Converts board to `[u8; 64]` where 0=empty, 1=black, 2=white.
    pub fn to_array(&self) -> [u8; NUM_SQUARES] {
        let mut board = [0u8; NUM_SQUARES];
        for (pos, cell) in board.iter_mut().enumerate() {
            let (row, col) = pos_to_row_col(pos);
            *cell = self
                .cell(row as u8, col as u8)
                .map_or(Cell::Empty.id(), Cell::id);
        }
        board
    }

    fn masks(&self, player: Player) -> (u64, u64) {
        match player {
            Player::Black => (self.black, self.white),
            Player::White => (self.white, self.black),
        }
    }

    fn collect_flips(&self, pos: usize, player: Player) -> u64 {
        if pos >= NUM_SQUARES || ((self.black | self.white) & bit(pos)) != 0 {
            return 0;
        }

        let (row, col) = pos_to_row_col(pos);
        DIRECTIONS
            .iter()
            .fold(0u64, |flips, &(dr, dc)| {
                flips | self.scan_line(row, col, dr, dc, player)
            })
    }

    /// Walks from `(row, col)` in direction `(dr, dc)`.
    /// Returns the opponent discs strictly between the start and the first `player` disc,
    /// or 0 if the run is empty, hits an empty square, or leaves the board.
    fn scan_line(&self, row: i32, col: i32, dr: i32, dc: i32, player: Player) -> u64 {
        let (me, opp) = self.masks(player);
        let mut r = row + dr;
        let mut c = col + dc;
        let mut line = 0u64;

        while in_bounds(r, c) {
            let square = bit((r as usize) * BOARD_SIZE + c as usize);
            if (opp & square) != 0 {
                line |= square;
            } else if (me & square) != 0 {
                return line;
            } else {
                return 0;
            }

            r += dr;
            c += dc;
        }

        0
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..BOARD_SIZE as u8 {
            for col in 0..BOARD_SIZE as u8 {
                let glyph = match self.cell(row, col) {
                    Some(Cell::Black) => 'X',
                    Some(Cell::White) => 'O',
                    _ => '.',
                };
                write!(f, "{glyph}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

pub(crate) fn bit(pos: usize) -> u64 {
    if pos < NUM_SQUARES { 1u64 << pos } else { 0 }
}

pub(crate) fn row_col_to_pos(row: u8, col: u8) -> Option<usize> {
    if row as usize >= BOARD_SIZE || col as usize >= BOARD_SIZE {
        return None;
    }
    Some((row as usize) * BOARD_SIZE + col as usize)
}

fn pos_to_row_col(pos: usize) -> (i32, i32) {
    ((pos / BOARD_SIZE) as i32, (pos % BOARD_SIZE) as i32)
}

fn in_bounds(row: i32, col: i32) -> bool {
    (0..BOARD_SIZE as i32).contains(&row) && (0..BOARD_SIZE as i32).contains(&col)
}
