use log::{debug, info, trace};

use crate::board::{Board, row_col_to_pos};
use crate::config::BOARD_SIZE;
use crate::error::MoveError;
use crate::types::{Cell, GameResult, Outcome, Player, Position, StateView};

/// Everything the rules need: the board, the side to move, and whether play has ended.
///
/// Once `is_terminal` is set every move is rejected and only `outcome()` is meaningful.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameState {
    board: Board,
    current_player: Player,
    is_terminal: bool,
}

/// What an accepted move did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveReport {
    pub placed: Position,
    /// Flipped squares in ascending index order. Never empty.
    pub flipped: Vec<Position>,
    /// The opponent had no legal move and the mover plays again.
    pub skipped: bool,
    /// Set when this move ended the game.
    pub outcome: Option<Outcome>,
}

/// Standard opening position, Black to move.
pub fn new_game() -> GameState {
    GameState::new()
}

/// Applies a move to a copy of `state`; `state` itself is not modified.
pub fn attempt_move(state: &GameState, row: u8, col: u8) -> Result<GameState, MoveError> {
    let mut next = *state;
    next.attempt_move(row, col)?;
    Ok(next)
}

impl GameState {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::Black,
            is_terminal: false,
        }
    }

    /// Builds a state from an arbitrary position with `to_move` to play.
    /// A side without legal moves is skipped, and the state is terminal when neither side can move.
    pub fn from_board(board: Board, to_move: Player) -> Self {
        let mut state = Self {
            board,
            current_player: to_move,
            is_terminal: false,
        };
        if !state.board.has_valid_move(to_move) {
            state.current_player = to_move.opponent();
            state.resolve_turn();
        }
        state
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn is_terminal(&self) -> bool {
        self.is_terminal
    }

    pub fn is_valid_move(&self, row: u8, col: u8, player: Player) -> bool {
        self.board.is_valid_move(row, col, player)
    }

    pub fn has_valid_move(&self, player: Player) -> bool {
        self.board.has_valid_move(player)
    }

    pub fn legal_moves(&self, player: Player) -> Vec<Position> {
        bitmask_to_positions(self.board.legal_moves(player))
    }

    /// Legal moves for the side to move; empty once the game is over.
    pub fn legal_moves_for_current(&self) -> Vec<Position> {
        if self.is_terminal {
            return Vec::new();
        }
        self.legal_moves(self.current_player)
    }

    /// Plays `(row, col)` for the side to move.
    ///
    /// On success the disc is placed, captured discs flip, and the turn passes on
    /// according to the skip rule. On failure nothing changes.
    pub fn attempt_move(&mut self, row: u8, col: u8) -> Result<MoveReport, MoveError> {
        let player = self.current_player;
        if let Err(err) = self.check_move(row, col, player) {
            trace!("rejected move ({row}, {col}) for {player:?}: {err}");
            return Err(err);
        }

        let flips = self.board.place(row, col, player);
        debug_assert_ne!(flips, 0, "validated move must flip at least one disc");
        debug!(
            "{player:?} played ({row}, {col}) flipping {} disc(s)",
            flips.count_ones()
        );

        self.current_player = player.opponent();
        let skipped = self.resolve_turn();

        Ok(MoveReport {
            placed: Position::new(row, col),
            flipped: bitmask_to_positions(flips),
            skipped,
            outcome: self.outcome(),
        })
    }

    /// Disc-count result. `None` until the game is terminal.
    pub fn outcome(&self) -> Option<Outcome> {
        if !self.is_terminal {
            return None;
        }
        let (black_count, white_count) = self.board.count();
        Some(Outcome::from_counts(black_count, white_count))
    }

    pub fn to_game_result(&self) -> Option<GameResult> {
        let outcome = self.outcome()?;
        let (black_count, white_count) = self.board.count();
        Some(GameResult {
            winner: outcome.winner().map_or(0, Player::id),
            black_count,
            white_count,
        })
    }

    /// Snapshot for rendering; `last_move` feeds the flip and pass fields.
    pub fn to_state_view(&self, last_move: Option<&MoveReport>) -> StateView {
        let (black_count, white_count) = self.board.count();
        StateView {
            board: self.board.to_array().to_vec(),
            current_player: self.current_player.id(),
            black_count,
            white_count,
            is_game_over: self.is_terminal,
            is_pass: last_move.is_some_and(|report| report.skipped),
            flipped: last_move.map_or_else(Vec::new, |report| {
                report
                    .flipped
                    .iter()
                    .map(|pos| pos.row * BOARD_SIZE as u8 + pos.col)
                    .collect()
            }),
        }
    }

    fn check_move(&self, row: u8, col: u8, player: Player) -> Result<(), MoveError> {
        if self.is_terminal {
            return Err(MoveError::GameOver);
        }
        if row_col_to_pos(row, col).is_none() {
            return Err(MoveError::OutOfRange {
                row: row.into(),
                col: col.into(),
            });
        }
        if self.board.cell(row, col) != Some(Cell::Empty) {
            return Err(MoveError::Occupied { row, col });
        }
        if !self.board.is_valid_move(row, col, player) {
            return Err(MoveError::NoFlips { row, col });
        }
        Ok(())
    }

    /// Skip rule, run after `current_player` has been handed to the next side.
    /// Returns true when that side was skipped.
    fn resolve_turn(&mut self) -> bool {
        if self.board.has_valid_move(self.current_player) {
            return false;
        }

        let skipped = self.current_player;
        self.current_player = skipped.opponent();
        if self.board.has_valid_move(self.current_player) {
            info!("{skipped:?} has no legal move; turn passes to {:?}", self.current_player);
            return true;
        }

        self.is_terminal = true;
        let (black_count, white_count) = self.board.count();
        info!("game over: black={black_count} white={white_count}");
        false
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

fn bitmask_to_positions(mask: u64) -> Vec<Position> {
    let mut bits = mask;
    let mut out = Vec::new();

    while bits != 0 {
        let idx = bits.trailing_zeros() as u8;
        out.push(Position::new(idx / BOARD_SIZE as u8, idx % BOARD_SIZE as u8));
        bits &= bits - 1;
    }

    out
}
