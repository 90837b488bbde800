pub mod api;
pub mod board;
pub mod config;
pub mod error;
pub mod game;
pub mod types;
pub mod view;

pub use board::Board;
pub use config::ViewConfig;
pub use error::MoveError;
pub use game::{GameState, MoveReport, attempt_move, new_game};
pub use types::{Cell, GameResult, Outcome, Player, Position, StateView};
