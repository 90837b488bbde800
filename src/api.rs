//! Browser bindings around a single session game.

use std::sync::{Mutex, MutexGuard, PoisonError};

use once_cell::sync::Lazy;
use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::config::ViewConfig;
use crate::error::MoveError;
use crate::game::{GameState, MoveReport};
use crate::types::{GameResult, Position, StateView};
use crate::view::{cell_at, layout as board_layout};

static SESSION: Lazy<Mutex<Session>> = Lazy::new(|| Mutex::new(Session::new()));

/// The game being played plus the last accepted move, for the renderer.
#[derive(Debug, Default)]
pub(crate) struct Session {
    state: GameState,
    last_move: Option<MoveReport>,
}

impl Session {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn reset(&mut self) -> StateView {
        *self = Self::new();
        self.view()
    }

    pub(crate) fn play(&mut self, row: u8, col: u8) -> Result<StateView, MoveError> {
        let report = self.state.attempt_move(row, col)?;
        self.last_move = Some(report);
        Ok(self.view())
    }

    /// Plays coordinates as they arrive from JavaScript.
    /// Anything that is not a whole number in `0..=255` is rejected before it can be narrowed.
    pub(crate) fn play_at(&mut self, row: f64, col: f64) -> Result<StateView, MoveError> {
        match (board_coordinate(row), board_coordinate(col)) {
            (Some(row), Some(col)) => self.play(row, col),
            _ => Err(MoveError::OutOfRange {
                row: row as i64,
                col: col as i64,
            }),
        }
    }

    pub(crate) fn view(&self) -> StateView {
        self.state.to_state_view(self.last_move.as_ref())
    }

    pub(crate) fn legal_moves(&self) -> Vec<Position> {
        self.state.legal_moves_for_current()
    }

    pub(crate) fn result(&self) -> Option<GameResult> {
        self.state.to_game_result()
    }
}

fn board_coordinate(value: f64) -> Option<u8> {
    if value.fract() != 0.0 {
        return None;
    }
    u8::try_from(value as i64).ok()
}

fn view_config(config: JsValue) -> Result<ViewConfig, JsValue> {
    if config.is_undefined() || config.is_null() {
        return Ok(ViewConfig::default());
    }
    Ok(serde_wasm_bindgen::from_value(config)?)
}

fn session() -> MutexGuard<'static, Session> {
    SESSION.lock().unwrap_or_else(PoisonError::into_inner)
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(Into::into)
}

fn move_error(err: MoveError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Starts a fresh game and returns its state.
#[wasm_bindgen]
pub fn new_game() -> Result<JsValue, JsValue> {
    to_js(&session().reset())
}

/// Takes plain JS numbers so off-board values are rejected rather than truncated.
#[wasm_bindgen]
pub fn attempt_move(row: f64, col: f64) -> Result<JsValue, JsValue> {
    let view = session().play_at(row, col).map_err(move_error)?;
    to_js(&view)
}

/// Plays the square under pixel `(x, y)`.
/// `config` may be `undefined` to use the default 50px grid.
#[wasm_bindgen]
pub fn click(x: f64, y: f64, config: JsValue) -> Result<JsValue, JsValue> {
    let config = view_config(config)?;
    let pos = cell_at(x, y, &config)
        .ok_or_else(|| JsValue::from_str("click is outside the board"))?;
    let view = session().play(pos.row, pos.col).map_err(move_error)?;
    to_js(&view)
}

/// Square and disc rectangles for drawing the board.
#[wasm_bindgen]
pub fn layout(config: JsValue) -> Result<JsValue, JsValue> {
    to_js(&board_layout(&view_config(config)?))
}

#[wasm_bindgen]
pub fn get_state() -> Result<JsValue, JsValue> {
    to_js(&session().view())
}

#[wasm_bindgen]
pub fn get_legal_moves() -> Result<JsValue, JsValue> {
    to_js(&session().legal_moves())
}

/// Final counts and winner. Fails while the game is still running.
#[wasm_bindgen]
pub fn get_result() -> Result<JsValue, JsValue> {
    let result = session()
        .result()
        .ok_or_else(|| JsValue::from_str("game is not over"))?;
    to_js(&result)
}
