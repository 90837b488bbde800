//! Geometry shared by renderers and input handlers. No drawing happens here.

use serde::Serialize;

use crate::config::{BOARD_SIZE, ViewConfig};
use crate::types::Position;

/// Pixel rectangle `(x1, y1, x2, y2)`.
pub type Rect = (u32, u32, u32, u32);

/// Where one square and its disc go on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SquareLayout {
    pub position: Position,
    pub square: Rect,
    pub disc: Rect,
}

/// Everything a renderer needs to draw the grid, squares in row-major order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardLayout {
    pub canvas_size: u32,
    pub squares: Vec<SquareLayout>,
}

/// Maps a click at pixel `(x, y)` to the square under it.
/// Returns `None` for clicks outside the board, non-finite input, or a zero cell size.
pub fn cell_at(x: f64, y: f64, config: &ViewConfig) -> Option<Position> {
    if config.cell_size == 0 {
        return None;
    }
    let col = grid_index(x, config.cell_size)?;
    let row = grid_index(y, config.cell_size)?;
    Some(Position::new(row, col))
}

pub fn square_bounds(pos: Position, config: &ViewConfig) -> Rect {
    let x1 = pos.col as u32 * config.cell_size;
    let y1 = pos.row as u32 * config.cell_size;
    (x1, y1, x1 + config.cell_size, y1 + config.cell_size)
}

/// Square bounds shrunk by the disc inset on every side.
pub fn disc_bounds(pos: Position, config: &ViewConfig) -> Rect {
    let (x1, y1, x2, y2) = square_bounds(pos, config);
    let inset = config.disc_inset.min(config.cell_size / 2);
    (x1 + inset, y1 + inset, x2 - inset, y2 - inset)
}

pub fn layout(config: &ViewConfig) -> BoardLayout {
    let squares = (0..BOARD_SIZE as u8)
        .flat_map(|row| (0..BOARD_SIZE as u8).map(move |col| Position::new(row, col)))
        .map(|position| SquareLayout {
            position,
            square: square_bounds(position, config),
            disc: disc_bounds(position, config),
        })
        .collect();

    BoardLayout {
        canvas_size: config.canvas_size(),
        squares,
    }
}

fn grid_index(pixel: f64, cell_size: u32) -> Option<u8> {
    if !pixel.is_finite() || pixel < 0.0 {
        return None;
    }
    let index = (pixel / cell_size as f64).floor();
    if index >= BOARD_SIZE as f64 {
        return None;
    }
    Some(index as u8)
}
