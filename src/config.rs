use serde::Deserialize;

pub const BOARD_SIZE: usize = 8;
pub const NUM_SQUARES: usize = BOARD_SIZE * BOARD_SIZE;
pub const DIRECTIONS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

const DEFAULT_CELL_SIZE: u32 = 50;
const DEFAULT_DISC_INSET: u32 = 5;

/// Pixel geometry of the rendered board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// Width and height of one square.
    pub cell_size: u32,
    /// Gap between a square's edge and its disc.
    pub disc_inset: u32,
}

impl ViewConfig {
    /// Side length of the whole board canvas.
    pub fn canvas_size(&self) -> u32 {
        self.cell_size * BOARD_SIZE as u32
    }
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            cell_size: DEFAULT_CELL_SIZE,
            disc_inset: DEFAULT_DISC_INSET,
        }
    }
}
