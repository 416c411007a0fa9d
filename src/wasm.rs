//! wasm-bindgen bindings
//!
//! The surface exposed to the web by the build pipeline. Cells are
//! reported as small integer codes so the JS side can render without
//! knowing the Rust types: 0 empty, 1-5 colors, 6 garbage, 7 cracked
//! garbage.

use wasm_bindgen::prelude::*;

use crate::core::grid::{Block, BlockColor};
use crate::core::session::Session;

/// A running game, exported to JavaScript
#[wasm_bindgen]
pub struct Game {
    session: Session,
}

#[wasm_bindgen]
impl Game {
    /// Start a new game
    #[wasm_bindgen(constructor)]
    pub fn new(width: usize, height: usize, seed: u64) -> Game {
        Game {
            session: Session::new(width, height, seed),
        }
    }

    /// Playfield width in cells
    pub fn width(&self) -> usize {
        self.session.grid().width()
    }

    /// Playfield height in cells
    pub fn height(&self) -> usize {
        self.session.grid().height()
    }

    /// Cell code at (x, y); row 0 is the bottom row
    pub fn cell(&self, x: usize, y: usize) -> u8 {
        match self.session.cell(x, y) {
            None => 0,
            Some(Block::Normal { color }) => match color {
                BlockColor::Red => 1,
                BlockColor::Green => 2,
                BlockColor::Blue => 3,
                BlockColor::Yellow => 4,
                BlockColor::Purple => 5,
            },
            Some(Block::Garbage { cracked: false }) => 6,
            Some(Block::Garbage { cracked: true }) => 7,
        }
    }

    /// Cursor x (left cell of the pair)
    pub fn cursor_x(&self) -> usize {
        self.session.cursor().x
    }

    /// Cursor y
    pub fn cursor_y(&self) -> usize {
        self.session.cursor().y
    }

    /// Move the cursor by (dx, dy); returns whether it moved
    pub fn move_cursor(&mut self, dx: i32, dy: i32) -> bool {
        self.session.move_cursor(dx as isize, dy as isize)
    }

    /// Swap under the cursor; returns cells cleared (0 if rejected)
    pub fn swap(&mut self) -> u32 {
        self.session.swap().map_or(0, |outcome| outcome.cleared)
    }

    /// Raise the stack one row; returns false when this topped out
    pub fn raise(&mut self) -> bool {
        self.session.raise().is_some()
    }

    /// Current score
    pub fn score(&self) -> u64 {
        self.session.score()
    }

    /// Whether the stack has topped out
    pub fn is_game_over(&self) -> bool {
        self.session.is_game_over()
    }

    /// Session statistics as a JSON string
    pub fn summary_json(&self) -> String {
        serde_json::to_string(&self.session.summary()).unwrap_or_default()
    }
}
