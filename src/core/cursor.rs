//! Swap cursor
//!
//! The cursor covers two horizontally adjacent cells, (x, y) and
//! (x + 1, y), so its x range is two cells narrower than the grid.

use serde::{Deserialize, Serialize};

/// Player cursor position (left cell of the covered pair)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cursor {
    pub x: usize,
    pub y: usize,
}

impl Cursor {
    /// Create a cursor at (x, y)
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Move by (dx, dy), clamped to the grid
    ///
    /// Returns whether the position changed. Grids too narrow for the
    /// two-cell cursor never move it.
    pub fn move_by(&mut self, dx: isize, dy: isize, width: usize, height: usize) -> bool {
        if width < 2 || height == 0 {
            return false;
        }
        let max_x = (width - 2) as isize;
        let max_y = (height - 1) as isize;
        let nx = (self.x as isize + dx).clamp(0, max_x) as usize;
        let ny = (self.y as isize + dy).clamp(0, max_y) as usize;
        let changed = nx != self.x || ny != self.y;
        self.x = nx;
        self.y = ny;
        changed
    }
}
