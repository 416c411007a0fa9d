//! Game session
//!
//! Drives a [`Grid`] and [`Cursor`] through the swap / clear / gravity
//! cycle, tracking score, chains, and the game-over state. All
//! randomness flows through a seeded RNG, so sessions with equal seeds
//! replay identically.

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;

use crate::core::cursor::Cursor;
use crate::core::grid::{Block, Grid, SwapCmd};

/// Points per cleared cell, multiplied by the chain link index
const POINTS_PER_CELL: u64 = 10;

/// Outcome of one resolution cycle
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolveOutcome {
    /// Total cells cleared across all chain links
    pub cleared: u32,
    /// Number of chain links (1 = no chain)
    pub chain: u32,
    /// Garbage cells cracked by adjacent clears
    pub cracked: u32,
    /// Cracked garbage cells converted to normal blocks
    pub converted: u32,
}

impl ResolveOutcome {
    /// Whether anything cleared at all
    pub fn any_cleared(&self) -> bool {
        self.cleared > 0
    }
}

/// Aggregate statistics for a finished or running session
#[derive(Debug, Clone, Serialize)]
pub struct SessionSummary {
    pub width: usize,
    pub height: usize,
    pub seed: u64,
    pub moves: u32,
    pub score: u64,
    pub cleared_total: u32,
    pub max_chain: u32,
    pub rises: u32,
    pub game_over: bool,
}

/// A running game
pub struct Session {
    grid: Grid,
    cursor: Cursor,
    rng: StdRng,
    seed: u64,
    moves: u32,
    score: u64,
    cleared_total: u32,
    max_chain: u32,
    rises: u32,
    game_over: bool,
}

impl Session {
    /// Start a session with a dealt grid
    ///
    /// Equal dimensions and seeds produce identical sessions.
    pub fn new(width: usize, height: usize, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut grid = Grid::new(width, height);
        grid.fill_random(&mut rng);
        Self {
            grid,
            cursor: Cursor::new(0, 0),
            rng,
            seed,
            moves: 0,
            score: 0,
            cleared_total: 0,
            max_chain: 0,
            rises: 0,
            game_over: false,
        }
    }

    /// The playfield
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The cursor position
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Current score
    pub fn score(&self) -> u64 {
        self.score
    }

    /// Highest chain reached so far
    pub fn max_chain(&self) -> u32 {
        self.max_chain
    }

    /// Whether the stack has topped out
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Move the cursor by (dx, dy)
    pub fn move_cursor(&mut self, dx: isize, dy: isize) -> bool {
        self.cursor
            .move_by(dx, dy, self.grid.width(), self.grid.height())
    }

    /// Place the cursor directly, clamped to the valid range
    pub fn set_cursor(&mut self, x: usize, y: usize) {
        self.cursor = Cursor::new(0, 0);
        self.cursor
            .move_by(x as isize, y as isize, self.grid.width(), self.grid.height());
    }

    /// Swap the pair under the cursor and resolve the result
    ///
    /// Returns `None` when the swap was rejected (garbage or bounds).
    pub fn swap(&mut self) -> Option<ResolveOutcome> {
        if self.game_over {
            return None;
        }
        let cmd = SwapCmd::right_of(self.cursor.x, self.cursor.y);
        if !self.grid.swap_in_bounds(cmd) {
            return None;
        }
        self.moves += 1;
        Some(self.resolve())
    }

    /// Settle the grid and clear every resulting match
    ///
    /// Each clearing pass after the first counts as a chain link and
    /// scores `cleared * 10 * link`. Garbage adjacent to a clear is
    /// cracked and then converted before the next pass.
    pub fn resolve(&mut self) -> ResolveOutcome {
        let mut outcome = ResolveOutcome::default();
        self.grid.apply_gravity();

        loop {
            let stats = self.grid.clear_matches_once_with_stats();
            if stats.cleared == 0 {
                break;
            }
            outcome.chain += 1;
            outcome.cleared += stats.cleared;
            self.score += u64::from(stats.cleared) * POINTS_PER_CELL * u64::from(outcome.chain);

            outcome.cracked += self.grid.crack_adjacent_garbage(&stats.marks);
            outcome.converted += self.grid.convert_cracked_garbage(&mut self.rng);
            self.grid.apply_gravity();
        }

        self.cleared_total += outcome.cleared;
        self.max_chain = self.max_chain.max(outcome.chain);
        outcome
    }

    /// Raise the stack by one row
    ///
    /// Tops out (game over) instead when the top row is occupied.
    /// Returns the resolution of any matches the new row created.
    pub fn raise(&mut self) -> Option<ResolveOutcome> {
        if self.game_over {
            return None;
        }
        if self.grid.top_row_occupied() {
            self.game_over = true;
            return None;
        }
        self.grid.push_bottom_row(&mut self.rng);
        self.rises += 1;
        // Keep the cursor over the same blocks as they shift up
        self.move_cursor(0, 1);
        Some(self.resolve())
    }

    /// Drop garbage row masks onto the stack
    ///
    /// Returns false when the masks do not fit.
    pub fn drop_garbage(&mut self, rows: &[Vec<bool>]) -> bool {
        if !self.grid.insert_garbage_rows_from_top(rows) {
            return false;
        }
        self.grid.apply_gravity();
        true
    }

    /// Cell occupant at (x, y)
    pub fn cell(&self, x: usize, y: usize) -> Option<Block> {
        self.grid.get(x, y)
    }

    /// Aggregate statistics snapshot
    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            width: self.grid.width(),
            height: self.grid.height(),
            seed: self.seed,
            moves: self.moves,
            score: self.score,
            cleared_total: self.cleared_total,
            max_chain: self.max_chain,
            rises: self.rises,
            game_over: self.game_over,
        }
    }
}
