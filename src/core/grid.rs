//! Playfield grid
//!
//! A fixed-size grid of optional blocks, row-major with row 0 at the
//! bottom. Matching, gravity, garbage handling, and row insertion all
//! live here; the grid performs no I/O and owns no randomness, callers
//! pass an [`Rng`] to the operations that need one.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// How many times a random fill re-rolls a color to avoid an instant match
const COLOR_REROLLS: usize = 10;

/// Minimum run length that counts as a match
const MATCH_RUN: usize = 3;

/// Color of a normal block
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlockColor {
    Red,
    Green,
    Blue,
    Yellow,
    Purple,
}

impl BlockColor {
    /// All colors, in dealing order
    pub const ALL: [BlockColor; 5] = [
        BlockColor::Red,
        BlockColor::Green,
        BlockColor::Blue,
        BlockColor::Yellow,
        BlockColor::Purple,
    ];

    /// Pick a uniformly random color
    pub fn random(rng: &mut impl Rng) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }
}

/// A single cell occupant
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Block {
    /// A matchable colored block
    Normal { color: BlockColor },
    /// A garbage slab cell; cracked garbage converts to normal blocks
    Garbage { cracked: bool },
}

impl Block {
    /// Color of the block, if it has one
    pub fn color(self) -> Option<BlockColor> {
        match self {
            Block::Normal { color } => Some(color),
            Block::Garbage { .. } => None,
        }
    }

    /// Whether the block is garbage
    pub fn is_garbage(self) -> bool {
        matches!(self, Block::Garbage { .. })
    }
}

/// A swap request between two cells
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SwapCmd {
    pub ax: usize,
    pub ay: usize,
    pub bx: usize,
    pub by: usize,
}

impl SwapCmd {
    /// Swap of the cell at (x, y) with its right neighbor
    pub fn right_of(x: usize, y: usize) -> Self {
        Self {
            ax: x,
            ay: y,
            bx: x + 1,
            by: y,
        }
    }
}

/// Result of one clearing pass
#[derive(Debug, Clone)]
pub struct ClearStats {
    /// Number of cells cleared
    pub cleared: u32,
    /// Number of connected groups among the cleared cells
    pub groups: u32,
    /// Per-cell mark flags from match detection (length `width * height`)
    pub marks: Vec<bool>,
}

/// The playfield
///
/// Row 0 is the bottom row; gravity pulls toward row 0 and new rows rise
/// in from below.
#[derive(Debug, Clone)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Option<Block>>,
}

impl Grid {
    /// Create an empty grid
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![None; width * height],
        }
    }

    /// Grid width in cells
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height in cells
    pub fn height(&self) -> usize {
        self.height
    }

    /// Block at (x, y), or `None` when empty or out of bounds
    pub fn get(&self, x: usize, y: usize) -> Option<Block> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.cells[self.idx(x, y)]
    }

    /// Place or clear the cell at (x, y)
    ///
    /// Out-of-bounds coordinates are ignored.
    pub fn set(&mut self, x: usize, y: usize, block: Option<Block>) {
        if x >= self.width || y >= self.height {
            return;
        }
        let idx = self.idx(x, y);
        self.cells[idx] = block;
    }

    /// Swap two in-bounds cells unconditionally
    pub fn swap(&mut self, ax: usize, ay: usize, bx: usize, by: usize) {
        let a = self.idx(ax, ay);
        let b = self.idx(bx, by);
        self.cells.swap(a, b);
    }

    /// Perform a swap if both cells are in bounds and neither is garbage
    ///
    /// Returns whether the swap happened.
    pub fn swap_in_bounds(&mut self, cmd: SwapCmd) -> bool {
        if cmd.ax >= self.width
            || cmd.bx >= self.width
            || cmd.ay >= self.height
            || cmd.by >= self.height
        {
            return false;
        }
        let garbage_at = |b: Option<Block>| b.map(Block::is_garbage).unwrap_or(false);
        if garbage_at(self.get(cmd.ax, cmd.ay)) || garbage_at(self.get(cmd.bx, cmd.by)) {
            return false;
        }
        self.swap(cmd.ax, cmd.ay, cmd.bx, cmd.by);
        true
    }

    /// Fill the bottom half of the grid with random colors
    ///
    /// Colors are re-rolled so the initial deal contains no match.
    pub fn fill_random(&mut self, rng: &mut impl Rng) {
        let filled_rows = self.height / 2;
        for y in 0..filled_rows {
            for x in 0..self.width {
                let color = self.roll_color(x, y, rng);
                self.set(x, y, Some(Block::Normal { color }));
            }
        }
    }

    /// Remove every block
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// Total number of occupied cells
    pub fn block_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Clear all matched runs once, returning the number of cells removed
    pub fn clear_matches_once(&mut self) -> u32 {
        self.clear_matches_once_with_stats().cleared
    }

    /// Clear all matched runs once, returning detailed statistics
    pub fn clear_matches_once_with_stats(&mut self) -> ClearStats {
        let marks = self.find_matches();
        if marks.iter().all(|m| !*m) {
            return ClearStats {
                cleared: 0,
                groups: 0,
                marks,
            };
        }
        let groups = self.count_match_groups(&marks);
        let mut cleared = 0;
        for (i, marked) in marks.iter().enumerate() {
            if *marked {
                self.cells[i] = None;
                cleared += 1;
            }
        }
        ClearStats {
            cleared,
            groups,
            marks,
        }
    }

    /// Whether any match currently exists
    pub fn has_matches(&self) -> bool {
        self.find_matches().iter().any(|m| *m)
    }

    /// Let everything fall until the grid is settled
    pub fn apply_gravity(&mut self) {
        while self.apply_gravity_step() {}
    }

    /// Advance gravity by one cell
    ///
    /// Normal blocks fall independently. A garbage slab falls only when
    /// its whole connected component has room below. Returns whether
    /// anything moved.
    pub fn apply_gravity_step(&mut self) -> bool {
        if self.height < 2 {
            return false;
        }
        let snapshot = self.cells.clone();
        let mut moves: Vec<(usize, usize)> = Vec::new();

        for x in 0..self.width {
            for y in 1..self.height {
                let idx = self.idx(x, y);
                if let Some(Block::Normal { .. }) = snapshot[idx] {
                    let below = self.idx(x, y - 1);
                    if snapshot[below].is_none() {
                        moves.push((idx, below));
                    }
                }
            }
        }

        let mut visited = vec![false; snapshot.len()];
        for y in 0..self.height {
            for x in 0..self.width {
                let idx = self.idx(x, y);
                if visited[idx] || !is_garbage_cell(&snapshot, idx) {
                    continue;
                }
                let component = self.garbage_component(&snapshot, x, y, &mut visited);
                if self.component_can_fall(&snapshot, &component) {
                    for &(cx, cy) in &component {
                        moves.push((self.idx(cx, cy), self.idx(cx, cy - 1)));
                    }
                }
            }
        }

        if moves.is_empty() {
            return false;
        }
        for &(from, _) in &moves {
            self.cells[from] = None;
        }
        for &(from, to) in &moves {
            self.cells[to] = snapshot[from];
        }
        true
    }

    /// Whether any garbage slab currently has room to fall
    pub fn has_falling_garbage(&self) -> bool {
        let mut visited = vec![false; self.cells.len()];
        for y in 0..self.height {
            for x in 0..self.width {
                let idx = self.idx(x, y);
                if visited[idx] || !is_garbage_cell(&self.cells, idx) {
                    continue;
                }
                let component = self.garbage_component(&self.cells, x, y, &mut visited);
                if self.component_can_fall(&self.cells, &component) {
                    return true;
                }
            }
        }
        false
    }

    /// Mark all horizontal and vertical runs of three or more equal colors
    pub fn find_matches(&self) -> Vec<bool> {
        let mut marks = vec![false; self.width * self.height];

        for y in 0..self.height {
            let mut run_start = 0;
            let mut run_len = 1;
            for x in 1..self.width {
                if self.same_color(x, y, x - 1, y) {
                    run_len += 1;
                } else {
                    if run_len >= MATCH_RUN {
                        for rx in run_start..run_start + run_len {
                            marks[self.idx(rx, y)] = true;
                        }
                    }
                    run_start = x;
                    run_len = 1;
                }
            }
            if run_len >= MATCH_RUN {
                for rx in run_start..run_start + run_len {
                    marks[self.idx(rx, y)] = true;
                }
            }
        }

        for x in 0..self.width {
            let mut run_start = 0;
            let mut run_len = 1;
            for y in 1..self.height {
                if self.same_color(x, y, x, y - 1) {
                    run_len += 1;
                } else {
                    if run_len >= MATCH_RUN {
                        for ry in run_start..run_start + run_len {
                            marks[self.idx(x, ry)] = true;
                        }
                    }
                    run_start = y;
                    run_len = 1;
                }
            }
            if run_len >= MATCH_RUN {
                for ry in run_start..run_start + run_len {
                    marks[self.idx(x, ry)] = true;
                }
            }
        }

        marks
    }

    /// Shift every row up and deal a fresh bottom row
    ///
    /// Refused (no-op) when the top row is occupied; callers treat that
    /// as a topped-out stack.
    pub fn push_bottom_row(&mut self, rng: &mut impl Rng) {
        if self.height == 0 || self.width == 0 || self.top_row_occupied() {
            return;
        }
        for y in (1..self.height).rev() {
            for x in 0..self.width {
                let below = self.idx(x, y - 1);
                let here = self.idx(x, y);
                self.cells[here] = self.cells[below];
            }
        }
        for x in 0..self.width {
            let color = self.roll_color(x, 0, rng);
            let idx = self.idx(x, 0);
            self.cells[idx] = Some(Block::Normal { color });
        }
    }

    /// Whether any cell in the top row is occupied
    pub fn top_row_occupied(&self) -> bool {
        if self.height == 0 {
            return false;
        }
        let y = self.height - 1;
        (0..self.width).any(|x| self.get(x, y).is_some())
    }

    /// Crack every garbage slab touching a marked cell
    ///
    /// Returns the number of cells newly cracked.
    pub fn crack_adjacent_garbage(&mut self, marks: &[bool]) -> u32 {
        let mut cracked = 0;
        let mut visited = vec![false; self.cells.len()];
        let snapshot = self.cells.clone();
        for y in 0..self.height {
            for x in 0..self.width {
                let idx = self.idx(x, y);
                if visited[idx] || !is_garbage_cell(&snapshot, idx) {
                    continue;
                }
                let component = self.garbage_component(&snapshot, x, y, &mut visited);
                let touched = component
                    .iter()
                    .any(|&(cx, cy)| self.has_adjacent_mark(cx, cy, marks));
                if !touched {
                    continue;
                }
                for (cx, cy) in component {
                    if let Some(Block::Garbage { cracked: false }) = self.get(cx, cy) {
                        self.set(cx, cy, Some(Block::Garbage { cracked: true }));
                        cracked += 1;
                    }
                }
            }
        }
        cracked
    }

    /// Turn every cracked garbage cell into a random normal block
    ///
    /// Returns the number of cells converted.
    pub fn convert_cracked_garbage(&mut self, rng: &mut impl Rng) -> u32 {
        let mut converted = 0;
        for y in 0..self.height {
            for x in 0..self.width {
                if let Some(Block::Garbage { cracked: true }) = self.get(x, y) {
                    let color = self.roll_color(x, y, rng);
                    self.set(x, y, Some(Block::Normal { color }));
                    converted += 1;
                }
            }
        }
        converted
    }

    /// Drop garbage row masks into the topmost rows
    ///
    /// `rows[0]` lands in the lowest of the affected rows. The insertion
    /// is all-or-nothing: wrong dimensions or any collision with an
    /// existing block rejects the whole batch.
    pub fn insert_garbage_rows_from_top(&mut self, rows: &[Vec<bool>]) -> bool {
        if rows.is_empty() {
            return true;
        }
        if rows.len() > self.height {
            return false;
        }
        if rows.iter().any(|row| row.len() != self.width) {
            return false;
        }

        let start_y = self.height - rows.len();
        for (row_idx, row) in rows.iter().enumerate() {
            let y = start_y + row_idx;
            for x in 0..self.width {
                if row[x] && self.get(x, y).is_some() {
                    return false;
                }
            }
        }

        for (row_idx, row) in rows.iter().enumerate() {
            let y = start_y + row_idx;
            for x in 0..self.width {
                if row[x] {
                    self.set(x, y, Some(Block::Garbage { cracked: false }));
                }
            }
        }
        true
    }

    /// Whether placing `color` at (x, y) would complete a run of three
    pub fn would_create_match(&self, x: usize, y: usize, color: BlockColor) -> bool {
        let matches = |b: Option<Block>| b.and_then(Block::color) == Some(color);

        let left1 = x.checked_sub(1).and_then(|lx| self.get(lx, y));
        let left2 = x.checked_sub(2).and_then(|lx| self.get(lx, y));
        let right1 = self.get(x + 1, y);
        let right2 = self.get(x + 2, y);

        if matches(left1) && matches(left2) {
            return true;
        }
        if matches(right1) && matches(right2) {
            return true;
        }
        if matches(left1) && matches(right1) {
            return true;
        }

        // Vertical: only the two cells above can exist during a deal
        matches(self.get(x, y + 1)) && matches(self.get(x, y + 2))
    }

    /// Number of connected groups among marked cells (4-neighbour)
    fn count_match_groups(&self, marks: &[bool]) -> u32 {
        let mut visited = vec![false; marks.len()];
        let mut groups = 0;
        for y in 0..self.height {
            for x in 0..self.width {
                let idx = self.idx(x, y);
                if !marks[idx] || visited[idx] {
                    continue;
                }
                groups += 1;
                let mut stack = vec![(x, y)];
                visited[idx] = true;
                while let Some((cx, cy)) = stack.pop() {
                    for (nx, ny) in self.neighbors(cx, cy) {
                        let nidx = self.idx(nx, ny);
                        if marks[nidx] && !visited[nidx] {
                            visited[nidx] = true;
                            stack.push((nx, ny));
                        }
                    }
                }
            }
        }
        groups
    }

    /// Flood-fill the garbage component containing (x, y)
    fn garbage_component(
        &self,
        cells: &[Option<Block>],
        x: usize,
        y: usize,
        visited: &mut [bool],
    ) -> Vec<(usize, usize)> {
        let mut component = Vec::new();
        let mut stack = vec![(x, y)];
        visited[self.idx(x, y)] = true;
        while let Some((cx, cy)) = stack.pop() {
            component.push((cx, cy));
            for (nx, ny) in self.neighbors(cx, cy) {
                let nidx = self.idx(nx, ny);
                if !visited[nidx] && is_garbage_cell(cells, nidx) {
                    visited[nidx] = true;
                    stack.push((nx, ny));
                }
            }
        }
        component
    }

    /// Whether a garbage component has room to fall one cell
    fn component_can_fall(&self, cells: &[Option<Block>], component: &[(usize, usize)]) -> bool {
        let mut in_component = vec![false; cells.len()];
        for &(cx, cy) in component {
            in_component[self.idx(cx, cy)] = true;
        }
        for &(cx, cy) in component {
            if cy == 0 {
                return false;
            }
            let below = self.idx(cx, cy - 1);
            if cells[below].is_some() && !in_component[below] {
                return false;
            }
        }
        true
    }

    fn has_adjacent_mark(&self, x: usize, y: usize, marks: &[bool]) -> bool {
        self.neighbors(x, y)
            .into_iter()
            .any(|(nx, ny)| marks[self.idx(nx, ny)])
    }

    /// In-bounds 4-neighbours of (x, y)
    fn neighbors(&self, x: usize, y: usize) -> Vec<(usize, usize)> {
        let mut out = Vec::with_capacity(4);
        if x > 0 {
            out.push((x - 1, y));
        }
        if x + 1 < self.width {
            out.push((x + 1, y));
        }
        if y > 0 {
            out.push((x, y - 1));
        }
        if y + 1 < self.height {
            out.push((x, y + 1));
        }
        out
    }

    /// Roll a color that does not complete a match at (x, y), best effort
    fn roll_color(&self, x: usize, y: usize, rng: &mut impl Rng) -> BlockColor {
        let mut color = BlockColor::random(rng);
        for _ in 0..COLOR_REROLLS {
            if !self.would_create_match(x, y, color) {
                break;
            }
            color = BlockColor::random(rng);
        }
        color
    }

    fn same_color(&self, ax: usize, ay: usize, bx: usize, by: usize) -> bool {
        match (
            self.get(ax, ay).and_then(Block::color),
            self.get(bx, by).and_then(Block::color),
        ) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }

    fn idx(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }
}

fn is_garbage_cell(cells: &[Option<Block>], idx: usize) -> bool {
    matches!(cells[idx], Some(Block::Garbage { .. }))
}
