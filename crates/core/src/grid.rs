//! Grid module - authoritative contents of the 9x9 playfield
//!
//! Settled bricks are kept twice: in settle order (paint order for renderers)
//! and in a flat occupancy array for O(1) collision lookups.
//! Coordinates: (col, row) where col ranges 0..8 (left to right), row ranges 0..8 (top to bottom)

use arrayvec::ArrayVec;

use crate::rng::BrickRng;
use crate::types::{ActiveBrick, Brick, BrickColor, GRID_CELLS, GRID_HEIGHT, GRID_WIDTH};

/// Settled bricks plus an occupancy index.
#[derive(Debug, Clone, PartialEq)]
pub struct GridState {
    /// Flat array of cells, row-major order (row * WIDTH + col)
    occupancy: [Option<BrickColor>; GRID_CELLS],
    /// Settled bricks in the order they settled
    settled: ArrayVec<Brick, GRID_CELLS>,
}

impl GridState {
    /// Create a new empty grid
    pub fn new() -> Self {
        Self {
            occupancy: [None; GRID_CELLS],
            settled: ArrayVec::new(),
        }
    }

    /// Calculate flat index from (col, row) coordinates
    #[inline(always)]
    fn index(col: u8, row: u8) -> Option<usize> {
        if col >= GRID_WIDTH || row >= GRID_HEIGHT {
            return None;
        }
        Some((row as usize) * (GRID_WIDTH as usize) + (col as usize))
    }

    pub fn width(&self) -> u8 {
        GRID_WIDTH
    }

    pub fn height(&self) -> u8 {
        GRID_HEIGHT
    }

    /// True iff a settled brick occupies (col, row).
    ///
    /// Cells outside the grid are never occupied.
    pub fn cell_occupied(&self, col: u8, row: u8) -> bool {
        self.color_at(col, row).is_some()
    }

    /// Color of the settled brick at (col, row), if any
    pub fn color_at(&self, col: u8, row: u8) -> Option<BrickColor> {
        Self::index(col, row).and_then(|idx| self.occupancy[idx])
    }

    /// Commit a brick that has stopped falling.
    ///
    /// Returns false (and leaves the grid untouched) if the cell is outside the
    /// grid or already occupied; the engine never asks for either.
    pub fn settle(&mut self, brick: Brick) -> bool {
        let Some(idx) = Self::index(brick.col, brick.row) else {
            log::warn!("ignoring settle outside grid at ({}, {})", brick.col, brick.row);
            return false;
        };
        let occupied = self.occupancy[idx].is_some();
        debug_assert!(!occupied, "cell ({}, {}) settled twice", brick.col, brick.row);
        if occupied {
            log::warn!("ignoring duplicate settle at ({}, {})", brick.col, brick.row);
            return false;
        }

        self.occupancy[idx] = Some(brick.color);
        // Cannot overflow: every entry owns a distinct cell.
        self.settled.push(brick);
        true
    }

    /// Generate a fresh falling brick on the top row.
    ///
    /// This does not check whether the spawn cell is free; the engine decides
    /// what a blocked spawn means.
    pub fn spawn_new<R: BrickRng + ?Sized>(&self, rng: &mut R) -> ActiveBrick {
        let col = rng.next_column().min(GRID_WIDTH - 1);
        let color = rng.next_color();
        ActiveBrick::spawn(col, color)
    }

    /// Settled bricks in settle order
    pub fn settled_bricks(&self) -> &[Brick] {
        &self.settled
    }

    pub fn len(&self) -> usize {
        self.settled.len()
    }

    pub fn is_empty(&self) -> bool {
        self.settled.is_empty()
    }

    /// Highest settled row in a column (smallest row index), if any
    pub fn column_top(&self, col: u8) -> Option<u8> {
        (0..GRID_HEIGHT).find(|&row| self.cell_occupied(col, row))
    }

    /// Remove every settled brick
    pub fn clear(&mut self) {
        self.occupancy = [None; GRID_CELLS];
        self.settled.clear();
    }
}

impl Default for GridState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::ScriptedRng;

    fn brick(col: u8, row: u8, color: BrickColor) -> Brick {
        Brick { col, row, color }
    }

    #[test]
    fn test_grid_index_calculation() {
        assert_eq!(GridState::index(0, 0), Some(0));
        assert_eq!(GridState::index(8, 0), Some(8));
        assert_eq!(GridState::index(0, 1), Some(9));
        assert_eq!(GridState::index(8, 8), Some(80));
        assert_eq!(GridState::index(9, 0), None);
        assert_eq!(GridState::index(0, 9), None);
    }

    #[test]
    fn test_settle_updates_both_views() {
        let mut grid = GridState::new();
        assert!(grid.settle(brick(4, 8, BrickColor::Red)));
        assert!(grid.settle(brick(4, 7, BrickColor::Blue)));

        assert_eq!(grid.occupancy[8 * 9 + 4], Some(BrickColor::Red));
        assert_eq!(grid.occupancy[7 * 9 + 4], Some(BrickColor::Blue));
        assert_eq!(
            grid.settled_bricks(),
            &[brick(4, 8, BrickColor::Red), brick(4, 7, BrickColor::Blue)]
        );
    }

    #[test]
    fn test_settle_outside_grid_is_ignored() {
        let mut grid = GridState::new();
        assert!(!grid.settle(brick(9, 0, BrickColor::Green)));
        assert!(!grid.settle(brick(0, 9, BrickColor::Green)));
        assert!(grid.is_empty());
    }

    #[test]
    fn test_spawn_new_uses_rng() {
        let grid = GridState::new();
        let mut rng = ScriptedRng::new([(6, BrickColor::Green)]);
        let active = grid.spawn_new(&mut rng);
        assert_eq!(active, ActiveBrick::spawn(6, BrickColor::Green));
    }

    #[test]
    fn test_spawn_new_clamps_rng_output() {
        let grid = GridState::new();
        let mut rng = ScriptedRng::new([(200, BrickColor::Red)]);
        assert_eq!(grid.spawn_new(&mut rng).col, 8);
    }

    #[test]
    fn test_column_top_and_clear() {
        let mut grid = GridState::new();
        assert_eq!(grid.column_top(2), None);
        grid.settle(brick(2, 8, BrickColor::Red));
        grid.settle(brick(2, 7, BrickColor::Red));
        assert_eq!(grid.column_top(2), Some(7));

        grid.clear();
        assert!(grid.is_empty());
        assert!(!grid.cell_occupied(2, 8));
    }
}
