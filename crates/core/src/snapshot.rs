use arrayvec::ArrayVec;

use crate::grid::GridState;
use crate::types::{ActiveBrick, Brick, BrickColor, SimStatus, GRID_CELLS, GRID_HEIGHT, GRID_WIDTH};

/// Plain-value copy of the simulation for renderers and other threads.
///
/// `cells` uses [`cell_code`]: 0 = empty, 1 = red, 2 = green, 3 = blue.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GridSnapshot {
    pub cells: [[u8; GRID_WIDTH as usize]; GRID_HEIGHT as usize],
    pub settled: ArrayVec<Brick, GRID_CELLS>,
    pub active: ActiveBrick,
    pub status: SimStatus,
    pub tick: u64,
}

impl GridSnapshot {
    /// Copy settled contents out of `grid`, reusing this snapshot's storage.
    pub fn fill_from_grid(&mut self, grid: &GridState) {
        self.cells = [[0u8; GRID_WIDTH as usize]; GRID_HEIGHT as usize];
        self.settled.clear();
        for brick in grid.settled_bricks() {
            self.cells[brick.row as usize][brick.col as usize] = cell_code(Some(brick.color));
            self.settled.push(*brick);
        }
    }

    /// Color at (col, row) according to the cell table
    pub fn color_at(&self, col: u8, row: u8) -> Option<BrickColor> {
        if col >= GRID_WIDTH || row >= GRID_HEIGHT {
            return None;
        }
        color_from_code(self.cells[row as usize][col as usize])
    }

    pub fn playable(&self) -> bool {
        self.status == SimStatus::Running
    }
}

impl Default for GridSnapshot {
    fn default() -> Self {
        Self {
            cells: [[0u8; GRID_WIDTH as usize]; GRID_HEIGHT as usize],
            settled: ArrayVec::new(),
            active: ActiveBrick::spawn(0, BrickColor::Red),
            status: SimStatus::Running,
            tick: 0,
        }
    }
}

pub fn cell_code(cell: Option<BrickColor>) -> u8 {
    match cell {
        None => 0,
        Some(color) => color.index() as u8 + 1,
    }
}

pub fn color_from_code(code: u8) -> Option<BrickColor> {
    match code {
        0 => None,
        n => BrickColor::from_index(n as usize - 1),
    }
}
