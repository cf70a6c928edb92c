//! Simulation engine - advances the grid one tick at a time
//!
//! The engine owns the [`GridState`], the active brick, and the spawn RNG.
//! It never schedules itself: the host calls [`SimulationEngine::tick`] once per
//! period (see [`crate::Ticker`]) and forwards column selections in between.
//!
//! Transition rule, evaluated exactly once per tick:
//!
//! ```text
//! next_row = row + 1
//! if next_row > FLOOR_ROW or grid.cell_occupied(col, next_row):
//!     settle at (col, row) and respawn
//! else:
//!     row = next_row
//! ```

use crate::core::{BrickRng, GridSnapshot, GridState, SimpleRng};
use crate::error::SelectColumnError;
use crate::types::{ActiveBrick, Brick, InputAction, SimStatus, FALL_STEP, FLOOR_ROW, MAX_COL};

/// What a single tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The active brick moved down to `row`
    Fell { row: u8 },
    /// The active brick was committed and `next` spawned in its place
    Settled { brick: Brick, next: ActiveBrick },
    /// Nothing moved: the grid topped out earlier
    ToppedOut,
}

/// Single-brick falling simulation on a 9x9 grid.
#[derive(Debug, Clone)]
pub struct SimulationEngine<R: BrickRng = SimpleRng> {
    grid: GridState,
    active: ActiveBrick,
    rng: R,
    status: SimStatus,
    /// Ticks processed since creation or the last reset
    tick: u64,
}

impl SimulationEngine<SimpleRng> {
    /// Create an engine driven by the seeded LCG
    pub fn with_seed(seed: u32) -> Self {
        Self::new(SimpleRng::new(seed))
    }
}

impl<R: BrickRng> SimulationEngine<R> {
    /// Create an empty grid and spawn the first brick
    pub fn new(rng: R) -> Self {
        Self::from_parts(GridState::new(), None, rng)
    }

    /// Resume from existing grid contents.
    ///
    /// With `active = None` a brick is spawned from `rng`. An active brick that
    /// overlaps a settled cell tops the engine out immediately.
    pub fn from_parts(grid: GridState, active: Option<ActiveBrick>, mut rng: R) -> Self {
        let active = match active {
            Some(a) => ActiveBrick {
                col: a.col.min(MAX_COL),
                row: a.row.min(FLOOR_ROW),
                color: a.color,
                falling: true,
            },
            None => grid.spawn_new(&mut rng),
        };
        let mut engine = Self {
            grid,
            active,
            rng,
            status: SimStatus::Running,
            tick: 0,
        };
        engine.check_spawn();
        engine
    }

    /// Advance the simulation by one fall step.
    pub fn tick(&mut self) -> TickOutcome {
        if self.status == SimStatus::ToppedOut {
            return TickOutcome::ToppedOut;
        }
        self.tick = self.tick.wrapping_add(1);

        let next_row = self.active.row + FALL_STEP;
        if next_row > FLOOR_ROW || self.grid.cell_occupied(self.active.col, next_row) {
            return self.settle_active();
        }

        self.active.row = next_row;
        TickOutcome::Fell { row: next_row }
    }

    /// Move the active brick to `col`, clamped to the grid.
    ///
    /// Only the column changes. Returns false when nothing moved: same column,
    /// target cell occupied at the current row, or topped out.
    pub fn select_column(&mut self, col: i32) -> bool {
        if self.status == SimStatus::ToppedOut {
            return false;
        }
        let target = col.clamp(0, MAX_COL as i32) as u8;
        if target == self.active.col {
            return false;
        }
        if self.grid.cell_occupied(target, self.active.row) {
            log::debug!(
                "column select to {} blocked at row {}",
                target,
                self.active.row
            );
            return false;
        }

        self.active.col = target;
        true
    }

    /// Strict variant of [`Self::select_column`] that rejects instead of clamping.
    pub fn try_select_column(&mut self, col: i32) -> Result<(), SelectColumnError> {
        if self.status == SimStatus::ToppedOut {
            return Err(SelectColumnError::ToppedOut);
        }
        if !(0..=MAX_COL as i32).contains(&col) {
            return Err(SelectColumnError::OutOfRange { col });
        }
        let col = col as u8;
        if col != self.active.col && self.grid.cell_occupied(col, self.active.row) {
            return Err(SelectColumnError::Occupied {
                col,
                row: self.active.row,
            });
        }

        self.active.col = col;
        Ok(())
    }

    /// Move the active brick `delta` columns left (negative) or right.
    pub fn shift_column(&mut self, delta: i8) -> bool {
        self.select_column(self.active.col as i32 + delta as i32)
    }

    /// Apply a host action. Returns true if the state changed.
    pub fn apply(&mut self, action: InputAction) -> bool {
        match action {
            InputAction::SelectColumn(col) => self.select_column(col),
            InputAction::ShiftColumn(delta) => self.shift_column(delta),
            InputAction::Restart => {
                self.reset();
                true
            }
        }
    }

    /// Clear the grid and spawn a fresh brick.
    pub fn reset(&mut self) {
        self.grid.clear();
        self.status = SimStatus::Running;
        self.tick = 0;
        self.active = self.grid.spawn_new(&mut self.rng);
        log::info!(
            "grid reset, first brick at column {} ({})",
            self.active.col,
            self.active.color.as_str()
        );
    }

    pub fn current_active_brick(&self) -> ActiveBrick {
        self.active
    }

    pub fn settled_bricks(&self) -> &[Brick] {
        self.grid.settled_bricks()
    }

    pub fn grid(&self) -> &GridState {
        &self.grid
    }

    pub fn status(&self) -> SimStatus {
        self.status
    }

    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    /// Build a snapshot for a renderer.
    pub fn snapshot(&self) -> GridSnapshot {
        let mut snap = GridSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }

    /// Fill an existing snapshot, reusing its storage.
    pub fn snapshot_into(&self, snap: &mut GridSnapshot) {
        snap.fill_from_grid(&self.grid);
        snap.active = self.active;
        snap.status = self.status;
        snap.tick = self.tick;
    }

    fn settle_active(&mut self) -> TickOutcome {
        self.active.falling = false;
        let brick = self.active.to_brick();
        if !self.grid.settle(brick) {
            // Unreachable while ticks only move into free cells.
            log::error!("grid refused settle at ({}, {})", brick.col, brick.row);
        }
        log::debug!(
            "brick settled at ({}, {}) {}; {} settled",
            brick.col,
            brick.row,
            brick.color.as_str(),
            self.grid.len()
        );

        self.active = self.grid.spawn_new(&mut self.rng);
        self.check_spawn();
        TickOutcome::Settled {
            brick,
            next: self.active,
        }
    }

    /// Top out if the active brick sits on a settled cell.
    fn check_spawn(&mut self) {
        if self.grid.cell_occupied(self.active.col, self.active.row) {
            self.active.falling = false;
            self.status = SimStatus::ToppedOut;
            log::info!(
                "topped out: spawn cell ({}, {}) occupied after {} bricks",
                self.active.col,
                self.active.row,
                self.grid.len()
            );
        }
    }
}
