//! Fixed-step tick scheduler owned by the host loop.
//!
//! The host feeds wall-clock elapsed time in and gets back how many simulation
//! ticks are due. No real time is read here, so loops built on it can be tested
//! synchronously.

use crate::types::TICK_MS;

/// Upper bound on ticks released by one `advance` call.
///
/// A long stall (suspended terminal, debugger) drops the excess instead of
/// fast-forwarding the grid.
pub const MAX_CATCH_UP: u32 = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticker {
    period_ms: u32,
    accumulator_ms: u32,
    stopped: bool,
    total_ticks: u64,
}

impl Ticker {
    pub fn new(period_ms: u32) -> Self {
        Self {
            period_ms: period_ms.max(1),
            accumulator_ms: 0,
            stopped: false,
            total_ticks: 0,
        }
    }

    /// Account for `elapsed_ms` of wall time and return the number of ticks due.
    pub fn advance(&mut self, elapsed_ms: u32) -> u32 {
        if self.stopped {
            return 0;
        }

        self.accumulator_ms = self.accumulator_ms.saturating_add(elapsed_ms);
        let mut due = self.accumulator_ms / self.period_ms;
        self.accumulator_ms %= self.period_ms;

        if due > MAX_CATCH_UP {
            log::warn!("tick loop fell behind, dropping {} ticks", due - MAX_CATCH_UP);
            due = MAX_CATCH_UP;
        }
        self.total_ticks += due as u64;
        due
    }

    /// Milliseconds until the next tick becomes due.
    ///
    /// Once stopped this returns a full period so pollers can idle.
    pub fn until_next_ms(&self) -> u32 {
        if self.stopped {
            return self.period_ms;
        }
        self.period_ms - self.accumulator_ms
    }

    /// Cancel the schedule; `advance` returns 0 from now on.
    pub fn stop(&mut self) {
        self.stopped = true;
        self.accumulator_ms = 0;
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// Drop any partially accumulated time (e.g. after a restart).
    pub fn reset(&mut self) {
        self.accumulator_ms = 0;
    }

    pub fn period_ms(&self) -> u32 {
        self.period_ms
    }

    pub fn total_ticks(&self) -> u64 {
        self.total_ticks
    }
}

impl Default for Ticker {
    fn default() -> Self {
        Self::new(TICK_MS)
    }
}
