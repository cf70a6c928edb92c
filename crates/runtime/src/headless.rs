//! Headless run loop: tick the engine on a fixed period and write one JSON
//! line per tick.
//!
//! The loop owns the engine, so every tick number is written exactly once and
//! each queued column selection lands right before its tick.

use std::io::Write;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};

use crate::core::{BrickRng, GridSnapshot};
use crate::engine::{SimulationEngine, Ticker};
use crate::record::SnapshotRecord;
use crate::types::SimStatus;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadlessOptions {
    /// Records to write before returning (fewer if the grid tops out)
    pub ticks: u64,
    pub period: Duration,
    /// Column for tick 1, tick 2, ... in order
    pub selections: Vec<i32>,
}

/// Run `engine` for `options.ticks` ticks, writing a [`SnapshotRecord`] line
/// to `out` after each one. Returns the number of lines written.
///
/// Stops early after the tick that tops the grid out.
pub fn run<R: BrickRng, W: Write>(
    engine: &mut SimulationEngine<R>,
    options: &HeadlessOptions,
    out: &mut W,
) -> Result<u64> {
    if engine.status() == SimStatus::ToppedOut {
        log::info!("grid already topped out, nothing to run");
        return Ok(0);
    }

    let period_ms = options.period.as_millis().clamp(1, u32::MAX as u128) as u32;
    let mut ticker = Ticker::new(period_ms);
    let mut selections = options.selections.iter().copied();
    let mut snap = GridSnapshot::default();
    let mut written = 0;
    let mut last = Instant::now();

    'run: while written < options.ticks {
        thread::sleep(Duration::from_millis(ticker.until_next_ms() as u64));
        let elapsed_ms = last.elapsed().as_millis().min(u32::MAX as u128) as u32;
        last += Duration::from_millis(elapsed_ms as u64);

        for _ in 0..ticker.advance(elapsed_ms) {
            if let Some(col) = selections.next() {
                engine.select_column(col);
            }
            engine.tick();
            engine.snapshot_into(&mut snap);

            serde_json::to_writer(&mut *out, &SnapshotRecord::from(&snap))
                .context("encoding snapshot")?;
            writeln!(out).context("writing snapshot line")?;
            written += 1;

            if snap.status == SimStatus::ToppedOut {
                log::info!("topped out at tick {}", snap.tick);
                break 'run;
            }
            if written == options.ticks {
                break;
            }
        }
    }

    out.flush().context("flushing output")?;
    Ok(written)
}
