//! Headless runner: ticks the simulation without a terminal UI and prints one
//! JSON snapshot per tick.
//!
//! ```text
//! rainbow-headless --ticks 40 --seed 7 --tick-ms 10 --select 0,4,8
//! ```

use std::io::{self, BufWriter};

use anyhow::Result;
use clap::Parser;

use rainbow_bricks::engine::SimulationEngine;
use rainbow_bricks::runtime::{headless, logging, HeadlessOptions, RuntimeConfig};

#[derive(Debug, Parser)]
#[command(name = "rainbow-headless")]
#[command(about = "Run the brick simulation without a terminal UI and print JSON snapshots")]
struct Cli {
    /// Number of ticks to run
    #[arg(long, default_value_t = 40)]
    ticks: u64,
    /// RNG seed (overrides RAINBOW_SEED)
    #[arg(long)]
    seed: Option<u32>,
    /// Tick period in milliseconds (overrides RAINBOW_TICK_MS)
    #[arg(long)]
    tick_ms: Option<u32>,
    /// Columns to select, one per tick, in order
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    select: Vec<i32>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = RuntimeConfig::from_env();
    if let Some(seed) = cli.seed {
        config.seed = seed;
    }
    if let Some(tick_ms) = cli.tick_ms {
        config.tick_ms = tick_ms.max(1);
    }
    logging::init(&config, true)?;

    let options = HeadlessOptions {
        ticks: cli.ticks,
        period: config.tick_period(),
        selections: cli.select,
    };
    let mut engine = SimulationEngine::with_seed(config.seed);
    let mut out = BufWriter::new(io::stdout().lock());
    let written = headless::run(&mut engine, &options, &mut out)?;

    log::info!(
        "finished: {} lines, {} bricks settled",
        written,
        engine.settled_bricks().len()
    );
    Ok(())
}
