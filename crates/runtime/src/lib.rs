//! Host runtime for the brick simulation.
//!
//! The engine never schedules itself; this crate provides the pieces a host
//! program needs around it:
//!
//! - [`config`]: environment configuration (`RAINBOW_*` variables)
//! - [`logging`]: `env_logger` setup that never writes over the game screen
//! - [`session`]: a tokio task that owns the engine, ticks it on a fixed period,
//!   takes input as messages, and publishes snapshots on a watch channel;
//!   [`Driver`] wraps it for synchronous callers
//! - [`record`]: serde form of a snapshot for JSON output
//! - [`headless`]: a synchronous loop writing one JSON record per tick
//!
//! # Example
//!
//! ```no_run
//! use std::time::Duration;
//!
//! use rainbow_engine::SimulationEngine;
//! use rainbow_runtime::Driver;
//! use rainbow_types::InputAction;
//!
//! let driver = Driver::start(SimulationEngine::with_seed(3), Duration::from_millis(250))?;
//! driver.send(InputAction::SelectColumn(4))?;
//! let snap = driver.wait_for_tick(10, Duration::from_secs(5))?;
//! println!("{} bricks settled", snap.settled.len());
//! let _engine = driver.stop()?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod config;
pub mod headless;
pub mod logging;
pub mod record;
pub mod session;

pub use rainbow_core as core;
pub use rainbow_engine as engine;
pub use rainbow_types as types;

pub use config::RuntimeConfig;
pub use headless::HeadlessOptions;
pub use record::{ActiveRecord, BrickRecord, SnapshotRecord};
pub use session::{Driver, Session};
