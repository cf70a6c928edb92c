//! Simulation engine for the falling-brick grid.
//!
//! - [`simulation`]: the tick/collision/respawn state machine
//! - [`ticker`]: the fixed-step scheduler a host loop uses to decide when to tick
//! - [`error`]: errors from the strict column-selection path
//!
//! # Example
//!
//! ```
//! use rainbow_engine::{SimulationEngine, TickOutcome, Ticker};
//!
//! let mut engine = SimulationEngine::with_seed(7);
//! let mut ticker = Ticker::default();
//!
//! // 250ms of wall time releases exactly one tick.
//! for _ in 0..ticker.advance(250) {
//!     assert_eq!(engine.tick(), TickOutcome::Fell { row: 1 });
//! }
//! engine.select_column(100); // clamped to the right-most column
//! assert_eq!(engine.current_active_brick().col, 8);
//! ```

pub mod error;
pub mod simulation;
pub mod ticker;

pub use rainbow_core as core;
pub use rainbow_types as types;

pub use error::SelectColumnError;
pub use simulation::{SimulationEngine, TickOutcome};
pub use ticker::{Ticker, MAX_CATCH_UP};
