//! Core grid logic module - pure, deterministic, and testable
//!
//! This module holds the authoritative grid contents and the spawn randomness.
//! It has **zero dependencies** on UI, timing, or I/O, making it:
//!
//! - **Deterministic**: Same seed (or script) produces identical spawns
//! - **Testable**: Every rule can be exercised synchronously
//! - **Portable**: Can run in any environment (terminal, headless, another thread)
//!
//! # Module Structure
//!
//! - [`grid`]: 9x9 settled-brick set with O(1) occupancy lookups
//! - [`rng`]: injectable spawn randomness (seeded LCG, scripted sequences)
//! - [`snapshot`]: value copies of the grid for renderers
//!
//! The tick/collision rules live in the engine crate, which drives a
//! [`GridState`].
//!
//! # Example
//!
//! ```
//! use rainbow_core::{GridState, SimpleRng};
//! use rainbow_core::types::{Brick, BrickColor};
//!
//! let mut grid = GridState::new();
//! grid.settle(Brick { col: 3, row: 8, color: BrickColor::Red });
//! assert!(grid.cell_occupied(3, 8));
//!
//! let mut rng = SimpleRng::new(12345);
//! let active = grid.spawn_new(&mut rng);
//! assert_eq!(active.row, 0);
//! ```

pub mod grid;
pub mod rng;
pub mod snapshot;

pub use rainbow_types as types;

// Re-export commonly used types for convenience
pub use grid::GridState;
pub use rng::{BrickRng, ScriptedRng, SimpleRng};
pub use snapshot::{cell_code, color_from_code, GridSnapshot};
