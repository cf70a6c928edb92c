//! Rainbow Bricks (workspace facade crate).
//!
//! Re-exports the member crates under one roof so binaries, tests, and benches
//! can write `rainbow_bricks::{core, engine, ...}`.

pub use rainbow_core as core;
pub use rainbow_engine as engine;
pub use rainbow_input as input;
pub use rainbow_runtime as runtime;
pub use rainbow_term as term;
pub use rainbow_types as types;
