//! Terminal "grid renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal play.
//! It intentionally avoids widget/layout frameworks and instead renders into a
//! simple framebuffer that can be flushed to a terminal backend.
//!
//! Goals:
//! - Keep the simulation crates free of any drawing or geometry
//! - Diff consecutive frames so a 250ms tick only repaints what moved
//! - Allow precise control over aspect ratio (e.g. 2 chars wide per cell)

pub mod fb;
pub mod grid_view;
pub mod renderer;

pub use rainbow_core as core;
pub use rainbow_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use grid_view::{brick_rgb, AnchorY, GridView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
