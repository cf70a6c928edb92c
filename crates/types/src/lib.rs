//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (simulation, terminal rendering, headless runs).
//!
//! # Grid Dimensions
//!
//! - **Width**: 9 columns (indexed 0-8, left to right)
//! - **Height**: 9 rows (indexed 0-8, top to bottom)
//! - **Spawn row**: 0 (the top row), random column
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 250 | Fixed tick period |
//! | `FALL_STEP` | 1 | Rows descended per tick |
//!
//! Speed is constant for the whole session.
//!
//! # Examples
//!
//! ```
//! use rainbow_types::{ActiveBrick, BrickColor, GRID_HEIGHT, GRID_WIDTH};
//!
//! let color = BrickColor::from_str("green").unwrap();
//! assert_eq!(color, BrickColor::Green);
//!
//! let brick = ActiveBrick::spawn(4, color);
//! assert_eq!(brick.row, 0);
//! assert!(brick.falling);
//!
//! assert_eq!(GRID_WIDTH, 9);
//! assert_eq!(GRID_HEIGHT, 9);
//! ```

/// Grid width in cells (9 columns)
pub const GRID_WIDTH: u8 = 9;

/// Grid height in cells (9 rows)
pub const GRID_HEIGHT: u8 = 9;

/// Total number of cells on the grid
pub const GRID_CELLS: usize = (GRID_WIDTH as usize) * (GRID_HEIGHT as usize);

/// Right-most column index
pub const MAX_COL: u8 = GRID_WIDTH - 1;

/// Bottom row index (the grid floor)
pub const FLOOR_ROW: u8 = GRID_HEIGHT - 1;

/// Fixed tick period in milliseconds
pub const TICK_MS: u32 = 250;

/// Rows the active brick descends per tick
pub const FALL_STEP: u8 = 1;

/// The color palette new bricks are drawn from
pub const PALETTE: [BrickColor; 3] = [BrickColor::Red, BrickColor::Green, BrickColor::Blue];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_and_timing_defaults() {
        assert_eq!(GRID_WIDTH, 9);
        assert_eq!(GRID_HEIGHT, 9);
        assert_eq!(GRID_CELLS, 81);
        assert_eq!(MAX_COL, 8);
        assert_eq!(FLOOR_ROW, 8);
        assert_eq!(TICK_MS, 250);
        assert_eq!(FALL_STEP, 1);
    }

    #[test]
    fn palette_indices_match_position() {
        for (i, color) in PALETTE.iter().enumerate() {
            assert_eq!(color.index(), i);
            assert_eq!(BrickColor::from_index(i), Some(*color));
        }
        assert_eq!(BrickColor::from_index(3), None);
    }

    #[test]
    fn active_brick_settles_into_brick() {
        let mut active = ActiveBrick::spawn(2, BrickColor::Blue);
        active.row = 6;
        let brick = active.to_brick();
        assert_eq!(
            brick,
            Brick {
                col: 2,
                row: 6,
                color: BrickColor::Blue
            }
        );
    }
}

/// The three primary brick colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BrickColor {
    Red,
    Green,
    Blue,
}

impl BrickColor {
    /// Parse color from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use rainbow_types::BrickColor;
    ///
    /// assert_eq!(BrickColor::from_str("RED"), Some(BrickColor::Red));
    /// assert_eq!(BrickColor::from_str("b"), Some(BrickColor::Blue));
    /// assert_eq!(BrickColor::from_str("purple"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "red" | "r" => Some(BrickColor::Red),
            "green" | "g" => Some(BrickColor::Green),
            "blue" | "b" => Some(BrickColor::Blue),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            BrickColor::Red => "red",
            BrickColor::Green => "green",
            BrickColor::Blue => "blue",
        }
    }

    /// Position in [`PALETTE`]
    pub fn index(&self) -> usize {
        match self {
            BrickColor::Red => 0,
            BrickColor::Green => 1,
            BrickColor::Blue => 2,
        }
    }

    /// Inverse of [`BrickColor::index`]
    pub fn from_index(index: usize) -> Option<Self> {
        PALETTE.get(index).copied()
    }
}

/// A settled brick: one permanently occupied cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Brick {
    pub col: u8,
    pub row: u8,
    pub color: BrickColor,
}

/// The single brick under simulation control.
///
/// `falling` is true from spawn until the brick is committed to the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveBrick {
    pub col: u8,
    pub row: u8,
    pub color: BrickColor,
    pub falling: bool,
}

impl ActiveBrick {
    /// Create a falling brick on the top row
    pub fn spawn(col: u8, color: BrickColor) -> Self {
        Self {
            col,
            row: 0,
            color,
            falling: true,
        }
    }

    /// The settled form of this brick at its current cell
    pub fn to_brick(&self) -> Brick {
        Brick {
            col: self.col,
            row: self.row,
            color: self.color,
        }
    }
}

/// Actions the host can apply to the simulation
///
/// These come from keyboard/mouse input in the terminal front-end and from
/// scripted commands in headless runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Move the active brick to an absolute grid column (clamped by the engine)
    SelectColumn(i32),
    /// Move the active brick relative to its current column
    ShiftColumn(i8),
    /// Clear the grid and start over
    Restart,
}

/// Lifecycle of a simulation session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SimStatus {
    /// Bricks keep spawning and falling
    #[default]
    Running,
    /// A new brick spawned onto an occupied top cell; nothing moves until restart
    ToppedOut,
}

impl SimStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SimStatus::Running => "running",
            SimStatus::ToppedOut => "topped_out",
        }
    }
}
