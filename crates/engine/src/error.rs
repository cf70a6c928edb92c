use thiserror::Error;

use crate::types::MAX_COL;

/// Why a strict column selection was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectColumnError {
    #[error("column {col} is outside 0..={max}", max = MAX_COL)]
    OutOfRange { col: i32 },
    #[error("cell ({col}, {row}) is already occupied")]
    Occupied { col: u8, row: u8 },
    #[error("the grid has topped out")]
    ToppedOut,
}
