//! Serializable form of a snapshot (JSON lines for headless runs).

use serde::{Deserialize, Serialize};

use crate::core::GridSnapshot;
use crate::types::{ActiveBrick, Brick, BrickColor, GRID_HEIGHT, GRID_WIDTH};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrickRecord {
    pub col: u8,
    pub row: u8,
    pub color: String,
}

impl From<&Brick> for BrickRecord {
    fn from(brick: &Brick) -> Self {
        Self {
            col: brick.col,
            row: brick.row,
            color: brick.color.as_str().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveRecord {
    pub col: u8,
    pub row: u8,
    pub color: String,
    pub falling: bool,
}

impl From<&ActiveBrick> for ActiveRecord {
    fn from(active: &ActiveBrick) -> Self {
        Self {
            col: active.col,
            row: active.row,
            color: active.color.as_str().to_string(),
            falling: active.falling,
        }
    }
}

/// One line of headless output.
///
/// `rows` is a top-to-bottom picture of the grid: `.` empty, `R`/`G`/`B`
/// settled, lowercase for the falling brick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotRecord {
    pub tick: u64,
    pub status: String,
    pub active: ActiveRecord,
    pub settled: Vec<BrickRecord>,
    pub rows: Vec<String>,
}

impl From<&GridSnapshot> for SnapshotRecord {
    fn from(snap: &GridSnapshot) -> Self {
        let mut rows = Vec::with_capacity(GRID_HEIGHT as usize);
        for row in 0..GRID_HEIGHT {
            let line = (0..GRID_WIDTH)
                .map(|col| {
                    let a = snap.active;
                    if a.falling && a.col == col && a.row == row {
                        color_letter(a.color).to_ascii_lowercase()
                    } else {
                        snap.color_at(col, row).map(color_letter).unwrap_or('.')
                    }
                })
                .collect();
            rows.push(line);
        }

        Self {
            tick: snap.tick,
            status: snap.status.as_str().to_string(),
            active: ActiveRecord::from(&snap.active),
            settled: snap.settled.iter().map(BrickRecord::from).collect(),
            rows,
        }
    }
}

fn color_letter(color: BrickColor) -> char {
    match color {
        BrickColor::Red => 'R',
        BrickColor::Green => 'G',
        BrickColor::Blue => 'B',
    }
}
