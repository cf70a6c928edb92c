//! GridView: maps a `core::GridSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It also owns the inverse mapping from a
//! terminal column to a grid column, since only the view knows where the grid
//! is drawn.

use crate::core::GridSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{BrickColor, SimStatus, GRID_HEIGHT, GRID_WIDTH};

const PLAY_BG: Rgb = Rgb::new(30, 30, 40);

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// A lightweight terminal renderer for the brick grid.
#[derive(Debug, Clone)]
pub struct GridView {
    /// Grid cell width in terminal columns.
    cell_w: u16,
    /// Grid cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GridView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
            anchor_y: AnchorY::Center,
        }
    }
}

impl GridView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Outer frame size (grid plus border).
    pub fn frame_size(&self) -> (u16, u16) {
        (
            (GRID_WIDTH as u16) * self.cell_w + 2,
            (GRID_HEIGHT as u16) * self.cell_h + 2,
        )
    }

    /// Top-left corner of the frame inside `viewport`.
    pub fn frame_origin(&self, viewport: Viewport) -> (u16, u16) {
        let (frame_w, frame_h) = self.frame_size();
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };
        (start_x, start_y)
    }

    /// Grid column under terminal column `x`.
    ///
    /// Presses on the border or outside the grid yield columns outside
    /// `0..GRID_WIDTH`; the engine clamps them.
    pub fn column_at(&self, viewport: Viewport, x: u16) -> i32 {
        let (start_x, _) = self.frame_origin(viewport);
        let inner_x = x as i32 - (start_x as i32 + 1);
        inner_x.div_euclid(self.cell_w as i32)
    }

    /// Render the snapshot into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when the
    /// terminal size changes.
    pub fn render_into(&self, snap: &GridSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let (frame_w, frame_h) = self.frame_size();
        let (start_x, start_y) = self.frame_origin(viewport);

        let bg = CellStyle::new(Rgb::new(80, 80, 90), PLAY_BG);
        let border = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));

        fb.fill_rect(start_x + 1, start_y + 1, frame_w - 2, frame_h - 2, ' ', bg);
        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        for row in 0..GRID_HEIGHT as u16 {
            for col in 0..GRID_WIDTH as u16 {
                self.draw_empty_cell(fb, start_x, start_y, col, row);
            }
        }

        // Settled bricks in settle order.
        for brick in &snap.settled {
            self.draw_brick(fb, start_x, start_y, brick.col as u16, brick.row as u16, brick.color, false);
        }

        let active = snap.active;
        if active.falling && active.col < GRID_WIDTH && active.row < GRID_HEIGHT {
            self.draw_brick(fb, start_x, start_y, active.col as u16, active.row as u16, active.color, true);
        }

        self.draw_side_panel(fb, snap, viewport, start_x, start_y, frame_w);

        if snap.status == SimStatus::ToppedOut {
            self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, "TOPPED OUT");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GridSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_empty_cell(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16, col: u16, row: u16) {
        let style = CellStyle {
            dim: true,
            ..CellStyle::new(Rgb::new(90, 90, 100), PLAY_BG)
        };
        self.fill_cell_rect(fb, start_x, start_y, col, row, '·', style);
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_brick(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        col: u16,
        row: u16,
        color: BrickColor,
        bold: bool,
    ) {
        let style = CellStyle {
            bold,
            ..CellStyle::new(brick_rgb(color), PLAY_BG)
        };
        self.fill_cell_rect(fb, start_x, start_y, col, row, '█', style);
    }

    #[allow(clippy::too_many_arguments)]
    fn fill_cell_rect(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        col: u16,
        row: u16,
        ch: char,
        style: CellStyle,
    ) {
        let px = start_x + 1 + col * self.cell_w;
        let py = start_y + 1 + row * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GridSnapshot,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width {
            return;
        }
        let panel_w = viewport.width - panel_x;
        if panel_w < 12 {
            return;
        }

        let label = CellStyle {
            bold: true,
            ..CellStyle::default()
        };
        let value = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        let hint = CellStyle { dim: true, ..value };

        let mut y = start_y;
        fb.put_str(panel_x, y, "COLUMN", label);
        y = y.saturating_add(1);
        fb.put_u64(panel_x, y, snap.active.col as u64 + 1, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "SETTLED", label);
        y = y.saturating_add(1);
        fb.put_u64(panel_x, y, snap.settled.len() as u64, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "TICK", label);
        y = y.saturating_add(1);
        fb.put_u64(panel_x, y, snap.tick, value);
        y = y.saturating_add(2);

        for line in ["1-9  column", "</>  move", "click column", "r    restart", "q    quit"] {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, hint);
            y = y.saturating_add(1);
        }
    }

    fn draw_overlay_text(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        text: &str,
    ) {
        let mid_y = start_y.saturating_add(frame_h / 2);
        let text_w = text.chars().count() as u16;
        let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
        let style = CellStyle {
            bold: true,
            ..CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0))
        };
        fb.put_str(x, mid_y, text, style);
    }
}

/// Display color for a brick.
pub fn brick_rgb(color: BrickColor) -> Rgb {
    match color {
        BrickColor::Red => Rgb::new(220, 70, 70),
        BrickColor::Green => Rgb::new(90, 200, 90),
        BrickColor::Blue => Rgb::new(80, 120, 230),
    }
}
