//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{GameStatus, BOARD_SIZE};

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

const BOARD_BG: Rgb = Rgb::new(187, 173, 160);
const SCREEN_BG: Rgb = Rgb::new(0, 0, 0);
const DARK_TEXT: Rgb = Rgb::new(119, 110, 101);
const LIGHT_TEXT: Rgb = Rgb::new(249, 246, 242);

/// A lightweight terminal renderer for the 2048 board.
pub struct GameView {
    /// Tile width in terminal columns.
    tile_w: u16,
    /// Tile height in terminal rows.
    tile_h: u16,
    /// Spacing between tiles (and around the outer ring), in cells.
    gap: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 7x3 leaves room for six digits and keeps tiles roughly square.
        Self {
            tile_w: 7,
            tile_h: 3,
            gap: 1,
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn new(tile_w: u16, tile_h: u16) -> Self {
        Self {
            tile_w,
            tile_h,
            ..Self::default()
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Outer size of the bordered board, in terminal cells.
    pub fn frame_size(&self) -> (u16, u16) {
        let n = BOARD_SIZE as u16;
        let inner_w = n * self.tile_w + (n + 1) * self.gap;
        let inner_h = n * self.tile_h + (n + 1) * self.gap;
        (inner_w + 2, inner_h + 2)
    }

    /// Render the snapshot into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when the
    /// terminal size changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.fill(CellStyle::default().cell(' '));

        let (frame_w, frame_h) = self.frame_size();
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };

        let board_bg = CellStyle::new(BOARD_BG, BOARD_BG);
        fb.fill_rect(start_x + 1, start_y + 1, frame_w - 2, frame_h - 2, ' ', board_bg);
        self.draw_border(fb, start_x, start_y, frame_w, frame_h);

        for (row, line) in snap.board.iter().enumerate() {
            for (col, &value) in line.iter().enumerate() {
                self.draw_tile(fb, start_x, start_y, row as u16, col as u16, value);
            }
        }

        self.draw_side_panel(fb, snap, viewport, start_x + frame_w, start_y);

        match snap.status {
            GameStatus::Won => self.draw_overlay(fb, start_x, start_y, "YOU WIN!"),
            GameStatus::Lost => self.draw_overlay(fb, start_x, start_y, "GAME OVER"),
            GameStatus::Playing => {}
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    /// Top-left terminal cell of the tile at `(row, col)`.
    pub fn tile_origin(&self, start_x: u16, start_y: u16, row: u16, col: u16) -> (u16, u16) {
        let x = start_x + 1 + self.gap + col * (self.tile_w + self.gap);
        let y = start_y + 1 + self.gap + row * (self.tile_h + self.gap);
        (x, y)
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
        if w < 2 || h < 2 {
            return;
        }
        let style = CellStyle::new(Rgb::new(200, 200, 200), SCREEN_BG);

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

    fn draw_tile(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16, row: u16, col: u16, value: u32) {
        let (x, y) = self.tile_origin(start_x, start_y, row, col);
        let style = tile_style(value);
        fb.fill_rect(x, y, self.tile_w, self.tile_h, ' ', style);

        // Empty cells carry no label.
        if value != 0 {
            fb.put_u32_centered(x, y + self.tile_h / 2, self.tile_w, value, style);
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        frame_right: u16,
        start_y: u16,
    ) {
        let panel_x = frame_right.saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 12 {
            return;
        }

        let label = CellStyle::default().bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), SCREEN_BG);
        let hint = CellStyle::new(Rgb::new(130, 130, 140), SCREEN_BG);

        let mut y = start_y;
        fb.put_str(panel_x, y, "SCORE", label);
        fb.put_u32(panel_x, y + 1, snap.score, value);
        y += 3;

        fb.put_str(panel_x, y, "BEST TILE", label);
        fb.put_u32(panel_x, y + 1, snap.highest_tile, value);
        y += 3;

        fb.put_str(panel_x, y, "STATUS", label);
        fb.put_str(panel_x, y + 1, snap.status.as_str(), value);
        y += 3;

        fb.put_str(panel_x, y, "GAME", label);
        fb.put_u32(panel_x, y + 1, snap.episode_id + 1, value);
        y += 3;

        for line in ["←↑→↓ hjkl move", "r     restart", "q     quit"] {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, hint);
            y += 1;
        }
    }

    fn draw_overlay(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16, text: &str) {
        let (frame_w, frame_h) = self.frame_size();
        let mid_y = start_y + frame_h / 2;
        let style = CellStyle::new(Rgb::new(255, 255, 255), SCREEN_BG).bold();
        let hint = CellStyle::new(Rgb::new(200, 200, 200), SCREEN_BG);

        // Pad the banner so it reads cleanly over tiles.
        let banner_w = (text.chars().count() as u16 + 4).min(frame_w - 2);
        let banner_x = start_x + (frame_w - banner_w) / 2;
        fb.fill_rect(banner_x, mid_y - 1, banner_w, 3, ' ', style);
        fb.put_str_centered(start_x, mid_y - 1, frame_w, text, style);
        fb.put_str_centered(start_x, mid_y + 1, frame_w, "press r", hint);
    }
}

/// Background/foreground for a tile value; 0 is an empty slot.
pub fn tile_style(value: u32) -> CellStyle {
    let bg = match value {
        0 => Rgb::new(205, 193, 180),
        2 => Rgb::new(238, 228, 218),
        4 => Rgb::new(237, 224, 200),
        8 => Rgb::new(242, 177, 121),
        16 => Rgb::new(245, 149, 99),
        32 => Rgb::new(246, 124, 95),
        64 => Rgb::new(246, 94, 59),
        128 => Rgb::new(237, 207, 114),
        256 => Rgb::new(237, 204, 97),
        512 => Rgb::new(237, 200, 80),
        1024 => Rgb::new(237, 197, 63),
        2048 => Rgb::new(237, 194, 46),
        _ => Rgb::new(60, 58, 50),
    };
    let fg = if value <= 4 { DARK_TEXT } else { LIGHT_TEXT };
    let style = CellStyle::new(fg, bg);
    if value >= 8 {
        style.bold()
    } else {
        style
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_size_matches_tiles_and_gaps() {
        let view = GameView::default();
        // 4*7 + 5*1 + 2 = 35, 4*3 + 5*1 + 2 = 19
        assert_eq!(view.frame_size(), (35, 19));
    }

    #[test]
    fn tile_origin_steps_by_tile_and_gap() {
        let view = GameView::default();
        assert_eq!(view.tile_origin(0, 0, 0, 0), (2, 2));
        assert_eq!(view.tile_origin(0, 0, 1, 1), (10, 6));
        assert_eq!(view.tile_origin(0, 0, 3, 3), (26, 14));
    }

    #[test]
    fn tile_palette_contrast() {
        assert_eq!(tile_style(2).fg, DARK_TEXT);
        assert_eq!(tile_style(8).fg, LIGHT_TEXT);
        assert!(tile_style(2048).bold);
        assert_ne!(tile_style(0).bg, tile_style(2).bg);
        assert_eq!(tile_style(4096).bg, tile_style(65536).bg);
    }
}
