//! GameView: maps a [`GameSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{FrameBuffer, Glyph, Rgb, Style};
use crate::types::{Cell, Color, BACKGROUND_RGB, VACANT_RGB};

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

const BACKGROUND: Rgb = Rgb::from_tuple(BACKGROUND_RGB);
const VACANT: Rgb = Rgb::from_tuple(VACANT_RGB);
const BORDER: Style = Style::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
const LABEL: Style = Style::new(Rgb::new(220, 220, 220), Rgb::new(0, 0, 0)).bold();
const VALUE: Style = Style::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));

/// Draws the board, the falling piece and a score panel.
pub struct GameView {
    /// Terminal columns per board cell.
    cell_w: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // Two columns per cell roughly squares up terminal glyphs.
        Self { cell_w: 2 }
    }
}

impl GameView {
    pub fn new(cell_w: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
        }
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.fill(Glyph::default());

        let board_w = (snap.cols as u16).saturating_mul(self.cell_w);
        let board_h = snap.rows as u16;
        let frame_w = board_w.saturating_add(2);
        let frame_h = board_h.saturating_add(2);
        let origin_x = viewport.width.saturating_sub(frame_w) / 2;
        let origin_y = viewport.height.saturating_sub(frame_h) / 2;

        draw_border(fb, origin_x, origin_y, frame_w, frame_h);

        for y in 0..snap.rows {
            for x in 0..snap.cols {
                let (ch, style) = match snap.cell_at(x, y) {
                    Cell::Vacant => ('·', Style::new(VACANT, BACKGROUND)),
                    Cell::Filled(color) => ('█', filled_style(color)),
                };
                self.paint(fb, origin_x, origin_y, x as i32, y as i32, snap, ch, style);
            }
        }

        if let Some(active) = &snap.active {
            let ghost = Style::new(Rgb::from(active.color), BACKGROUND);
            for (x, y) in snap.ghost_cells() {
                self.paint(fb, origin_x, origin_y, x, y, snap, '░', ghost);
            }
            for &(x, y) in &active.cells {
                let style = filled_style(active.color).bold();
                self.paint(fb, origin_x, origin_y, x, y, snap, '█', style);
            }
        }

        let panel_x = origin_x.saturating_add(frame_w).saturating_add(2);
        fb.put_str(panel_x, origin_y, "SCORE", LABEL);
        fb.put_str(panel_x, origin_y.saturating_add(1), &snap.score.to_string(), VALUE);

        if snap.game_over {
            let text = "GAME OVER";
            let x = origin_x.saturating_add(frame_w.saturating_sub(text.len() as u16) / 2);
            fb.put_str(x, origin_y.saturating_add(frame_h / 2), text, LABEL);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    /// Paint one board cell; cells above or beside the board are skipped.
    #[allow(clippy::too_many_arguments)]
    fn paint(
        &self,
        fb: &mut FrameBuffer,
        origin_x: u16,
        origin_y: u16,
        x: i32,
        y: i32,
        snap: &GameSnapshot,
        ch: char,
        style: Style,
    ) {
        if x < 0 || y < 0 || x as usize >= snap.cols || y as usize >= snap.rows {
            return;
        }
        let px = (x as u16)
            .saturating_mul(self.cell_w)
            .saturating_add(origin_x)
            .saturating_add(1);
        let py = (y as u16).saturating_add(origin_y).saturating_add(1);
        fb.fill_rect(px, py, self.cell_w, 1, ch, style);
    }
}

fn filled_style(color: Color) -> Style {
    Style::new(Rgb::from(color), BACKGROUND)
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
    if w < 2 || h < 2 {
        return;
    }
    let (right, bottom) = (x + w - 1, y + h - 1);
    fb.put(x, y, '┌', BORDER);
    fb.put(right, y, '┐', BORDER);
    fb.put(x, bottom, '└', BORDER);
    fb.put(right, bottom, '┘', BORDER);
    for dx in 1..w - 1 {
        fb.put(x + dx, y, '─', BORDER);
        fb.put(x + dx, bottom, '─', BORDER);
    }
    for dy in 1..h - 1 {
        fb.put(x, y + dy, '│', BORDER);
        fb.put(right, y + dy, '│', BORDER);
    }
}
