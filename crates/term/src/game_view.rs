//! GameView: paints a [`GameSnapshot`] into a framebuffer.
//!
//! Pure, no I/O. Each field cell is two columns wide to make up for the
//! aspect ratio of terminal glyphs.

use crate::core::{GameSnapshot, Phase};
use crate::fb::{FrameBuffer, Style};
use crate::types::Rgb;

const CELL_W: u16 = 2;
const BACKDROP: Rgb = Rgb::new(30, 30, 40);

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

#[derive(Debug, Clone, Copy)]
pub struct GameView {
    /// Draw a dot in empty cells
    pub grid_dots: bool,
}

impl Default for GameView {
    fn default() -> Self {
        Self { grid_dots: true }
    }
}

impl GameView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, &mut fb);
        fb
    }

    pub fn render_into(&self, snap: &GameSnapshot, fb: &mut FrameBuffer) {
        let cols = u16::try_from(snap.columns()).unwrap_or(u16::MAX);
        let rows = u16::try_from(snap.rows()).unwrap_or(u16::MAX);
        let frame_w = cols.saturating_mul(CELL_W).saturating_add(2);
        let frame_h = rows.saturating_add(2);
        let left = fb.width().saturating_sub(frame_w) / 2;
        let top = fb.height().saturating_sub(frame_h) / 2;

        let border = Style::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        draw_border(fb, left, top, frame_w, frame_h, border);

        let empty = Style::new(Rgb::new(90, 90, 100), BACKDROP);
        let dot = if self.grid_dots { '·' } else { ' ' };
        for (y, line) in snap.composed().iter().enumerate() {
            for (x, &value) in line.iter().enumerate() {
                let px = cell_offset(left, x, CELL_W);
                let py = cell_offset(top, y, 1);
                match GameSnapshot::cell_color(value) {
                    Some(color) => fb.fill(px, py, CELL_W, 1, '█', Style::new(color, BACKDROP)),
                    None => fb.fill(px, py, CELL_W, 1, dot, empty),
                }
            }
        }

        self.draw_panel(fb, snap, left.saturating_add(frame_w).saturating_add(2), top);

        let banner = match snap.phase {
            Phase::Idle => Some("PRESS ENTER"),
            Phase::GameOver => Some("GAME OVER"),
            Phase::Running => None,
        };
        if let Some(text) = banner {
            let text_w = text.chars().count() as u16;
            let x = left.saturating_add(frame_w.saturating_sub(text_w) / 2);
            let style = Style::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();
            fb.put_str(x, top.saturating_add(frame_h / 2), text, style);
        }
    }

    fn draw_panel(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, x: u16, top: u16) {
        if x >= fb.width() {
            return;
        }
        let label = Style::default().bold();
        let value = Style::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));

        fb.put_str(x, top, "SCORE", label);
        fb.put_str(x, top + 1, &snap.player.score.to_string(), value);

        let status = match snap.phase {
            Phase::Idle => "idle",
            Phase::Running => "running",
            Phase::GameOver => "game over",
        };
        fb.put_str(x, top + 3, "STATUS", label);
        fb.put_str(x, top + 4, status, value);

        let keys = [
            "←/→  move",
            "↓    drop",
            "↑    rotate",
            "Enter start",
            "Esc  stop",
            "q    quit",
        ];
        for (i, line) in keys.iter().enumerate() {
            fb.put_str(x, top + 6 + i as u16, line, value);
        }
    }
}

/// Screen coordinate of grid index `i`, inside a one-glyph border
fn cell_offset(origin: u16, i: usize, scale: u16) -> u16 {
    let i = u16::try_from(i).unwrap_or(u16::MAX);
    origin.saturating_add(1).saturating_add(i.saturating_mul(scale))
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: Style) {
    if w < 2 || h < 2 {
        return;
    }
    let (right, bottom) = (x + w - 1, y + h - 1);
    fb.put(x, y, '┌', style);
    fb.put(right, y, '┐', style);
    fb.put(x, bottom, '└', style);
    fb.put(right, bottom, '┘', style);
    for dx in 1..w - 1 {
        fb.put(x + dx, y, '─', style);
        fb.put(x + dx, bottom, '─', style);
    }
    for dy in 1..h - 1 {
        fb.put(x, y + dy, '│', style);
        fb.put(right, y + dy, '│', style);
    }
}
