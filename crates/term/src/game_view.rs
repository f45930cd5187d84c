//! GameView: maps a [`GameSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{canonical_shape, GameSnapshot};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{PieceKind, GRID_HEIGHT, GRID_WIDTH};

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

/// Driver-side state that affects the picture but is not part of the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionStatus {
    pub paused: bool,
}

const BACKGROUND: Rgb = Rgb::new(0, 0, 0);
const PLAYFIELD: Rgb = Rgb::new(20, 20, 28);
const GRID_LINE: Rgb = Rgb::new(64, 64, 64);
const TEXT: Rgb = Rgb::new(255, 255, 255);
const HINT: Rgb = Rgb::new(128, 128, 128);

const CONTROLS: [&str; 6] = [
    "\u{2190} \u{2192}  move",
    "\u{2193}    soft drop",
    "\u{2191}    rotate",
    "SPACE hard drop",
    "P    pause",
    "Q    quit",
];

/// Display color for each piece kind.
pub fn piece_color(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::I => Rgb::new(0, 255, 255),
        PieceKind::O => Rgb::new(255, 255, 0),
        PieceKind::T => Rgb::new(128, 0, 128),
        PieceKind::S => Rgb::new(0, 255, 0),
        PieceKind::Z => Rgb::new(255, 0, 0),
        PieceKind::J => Rgb::new(0, 0, 255),
        PieceKind::L => Rgb::new(255, 165, 0),
    }
}

/// Terminal renderer for the playfield and side panel.
pub struct GameView {
    /// Grid cell width in terminal columns.
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

    /// Width and height of the bordered playfield in terminal cells.
    pub fn frame_size(&self) -> (u16, u16) {
        (
            (GRID_WIDTH as u16) * self.cell_w + 2,
            GRID_HEIGHT as u16 + 2,
        )
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        status: SessionStatus,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(crate::fb::Cell::default());

        let (frame_w, frame_h) = self.frame_size();
        let start_x = viewport.width.saturating_sub(frame_w + PANEL_MIN_W) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        self.draw_border(fb, start_x, start_y, frame_w, frame_h);

        for y in 0..GRID_HEIGHT as u16 {
            for x in 0..GRID_WIDTH as u16 {
                match PieceKind::from_color_id(snap.grid[y as usize][x as usize]) {
                    Some(kind) => {
                        let style = CellStyle::plain(piece_color(kind), PLAYFIELD);
                        self.fill_cell(fb, start_x, start_y, x, y, '█', style);
                    }
                    None => {
                        let style = CellStyle::plain(GRID_LINE, PLAYFIELD).dim();
                        self.fill_cell(fb, start_x, start_y, x, y, '·', style);
                    }
                }
            }
        }

        if let Some(active) = snap.active {
            let style = CellStyle::plain(piece_color(active.kind).lighten(50), PLAYFIELD).bold();
            for (x, y) in active.cells() {
                // Rows above the grid are not drawn.
                if x >= 0 && x < GRID_WIDTH as i8 && y >= 0 && y < GRID_HEIGHT as i8 {
                    self.fill_cell(fb, start_x, start_y, x as u16, y as u16, '█', style);
                }
            }
        }

        self.draw_side_panel(fb, snap, viewport, start_x + frame_w + 2, start_y);

        if snap.game_over {
            self.draw_overlay(
                fb,
                start_x,
                start_y,
                frame_w,
                frame_h,
                &[
                    Line::Text("GAME OVER", true),
                    Line::Score(snap.score),
                    Line::Blank,
                    Line::Text("R restart", false),
                    Line::Text("Q quit", false),
                ],
            );
        } else if status.paused {
            self.draw_overlay(
                fb,
                start_x,
                start_y,
                frame_w,
                frame_h,
                &[Line::Text("PAUSED", true), Line::Text("P to resume", false)],
            );
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, status: SessionStatus, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, status, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
        let style = CellStyle::plain(HINT, BACKGROUND);

        fb.fill_rect(x + 1, y + 1, w - 2, h - 2, ' ', CellStyle::plain(TEXT, PLAYFIELD));

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

    fn fill_cell(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        cell_x: u16,
        cell_y: u16,
        ch: char,
        style: CellStyle,
    ) {
        let px = start_x + 1 + cell_x * self.cell_w;
        let py = start_y + 1 + cell_y;
        fb.fill_rect(px, py, self.cell_w, 1, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        panel_x: u16,
        start_y: u16,
    ) {
        // PANEL_MIN_W includes the two-column gap already added to panel_x.
        if panel_x.saturating_add(PANEL_MIN_W - 2) > viewport.width {
            return;
        }

        let label = CellStyle::plain(TEXT, BACKGROUND).bold();
        let value = CellStyle::plain(TEXT, BACKGROUND);

        let mut y = start_y;
        for (name, v) in [("SCORE", snap.score), ("LEVEL", snap.level), ("LINES", snap.lines)] {
            fb.put_str(panel_x, y, name, label);
            fb.put_u32(panel_x, y + 1, v, value);
            y += 3;
        }

        fb.put_str(panel_x, y, "NEXT", label);
        y += 1;
        let shape = canonical_shape(snap.next);
        let style = CellStyle::plain(piece_color(snap.next), BACKGROUND);
        for (cx, cy) in shape.cells() {
            let px = panel_x + (cx as u16) * self.cell_w;
            fb.fill_rect(px, y + cy as u16, self.cell_w, 1, '█', style);
        }
        y += 3;

        let hint = CellStyle::plain(HINT, BACKGROUND);
        for line in CONTROLS {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, hint);
            y += 1;
        }
    }

    fn draw_overlay(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        lines: &[Line],
    ) {
        let top = start_y + frame_h.saturating_sub(lines.len() as u16) / 2;
        let strong = CellStyle::plain(TEXT, BACKGROUND).bold();
        let weak = CellStyle::plain(HINT, BACKGROUND);

        for (i, line) in lines.iter().enumerate() {
            let y = top + i as u16;
            match *line {
                Line::Blank => {}
                Line::Text(text, bold) => {
                    let w = text.chars().count() as u16;
                    let x = start_x + frame_w.saturating_sub(w) / 2;
                    fb.put_str(x, y, text, if bold { strong } else { weak });
                }
                Line::Score(score) => {
                    let w = 6 + digit_count(score);
                    let x = start_x + frame_w.saturating_sub(w) / 2;
                    fb.put_str(x, y, "SCORE ", strong);
                    fb.put_u32(x + 6, y, score, strong);
                }
            }
        }
    }
}

/// Minimum columns the side panel needs next to the playfield.
const PANEL_MIN_W: u16 = 18;

enum Line {
    Blank,
    Text(&'static str, bool),
    Score(u32),
}

fn digit_count(mut n: u32) -> u16 {
    let mut count = 1;
    while n >= 10 {
        n /= 10;
        count += 1;
    }
    count
}
