//! GameView: draws a [`GameSnapshot`] into a framebuffer.
//!
//! Pure, no I/O. Board row 0 is the bottom of the well, so rows are flipped
//! on the way to the screen. The two ceiling rows sit on top of the visible
//! well on a darker background.

use crate::core::{GameSnapshot, Phase, PieceSnapshot};
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH, CEILING_ROW};

const WELL_BG: Rgb = Rgb::new(30, 30, 40);
const CEILING_BG: Rgb = Rgb::new(18, 18, 24);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);

/// Terminal size in cells
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

pub struct GameView {
    /// Terminal columns per board cell
    cell_w: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // Two columns per cell keeps blocks roughly square
        Self { cell_w: 2 }
    }
}

/// Screen placement of the well for one frame
#[derive(Debug, Clone, Copy)]
struct Layout {
    x: u16,
    y: u16,
    frame_w: u16,
    frame_h: u16,
}

impl GameView {
    pub fn new(cell_w: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
        }
    }

    /// Render into a reusable framebuffer, resizing it to the viewport
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let frame_w = BOARD_WIDTH as u16 * self.cell_w + 2;
        let frame_h = BOARD_HEIGHT as u16 + 2;
        let layout = Layout {
            x: viewport.width.saturating_sub(frame_w) / 2,
            y: viewport.height.saturating_sub(frame_h) / 2,
            frame_w,
            frame_h,
        };

        self.draw_well(fb, snap, layout);
        self.draw_panel(fb, snap, viewport, layout);

        match snap.phase {
            Phase::Menu => {
                self.draw_banner(fb, layout, 0, "BLOCKFALL");
                self.draw_banner(fb, layout, 2, "ENTER to start");
            }
            Phase::Pause => {
                self.draw_banner(fb, layout, 0, "PAUSED");
                self.draw_banner(fb, layout, 2, "Q to quit");
            }
            Phase::GameOver => {
                self.draw_banner(fb, layout, 0, "GAME OVER");
                self.draw_banner(fb, layout, 2, "ENTER / Q");
            }
            Phase::Play => {
                if let Some(message) = snap.message {
                    self.draw_banner(fb, layout, -4, message.as_str());
                }
            }
        }
    }

    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_well(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, layout: Layout) {
        let border = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);
        draw_border(fb, layout.x, layout.y, layout.frame_w, layout.frame_h, border);

        for row in 0..BOARD_HEIGHT as i8 {
            for col in 0..BOARD_WIDTH as i8 {
                match snap.cell(col, row) {
                    Some(kind) if snap.grid_visible => {
                        self.draw_block(fb, layout, col, row, block_style(kind, row), '█')
                    }
                    _ => self.draw_empty(fb, layout, col, row),
                }
            }
        }

        if let Some(ghost) = snap.ghost {
            let style = CellStyle::new(Rgb::new(140, 140, 140), WELL_BG).dim();
            self.draw_piece(fb, layout, &ghost, style, '░');
        }
        if let Some(active) = snap.active {
            let style = block_style(active.kind, 0).bold();
            self.draw_piece(fb, layout, &active, style, '█');
        }
    }

    fn draw_piece(
        &self,
        fb: &mut FrameBuffer,
        layout: Layout,
        piece: &PieceSnapshot,
        style: CellStyle,
        ch: char,
    ) {
        for &(col, row) in piece.cells.iter() {
            let bg = if row >= CEILING_ROW as i8 { CEILING_BG } else { WELL_BG };
            self.draw_block(fb, layout, col, row, style.with_bg(bg), ch);
        }
    }

    fn draw_empty(&self, fb: &mut FrameBuffer, layout: Layout, col: i8, row: i8) {
        let (ch, bg) = if row >= CEILING_ROW as i8 {
            (' ', CEILING_BG)
        } else {
            ('·', WELL_BG)
        };
        let style = CellStyle::new(Rgb::new(90, 90, 100), bg).dim();
        self.draw_block(fb, layout, col, row, style, ch);
    }

    /// Fill the screen cells of one board cell. Off-board cells are skipped.
    fn draw_block(
        &self,
        fb: &mut FrameBuffer,
        layout: Layout,
        col: i8,
        row: i8,
        style: CellStyle,
        ch: char,
    ) {
        if col < 0 || col >= BOARD_WIDTH as i8 || row < 0 || row >= BOARD_HEIGHT as i8 {
            return;
        }
        let sx = layout.x + 1 + col as u16 * self.cell_w;
        let sy = layout.y + 1 + (BOARD_HEIGHT as u16 - 1 - row as u16);
        fb.fill_rect(sx, sy, self.cell_w, 1, ch, style);
    }

    fn draw_panel(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, viewport: Viewport, layout: Layout) {
        let x = layout.x.saturating_add(layout.frame_w).saturating_add(2);
        if x.saturating_add(12) > viewport.width {
            return;
        }
        let label = CellStyle::new(Rgb::new(220, 220, 220), PANEL_BG).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);
        let faint = value.dim();

        let mut y = layout.y;
        for (name, number) in [
            ("SCORE", snap.score),
            ("LEVEL", snap.level),
            ("LINES", snap.lines_cleared),
        ] {
            fb.put_str(x, y, name, label);
            fb.put_u32(x, y + 1, number, value);
            y += 3;
        }

        fb.put_str(x, y, "HOLD", label);
        let hold_style = if snap.can_hold { value } else { faint };
        fb.put_str(x, y + 1, snap.hold.map_or("-", |kind| kind.as_str()), hold_style);
        y += 3;

        fb.put_str(x, y, "NEXT", label);
        for (i, kind) in snap.preview.iter().enumerate() {
            let style = if i == 0 { value.bold() } else { value };
            fb.put_str(x, y + 1 + i as u16, kind.as_str(), style);
        }
        y += snap.preview.len() as u16 + 2;

        fb.put_str(x, y, "GHOST", label);
        fb.put_str(x, y + 1, if snap.ghost_enabled { "on" } else { "off" }, faint);
    }

    /// Centered line inside the well, `dy` rows from the middle
    fn draw_banner(&self, fb: &mut FrameBuffer, layout: Layout, dy: i16, text: &str) {
        let mid = layout.y as i16 + (layout.frame_h / 2) as i16 + dy;
        let Ok(y) = u16::try_from(mid) else {
            return;
        };
        let width = text.chars().count() as u16;
        let x = layout.x + layout.frame_w.saturating_sub(width) / 2;
        let style = CellStyle::new(Rgb::new(255, 255, 255), PANEL_BG).bold();
        fb.put_str(x, y, text, style);
    }
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
    if w < 2 || h < 2 {
        return;
    }
    let (right, bottom) = (x + w - 1, y + h - 1);
    for cx in x + 1..right {
        fb.put_char(cx, y, '─', style);
        fb.put_char(cx, bottom, '─', style);
    }
    for cy in y + 1..bottom {
        fb.put_char(x, cy, '│', style);
        fb.put_char(right, cy, '│', style);
    }
    fb.put_char(x, y, '┌', style);
    fb.put_char(right, y, '┐', style);
    fb.put_char(x, bottom, '└', style);
    fb.put_char(right, bottom, '┘', style);
}

fn block_style(kind: PieceKind, row: i8) -> CellStyle {
    let fg = match kind {
        PieceKind::I => Rgb::new(80, 220, 220),
        PieceKind::O => Rgb::new(240, 220, 80),
        PieceKind::T => Rgb::new(200, 120, 220),
        PieceKind::S => Rgb::new(100, 220, 120),
        PieceKind::Z => Rgb::new(220, 80, 80),
        PieceKind::J => Rgb::new(80, 120, 220),
        PieceKind::L => Rgb::new(255, 165, 0),
    };
    let bg = if row >= CEILING_ROW as i8 { CEILING_BG } else { WELL_BG };
    CellStyle::new(fg, bg)
}
