//! GameView: maps a [`GameSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{GameSnapshot, PieceSnapshot};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{EngineState, ShapeKind, BOARD_HEIGHT, BOARD_WIDTH};

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

/// Largest accepted board cell size, per axis.
pub const MAX_CELL_SIZE: u16 = 8;

const WELL_BG: Rgb = Rgb::new(30, 30, 40);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);

const CONTROLS: [(&str, &str); 7] = [
    ("<- ->", "move"),
    ("up", "rotate"),
    ("down", "soft drop"),
    ("space", "hard drop"),
    ("p", "pause"),
    ("r", "reset"),
    ("esc", "quit"),
];

/// Renders the well, the falling piece, the side panel and state overlays.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
    show_controls: bool,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self::new(2, 1)
    }
}

/// Top-left of the well frame, in terminal cells.
#[derive(Debug, Clone, Copy)]
struct Origin {
    x: u16,
    y: u16,
}

impl GameView {
    /// Cell sizes are clamped to `1..=MAX_CELL_SIZE`.
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.clamp(1, MAX_CELL_SIZE),
            cell_h: cell_h.clamp(1, MAX_CELL_SIZE),
            anchor_y: AnchorY::Center,
            show_controls: true,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    pub fn with_controls(mut self, show: bool) -> Self {
        self.show_controls = show;
        self
    }

    /// Size of the bordered well in terminal cells.
    pub fn frame_size(&self) -> (u16, u16) {
        (
            (BOARD_WIDTH as u16).saturating_mul(self.cell_w).saturating_add(2),
            (BOARD_HEIGHT as u16).saturating_mul(self.cell_h).saturating_add(2),
        )
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let (frame_w, frame_h) = self.frame_size();
        let origin = Origin {
            x: viewport.width.saturating_sub(frame_w) / 2,
            y: match self.anchor_y {
                AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
                AnchorY::Top => 0,
            },
        };

        fb.fill_rect(
            origin.x + 1,
            origin.y + 1,
            frame_w - 2,
            frame_h - 2,
            ' ',
            CellStyle::new(Rgb::new(80, 80, 90), WELL_BG),
        );
        draw_border(
            fb,
            origin.x,
            origin.y,
            frame_w,
            frame_h,
            CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG),
        );

        for (y, row) in snap.board.iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                match cell {
                    Some(kind) => self.draw_block(fb, origin, x as u16, y as u16, *kind),
                    None => self.fill_well_cell(
                        fb,
                        origin,
                        x as u16,
                        y as u16,
                        '·',
                        CellStyle::new(Rgb::new(90, 90, 100), WELL_BG).dim(),
                    ),
                }
            }
        }

        if let Some(piece) = snap.current.filter(|_| snap.state != EngineState::Idle) {
            for (x, y) in piece_cells(&piece) {
                if (0..BOARD_WIDTH as i16).contains(&x) && (0..BOARD_HEIGHT as i16).contains(&y) {
                    self.draw_block(fb, origin, x as u16, y as u16, piece.kind);
                }
            }
        }

        self.draw_side_panel(fb, snap, viewport, origin.x + frame_w + 2, origin.y);

        match snap.state {
            EngineState::Idle => {
                draw_overlay(fb, origin, frame_w, frame_h, &["PRESS ENTER", "TO START"])
            }
            EngineState::Paused => draw_overlay(fb, origin, frame_w, frame_h, &["PAUSED"]),
            EngineState::GameOver => {
                draw_overlay(fb, origin, frame_w, frame_h, &["GAME OVER", "R TO RESET"])
            }
            EngineState::Running => {}
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_block(&self, fb: &mut FrameBuffer, origin: Origin, x: u16, y: u16, kind: ShapeKind) {
        let style = CellStyle::new(Rgb::from(kind.rgb()), WELL_BG).bold();
        self.fill_well_cell(fb, origin, x, y, '█', style);
    }

    fn fill_well_cell(
        &self,
        fb: &mut FrameBuffer,
        origin: Origin,
        x: u16,
        y: u16,
        ch: char,
        style: CellStyle,
    ) {
        let px = origin.x + 1 + x * self.cell_w;
        let py = origin.y + 1 + y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        panel_x: u16,
        top: u16,
    ) {
        if panel_x >= viewport.width || viewport.width - panel_x < 12 {
            return;
        }

        let label = CellStyle::new(Rgb::new(220, 220, 220), PANEL_BG).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);

        let mut y = top;
        for (name, v) in [
            ("SCORE", snap.score),
            ("LEVEL", snap.level),
            ("LINES", snap.lines),
        ] {
            fb.put_str(panel_x, y, name, label);
            fb.put_u32(panel_x, y + 1, v, value);
            y = y.saturating_add(3);
        }

        fb.put_str(panel_x, y, "NEXT", label);
        y = y.saturating_add(1);
        match snap.next.filter(|_| snap.state != EngineState::Idle) {
            Some(next) => self.draw_preview(fb, &next, panel_x, y),
            None => {
                fb.put_char(panel_x, y, '-', value);
            }
        }
        // Tallest shape is four rows.
        y = y.saturating_add(4 * self.cell_h + 1);

        if self.show_controls {
            let key = CellStyle::new(Rgb::new(160, 160, 170), PANEL_BG);
            let what = key.dim();
            for (k, action) in CONTROLS {
                if y >= viewport.height {
                    break;
                }
                let end = fb.put_str(panel_x, y, k, key);
                fb.put_str(end.max(panel_x + 6), y, action, what);
                y = y.saturating_add(1);
            }
        }
    }

    fn draw_preview(&self, fb: &mut FrameBuffer, piece: &PieceSnapshot, x: u16, y: u16) {
        let style = CellStyle::new(Rgb::from(piece.kind.rgb()), PANEL_BG).bold();
        for (dx, dy) in piece.shape.occupied() {
            fb.fill_rect(
                x + dx as u16 * self.cell_w,
                y + dy as u16 * self.cell_h,
                self.cell_w,
                self.cell_h,
                '█',
                style,
            );
        }
    }
}

fn piece_cells(piece: &PieceSnapshot) -> impl Iterator<Item = (i16, i16)> + '_ {
    piece
        .shape
        .occupied()
        .map(move |(dx, dy)| (piece.x as i16 + dx as i16, piece.y as i16 + dy as i16))
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
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

/// Centre `lines` over the well.
fn draw_overlay(fb: &mut FrameBuffer, origin: Origin, frame_w: u16, frame_h: u16, lines: &[&str]) {
    let style = CellStyle::new(Rgb::new(255, 255, 255), PANEL_BG).bold();
    let top = origin.y + (frame_h / 2).saturating_sub(lines.len() as u16 / 2);
    for (i, text) in lines.iter().enumerate() {
        let text_w = text.chars().count() as u16;
        let x = origin.x + frame_w.saturating_sub(text_w) / 2;
        fb.put_str(x, top + i as u16, text, style);
    }
}
