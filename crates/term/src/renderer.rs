//! TerminalRenderer: flushes a framebuffer to a terminal.
//!
//! Frames are diffed against the previous one and only changed runs of cells
//! are re-encoded. The first frame and any size change redraw everything.

use std::io::{self, Write};

use anyhow::{Context, Result};

use crossterm::{
    cursor,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{CellStyle, FrameBuffer, Rgb};

pub struct TerminalRenderer<W: Write = io::Stdout> {
    out: W,
    last: Option<FrameBuffer>,
    buf: Vec<u8>,
}

impl TerminalRenderer<io::Stdout> {
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl Default for TerminalRenderer<io::Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> TerminalRenderer<W> {
    pub fn with_writer(out: W) -> Self {
        Self {
            out,
            last: None,
            buf: Vec::with_capacity(64 * 1024),
        }
    }

    /// Raw mode, alternate screen, hidden cursor.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode().context("enable raw mode")?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()
    }

    /// Undo [`enter`](Self::enter). Raw mode is released even if writing
    /// the restore sequence fails.
    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        let flushed = self.flush_buf();
        terminal::disable_raw_mode().context("disable raw mode")?;
        flushed
    }

    /// Force the next draw to be a full redraw (e.g. after a resize).
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Draw `fb`, then swap it with the retained previous frame.
    ///
    /// Callers keep one framebuffer and pass it every frame; after the call
    /// it holds stale contents and is overwritten by the next render.
    pub fn draw_swap(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        self.buf.clear();
        match self.last.take() {
            Some(mut prev) if prev.width() == fb.width() && prev.height() == fb.height() => {
                encode_diff_into(&prev, fb, &mut self.buf)?;
                std::mem::swap(&mut prev, fb);
                self.last = Some(prev);
            }
            stale => {
                encode_full_into(fb, &mut self.buf)?;
                let mut prev = stale.unwrap_or_else(|| FrameBuffer::new(0, 0));
                prev.resize(fb.width(), fb.height());
                std::mem::swap(&mut prev, fb);
                self.last = Some(prev);
            }
        }
        self.flush_buf()
    }

    pub fn writer(&self) -> &W {
        &self.out
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.out
            .write_all(&self.buf)
            .context("write frame to terminal")?;
        self.out.flush().context("flush terminal")?;
        Ok(())
    }
}

/// Encode a full-frame redraw into `out`.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    out.queue(cursor::MoveTo(0, 0))?;

    let mut pen = Pen::default();
    for y in 0..fb.height() {
        for x in 0..fb.width() {
            let cell = fb.get(x, y).unwrap_or_default();
            pen.print(out, cell.ch, cell.style)?;
        }
        if y + 1 < fb.height() {
            out.queue(Print("\r\n"))?;
        }
    }

    pen.reset(out)
}

/// Encode only the changed runs of `next` relative to `prev`.
pub fn encode_diff_into(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    let mut pen = Pen::default();

    for_each_changed_run(prev, next, |x, y, len| {
        out.queue(cursor::MoveTo(x, y))?;
        for dx in 0..len {
            let cell = next.get(x + dx, y).unwrap_or_default();
            pen.print(out, cell.ch, cell.style)?;
        }
        Ok(())
    })?;

    if pen.current.is_some() {
        pen.reset(out)?;
    }
    Ok(())
}

/// Tracks the active style so it is only re-emitted on change.
#[derive(Default)]
struct Pen {
    current: Option<CellStyle>,
}

impl Pen {
    fn print(&mut self, out: &mut Vec<u8>, ch: char, style: CellStyle) -> Result<()> {
        if self.current != Some(style) {
            out.queue(SetForegroundColor(rgb_to_color(style.fg)))?;
            out.queue(SetBackgroundColor(rgb_to_color(style.bg)))?;
            out.queue(SetAttribute(Attribute::Reset))?;
            if style.bold {
                out.queue(SetAttribute(Attribute::Bold))?;
            }
            if style.dim {
                out.queue(SetAttribute(Attribute::Dim))?;
            }
            self.current = Some(style);
        }
        out.queue(Print(ch))?;
        Ok(())
    }

    fn reset(&mut self, out: &mut Vec<u8>) -> Result<()> {
        out.queue(ResetColor)?;
        out.queue(SetAttribute(Attribute::Reset))?;
        self.current = None;
        Ok(())
    }
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

/// Call `f(x, y, len)` for each horizontal run of cells that differ.
pub fn for_each_changed_run(
    prev: &FrameBuffer,
    next: &FrameBuffer,
    mut f: impl FnMut(u16, u16, u16) -> Result<()>,
) -> Result<()> {
    if prev.width() != next.width() || prev.height() != next.height() {
        for y in 0..next.height() {
            f(0, y, next.width())?;
        }
        return Ok(());
    }

    let w = next.width() as usize;
    if w == 0 {
        return Ok(());
    }
    for (y, (a, b)) in prev
        .cells()
        .chunks(w)
        .zip(next.cells().chunks(w))
        .enumerate()
    {
        let mut x = 0;
        while x < w {
            if a[x] == b[x] {
                x += 1;
                continue;
            }
            let start = x;
            while x < w && a[x] != b[x] {
                x += 1;
            }
            f(start as u16, y as u16, (x - start) as u16)?;
        }
    }

    Ok(())
}
