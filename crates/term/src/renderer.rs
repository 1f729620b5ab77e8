//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! The screen is persistent (routines erase what they drew themselves), so
//! the renderer keeps a copy of the last presented frame and only emits the
//! runs of cells that changed since.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::screen::Screen;

const BELL: char = '\u{7}';

pub struct TerminalRenderer {
    stdout: io::Stdout,
    last: Option<FrameBuffer>,
    buf: Vec<u8>,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last: None,
            buf: Vec::with_capacity(64 * 1024),
        }
    }

    /// Raw mode, alternate screen, hidden cursor, no line wrap.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Present the screen if it changed, ringing the bell if one is pending.
    ///
    /// Returns whether anything was written to the terminal.
    pub fn present(&mut self, screen: &mut Screen) -> Result<bool> {
        let bell = screen.take_bell();
        let dirty = screen.take_dirty();
        if !bell && !dirty {
            return Ok(false);
        }

        self.buf.clear();
        if bell {
            self.buf.queue(Print(BELL))?;
        }
        if dirty {
            self.encode_into_buf(screen.framebuffer())?;
        }
        self.flush_buf()?;
        Ok(true)
    }

    fn encode_into_buf(&mut self, fb: &FrameBuffer) -> Result<()> {
        match self.last.as_mut() {
            Some(prev) => {
                encode_diff_into(prev, fb, &mut self.buf)?;
                prev.clone_from(fb);
            }
            None => {
                encode_full_into(fb, &mut self.buf)?;
                self.last = Some(fb.clone());
            }
        }
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

/// Clear the terminal and paint every cell of `fb` into `out`.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    let mut pen = Pen::default();
    for y in 0..fb.height() {
        pen.paint_run(out, fb, 0, y, fb.width())?;
    }
    pen.finish(out)
}

/// Paint only the cells of `next` that differ from `prev`.
///
/// A size change cannot be diffed and falls back to a full redraw.
pub fn encode_diff_into(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    if prev.width() != next.width() || prev.height() != next.height() {
        return encode_full_into(next, out);
    }
    let mut pen = Pen::default();
    for_each_changed_run(prev, next, |x, y, len| pen.paint_run(out, next, x, y, len))?;
    pen.finish(out)
}

/// Remembers the last emitted style so a run only restyles on change.
#[derive(Default)]
struct Pen {
    style: Option<CellStyle>,
}

impl Pen {
    fn paint_run(
        &mut self,
        out: &mut Vec<u8>,
        fb: &FrameBuffer,
        x: u16,
        y: u16,
        len: u16,
    ) -> Result<()> {
        out.queue(cursor::MoveTo(x, y))?;
        for cx in x..x + len {
            let cell = fb.get(cx, y).unwrap_or_default();
            if self.style != Some(cell.style) {
                set_style(out, cell.style)?;
                self.style = Some(cell.style);
            }
            out.queue(Print(cell.ch))?;
        }
        Ok(())
    }

    fn finish(self, out: &mut Vec<u8>) -> Result<()> {
        out.queue(ResetColor)?;
        out.queue(SetAttribute(Attribute::Reset))?;
        Ok(())
    }
}

fn set_style(out: &mut Vec<u8>, style: CellStyle) -> Result<()> {
    out.queue(SetForegroundColor(rgb_to_color(style.fg)))?;
    out.queue(SetBackgroundColor(rgb_to_color(style.bg)))?;
    out.queue(SetAttribute(Attribute::Reset))?;
    if style.bold {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    if style.dim {
        out.queue(SetAttribute(Attribute::Dim))?;
    }
    Ok(())
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

/// Calls `f(x, y, len)` for each horizontal run of differing cells.
/// Both buffers must have the same size.
fn for_each_changed_run(
    prev: &FrameBuffer,
    next: &FrameBuffer,
    mut f: impl FnMut(u16, u16, u16) -> Result<()>,
) -> Result<()> {
    let differs = |x: u16, y: u16| prev.get(x, y) != next.get(x, y);
    let w = next.width();

    for y in 0..next.height() {
        let mut x = 0;
        while x < w {
            if !differs(x, y) {
                x += 1;
                continue;
            }
            let start = x;
            while x < w && differs(x, y) {
                x += 1;
            }
            f(start, y, x - start)?;
        }
    }
    Ok(())
}
