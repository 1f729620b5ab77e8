//! Surface abstraction and the frame drawing primitive.
//!
//! Routines never talk to a terminal directly. They write glyphs into a
//! [`Surface`], which the terminal crate implements on top of its framebuffer
//! and which [`MemorySurface`] implements for headless runs and tests.

use crate::frame::Frame;
use crate::types::Attr;

/// A fixed-size grid of character cells.
pub trait Surface {
    fn rows(&self) -> u16;

    fn cols(&self) -> u16;

    /// Write one glyph. Callers guarantee `row < rows()` and `col < cols()`.
    fn put(&mut self, row: u16, col: u16, ch: char, attr: Attr);

    /// Ask for the surface to be flushed to the display.
    fn refresh(&mut self) {}

    /// Trigger the audible alert.
    fn beep(&mut self) {}

    /// Write one glyph at a signed position, skipping cells off the surface.
    fn put_clipped(&mut self, row: i32, col: i32, ch: char, attr: Attr) {
        if row < 0 || col < 0 {
            return;
        }
        if row >= i32::from(self.rows()) || col >= i32::from(self.cols()) {
            return;
        }
        self.put(row as u16, col as u16, ch, attr);
    }
}

/// Draw `frame` with its top-left corner at `(row, col)`.
///
/// Spaces in the frame are transparent. With `erase` set, every non-space
/// glyph of the frame is painted as a blank instead, clearing the frame's
/// footprint whatever currently occupies it.
pub fn draw_frame(surface: &mut dyn Surface, row: i32, col: i32, frame: &Frame, erase: bool) {
    for (dr, line) in frame.rows().enumerate() {
        let r = row + dr as i32;
        if r < 0 {
            continue;
        }
        if r >= i32::from(surface.rows()) {
            break;
        }
        for (dc, ch) in line.chars().enumerate() {
            if ch == ' ' {
                continue;
            }
            let glyph = if erase { ' ' } else { ch };
            surface.put_clipped(r, col + dc as i32, glyph, Attr::Normal);
        }
    }
}

/// Headless surface backed by a plain cell vector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemorySurface {
    rows: u16,
    cols: u16,
    cells: Vec<(char, Attr)>,
    refreshes: u64,
    beeps: u64,
}

impl MemorySurface {
    pub fn new(rows: u16, cols: u16) -> Self {
        Self {
            rows,
            cols,
            cells: vec![(' ', Attr::Normal); rows as usize * cols as usize],
            refreshes: 0,
            beeps: 0,
        }
    }

    pub fn get(&self, row: u16, col: u16) -> Option<(char, Attr)> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(self.cells[row as usize * self.cols as usize + col as usize])
    }

    pub fn glyph(&self, row: u16, col: u16) -> char {
        self.get(row, col).map(|(ch, _)| ch).unwrap_or(' ')
    }

    /// Number of non-blank cells.
    pub fn ink(&self) -> usize {
        self.cells.iter().filter(|(ch, _)| *ch != ' ').count()
    }

    pub fn refreshes(&self) -> u64 {
        self.refreshes
    }

    pub fn beeps(&self) -> u64 {
        self.beeps
    }

    /// Row `row` rendered as a string, for assertions.
    pub fn line(&self, row: u16) -> String {
        (0..self.cols).map(|col| self.glyph(row, col)).collect()
    }
}

impl Surface for MemorySurface {
    fn rows(&self) -> u16 {
        self.rows
    }

    fn cols(&self) -> u16 {
        self.cols
    }

    fn put(&mut self, row: u16, col: u16, ch: char, attr: Attr) {
        if row < self.rows && col < self.cols {
            self.cells[row as usize * self.cols as usize + col as usize] = (ch, attr);
        }
    }

    fn refresh(&mut self) {
        self.refreshes += 1;
    }

    fn beep(&mut self) {
        self.beeps += 1;
    }
}
