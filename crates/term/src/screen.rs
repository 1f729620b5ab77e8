//! Screen: the terminal-backed [`Surface`].
//!
//! Routines write into the framebuffer; refresh and bell requests are latched
//! here and consumed by the renderer when it presents the frame.

use crate::core::Surface;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::Attr;

#[derive(Debug, Clone)]
pub struct Screen {
    fb: FrameBuffer,
    dirty: bool,
    bell: bool,
}

impl Screen {
    /// A blank screen of `cols` x `rows` cells.
    pub fn new(cols: u16, rows: u16) -> Self {
        Self {
            fb: FrameBuffer::new(cols, rows),
            dirty: true,
            bell: false,
        }
    }

    /// A blank screen with a border around the playfield.
    pub fn with_border(cols: u16, rows: u16) -> Self {
        let mut screen = Self::new(cols, rows);
        screen.fb.draw_border(CellStyle {
            fg: Rgb::new(160, 160, 170),
            ..CellStyle::default()
        });
        screen
    }

    pub fn framebuffer(&self) -> &FrameBuffer {
        &self.fb
    }

    /// True if anything was written or a refresh was requested since the
    /// last call. Clears the flag.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::replace(&mut self.dirty, false)
    }

    /// True if the bell was requested since the last call. Clears the flag.
    pub fn take_bell(&mut self) -> bool {
        std::mem::replace(&mut self.bell, false)
    }
}

impl Surface for Screen {
    fn rows(&self) -> u16 {
        self.fb.height()
    }

    fn cols(&self) -> u16 {
        self.fb.width()
    }

    fn put(&mut self, row: u16, col: u16, ch: char, attr: Attr) {
        self.fb.put_char(col, row, ch, CellStyle::for_attr(attr));
        self.dirty = true;
    }

    fn refresh(&mut self) {
        self.dirty = true;
    }

    fn beep(&mut self) {
        self.bell = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{draw_frame, Frame};

    #[test]
    fn rows_and_cols_map_to_height_and_width() {
        let screen = Screen::new(40, 20);
        assert_eq!(screen.rows(), 20);
        assert_eq!(screen.cols(), 40);
    }

    #[test]
    fn put_uses_row_col_order_and_styles_attr() {
        let mut screen = Screen::new(10, 5);
        screen.put(1, 7, '*', Attr::Bold);
        let cell = screen.framebuffer().get(7, 1).unwrap();
        assert_eq!(cell.ch, '*');
        assert!(cell.style.bold);
        assert!(!cell.style.dim);
    }

    #[test]
    fn dirty_and_bell_latch_until_taken() {
        let mut screen = Screen::new(4, 4);
        assert!(screen.take_dirty());
        assert!(!screen.take_dirty());

        screen.refresh();
        screen.beep();
        assert!(screen.take_dirty());
        assert!(screen.take_bell());
        assert!(!screen.take_bell());
    }

    #[test]
    fn frames_draw_through_the_surface_trait() {
        let mut screen = Screen::with_border(10, 6);
        draw_frame(&mut screen, 1, 1, &Frame::parse("ab\ncd"), false);
        let fb = screen.framebuffer();
        assert_eq!(fb.get(1, 1).unwrap().ch, 'a');
        assert_eq!(fb.get(2, 2).unwrap().ch, 'd');
        assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    }
}
