//! Projectile routine: a shot travelling in a straight line until it leaves
//! the playfield.

use tracing::debug;

use crate::routine::{Routine, Step, TickContext};
use crate::surface::Surface;
use crate::types::{
    Attr, DEFAULT_FIRE_ROWS_SPEED, FLASH_GLYPH, MUZZLE_GLYPH, TRAIL_HORIZONTAL, TRAIL_VERTICAL,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Muzzle,
    Flash,
    Travel,
    Finished,
}

/// A single shot. Positions are fractional; the drawn cell is the rounded one.
#[derive(Debug, Clone)]
pub struct Fire {
    row: f64,
    col: f64,
    rows_speed: f64,
    cols_speed: f64,
    bell: bool,
    stage: Stage,
}

impl Fire {
    /// A shot from `(row, col)` moving upward at the default speed.
    pub fn new(row: f64, col: f64) -> Self {
        Self {
            row,
            col,
            rows_speed: DEFAULT_FIRE_ROWS_SPEED,
            cols_speed: 0.0,
            bell: true,
            stage: Stage::Muzzle,
        }
    }

    /// Set the per-tick velocity in cells.
    pub fn with_speed(mut self, rows_speed: f64, cols_speed: f64) -> Self {
        self.rows_speed = rows_speed;
        self.cols_speed = cols_speed;
        self
    }

    /// Enable or disable the alert on launch.
    pub fn with_bell(mut self, bell: bool) -> Self {
        self.bell = bell;
        self
    }

    fn trail_glyph(&self) -> char {
        if self.cols_speed != 0.0 {
            TRAIL_HORIZONTAL
        } else {
            TRAIL_VERTICAL
        }
    }

    fn cell(&self) -> (i32, i32) {
        (self.row.round() as i32, self.col.round() as i32)
    }

    /// The drawn cell lies strictly inside the border on both axes.
    fn inside(&self, surface: &dyn Surface) -> bool {
        let (row, col) = self.cell();
        (1..i32::from(surface.rows()) - 1).contains(&row)
            && (1..i32::from(surface.cols()) - 1).contains(&col)
    }

    fn put(&self, surface: &mut dyn Surface, ch: char) {
        let (row, col) = self.cell();
        surface.put_clipped(row, col, ch, Attr::Normal);
    }

    fn finish(&mut self) -> Step {
        debug!(row = self.row, col = self.col, "projectile left the playfield");
        self.stage = Stage::Finished;
        Step::Done
    }
}

impl Routine for Fire {
    fn name(&self) -> &'static str {
        "fire"
    }

    fn step(&mut self, cx: &mut TickContext<'_>) -> Step {
        match self.stage {
            Stage::Muzzle => {
                if !self.inside(&*cx.surface) {
                    return self.finish();
                }
                if self.bell {
                    cx.surface.beep();
                }
                self.put(cx.surface, MUZZLE_GLYPH);
                self.stage = Stage::Flash;
                Step::Continue
            }
            Stage::Flash => {
                self.put(cx.surface, FLASH_GLYPH);
                self.stage = Stage::Travel;
                Step::Continue
            }
            Stage::Travel => {
                self.put(cx.surface, ' ');
                self.row += self.rows_speed;
                self.col += self.cols_speed;
                if !self.inside(&*cx.surface) {
                    return self.finish();
                }
                self.put(cx.surface, self.trail_glyph());
                Step::Continue
            }
            Stage::Finished => Step::Done,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::MemorySurface;
    use crate::types::Controls;

    /// Surface wrapper counting writes of one glyph.
    struct Counting {
        inner: MemorySurface,
        glyph: char,
        count: usize,
    }

    impl Surface for Counting {
        fn rows(&self) -> u16 {
            self.inner.rows()
        }
        fn cols(&self) -> u16 {
            self.inner.cols()
        }
        fn put(&mut self, row: u16, col: u16, ch: char, attr: Attr) {
            if ch == self.glyph {
                self.count += 1;
            }
            self.inner.put(row, col, ch, attr);
        }
        fn beep(&mut self) {
            self.inner.beep();
        }
    }

    fn run_to_end(fire: &mut Fire, surface: &mut dyn Surface, limit: u64) -> u64 {
        for t in 0..limit {
            let mut cx = TickContext::new(&mut *surface, Controls::NONE, t);
            if fire.step(&mut cx) == Step::Done {
                return t + 1;
            }
        }
        panic!("projectile still live after {limit} ticks");
    }

    #[test]
    fn upward_shot_draws_nine_trail_glyphs_on_twenty_rows() {
        let mut s = Counting {
            inner: MemorySurface::new(20, 40),
            glyph: TRAIL_VERTICAL,
            count: 0,
        };
        let mut fire = Fire::new(10.0, 10.0).with_speed(-1.0, 0.0);
        let ticks = run_to_end(&mut fire, &mut s, 100);

        assert_eq!(s.count, 9);
        // muzzle + flash + 9 trail ticks + the tick it leaves
        assert_eq!(ticks, 12);
        assert_eq!(s.inner.ink(), 0);
        assert_eq!(s.inner.beeps(), 1);
    }

    #[test]
    fn muzzle_then_flash_at_start() {
        let mut s = MemorySurface::new(20, 40);
        let mut fire = Fire::new(10.0, 12.0);

        let mut cx = TickContext::new(&mut s, Controls::NONE, 0);
        fire.step(&mut cx);
        assert_eq!(s.glyph(10, 12), MUZZLE_GLYPH);

        let mut cx = TickContext::new(&mut s, Controls::NONE, 1);
        fire.step(&mut cx);
        assert_eq!(s.glyph(10, 12), FLASH_GLYPH);

        let mut cx = TickContext::new(&mut s, Controls::NONE, 2);
        fire.step(&mut cx);
        assert_eq!(s.glyph(10, 12), ' ');
        // -0.9 rounds to the row above.
        assert_eq!(s.glyph(9, 12), TRAIL_VERTICAL);
    }

    #[test]
    fn start_on_border_finishes_without_drawing() {
        for (row, col) in [(0.0, 5.0), (19.0, 5.0), (5.0, 0.0), (5.0, 39.0), (-3.0, 50.0)] {
            let mut s = MemorySurface::new(20, 40);
            let mut fire = Fire::new(row, col);
            let mut cx = TickContext::new(&mut s, Controls::NONE, 0);
            assert_eq!(fire.step(&mut cx), Step::Done);
            assert_eq!(fire.stage, Stage::Finished);
            assert_eq!(s.ink(), 0);
            assert_eq!(s.beeps(), 0);
        }
    }

    #[test]
    fn default_speed_never_touches_the_top_border() {
        let mut s = MemorySurface::new(20, 60);
        for col in 0..60 {
            s.put(0, col, '─', Attr::Normal);
        }
        let mut fire = Fire::new(10.0, 32.0);
        run_to_end(&mut fire, &mut s, 100);

        // 0.0999... rounds onto the border row, so the shot ends at row 1.
        assert!((0..60).all(|col| s.glyph(0, col) == '─'));
        assert_eq!(s.ink(), 60);
    }

    #[test]
    fn horizontal_motion_uses_dash() {
        let mut s = Counting {
            inner: MemorySurface::new(20, 40),
            glyph: TRAIL_HORIZONTAL,
            count: 0,
        };
        let mut fire = Fire::new(5.0, 5.0).with_speed(0.0, 2.0).with_bell(false);
        run_to_end(&mut fire, &mut s, 100);

        // cols 7, 9, ..., 37
        assert_eq!(s.count, 16);
        assert_eq!(s.inner.beeps(), 0);
    }

    #[test]
    fn diagonal_shots_terminate() {
        for (dr, dc) in [(-0.3, 0.7), (1.0, 1.0), (0.5, -0.25), (-2.0, -2.0)] {
            let mut s = MemorySurface::new(20, 40);
            let mut fire = Fire::new(10.0, 20.0).with_speed(dr, dc);
            run_to_end(&mut fire, &mut s, 1_000);
            assert_eq!(s.ink(), 0);
        }
    }

    #[test]
    fn finished_shot_stays_done() {
        let mut s = MemorySurface::new(3, 3);
        let mut fire = Fire::new(0.0, 0.0);
        for t in 0..3 {
            let mut cx = TickContext::new(&mut s, Controls::NONE, t);
            assert_eq!(fire.step(&mut cx), Step::Done);
        }
    }
}
