//! Star blink routine.

use crate::routine::{Routine, Step, TickContext};
use crate::types::{Attr, BLINK_BOLD_TICKS, BLINK_DIM_TICKS, BLINK_NORMAL_TICKS};

/// Blink phases in cycle order with their hold times in ticks.
pub const BLINK_PHASES: [(Attr, u32); 4] = [
    (Attr::Dim, BLINK_DIM_TICKS),
    (Attr::Normal, BLINK_NORMAL_TICKS),
    (Attr::Bold, BLINK_BOLD_TICKS),
    (Attr::Normal, BLINK_NORMAL_TICKS),
];

/// A single star cycling dim → normal → bold → normal in place.
#[derive(Debug, Clone)]
pub struct Blink {
    row: i32,
    col: i32,
    glyph: char,
    idle: u32,
    phase: usize,
    remaining: u32,
}

impl Blink {
    pub fn new(row: i32, col: i32, glyph: char) -> Self {
        Self {
            row,
            col,
            glyph,
            idle: 0,
            phase: 0,
            remaining: 0,
        }
    }

    /// Wait `ticks` before the first draw.
    pub fn with_offset(mut self, ticks: u32) -> Self {
        self.idle = ticks;
        self
    }

    /// Attribute of the phase the star is currently in.
    pub fn attr(&self) -> Attr {
        BLINK_PHASES[self.phase].0
    }
}

impl Routine for Blink {
    fn name(&self) -> &'static str {
        "blink"
    }

    fn step(&mut self, cx: &mut TickContext<'_>) -> Step {
        if self.idle > 0 {
            self.idle -= 1;
            return Step::Continue;
        }

        if self.remaining == 0 {
            let (attr, hold) = BLINK_PHASES[self.phase];
            cx.surface.put_clipped(self.row, self.col, self.glyph, attr);
            self.remaining = hold.max(1);
        }

        self.remaining -= 1;
        if self.remaining == 0 {
            self.phase = (self.phase + 1) % BLINK_PHASES.len();
        }
        Step::Continue
    }
}
