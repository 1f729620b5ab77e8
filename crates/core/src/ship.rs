//! Spaceship routine: steer, clamp, and cycle the rocket frames.

use tracing::trace;

use crate::frame::Frame;
use crate::routine::{Routine, Step, TickContext};
use crate::surface::draw_frame;
use crate::types::Position;

/// Clamp one axis so a sprite of `extent` cells stays strictly inside a
/// bordered playfield of `surface_extent` cells.
///
/// The lower bound wins when the playfield is too small for the sprite.
pub fn clamp_axis(value: i32, extent: usize, surface_extent: u16) -> i32 {
    let max = i32::from(surface_extent) - extent as i32 - 1;
    value.min(max).max(1)
}

/// The player's ship. Owns its position; nothing else writes it.
#[derive(Debug, Clone)]
pub struct Ship {
    frames: Vec<Frame>,
    /// Indices into `frames`, each frame repeated twice.
    sequence: Vec<usize>,
    cursor: usize,
    position: Position,
    /// Frame index and origin of what is currently on the surface.
    shown: Option<(usize, Position)>,
    height: usize,
    width: usize,
}

impl Ship {
    pub fn new(frames: Vec<Frame>, start: Position) -> Self {
        let sequence = (0..frames.len()).flat_map(|i| [i, i]).collect();
        let height = frames.iter().map(Frame::height).max().unwrap_or(0);
        let width = frames.iter().map(Frame::width).max().unwrap_or(0);
        Self {
            frames,
            sequence,
            cursor: 0,
            position: start,
            shown: None,
            height,
            width,
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    /// Bounding box over all frames as `(height, width)`.
    pub fn size(&self) -> (usize, usize) {
        (self.height, self.width)
    }

    /// Index of the frame currently on the surface.
    pub fn shown_frame(&self) -> Option<usize> {
        self.shown.map(|(i, _)| i)
    }
}

impl Routine for Ship {
    fn name(&self) -> &'static str {
        "ship"
    }

    fn step(&mut self, cx: &mut TickContext<'_>) -> Step {
        if let Some((i, at)) = self.shown.take() {
            draw_frame(cx.surface, at.row, at.col, &self.frames[i], true);
        }

        // `fire` is decoded upstream but the ship does not act on it.
        let controls = cx.controls;
        let candidate = self.position.offset(controls.rows_dir, controls.cols_dir);
        let next = Position::new(
            clamp_axis(candidate.row, self.height, cx.surface.rows()),
            clamp_axis(candidate.col, self.width, cx.surface.cols()),
        );
        if next != self.position {
            trace!(row = next.row, col = next.col, "ship moved");
        }
        self.position = next;

        if let Some(&i) = self.sequence.get(self.cursor) {
            draw_frame(cx.surface, next.row, next.col, &self.frames[i], false);
            self.shown = Some((i, next));
            self.cursor = (self.cursor + 1) % self.sequence.len();
        }

        cx.surface.refresh();
        Step::Continue
    }
}
