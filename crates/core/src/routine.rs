//! The cooperative task contract.
//!
//! A routine is a resumable animation. Each call to [`Routine::step`] runs it
//! up to its next suspension point ("wait one tick") and reports whether it
//! wants to be resumed again.

use crate::surface::Surface;
use crate::types::Controls;

/// Outcome of advancing a routine by one suspension point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Continue,
    Done,
}

/// Everything a routine may touch during one tick.
pub struct TickContext<'a> {
    pub surface: &'a mut dyn Surface,
    /// Input decoded for this tick.
    pub controls: Controls,
    /// Number of ticks completed before this one.
    pub tick: u64,
}

impl<'a> TickContext<'a> {
    pub fn new(surface: &'a mut dyn Surface, controls: Controls, tick: u64) -> Self {
        Self {
            surface,
            controls,
            tick,
        }
    }
}

pub trait Routine {
    /// Short label for logs.
    fn name(&self) -> &'static str;

    fn step(&mut self, cx: &mut TickContext<'_>) -> Step;

    /// Called once when the scheduler shuts down with this routine still live.
    fn cancel(&mut self) {}
}
