//! Cooperative round-robin scheduler.
//!
//! The scheduler owns every live routine and advances each of them by exactly
//! one step per tick, in insertion order. Insertion order therefore decides
//! which routine wins when two draw on the same cell. Pacing real time between
//! ticks is the caller's job (see the engine crate's `TickPacer`).

use tracing::{debug, info};

use crate::routine::{Routine, Step, TickContext};
use crate::surface::Surface;
use crate::types::Controls;

/// Lifecycle of the scheduler. Transitions only move forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerState {
    Running,
    Draining,
    Stopped,
}

/// What happened during one call to [`Scheduler::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickReport {
    /// Routines advanced this tick.
    pub advanced: usize,
    /// Routines that finished this tick and were removed.
    pub completed: usize,
}

pub struct Scheduler {
    routines: Vec<Box<dyn Routine>>,
    state: SchedulerState,
    ticks: u64,
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler {
    pub fn new() -> Self {
        Self {
            routines: Vec::new(),
            state: SchedulerState::Running,
            ticks: 0,
        }
    }

    /// Add a routine to the end of the live set.
    ///
    /// Returns `false` (and drops the routine) once the scheduler has been
    /// stopped.
    pub fn spawn(&mut self, routine: impl Routine + 'static) -> bool {
        self.spawn_boxed(Box::new(routine))
    }

    pub fn spawn_boxed(&mut self, routine: Box<dyn Routine>) -> bool {
        if self.state != SchedulerState::Running {
            return false;
        }
        self.routines.push(routine);
        true
    }

    pub fn state(&self) -> SchedulerState {
        self.state
    }

    /// Number of live routines.
    pub fn live(&self) -> usize {
        self.routines.len()
    }

    /// Ticks run so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Names of the live routines in scheduling order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.routines.iter().map(|r| r.name())
    }

    /// Advance every live routine by one step, dropping the ones that finish.
    pub fn tick(&mut self, surface: &mut dyn Surface, controls: Controls) -> TickReport {
        if self.state != SchedulerState::Running {
            return TickReport::default();
        }

        let mut report = TickReport::default();
        let mut cx = TickContext::new(surface, controls, self.ticks);
        self.routines.retain_mut(|routine| {
            report.advanced += 1;
            match routine.step(&mut cx) {
                Step::Continue => true,
                Step::Done => {
                    debug!(routine = routine.name(), tick = cx.tick, "routine finished");
                    report.completed += 1;
                    false
                }
            }
        });
        self.ticks += 1;
        report
    }

    /// Cancel every live routine and stop.
    ///
    /// Returns the number of routines cancelled. Cells the routines drew are
    /// left as they are.
    pub fn stop(&mut self) -> usize {
        if self.state == SchedulerState::Stopped {
            return 0;
        }

        self.state = SchedulerState::Draining;
        let cancelled = self.routines.len();
        for mut routine in self.routines.drain(..) {
            routine.cancel();
        }
        self.state = SchedulerState::Stopped;
        info!(cancelled, ticks = self.ticks, "scheduler stopped");
        cancelled
    }
}
