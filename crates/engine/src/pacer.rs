//! Fixed-interval tick pacing.

use std::time::{Duration, Instant};

/// Sleeps out the rest of each tick so ticks start on a fixed schedule.
///
/// A tick that overruns its slot pushes the schedule back instead of
/// letting the next ticks run back-to-back to catch up.
#[derive(Debug, Clone)]
pub struct TickPacer {
    interval: Duration,
    next: Instant,
}

impl TickPacer {
    pub fn new(interval: Duration, now: Instant) -> Self {
        Self {
            interval,
            next: now + interval,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Time left until the next tick boundary.
    pub fn remaining(&self, now: Instant) -> Duration {
        self.next.saturating_duration_since(now)
    }

    /// Move to the following boundary once the current one has been reached.
    pub fn advance(&mut self, now: Instant) {
        self.next += self.interval;
        if self.next <= now {
            self.next = now + self.interval;
        }
    }

    /// Block until the next tick boundary.
    pub fn wait(&mut self) {
        let remaining = self.remaining(Instant::now());
        if !remaining.is_zero() {
            std::thread::sleep(remaining);
        }
        self.advance(Instant::now());
    }
}
