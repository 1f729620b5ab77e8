//! Per-tick, non-blocking control reader.
//!
//! All key events pending at the start of a tick are folded into one
//! [`Controls`] value. Per axis the last key wins, so pressing up and left
//! within the same tick yields a diagonal.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

use crate::map::{map_key, KeyIntent};
use crate::types::Controls;

/// Input gathered for one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickInput {
    pub controls: Controls,
    /// A stop was requested (quit key or Ctrl-C).
    pub quit: bool,
}

/// Folds key events into a [`TickInput`].
#[derive(Debug, Clone, Default)]
pub struct ControlAccumulator {
    pending: TickInput,
}

impl ControlAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, key: KeyEvent) {
        if key.kind == KeyEventKind::Release {
            return;
        }
        match map_key(key) {
            Some(KeyIntent::Move { rows, cols }) => {
                if rows != 0 {
                    self.pending.controls.rows_dir = rows;
                }
                if cols != 0 {
                    self.pending.controls.cols_dir = cols;
                }
            }
            Some(KeyIntent::Fire) => self.pending.controls.fire = true,
            Some(KeyIntent::Quit) => self.pending.quit = true,
            None => {}
        }
    }

    /// Take the accumulated input, resetting for the next tick.
    pub fn take(&mut self) -> TickInput {
        std::mem::take(&mut self.pending)
    }
}

/// Reads pending terminal events without blocking.
#[derive(Debug, Default)]
pub struct ControlReader {
    acc: ControlAccumulator,
}

impl ControlReader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drain every pending event and return this tick's input.
    pub fn read_tick(&mut self) -> Result<TickInput> {
        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                self.acc.apply(key);
            }
        }
        Ok(self.acc.take())
    }
}
