//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the scene.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (animation routines, terminal rendering, input decoding).
//!
//! # Coordinates
//!
//! Everything is addressed as `(row, col)` with the origin in the top-left
//! corner of the surface. Coordinates are signed so that sprites may be
//! positioned partially off-surface; drawing clips silently.
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 100 | Fixed scheduler tick interval |
//! | `BLINK_DIM_TICKS` | 20 | Star hold in the dim phase |
//! | `BLINK_NORMAL_TICKS` | 3 | Star hold in each normal phase |
//! | `BLINK_BOLD_TICKS` | 5 | Star hold in the bold phase |
//!
//! # Examples
//!
//! ```
//! use space_scene_types::{Controls, Position};
//!
//! let pos = Position::new(10, 20);
//! let controls = Controls::new(-1, 1, false);
//! assert_eq!(pos.offset(controls.rows_dir, controls.cols_dir), Position::new(9, 21));
//! ```

/// Fixed scheduler tick interval in milliseconds.
pub const TICK_MS: u64 = 100;

/// Default number of stars in the sky.
pub const DEFAULT_STAR_COUNT: usize = 100;

/// Glyphs a star may be drawn with.
pub const STAR_GLYPHS: [char; 4] = ['+', '*', '.', ':'];

/// Ticks a star spends dim.
pub const BLINK_DIM_TICKS: u32 = 20;

/// Ticks a star spends in each normal phase.
pub const BLINK_NORMAL_TICKS: u32 = 3;

/// Ticks a star spends bold.
pub const BLINK_BOLD_TICKS: u32 = 5;

/// Glyph drawn where a projectile is launched.
pub const MUZZLE_GLYPH: char = '*';

/// Glyph replacing the muzzle glyph on the second tick of a launch.
pub const FLASH_GLYPH: char = 'O';

/// Trail glyph for projectiles with vertical motion only.
pub const TRAIL_VERTICAL: char = '|';

/// Trail glyph for projectiles with any horizontal motion.
pub const TRAIL_HORIZONTAL: char = '-';

/// Default projectile speed in rows per tick (negative is upward).
pub const DEFAULT_FIRE_ROWS_SPEED: f64 = -0.9;

/// Default frame files for the ship, in animation order.
pub const DEFAULT_SHIP_FRAMES: [&str; 2] = ["rocket_frame_1.txt", "rocket_frame_2.txt"];

/// Visual attribute of a surface cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Attr {
    #[default]
    Normal,
    Dim,
    Bold,
}

/// A cell position on the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Position shifted by the given deltas.
    pub const fn offset(self, rows: i32, cols: i32) -> Self {
        Self {
            row: self.row + rows,
            col: self.col + cols,
        }
    }
}

/// Input decoded for a single tick.
///
/// Directions are each one of `-1`, `0`, `1`, so the pair covers the eight
/// compass directions plus "no movement".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Controls {
    pub rows_dir: i32,
    pub cols_dir: i32,
    pub fire: bool,
}

impl Controls {
    pub const NONE: Controls = Controls {
        rows_dir: 0,
        cols_dir: 0,
        fire: false,
    };

    pub const fn new(rows_dir: i32, cols_dir: i32, fire: bool) -> Self {
        Self {
            rows_dir,
            cols_dir,
            fire,
        }
    }
}
