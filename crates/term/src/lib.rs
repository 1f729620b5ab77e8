//! Terminal rendering module.
//!
//! This is a small, scene-oriented rendering layer for terminal animation.
//! It avoids widget/layout libraries and instead keeps a framebuffer that
//! routines draw into (through [`Screen`], the terminal-backed surface) and
//! that is flushed to the terminal as a diff once per tick.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Only touch the cells that changed since the last tick
//! - Restore the terminal on every exit path

pub mod fb;
pub mod renderer;
pub mod screen;

pub use space_scene_core as core;
pub use space_scene_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use screen::Screen;
