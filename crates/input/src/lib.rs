//! Terminal input module (scene-facing).
//!
//! Maps `crossterm` key events into per-tick [`crate::types::Controls`] and
//! drains pending events without blocking, once per tick.

pub mod map;
pub mod reader;

pub use space_scene_types as types;

pub use map::{map_key, should_quit, KeyIntent};
pub use reader::{ControlAccumulator, ControlReader, TickInput};
