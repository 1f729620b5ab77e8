//! Space scene (workspace facade crate).
//!
//! Re-exports the `space_scene::{core,engine,input,term,types}` public API
//! while the implementation lives in dedicated crates under `crates/`.

pub use space_scene_core as core;
pub use space_scene_engine as engine;
pub use space_scene_input as input;
pub use space_scene_term as term;
pub use space_scene_types as types;
