//! Scene engine - configuration, tick pacing and scene assembly.
//!
//! Everything the binary needs between "terminal is ready" and "run the
//! loop": reading [`SceneConfig`] from the environment, populating a
//! [`Scheduler`](crate::core::Scheduler) with the starfield, ship and
//! projectile, and sleeping out the remainder of each tick with
//! [`TickPacer`].

pub mod config;
pub mod pacer;
pub mod scene;

pub use space_scene_core as core;
pub use space_scene_types as types;

pub use config::SceneConfig;
pub use pacer::TickPacer;
pub use scene::build_scene;
