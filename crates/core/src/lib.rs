//! Core scene module - routines, scheduling and drawing, with no terminal I/O
//!
//! Everything here draws into the [`Surface`] trait rather than a terminal,
//! which makes the whole animation deterministic and testable headlessly:
//!
//! - **Deterministic**: Same seed produces the same sky
//! - **Testable**: [`MemorySurface`] stands in for the terminal in tests
//! - **Portable**: The terminal crate is just one `Surface` implementation
//!
//! # Module Structure
//!
//! - [`frame`]: ASCII-art sprites loaded from text files
//! - [`surface`]: the `Surface` trait and the frame drawing primitive
//! - [`routine`]: the `step() -> Continue | Done` task contract
//! - [`blink`]: star blink cycle
//! - [`ship`]: keyboard-steered spaceship
//! - [`fire`]: projectile animation
//! - [`scheduler`]: cooperative round-robin scheduler
//! - [`rng`]: seeded LCG for scene layout
//!
//! # Example
//!
//! ```
//! use space_scene_core::{Blink, Fire, MemorySurface, Scheduler};
//! use space_scene_types::Controls;
//!
//! let mut surface = MemorySurface::new(20, 40);
//! let mut scheduler = Scheduler::new();
//! scheduler.spawn(Blink::new(3, 4, '*'));
//! scheduler.spawn(Fire::new(10.0, 10.0).with_speed(-1.0, 0.0));
//!
//! for _ in 0..12 {
//!     scheduler.tick(&mut surface, Controls::NONE);
//! }
//!
//! // The shot has left the playfield; the star blinks forever.
//! assert_eq!(scheduler.live(), 1);
//! ```

pub mod blink;
pub mod fire;
pub mod frame;
pub mod rng;
pub mod routine;
pub mod scheduler;
pub mod ship;
pub mod surface;

pub use space_scene_types as types;

// Re-export commonly used types for convenience
pub use blink::Blink;
pub use fire::Fire;
pub use frame::{load_frames, Frame, FrameLoadError};
pub use rng::SimpleRng;
pub use routine::{Routine, Step, TickContext};
pub use scheduler::{Scheduler, SchedulerState, TickReport};
pub use ship::{clamp_axis, Ship};
pub use surface::{draw_frame, MemorySurface, Surface};
