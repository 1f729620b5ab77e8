//! Scene assembly: stars, then the ship, then the opening shot.
//!
//! Spawn order is draw order, so the ship is drawn over any star it crosses
//! and the projectile over the ship.

use tracing::info;

use crate::config::SceneConfig;
use crate::core::{Blink, Fire, Frame, Scheduler, Ship, SimpleRng};
use crate::types::{Position, BLINK_DIM_TICKS, STAR_GLYPHS};

/// Populate a scheduler for a `rows` x `cols` surface.
pub fn build_scene(config: &SceneConfig, frames: Vec<Frame>, rows: u16, cols: u16) -> Scheduler {
    let mut rng = SimpleRng::new(config.seed);
    let mut scheduler = Scheduler::new();

    // Stars live strictly inside the border.
    let stars = if rows >= 3 && cols >= 3 {
        config.star_count
    } else {
        0
    };
    for _ in 0..stars {
        let row = rng.range_inclusive(1, i32::from(rows) - 2);
        let col = rng.range_inclusive(1, i32::from(cols) - 2);
        let glyph = rng.choose(&STAR_GLYPHS).unwrap_or('*');
        let offset = rng.next_range(BLINK_DIM_TICKS);
        scheduler.spawn(Blink::new(row, col, glyph).with_offset(offset));
    }

    let center = Position::new(i32::from(rows / 2), i32::from(cols / 2));
    scheduler.spawn(Ship::new(frames, center));

    let fire = Fire::new(f64::from(center.row), f64::from(center.col + 2))
        .with_speed(config.fire_rows_speed, 0.0)
        .with_bell(config.bell);
    scheduler.spawn(fire);

    info!(stars, rows, cols, seed = config.seed, "scene assembled");
    scheduler
}
