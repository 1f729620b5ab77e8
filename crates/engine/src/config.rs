//! Scene configuration from environment variables.
//!
//! | Variable | Default |
//! |----------|---------|
//! | `SPACE_SCENE_TICK_MS` | 100 |
//! | `SPACE_SCENE_STARS` | 100 |
//! | `SPACE_SCENE_SEED` | derived from the clock |
//! | `SPACE_SCENE_FRAMES_DIR` | `assets/` at the workspace root |
//! | `SPACE_SCENE_FIRE_SPEED` | -0.9 |
//! | `SPACE_SCENE_BELL` | on |
//! | `SPACE_SCENE_LOG` | unset (no logging) |
//! | `SPACE_SCENE_LOG_LEVEL` | `info` |
//!
//! Unparseable values fall back to the default.

use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::types::{DEFAULT_FIRE_ROWS_SPEED, DEFAULT_SHIP_FRAMES, DEFAULT_STAR_COUNT, TICK_MS};

#[derive(Debug, Clone, PartialEq)]
pub struct SceneConfig {
    pub tick: Duration,
    pub star_count: usize,
    pub seed: u32,
    pub frames_dir: PathBuf,
    /// Ship frame file names inside `frames_dir`, in animation order.
    pub frame_names: Vec<String>,
    pub fire_rows_speed: f64,
    pub bell: bool,
    pub log_path: Option<PathBuf>,
    pub log_level: String,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            tick: Duration::from_millis(TICK_MS),
            star_count: DEFAULT_STAR_COUNT,
            seed: clock_seed(),
            frames_dir: default_frames_dir(),
            frame_names: DEFAULT_SHIP_FRAMES.iter().map(|s| s.to_string()).collect(),
            fire_rows_speed: DEFAULT_FIRE_ROWS_SPEED,
            bell: true,
            log_path: None,
            log_level: "info".to_string(),
        }
    }
}

impl SceneConfig {
    /// Create from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        let get = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        if let Some(ms) = get("SPACE_SCENE_TICK_MS").and_then(|s| s.parse::<u64>().ok()) {
            if ms > 0 {
                config.tick = Duration::from_millis(ms);
            }
        }

        if let Some(n) = get("SPACE_SCENE_STARS").and_then(|s| s.parse().ok()) {
            config.star_count = n;
        }

        if let Some(seed) = get("SPACE_SCENE_SEED").and_then(|s| s.parse().ok()) {
            config.seed = seed;
        }

        if let Some(dir) = get("SPACE_SCENE_FRAMES_DIR") {
            config.frames_dir = PathBuf::from(dir);
        }

        if let Some(speed) = get("SPACE_SCENE_FIRE_SPEED").and_then(|s| s.parse::<f64>().ok()) {
            // A stationary shot would never leave the playfield.
            if speed.is_finite() && speed != 0.0 {
                config.fire_rows_speed = speed;
            }
        }

        if let Some(bell) = get("SPACE_SCENE_BELL") {
            config.bell = !matches!(bell.to_lowercase().as_str(), "0" | "false" | "off" | "no");
        }

        config.log_path = get("SPACE_SCENE_LOG").map(PathBuf::from);

        if let Some(level) = get("SPACE_SCENE_LOG_LEVEL") {
            config.log_level = level;
        }

        config
    }
}

fn default_frames_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("assets")
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
