//! Terminal space scene runner (default binary).
//!
//! Loads the rocket frames, takes over the terminal, and steps the starfield,
//! ship and projectile once per tick until a quit key is pressed.

use std::fs::OpenOptions;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use space_scene::core::{load_frames, Scheduler, Surface};
use space_scene::engine::{build_scene, SceneConfig, TickPacer};
use space_scene::input::ControlReader;
use space_scene::term::{Screen, TerminalRenderer};

fn main() -> Result<()> {
    let config = SceneConfig::from_env();
    init_logging(&config);

    // A missing frame file is fatal before the terminal is touched.
    let frames = load_frames(&config.frames_dir, &config.frame_names)
        .context("loading ship frames")?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config, frames);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(
    term: &mut TerminalRenderer,
    config: &SceneConfig,
    frames: Vec<space_scene::core::Frame>,
) -> Result<()> {
    let (cols, rows) = crossterm::terminal::size().unwrap_or((80, 24));
    let mut screen = Screen::with_border(cols, rows);
    let mut scheduler = build_scene(config, frames, screen.rows(), screen.cols());
    let mut input = ControlReader::new();
    let mut pacer = TickPacer::new(config.tick, std::time::Instant::now());

    info!(rows, cols, tick_ms = config.tick.as_millis() as u64, "scene running");

    loop {
        let tick_input = match input.read_tick() {
            Ok(tick_input) => tick_input,
            Err(err) => {
                shutdown(&mut scheduler);
                return Err(err);
            }
        };
        if tick_input.quit {
            break;
        }

        scheduler.tick(&mut screen, tick_input.controls);
        if let Err(err) = term.present(&mut screen) {
            shutdown(&mut scheduler);
            return Err(err);
        }

        pacer.wait();
    }

    shutdown(&mut scheduler);
    Ok(())
}

fn shutdown(scheduler: &mut Scheduler) {
    let cancelled = scheduler.stop();
    info!(cancelled, ticks = scheduler.ticks(), "scene stopped");
}

/// Log to a file when `SPACE_SCENE_LOG` is set; the terminal itself belongs
/// to the renderer.
fn init_logging(config: &SceneConfig) {
    let Some(path) = config.log_path.as_ref() else {
        return;
    };

    let file = match OpenOptions::new().create(true).append(true).open(path) {
        Ok(file) => file,
        Err(err) => {
            eprintln!("space-scene: cannot open log file {}: {err}", path.display());
            return;
        }
    };

    let filter = EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .finish();
    if tracing::subscriber::set_global_default(subscriber).is_err() {
        warn!("tracing subscriber already installed");
    }
}
