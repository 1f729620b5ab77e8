use space_scene::core::{load_frames, Surface};
use space_scene::engine::{build_scene, SceneConfig};
use space_scene::term::Screen;
use space_scene::types::Controls;

fn assets() -> std::path::PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("assets")
}

#[test]
fn bundled_rocket_frames_load() {
    let frames = load_frames(&assets(), &["rocket_frame_1.txt", "rocket_frame_2.txt"]).unwrap();
    assert_eq!(frames.len(), 2);
    for frame in &frames {
        assert_eq!(frame.size(), (9, 5));
    }
}

#[test]
fn border_survives_a_long_run_with_hostile_input() {
    let frames = load_frames(&assets(), &["rocket_frame_1.txt", "rocket_frame_2.txt"]).unwrap();
    let config = SceneConfig {
        star_count: 100,
        seed: 3,
        ..SceneConfig::default()
    };
    let mut screen = Screen::with_border(60, 20);
    let mut scheduler = build_scene(&config, frames, screen.rows(), screen.cols());

    for tick in 0..400 {
        let controls = if tick < 200 {
            Controls::new(-1, -1, false)
        } else {
            Controls::new(1, 1, false)
        };
        scheduler.tick(&mut screen, controls);
    }

    let fb = screen.framebuffer();
    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(59, 19).unwrap().ch, '┘');
    for x in 1..59 {
        assert_eq!(fb.get(x, 0).unwrap().ch, '─');
        assert_eq!(fb.get(x, 19).unwrap().ch, '─');
    }
    for y in 1..19 {
        assert_eq!(fb.get(0, y).unwrap().ch, '│');
        assert_eq!(fb.get(59, y).unwrap().ch, '│');
    }
}

#[test]
fn opening_shot_requests_the_bell_once() {
    let config = SceneConfig {
        star_count: 0,
        bell: true,
        ..SceneConfig::default()
    };
    let mut screen = Screen::with_border(40, 20);
    let mut scheduler = build_scene(&config, Vec::new(), screen.rows(), screen.cols());

    scheduler.tick(&mut screen, Controls::NONE);
    assert!(screen.take_bell());
    for _ in 0..30 {
        scheduler.tick(&mut screen, Controls::NONE);
        assert!(!screen.take_bell());
    }
}
