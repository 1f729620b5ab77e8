use criterion::{black_box, criterion_group, criterion_main, Criterion};
use space_scene::core::{draw_frame, Frame, MemorySurface};
use space_scene::engine::{build_scene, SceneConfig};
use space_scene::types::Controls;

fn rocket() -> Vec<Frame> {
    vec![
        Frame::parse("  .\n .'.\n |o|\n.'o'.\n|.-.|\n'   '\n ( )\n  )\n ( )"),
        Frame::parse("  .\n .'.\n |o|\n.'o'.\n|.-.|\n'   '\n  )\n ( )\n  ("),
    ]
}

fn bench_tick(c: &mut Criterion) {
    let config = SceneConfig {
        star_count: 150,
        seed: 12345,
        ..SceneConfig::default()
    };
    let mut scheduler = build_scene(&config, rocket(), 50, 200);
    let mut surface = MemorySurface::new(50, 200);

    c.bench_function("scheduler_tick_150_stars", |b| {
        b.iter(|| {
            scheduler.tick(&mut surface, black_box(Controls::new(0, 1, false)));
        })
    });
}

fn bench_draw_erase(c: &mut Criterion) {
    let frames = rocket();
    let frame = &frames[0];
    let mut surface = MemorySurface::new(50, 200);

    c.bench_function("draw_erase_rocket", |b| {
        b.iter(|| {
            draw_frame(&mut surface, black_box(20), black_box(100), frame, false);
            draw_frame(&mut surface, black_box(20), black_box(100), frame, true);
        })
    });
}

criterion_group!(benches, bench_tick, bench_draw_erase);
criterion_main!(benches);
