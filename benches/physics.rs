//! Benchmarks for springy world stepping and input handling.

use core::time::Duration;

use criterion::{criterion_group, criterion_main, Criterion};
use springy::*;

fn bench_pendulum(c: &mut Criterion) {
    c.bench_function("pendulum_1000_steps", |b| {
        b.iter(|| {
            let mut world: World<f32> = scenario::pendulum(WorldConfig::new()).unwrap();
            for _ in 0..1000 {
                world.step();
            }
            world.particle_count()
        });
    });
}

fn bench_rope(c: &mut Criterion) {
    c.bench_function("rope_200_segments_60_steps", |b| {
        b.iter(|| {
            let mut world: World<f32> = scenario::rope(
                WorldConfig::new(),
                Vec2::new(0.0, 100.0),
                Vec2::new(1000.0, 100.0),
                200,
                0.002,
            )
            .unwrap();
            for _ in 0..60 {
                world.step();
            }
            world.spring_count()
        });
    });
}

fn bench_sandbox_session(c: &mut Criterion) {
    c.bench_function("sandbox_100_clicks_then_60_ticks", |b| {
        b.iter(|| {
            let config = SandboxConfig::new();
            let mut sandbox: Sandbox<f32> = Sandbox::new(World::new(config.world), config);
            let mut canvas = DrawList::new();
            let mut now = Duration::ZERO;
            for i in 0..100 {
                let at = Vec2::new((i % 10) as f32 * 120.0, (i / 10) as f32 * 120.0);
                sandbox.push_event(InputEvent::PointerDown { button: MouseButton::Left, position: at, at: now });
                sandbox.push_event(InputEvent::PointerUp { button: MouseButton::Left, position: at, at: now });
            }
            for _ in 0..60 {
                now += config.tick_interval;
                sandbox.tick(now, &mut canvas);
            }
            canvas.commands.len()
        });
    });
}

criterion_group!(benches, bench_pendulum, bench_rope, bench_sandbox_session);
criterion_main!(benches);
