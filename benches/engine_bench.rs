//! Benchmarks for the CPU-side scene work done every frame.
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use ringlet::choreography;
use ringlet::engine::Engine;
use ringlet::field::ParticleField;
use ringlet::page::Page;
use ringlet::spawn::SpawnContext;
use ringlet::visuals::{heart_mesh, torus};

fn bench_field_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("field_tick");

    for count in [80usize, 800, 8000] {
        let particles = SpawnContext::seeded(0).spawn_particles(count);
        let mut field = ParticleField::new(particles);
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, _| {
            b.iter(|| {
                field.tick();
                black_box(field.particles().len())
            })
        });
    }

    group.finish();
}

fn bench_timeline_apply(c: &mut Criterion) {
    let page = Page::standard();
    let mut engine = Engine::new().with_seed(0).with_page(&page);
    choreography::install(engine.timeline_mut(), &page);
    engine.set_scroll(2500.0);

    let viewport = engine.viewport();
    let timeline = engine.timeline();
    let mut rings = engine.rings().clone();

    c.bench_function("timeline_apply", |b| {
        b.iter(|| {
            timeline.apply(&viewport, black_box(&mut rings));
        })
    });
}

fn bench_engine_tick(c: &mut Criterion) {
    let page = Page::standard();
    let mut engine = Engine::new().with_seed(0).with_page(&page);
    choreography::install(engine.timeline_mut(), &page);
    engine.set_scroll(2500.0);

    let mut now = 0.0_f32;
    c.bench_function("engine_tick", |b| {
        b.iter(|| {
            now += 1.0 / 60.0;
            engine.tick(black_box(now));
        })
    });
}

fn bench_mesh_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("mesh_generation");

    group.bench_function("torus_32x100", |b| {
        b.iter(|| black_box(torus(1.2, 0.15, 32, 100)))
    });
    group.bench_function("heart_8", |b| b.iter(|| black_box(heart_mesh(8))));

    group.finish();
}

criterion_group!(
    benches,
    bench_field_tick,
    bench_timeline_apply,
    bench_engine_tick,
    bench_mesh_generation
);
criterion_main!(benches);
