//! Benchmarks for the per-frame update and draw fan-out.
//!
//! Run with: `cargo bench`

use cauldron::prelude::*;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

/// A scene that has run long enough to reach its steady population.
fn warm_scene(smoke_period: f32) -> Scene {
    let mut scene = Scene::new(SceneConfig::default()).unwrap();
    scene.set_spawn_period(ParticleKind::Smoke, smoke_period);
    for _ in 0..600 {
        scene.update(1.0 / 60.0);
    }
    scene
}

fn bench_update(c: &mut Criterion) {
    let mut group = c.benchmark_group("scene_update");

    for period in [0.01f32, 0.05, 0.5] {
        group.bench_with_input(BenchmarkId::from_parameter(period), &period, |b, &period| {
            let mut scene = warm_scene(period);
            b.iter(|| black_box(scene.update(1.0 / 60.0)))
        });
    }

    group.finish();
}

fn bench_draw(c: &mut Criterion) {
    let mut group = c.benchmark_group("scene_draw");

    for period in [0.01f32, 0.05, 0.5] {
        group.bench_with_input(BenchmarkId::from_parameter(period), &period, |b, &period| {
            let scene = warm_scene(period);
            let mut batch = InstanceBatch::new();
            b.iter(|| {
                scene.draw(&mut batch);
                black_box(batch.billboard_bytes().len())
            })
        });
    }

    group.finish();
}

fn bench_remove_expired(c: &mut Criterion) {
    c.bench_function("remove_expired_1000", |b| {
        b.iter_batched(
            || {
                let mut store = ParticleStore::new(3.0);
                for i in 0..1000 {
                    store.spawn_billboard(i as f32 * 0.005);
                }
                store
            },
            |mut store| black_box(store.remove_expired(5.0)),
            criterion::BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, bench_update, bench_draw, bench_remove_expired);
criterion_main!(benches);
