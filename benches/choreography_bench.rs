#![allow(missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use genesis::camera::target_at;
use genesis::engine::GenesisEngine;
use genesis::layers::particles::{derive, particle_position};
use genesis::layers::{LayerRegistry, PointCloud};
use genesis::options::{GeometryOptions, Options};
use genesis::timeline::FrameSnapshot;

fn camera_path_benchmark(c: &mut Criterion) {
    let _ = c.bench_function("camera_target_at", |b| {
        b.iter(|| black_box(target_at(black_box(0.67))))
    });
}

fn layer_update_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("layer_update");

    for progress in [0.1_f32, 0.3, 0.5, 0.7, 0.9] {
        let mut registry = LayerRegistry::new(&GeometryOptions::default());
        let frame = FrameSnapshot::at(progress, 12.0);
        let _ = group.bench_function(format!("p{progress}"), |b| {
            b.iter(|| black_box(registry.update(black_box(&frame))))
        });
    }
    group.finish();
}

fn engine_frame_benchmark(c: &mut Criterion) {
    let mut engine = GenesisEngine::new(Options::default());
    let _ = c.bench_function("engine_frame", |b| {
        b.iter(|| black_box(engine.frame(black_box(1.0 / 60.0))))
    });
}

fn particle_cpu_benchmark(c: &mut Criterion) {
    let cloud: PointCloud =
        genesis::layers::geometry::halo_and_helix(30_000, 1);
    let params = derive(0.3);

    let _ = c.bench_function("particle_positions_30k", |b| {
        b.iter(|| {
            cloud
                .positions
                .iter()
                .zip(&cloud.targets)
                .map(|(&rest, &target)| {
                    particle_position(rest, target, &params, 4.0)
                })
                .fold(0.0, |acc, p| acc + p.x)
        })
    });
}

criterion_group!(
    benches,
    camera_path_benchmark,
    layer_update_benchmark,
    engine_frame_benchmark,
    particle_cpu_benchmark
);
criterion_main!(benches);
