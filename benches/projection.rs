use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use glam::DVec3;
use orbit_plotter::{
    backends::FigureBackend, body_presets, Epoch, Frame, Orbit, OrbitPlotter2D, Plane,
    PlotterConfig, PlotOrbit,
};
use std::{hint::black_box, sync::Arc};

const POLL_ITERS: u64 = 1024;

fn criterion_benchmark(c: &mut Criterion) {
    let earth = Arc::new(body_presets::planets::earth());
    let orbit = Orbit::new(
        0.3,
        8_000.0,
        0.9,
        0.4,
        1.2,
        0.0,
        earth,
        Epoch::J2000,
        Plane::EarthEquator,
    );
    let frame = Frame::from_orbit(&orbit).expect("perifocal frames are orthonormal");

    let points = (0..POLL_ITERS)
        .map(|i| {
            let angle = 2.0 * std::f64::consts::PI * (i as f64) / (POLL_ITERS as f64);
            DVec3::new(angle.cos(), angle.sin(), 0.5 * angle.sin()) * 10_000.0
        })
        .collect::<Box<_>>();
    let points = black_box(points);

    let mut group = c.benchmark_group("frame_projection");
    group.throughput(Throughput::Elements(POLL_ITERS));

    group.bench_function("project", |b| {
        b.iter(|| black_box(&frame).project(black_box(&points)))
    });

    group.finish();

    let other = orbit.change_plane(Plane::EarthEcliptic);

    let mut group = c.benchmark_group("frame_change");

    group.bench_function("redraw 8 orbits", |b| {
        b.iter_batched(
            || {
                let mut plotter =
                    OrbitPlotter2D::new(FigureBackend::new(), PlotterConfig::default())
                        .expect("default config is valid");
                for i in 0..8 {
                    let orbit = orbit.propagate(i as f64 * 600.0);
                    plotter
                        .plot(&orbit, None, None, false)
                        .expect("figure backend draws everything");
                }
                plotter
            },
            |mut plotter| {
                plotter
                    .set_orbit_frame(black_box(&other))
                    .expect("figure backend redraws everything");
                plotter
            },
            criterion::BatchSize::SmallInput,
        )
    });

    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
