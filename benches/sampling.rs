use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use orbit_plotter::{
    body_presets, time_range, Ephemeris, Epoch, MeanElementsEphemeris, Orbit, Plane, PlotOrbit,
};
use std::{hint::black_box, sync::Arc};

const SAMPLES: usize = 1024;

fn criterion_benchmark(c: &mut Criterion) {
    let earth = Arc::new(body_presets::planets::earth());
    let new_orbit = |eccentricity: f64| {
        Orbit::new(
            eccentricity,
            8_000.0,
            0.9,
            0.4,
            1.2,
            2.0,
            earth.clone(),
            Epoch::J2000,
            Plane::EarthEquator,
        )
    };

    let mut group = c.benchmark_group("orbit_sampling");
    group.throughput(Throughput::Elements(SAMPLES as u64));

    for (name, eccentricity) in [
        ("circular", 0.0),
        ("elliptic", 0.7),
        ("parabolic", 1.0),
        ("hyperbolic", 2.5),
    ] {
        let orbit = new_orbit(eccentricity);
        group.bench_function(name, |b| {
            b.iter(|| black_box(&orbit).sample(black_box(SAMPLES)))
        });
    }

    group.finish();

    let mars = body_presets::planets::mars();
    let start = Epoch::from_calendar(2020, 1, 1, 0, 0, 0.0);
    let epochs = time_range(start, start + 687.0 * 86_400.0, SAMPLES);

    let mut group = c.benchmark_group("ephemeris_sampling");
    group.throughput(Throughput::Elements(SAMPLES as u64));

    group.bench_function("mean elements", |b| {
        b.iter(|| {
            MeanElementsEphemeris.sample(
                black_box(&mars),
                black_box(&epochs),
                black_box(Plane::EarthEquator),
            )
        })
    });

    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
