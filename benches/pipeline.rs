//! Benchmarks for series evaluation and the full ephemeris pipeline
//!
//!   cargo bench --bench pipeline
//!   cargo bench --bench pipeline -- pipeline/ecliptic

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use solarfield::constants::J2000;
use solarfield::context::{AstroConfig, AstroContext};
use solarfield::framelib::Frame;
use solarfield::planetlib::Body;
use solarfield::precession::MeanTrue;
use solarfield::series;
use solarfield::time::TimeScale;
use solarfield::{compute_ephemeris, EphemerisRequest};

fn bench_series(c: &mut Criterion) {
    let mut group = c.benchmark_group("series");
    for body in [Body::Mercury, Body::Earth, Body::Neptune, Body::Pluto, Body::Moon] {
        group.bench_function(body.name(), |b| {
            b.iter(|| series::evaluate(black_box(body), black_box(J2000 + 1234.5), 0.0, true))
        });
    }
    group.finish();
}

fn bench_mean_true(c: &mut Criterion) {
    c.bench_function("mean_true/of_date", |b| {
        b.iter(|| MeanTrue::new(black_box(J2000 + 8000.0), J2000))
    });
}

fn bench_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline");
    for frame in [Frame::HeliocentricGeometric, Frame::Ecliptic] {
        group.bench_function(frame.label(), |b| {
            b.iter(|| {
                let mut ctx = AstroContext::new(
                    black_box(J2000),
                    TimeScale::Utc,
                    &Body::ALL,
                    AstroConfig::default(),
                )
                .unwrap();
                ctx.calc_body_coords_default(frame, true).unwrap();
                black_box(ctx.bodies()[0].coords)
            })
        });
    }

    let config = AstroConfig::default();
    let request = EphemerisRequest::from_config(
        Body::ALL.to_vec(),
        (0..100).map(|i| J2000 + i as f64).collect(),
        &config,
    );
    group.bench_function("batch_100", |b| {
        b.iter(|| compute_ephemeris(black_box(&request), &config).unwrap())
    });
    group.finish();
}

criterion_group!(benches, bench_series, bench_mean_true, bench_pipeline);
criterion_main!(benches);
