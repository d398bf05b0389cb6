//! Benchmark bodies for signal sampling, winding, and the sweep.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use fourier_winding::signal::{CompositeWave, Signal, SineWave};
use fourier_winding::spectrum::sweep;
use fourier_winding::winding::wind_shape;

use crate::STEPS;

fn two_tone() -> CompositeWave {
    let mut composite = CompositeWave::new();
    composite.push(Box::new(
        SineWave::from_frequency(2.0, 1.0, 0.0, 0.0).expect("valid frequency"),
    ));
    composite.push(Box::new(
        SineWave::from_frequency(3.0, 0.5, 0.0, 0.0).expect("valid frequency"),
    ));
    composite
}

pub fn bench_sample(c: &mut Criterion) {
    let mut group = c.benchmark_group("signal/sample");

    for &step in STEPS {
        let sine = SineWave::from_frequency(2.0, 1.0, 0.0, 0.0).expect("valid frequency");
        group.bench_with_input(BenchmarkId::new("sine", step), &step, |b, &step| {
            b.iter(|| sine.sample(black_box(0.0), black_box(10.0), black_box(step)))
        });

        let composite = two_tone();
        group.bench_with_input(BenchmarkId::new("composite2", step), &step, |b, &step| {
            b.iter(|| composite.sample(black_box(0.0), black_box(10.0), black_box(step)))
        });
    }

    group.finish();
}

pub fn bench_wind_shape(c: &mut Criterion) {
    let mut group = c.benchmark_group("winding/wind_shape");
    let composite = two_tone();

    for &step in STEPS {
        group.bench_with_input(BenchmarkId::new("composite2", step), &step, |b, &step| {
            b.iter(|| {
                wind_shape(
                    black_box(&composite),
                    black_box(2.0),
                    black_box(0.0),
                    black_box(10.0),
                    black_box(step),
                )
            })
        });
    }

    group.finish();
}

pub fn bench_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("spectrum/sweep");
    let composite = two_tone();

    // O(F·S): each step drives both the frequency count and the shape size
    for &step in STEPS {
        group.bench_with_input(BenchmarkId::new("composite2", step), &step, |b, &step| {
            b.iter(|| {
                sweep(
                    black_box(&composite),
                    black_box(1.0),
                    black_box(10.0),
                    black_box(step),
                )
            })
        });
    }

    group.finish();
}
