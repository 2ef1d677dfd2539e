//! Benchmarks for spectrum reduction.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use saavy_fourier::dsp::{reduce, synthesize, transform};
use saavy_fourier::FourierConfig;

use super::chord;
use crate::SAMPLE_COUNTS;

pub fn bench_reduce(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/reduce");

    for &n in SAMPLE_COUNTS {
        let config = FourierConfig::default().with_sample_count(n);
        let spectrum = transform(&synthesize(&chord(), n, config.step));

        group.bench_with_input(BenchmarkId::new("chord", n), &n, |b, _| {
            b.iter(|| reduce(black_box(&spectrum), black_box(&config)))
        });
    }

    group.finish();
}
