//! Benchmarks for sum-of-sinusoids synthesis.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use saavy_fourier::dsp::synthesize;

use super::chord;
use crate::SAMPLE_COUNTS;

pub fn bench_synthesis(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/synthesis");
    let sinusoids = chord();

    for &n in SAMPLE_COUNTS {
        group.bench_with_input(BenchmarkId::new("chord", n), &n, |b, &n| {
            b.iter(|| synthesize(black_box(&sinusoids), n, 0.01))
        });
    }

    group.finish();
}
