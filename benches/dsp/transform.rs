//! Benchmarks for the direct transform.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use saavy_fourier::dsp::{synthesize, transform};

use super::chord;
use crate::SAMPLE_COUNTS;

pub fn bench_transform(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/transform");
    // O(N²): keep the sample count low at the top end
    group.sample_size(20);

    for &n in SAMPLE_COUNTS {
        let samples = synthesize(&chord(), n, 0.01);
        group.bench_with_input(BenchmarkId::new("direct", n), &n, |b, _| {
            b.iter(|| transform(black_box(&samples)))
        });
    }

    group.finish();
}
