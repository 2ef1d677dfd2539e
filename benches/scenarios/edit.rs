//! Benchmarks for the full pipeline run triggered by an input edit.

use std::hint::black_box;

use criterion::Criterion;
use saavy_fourier::{analyze, EpicycleSimulator, FourierConfig, SinusoidSpec};

pub fn bench_edit(c: &mut Criterion) {
    let mut group = c.benchmark_group("scenarios/edit");
    group.sample_size(20);
    let config = FourierConfig::default();

    // Single default row, as on startup
    let single = [SinusoidSpec::default()];
    group.bench_function("startup", |b| b.iter(|| analyze(black_box(&single), &config)));

    // Edit with several rows, then swap the chain
    let rows: Vec<SinusoidSpec> = (1..=8)
        .map(|i| SinusoidSpec::new(i as f64 * 0.5, 1.0 / i as f64, 0.1 * i as f64))
        .collect();
    let mut simulator = EpicycleSimulator::new(&analyze(&single, &config).reduced);
    group.bench_function("eight_rows", |b| {
        b.iter(|| {
            let analysis = analyze(black_box(&rows), &config);
            simulator.set_spectrum(&analysis.reduced);
        })
    });

    group.finish();
}
