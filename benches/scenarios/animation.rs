//! Benchmarks for per-frame epicycle evaluation.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use saavy_fourier::{analyze, EpicycleSimulator, FourierConfig, SinusoidSpec};

pub fn bench_animation(c: &mut Criterion) {
    let mut group = c.benchmark_group("scenarios/animation");
    let config = FourierConfig::default();

    for &rows in &[1usize, 8, 64] {
        let sinusoids: Vec<SinusoidSpec> = (1..=rows)
            .map(|i| SinusoidSpec::new(i as f64 * 0.3, 1.0 / i as f64, 0.0))
            .collect();
        let reduced = analyze(&sinusoids, &config).reduced;
        let mut simulator = EpicycleSimulator::new(&reduced);

        group.bench_with_input(BenchmarkId::new("tick", reduced.len()), &rows, |b, _| {
            b.iter(|| {
                black_box(simulator.tick());
            })
        });
    }

    group.finish();
}
