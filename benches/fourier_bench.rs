//! Benchmarks for the Fourier pipeline and the epicycle frame loop.
//!
//! Run with: cargo bench
//!
//! The transform is the direct O(N²) form, so it dominates every edit.
//! Reference budget at 60 fps: one frame = 16.7ms.
//!   - 1000 samples (default) should stay well under one frame
//!   - a simulator tick should cost microseconds
//!
//! Benchmark groups:
//!   - dsp/*        Pipeline stages (synthesis, transform, reduction)
//!   - scenarios/*  Full edit-and-animate paths

use criterion::{criterion_group, criterion_main};

mod dsp;
mod scenarios;

/// Sample counts around the default window of 1000.
pub const SAMPLE_COUNTS: &[usize] = &[250, 500, 1000, 2000];

criterion_group!(
    benches,
    // Pipeline stages
    dsp::bench_synthesis,
    dsp::bench_transform,
    dsp::bench_reduce,
    // Real-world scenarios
    scenarios::bench_edit,
    scenarios::bench_animation,
);
criterion_main!(benches);
