//! Benchmarks for pipeline stages.

mod reduce;
mod synthesis;
mod transform;

pub use reduce::bench_reduce;
pub use synthesis::bench_synthesis;
pub use transform::bench_transform;

use saavy_fourier::SinusoidSpec;

/// A handful of sinusoids, some sharing a bin
pub fn chord() -> Vec<SinusoidSpec> {
    vec![
        SinusoidSpec::new(1.0, 1.0, 0.0),
        SinusoidSpec::new(2.5, 0.5, 0.3),
        SinusoidSpec::new(2.5, 0.25, -1.0),
        SinusoidSpec::new(7.3, 0.8, 1.2),
        SinusoidSpec::new(0.0, 0.4, 1.5),
    ]
}
