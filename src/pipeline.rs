//! Synthesize → transform → reduce, in one synchronous call.

use std::time::Instant;

use log::{debug, trace};

use crate::config::FourierConfig;
use crate::dsp::{reduce, synthesize, transform, ReducedSpectrum, SinusoidSpec, SpectralCoefficient};

/// Everything one pipeline run produces.
///
/// The raw spectrum keeps bin indices; only `reduced` carries frequencies
/// in Hz.
#[derive(Debug, Clone)]
pub struct Analysis {
    pub config: FourierConfig,
    pub samples: Vec<f64>,
    pub spectrum: Vec<SpectralCoefficient>,
    pub reduced: ReducedSpectrum,
}

/// Run the full pipeline for `sinusoids` over the window in `config`.
///
/// O(N²) in the sample count; treat as atomic from the caller's side.
pub fn analyze(sinusoids: &[SinusoidSpec], config: &FourierConfig) -> Analysis {
    let started = Instant::now();

    let samples = synthesize(sinusoids, config.sample_count, config.step);
    trace!("synthesized {} samples from {} sinusoids", samples.len(), sinusoids.len());

    let spectrum = transform(&samples);
    let reduced = reduce(&spectrum, config);

    debug!(
        "analysis of {} sinusoids at N={} Δt={} took {:?}: {} components",
        sinusoids.len(),
        config.sample_count,
        config.step,
        started.elapsed(),
        reduced.len()
    );

    Analysis {
        config: *config,
        samples,
        spectrum,
        reduced,
    }
}
