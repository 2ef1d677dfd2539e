//! Sampling configuration shared by every pipeline stage.

use std::f64::consts::TAU;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{DEFAULT_SAMPLE_COUNT, DEFAULT_STEP};

/// Sampling window for one synthesis pass.
///
/// `sample_count` and `step` together fix the window length
/// (`sample_count * step` seconds) and the bin spacing of the transform.
/// Changing either one means re-running the whole pipeline.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FourierConfig {
    /// Number of samples (N)
    pub sample_count: usize,
    /// Time between samples in seconds (Δt)
    pub step: f64,
}

impl FourierConfig {
    pub fn new(sample_count: usize, step: f64) -> Self {
        Self { sample_count, step }
    }

    /// Set the number of samples
    pub fn with_sample_count(mut self, sample_count: usize) -> Self {
        self.sample_count = sample_count;
        self
    }

    /// Set the sampling step in seconds
    pub fn with_step(mut self, step: f64) -> Self {
        self.step = step;
        self
    }

    /// Samples per second (1 / Δt)
    pub fn sample_rate(&self) -> f64 {
        1.0 / self.step
    }

    /// Length of the sampling window in seconds
    pub fn window_duration(&self) -> f64 {
        self.sample_count as f64 * self.step
    }

    /// Spacing between adjacent bins in Hz: (1/Δt)·(1/N)
    pub fn resolution_hz(&self) -> f64 {
        if self.sample_count == 0 {
            return 0.0;
        }
        (1.0 / self.step) * (1.0 / self.sample_count as f64)
    }

    /// Highest bin kept after mirror removal
    pub fn nyquist_bin(&self) -> usize {
        self.sample_count / 2
    }

    /// Per-frame decrement of the epicycle time cursor (2π/N).
    ///
    /// Controls animation speed only; unrelated to Δt.
    pub fn animation_step(&self) -> f64 {
        if self.sample_count == 0 {
            return 0.0;
        }
        TAU / self.sample_count as f64
    }
}

impl Default for FourierConfig {
    fn default() -> Self {
        Self {
            sample_count: DEFAULT_SAMPLE_COUNT,
            step: DEFAULT_STEP,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FourierConfig::default();
        assert_eq!(config.sample_count, 1000);
        assert!((config.step - 0.01).abs() < 1e-12);
        assert!((config.sample_rate() - 100.0).abs() < 1e-9);
        assert!((config.window_duration() - 10.0).abs() < 1e-9);
        assert!((config.resolution_hz() - 0.1).abs() < 1e-12);
        assert_eq!(config.nyquist_bin(), 500);
    }

    #[test]
    fn test_animation_step_ignores_sampling_step() {
        let a = FourierConfig::default();
        let b = FourierConfig::default().with_step(0.5);
        assert!((a.animation_step() - TAU / 1000.0).abs() < 1e-15);
        assert_eq!(a.animation_step(), b.animation_step());
    }

    #[test]
    fn test_empty_window_is_total() {
        let config = FourierConfig::new(0, 0.01);
        assert_eq!(config.resolution_hz(), 0.0);
        assert_eq!(config.animation_step(), 0.0);
        assert_eq!(config.nyquist_bin(), 0);
    }
}
