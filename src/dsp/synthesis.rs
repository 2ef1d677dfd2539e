use std::f64::consts::TAU;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One sinusoid of the input signal: `amplitude · sin(2π·frequency·t + phase)`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SinusoidSpec {
    /// Frequency in Hz
    pub frequency: f64,
    pub amplitude: f64,
    /// Phase in radians
    pub phase: f64,
}

impl SinusoidSpec {
    pub fn new(frequency: f64, amplitude: f64, phase: f64) -> Self {
        Self {
            frequency,
            amplitude,
            phase,
        }
    }

    /// Value of this sinusoid at time `t` seconds
    #[inline]
    pub fn value_at(&self, t: f64) -> f64 {
        self.amplitude * (TAU * self.frequency * t + self.phase).sin()
    }

    pub fn is_finite(&self) -> bool {
        self.frequency.is_finite() && self.amplitude.is_finite() && self.phase.is_finite()
    }
}

impl Default for SinusoidSpec {
    /// 1 Hz, unit amplitude, zero phase
    fn default() -> Self {
        Self::new(1.0, 1.0, 0.0)
    }
}

/// Sample the superposition of `sinusoids` at `t = i·step` for `i` in `0..sample_count`.
///
/// An empty list yields silence. Inputs are assumed finite; filtering happens
/// in [`crate::io`].
pub fn synthesize(sinusoids: &[SinusoidSpec], sample_count: usize, step: f64) -> Vec<f64> {
    (0..sample_count)
        .map(|i| {
            let t = i as f64 * step;
            sinusoids.iter().map(|s| s.value_at(t)).sum()
        })
        .collect()
}
