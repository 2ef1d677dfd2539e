use std::f64::consts::TAU;

use rustfft::num_complex::Complex;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/*
Discrete Fourier Transform
==========================

The transform rewrites N time-domain samples as N complex coefficients, one
per frequency bin. Each coefficient says how much of a particular rotation
frequency is present in the signal, and at what starting angle.

Vocabulary
----------

  bin         One output index k in 0..N. Bin k completes k full cycles
              across the N-sample window.

  resolution  Spacing between bins in Hz: (1/Δt)·(1/N). With the default
              N = 1000, Δt = 0.01 each bin is 0.1 Hz wide.

  DC          Bin 0. The mean of the signal (a constant offset).

  mirror      For a real input, bin N-k is the complex conjugate of bin k.
              The upper half repeats the lower half and carries nothing new.


The Math
--------

    X[k] = (1/N) · Σ x[n] · e^(-i·2π·k·n/N)        n = 0..N-1

Split into real and imaginary parts:

    re[k] =  (1/N) · Σ x[n] · cos(2π·k·n/N)
    im[k] = -(1/N) · Σ x[n] · sin(2π·k·n/N)

Then for display and epicycles:

    amplitude = √(re² + im²)        radius of the rotating vector
    phase     = atan2(im, re)       starting angle of the vector


Scaling
-------

Dividing by N makes a pure sine of amplitude A show up as A/2 in bin k and
A/2 in the mirror bin N-k. After mirror removal only one half survives, so a
single-sided coefficient carries half the input amplitude. The phase of a
sine also lands a quarter turn behind its input phase, because
sin(θ) = cos(θ - π/2). The epicycle renderer compensates with its π/2
rotation offset.


Cost
----

This is the direct form: N outputs × N inputs = O(N²) multiply-adds. At
N = 1000 that is one million terms, fast enough to run on every edit.
*/

/// One bin of the transform output.
///
/// `bin` is the raw index. It becomes a frequency in Hz only once, inside
/// [`crate::dsp::reduce`], which produces a different type.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpectralCoefficient {
    pub re: f64,
    pub im: f64,
    pub bin: usize,
    pub amplitude: f64,
    pub phase: f64,
}

impl SpectralCoefficient {
    /// Build from a complex value, deriving amplitude and phase
    pub fn from_complex(bin: usize, value: Complex<f64>) -> Self {
        Self {
            re: value.re,
            im: value.im,
            bin,
            amplitude: value.norm(),
            phase: value.arg(),
        }
    }

    pub fn complex(&self) -> Complex<f64> {
        Complex::new(self.re, self.im)
    }

    pub fn is_finite(&self) -> bool {
        self.re.is_finite() && self.im.is_finite()
    }
}

/// Direct discrete Fourier transform of `samples`.
///
/// Output length always equals input length; bin `k` sits at index `k`.
pub fn transform(samples: &[f64]) -> Vec<SpectralCoefficient> {
    let len = samples.len();
    let p = if len > 0 { TAU / len as f64 } else { 0.0 };
    let scale = if len > 0 { 1.0 / len as f64 } else { 0.0 };

    (0..len)
        .map(|k| {
            let mut acc = Complex::new(0.0, 0.0);
            for (n, &x) in samples.iter().enumerate() {
                // k·n mod N keeps the angle small without changing it
                let turn = ((k as u64 * n as u64) % len as u64) as f64;
                let angle = p * turn;
                acc.re += x * angle.cos();
                acc.im -= x * angle.sin();
            }

            let coefficient = SpectralCoefficient::from_complex(k, acc * scale);
            debug_assert!(
                coefficient.is_finite(),
                "non-finite coefficient at bin {}: input contained NaN or infinity",
                k
            );
            coefficient
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dsp::synthesis::{synthesize, SinusoidSpec};
    use rustfft::FftPlanner;

    #[test]
    fn test_output_length_matches_input() {
        for len in [0, 1, 2, 7, 64] {
            let samples = vec![0.5; len];
            assert_eq!(transform(&samples).len(), len);
        }
    }

    #[test]
    fn test_bins_are_indexed() {
        let spectrum = transform(&[1.0, 2.0, 3.0, 4.0]);
        for (i, c) in spectrum.iter().enumerate() {
            assert_eq!(c.bin, i);
        }
    }

    #[test]
    fn test_constant_signal_is_pure_dc() {
        let spectrum = transform(&vec![3.0; 32]);
        assert!((spectrum[0].re - 3.0).abs() < 1e-12);
        assert!(spectrum[0].im.abs() < 1e-12);
        assert!(spectrum[0].phase.abs() < 1e-12);
        for c in &spectrum[1..] {
            assert!(c.amplitude < 1e-12, "bin {} leaked {}", c.bin, c.amplitude);
        }
    }

    #[test]
    fn test_zero_signal_phase_convention() {
        // atan2(0, 0) = 0 on every supported platform
        let spectrum = transform(&[0.0; 8]);
        for c in &spectrum {
            assert_eq!(c.amplitude, 0.0);
            assert_eq!(c.phase, 0.0);
        }
    }

    #[test]
    fn test_single_sine_half_amplitude() {
        let samples = synthesize(&[SinusoidSpec::new(1.0, 1.0, 0.0)], 1000, 0.01);
        let spectrum = transform(&samples);

        // 1 Hz over a 10 s window lands on bin 10
        let fundamental = spectrum[10];
        assert!((fundamental.amplitude - 0.5).abs() < 1e-9);
        assert!((fundamental.phase + std::f64::consts::FRAC_PI_2).abs() < 1e-9);
        assert!((spectrum[990].amplitude - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_matches_fft() {
        let samples = synthesize(
            &[
                SinusoidSpec::new(2.0, 1.0, 0.4),
                SinusoidSpec::new(5.3, 0.3, -1.2),
                SinusoidSpec::new(0.0, 0.7, 1.0),
            ],
            256,
            0.01,
        );
        let direct = transform(&samples);

        let mut buffer: Vec<Complex<f64>> = samples.iter().map(|&x| Complex::new(x, 0.0)).collect();
        let mut planner = FftPlanner::new();
        planner.plan_fft_forward(buffer.len()).process(&mut buffer);

        let scale = 1.0 / samples.len() as f64;
        for (d, f) in direct.iter().zip(buffer.iter()) {
            let f = *f * scale;
            assert!((d.re - f.re).abs() < 1e-9, "bin {} re {} vs {}", d.bin, d.re, f.re);
            assert!((d.im - f.im).abs() < 1e-9, "bin {} im {} vs {}", d.bin, d.im, f.im);
        }
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "non-finite coefficient")]
    fn test_nan_sample_is_fatal() {
        transform(&[1.0, f64::NAN, 0.0]);
    }

    #[test]
    fn test_mirror_symmetry() {
        let samples: Vec<f64> = (0..50).map(|i| ((i * 37 % 11) as f64 - 5.0) * 0.1).collect();
        let spectrum = transform(&samples);
        let n = spectrum.len();

        for k in 1..n / 2 {
            let low = spectrum[k];
            let high = spectrum[n - k];
            assert!((low.re - high.re).abs() < 1e-9);
            assert!((low.im + high.im).abs() < 1e-9);
        }
    }
}
