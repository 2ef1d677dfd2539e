//! Spectrum reduction: from N raw bins to the handful that matter.

use std::collections::HashMap;
use std::f64::consts::{FRAC_PI_2, PI, TAU};

use log::debug;
use rustfft::num_complex::Complex;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::config::FourierConfig;
use crate::dsp::dft::SpectralCoefficient;
use crate::dsp::synthesis::SinusoidSpec;
use crate::SIGNIFICANCE_THRESHOLD;

/*
| stage         | keeps                                  | keyed on          |
| ------------- | -------------------------------------- | ----------------- |
| mirrors       | bins 0..=N/2                           | position          |
| significance  | |amplitude| >= 1e-4, plus bin 0 (DC)   | amplitude, bin    |
| combine       | one entry per bin, complex sum         | raw bin (integer) |
| normalize     | everything; bin -> Hz                  | -                 |
| sort          | everything; ascending Hz               | frequency         |

Order matters. Significance must see only the lower half, and combination
must key on exact integer bins before they turn into floating-point Hz.
*/

/// A reduced spectrum entry with its frequency expressed in Hz.
///
/// Only [`normalize`] creates these, so a frequency can never be scaled twice.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Component {
    pub re: f64,
    pub im: f64,
    /// Raw bin index this component came from
    pub bin: usize,
    /// Frequency in Hz
    pub frequency: f64,
    pub amplitude: f64,
    pub phase: f64,
}

impl Component {
    pub fn complex(&self) -> Complex<f64> {
        Complex::new(self.re, self.im)
    }

    /// Angle of this component's vector at animation time `time`
    #[inline]
    pub fn angle_at(&self, time: f64, rotation_offset: f64) -> f64 {
        TAU * self.frequency * time + self.phase + rotation_offset
    }
}

/// The significant, de-duplicated, normalized spectrum in ascending frequency
/// order, together with the window it was computed from.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct ReducedSpectrum {
    components: Vec<Component>,
    config: FourierConfig,
}

impl ReducedSpectrum {
    /// A spectrum with no components
    pub fn empty(config: FourierConfig) -> Self {
        Self {
            components: Vec::new(),
            config,
        }
    }

    pub fn components(&self) -> &[Component] {
        &self.components
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Component> {
        self.components.iter()
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    pub fn config(&self) -> &FourierConfig {
        &self.config
    }

    /// Component at exactly this bin, if it survived reduction
    pub fn find_bin(&self, bin: usize) -> Option<&Component> {
        self.components.iter().find(|c| c.bin == bin)
    }

    /// Largest amplitude, or 0.0 when empty
    pub fn max_amplitude(&self) -> f64 {
        self.components
            .iter()
            .map(|c| c.amplitude.abs())
            .fold(0.0, f64::max)
    }

    /// Components ordered largest circle first (stable for equal radii)
    pub fn by_descending_amplitude(&self) -> Vec<Component> {
        let mut sorted = self.components.clone();
        sorted.sort_by(|a, b| b.amplitude.abs().total_cmp(&a.amplitude.abs()));
        sorted
    }

    /// Map each component back to the sinusoid that would produce it.
    ///
    /// Undoes the single-sided scaling (×2 except at DC and Nyquist) and the
    /// quarter-turn phase lag of a sine against the cosine basis.
    pub fn estimate_sinusoids(&self) -> Vec<SinusoidSpec> {
        let nyquist = self.config.sample_count / 2;
        let even = self.config.sample_count % 2 == 0;

        self.components
            .iter()
            .map(|c| {
                let single_sided = c.bin == 0 || (even && c.bin == nyquist);
                let scale = if single_sided { 1.0 } else { 2.0 };
                SinusoidSpec::new(c.frequency, c.amplitude * scale, wrap_phase(c.phase + FRAC_PI_2))
            })
            .collect()
    }
}

impl<'a> IntoIterator for &'a ReducedSpectrum {
    type Item = &'a Component;
    type IntoIter = std::slice::Iter<'a, Component>;

    fn into_iter(self) -> Self::IntoIter {
        self.components.iter()
    }
}

/// Wrap an angle into [-π, π)
#[inline]
pub fn wrap_phase(phase: f64) -> f64 {
    (phase + PI).rem_euclid(TAU) - PI
}

/// Keep bins `0..=N/2`; the rest mirror the lower half for real input.
pub fn remove_mirrors(spectrum: &[SpectralCoefficient]) -> &[SpectralCoefficient] {
    let keep = (spectrum.len() / 2 + 1).min(spectrum.len());
    &spectrum[..keep]
}

/// Drop bins below [`SIGNIFICANCE_THRESHOLD`], always keeping DC.
pub fn retain_significant(spectrum: &[SpectralCoefficient]) -> Vec<SpectralCoefficient> {
    spectrum
        .iter()
        .filter(|c| c.amplitude.abs() >= SIGNIFICANCE_THRESHOLD || c.bin == 0)
        .copied()
        .collect()
}

/// Merge coefficients sharing a bin by complex addition.
///
/// Groups come out in the order their bin was first seen.
pub fn combine_duplicates(spectrum: &[SpectralCoefficient]) -> Vec<SpectralCoefficient> {
    let mut slots: HashMap<usize, usize> = HashMap::with_capacity(spectrum.len());
    let mut sums: Vec<(usize, Complex<f64>)> = Vec::with_capacity(spectrum.len());

    for coefficient in spectrum {
        match slots.get(&coefficient.bin) {
            Some(&slot) => sums[slot].1 += coefficient.complex(),
            None => {
                slots.insert(coefficient.bin, sums.len());
                sums.push((coefficient.bin, coefficient.complex()));
            }
        }
    }

    sums.into_iter()
        .map(|(bin, value)| SpectralCoefficient::from_complex(bin, value))
        .collect()
}

/// Convert raw bins to Hz: `bin · (1/Δt) · (1/N)`.
///
/// Consumes the raw coefficients; the result is a different type, so the
/// scaling cannot be applied a second time.
pub fn normalize(spectrum: Vec<SpectralCoefficient>, config: &FourierConfig) -> Vec<Component> {
    let resolution = config.resolution_hz();
    spectrum
        .into_iter()
        .map(|c| Component {
            re: c.re,
            im: c.im,
            bin: c.bin,
            frequency: c.bin as f64 * resolution,
            amplitude: c.amplitude,
            phase: c.phase,
        })
        .collect()
}

/// Stable ascending sort by frequency
pub fn sort_by_frequency(components: &mut [Component]) {
    components.sort_by(|a, b| a.frequency.total_cmp(&b.frequency));
}

/// Run every reduction stage in order.
pub fn reduce(spectrum: &[SpectralCoefficient], config: &FourierConfig) -> ReducedSpectrum {
    let lower = remove_mirrors(spectrum);
    let significant = retain_significant(lower);
    let combined = combine_duplicates(&significant);
    let mut components = normalize(combined, config);
    sort_by_frequency(&mut components);

    debug!(
        "reduced {} bins -> {} lower -> {} significant -> {} components",
        spectrum.len(),
        lower.len(),
        significant.len(),
        components.len()
    );

    ReducedSpectrum {
        components,
        config: *config,
    }
}
