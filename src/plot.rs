//! Bar-chart data for the reduced spectrum.

use crate::dsp::reduce::ReducedSpectrum;

/// Number of intervals on the amplitude axis (six labels, 0 to max)
pub const AMPLITUDE_TICKS: usize = 5;

/// One bar: a frequency label and its height.
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    /// Frequency in Hz, two decimals
    pub label: String,
    pub frequency: f64,
    pub amplitude: f64,
    /// Amplitude scaled into `0..=height` of the chart
    pub height: u64,
}

/// Bars in ascending frequency order plus the amplitude axis.
#[derive(Debug, Clone, PartialEq)]
pub struct BarChartData {
    pub bars: Vec<Bar>,
    /// Largest amplitude (0.0 for an empty or all-zero spectrum)
    pub max_amplitude: f64,
}

impl BarChartData {
    /// Scale every component so the tallest bar reaches `height`.
    ///
    /// A zero max amplitude scales by 1 instead of dividing by zero.
    pub fn from_spectrum(spectrum: &ReducedSpectrum, height: u64) -> Self {
        let max_amplitude = spectrum.max_amplitude();
        let divisor = if max_amplitude > 0.0 { max_amplitude } else { 1.0 };
        let scale = height as f64 / divisor;

        let bars = spectrum
            .iter()
            .map(|c| Bar {
                label: format!("{:.2}", c.frequency),
                frequency: c.frequency,
                amplitude: c.amplitude,
                height: (c.amplitude.abs() * scale).round() as u64,
            })
            .collect();

        Self {
            bars,
            max_amplitude,
        }
    }

    /// Evenly spaced amplitude labels from 0 to max
    pub fn amplitude_ticks(&self) -> Vec<f64> {
        (0..=AMPLITUDE_TICKS)
            .map(|i| self.max_amplitude / AMPLITUDE_TICKS as f64 * i as f64)
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }
}
