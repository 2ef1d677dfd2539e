pub mod config;
pub mod dsp; // Synthesis, transform and reduction
pub mod epicycle; // Rotating-vector reconstruction
pub mod io;
pub mod pipeline;
pub mod plot;

pub use config::FourierConfig;
pub use dsp::dft::SpectralCoefficient;
pub use dsp::reduce::{Component, ReducedSpectrum};
pub use dsp::synthesis::SinusoidSpec;
pub use epicycle::{advance, ChainFrame, EpicycleSimulator, Point};
pub use pipeline::{analyze, Analysis};

pub const DEFAULT_SAMPLE_COUNT: usize = 1000;
pub const DEFAULT_STEP: f64 = 0.01;
pub const SIGNIFICANCE_THRESHOLD: f64 = 1e-4;
pub const TRACE_CAPACITY: usize = 500;
pub const DEFAULT_ROTATION_OFFSET: f64 = std::f64::consts::FRAC_PI_2;
