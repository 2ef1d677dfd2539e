//! Numerical core: signal synthesis, the direct transform, and spectrum
//! reduction.
//!
//! Every stage is a pure function over owned or borrowed sequences. Nothing
//! here keeps state between calls, so the stages can be chained freely and
//! tested one at a time.

/// Direct O(N²) discrete Fourier transform.
pub mod dft;
/// Mirror removal, significance filtering, combination and normalization.
pub mod reduce;
/// Sum-of-sinusoids signal generator.
pub mod synthesis;

pub use dft::{transform, SpectralCoefficient};
pub use reduce::{reduce, Component, ReducedSpectrum};
pub use synthesis::{synthesize, SinusoidSpec};
