//! Epicycle reconstruction: the reduced spectrum drawn as a chain of
//! rotating vectors whose tip retraces the signal.

/*
Epicycles
=========

Every spectrum component is a vector of length `amplitude` spinning at
`frequency` Hz from a starting angle `phase`. Put the vectors tail to head
and the tip of the last one traces the sum of all of them: the inverse
transform, evaluated one frame at a time.

Vocabulary
----------

  joint       The head of one vector and the tail of the next.

  center      Where a vector starts. The circle of radius `amplitude`
              around it is the path that vector's head sweeps.

  tip         The head of the last vector. Its height over time is the
              reconstructed signal.

  time cursor A running angle-time that decreases by 2π/N each frame.
              It sets animation speed only; the sampling step Δt plays no
              part here.


The Recurrence
--------------

    c = origin
    for each component, largest amplitude first:
        θ  = 2π·frequency·time + phase + rotation_offset
        c += amplitude · (cos θ, sin θ)
    tip = c

The default rotation offset of π/2 turns the transform's cosine basis back
into the sine basis the input was written in, so tip.y follows the input.

Largest-first ordering has no effect on the tip (vector addition commutes);
it only keeps big circles at the root of the drawing, which reads better.
*/

pub mod trace;

pub use trace::TraceHistory;

use log::debug;
use rustfft::num_complex::Complex;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::dsp::reduce::{Component, ReducedSpectrum};
use crate::DEFAULT_ROTATION_OFFSET;

/// A position in epicycle space
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<Complex<f64>> for Point {
    fn from(value: Complex<f64>) -> Self {
        Self::new(value.re, value.im)
    }
}

impl From<Point> for Complex<f64> {
    fn from(point: Point) -> Self {
        Complex::new(point.x, point.y)
    }
}

/// One evaluated chain: a joint and a radius per component.
#[derive(Debug, Clone, PartialEq)]
pub struct ChainFrame {
    pub origin: Point,
    /// Post-update position of each vector, in chain order
    pub joints: Vec<Point>,
    /// Circle radius of each vector, in chain order
    pub radii: Vec<f64>,
}

impl ChainFrame {
    /// A frame with no vectors; the tip stays at `origin`
    pub fn at_rest(origin: Point) -> Self {
        Self {
            origin,
            joints: Vec::new(),
            radii: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.joints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.joints.is_empty()
    }

    /// End of the chain
    pub fn tip(&self) -> Point {
        self.joints.last().copied().unwrap_or(self.origin)
    }

    /// Start of each vector: the origin, then every joint but the last
    pub fn centers(&self) -> impl Iterator<Item = Point> + '_ {
        std::iter::once(self.origin)
            .chain(self.joints.iter().copied())
            .take(self.joints.len())
    }

    /// `(center, radius)` per vector
    pub fn circles(&self) -> impl Iterator<Item = (Point, f64)> + '_ {
        self.centers().zip(self.radii.iter().copied())
    }

    /// `(start, end)` segment per vector
    pub fn segments(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        self.centers().zip(self.joints.iter().copied())
    }
}

/// Spectrum components held in drawing order (descending |amplitude|).
///
/// Built once per spectrum change so frames do not re-sort.
#[derive(Debug, Clone, Default)]
pub struct EpicycleChain {
    components: Vec<Component>,
}

impl EpicycleChain {
    pub fn new(spectrum: &ReducedSpectrum) -> Self {
        Self {
            components: spectrum.by_descending_amplitude(),
        }
    }

    pub fn components(&self) -> &[Component] {
        &self.components
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Evaluate every joint at `time`
    pub fn evaluate(&self, origin: Point, rotation_offset: f64, time: f64) -> ChainFrame {
        let mut cursor: Complex<f64> = origin.into();
        let mut joints = Vec::with_capacity(self.components.len());
        let mut radii = Vec::with_capacity(self.components.len());

        for component in &self.components {
            cursor += Complex::from_polar(component.amplitude, component.angle_at(time, rotation_offset));
            joints.push(Point::from(cursor));
            radii.push(component.amplitude);
        }

        ChainFrame {
            origin,
            joints,
            radii,
        }
    }
}

/// Evaluate the chain for `spectrum` at `time` and step the time cursor.
///
/// Returns the frame and the next time value (`time - 2π/N`). The step is
/// taken even for an empty spectrum; [`EpicycleSimulator::tick`] skips it.
pub fn advance(
    spectrum: &ReducedSpectrum,
    origin: Point,
    rotation_offset: f64,
    time: f64,
) -> (ChainFrame, f64) {
    let frame = EpicycleChain::new(spectrum).evaluate(origin, rotation_offset, time);
    (frame, time - spectrum.config().animation_step())
}

/// Frame-to-frame epicycle state: chain, time cursor and trace.
///
/// An external driver calls [`EpicycleSimulator::tick`] once per frame and
/// [`EpicycleSimulator::set_spectrum`] whenever the inputs change. Time and
/// trace carry over across spectrum changes.
#[derive(Debug, Clone)]
pub struct EpicycleSimulator {
    chain: EpicycleChain,
    time: f64,
    time_step: f64,
    origin: Point,
    rotation_offset: f64,
    trace: TraceHistory,
    frame: ChainFrame,
}

impl EpicycleSimulator {
    pub fn new(spectrum: &ReducedSpectrum) -> Self {
        Self {
            chain: EpicycleChain::new(spectrum),
            time: 0.0,
            time_step: spectrum.config().animation_step(),
            origin: Point::ORIGIN,
            rotation_offset: DEFAULT_ROTATION_OFFSET,
            trace: TraceHistory::new(),
            frame: ChainFrame::at_rest(Point::ORIGIN),
        }
    }

    /// Set where the chain is anchored
    pub fn with_origin(mut self, origin: Point) -> Self {
        self.origin = origin;
        self.frame = ChainFrame::at_rest(origin);
        self
    }

    /// Set the angle added to every vector (default π/2)
    pub fn with_rotation_offset(mut self, rotation_offset: f64) -> Self {
        self.rotation_offset = rotation_offset;
        self
    }

    /// Replace the trace buffer, e.g. to change its capacity
    pub fn with_trace(mut self, trace: TraceHistory) -> Self {
        self.trace = trace;
        self
    }

    /// Swap in a new spectrum. Takes effect on the next tick.
    pub fn set_spectrum(&mut self, spectrum: &ReducedSpectrum) {
        self.chain = EpicycleChain::new(spectrum);
        self.time_step = spectrum.config().animation_step();
        debug!(
            "epicycle chain rebuilt: {} vectors, time step {:.6}",
            self.chain.len(),
            self.time_step
        );
    }

    /// Advance one frame.
    ///
    /// An empty chain leaves the tip at the origin and does not move the
    /// time cursor or the trace.
    pub fn tick(&mut self) -> &ChainFrame {
        self.frame = self.chain.evaluate(self.origin, self.rotation_offset, self.time);

        if !self.chain.is_empty() {
            self.time -= self.time_step;
            self.trace.push(self.frame.tip().y);
        }

        &self.frame
    }

    /// Rewind time to zero and forget the trace
    pub fn reset(&mut self) {
        self.time = 0.0;
        self.trace.clear();
        self.frame = ChainFrame::at_rest(self.origin);
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn time_step(&self) -> f64 {
        self.time_step
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn rotation_offset(&self) -> f64 {
        self.rotation_offset
    }

    /// The most recent frame
    pub fn frame(&self) -> &ChainFrame {
        &self.frame
    }

    pub fn chain(&self) -> &EpicycleChain {
        &self.chain
    }

    pub fn trace(&self) -> &TraceHistory {
        &self.trace
    }
}
