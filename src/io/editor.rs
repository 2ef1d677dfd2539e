//! Editable list of sinusoid inputs, the model behind the input form.

use std::fmt;

use crate::dsp::synthesis::SinusoidSpec;
use crate::io::collect_finite;

/// Increment applied by one nudge of a field
pub const EDIT_STEP: f64 = 0.1;

/// One editable field of a [`SinusoidSpec`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Frequency,
    Amplitude,
    Phase,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Frequency, Field::Amplitude, Field::Phase];

    pub fn label(self) -> &'static str {
        match self {
            Field::Frequency => "frequency",
            Field::Amplitude => "amplitude",
            Field::Phase => "phase",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Field::Frequency => Field::Amplitude,
            Field::Amplitude => Field::Phase,
            Field::Phase => Field::Frequency,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Field::Frequency => Field::Phase,
            Field::Amplitude => Field::Frequency,
            Field::Phase => Field::Amplitude,
        }
    }

    pub fn get(self, spec: &SinusoidSpec) -> f64 {
        match self {
            Field::Frequency => spec.frequency,
            Field::Amplitude => spec.amplitude,
            Field::Phase => spec.phase,
        }
    }

    fn get_mut(self, spec: &mut SinusoidSpec) -> &mut f64 {
        match self {
            Field::Frequency => &mut spec.frequency,
            Field::Amplitude => &mut spec.amplitude,
            Field::Phase => &mut spec.phase,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Ordered sinusoid rows. Never shrinks below one row.
#[derive(Debug, Clone, PartialEq)]
pub struct SinusoidInputs {
    rows: Vec<SinusoidSpec>,
}

impl SinusoidInputs {
    /// Start with the given rows, or a single default row if empty
    pub fn new(rows: Vec<SinusoidSpec>) -> Self {
        if rows.is_empty() {
            return Self::default();
        }
        Self { rows }
    }

    pub fn rows(&self) -> &[SinusoidSpec] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Append a default row (1 Hz, amplitude 1, phase 0); returns its index
    pub fn add(&mut self) -> usize {
        self.rows.push(SinusoidSpec::default());
        self.rows.len() - 1
    }

    /// Remove a row. Refuses to remove the last remaining one.
    pub fn remove(&mut self, index: usize) -> bool {
        if self.rows.len() <= 1 || index >= self.rows.len() {
            return false;
        }
        self.rows.remove(index);
        true
    }

    /// Nudge one field by `steps · EDIT_STEP`
    pub fn nudge(&mut self, index: usize, field: Field, steps: f64) -> bool {
        let Some(row) = self.rows.get_mut(index) else {
            return false;
        };
        let value = field.get_mut(row);
        // Round to the step grid so repeated nudges don't drift
        *value = ((*value + steps * EDIT_STEP) / EDIT_STEP).round() * EDIT_STEP;
        true
    }

    /// Overwrite a field
    pub fn set(&mut self, index: usize, field: Field, value: f64) -> bool {
        match self.rows.get_mut(index) {
            Some(row) => {
                *field.get_mut(row) = value;
                true
            }
            None => false,
        }
    }

    /// Rows ready for synthesis: non-finite entries dropped
    pub fn specs(&self) -> Vec<SinusoidSpec> {
        collect_finite(self.rows.iter().copied())
    }
}

impl Default for SinusoidInputs {
    fn default() -> Self {
        Self {
            rows: vec![SinusoidSpec::default()],
        }
    }
}
