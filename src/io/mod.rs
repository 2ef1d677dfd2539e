// Purpose - external interfaces: parsing and collecting sinusoid inputs

pub mod editor;

pub use editor::{Field, SinusoidInputs, EDIT_STEP};

use std::str::FromStr;

use log::warn;

use crate::dsp::synthesis::SinusoidSpec;

/// Why a `frequency,amplitude,phase` string was rejected
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseSinusoidError {
    #[error("expected 3 comma-separated fields (frequency,amplitude,phase), got {0}")]
    FieldCount(usize),

    #[error("{field} is not a number: {value:?}")]
    InvalidNumber { field: Field, value: String },

    #[error("{field} must be finite")]
    NonFinite { field: Field },
}

/// Parse `"frequency,amplitude,phase"`. Phase is in radians.
///
/// Whitespace around fields is ignored.
pub fn parse_sinusoid(text: &str) -> Result<SinusoidSpec, ParseSinusoidError> {
    let fields: Vec<&str> = text.split(',').map(str::trim).collect();
    if fields.len() != 3 {
        return Err(ParseSinusoidError::FieldCount(fields.len()));
    }

    let frequency = parse_field(fields[0], Field::Frequency)?;
    let amplitude = parse_field(fields[1], Field::Amplitude)?;
    let phase = parse_field(fields[2], Field::Phase)?;

    Ok(SinusoidSpec::new(frequency, amplitude, phase))
}

fn parse_field(value: &str, field: Field) -> Result<f64, ParseSinusoidError> {
    let parsed: f64 = value.parse().map_err(|_| ParseSinusoidError::InvalidNumber {
        field,
        value: value.to_string(),
    })?;
    if !parsed.is_finite() {
        return Err(ParseSinusoidError::NonFinite { field });
    }
    Ok(parsed)
}

impl FromStr for SinusoidSpec {
    type Err = ParseSinusoidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_sinusoid(s)
    }
}

/// Keep only entries whose fields are all finite, in order.
///
/// The synthesizer assumes finite input; this is the gate in front of it.
pub fn collect_finite<I>(entries: I) -> Vec<SinusoidSpec>
where
    I: IntoIterator<Item = SinusoidSpec>,
{
    entries
        .into_iter()
        .filter(|spec| {
            let keep = spec.is_finite();
            if !keep {
                warn!("dropping non-finite sinusoid {:?}", spec);
            }
            keep
        })
        .collect()
}
