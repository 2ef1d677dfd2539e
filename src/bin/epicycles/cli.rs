//! Command-line argument parsing.

use clap::Parser;
use color_eyre::eyre::{eyre, Result as EyreResult};

use saavy_fourier::{io::parse_sinusoid, FourierConfig, SinusoidSpec, DEFAULT_SAMPLE_COUNT, DEFAULT_STEP};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "epicycles")]
#[command(about = "Fourier decomposition drawn as rotating epicycles", long_about = None)]
pub struct Args {
    /// Number of samples in the analysis window (N)
    #[arg(long, value_name = "N", default_value_t = DEFAULT_SAMPLE_COUNT)]
    pub samples: usize,

    /// Time between samples in seconds (Δt)
    #[arg(long, value_name = "SECONDS", default_value_t = DEFAULT_STEP)]
    pub step: f64,

    /// Input sinusoid as frequency,amplitude,phase (repeatable)
    #[arg(long = "sinusoid", value_name = "F,A,P", value_parser = parse_sinusoid)]
    pub sinusoids: Vec<SinusoidSpec>,

    /// Print the reduced spectrum and exit instead of opening the viewer
    #[arg(long)]
    pub print: bool,

    /// Animation frame rate
    #[arg(long, value_name = "FPS", default_value_t = 60)]
    pub fps: u32,
}

impl Args {
    /// Validate the sampling window
    pub fn fourier_config(&self) -> EyreResult<FourierConfig> {
        if self.samples == 0 {
            return Err(eyre!("--samples must be at least 1"));
        }
        if !self.step.is_finite() || self.step <= 0.0 {
            return Err(eyre!("--step must be a positive number of seconds, got {}", self.step));
        }
        Ok(FourierConfig::new(self.samples, self.step))
    }

    /// Sinusoids from the command line, or the default 1 Hz sine
    pub fn sinusoids(&self) -> Vec<SinusoidSpec> {
        if self.sinusoids.is_empty() {
            vec![SinusoidSpec::default()]
        } else {
            self.sinusoids.clone()
        }
    }
}
