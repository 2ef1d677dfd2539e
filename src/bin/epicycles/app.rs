//! Epicycles - application builder and runner

use color_eyre::eyre::Result as EyreResult;
use log::info;
use std::time::Duration;

use saavy_fourier::{analyze, FourierConfig, SinusoidSpec};

use super::ui::{Session, UiApp};

/// Main application builder
pub struct Epicycles {
    config: FourierConfig,
    sinusoids: Vec<SinusoidSpec>,
    fps: u32,
}

impl Epicycles {
    /// Create a new viewer with the default window and no inputs
    pub fn new() -> Self {
        Self {
            config: FourierConfig::default(),
            sinusoids: Vec::new(),
            fps: 60,
        }
    }

    /// Set the sampling window
    pub fn config(mut self, config: FourierConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the animation frame rate
    pub fn fps(mut self, fps: u32) -> Self {
        self.fps = fps.max(1);
        self
    }

    /// Add an input sinusoid
    pub fn sinusoid(mut self, spec: SinusoidSpec) -> Self {
        self.sinusoids.push(spec);
        self
    }

    /// Run the terminal viewer until the user quits
    pub fn run(self) -> EyreResult<()> {
        info!(
            "starting viewer: N={} Δt={} fps={} inputs={}",
            self.config.sample_count,
            self.config.step,
            self.fps,
            self.sinusoids.len()
        );

        let session = Session::new(self.config, self.sinusoids);
        let frame_interval = Duration::from_secs_f64(1.0 / self.fps as f64);
        let mut app = UiApp::new(session, frame_interval);

        let mut terminal = ratatui::init();
        let res = app.run(&mut terminal);
        ratatui::restore();
        res
    }

    /// Print the reduced spectrum to stdout
    pub fn print(self) -> EyreResult<()> {
        let analysis = analyze(&self.sinusoids, &self.config);

        println!("=== epicycles ===");
        println!("Samples: {}", self.config.sample_count);
        println!("Step: {} s", self.config.step);
        println!("Resolution: {:.4} Hz", self.config.resolution_hz());
        println!();

        for (i, spec) in self.sinusoids.iter().enumerate() {
            println!(
                "  Input {}: {:.2} Hz, amplitude {:.2}, phase {:.2}",
                i + 1,
                spec.frequency,
                spec.amplitude,
                spec.phase
            );
        }

        println!();
        println!("Reduced spectrum ({} components):", analysis.reduced.len());
        println!("  {:>6}  {:>10}  {:>10}  {:>8}", "bin", "freq (Hz)", "amplitude", "phase");
        for c in analysis.reduced.iter() {
            println!(
                "  {:>6}  {:>10.3}  {:>10.4}  {:>8.3}",
                c.bin, c.frequency, c.amplitude, c.phase
            );
        }

        Ok(())
    }
}

impl Default for Epicycles {
    fn default() -> Self {
        Self::new()
    }
}
