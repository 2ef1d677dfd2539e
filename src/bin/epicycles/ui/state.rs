//! Viewer state: inputs, the current analysis and the epicycle simulator.
//!
//! Everything runs on the UI thread. Edits re-run the pipeline right away,
//! so a frame never sees a half-updated spectrum.

use log::debug;
use std::time::{Duration, Instant};

use saavy_fourier::{
    analyze,
    io::{Field, SinusoidInputs},
    Analysis, EpicycleSimulator, FourierConfig, SinusoidSpec,
};

pub struct Session {
    /// Sampling window, fixed for the session
    pub config: FourierConfig,
    /// Editable input rows
    pub inputs: SinusoidInputs,
    /// Selected row
    pub selected: usize,
    /// Selected field within the row
    pub field: Field,
    /// Result of the last pipeline run
    pub analysis: Analysis,
    pub simulator: EpicycleSimulator,
    /// Whether the time cursor advances
    pub playing: bool,
    /// How long the last pipeline run took
    pub analysis_time: Duration,
}

impl Session {
    pub fn new(config: FourierConfig, rows: Vec<SinusoidSpec>) -> Self {
        let inputs = SinusoidInputs::new(rows);
        let started = Instant::now();
        let analysis = analyze(&inputs.specs(), &config);
        let analysis_time = started.elapsed();
        let simulator = EpicycleSimulator::new(&analysis.reduced);

        Self {
            config,
            inputs,
            selected: 0,
            field: Field::Frequency,
            analysis,
            simulator,
            playing: true,
            analysis_time,
        }
    }

    /// Re-run the pipeline and hand the new spectrum to the simulator
    pub fn recompute(&mut self) {
        let started = Instant::now();
        self.analysis = analyze(&self.inputs.specs(), &self.config);
        self.analysis_time = started.elapsed();
        self.simulator.set_spectrum(&self.analysis.reduced);
        debug!(
            "recomputed {} rows in {:?}",
            self.inputs.len(),
            self.analysis_time
        );
    }

    /// Advance one animation frame if playing
    pub fn tick(&mut self) {
        if self.playing {
            self.simulator.tick();
        }
    }

    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1) % self.inputs.len();
    }

    pub fn select_prev(&mut self) {
        let len = self.inputs.len();
        self.selected = (self.selected + len - 1) % len;
    }

    pub fn field_next(&mut self) {
        self.field = self.field.next();
    }

    pub fn field_prev(&mut self) {
        self.field = self.field.prev();
    }

    /// Nudge the selected field and recompute
    pub fn nudge(&mut self, steps: f64) {
        if self.inputs.nudge(self.selected, self.field, steps) {
            self.recompute();
        }
    }

    /// Append a default row, select it and recompute
    pub fn add_row(&mut self) {
        self.selected = self.inputs.add();
        self.recompute();
    }

    /// Remove the selected row unless it is the last one
    pub fn remove_row(&mut self) -> bool {
        if !self.inputs.remove(self.selected) {
            return false;
        }
        self.selected = self.selected.min(self.inputs.len() - 1);
        self.recompute();
        true
    }

    pub fn toggle_playback(&mut self) {
        self.playing = !self.playing;
    }

    /// Rewind the time cursor and clear the trace
    pub fn reset(&mut self) {
        self.simulator.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edit_recomputes_spectrum() {
        let mut session = Session::new(FourierConfig::default(), vec![SinusoidSpec::default()]);
        assert!(session.analysis.reduced.find_bin(10).is_some());

        session.nudge(10.0);
        assert!((session.inputs.rows()[0].frequency - 2.0).abs() < 1e-9);
        assert!(session.analysis.reduced.find_bin(20).is_some());
        assert!(session.analysis.reduced.find_bin(10).is_none());
    }

    #[test]
    fn test_rows_never_empty() {
        let mut session = Session::new(FourierConfig::default(), Vec::new());
        assert!(!session.remove_row());

        session.add_row();
        assert_eq!(session.selected, 1);
        assert!(session.remove_row());
        assert_eq!(session.selected, 0);
        assert_eq!(session.inputs.len(), 1);
    }

    #[test]
    fn test_selection_wraps() {
        let mut session = Session::new(FourierConfig::default(), Vec::new());
        session.add_row();
        session.select_next();
        assert_eq!(session.selected, 0);
        session.select_prev();
        assert_eq!(session.selected, 1);
    }

    #[test]
    fn test_pause_freezes_time() {
        let mut session = Session::new(FourierConfig::default(), Vec::new());
        session.tick();
        let time = session.simulator.time();
        session.toggle_playback();
        session.tick();
        assert_eq!(session.simulator.time(), time);
    }
}
