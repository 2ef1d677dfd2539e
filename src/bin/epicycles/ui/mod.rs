//! TUI module for epicycles
//!
//! Input editor, epicycle canvas with trace, and the spectrum bar chart.

mod epicycle;
mod inputs;
mod spectrum;
pub mod state;
mod transport;

use color_eyre::eyre::Result as EyreResult;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    widgets::Paragraph,
    DefaultTerminal, Frame,
};
use std::time::{Duration, Instant};

pub use state::Session;

use epicycle::render_epicycles;
use inputs::render_inputs;
use spectrum::render_spectrum;
use transport::render_transport;

/// Width of the input editor column
const INPUTS_WIDTH: u16 = 44;

/// UI application state
pub struct UiApp {
    session: Session,
    /// Target time between animation frames
    frame_interval: Duration,
    /// Whether the app should quit
    should_quit: bool,
}

impl UiApp {
    /// Create a new UI application
    pub fn new(session: Session, frame_interval: Duration) -> Self {
        Self {
            session,
            frame_interval,
            should_quit: false,
        }
    }

    /// Run the UI event loop
    ///
    /// Each pass advances one animation frame, draws it, then waits for
    /// input until the next frame is due.
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> EyreResult<()> {
        while !self.should_quit {
            let frame_start = Instant::now();

            self.session.tick();

            terminal.draw(|frame| self.render(frame))?;

            let timeout = self.frame_interval.saturating_sub(frame_start.elapsed());
            if event::poll(timeout)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key.code);
                    }
                }
            }
        }

        Ok(())
    }

    /// Handle keyboard input
    fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char(' ') => self.session.toggle_playback(),
            KeyCode::Char('r') | KeyCode::Char('R') => self.session.reset(),
            KeyCode::Char('a') | KeyCode::Char('A') => self.session.add_row(),
            KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Delete => {
                if !self.session.remove_row() {
                    log::info!("kept the last input row");
                }
            }
            KeyCode::Up => self.session.select_prev(),
            KeyCode::Down => self.session.select_next(),
            KeyCode::Left => self.session.field_prev(),
            KeyCode::Right | KeyCode::Tab => self.session.field_next(),
            KeyCode::Char('+') | KeyCode::Char('=') => self.session.nudge(1.0),
            KeyCode::Char('-') | KeyCode::Char('_') => self.session.nudge(-1.0),
            KeyCode::PageUp => self.session.nudge(10.0),
            KeyCode::PageDown => self.session.nudge(-10.0),
            _ => {}
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut Frame) {
        let area = frame.area();

        // Main layout: transport, editor + canvas, spectrum, help
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),  // Transport bar
                Constraint::Min(12),    // Inputs and epicycles
                Constraint::Length(12), // Spectrum
                Constraint::Length(1),  // Help bar
            ])
            .split(area);

        render_transport(frame, chunks[0], &self.session);

        let middle = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(INPUTS_WIDTH), Constraint::Min(20)])
            .split(chunks[1]);

        render_inputs(frame, middle[0], &self.session);
        render_epicycles(frame, middle[1], &self.session.simulator);
        render_spectrum(frame, chunks[2], &self.session.analysis.reduced);

        let help = Paragraph::new(
            " [Q] Quit  [Space] Play/Pause  [R] Reset  [A] Add  [D] Remove  [↑↓] Row  [←→] Field  [+/-] Adjust",
        )
        .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(help, chunks[3]);
    }
}
