//! Transport bar widget - shows the window, time cursor, and tip position

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::Session;

/// Render the transport bar
pub fn render_transport(frame: &mut Frame, area: Rect, session: &Session) {
    let block = Block::default()
        .title(" epicycles ")
        .borders(Borders::ALL);

    let config = &session.config;
    let simulator = &session.simulator;
    let tip = simulator.frame().tip();

    let play_symbol = if session.playing { "▶" } else { "⏸" };
    let play_state_str = if session.playing { "Playing" } else { "Paused" };

    let line = Line::from(vec![
        Span::styled(
            format!(" N: {}  Δt: {} s  ", config.sample_count, config.step),
            Style::default().fg(Color::Cyan),
        ),
        Span::styled(
            format!("{} {}  ", play_symbol, play_state_str),
            Style::default().fg(if session.playing {
                Color::Green
            } else {
                Color::Yellow
            }),
        ),
        Span::styled(
            format!("t: {:.3}  ", simulator.time()),
            Style::default().fg(Color::White),
        ),
        Span::styled(
            format!("Vectors: {}  ", simulator.chain().len()),
            Style::default().fg(Color::White),
        ),
        Span::styled(
            format!("Δf: {:.3} Hz  ", config.resolution_hz()),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(
            format!("DFT: {:.1}ms  ", session.analysis_time.as_secs_f64() * 1000.0),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(
            format!("Tip: ({:.2}, {:.2})", tip.x, tip.y),
            Style::default().fg(Color::Magenta),
        ),
    ]);

    let paragraph = Paragraph::new(line).block(block);
    frame.render_widget(paragraph, area);
}
