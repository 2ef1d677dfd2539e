//! Input editor widget - one row per sinusoid

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use saavy_fourier::io::Field;

use super::Session;

/// Render the sinusoid rows with the selected field highlighted
pub fn render_inputs(frame: &mut Frame, area: Rect, session: &Session) {
    let block = Block::default()
        .title(" Inputs ")
        .borders(Borders::ALL);

    let mut lines = Vec::with_capacity(session.inputs.len());
    for (i, spec) in session.inputs.rows().iter().enumerate() {
        let row_selected = i == session.selected;
        let mut spans = vec![Span::styled(
            format!("{:>2}. ", i + 1),
            Style::default().fg(Color::DarkGray),
        )];

        for field in Field::ALL {
            let label = match field {
                Field::Frequency => "Freq",
                Field::Amplitude => "Amp",
                Field::Phase => "Phase",
            };
            let style = if row_selected && field == session.field {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED)
            } else if row_selected {
                Style::default().fg(Color::White)
            } else {
                Style::default().fg(Color::Gray)
            };
            spans.push(Span::raw(format!("{}: ", label)));
            spans.push(Span::styled(format!("{:>6.2}", field.get(spec)), style));
            spans.push(Span::raw(" "));
        }

        lines.push(Line::from(spans));
    }

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, area);
}
