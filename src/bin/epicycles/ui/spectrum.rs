//! Spectrum widget
//!
//! Bar chart of the reduced spectrum in ascending frequency order.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Bar, BarChart, BarGroup, Block, Borders},
    Frame,
};
use saavy_fourier::{plot::BarChartData, ReducedSpectrum};

/// Bar heights are computed on this scale and stretched by the widget
const BAR_SCALE: u64 = 1000;
const BAR_WIDTH: u16 = 7;
const BAR_GAP: u16 = 2;

/// Render the spectrum bar chart
pub fn render_spectrum(frame: &mut Frame, area: Rect, spectrum: &ReducedSpectrum) {
    let data = BarChartData::from_spectrum(spectrum, BAR_SCALE);
    let ticks = data.amplitude_ticks();
    let top = ticks.last().copied().unwrap_or(0.0);

    let block = Block::default()
        .title(format!(" Spectrum (Hz)  max amplitude {:.2} ", top))
        .borders(Borders::ALL);

    let bars: Vec<Bar> = data
        .bars
        .iter()
        .map(|bar| {
            Bar::default()
                .value(bar.height)
                .text_value(format!("{:.2}", bar.amplitude))
                .label(Line::from(bar.label.clone()))
                .style(Style::default().fg(Color::LightBlue))
                .value_style(Style::default().fg(Color::Black).bg(Color::LightBlue))
        })
        .collect();

    let chart = BarChart::default()
        .block(block)
        .bar_width(BAR_WIDTH)
        .bar_gap(BAR_GAP)
        .max(BAR_SCALE)
        .data(BarGroup::default().bars(&bars));

    frame.render_widget(chart, area);
}
