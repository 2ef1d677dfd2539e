//! Epicycle canvas widget - nested circles, the vector chain, and the trace

use ratatui::{
    layout::Rect,
    style::Color,
    symbols,
    widgets::{
        canvas::{Canvas, Circle, Line as CanvasLine},
        Block, Borders,
    },
    Frame,
};
use saavy_fourier::EpicycleSimulator;

/// Gap between the outermost circle and the trace start, in chain radii
const TRACE_GAP: f64 = 0.3;
/// Horizontal span of a full trace, in chain radii
const TRACE_SPAN: f64 = 4.0;
/// Margin around the drawing, in chain radii
const MARGIN: f64 = 0.15;

/// World-space bounds that keep circles round on a braille canvas.
///
/// Braille cells are 2×4 dots and a terminal cell is about twice as tall as
/// wide, so dots come out roughly square.
fn fit_bounds(area: Rect, x: [f64; 2], y: [f64; 2]) -> ([f64; 2], [f64; 2]) {
    let dots_x = (area.width.max(1) as f64) * 2.0;
    let dots_y = (area.height.max(1) as f64) * 4.0;
    let span_x = x[1] - x[0];
    let span_y = y[1] - y[0];

    let per_dot = (span_x / dots_x).max(span_y / dots_y);
    let pad_x = (per_dot * dots_x - span_x) / 2.0;
    let pad_y = (per_dot * dots_y - span_y) / 2.0;

    ([x[0] - pad_x, x[1] + pad_x], [y[0] - pad_y, y[1] + pad_y])
}

/// Render the chain for the simulator's latest frame plus the trace
pub fn render_epicycles(frame: &mut Frame, area: Rect, simulator: &EpicycleSimulator) {
    let block = Block::default()
        .title(" Epicycles ")
        .borders(Borders::ALL);
    let inner = block.inner(area);

    let chain = simulator.frame();
    let origin = chain.origin;
    let tip = chain.tip();

    // Largest reach of the chain; collapse to a unit view when empty or flat
    let reach: f64 = chain.radii.iter().map(|r| r.abs()).sum();
    let reach = if reach > 0.0 { reach } else { 1.0 };

    let trace_start = origin.x + reach * (1.0 + TRACE_GAP);
    let trace = simulator.trace();
    let x_step = reach * TRACE_SPAN / trace.capacity().max(1) as f64;
    let points = trace.points(trace_start, x_step);

    let margin = reach * MARGIN;
    let (x_bounds, y_bounds) = fit_bounds(
        inner,
        [origin.x - reach - margin, trace_start + reach * TRACE_SPAN + margin],
        [origin.y - reach - margin, origin.y + reach + margin],
    );

    let canvas = Canvas::default()
        .block(block)
        .marker(symbols::Marker::Braille)
        .x_bounds(x_bounds)
        .y_bounds(y_bounds)
        .paint(move |ctx| {
            for (center, radius) in chain.circles() {
                ctx.draw(&Circle {
                    x: center.x,
                    y: center.y,
                    radius,
                    color: Color::DarkGray,
                });
            }
            ctx.layer();

            for (start, end) in chain.segments() {
                ctx.draw(&CanvasLine::new(start.x, start.y, end.x, end.y, Color::White));
            }

            // Tip to the newest trace point
            ctx.draw(&CanvasLine::new(tip.x, tip.y, trace_start, tip.y, Color::Red));

            for pair in points.windows(2) {
                ctx.draw(&CanvasLine::new(
                    pair[0].0,
                    pair[0].1,
                    pair[1].0,
                    pair[1].1,
                    Color::LightCyan,
                ));
            }
        });

    frame.render_widget(canvas, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_bounds_keeps_content() {
        let area = Rect::new(0, 0, 80, 20);
        let (x, y) = fit_bounds(area, [-1.0, 5.0], [-1.0, 1.0]);
        assert!(x[0] <= -1.0 && x[1] >= 5.0);
        assert!(y[0] <= -1.0 && y[1] >= 1.0);

        // Equal world units per dot on both axes
        let per_x = (x[1] - x[0]) / (80.0 * 2.0);
        let per_y = (y[1] - y[0]) / (20.0 * 4.0);
        assert!((per_x - per_y).abs() < 1e-12);
    }
}
