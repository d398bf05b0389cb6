//! Time-domain chart of the composite signal.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    symbols,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
    Frame,
};

use fourier_winding::signal::Samples;

pub fn render_signal(frame: &mut Frame, area: Rect, curve: &Samples) {
    let block = Block::default().title(" Signal ").borders(Borders::ALL);

    let data: Vec<(f64, f64)> = curve
        .xs
        .iter()
        .zip(curve.ys.iter())
        .map(|(&x, &y)| (x, y))
        .collect();

    let (x_min, x_max) = match (curve.xs.first(), curve.xs.last()) {
        (Some(&first), Some(&last)) if first < last => (first, last),
        _ => (0.0, 1.0),
    };
    let y_extent = curve
        .ys
        .iter()
        .fold(1.0f64, |acc, &y| acc.max(y.abs()));

    let dataset = Dataset::default()
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(Color::Green))
        .data(&data);

    let chart = Chart::new(vec![dataset])
        .block(block)
        .x_axis(
            Axis::default()
                .bounds([x_min, x_max])
                .style(Style::default().fg(Color::DarkGray)),
        )
        .y_axis(
            Axis::default()
                .bounds([-y_extent, y_extent])
                .style(Style::default().fg(Color::DarkGray)),
        );

    frame.render_widget(chart, area);
}
