//! Swept-coefficient chart: the real and imaginary average-position curves
//! across the winding-frequency range, filling in as the sweep runs.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    symbols,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
    Frame,
};

use fourier_winding::spectrum::Spectrum;

pub fn render_spectrum(frame: &mut Frame, area: Rect, spectrum: &Spectrum, remaining: usize) {
    let title = if remaining > 0 {
        format!(" Spectrum (sweeping, {} left) ", remaining)
    } else {
        " Spectrum ".to_string()
    };
    let block = Block::default().title(title).borders(Borders::ALL);

    let re_data: Vec<(f64, f64)> = spectrum
        .frequencies
        .iter()
        .zip(spectrum.re.iter())
        .map(|(&f, &c)| (f, c))
        .collect();
    let im_data: Vec<(f64, f64)> = spectrum
        .frequencies
        .iter()
        .zip(spectrum.im.iter())
        .map(|(&f, &c)| (f, c))
        .collect();

    let (x_min, x_max) = match (spectrum.frequencies.first(), spectrum.frequencies.last()) {
        (Some(&first), Some(&last)) if first < last => (first, last),
        _ => (0.0, 1.0),
    };
    let y_extent = spectrum
        .re
        .iter()
        .chain(spectrum.im.iter())
        .fold(0.1f64, |acc, &c| acc.max(c.abs()));

    let datasets = vec![
        Dataset::default()
            .name("re")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Magenta))
            .data(&re_data),
        Dataset::default()
            .name("im")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Blue))
            .data(&im_data),
    ];

    let chart = Chart::new(datasets)
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
