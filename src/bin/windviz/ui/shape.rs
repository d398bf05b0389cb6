//! Wound-shape chart: the signal wrapped around the unit circle, with the
//! reference circle underneath and the average point marked on top.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    symbols,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
    Frame,
};

use fourier_winding::geometry::{Circle, LineAxes};
use fourier_winding::winding::Shape;

/// Angle step for the reference-circle overlay.
const CIRCLE_STEP: f64 = 0.05;

pub fn render_shape(frame: &mut Frame, area: Rect, shape: &Shape, avg_point: Option<(f64, f64)>) {
    let block = Block::default().title(" Winding ").borders(Borders::ALL);

    let circle_points = Circle::unit().points(CIRCLE_STEP);
    let circle_data: Vec<(f64, f64)> = circle_points
        .xs
        .iter()
        .zip(circle_points.ys.iter())
        .map(|(&x, &y)| (x, y))
        .collect();

    let shape_data: Vec<(f64, f64)> = shape
        .x
        .iter()
        .zip(shape.y.iter())
        .map(|(&x, &y)| (x, y))
        .collect();

    let avg_data: Vec<(f64, f64)> = avg_point.into_iter().collect();

    // Bounds: the unit box, grown to fit the shape
    let mut axes = LineAxes::default();
    for &(x, y) in &shape_data {
        axes.expand_to(x, y, 0.1);
    }

    let mut datasets = vec![
        Dataset::default()
            .name("circle")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::DarkGray))
            .data(&circle_data),
        Dataset::default()
            .name("shape")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Cyan))
            .data(&shape_data),
    ];
    if !avg_data.is_empty() {
        datasets.push(
            Dataset::default()
                .name("avg")
                .marker(symbols::Marker::Dot)
                .graph_type(GraphType::Scatter)
                .style(Style::default().fg(Color::Red))
                .data(&avg_data),
        );
    }

    let chart = Chart::new(datasets)
        .block(block)
        .x_axis(
            Axis::default()
                .bounds([axes.x_lim1(), axes.x_lim2()])
                .style(Style::default().fg(Color::DarkGray)),
        )
        .y_axis(
            Axis::default()
                .bounds([axes.y_lim1(), axes.y_lim2()])
                .style(Style::default().fg(Color::DarkGray)),
        );

    frame.render_widget(chart, area);
}
