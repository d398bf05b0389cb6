//! TUI widgets for the winding visualizer.
//!
//! Three charts: the wound shape with its average-point marker, the
//! time-domain signal, and the swept coefficient spectrum.

pub mod shape;
pub mod signal;
pub mod spectrum;

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the wave entry line, winding frequency readout and status.
pub fn render_entry_bar(
    frame: &mut Frame,
    area: Rect,
    input: &str,
    editing: bool,
    winding_frequency: f64,
    status: &str,
) {
    let block = Block::default().title(" windviz ").borders(Borders::ALL);

    let entry_style = if editing {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::White)
    };
    let cursor = if editing { "_" } else { "" };

    let line = Line::from(vec![
        Span::styled(" waves: ", Style::default().fg(Color::DarkGray)),
        Span::styled(format!("{}{}", input, cursor), entry_style),
        Span::styled(
            format!("   winding: {:.2} turns/unit", winding_frequency),
            Style::default().fg(Color::Cyan),
        ),
        Span::styled(format!("   {}", status), Style::default().fg(Color::DarkGray)),
    ]);

    frame.render_widget(Paragraph::new(line).block(block), area);
}

/// Render the one-line key help.
pub fn render_help_bar(frame: &mut Frame, area: Rect, editing: bool) {
    let help = if editing {
        " type freq,amp;freq,amp  |  Enter apply  |  Esc cancel"
    } else {
        " e edit waves  |  ↑/↓ ←/→ winding freq  |  s re-sweep  |  q quit"
    };
    frame.render_widget(
        Paragraph::new(help).style(Style::default().fg(Color::DarkGray)),
        area,
    );
}
