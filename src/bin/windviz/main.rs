//! windviz - terminal Fourier winding visualizer
//!
//! Run with: cargo run --bin windviz

mod app;
mod parse;
mod ui;

use app::WindViz;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let mut terminal = ratatui::init();
    let result = WindViz::new("2,1;3,0.5").run(&mut terminal);
    ratatui::restore();
    result
}
