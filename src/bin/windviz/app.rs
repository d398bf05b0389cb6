//! Application state and event loop for the winding visualizer.

use std::time::Duration;

use color_eyre::eyre::Result as EyreResult;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    DefaultTerminal, Frame,
};

use fourier_winding::signal::{CompositeWave, Samples, Signal};
use fourier_winding::spectrum::{Spectrum, Sweep};
use fourier_winding::winding::{wind_shape, Shape};
use fourier_winding::{spectrum, DEFAULT_SWEEP_STEP};

use crate::parse::parse_wave_list;
use crate::ui;

/// Window the signal and shape are computed over, matching the swept range.
const WINDOW_START: f64 = 0.0;
const WINDOW_END: f64 = 10.0;
/// Step for the signal and shape curves (finer than the generic default so
/// the wound shape draws as a curve, not a polygon).
const CURVE_STEP: f64 = 0.01;

/// Frequencies pulled from the running sweep per drawn frame. Keeps the UI
/// at a steady frame rate while the spectrum fills in left to right.
const SWEEP_CHUNK: usize = 24;

/// How far the arrow keys nudge the winding frequency.
const COARSE_NUDGE: f64 = 0.1;
const FINE_NUDGE: f64 = 0.01;
/// Lower bound for the winding frequency (must stay strictly positive).
const MIN_WINDING_FREQUENCY: f64 = 0.01;

pub struct WindViz {
    /// The editable `"freq,amp;freq,amp"` entry line.
    input: String,
    editing: bool,
    composite: CompositeWave,
    winding_frequency: f64,
    sweep_start: f64,
    sweep_end: f64,
    /// Cached curves, recomputed only when their inputs change.
    signal_curve: Samples,
    shape: Shape,
    avg_point: Option<(f64, f64)>,
    spectrum: Spectrum,
    running_sweep: Option<Sweep<CompositeWave>>,
    status: String,
    should_quit: bool,
}

impl WindViz {
    pub fn new(initial_input: &str) -> Self {
        let mut app = Self {
            input: initial_input.to_string(),
            editing: false,
            composite: CompositeWave::new(),
            winding_frequency: 1.0,
            sweep_start: 1.0,
            sweep_end: 10.0,
            signal_curve: Samples::default(),
            shape: Shape::default(),
            avg_point: None,
            spectrum: Spectrum::default(),
            running_sweep: None,
            status: String::new(),
            should_quit: false,
        };
        app.apply_input();
        app
    }

    /// Run the event loop: draw, advance the sweep, handle keys (~60fps).
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> EyreResult<()> {
        while !self.should_quit {
            self.advance_sweep();

            terminal.draw(|frame| self.render(frame))?;

            if event::poll(Duration::from_millis(16))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key.code);
                    }
                }
            }
        }
        Ok(())
    }

    /// Rebuild the composite from the entry line and refresh everything
    /// derived from it.
    fn apply_input(&mut self) {
        self.composite = parse_wave_list(&self.input);
        self.refresh_signal_curve();
        self.refresh_shape();
        self.restart_sweep();
        self.status = format!("{} wave(s)", self.composite.len());
    }

    fn refresh_signal_curve(&mut self) {
        self.signal_curve = self
            .composite
            .sample(WINDOW_START, WINDOW_END, CURVE_STEP)
            .unwrap_or_default();
    }

    fn refresh_shape(&mut self) {
        match wind_shape(
            &self.composite,
            self.winding_frequency,
            WINDOW_START,
            WINDOW_END,
            CURVE_STEP,
        ) {
            Ok(shape) => {
                self.avg_point = spectrum::average_position(&shape.x, &shape.y).ok();
                self.shape = shape;
            }
            Err(err) => {
                self.shape = Shape::default();
                self.avg_point = None;
                self.status = err.to_string();
            }
        }
    }

    /// Drop any running sweep and start over with the current wave list.
    ///
    /// The sweep owns its own composite so it can keep producing points
    /// while the app's copy is resampled for the other charts.
    fn restart_sweep(&mut self) {
        self.spectrum = Spectrum::default();
        if self.composite.is_empty() {
            self.running_sweep = None;
            return;
        }
        self.running_sweep = Some(Sweep::new(
            parse_wave_list(&self.input),
            self.sweep_start,
            self.sweep_end,
            DEFAULT_SWEEP_STEP,
        ));
    }

    /// Pull a chunk of the running sweep into the spectrum curves.
    fn advance_sweep(&mut self) {
        let Some(sweep) = self.running_sweep.as_mut() else {
            return;
        };
        for _ in 0..SWEEP_CHUNK {
            match sweep.next() {
                Some(Ok(point)) => {
                    self.spectrum.frequencies.push(point.frequency);
                    self.spectrum.re.push(point.re);
                    self.spectrum.im.push(point.im);
                }
                Some(Err(err)) => {
                    self.status = err.to_string();
                    self.running_sweep = None;
                    return;
                }
                None => {
                    self.running_sweep = None;
                    return;
                }
            }
        }
    }

    fn nudge_winding_frequency(&mut self, delta: f64) {
        self.winding_frequency = (self.winding_frequency + delta).max(MIN_WINDING_FREQUENCY);
        self.refresh_shape();
    }

    fn handle_key(&mut self, key: KeyCode) {
        if self.editing {
            match key {
                KeyCode::Enter => {
                    self.editing = false;
                    self.apply_input();
                }
                KeyCode::Esc => {
                    self.editing = false;
                }
                KeyCode::Backspace => {
                    self.input.pop();
                }
                KeyCode::Char(c) => {
                    self.input.push(c);
                }
                _ => {}
            }
            return;
        }

        match key {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char('e') | KeyCode::Char('i') => {
                self.editing = true;
            }
            KeyCode::Char('s') => {
                self.restart_sweep();
            }
            KeyCode::Up => self.nudge_winding_frequency(COARSE_NUDGE),
            KeyCode::Down => self.nudge_winding_frequency(-COARSE_NUDGE),
            KeyCode::Right => self.nudge_winding_frequency(FINE_NUDGE),
            KeyCode::Left => self.nudge_winding_frequency(-FINE_NUDGE),
            _ => {}
        }
    }

    fn render(&self, frame: &mut Frame) {
        let area = frame.area();

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Entry + status bar
                Constraint::Min(10),   // Shape and signal side by side
                Constraint::Min(8),    // Spectrum
                Constraint::Length(1), // Help bar
            ])
            .split(area);

        ui::render_entry_bar(
            frame,
            rows[0],
            &self.input,
            self.editing,
            self.winding_frequency,
            &self.status,
        );

        let top = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(rows[1]);

        ui::shape::render_shape(frame, top[0], &self.shape, self.avg_point);
        ui::signal::render_signal(frame, top[1], &self.signal_curve);

        let progress = self
            .running_sweep
            .as_ref()
            .map(|sweep| sweep.remaining())
            .unwrap_or(0);
        ui::spectrum::render_spectrum(frame, rows[2], &self.spectrum, progress);

        ui::render_help_bar(frame, rows[3], self.editing);
    }
}
