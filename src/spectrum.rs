//! Average position of a wound shape and the swept coefficient spectrum.

/*
From Shapes to a Spectrum
=========================

One wound shape answers one question: "how much of winding frequency f is
in this signal?" The answer is the shape's center of mass - the average of
all its points. Far from the origin means f resonates with the signal;
near the origin means it does not.

Sweeping that question across a whole range of winding frequencies gives
the rudimentary frequency-domain view:

    for f in freq_start ..= freq_end by step:
        shape  = wind(signal, f, freq_start, freq_end, step)
        (re, im) = average position of shape

This is the naive O(F·S) transform - F frequency samples, S points per
shape, no FFT shortcut. That cost is the reason `Sweep` is an ITERATOR:
an interactive caller can pull a handful of frequencies per frame and keep
redrawing instead of blocking on the whole sweep. `sweep()` is the bulk
variant for callers that just want the three finished curves.

The sampling window of each shape is the frequency range itself - each
frequency winds the signal over [freq_start, freq_end]. Part of the
contract, not an accident (see DESIGN.md).
*/

use crate::error::WindingError;
use crate::sampling::inclusive_grid;
use crate::signal::Signal;
use crate::winding::wind_shape;

/// Arithmetic mean of each coordinate sequence independently.
///
/// Errors on mismatched lengths and on empty input (the mean of zero points
/// is undefined, never a NaN here).
pub fn average_position(xs: &[f64], ys: &[f64]) -> Result<(f64, f64), WindingError> {
    if xs.len() != ys.len() {
        return Err(WindingError::LengthMismatch {
            xs: xs.len(),
            ys: ys.len(),
        });
    }
    if xs.is_empty() {
        return Err(WindingError::EmptyShape);
    }
    let n = xs.len() as f64;
    let x_avg = xs.iter().sum::<f64>() / n;
    let y_avg = ys.iter().sum::<f64>() / n;
    Ok((x_avg, y_avg))
}

/// One point of the swept spectrum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepPoint {
    pub frequency: f64,
    pub re: f64,
    pub im: f64,
}

/// The fully collected spectrum: three parallel curves.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Spectrum {
    pub frequencies: Vec<f64>,
    pub re: Vec<f64>,
    pub im: Vec<f64>,
}

impl Spectrum {
    pub fn len(&self) -> usize {
        self.frequencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frequencies.is_empty()
    }
}

/// Lazy frequency sweep.
///
/// Yields one `SweepPoint` per frequency of the inclusive grid from
/// `freq_start` to `freq_end`, in ascending order. Each pull computes one
/// shape and its average, so a caller can interleave consumption with
/// redrawing. Restart by constructing a new `Sweep`.
///
/// Generic over how the signal is held: pass `&wave` to sweep a borrowed
/// generator, or move an owned one in when the sweep has to outlive the
/// borrow (as the interactive front-end does).
pub struct Sweep<S> {
    signal: S,
    frequencies: std::vec::IntoIter<f64>,
    window_start: f64,
    window_end: f64,
    step: f64,
}

impl<S: Signal> Sweep<S> {
    pub fn new(signal: S, freq_start: f64, freq_end: f64, step: f64) -> Self {
        Self {
            signal,
            frequencies: inclusive_grid(freq_start, freq_end, step).into_iter(),
            window_start: freq_start,
            window_end: freq_end,
            step,
        }
    }

    /// Frequencies still to be computed.
    pub fn remaining(&self) -> usize {
        self.frequencies.len()
    }
}

impl<S: Signal> Iterator for Sweep<S> {
    type Item = Result<SweepPoint, WindingError>;

    fn next(&mut self) -> Option<Self::Item> {
        let frequency = self.frequencies.next()?;
        let point = wind_shape(
            &self.signal,
            frequency,
            self.window_start,
            self.window_end,
            self.step,
        )
        .and_then(|shape| average_position(&shape.x, &shape.y))
        .map(|(re, im)| SweepPoint { frequency, re, im });
        Some(point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.frequencies.size_hint()
    }
}

/// Bulk sweep: collect the whole spectrum in one call.
pub fn sweep(
    signal: &dyn Signal,
    freq_start: f64,
    freq_end: f64,
    step: f64,
) -> Result<Spectrum, WindingError> {
    let iter = Sweep::new(signal, freq_start, freq_end, step);
    let mut spectrum = Spectrum {
        frequencies: Vec::with_capacity(iter.remaining()),
        re: Vec::with_capacity(iter.remaining()),
        im: Vec::with_capacity(iter.remaining()),
    };
    for point in iter {
        let point = point?;
        spectrum.frequencies.push(point.frequency);
        spectrum.re.push(point.re);
        spectrum.im.push(point.im);
    }
    Ok(spectrum)
}
