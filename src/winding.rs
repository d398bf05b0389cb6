//! The geometric winding transform.

/*
Winding a Signal Around a Circle
================================

The intuition behind the Fourier transform: take a time-domain signal and
wrap its graph around the origin, spinning at a chosen rate. At each sample
point x the signal's height y(x) becomes the LENGTH of a vector, and the
winding frequency decides how far that vector has rotated by the time it
reaches x:

    angle(x) = ω·x          where ω = 2π · winding_frequency

    shape_x(x) = y(x) · sin(ω·x)
    shape_y(x) = y(x) · cos(ω·x)

When the winding frequency does NOT match a frequency present in the
signal, the wound shape's lobes point every which way and its average
position stays near the origin. When it DOES match, all the heavy parts of
the shape pile up on one side, the average position swings away from the
origin, and a peak appears in the swept spectrum (see `spectrum`).

Note the sin/cos pairing: x gets sin and y gets cos, the opposite of the
usual polar convention. It comes from the complex formulation
`y·(sin ωx + i·cos ωx)` - shape_x is the real part of that product and
shape_y the imaginary part, and the averaged pair is reported in that same
order by the sweep. Flipping it would mirror the shape and swap the two
coefficient curves, so it is kept exactly as formulated.
*/

use std::f64::consts::TAU;

use crate::error::WindingError;
use crate::sampling::inclusive_grid;
use crate::signal::Signal;

/// A wound 2-D shape: paired coordinate sequences of equal length.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Shape {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

impl Shape {
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}

/// Wind `signal` sampled over `[a, b]` around the origin at
/// `winding_frequency` turns per unit x.
///
/// Requires a strictly positive winding frequency and a strictly ordered
/// window `a < b`. The shape has one point per sample of the inclusive grid
/// from `a` to `b` by `step`.
pub fn wind_shape(
    signal: &dyn Signal,
    winding_frequency: f64,
    a: f64,
    b: f64,
    step: f64,
) -> Result<Shape, WindingError> {
    if winding_frequency <= 0.0 {
        return Err(WindingError::NonPositiveWindingFrequency {
            value: winding_frequency,
        });
    }
    if a >= b {
        return Err(WindingError::DegenerateInterval { left: a, right: b });
    }

    let xs = inclusive_grid(a, b, step);
    let ys = signal.sample(a, b, step)?.ys;
    let omega = TAU * winding_frequency;

    let mut shape = Shape {
        x: Vec::with_capacity(xs.len()),
        y: Vec::with_capacity(xs.len()),
    };
    for (&x, &y) in xs.iter().zip(ys.iter()) {
        let angle = omega * x;
        shape.x.push(y * angle.sin());
        shape.y.push(y * angle.cos());
    }
    Ok(shape)
}
