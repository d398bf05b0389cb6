use std::f64::consts::TAU;

use crate::error::WindingError;
use crate::sampling::inclusive_grid;
use crate::signal::Samples;

/// The reference circle a wound shape wraps around.
///
/// Radius and center are stored and validated but `points` deliberately
/// emits the UNIT circle at the origin: the winding overlay always shows the
/// unit reference, and callers that want a scaled or shifted circle apply
/// radius/center themselves (see DESIGN.md for the rationale).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Circle {
    radius: f64,
    pub x0: f64,
    pub y0: f64,
}

impl Circle {
    /// Build a circle with a non-negative radius centered at `(x0, y0)`.
    pub fn new(radius: f64, x0: f64, y0: f64) -> Result<Self, WindingError> {
        if radius < 0.0 {
            return Err(WindingError::NegativeRadius { value: radius });
        }
        Ok(Self { radius, x0, y0 })
    }

    /// Unit circle at the origin.
    pub fn unit() -> Self {
        Self {
            radius: 1.0,
            x0: 0.0,
            y0: 0.0,
        }
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn set_radius(&mut self, value: f64) -> Result<(), WindingError> {
        if value < 0.0 {
            return Err(WindingError::NegativeRadius { value });
        }
        self.radius = value;
        Ok(())
    }

    /// Unit-circle points `(cos θ, sin θ)` with θ over the inclusive grid
    /// `0 ..= 2π` by `step` (the closing sample may land just past 2π, which
    /// is what makes the drawn circle visually closed).
    pub fn points(&self, step: f64) -> Samples {
        let thetas = inclusive_grid(0.0, TAU, step);
        let xs = thetas.iter().map(|&t| t.cos()).collect();
        let ys = thetas.iter().map(|&t| t.sin()).collect();
        Samples::new(xs, ys)
    }
}
