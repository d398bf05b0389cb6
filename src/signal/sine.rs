use std::f64::consts::TAU;

use crate::error::WindingError;
use crate::sampling::inclusive_grid;
use crate::signal::{Samples, Signal};

/*
Sine Wave
=========

An infinite sinusoid, sampled on demand:

    y(x) = amplitude · sin(angular_velocity · (x + x0) + y0)

Three ways of naming the same speed:
------------------------------------

  angular_velocity (ω)   radians per unit x          - canonical
  period           (T)   units of x per full cycle   - T = 2π/ω
  frequency        (f)   cycles per unit of x        - f = 1/T = ω/2π

Only ω is stored. Period and frequency are computed views over it, and
setting any one of the three rewrites ω. Storing one canonical field keeps
the trio from ever disagreeing; each accessor still validates strict
positivity on its own terms so the error names the parameter the caller
actually touched.

Watch the shift parameters: `x0` shifts horizontally INSIDE the scaled
argument (so its effect depends on ω) and `y0` is a phase offset added to
the argument, not a vertical offset on the output.
*/

/// A single sinusoidal generator.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SineWave {
    angular_velocity: f64,
    pub amplitude: f64,
    /// Horizontal shift, applied inside the scaled argument.
    pub x0: f64,
    /// Phase offset added to the argument.
    pub y0: f64,
}

impl SineWave {
    /// Build from a raw angular velocity (radians per unit x, strictly
    /// positive).
    pub fn new(
        angular_velocity: f64,
        amplitude: f64,
        x0: f64,
        y0: f64,
    ) -> Result<Self, WindingError> {
        if angular_velocity <= 0.0 {
            return Err(WindingError::NonPositiveAngularVelocity {
                value: angular_velocity,
            });
        }
        Ok(Self {
            angular_velocity,
            amplitude,
            x0,
            y0,
        })
    }

    /// Build from a period: `ω = 2π/T`.
    pub fn from_period(period: f64, amplitude: f64, x0: f64, y0: f64) -> Result<Self, WindingError> {
        if period <= 0.0 {
            return Err(WindingError::NonPositivePeriod { value: period });
        }
        Self::new(TAU / period, amplitude, x0, y0)
    }

    /// Build from a frequency: `ω = 2π·f`.
    pub fn from_frequency(
        frequency: f64,
        amplitude: f64,
        x0: f64,
        y0: f64,
    ) -> Result<Self, WindingError> {
        if frequency <= 0.0 {
            return Err(WindingError::NonPositiveFrequency { value: frequency });
        }
        Self::new(TAU * frequency, amplitude, x0, y0)
    }

    /// A unit-amplitude, unshifted wave at the given frequency.
    pub fn unit_from_frequency(frequency: f64) -> Result<Self, WindingError> {
        Self::from_frequency(frequency, 1.0, 0.0, 0.0)
    }

    pub fn angular_velocity(&self) -> f64 {
        self.angular_velocity
    }

    pub fn set_angular_velocity(&mut self, value: f64) -> Result<(), WindingError> {
        if value <= 0.0 {
            return Err(WindingError::NonPositiveAngularVelocity { value });
        }
        self.angular_velocity = value;
        Ok(())
    }

    /// `T = 2π/ω`, a computed view over the canonical angular velocity.
    pub fn period(&self) -> f64 {
        TAU / self.angular_velocity
    }

    pub fn set_period(&mut self, value: f64) -> Result<(), WindingError> {
        if value <= 0.0 {
            return Err(WindingError::NonPositivePeriod { value });
        }
        self.angular_velocity = TAU / value;
        Ok(())
    }

    /// `f = 1/T`, a computed view over the canonical angular velocity.
    pub fn frequency(&self) -> f64 {
        1.0 / self.period()
    }

    pub fn set_frequency(&mut self, value: f64) -> Result<(), WindingError> {
        if value <= 0.0 {
            return Err(WindingError::NonPositiveFrequency { value });
        }
        self.angular_velocity = TAU * value;
        Ok(())
    }
}

impl Signal for SineWave {
    /// Sample over `[x1, x2]` inclusive. Allows the degenerate `x1 == x2`
    /// window (a single boundary sample); only `x1 > x2` is rejected.
    fn sample(&self, x1: f64, x2: f64, step: f64) -> Result<Samples, WindingError> {
        if x1 > x2 {
            return Err(WindingError::InvertedInterval {
                left: x1,
                right: x2,
            });
        }
        let xs = inclusive_grid(x1, x2, step);
        let ys = xs
            .iter()
            .map(|&x| self.amplitude * (self.angular_velocity * (x + self.x0) + self.y0).sin())
            .collect();
        Ok(Samples::new(xs, ys))
    }
}
