//! Input-validation errors shared across the crate.
//!
//! Every failure here is a caller contract violation detected before any
//! mutation happens (validate-then-commit). Nothing is retryable and nothing
//! is deferred: each constructor, setter and transform checks its inputs up
//! front and surfaces the violation to the caller.

/// Errors raised when a caller hands invalid parameters to a generator,
/// value object, or transform.
#[derive(Debug, Clone, PartialEq)]
pub enum WindingError {
    /// Circle radius must be non-negative
    NegativeRadius { value: f64 },
    /// Angular velocity must be strictly positive
    NonPositiveAngularVelocity { value: f64 },
    /// Period must be strictly positive
    NonPositivePeriod { value: f64 },
    /// Frequency must be strictly positive
    NonPositiveFrequency { value: f64 },
    /// Winding frequency must be strictly positive
    NonPositiveWindingFrequency { value: f64 },
    /// Sampling interval with left boundary greater than the right one
    InvertedInterval { left: f64, right: f64 },
    /// Interval where strict `left < right` is required
    DegenerateInterval { left: f64, right: f64 },
    /// Axis limits must satisfy `lim1 < lim2` on each axis independently
    InvalidAxes {
        x_lim1: f64,
        x_lim2: f64,
        y_lim1: f64,
        y_lim2: f64,
    },
    /// Coordinate sequences of different lengths
    LengthMismatch { xs: usize, ys: usize },
    /// Average position of zero points is undefined
    EmptyShape,
}

impl std::fmt::Display for WindingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WindingError::NegativeRadius { value } => {
                write!(f, "Radius of a circle cannot be negative: {}", value)
            }
            WindingError::NonPositiveAngularVelocity { value } => {
                write!(f, "Angular velocity has to be positive: {}", value)
            }
            WindingError::NonPositivePeriod { value } => {
                write!(f, "Period has to be positive: {}", value)
            }
            WindingError::NonPositiveFrequency { value } => {
                write!(f, "Frequency has to be positive: {}", value)
            }
            WindingError::NonPositiveWindingFrequency { value } => {
                write!(f, "Winding frequency must be positive: {}", value)
            }
            WindingError::InvertedInterval { left, right } => {
                write!(
                    f,
                    "The left boundary is greater than the right boundary: {} > {}",
                    left, right
                )
            }
            WindingError::DegenerateInterval { left, right } => {
                write!(
                    f,
                    "The following condition must be true: a < b (got a={}, b={})",
                    left, right
                )
            }
            WindingError::InvalidAxes {
                x_lim1,
                x_lim2,
                y_lim1,
                y_lim2,
            } => {
                write!(
                    f,
                    "The arguments do not satisfy: x_lim1 < x_lim2 AND y_lim1 < y_lim2. \
                     x_lim1={}, x_lim2={}, y_lim1={}, y_lim2={}",
                    x_lim1, x_lim2, y_lim1, y_lim2
                )
            }
            WindingError::LengthMismatch { xs, ys } => {
                write!(
                    f,
                    "The length of x-values != length of y-values: {} != {}",
                    xs, ys
                )
            }
            WindingError::EmptyShape => {
                write!(f, "Cannot average the position of an empty point set")
            }
        }
    }
}

impl std::error::Error for WindingError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_carries_offending_values() {
        let err = WindingError::InvertedInterval {
            left: 2.0,
            right: 1.0,
        };
        let msg = err.to_string();
        assert!(msg.contains('2') && msg.contains('1'), "got: {}", msg);
    }
}
