//! Signal generators: things that can be sampled over an interval.
//!
//! The `Signal` trait is the seam between concrete generators and everything
//! downstream (winding, sweeping, rendering). A generator only has to answer
//! one question: given a window and a step, what are your sample points?

/// Single sinusoids with linked angular-velocity/period/frequency views.
pub mod sine;

/// Ordered collections of generators summed pointwise.
pub mod composite;

pub use composite::CompositeWave;
pub use sine::SineWave;

use crate::error::WindingError;

/// A sampled curve: paired x/y coordinate sequences of equal length.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Samples {
    pub xs: Vec<f64>,
    pub ys: Vec<f64>,
}

impl Samples {
    pub fn new(xs: Vec<f64>, ys: Vec<f64>) -> Self {
        debug_assert_eq!(xs.len(), ys.len());
        Self { xs, ys }
    }

    pub fn len(&self) -> usize {
        self.xs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }
}

/// Capability trait for anything sampleable over `(x1, x2, step)`.
///
/// Each implementor defines its own boundary rule (see `SineWave` vs
/// `CompositeWave`) but all of them produce the same inclusive grid for the
/// same arguments, which is what lets a composite share one x-grid across
/// its elements.
pub trait Signal {
    /// Sample the generator over `[x1, x2]` with the given step.
    fn sample(&self, x1: f64, x2: f64, step: f64) -> Result<Samples, WindingError>;
}

/// Allow boxed signals to be used as signals (for dynamic dispatch).
impl Signal for Box<dyn Signal> {
    fn sample(&self, x1: f64, x2: f64, step: f64) -> Result<Samples, WindingError> {
        (**self).sample(x1, x2, step)
    }
}

/// References to signals are signals too, so consumers can be written over
/// either owned or borrowed generators.
impl<T: Signal + ?Sized> Signal for &T {
    fn sample(&self, x1: f64, x2: f64, step: f64) -> Result<Samples, WindingError> {
        (**self).sample(x1, x2, step)
    }
}
