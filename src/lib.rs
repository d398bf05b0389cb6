pub mod error;
pub mod geometry; // Plot-reference value objects (circle, axes)
pub mod sampling;
pub mod signal; // Sinusoid generators and composition
pub mod spectrum; // Average position and the frequency-swept coefficients
pub mod winding;

pub use error::WindingError;
pub use sampling::{DEFAULT_STEP, DEFAULT_SWEEP_STEP};
