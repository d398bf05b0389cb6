//! Plot-reference value objects.
//!
//! Nothing here feeds the transform pipeline; these are the visual anchors a
//! front-end overlays on its charts - the unit circle the wound shape wraps
//! around, and the axis box that frames a plot.

/// Axis-limit pairs with per-axis ordering validation.
pub mod axes;
/// Circle point generation for the winding overlay.
pub mod circle;

pub use axes::LineAxes;
pub use circle::Circle;
