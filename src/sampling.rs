//! Sampling-grid construction shared by every generator and transform.

/*
Inclusive Sampling Grids
========================

Every curve in this crate is sampled on an arithmetic grid:

    start, start + step, start + 2·step, ...

The quirk worth knowing about: the grids are INCLUSIVE of their upper
boundary. A wave sampled over [0, 10] with step 0.1 contains the point at
(or just past) 10.0, not only up to 9.9. This comes from building the grid
as `arange(start, stop + step, step)` - the half-open range is pushed one
step past the boundary so the closing sample survives.

Because the grid is generated as `start + i·step` the final sample can
land slightly ABOVE the requested upper boundary when the interval is not
an exact multiple of the step. Downstream code (winding, averaging) relies
on every stage producing the exact same grid for the same arguments, so
this construction lives here and is used everywhere.
*/

/// Default step for waveform and shape sampling.
pub const DEFAULT_STEP: f64 = 0.1;

/// Default step for the frequency sweep (finer, the spectrum is a curve of
/// its own).
pub const DEFAULT_SWEEP_STEP: f64 = 0.01;

/// Arithmetic sequence `start + i·step` over the half-open `[start, stop)`.
///
/// Length is `ceil((stop - start) / step)`. Empty when the range is empty
/// or the step non-positive. Callers wanting a boundary-inclusive grid pass
/// `stop + step` as the upper bound.
pub fn arange(start: f64, stop: f64, step: f64) -> Vec<f64> {
    if step <= 0.0 || stop <= start {
        return Vec::new();
    }
    let n = ((stop - start) / step).ceil() as usize;
    (0..n).map(|i| start + i as f64 * step).collect()
}

/// Boundary-inclusive grid from `start` to `stop` by `step`.
///
/// Equivalent to `arange(start, stop + step, step)`; the final point may
/// exceed `stop` by less than one step.
pub fn inclusive_grid(start: f64, stop: f64, step: f64) -> Vec<f64> {
    arange(start, stop + step, step)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arange_basic_length() {
        let grid = arange(0.0, 1.0, 0.1);
        assert_eq!(grid.len(), 10);
        assert!((grid[0] - 0.0).abs() < 1e-12);
        assert!((grid[9] - 0.9).abs() < 1e-12);
    }

    #[test]
    fn arange_empty_on_bad_inputs() {
        assert!(arange(1.0, 1.0, 0.1).is_empty());
        assert!(arange(2.0, 1.0, 0.1).is_empty());
        assert!(arange(0.0, 1.0, 0.0).is_empty());
        assert!(arange(0.0, 1.0, -0.5).is_empty());
    }

    #[test]
    fn inclusive_grid_contains_upper_bound() {
        let grid = inclusive_grid(0.0, 1.0, 0.1);
        // 0.0 .. 1.0 inclusive by 0.1 -> 11 points
        assert_eq!(grid.len(), 11);
        let last = *grid.last().unwrap();
        assert!(
            last >= 1.0 - 1e-9 && last < 1.0 + 0.1,
            "last point {} should close the interval",
            last
        );
    }

    #[test]
    fn inclusive_grid_degenerate_interval_keeps_the_boundary_sample() {
        // [x, x] still samples at x; rounding may tack on one extra step
        let grid = inclusive_grid(3.0, 3.0, 0.1);
        assert!(!grid.is_empty());
        assert!((grid[0] - 3.0).abs() < 1e-12);
        assert!(*grid.last().unwrap() <= 3.0 + 0.1 + 1e-12);
    }

    #[test]
    fn inclusive_grid_is_strictly_ascending() {
        let grid = inclusive_grid(1.0, 10.0, 0.1);
        for pair in grid.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }
}
