use crate::error::WindingError;

/// Axis limits for a plot, `lim1 < lim2` on each axis independently.
///
/// Checked on construction and on every setter; a rejected setter leaves the
/// stored limits untouched.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LineAxes {
    x_lim1: f64,
    x_lim2: f64,
    y_lim1: f64,
    y_lim2: f64,
}

impl Default for LineAxes {
    /// The symmetric unit box around the origin.
    fn default() -> Self {
        Self {
            x_lim1: -1.0,
            x_lim2: 1.0,
            y_lim1: -1.0,
            y_lim2: 1.0,
        }
    }
}

impl LineAxes {
    pub fn new(x_lim1: f64, x_lim2: f64, y_lim1: f64, y_lim2: f64) -> Result<Self, WindingError> {
        if !(valid_interval(x_lim1, x_lim2) && valid_interval(y_lim1, y_lim2)) {
            return Err(WindingError::InvalidAxes {
                x_lim1,
                x_lim2,
                y_lim1,
                y_lim2,
            });
        }
        Ok(Self {
            x_lim1,
            x_lim2,
            y_lim1,
            y_lim2,
        })
    }

    pub fn x_lim1(&self) -> f64 {
        self.x_lim1
    }

    pub fn x_lim2(&self) -> f64 {
        self.x_lim2
    }

    pub fn y_lim1(&self) -> f64 {
        self.y_lim1
    }

    pub fn y_lim2(&self) -> f64 {
        self.y_lim2
    }

    pub fn set_x_lim1(&mut self, value: f64) -> Result<(), WindingError> {
        if !valid_interval(value, self.x_lim2) {
            return Err(self.rejected(value, self.x_lim2, self.y_lim1, self.y_lim2));
        }
        self.x_lim1 = value;
        Ok(())
    }

    pub fn set_x_lim2(&mut self, value: f64) -> Result<(), WindingError> {
        if !valid_interval(self.x_lim1, value) {
            return Err(self.rejected(self.x_lim1, value, self.y_lim1, self.y_lim2));
        }
        self.x_lim2 = value;
        Ok(())
    }

    pub fn set_y_lim1(&mut self, value: f64) -> Result<(), WindingError> {
        if !valid_interval(value, self.y_lim2) {
            return Err(self.rejected(self.x_lim1, self.x_lim2, value, self.y_lim2));
        }
        self.y_lim1 = value;
        Ok(())
    }

    pub fn set_y_lim2(&mut self, value: f64) -> Result<(), WindingError> {
        if !valid_interval(self.y_lim1, value) {
            return Err(self.rejected(self.x_lim1, self.x_lim2, self.y_lim1, value));
        }
        self.y_lim2 = value;
        Ok(())
    }

    /// Grow the box symmetrically so it contains `(x, y)` with a margin.
    /// Convenience for autoscaling chart bounds; never shrinks.
    pub fn expand_to(&mut self, x: f64, y: f64, margin: f64) {
        if x - margin < self.x_lim1 {
            self.x_lim1 = x - margin;
        }
        if x + margin > self.x_lim2 {
            self.x_lim2 = x + margin;
        }
        if y - margin < self.y_lim1 {
            self.y_lim1 = y - margin;
        }
        if y + margin > self.y_lim2 {
            self.y_lim2 = y + margin;
        }
    }

    fn rejected(&self, x_lim1: f64, x_lim2: f64, y_lim1: f64, y_lim2: f64) -> WindingError {
        WindingError::InvalidAxes {
            x_lim1,
            x_lim2,
            y_lim1,
            y_lim2,
        }
    }
}

fn valid_interval(a: f64, b: f64) -> bool {
    a < b
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_the_unit_box() {
        let axes = LineAxes::default();
        assert_eq!(
            (axes.x_lim1(), axes.x_lim2(), axes.y_lim1(), axes.y_lim2()),
            (-1.0, 1.0, -1.0, 1.0)
        );
    }

    #[test]
    fn construction_validates_each_axis_independently() {
        assert!(LineAxes::new(-2.0, 2.0, -3.0, 3.0).is_ok());
        assert!(matches!(
            LineAxes::new(2.0, -2.0, -1.0, 1.0),
            Err(WindingError::InvalidAxes { .. })
        ));
        assert!(matches!(
            LineAxes::new(-1.0, 1.0, 1.0, 1.0),
            Err(WindingError::InvalidAxes { .. })
        ));
    }

    #[test]
    fn setters_reject_crossings_without_mutating() {
        let mut axes = LineAxes::default();
        assert!(axes.set_x_lim1(2.0).is_err());
        assert!(axes.set_y_lim2(-5.0).is_err());
        assert_eq!(axes, LineAxes::default());

        assert!(axes.set_x_lim2(10.0).is_ok());
        assert_eq!(axes.x_lim2(), 10.0);
    }

    #[test]
    fn expand_to_never_shrinks() {
        let mut axes = LineAxes::default();
        axes.expand_to(0.0, 0.0, 0.1);
        assert_eq!(axes, LineAxes::default());

        axes.expand_to(5.0, -3.0, 0.5);
        assert!(axes.x_lim2() >= 5.5);
        assert!(axes.y_lim1() <= -3.5);
        assert_eq!(axes.x_lim1(), -1.0);
    }
}
