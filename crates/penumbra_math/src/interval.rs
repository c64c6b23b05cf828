/// A `[min, max]` window of ray parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub min: f64,
    pub max: f64,
}

impl Interval {
    /// Create a new interval given min and max values.
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Returns true if x lies inside the interval by more than `epsilon` on
    /// both ends.
    ///
    /// This is the acceptance test for hits: a ray that starts on a surface
    /// must not find that surface again at `t ~ 0`.
    pub fn surrounds_by(&self, x: f64, epsilon: f64) -> bool {
        x - self.min > epsilon && self.max - x > epsilon
    }

    /// Returns a copy of the interval with `max` replaced.
    pub fn with_max(&self, max: f64) -> Interval {
        Interval::new(self.min, max)
    }

    /// Every forward parameter from zero on.
    pub const FORWARD: Interval = Interval {
        min: 0.0,
        max: f64::INFINITY,
    };
}
