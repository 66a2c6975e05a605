/// A closed range of ray parameters or color values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub min: f32,
    pub max: f32,
}

impl Interval {
    /// Create a new interval given min and max values.
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Returns true if x is strictly within the interval (min, max) (exclusive).
    pub fn surrounds(&self, x: f32) -> bool {
        self.min < x && x < self.max
    }

    /// Clamps x to be within the interval [min, max].
    pub fn clamp(&self, x: f32) -> f32 {
        x.clamp(self.min, self.max)
    }

    /// Same interval with `max` lowered to `max`.
    ///
    /// Used while scanning an aggregate so later members can only report
    /// strictly closer hits.
    pub fn with_max(&self, max: f32) -> Interval {
        Interval::new(self.min, max)
    }
}
