use serde::{Deserialize, Serialize};

/// Degrees covered by the dial, from the first to the last large tick.
pub const DIAL_SWEEP_DEG: f64 = 270.0;
/// Gauge angle of the dial's minimum position.
pub const DIAL_START_DEG: f64 = 45.0;
/// Upper bound of the normalized 0..100 axis.
pub const NORMALIZED_SPAN: f64 = 100.0;

/// Affine map from the gauge value domain onto a normalized `0..=100` axis.
///
/// A degenerate or non-numeric domain is not rejected: the coefficients
/// become infinite or NaN and every projection downstream inherits that.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GaugeScale {
    min_val: f64,
    max_val: f64,
    slope: f64,
    intercept: f64,
}

impl GaugeScale {
    #[must_use]
    pub fn new(min_val: f64, max_val: f64) -> Self {
        let slope = NORMALIZED_SPAN / (max_val - min_val);
        let intercept = -slope * min_val;
        Self {
            min_val,
            max_val,
            slope,
            intercept,
        }
    }

    #[must_use]
    pub fn coefficients(self) -> (f64, f64) {
        (self.slope, self.intercept)
    }

    #[must_use]
    pub fn normalize(self, value: f64) -> f64 {
        self.slope * value + self.intercept
    }

    /// Clamps into the domain. Comparisons against NaN bounds leave the
    /// value untouched.
    #[must_use]
    pub fn clamp(self, value: f64) -> f64 {
        let mut clamped = value;
        if clamped > self.max_val {
            clamped = self.max_val;
        }
        if clamped < self.min_val {
            clamped = self.min_val;
        }
        clamped
    }

    /// Gauge angle in degrees for a normalized position.
    #[must_use]
    pub fn normalized_to_angle(normalized: f64) -> f64 {
        normalized * (DIAL_SWEEP_DEG / NORMALIZED_SPAN) + DIAL_START_DEG
    }

    /// Gauge angle in degrees for a domain value, without clamping.
    #[must_use]
    pub fn angle_for(self, value: f64) -> f64 {
        Self::normalized_to_angle(self.normalize(value))
    }
}
