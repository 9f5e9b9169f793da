//! Dial tick layout: angles for the large and small tick marks and the
//! values printed next to the large ones.

/// Number of large ticks (and labels) on the dial.
pub const LARGE_TICK_COUNT: usize = 11;
/// Gauge angle of the first tick, in degrees.
pub const TICK_START_DEG: f64 = 45.0;
/// Exclusive upper bound used when stepping tick angles.
pub const TICK_STOP_DEG: f64 = 316.0;
pub const LARGE_TICK_STEP_DEG: f64 = 27.0;
pub const SMALL_TICK_STEP_DEG: f64 = 5.4;

/// Arithmetic progression `start, start + step, ...` strictly below `stop`.
///
/// Each element is computed as `start + i * step` rather than by repeated
/// addition so the last angle does not drift. A zero, negative or non-finite
/// step yields an empty range.
#[must_use]
pub fn stepped_range(start: f64, stop: f64, step: f64) -> Vec<f64> {
    let count = ((stop - start) / step).ceil();
    if !count.is_finite() || count <= 0.0 {
        return Vec::new();
    }
    (0..count as usize).map(|i| start + i as f64 * step).collect()
}

/// Angles, in degrees, of the large ticks: `45, 72, ..., 315`.
#[must_use]
pub fn large_tick_angles() -> Vec<f64> {
    stepped_range(TICK_START_DEG, TICK_STOP_DEG, LARGE_TICK_STEP_DEG)
}

/// Angles, in degrees, of the small ticks. The final point of the range
/// coincides with the last large tick and is skipped, leaving five small
/// ticks per large division.
#[must_use]
pub fn small_tick_angles() -> Vec<f64> {
    let mut angles = stepped_range(TICK_START_DEG, TICK_STOP_DEG, SMALL_TICK_STEP_DEG);
    angles.pop();
    angles
}

/// Values printed next to the large ticks, evenly spaced over
/// `[min_val, max_val]` in ten steps. Both endpoints are returned exactly.
#[must_use]
pub fn label_values(min_val: f64, max_val: f64) -> [f64; LARGE_TICK_COUNT] {
    let divisions = (LARGE_TICK_COUNT - 1) as f64;
    let span = max_val - min_val;
    std::array::from_fn(|i| match i {
        0 => min_val,
        i if i == LARGE_TICK_COUNT - 1 => max_val,
        i => min_val + span * i as f64 / divisions,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stepped_range_rejects_zero_step() {
        assert!(stepped_range(0.0, 10.0, 0.0).is_empty());
        assert!(stepped_range(10.0, 0.0, 1.0).is_empty());
    }

    #[test]
    fn small_ticks_skip_the_closing_angle() {
        let angles = small_tick_angles();
        assert_eq!(angles.len(), 50);
        assert!((angles[49] - (45.0 + 49.0 * 5.4)).abs() < 1e-9);
    }
}
