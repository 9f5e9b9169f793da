//! Value transitions: pointer sweep, readout count-up and threshold warning.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::{
    GaugeScale, Point, deg_to_rad, format_grouped_integer, position_on_circle, round_half_up,
};
use crate::render::Transform;

use super::GaugeConfig;

pub const TRANSITION_DURATION: Duration = Duration::from_millis(1000);
pub const ABOVE_THRESHOLD_WARNING: &str = "Above Threshold!";
pub const BELOW_THRESHOLD_WARNING: &str = "Below Threshold!";

/// Time-to-progress curve applied before interpolating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Easing {
    /// Slow start and end, the usual browser transition curve.
    #[default]
    CubicInOut,
    Linear,
}

impl Easing {
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        match self {
            Self::Linear => t,
            Self::CubicInOut => {
                let t = t * 2.0;
                if t <= 1.0 {
                    t * t * t / 2.0
                } else {
                    let t = t - 2.0;
                    (t * t * t + 2.0) / 2.0
                }
            }
        }
    }
}

/// Warning shown for a requested value. Uses the unclamped value.
#[must_use]
pub fn threshold_warning(value: f64, min_val: f64, max_val: f64) -> &'static str {
    if value > max_val {
        ABOVE_THRESHOLD_WARNING
    } else if value < min_val {
        BELOW_THRESHOLD_WARNING
    } else {
        ""
    }
}

/// Pointer motion along the dial between two values.
///
/// Only the target is clamped into the range; a start value outside the
/// range (left over from a previous out-of-range readout) is used as is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerTween {
    from_normalized: f64,
    to_normalized: f64,
    radius: f64,
    center: Point,
}

impl PointerTween {
    #[must_use]
    pub fn new(from: f64, to: f64, config: &GaugeConfig) -> Self {
        let scale = config.scale();
        let to = scale.clamp(to);
        Self {
            from_normalized: scale.normalize(from),
            to_normalized: scale.normalize(to),
            radius: config.size.pointer_radius(),
            center: config.size.viewport().center(),
        }
    }

    #[must_use]
    pub fn normalized_endpoints(&self) -> (f64, f64) {
        (self.from_normalized, self.to_normalized)
    }

    /// Gauge angle, in degrees, at eased progress `t`.
    ///
    /// Rising and falling sweeps are computed separately; merging them into
    /// one signed expression changes the last-bit rounding of the end angle.
    #[must_use]
    pub fn angle_at(&self, t: f64) -> f64 {
        let normalized = if self.to_normalized >= self.from_normalized {
            let delta = self.to_normalized - self.from_normalized;
            delta * t + self.from_normalized
        } else {
            let delta = self.from_normalized - self.to_normalized;
            self.from_normalized - delta * t
        };
        GaugeScale::normalized_to_angle(normalized)
    }

    #[must_use]
    pub fn transform_at(&self, t: f64) -> Transform {
        let angle = self.angle_at(t);
        let position = position_on_circle(
            self.radius,
            deg_to_rad(angle),
            self.center.x,
            self.center.y,
        );
        Transform::new(position, angle)
    }
}

/// Numeric readout counting from one value to another.
#[derive(Debug, Clone, PartialEq)]
pub struct ReadoutTween {
    from: f64,
    to: f64,
    unit: String,
}

impl ReadoutTween {
    #[must_use]
    pub fn new(from: f64, to: f64, unit: impl Into<String>) -> Self {
        Self {
            from,
            to,
            unit: unit.into(),
        }
    }

    #[must_use]
    pub fn value_at(&self, t: f64) -> f64 {
        self.from * (1.0 - t) + self.to * t
    }

    /// Whole number as it appears on screen at `t`.
    #[must_use]
    pub fn displayed_value_at(&self, t: f64) -> f64 {
        round_half_up(self.value_at(t))
    }

    #[must_use]
    pub fn text_at(&self, t: f64) -> String {
        format!("{}{}", format_grouped_integer(self.value_at(t)), self.unit)
    }
}

/// State of the animated elements at one instant.
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionFrame {
    /// Linear time progress in `0..=1`.
    pub progress: f64,
    pub eased_progress: f64,
    pub pointer: Transform,
    pub readout_text: String,
    pub displayed_value: f64,
}

/// One animated move of a gauge from the value on screen to a new value.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    from: f64,
    to: f64,
    duration: Duration,
    easing: Easing,
    pointer: PointerTween,
    readout: ReadoutTween,
    warning: &'static str,
}

impl Transition {
    #[must_use]
    pub fn new(from: f64, to: f64, config: &GaugeConfig) -> Self {
        Self {
            from,
            to,
            duration: TRANSITION_DURATION,
            easing: Easing::default(),
            pointer: PointerTween::new(from, to, config),
            readout: ReadoutTween::new(from, to, config.unit.clone()),
            warning: threshold_warning(to, config.min_val, config.max_val),
        }
    }

    #[must_use]
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    #[must_use]
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    #[must_use]
    pub fn from_value(&self) -> f64 {
        self.from
    }

    #[must_use]
    pub fn to_value(&self) -> f64 {
        self.to
    }

    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    #[must_use]
    pub fn easing(&self) -> Easing {
        self.easing
    }

    /// Warning text, applied as soon as the transition starts.
    #[must_use]
    pub fn warning(&self) -> &'static str {
        self.warning
    }

    #[must_use]
    pub fn pointer(&self) -> &PointerTween {
        &self.pointer
    }

    #[must_use]
    pub fn progress(&self, elapsed: Duration) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).clamp(0.0, 1.0)
    }

    #[must_use]
    pub fn is_finished(&self, elapsed: Duration) -> bool {
        elapsed >= self.duration
    }

    #[must_use]
    pub fn frame_after(&self, elapsed: Duration) -> TransitionFrame {
        self.frame_at(self.progress(elapsed))
    }

    /// Frame at linear progress `progress`, clamped into `0..=1`.
    #[must_use]
    pub fn frame_at(&self, progress: f64) -> TransitionFrame {
        let progress = progress.clamp(0.0, 1.0);
        let eased = self.easing.apply(progress);
        TransitionFrame {
            progress,
            eased_progress: eased,
            pointer: self.pointer.transform_at(eased),
            readout_text: self.readout.text_at(eased),
            displayed_value: self.readout.displayed_value_at(eased),
        }
    }
}
