//! Polar/cartesian helpers shared by the scene builder and the animator.
//!
//! Angles follow two conventions:
//! - *gauge angles* (`position_on_circle`): 0 points straight down and grows
//!   clockwise through the left side, so 45..315 degrees sweeps the dial with a
//!   90 degree gap at the bottom.
//! - *arc angles* (`arc_point`, `AnnularSector`): 0 points straight up and grows
//!   clockwise, matching the usual d3 arc generator.

use serde::{Deserialize, Serialize};

use crate::core::types::Point;

/// Rounds half-way values towards positive infinity.
///
/// `f64::round` rounds half away from zero, which moves negative offsets one
/// pixel further out than the browser widget did.
#[must_use]
pub fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

#[must_use]
pub fn deg_to_rad(degrees: f64) -> f64 {
    degrees * std::f64::consts::PI / 180.0
}

/// Returns the pixel position on the edge of a circle.
///
/// `radius` may be negative to mirror the point through the center. Only the
/// offsets from the center are rounded to whole pixels; a fractional center
/// stays fractional.
#[must_use]
pub fn position_on_circle(radius: f64, angle_rad: f64, center_x: f64, center_y: f64) -> Point {
    let sin = round_half_up(angle_rad.sin() * radius);
    let cos = round_half_up(angle_rad.cos() * radius);
    Point::new(center_x - sin, center_y + cos)
}

/// Point at `angle_rad` on an arc of `radius`, relative to the arc center.
#[must_use]
pub fn arc_point(radius: f64, angle_rad: f64) -> Point {
    Point::new(radius * angle_rad.sin(), -radius * angle_rad.cos())
}

/// Applies `translate(translate) rotate(rotate_deg)` to a local point, the
/// way an SVG group transform maps its children into the parent space.
#[must_use]
pub fn rotate_translate(local: Point, rotate_deg: f64, translate: Point) -> Point {
    let (sin, cos) = deg_to_rad(rotate_deg).sin_cos();
    Point::new(
        translate.x + local.x * cos - local.y * sin,
        translate.y + local.x * sin + local.y * cos,
    )
}

/// Ring segment between two radii, in arc angles.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnnularSector {
    pub inner_radius: f64,
    pub outer_radius: f64,
    pub start_angle: f64,
    pub end_angle: f64,
}

impl AnnularSector {
    #[must_use]
    pub const fn new(inner_radius: f64, outer_radius: f64, start_angle: f64, end_angle: f64) -> Self {
        Self {
            inner_radius,
            outer_radius,
            start_angle,
            end_angle,
        }
    }

    /// Builds a sector from angles given in degrees.
    #[must_use]
    pub fn from_degrees(inner_radius: f64, outer_radius: f64, start_deg: f64, end_deg: f64) -> Self {
        Self::new(
            inner_radius,
            outer_radius,
            deg_to_rad(start_deg),
            deg_to_rad(end_deg),
        )
    }

    #[must_use]
    pub fn sweep(self) -> f64 {
        (self.end_angle - self.start_angle).abs()
    }

    #[must_use]
    pub fn is_large_arc(self) -> bool {
        self.sweep() > std::f64::consts::PI
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.inner_radius.is_finite()
            && self.outer_radius.is_finite()
            && self.start_angle.is_finite()
            && self.end_angle.is_finite()
    }

    /// Outline corners: outer start, outer end, inner end, inner start.
    #[must_use]
    pub fn corners(self) -> [Point; 4] {
        [
            arc_point(self.outer_radius, self.start_angle),
            arc_point(self.outer_radius, self.end_angle),
            arc_point(self.inner_radius, self.end_angle),
            arc_point(self.inner_radius, self.start_angle),
        ]
    }
}

/// Vertices of an upward-pointing triangle of the given area, centered on
/// its centroid-ish origin like the d3 triangle symbol.
#[must_use]
pub fn triangle_symbol(area: f64) -> [Point; 3] {
    let sqrt3 = 3.0_f64.sqrt();
    let y = -(area / (sqrt3 * 3.0)).sqrt();
    [
        Point::new(0.0, y * 2.0),
        Point::new(-sqrt3 * y, -y),
        Point::new(sqrt3 * y, -y),
    ]
}
