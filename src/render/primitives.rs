use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{AnnularSector, Point, format_compact_number};
use crate::error::{GaugeError, GaugeResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);

    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    #[must_use]
    pub const fn from_rgb8(red: u8, green: u8, blue: u8) -> Self {
        Self::rgb(
            red as f64 / 255.0,
            green as f64 / 255.0,
            blue as f64 / 255.0,
        )
    }

    /// CSS text for an opaque color, e.g. `rgb(255, 153, 102)`.
    #[must_use]
    pub fn to_css_string(self) -> String {
        let [red, green, blue] = [self.red, self.green, self.blue]
            .map(|channel| (channel.clamp(0.0, 1.0) * 255.0).round() as u8);
        if self.alpha >= 1.0 {
            format!("rgb({red}, {green}, {blue})")
        } else {
            format!(
                "rgba({red}, {green}, {blue}, {})",
                format_compact_number(self.alpha)
            )
        }
    }

    pub fn validate(self) -> GaugeResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(GaugeError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

/// `translate(x,y) rotate(deg)` applied to a primitive's local coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub translate: Point,
    pub rotate_deg: f64,
}

impl Transform {
    #[must_use]
    pub const fn new(translate: Point, rotate_deg: f64) -> Self {
        Self {
            translate,
            rotate_deg,
        }
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.translate.is_finite() && self.rotate_deg.is_finite()
    }

    /// SVG transform attribute text.
    #[must_use]
    pub fn to_svg_string(self) -> String {
        format!(
            "translate({},{}) rotate({})",
            format_compact_number(self.translate.x),
            format_compact_number(self.translate.y),
            format_compact_number(self.rotate_deg)
        )
    }
}

/// Draw command for one line segment in pixel space.
#[derive(Debug, Clone, PartialEq)]
pub struct LinePrimitive {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stroke_width: f64,
    pub color: Color,
    pub class: Option<&'static str>,
}

impl LinePrimitive {
    #[must_use]
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64, stroke_width: f64, color: Color) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            stroke_width,
            color,
            class: None,
        }
    }

    #[must_use]
    pub fn with_class(mut self, class: &'static str) -> Self {
        self.class = Some(class);
        self
    }

    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.x1.is_finite() && self.y1.is_finite() && self.x2.is_finite() && self.y2.is_finite()
    }

    pub fn validate(&self) -> GaugeResult<()> {
        if !self.is_finite() {
            return Err(GaugeError::InvalidData(
                "line coordinates must be finite".to_owned(),
            ));
        }
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(GaugeError::InvalidData(
                "line stroke width must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// One color stop, `offset` in `0..=1`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GradientStop {
    pub offset: f64,
    pub color: Color,
}

impl GradientStop {
    #[must_use]
    pub const fn new(offset: f64, color: Color) -> Self {
        Self { offset, color }
    }
}

/// Linear gradient in bounding-box units: every coordinate is a fraction of
/// the filled shape's bounding box.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearGradient {
    pub id: String,
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stops: SmallVec<[GradientStop; 2]>,
}

impl LinearGradient {
    #[must_use]
    pub fn new(id: impl Into<String>, x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self {
            id: id.into(),
            x1,
            y1,
            x2,
            y2,
            stops: SmallVec::new(),
        }
    }

    #[must_use]
    pub fn with_stop(mut self, offset: f64, color: Color) -> Self {
        self.stops.push(GradientStop::new(offset, color));
        self
    }

    pub fn validate(&self) -> GaugeResult<()> {
        if self.id.is_empty() {
            return Err(GaugeError::InvalidData(
                "gradient id must not be empty".to_owned(),
            ));
        }
        for stop in &self.stops {
            if !(0.0..=1.0).contains(&stop.offset) {
                return Err(GaugeError::InvalidData(format!(
                    "gradient `{}` stop offset must be in [0, 1]",
                    self.id
                )));
            }
            stop.color.validate()?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Fill {
    Solid(Color),
    /// Reference to a `LinearGradient` in the same frame.
    Gradient(String),
}

/// Filled ring segment centered on `center`.
#[derive(Debug, Clone, PartialEq)]
pub struct ArcPrimitive {
    pub center: Point,
    pub sector: AnnularSector,
    pub fill: Fill,
}

impl ArcPrimitive {
    #[must_use]
    pub fn new(center: Point, sector: AnnularSector, fill: Fill) -> Self {
        Self {
            center,
            sector,
            fill,
        }
    }

    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.center.is_finite() && self.sector.is_finite()
    }

    pub fn validate(&self) -> GaugeResult<()> {
        if !self.is_finite() {
            return Err(GaugeError::InvalidData(
                "arc geometry must be finite".to_owned(),
            ));
        }
        if self.sector.inner_radius < 0.0 || self.sector.outer_radius < self.sector.inner_radius {
            return Err(GaugeError::InvalidData(
                "arc radii must satisfy 0 <= inner <= outer".to_owned(),
            ));
        }
        match &self.fill {
            Fill::Solid(color) => color.validate(),
            Fill::Gradient(id) if id.is_empty() => Err(GaugeError::InvalidData(
                "arc gradient reference must not be empty".to_owned(),
            )),
            Fill::Gradient(_) => Ok(()),
        }
    }
}

/// Closed filled polygon in local coordinates, placed by `transform`.
///
/// A polygon without a transform sits at the surface origin.
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonPrimitive {
    pub id: Option<String>,
    pub points: SmallVec<[Point; 3]>,
    pub transform: Option<Transform>,
    pub fill: Color,
}

impl PolygonPrimitive {
    #[must_use]
    pub fn new(points: impl IntoIterator<Item = Point>, fill: Color) -> Self {
        Self {
            id: None,
            points: points.into_iter().collect(),
            transform: None,
            fill,
        }
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.points.iter().all(|point| point.is_finite())
            && self.transform.is_none_or(Transform::is_finite)
    }

    pub fn validate(&self) -> GaugeResult<()> {
        if self.points.len() < 3 {
            return Err(GaugeError::InvalidData(
                "polygon needs at least three points".to_owned(),
            ));
        }
        if !self.is_finite() {
            return Err(GaugeError::InvalidData(
                "polygon geometry must be finite".to_owned(),
            ));
        }
        self.fill.validate()
    }
}

/// Horizontal text alignment relative to `TextPrimitive::x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextHAlign {
    Left,
    Center,
    Right,
}

/// Draw command for one label in pixel space.
///
/// `font_size_px: None` leaves the size to the host (stylesheet or renderer
/// default). Empty text is allowed: the warning line starts blank.
#[derive(Debug, Clone, PartialEq)]
pub struct TextPrimitive {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font_size_px: Option<f64>,
    pub color: Color,
    pub h_align: TextHAlign,
    pub group_id: Option<String>,
    pub class: Option<&'static str>,
}

impl TextPrimitive {
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        x: f64,
        y: f64,
        font_size_px: Option<f64>,
        color: Color,
        h_align: TextHAlign,
    ) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            font_size_px,
            color,
            h_align,
            group_id: None,
            class: None,
        }
    }

    #[must_use]
    pub fn with_group_id(mut self, group_id: impl Into<String>) -> Self {
        self.group_id = Some(group_id.into());
        self
    }

    #[must_use]
    pub fn with_class(mut self, class: &'static str) -> Self {
        self.class = Some(class);
        self
    }

    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    pub fn validate(&self) -> GaugeResult<()> {
        if !self.is_finite() {
            return Err(GaugeError::InvalidData(
                "text coordinates must be finite".to_owned(),
            ));
        }
        if let Some(size) = self.font_size_px {
            if !size.is_finite() || size <= 0.0 {
                return Err(GaugeError::InvalidData(
                    "font size must be finite and > 0".to_owned(),
                ));
            }
        }
        self.color.validate()
    }
}
