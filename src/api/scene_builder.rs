//! One-time static layout of a gauge.
//!
//! The scene keeps the three elements the animator rewrites (pointer,
//! readout, warning) apart from the static dial so each animation frame can
//! be composed without rebuilding arcs and ticks.

use crate::core::{
    AnnularSector, Point, deg_to_rad, format_compact_number, label_values, large_tick_angles,
    position_on_circle, rotate_translate, small_tick_angles, triangle_symbol,
};
use crate::render::{
    ArcPrimitive, Color, Fill, LinePrimitive, LinearGradient, PolygonPrimitive, RenderFrame,
    TextHAlign, TextPrimitive, Transform,
};

use crate::error::GaugeResult;

use super::GaugeConfig;

pub const LABEL_CLASS: &str = "values";
pub const BIG_TICK_CLASS: &str = "big-ticks";
pub const SMALL_TICK_CLASS: &str = "small-ticks";
pub const READOUT_CLASS: &str = "live-value";
pub const WARNING_CLASS: &str = "warning-status";

/// Arc angle, in degrees, where the dial starts and ends.
const DIAL_HALF_SWEEP_DEG: f64 = 135.0;
/// Labels sit this far inside the inner radius.
const LABEL_INSET: f64 = 25.0;
/// Labels are centered slightly below the dial center.
const LABEL_DROP: f64 = 5.0;
const AXIS_THICKNESS: f64 = 2.0;

/// Element ids for one gauge. Every id embeds the gauge id so several
/// gauges can share a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GaugeElementIds {
    pub gauge: String,
    pub left_gradient: String,
    pub right_gradient: String,
    pub pointer: String,
    pub readout_group: String,
    pub warning_group: String,
}

impl GaugeElementIds {
    #[must_use]
    pub fn new(gauge_id: &str) -> Self {
        Self {
            gauge: gauge_id.to_owned(),
            left_gradient: format!("lgrad1{gauge_id}gauge"),
            right_gradient: format!("lgrad2{gauge_id}gauge"),
            pointer: format!("{gauge_id}triangle"),
            readout_group: format!("{gauge_id}-current-val"),
            warning_group: format!("{gauge_id}-warning"),
        }
    }
}

/// Static drawing of one gauge plus the templates of its animated parts.
#[derive(Debug, Clone, PartialEq)]
pub struct GaugeScene {
    pub ids: GaugeElementIds,
    pub dial: RenderFrame,
    pub pointer: PolygonPrimitive,
    pub readout: TextPrimitive,
    pub warning: TextPrimitive,
}

impl GaugeScene {
    /// Full frame with the animated parts set to the given state.
    #[must_use]
    pub fn compose(
        &self,
        pointer_transform: Option<Transform>,
        readout_text: &str,
        warning_text: &str,
    ) -> RenderFrame {
        let mut pointer = self.pointer.clone();
        pointer.transform = pointer_transform;

        let mut readout = self.readout.clone();
        readout.text = readout_text.to_owned();

        let mut warning = self.warning.clone();
        warning.text = warning_text.to_owned();

        self.dial
            .clone()
            .with_polygon(pointer)
            .with_text(readout)
            .with_text(warning)
    }

    /// Strict geometry check of the static drawing. Label text is not
    /// inspected; use `GaugeConfig::validate_numeric` for the inputs.
    pub fn validate(&self) -> GaugeResult<()> {
        self.dial.validate()?;
        self.pointer.validate()?;
        self.readout.validate()?;
        self.warning.validate()
    }
}

/// Lays out the static gauge for `gauge_id`.
#[must_use]
pub fn build_gauge_scene(gauge_id: &str, config: &GaugeConfig) -> GaugeScene {
    let ids = GaugeElementIds::new(gauge_id);
    let size = config.size;
    let style = config.style;
    let viewport = size.viewport();
    let center = viewport.center();

    let mut dial = RenderFrame::new(viewport)
        .with_arc(ArcPrimitive::new(
            center,
            AnnularSector::from_degrees(
                size.inner_radius,
                size.outer_radius,
                -DIAL_HALF_SWEEP_DEG,
                0.0,
            ),
            Fill::Gradient(ids.left_gradient.clone()),
        ))
        .with_arc(ArcPrimitive::new(
            center,
            AnnularSector::from_degrees(
                size.inner_radius,
                size.outer_radius,
                0.0,
                DIAL_HALF_SWEEP_DEG,
            ),
            Fill::Gradient(ids.right_gradient.clone()),
        ))
        .with_gradient(
            LinearGradient::new(ids.left_gradient.clone(), 0.0, 1.0, 1.0, 0.0)
                .with_stop(0.0, config.palette.color1)
                .with_stop(0.5, config.palette.color2),
        )
        .with_gradient(
            LinearGradient::new(ids.right_gradient.clone(), 0.0, 0.15, 1.0, 0.85)
                .with_stop(0.5, config.palette.color2)
                .with_stop(1.0, config.palette.color3),
        )
        .with_arc(ArcPrimitive::new(
            center,
            AnnularSector::from_degrees(
                size.inner_radius - AXIS_THICKNESS,
                size.inner_radius,
                -DIAL_HALF_SWEEP_DEG,
                DIAL_HALF_SWEEP_DEG,
            ),
            Fill::Solid(style.axis_color),
        ));

    let labels = label_values(config.min_val, config.max_val);
    let big_tick_inset = size.inner_radius - size.big_tick_offset;
    for (angle, value) in large_tick_angles().into_iter().zip(labels) {
        let position = position_on_circle(
            size.inner_radius - LABEL_INSET,
            deg_to_rad(angle),
            center.x,
            center.y + LABEL_DROP,
        );
        dial = dial
            .with_text(
                TextPrimitive::new(
                    format_compact_number(value),
                    position.x,
                    position.y,
                    Some(size.label_font_px),
                    style.label_color,
                    TextHAlign::Center,
                )
                .with_class(LABEL_CLASS),
            )
            .with_line(
                tick_line(
                    center,
                    angle,
                    big_tick_inset,
                    style.big_tick_length,
                    style.big_tick_width,
                    style.big_tick_color,
                )
                .with_class(BIG_TICK_CLASS),
            );
    }

    let small_tick_inset = size.inner_radius - size.small_tick_offset;
    for angle in small_tick_angles() {
        dial = dial.with_line(
            tick_line(
                center,
                angle,
                small_tick_inset,
                style.small_tick_length,
                style.small_tick_width,
                style.small_tick_color,
            )
            .with_class(SMALL_TICK_CLASS),
        );
    }

    let pointer = PolygonPrimitive::new(triangle_symbol(size.pointer_area), style.pointer_color)
        .with_id(ids.pointer.clone());

    let readout = TextPrimitive::new(
        format!("{}{}", format_compact_number(config.min_val), config.unit),
        center.x,
        (f64::from(size.div_height) * size.text_coeff).trunc(),
        size.readout_font_px,
        style.readout_color,
        TextHAlign::Center,
    )
    .with_group_id(ids.readout_group.clone())
    .with_class(READOUT_CLASS);

    let warning = TextPrimitive::new(
        String::new(),
        center.x,
        f64::from(size.div_height) - size.warning_bottom_margin,
        size.warning_font_px,
        style.warning_color,
        TextHAlign::Center,
    )
    .with_group_id(ids.warning_group.clone())
    .with_class(WARNING_CLASS);

    GaugeScene {
        ids,
        dial,
        pointer,
        readout,
        warning,
    }
}

/// Diagonal tick drawn in a frame rotated by `angle + 45` around the center,
/// from `(inset, inset)` to `(inset + length, inset + length)`.
fn tick_line(
    center: Point,
    angle_deg: f64,
    inset: f64,
    length: f64,
    stroke_width: f64,
    color: Color,
) -> LinePrimitive {
    let rotation = angle_deg + 45.0;
    let start = rotate_translate(Point::new(inset, inset), rotation, center);
    let end = rotate_translate(Point::new(inset + length, inset + length), rotation, center);
    LinePrimitive::new(start.x, start.y, end.x, end.y, stroke_width, color)
}
