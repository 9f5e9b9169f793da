use cairo::{Context, Format, ImageSurface, LinearGradient as CairoLinearGradient};
use pango::FontDescription;
use std::f64::consts::FRAC_PI_2;

use crate::core::{Point, arc_point};
use crate::error::{GaugeError, GaugeResult};
use crate::render::{
    ArcPrimitive, Color, Fill, LinearGradient, RenderFrame, Renderer, TextHAlign,
};

/// Font size used for texts that leave sizing to the host.
pub const DEFAULT_FONT_SIZE_PX: f64 = 16.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub arcs_drawn: usize,
    pub lines_drawn: usize,
    pub polygons_drawn: usize,
    pub texts_drawn: usize,
    pub skipped_non_finite: usize,
}

/// Optional extension trait for renderers that can draw into an external Cairo
/// context (for example a GTK `DrawingArea` callback).
pub trait CairoContextRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> GaugeResult<()>;
}

/// Cairo + Pango + PangoCairo renderer backend.
///
/// Primitives with non-finite geometry are skipped and counted in
/// `CairoRenderStats::skipped_non_finite` instead of failing the frame.
#[derive(Debug)]
pub struct CairoRenderer {
    surface: ImageSurface,
    clear_color: Color,
    last_stats: CairoRenderStats,
}

impl CairoRenderer {
    pub fn new(width: i32, height: i32) -> GaugeResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(GaugeError::InvalidData(
                "cairo surface size must be > 0".to_owned(),
            ));
        }

        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        Ok(Self {
            surface,
            clear_color: Color::rgb(1.0, 1.0, 1.0),
            last_stats: CairoRenderStats::default(),
        })
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    pub fn set_clear_color(&mut self, color: Color) -> GaugeResult<()> {
        color.validate()?;
        self.clear_color = color;
        Ok(())
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    fn render_with_context(&mut self, context: &Context, frame: &RenderFrame) -> GaugeResult<()> {
        apply_color(context, self.clear_color);
        context
            .paint()
            .map_err(|err| map_backend_error("failed to clear surface", err))?;

        let mut stats = CairoRenderStats::default();

        for arc in &frame.arcs {
            if !arc.is_finite() {
                stats.skipped_non_finite += 1;
                continue;
            }
            append_sector_path(context, arc);
            match &arc.fill {
                Fill::Solid(color) => apply_color(context, *color),
                Fill::Gradient(id) => {
                    let gradient = frame.gradient(id).ok_or_else(|| {
                        GaugeError::InvalidData(format!("arc references unknown gradient `{id}`"))
                    })?;
                    let pattern = bounding_box_gradient(gradient, arc);
                    context
                        .set_source(&pattern)
                        .map_err(|err| map_backend_error("failed to set gradient", err))?;
                }
            }
            context
                .fill()
                .map_err(|err| map_backend_error("failed to fill arc", err))?;
            stats.arcs_drawn += 1;
        }

        for line in &frame.lines {
            if !line.is_finite() {
                stats.skipped_non_finite += 1;
                continue;
            }
            apply_color(context, line.color);
            context.set_line_width(line.stroke_width);
            context.move_to(line.x1, line.y1);
            context.line_to(line.x2, line.y2);
            context
                .stroke()
                .map_err(|err| map_backend_error("failed to stroke line", err))?;
            stats.lines_drawn += 1;
        }

        for polygon in &frame.polygons {
            if !polygon.is_finite() {
                stats.skipped_non_finite += 1;
                continue;
            }
            context
                .save()
                .map_err(|err| map_backend_error("failed to save context", err))?;
            if let Some(transform) = polygon.transform {
                context.translate(transform.translate.x, transform.translate.y);
                context.rotate(transform.rotate_deg.to_radians());
            }
            for (index, point) in polygon.points.iter().enumerate() {
                if index == 0 {
                    context.move_to(point.x, point.y);
                } else {
                    context.line_to(point.x, point.y);
                }
            }
            context.close_path();
            apply_color(context, polygon.fill);
            context
                .fill()
                .map_err(|err| map_backend_error("failed to fill polygon", err))?;
            context
                .restore()
                .map_err(|err| map_backend_error("failed to restore context", err))?;
            stats.polygons_drawn += 1;
        }

        for text in &frame.texts {
            if text.text.is_empty() {
                continue;
            }
            if !text.is_finite() {
                stats.skipped_non_finite += 1;
                continue;
            }
            let layout = pangocairo::functions::create_layout(context);
            let font_size = text.font_size_px.unwrap_or(DEFAULT_FONT_SIZE_PX);
            let font_description = FontDescription::from_string(&format!("Sans {font_size}px"));
            layout.set_font_description(Some(&font_description));
            layout.set_text(&text.text);

            let (text_width, _text_height) = layout.pixel_size();
            let x = match text.h_align {
                TextHAlign::Left => text.x,
                TextHAlign::Center => text.x - f64::from(text_width) / 2.0,
                TextHAlign::Right => text.x - f64::from(text_width),
            };
            let baseline = f64::from(layout.baseline()) / f64::from(pango::SCALE);

            apply_color(context, text.color);
            context.move_to(x, text.y - baseline);
            pangocairo::functions::show_layout(context, &layout);
            stats.texts_drawn += 1;
        }

        self.last_stats = stats;
        Ok(())
    }
}

impl Renderer for CairoRenderer {
    fn render(&mut self, frame: &RenderFrame) -> GaugeResult<()> {
        let context = Context::new(&self.surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        self.render_with_context(&context, frame)
    }
}

impl CairoContextRenderer for CairoRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> GaugeResult<()> {
        self.render_with_context(context, frame)
    }
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

// Arc angles start at 12 o'clock; cairo angles start at 3 o'clock.
fn append_sector_path(context: &Context, arc: &ArcPrimitive) {
    let sector = arc.sector;
    let start = sector.start_angle - FRAC_PI_2;
    let end = sector.end_angle - FRAC_PI_2;
    let (cx, cy) = (arc.center.x, arc.center.y);

    context.new_path();
    context.arc(cx, cy, sector.outer_radius, start, end);
    if sector.inner_radius > 0.0 {
        context.arc_negative(cx, cy, sector.inner_radius, end, start);
    } else {
        context.line_to(cx, cy);
    }
    context.close_path();
}

fn bounding_box_gradient(gradient: &LinearGradient, arc: &ArcPrimitive) -> CairoLinearGradient {
    let (min, max) = sector_bounds(arc);
    let width = max.x - min.x;
    let height = max.y - min.y;
    let pattern = CairoLinearGradient::new(
        min.x + gradient.x1 * width,
        min.y + gradient.y1 * height,
        min.x + gradient.x2 * width,
        min.y + gradient.y2 * height,
    );
    for stop in &gradient.stops {
        pattern.add_color_stop_rgba(
            stop.offset,
            stop.color.red,
            stop.color.green,
            stop.color.blue,
            stop.color.alpha,
        );
    }
    pattern
}

fn sector_bounds(arc: &ArcPrimitive) -> (Point, Point) {
    const SAMPLES: usize = 64;
    let sector = arc.sector;
    let mut min = Point::new(f64::INFINITY, f64::INFINITY);
    let mut max = Point::new(f64::NEG_INFINITY, f64::NEG_INFINITY);
    for radius in [sector.inner_radius, sector.outer_radius] {
        for step in 0..=SAMPLES {
            let t = step as f64 / SAMPLES as f64;
            let angle = sector.start_angle + (sector.end_angle - sector.start_angle) * t;
            let local = arc_point(radius, angle);
            let point = local.offset(arc.center.x, arc.center.y);
            min = Point::new(min.x.min(point.x), min.y.min(point.y));
            max = Point::new(max.x.max(point.x), max.y.max(point.y));
        }
    }
    (min, max)
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> GaugeError {
    GaugeError::InvalidData(format!("{prefix}: {err}"))
}
