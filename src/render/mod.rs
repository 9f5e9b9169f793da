mod frame;
mod null_renderer;
mod primitives;
mod svg_renderer;

pub use frame::RenderFrame;
pub use null_renderer::NullRenderer;
pub use primitives::{
    ArcPrimitive, Color, Fill, GradientStop, LinePrimitive, LinearGradient, PolygonPrimitive,
    TextHAlign, TextPrimitive, Transform,
};
pub use svg_renderer::{SvgRenderStats, SvgRenderer, arc_path_data};

use crate::error::GaugeResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized `RenderFrame`, so drawing code stays
/// isolated from gauge configuration and animation state.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> GaugeResult<()>;
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{
    CairoContextRenderer, CairoRenderStats, CairoRenderer, DEFAULT_FONT_SIZE_PX,
};
